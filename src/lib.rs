pub mod config;
pub mod error;
pub mod exec;
pub mod fs;
pub mod manifest;
pub mod naming;
pub mod prompt;
pub mod report;

use std::{
    env,
    path::{Component, Path, PathBuf},
};

use clap::Args;

pub use crate::{
    config::ScaffoldConfig,
    error::{Error, Result},
    exec::{execute, CommandRunner, ShellRunner},
    manifest::{License, PackageJson},
    naming::{sanitize, validate, Scope},
    prompt::{DialoguerPrompter, Prompter},
    report::Reporter,
};

#[derive(Debug, Clone, Default, Args)]
pub struct Opts {
    /// Log every filesystem operation and command that succeeds
    #[arg(short, long)]
    pub verbose: bool,
    /// Specify the name of your generated project (and so skip the prompt asking for it)
    #[arg(short, long)]
    pub name: Option<String>,
    /// Specify the directory the project is created in
    #[arg(short = 'd', long)]
    pub target_directory: Option<PathBuf>,
    /// Specify where static files and .scaffold.toml are read from
    #[arg(short, long)]
    pub template_directory: Option<PathBuf>,
    /// Specify a configuration file instead of <template-directory>/.scaffold.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Override target directory if it exists
    #[arg(short, long)]
    pub force: bool,
    /// Do not run `git init`
    #[arg(long)]
    pub no_git: bool,
    /// Do not run any npm or npx command
    #[arg(long)]
    pub no_npm: bool,
}

/// Everything a scaffold run needs to know, resolved once from [`Opts`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub verbose: bool,
    pub name: Option<String>,
    pub target_dir: PathBuf,
    pub template_dir: PathBuf,
    pub force: bool,
    pub git: bool,
    pub npm: bool,
    pub config: ScaffoldConfig,
}

impl Settings {
    pub fn from_opts(opts: Opts) -> Result<Self> {
        let current_dir = env::current_dir().unwrap_or_else(|_| ".".into());
        let template_dir = opts
            .template_directory
            .unwrap_or_else(|| current_dir.clone());
        let config = ScaffoldConfig::load(opts.config.as_deref(), &template_dir)?;

        Ok(Self {
            verbose: opts.verbose,
            name: opts.name,
            target_dir: opts.target_directory.unwrap_or(current_dir),
            template_dir,
            force: opts.force,
            git: !opts.no_git,
            npm: !opts.no_npm,
            config,
        })
    }
}

/// The answers given for one project, plus the names derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub name: String,
    pub organization: Option<String>,
    pub description: String,
    pub license: License,
    pub author: String,
    pub directory_name: String,
    pub file_name: String,
}

impl ScaffoldRequest {
    pub fn new(
        name: impl Into<String>,
        organization: Option<String>,
        description: impl Into<String>,
        license: License,
        author: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            directory_name: sanitize(Scope::Directory, &name),
            file_name: sanitize(Scope::File, &name),
            name,
            organization: organization.filter(|org| !org.is_empty()),
            description: description.into(),
            license,
            author: author.into(),
        }
    }

    /// `@organization/name` when an organization was given, `name` otherwise.
    pub fn package_name(&self) -> String {
        match &self.organization {
            Some(org) => format!("@{}/{}", sanitize(Scope::File, org), self.file_name),
            None => self.file_name.clone(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct Generated {
    pub request: ScaffoldRequest,
    pub path: PathBuf,
}

pub struct Scaffold {
    settings: Settings,
    reporter: Reporter,
}

impl Scaffold {
    pub fn new(opts: Opts) -> Result<Self> {
        Ok(Self::from_settings(Settings::from_opts(opts)?))
    }

    pub fn from_settings(settings: Settings) -> Self {
        let reporter = Reporter::new(settings.verbose);
        Self { settings, reporter }
    }

    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Runs with terminal prompts and real commands.
    pub fn scaffold(&self) -> Result<Generated> {
        let mut runner = ShellRunner::new(self.reporter.clone());
        self.scaffold_with(&mut DialoguerPrompter, &mut runner)
    }

    pub fn request(&self, prompter: &mut dyn Prompter) -> Result<ScaffoldRequest> {
        if let Some(name) = &self.settings.name {
            if !validate(name) {
                return Err(Error::invalid_name(name));
            }
        }

        let organization = prompter.name("Organization", true)?;
        let name = match &self.settings.name {
            Some(name) => name.clone(),
            None => prompter.name("Project Name", false)?,
        };
        let description = prompter.text("Description")?;
        let author = prompter.text("Author")?;
        let licenses: Vec<String> = License::ALL.iter().map(ToString::to_string).collect();
        let idx_selected = prompter.select("License", &licenses, 0)?;
        let license = License::ALL
            .get(idx_selected)
            .copied()
            .ok_or_else(|| Error::InvalidSelection {
                prompt: "License".to_string(),
                index: idx_selected,
            })?;

        Ok(ScaffoldRequest::new(
            name,
            Some(organization),
            description,
            license,
            author,
        ))
    }

    pub fn scaffold_with(
        &self,
        prompter: &mut dyn Prompter,
        runner: &mut dyn CommandRunner,
    ) -> Result<Generated> {
        let request = self.request(prompter)?;
        let config = &self.settings.config;
        let dir_path = self.settings.target_dir.join(&request.directory_name);

        if self.settings.force && dir_path.exists() {
            std::fs::remove_dir_all(&dir_path).map_err(|source| {
                Error::DirectoryRemovalFailed {
                    path: dir_path.clone(),
                    source,
                }
            })?;
        }
        fs::make_directory(&self.reporter, &dir_path)?;
        fs::make_directory(&self.reporter, &dir_path.join("src"))?;
        self.copy_static_files(&dir_path)?;

        if self.settings.git {
            runner.run("git init", &dir_path)?;
        }
        if self.settings.npm {
            runner.run("npm init -y", &dir_path)?;
        }

        let package = PackageJson::new(&request, config);
        fs::write_file(
            &self.reporter,
            &dir_path.join("package.json"),
            package.to_pretty_json()?,
        )?;

        if self.settings.npm {
            if !config.dependencies.is_empty() {
                let command = format!("npm install {}", shell_words::join(&config.dependencies));
                runner.run(&command, &dir_path)?;
            }
            if !config.dev_dependencies.is_empty() {
                let command = format!(
                    "npm install --save-dev {}",
                    shell_words::join(&config.dev_dependencies)
                );
                runner.run(&command, &dir_path)?;
            }
        }

        fs::write_file(
            &self.reporter,
            &dir_path.join("serverless.yml"),
            format!(
                "# Serverless Framework configuration for {}\n",
                request.package_name()
            ),
        )?;

        if self.settings.npm && config.typescript {
            runner.run("npx tsc --init", &dir_path)?;
        }

        Ok(Generated {
            request,
            path: dir_path,
        })
    }

    fn copy_static_files(&self, dir_path: &Path) -> Result<()> {
        for relative in &self.settings.config.copy {
            if !is_contained(relative) {
                self.reporter.warn(format!(
                    "File '{}' is outside of the project, skipping…",
                    relative.display()
                ));
                continue;
            }
            let source = self.settings.template_dir.join(relative);
            if !source.is_file() {
                self.reporter.warn(format!(
                    "File '{}' does not exist, skipping…",
                    source.display()
                ));
                continue;
            }

            let destination = dir_path.join(relative);
            if let Some(parent) = relative.parent() {
                let mut current = dir_path.to_path_buf();
                for component in parent.components() {
                    current.push(component);
                    if !current.is_dir() {
                        fs::make_directory(&self.reporter, &current)?;
                    }
                }
            }
            fs::copy_file(&self.reporter, &source, &destination)?;
        }

        Ok(())
    }
}

/// Relative path that cannot climb out of the directory it is joined to.
fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
        && path.components().next().is_some()
}
