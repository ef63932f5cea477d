use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::Error, Result};

/// Name of the optional configuration file looked up in the template directory.
pub const CONFIG_FILE: &str = ".scaffold.toml";

/// What goes into a scaffold besides the answers to the prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    pub version: String,
    pub main: String,
    pub keywords: Vec<String>,
    pub scripts: IndexMap<String, String>,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    /// Files copied from the template directory, relative to it.
    pub copy: Vec<PathBuf>,
    pub typescript: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        let scripts = [
            ("build", "tsc"),
            ("clean", "rimraf dist"),
            ("deploy", "serverless deploy"),
            ("postinstall", "npm run build"),
            ("prepare", "husky install"),
            ("start", "serverless offline start"),
        ]
        .into_iter()
        .map(|(name, script)| (name.to_string(), script.to_string()))
        .collect();

        Self {
            version: "0.1.0".to_string(),
            main: "dist/index.js".to_string(),
            keywords: Vec::new(),
            scripts,
            dependencies: strings(&["@middy/core", "source-map-support"]),
            dev_dependencies: strings(&[
                "@commitlint/cli",
                "@commitlint/config-conventional",
                "@types/aws-lambda",
                "@types/node",
                "husky",
                "rimraf",
                "serverless",
                "serverless-offline",
                "typescript",
            ]),
            copy: [".gitignore", ".nvmrc", "commitlint.config.js", ".husky/commit-msg"]
                .into_iter()
                .map(PathBuf::from)
                .collect(),
            typescript: true,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

impl ScaffoldConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `explicit` when given, otherwise the template directory's
    /// `.scaffold.toml` if there is one, otherwise the defaults.
    pub fn load(explicit: Option<&Path>, template_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let candidate = template_dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
