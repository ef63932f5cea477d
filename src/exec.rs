use std::{
    path::Path,
    process::{Command, Stdio},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error::Error, report::Reporter, Result};

/// Something able to run the scaffold's shell commands in a directory.
pub trait CommandRunner {
    fn run(&mut self, command: &str, cwd: &Path) -> Result<()>;
}

/// Runs commands for real through [`execute`].
#[derive(Debug, Clone)]
pub struct ShellRunner {
    reporter: Reporter,
}

impl ShellRunner {
    pub fn new(reporter: Reporter) -> Self {
        Self { reporter }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str, cwd: &Path) -> Result<()> {
        execute(&self.reporter, command, cwd)
    }
}

/// Runs `command` in `cwd` and blocks until it exits.
///
/// The command line is split like a POSIX shell would split it, but no shell
/// is spawned. Output is swallowed; stderr only ends up in the error when the
/// command fails.
pub fn execute(reporter: &Reporter, command: &str, cwd: &Path) -> Result<()> {
    let words = shell_words::split(command).map_err(|e| Error::command(command, e.to_string()))?;
    let (program, args) = words
        .split_first()
        .ok_or_else(|| Error::command(command, "empty command"))?;

    let spinner = spinner(command);
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output();
    spinner.finish_and_clear();

    let output = output.map_err(|e| Error::command(command, e.to_string()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match output.status.code() {
            Some(code) if stderr.trim().is_empty() => format!("exited with status {code}"),
            Some(code) => format!("exited with status {code}: {}", stderr.trim()),
            None => "terminated by a signal".to_string(),
        };
        return Err(Error::command(command, reason));
    }

    reporter.success(format!("Command '{command}' has been successfully executed."));

    Ok(())
}

fn spinner(command: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Running `{command}`…"));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn successful_command_is_reported_when_verbose() {
        let tmp = tempfile::tempdir().unwrap();
        let reporter = Reporter::capturing(true);

        execute(&reporter, "touch created.txt", tmp.path()).unwrap();
        assert!(tmp.path().join("created.txt").is_file());
        assert_eq!(
            reporter.lines(),
            vec!["Command 'touch created.txt' has been successfully executed.".to_string()]
        );
    }

    #[test]
    fn quoted_arguments_stay_together() {
        let tmp = tempfile::tempdir().unwrap();
        let reporter = Reporter::capturing(false);

        execute(&reporter, "touch 'with space.txt'", tmp.path()).unwrap();
        assert!(tmp.path().join("with space.txt").is_file());
        assert!(reporter.lines().is_empty());
    }

    #[test]
    fn non_zero_exit_carries_status_and_stderr() {
        let tmp = tempfile::tempdir().unwrap();
        let reporter = Reporter::capturing(true);

        let err = execute(&reporter, "ls does-not-exist", tmp.path()).unwrap_err();
        match err {
            Error::CommandExecutionFailed { command, reason } => {
                assert_eq!(command, "ls does-not-exist");
                assert!(reason.starts_with("exited with status"), "{reason}");
                assert!(reason.contains("does-not-exist"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(reporter.lines().is_empty());
    }

    #[test]
    fn missing_binary_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let reporter = Reporter::capturing(false);

        let err = execute(&reporter, "definitely-not-a-real-binary --flag", tmp.path()).unwrap_err();
        assert!(matches!(err, Error::CommandExecutionFailed { .. }));
    }

    #[test]
    fn empty_and_unbalanced_commands_fail() {
        let tmp = tempfile::tempdir().unwrap();
        let reporter = Reporter::capturing(false);

        for command in ["", "   ", "echo 'unterminated"] {
            let err = execute(&reporter, command, tmp.path()).unwrap_err();
            assert!(matches!(err, Error::CommandExecutionFailed { .. }), "{command:?}");
        }
    }
}
