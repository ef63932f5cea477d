use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid project name '{name}': it must start with a letter and contain only letters, digits, '-' or '_'")]
    InvalidName { name: String },

    #[error("cannot create directory '{}': {source}", path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot remove directory '{}': {source}", path.display())]
    DirectoryRemovalFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write file '{}': {source}", path.display())]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot copy '{}' to '{}': {source}", from.display(), to.display())]
    FileCopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no choice {index} for prompt '{prompt}'")]
    InvalidSelection { prompt: String, index: usize },

    #[error("command '{command}' failed: {reason}")]
    CommandExecutionFailed { command: String, reason: String },

    #[error("cannot read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot serialize package.json: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    pub fn command(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CommandExecutionFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }
}
