use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("Manifest entry not found: {}", .0.display())]
    ManifestEntryMissing(PathBuf),

    #[error("Failed to copy {}: {source}", .path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write archive {}: {reason}", .path.display())]
    ArchiveWrite { path: PathBuf, reason: String },

    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }

    pub fn copy(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Copy {
            path: path.into(),
            source,
        }
    }

    pub fn archive_write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::ArchiveWrite {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Custom(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Custom(err)
    }
}
