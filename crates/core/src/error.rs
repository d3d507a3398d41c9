use log::debug;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("$HOME environment variable is not set.")]
    HomeNotSet,

    #[error("Config directory `{}` could not be read: {}", .path, .original)]
    StoreUnavailable {
        path: String,
        original: std::io::Error,
    },

    #[error("Config directory `{}` already exists.", .path)]
    StoreAlreadyExists { path: String },

    #[error("No configs are available.")]
    EmptySelection,

    #[error("Config index {} is out of range for the selection menu.", .0)]
    IndexOutOfRange(usize),

    #[error("Terminal error: {}", .0)]
    RenderFailure(#[from] std::io::Error),

    #[error("IO error {} `{}`: {}", .action, .path, .original)]
    Io {
        action: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Invalid config name: name may not be empty")]
    EmptyEntryName,

    #[error("Invalid config name `{}`: name may not start with `-` or contain path separators", .0)]
    InvalidEntryName(String),

    #[error("File \"{}\" already exists.", .0)]
    EntryAlreadyExists(String),

    #[error("Unknown config file: {}", .0)]
    UnknownEntry(String),

    #[error("Could not find 86Box binary at `{}`.", .path)]
    LauncherNotFound { path: String },

    #[error("Failed to launch `{}`: {}", .path, .original)]
    Launch {
        path: String,
        original: std::io::Error,
    },
}

impl Error {
    pub fn store_unavailable(path: String, original: std::io::Error) -> Self {
        debug!("Config directory `{path}` is unavailable: {original}");
        Self::StoreUnavailable { path, original }
    }

    pub fn io_error(action: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            action,
            path,
            original,
        }
    }

    pub fn launch_error(path: String, original: std::io::Error) -> Self {
        Self::Launch { path, original }
    }

    /// Whether this error only reports a condition to the user and should not
    /// fail the process.
    #[must_use]
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::EmptySelection)
    }
}
