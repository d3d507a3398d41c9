//! Path configuration for emubox.
//!
//! This module resolves the config store directory and the 86Box binary
//! location, expanding shell variables like `~` in paths.

use std::env;

use crate::error::{Error, Result};

/// Default location of the config store directory
const DEFAULT_STORE_PATH: &str = "~/.emubox";

/// Default path of the 86Box binary
pub const DEFAULT_LAUNCHER_PATH: &str = "./86Box.AppImage";

/// Environment variable that overrides the 86Box binary location
pub const LAUNCHER_PATH_ENV: &str = "EMUBOX_86BOX";

/// File extension given to newly created configs
pub const CONFIG_EXTENSION: &str = ".cfg";

fn expand(path: &str) -> Result<String> {
    let expanded = shellexpand::tilde(path).to_string();

    // `tilde` leaves the `~` in place when no home directory can be found
    if expanded.starts_with('~') {
        return Err(Error::HomeNotSet);
    }

    Ok(expanded)
}

/// Resolves the config store directory.
///
/// If a custom path is provided, uses that path. Otherwise, uses
/// `~/.emubox`. Shell expansions like `~` are resolved.
///
/// # Errors
///
/// Returns [`Error::HomeNotSet`] if `~` cannot be expanded.
///
/// # Examples
///
/// ```
/// use emubox_core::config::get_store_path;
///
/// let custom = get_store_path(&Some("/srv/emubox".to_string())).unwrap();
/// assert_eq!(custom, "/srv/emubox");
/// ```
pub fn get_store_path(store_path_arg: &Option<String>) -> Result<String> {
    let store_path = match store_path_arg {
        Some(store_path) => store_path,
        None => DEFAULT_STORE_PATH,
    };

    expand(store_path)
}

/// Resolves the 86Box binary path.
///
/// Precedence is the command-line argument, then the `EMUBOX_86BOX`
/// environment variable, then [`DEFAULT_LAUNCHER_PATH`].
///
/// # Errors
///
/// Returns [`Error::HomeNotSet`] if `~` cannot be expanded.
pub fn get_launcher_path(launcher_path_arg: &Option<String>) -> Result<String> {
    let launcher_path = match launcher_path_arg {
        Some(launcher_path) => launcher_path.clone(),
        None => env::var(LAUNCHER_PATH_ENV).unwrap_or_else(|_| DEFAULT_LAUNCHER_PATH.to_string()),
    };

    expand(&launcher_path)
}
