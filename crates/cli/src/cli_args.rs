//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure and resolves it
//! into the single action emubox runs, using the `clap` crate.

use clap::{ArgGroup, Parser};
use emubox_core::launcher::LaunchOptions;

/// The action selected on the command line.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Action {
    Init,
    New(Vec<String>),
    Delete(Vec<String>),
    Purge,
    /// Pick a config from the menu and launch 86Box with it
    Select,
    /// Pick a config from the menu and open its 86Box settings window
    Settings,
}

/// Command-line arguments for the emubox launcher.
///
/// Exactly one action flag must be given; the remaining options modify how
/// 86Box is launched or where files are found.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use emubox_cli::cli_args::{Action, Args};
///
/// let args = Args::parse_from(["emubox", "--select", "--fsr"]);
/// assert_eq!(args.action(), Action::Select);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "emubox", term_width = 0)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["init", "new", "delete", "purge", "select", "settings"]),
))]
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Initialize the emubox config directory.
    #[arg(long, action)]
    pub init: bool,

    /// Create one or more new configuration files.
    ///
    /// `.cfg` is appended to names that do not already contain it.
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub new: Vec<String>,

    /// Delete one or more existing configuration files.
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub delete: Vec<String>,

    /// Purge all configuration files.
    #[arg(long, action)]
    pub purge: bool,

    /// Select a configuration from a menu and launch 86Box with it.
    #[arg(long, action)]
    pub select: bool,

    /// Select a configuration from a menu and open the 86Box settings panel.
    ///
    /// Language and fullscreen options are ignored.
    #[arg(long, action)]
    pub settings: bool,

    /// Enable fullscreen before launching 86Box.
    #[arg(long, visible_alias = "fsr", action)]
    pub fullscreen: bool,

    /// Set a language before launching 86Box.
    #[arg(long, value_name = "TAG")]
    pub language: Option<String>,

    /// Path to the config directory.
    ///
    /// If not provided, defaults to `~/.emubox`.
    #[arg(long, short = 'c')]
    pub store_path: Option<String>,

    /// Path to the 86Box binary.
    ///
    /// If not provided, `$EMUBOX_86BOX` is used, then `./86Box.AppImage`.
    #[arg(long, short = 'b')]
    pub launcher_path: Option<String>,
}

impl Args {
    /// Returns the action requested on the command line.
    #[must_use]
    pub fn action(&self) -> Action {
        if self.init {
            Action::Init
        } else if !self.new.is_empty() {
            Action::New(self.new.clone())
        } else if !self.delete.is_empty() {
            Action::Delete(self.delete.clone())
        } else if self.purge {
            Action::Purge
        } else if self.settings {
            Action::Settings
        } else {
            Action::Select
        }
    }

    /// Launch options passed through to 86Box for the chosen config.
    #[must_use]
    pub fn launch_options(&self) -> LaunchOptions {
        if self.settings {
            return LaunchOptions {
                settings: true,
                ..LaunchOptions::default()
            };
        }

        LaunchOptions {
            language: self.language.clone(),
            fullscreen: self.fullscreen,
            settings: false,
        }
    }
}
