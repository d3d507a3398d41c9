//! Emubox CLI Library
//!
//! This crate provides the command-line interface for emubox, a launcher for
//! 86Box configurations. It handles argument parsing, the interactive
//! selection menu, and dispatching to the config store and launcher.
//!
//! # Key Features
//!
//! - **Interactive Config Selection**: Paged terminal menu for picking a config
//! - **Config Management**: Create, delete and purge configs from the command line
//! - **Launch Options**: Language, fullscreen and settings modes for 86Box
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`menu`]: Interactive selection menu
//!
//! # Examples
//!
//! ```bash
//! # Create the config directory
//! emubox --init
//!
//! # Create and delete configs
//! emubox --new win98 dos622
//! emubox --delete dos622
//!
//! # Pick a config and launch it fullscreen in German
//! emubox --select --fullscreen --language de-DE
//!
//! # Pick a config and open its settings
//! emubox --settings
//! ```

pub mod cli_args;
pub mod menu;
