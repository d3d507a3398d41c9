//! Emubox Core Library
//!
//! This crate provides the core functionality for emubox, a small launcher
//! that keeps a directory of 86Box configuration files and starts 86Box
//! against one of them.
//!
//! # Key Features
//!
//! - **Config Store**: List, create, delete and purge configs in `~/.emubox`
//! - **Launcher**: Start 86Box detached, with language, fullscreen or settings options
//! - **Configuration Management**: Resolve store and binary paths
//! - **Error Handling**: One error type covering every failure mode
//!
//! # Examples
//!
//! Listing the configs of a store:
//!
//! ```no_run
//! use emubox_core::config::get_store_path;
//! use emubox_core::store::ConfigStore;
//!
//! let store = ConfigStore::new(get_store_path(&None)?);
//! for name in store.list_entries()? {
//!     println!("Config: {}", name);
//! }
//! # Ok::<(), emubox_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod launcher;
pub mod store;
