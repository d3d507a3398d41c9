//! Config store handling for emubox.
//!
//! The store is a flat directory of configuration files. This module lists
//! the selectable entries and creates, deletes and purges them by name.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, info, warn};

use crate::config::CONFIG_EXTENSION;
use crate::error::Error::{
    EmptyEntryName, EntryAlreadyExists, InvalidEntryName, StoreAlreadyExists, UnknownEntry,
};
use crate::error::{Error, Result};

/// Checks that a config name can be used as a file name inside the store.
///
/// # Errors
///
/// Returns [`EmptyEntryName`] for an empty name and [`InvalidEntryName`] if
/// the name starts with `-` or contains `/` or `\`.
pub fn validate_entry_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EmptyEntryName);
    }

    if name.starts_with('-') || name.contains('/') || name.contains('\\') {
        return Err(InvalidEntryName(name.to_string()));
    }

    Ok(())
}

/// A directory of named configuration files.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn display_root(&self) -> String {
        self.root.display().to_string()
    }

    fn read_store(&self) -> Result<fs::ReadDir> {
        fs::read_dir(&self.root).map_err(|e| Error::store_unavailable(self.display_root(), e))
    }

    /// Creates the store directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreAlreadyExists`] if the directory is already there, or an
    /// IO error if it cannot be created.
    pub fn init(&self) -> Result<()> {
        let mut builder = fs::DirBuilder::new();

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }

        match builder.create(&self.root) {
            Ok(()) => {
                info!("Created config directory `{}`", self.display_root());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(StoreAlreadyExists {
                path: self.display_root(),
            }),
            Err(e) => Err(Error::io_error(
                "creating directory".to_string(),
                self.display_root(),
                e,
            )),
        }
    }

    /// Lists the selectable entries of the store.
    ///
    /// Only regular files are returned; directories, symlinks and other
    /// special files are skipped, as are names that are not valid UTF-8.
    /// The result is sorted byte-wise ascending and contains no duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreUnavailable`] if the directory cannot be opened
    /// or read.
    pub fn list_entries(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for dir_entry in self.read_store()? {
            let dir_entry =
                dir_entry.map_err(|e| Error::store_unavailable(self.display_root(), e))?;

            let file_type = dir_entry
                .file_type()
                .map_err(|e| Error::store_unavailable(self.display_root(), e))?;

            // Only normal files are allowed
            if !file_type.is_file() {
                debug!("Skipping non-file entry {:?}", dir_entry.file_name());
                continue;
            }

            match dir_entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => warn!("Skipping config with a non UTF-8 name: {name:?}"),
            }
        }

        let names: Vec<String> = names.into_iter().sorted().dedup().collect();
        debug!("Found {} configs in `{}`", names.len(), self.display_root());

        Ok(names)
    }

    /// Resolves a listed entry name to its full path.
    ///
    /// Every name returned by [`ConfigStore::list_entries`] resolves.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownEntry`] if the file no longer exists, or an invalid
    /// name error for names that do not stay inside the store.
    pub fn entry_path(&self, name: &str) -> Result<PathBuf> {
        // Listed names may start with `-` or hold `\`; only reject names that
        // would leave the store
        if name.is_empty() {
            return Err(EmptyEntryName);
        }
        if name == "." || name == ".." || name.contains('/') {
            return Err(InvalidEntryName(name.to_string()));
        }

        let path = self.root.join(name);
        if !path.exists() {
            return Err(UnknownEntry(name.to_string()));
        }

        Ok(path)
    }

    /// Creates a new, empty config.
    ///
    /// The `.cfg` extension is appended unless the name already contains it.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid, the file already exists, or
    /// it cannot be created.
    pub fn create(&self, name: &str) -> Result<PathBuf> {
        validate_entry_name(name)?;

        let file_name = if name.contains(CONFIG_EXTENSION) {
            name.to_string()
        } else {
            format!("{name}{CONFIG_EXTENSION}")
        };
        let path = self.root.join(&file_name);

        if path.exists() {
            return Err(EntryAlreadyExists(file_name));
        }

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o700);
        }

        options.open(&path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => EntryAlreadyExists(file_name.clone()),
            _ => Error::io_error("creating".to_string(), path.display().to_string(), e),
        })?;

        info!("Created config `{}`", path.display());
        Ok(path)
    }

    /// Deletes a single config.
    ///
    /// A name without the `.cfg` extension first tries `<name>.cfg`, then
    /// falls back to the bare name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownEntry`] if no matching file exists.
    pub fn delete(&self, name: &str) -> Result<PathBuf> {
        validate_entry_name(name)?;

        let mut path = self.root.join(name);
        if !name.contains(CONFIG_EXTENSION) {
            let with_extension = self.root.join(format!("{name}{CONFIG_EXTENSION}"));
            if with_extension.exists() {
                path = with_extension;
            }
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Deleted config `{}`", path.display());
                Ok(path)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(UnknownEntry(name.to_string())),
            Err(e) => Err(Error::io_error(
                "deleting".to_string(),
                path.display().to_string(),
                e,
            )),
        }
    }

    /// Deletes every config in the store.
    ///
    /// Every regular file goes, including names that are not valid UTF-8 and
    /// so never appear in the menu. Files that fail to delete are logged and
    /// skipped. Returns the paths that were deleted, which is empty when there
    /// was nothing to purge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreUnavailable`] if the directory cannot be read.
    pub fn purge(&self) -> Result<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for dir_entry in self.read_store()? {
            let dir_entry =
                dir_entry.map_err(|e| Error::store_unavailable(self.display_root(), e))?;

            let file_type = dir_entry
                .file_type()
                .map_err(|e| Error::store_unavailable(self.display_root(), e))?;

            if !file_type.is_file() {
                continue;
            }

            let path = dir_entry.path();
            match fs::remove_file(&path) {
                Ok(()) => deleted.push(path),
                Err(e) => warn!("Could not delete `{}`: {e}", path.display()),
            }
        }

        info!("Purged {} configs", deleted.len());
        Ok(deleted)
    }
}
