//! Database file discovery.
//!
//! Resolution order: the `ACRODB` environment variable first, then the
//! default filename `acronyms.db` in the directory of the running
//! executable. An override that points at a missing or unreadable file
//! is logged and falls through to the default; if neither location
//! yields a readable file the lookup fails and the process cannot
//! proceed.
//!
//! The successful location carries the file's size and last-modified
//! time, captured once at resolution for the summary report.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::error::{Result, StoreError};

/// Environment variable naming the database file override.
pub const STORE_ENV_VAR: &str = "ACRODB";

/// Default database filename looked up beside the executable.
pub const DEFAULT_STORE_FILE: &str = "acronyms.db";

/// A resolved database file location with captured metadata.
#[derive(Debug, Clone)]
pub struct StoreLocation {
    path: PathBuf,
    size: u64,
    modified: Option<SystemTime>,
}

impl StoreLocation {
    /// Resolves the database location from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when neither the `ACRODB`
    /// override nor the executable-adjacent default names a readable
    /// file. This is fatal for the caller: no command can run without
    /// a store.
    pub fn locate() -> Result<Self> {
        let override_path = env::var_os(STORE_ENV_VAR).map(PathBuf::from);
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self::resolve(override_path, exe_dir.as_deref())
    }

    /// Resolution core, separated from the process environment so it
    /// can be exercised directly.
    pub fn resolve(override_path: Option<PathBuf>, fallback_dir: Option<&Path>) -> Result<Self> {
        if let Some(path) = override_path {
            match probe(&path) {
                Some(location) => return Ok(location),
                None => warn!(
                    "database file '{}' named by {STORE_ENV_VAR} is missing or not accessible; \
                     trying the default location",
                    path.display()
                ),
            }
        } else {
            debug!("no {STORE_ENV_VAR} override set; trying the default location");
        }

        if let Some(dir) = fallback_dir {
            let path = dir.join(DEFAULT_STORE_FILE);
            if let Some(location) = probe(&path) {
                return Ok(location);
            }
        }

        Err(StoreError::NotFound)
    }

    /// Builds a location for an explicit path without the fallback
    /// chain, capturing metadata when the file already exists.
    ///
    /// Used where creation-on-open is acceptable, such as seeding a
    /// fresh store in tests.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match probe(&path) {
            Some(location) => location,
            None => Self {
                path,
                size: 0,
                modified: None,
            },
        }
    }

    /// Synthetic location for in-memory sessions.
    pub(crate) fn in_memory() -> Self {
        Self {
            path: PathBuf::from(":memory:"),
            size: 0,
            modified: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File size in bytes at resolution time.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Last-modified time rendered for the summary report.
    pub fn modified_display(&self) -> Option<String> {
        self.modified.map(|time| {
            DateTime::<Local>::from(time)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
    }
}

/// Checks that `path` names a readable regular file and captures its
/// metadata. Returns `None` for anything else.
fn probe(path: &Path) -> Option<StoreLocation> {
    if path.as_os_str().is_empty() {
        return None;
    }
    let meta = fs::metadata(path).ok()?;
    if !meta.is_file() {
        return None;
    }
    // A plain open-for-read doubles as the access check.
    fs::File::open(path).ok()?;
    Some(StoreLocation {
        path: path.to_path_buf(),
        size: meta.len(),
        modified: meta.modified().ok(),
    })
}
