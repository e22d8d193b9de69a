//! File-backed storage for the preferred location.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error_handling::PreferenceError;

use super::types::LocationData;

/// Saves and loads one `LocationData` as a JSON file.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the saved location. A missing file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<LocationData>, PreferenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| PreferenceError::Format {
                path: self.path.display().to_string(),
                source,
            })
    }

    /// Replaces the saved location, creating parent directories as needed.
    pub fn save(&self, location: &LocationData) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let json = serde_json::to_string_pretty(location).map_err(|source| {
            PreferenceError::Format {
                path: self.path.display().to_string(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;
        log::debug!("Saved preferred location {} to {}", location.name, self.path.display());
        Ok(())
    }

    /// Forgets the saved location. Clearing an empty store is not an error.
    pub fn clear(&self) -> Result<(), PreferenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}
