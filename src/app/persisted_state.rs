// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles state that should survive restarts but is not a user
//! preference (unlike `settings.toml`). It lives in `state.cbor` inside the
//! data directory.

use super::paths;
use crate::i18n::UiText;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory the last report was saved to, either automatically or
    /// through the save dialog. Used as the starting directory for the next dialog.
    #[serde(default)]
    pub last_report_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Never fails: on error the default state is returned along with a
    /// warning to show the user.
    pub fn load() -> (Self, Option<UiText>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<UiText>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "state file unreadable");
                return (Self::default(), Some(UiText::StateReadError));
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "state file corrupted");
                (Self::default(), Some(UiText::StateParseError))
            }
        }
    }

    /// Saves application state to the default location.
    ///
    /// Returns a warning to show the user if saving failed.
    pub fn save(&self) -> Option<UiText> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<UiText> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            tracing::warn!("no data directory available for state file");
            return Some(UiText::StateWriteError);
        };

        match self.write(&path) {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "state file not written");
                Some(UiText::StateWriteError)
            }
        }
    }

    fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let file = fs::File::create(path).map_err(|e| e.to_string())?;
        ciborium::into_writer(self, BufWriter::new(file)).map_err(|e| e.to_string())
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the directory containing `file_path`.
    ///
    /// A path without a parent (e.g., root) leaves the state unchanged.
    pub fn set_last_report_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_report_directory = Some(parent.to_path_buf());
        }
    }
}
