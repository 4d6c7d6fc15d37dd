//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/expense-tracker` on Linux)
//! 3. The current directory, when no home directory can be determined
//!
//! The expenses file can additionally be pinned to an explicit location,
//! which is what the `--file` flag does.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for config and data
    base_dir: PathBuf,
    /// Explicit expenses file, bypassing the base directory
    expenses_override: Option<PathBuf>,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance using the resolution order above
    pub fn new() -> Self {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path(),
        };

        Self {
            base_dir,
            expenses_override: None,
        }
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            expenses_override: None,
        }
    }

    /// Store expenses at an explicit path instead of the base directory
    pub fn with_expenses_file(mut self, path: PathBuf) -> Self {
        self.expenses_override = Some(path);
        self
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.expenses_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join("expenses.json"))
    }

    /// Ensure the directory holding the expenses file exists
    ///
    /// With an explicit expenses file the base directory is left alone.
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        let expenses_file = self.expenses_file();
        let dir = match expenses_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => return Ok(()),
        };
        std::fs::create_dir_all(dir).map_err(|e| {
            TrackerError::Io(format!("Failed to create directory {}: {}", dir.display(), e))
        })
    }
}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the default base directory for the platform
fn resolve_default_path() -> PathBuf {
    match ProjectDirs::from("", "", "expense-tracker") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => {
            tracing::warn!("no home directory found, storing data in the current directory");
            PathBuf::from(".")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.expenses_file(), temp_dir.path().join("expenses.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = TrackerPaths::new();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_expenses_file_override() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("elsewhere").join("mine.json");
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf())
            .with_expenses_file(explicit.clone());

        assert_eq!(paths.expenses_file(), explicit);
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
    }

    #[test]
    fn test_ensure_directories_with_explicit_file_skips_base() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the base directory would go cannot be created as a directory
        let blocked_base = temp_dir.path().join("blocker");
        std::fs::write(&blocked_base, "").unwrap();
        let explicit = temp_dir.path().join("mine").join("expenses.json");

        let paths = TrackerPaths::with_base_dir(blocked_base.join("tracker"))
            .with_expenses_file(explicit.clone());
        paths.ensure_directories().unwrap();

        assert!(explicit.parent().unwrap().is_dir());
        assert!(!paths.base_dir().exists());
    }
}
