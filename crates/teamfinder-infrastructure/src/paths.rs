//! Unified path management for Teamfinder files.
//!
//! ```text
//! ~/.config/teamfinder/        # Config directory
//! └── config.toml              # Client configuration
//!
//! ~/.local/share/teamfinder/   # Data directory
//! └── storage.json             # Local storage (session token)
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "teamfinder";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for teamfinder_core::TeamfinderError {
    fn from(err: PathError) -> Self {
        teamfinder_core::TeamfinderError::config(err.to_string())
    }
}

/// Resolves Teamfinder directories with the platform conventions of `dirs`.
pub struct TeamfinderPaths;

impl TeamfinderPaths {
    /// `~/.config/teamfinder/` on Linux.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// `~/.local/share/teamfinder/` on Linux.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn storage_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("storage.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_app_dirs() {
        if let (Ok(config), Ok(storage)) =
            (TeamfinderPaths::config_file(), TeamfinderPaths::storage_file())
        {
            assert!(config.ends_with("teamfinder/config.toml"));
            assert!(storage.ends_with("teamfinder/storage.json"));
        }
    }
}
