// Storage path utilities.
// Locates the verse cache and token files in platform directories or an override.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const CACHE_FILE: &str = "verses.json";
const TOKEN_FILE: &str = "esv_token";

/// Resolved locations of everything fighter-verses keeps on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    /// Cached verse texts.
    pub cache: PathBuf,
    /// The ESV API token.
    pub token: PathBuf,
}

impl StoragePaths {
    /// Put both files in a single directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            cache: dir.join(CACHE_FILE),
            token: dir.join(TOKEN_FILE),
        }
    }

    /// Platform defaults: the cache under the cache dir, the token under the config dir.
    pub fn platform() -> Option<Self> {
        Some(Self {
            cache: cache_dir()?.join(CACHE_FILE),
            token: config_dir()?.join(TOKEN_FILE),
        })
    }

    /// Use `override_dir` when given, otherwise the platform defaults.
    pub fn resolve(override_dir: Option<&Path>) -> Option<Self> {
        match override_dir {
            Some(dir) => Some(Self::in_dir(dir)),
            None => Self::platform(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "fighter-verses")
}

/// Get the base cache directory (~/.cache/fighter-verses on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory (~/.config/fighter-verses on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}
