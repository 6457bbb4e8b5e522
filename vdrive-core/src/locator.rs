//! Discovery of the external mounting utility.
//!
//! Two strategies, tried in order: the WinArchiver install manifest (a JSON
//! file recording the 64-bit and 32-bit install directories), then the
//! conventional program directories. The manifest can be absent, remapped,
//! or unreadable depending on host configuration, so any failure on the
//! first strategy falls through to the second.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{VdriveError, VdriveResult};

/// File name of the utility's command-line executable.
pub const UTILITY_EXE: &str = "wacmd.exe";

/// Environment variable overriding the install-manifest location.
pub const CONFIG_ENV: &str = "WINARCHIVER_CONFIG";

/// Install manifest written by the utility's installer.
///
/// Either directory key may be missing; a 64-bit install is preferred when
/// both are recorded.
#[derive(Debug, Deserialize)]
struct InstallManifest {
    #[serde(default)]
    install_dir_x64: Option<String>,
    #[serde(default)]
    install_dir_x86: Option<String>,
}

/// Locates the mounting utility's executable.
pub struct UtilityLocator {
    manifest_path: Option<PathBuf>,
    program_dirs: Vec<PathBuf>,
}

impl Default for UtilityLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl UtilityLocator {
    /// Locator using the host's conventional locations.
    pub fn new() -> Self {
        let manifest_path = env::var_os(CONFIG_ENV).map(PathBuf::from).or_else(|| {
            env::var_os("PROGRAMDATA")
                .map(|data| PathBuf::from(data).join("WinArchiver").join("install.json"))
        });
        // 64-bit location first, then the 32-bit one.
        let program_dirs = ["PROGRAMFILES", "PROGRAMFILES(X86)"]
            .iter()
            .filter_map(env::var_os)
            .map(|dir| PathBuf::from(dir).join("WinArchiver"))
            .collect();
        Self {
            manifest_path,
            program_dirs,
        }
    }

    /// Locator probing explicit locations. Used by tests.
    pub fn with_paths(manifest_path: Option<PathBuf>, program_dirs: Vec<PathBuf>) -> Self {
        Self {
            manifest_path,
            program_dirs,
        }
    }

    /// Resolve the executable path: install manifest first, then the
    /// well-known program directories.
    pub fn resolve(&self) -> VdriveResult<PathBuf> {
        if let Some(exe) = self.from_manifest() {
            debug!(exe = %exe.display(), "utility found via install manifest");
            return Ok(exe);
        }
        match self.from_program_dirs() {
            Some(exe) => {
                debug!(exe = %exe.display(), "utility found in program directory");
                Ok(exe)
            }
            None => Err(VdriveError::UtilityNotFound),
        }
    }

    fn from_manifest(&self) -> Option<PathBuf> {
        let manifest_path = self.manifest_path.as_ref()?;
        let text = fs::read_to_string(manifest_path).ok()?;
        let manifest: InstallManifest = serde_json::from_str(&text).ok()?;
        let found = [&manifest.install_dir_x64, &manifest.install_dir_x86]
            .into_iter()
            .flatten()
            .find_map(|dir| utility_in(Path::new(dir)));
        found
    }

    fn from_program_dirs(&self) -> Option<PathBuf> {
        self.program_dirs.iter().find_map(|dir| utility_in(dir))
    }
}

/// `dir/wacmd.exe` when `dir` is a directory holding the executable.
fn utility_in(dir: &Path) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }
    let exe = dir.join(UTILITY_EXE);
    exe.is_file().then_some(exe)
}
