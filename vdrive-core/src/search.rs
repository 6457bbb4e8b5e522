//! Locating the best game image under a mount root.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{VdriveError, VdriveResult};

/// Candidate image extensions, highest priority first. Playlists and cue
/// sheets come before raw track data so multi-file images load whole.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".m3u", ".cue", ".ccd", ".mds", ".bin", ".iso", ".mdf", ".img", ".pbp",
];

/// Collect every file under `root` whose extension matches one of
/// `extensions`, in traversal order.
///
/// Extensions are dotted and lower-case; matching is case-insensitive on
/// the file side. An absent or unreadable root yields no matches. Sibling
/// entries are visited in file-name order so the traversal is stable across
/// platforms.
pub fn scan_images(root: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            file_extension(path).is_some_and(|ext| extensions.iter().any(|e| *e == ext))
        })
        .collect()
}

/// Pick the best image under `root`.
///
/// All matches are collected first; the winner is the first traversal-order
/// match under the highest-priority extension that matched at all, not the
/// first file encountered.
pub fn find_best_match(root: &Path, extensions: &[&str]) -> VdriveResult<PathBuf> {
    let matches = scan_images(root, extensions);
    debug!(root = %root.display(), candidates = matches.len(), "scanned mount root");
    for ext in extensions {
        if let Some(path) = matches
            .iter()
            .find(|path| file_extension(path).as_deref() == Some(*ext))
        {
            return Ok(path.clone());
        }
    }
    Err(VdriveError::ImageNotFound(root.to_path_buf()))
}

/// Lower-cased extension of `path`, dot included.
fn file_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    Some(format!(".{}", ext.to_ascii_lowercase()))
}
