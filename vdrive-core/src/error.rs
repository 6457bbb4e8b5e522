//! Error types for the virtual drive launcher.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating, mounting, and launching.
#[derive(Error, Debug)]
pub enum VdriveError {
    #[error("mounting utility not found")]
    UtilityNotFound,

    #[error("no game image found under {}", .0.display())]
    ImageNotFound(PathBuf),

    #[error("virtual drive limit is 8, unmount a drive manually")]
    DriveLimit,

    #[error("utility failed to mount {}", .0.display())]
    MountFailed(PathBuf),

    #[error("utility reported a problem creating a new drive")]
    DriveCreate,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for virtual drive operations.
pub type VdriveResult<T> = Result<T, VdriveError>;
