//! Virtual drive session management for launching a disc-based emulator
//! against archived game images.
//!
//! Mounting is delegated to an external command-line utility (WinArchiver's
//! `wacmd.exe`) that owns all virtual drive state and speaks a line-oriented
//! text protocol over stdout.
//!
//! # Architecture
//!
//! The launcher uses a layered design:
//! - `locator`: finds the utility executable (install manifest, then
//!   well-known program directories)
//! - `vdrive`: the session manager - command invocation, protocol parsing,
//!   slot allocation, mount/unmount
//! - `search`: best-image selection under a mount root
//! - `emulator`: ePSXe subprocess launch

pub mod emulator;
pub mod error;
pub mod locator;
pub mod search;
pub mod vdrive;

pub use emulator::{is_emulator_path, run_emulator, EMULATOR_STEM};
pub use error::{VdriveError, VdriveResult};
pub use locator::{UtilityLocator, UTILITY_EXE};
pub use search::{find_best_match, scan_images, IMAGE_EXTENSIONS};
pub use vdrive::{
    mount_root, DriveSlot, ProcessInvoker, ScriptedInvoker, UtilityInvoker, VdriveSession,
    BANNER_LINES, DRIVE_LIMIT,
};
