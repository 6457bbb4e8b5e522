//! Virtual drive control through the external mounting utility.
//!
//! This module wraps the utility's line-oriented text protocol:
//! - `UtilityInvoker`: runs one utility command, returns usable output lines
//! - `protocol` helpers: the string contracts, centralized in one place
//! - `VdriveSession`: drive slot queries and mount/unmount operations

mod invoker;
mod protocol;
mod session;

pub use invoker::{ProcessInvoker, ScriptedInvoker, UtilityInvoker};
pub use protocol::{parse_drive_list, DriveSlot, BANNER_LINES};
pub use session::{mount_root, VdriveSession, DRIVE_LIMIT};
