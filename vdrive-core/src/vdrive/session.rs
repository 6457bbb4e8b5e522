//! Mount session against the external virtual-drive utility.
//!
//! The utility owns all drive state, and that state can outlive this
//! process (a prior run, manual action). Nothing here caches slot
//! information: every read goes back to the utility.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{VdriveError, VdriveResult};

use super::invoker::UtilityInvoker;
use super::protocol::{self, DriveSlot};

/// Maximum number of virtual drive slots the utility will manage.
pub const DRIVE_LIMIT: usize = 8;

/// One mounting session against the external utility.
///
/// Generic over the invoker so protocol handling can be exercised without
/// the real executable. One session is active per program run.
pub struct VdriveSession<I: UtilityInvoker> {
    invoker: I,
}

impl<I: UtilityInvoker> VdriveSession<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    /// Get the underlying invoker.
    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Get mutable reference to the invoker.
    pub fn invoker_mut(&mut self) -> &mut I {
        &mut self.invoker
    }

    /// List the utility's current drive slots.
    pub fn list_drives(&mut self) -> Vec<DriveSlot> {
        let lines = self.invoker.run(&[protocol::CMD_LIST]);
        protocol::parse_drive_list(&lines)
    }

    /// First empty slot in `drives`, creating one when all are occupied.
    ///
    /// After each creation the full list is re-queried and rescanned.
    /// Terminates: the slot count strictly increases and `create_drive`
    /// fails once `DRIVE_LIMIT` is reached.
    pub fn first_empty_slot(&mut self, drives: &[DriveSlot]) -> VdriveResult<String> {
        if let Some(slot) = drives.iter().find(|d| d.is_empty) {
            return Ok(slot.id.clone());
        }
        loop {
            self.create_drive()?;
            let drives = self.list_drives();
            if let Some(slot) = drives.iter().find(|d| d.is_empty) {
                return Ok(slot.id.clone());
            }
        }
    }

    /// Grow the drive set by one slot.
    ///
    /// The count is re-queried rather than tracked, since slots may appear
    /// or vanish outside this process.
    pub fn create_drive(&mut self) -> VdriveResult<()> {
        let count = self.list_drives().len();
        if count >= DRIVE_LIMIT {
            return Err(VdriveError::DriveLimit);
        }
        let target = (count + 1).to_string();
        let lines = self
            .invoker
            .run(&[protocol::CMD_SET_COUNT, target.as_str()]);
        if !protocol::create_succeeded(&lines) {
            return Err(VdriveError::DriveCreate);
        }
        debug!(drives = count + 1, "created virtual drive slot");
        Ok(())
    }

    /// Mount `archive` onto the first available slot, creating one when all
    /// existing slots hold media. Returns the slot the archive landed on so
    /// the caller can derive the mount root and target the unmount.
    pub fn mount_auto(&mut self, archive: &Path) -> VdriveResult<String> {
        let drives = self.list_drives();
        let slot = self.first_empty_slot(&drives)?;
        self.mount_to_slot(archive, &slot)?;
        Ok(slot)
    }

    /// Mount `archive` onto a specific slot.
    pub fn mount_to_slot(&mut self, archive: &Path, slot: &str) -> VdriveResult<()> {
        let path = archive.to_string_lossy();
        let lines = self
            .invoker
            .run(&[protocol::CMD_MOUNT, path.as_ref(), slot]);
        if !protocol::mount_succeeded(&lines) {
            return Err(VdriveError::MountFailed(archive.to_path_buf()));
        }
        info!(slot, archive = %archive.display(), "archive mounted");
        Ok(())
    }

    /// Unmount one slot. Best-effort: reports success, never errors.
    pub fn unmount_one(&mut self, slot: &str) -> bool {
        self.unmount(slot)
    }

    /// Unmount every slot. Best-effort: reports success, never errors.
    pub fn unmount_all(&mut self) -> bool {
        self.unmount(protocol::UNMOUNT_ALL)
    }

    fn unmount(&mut self, target: &str) -> bool {
        let lines = self.invoker.run(&[protocol::CMD_UNMOUNT, target]);
        let ok = protocol::unmount_succeeded(&lines);
        if ok {
            info!(target, "unmounted");
        } else {
            warn!(target, "unmount was not confirmed");
        }
        ok
    }
}

/// Filesystem root where a mounted slot's contents appear.
///
/// The slot-to-path mapping belongs to the external utility; this mirrors
/// its drive-letter convention (the slot code followed by the platform path
/// separator).
pub fn mount_root(slot: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", slot, std::path::MAIN_SEPARATOR))
}
