//! The text protocol spoken by the mounting utility.
//!
//! Every invocation prints a fixed two-line banner before its result lines,
//! and results are classified by substring markers. These contracts are
//! imposed by the external tool and are kept here verbatim so nothing else
//! in the crate has to know about them.

/// Lines of fixed preamble the utility prints before every command's output.
pub const BANNER_LINES: usize = 2;

/// Command verb that lists the virtual drive slots.
pub(super) const CMD_LIST: &str = "listvd";
/// Command verb that resizes the slot count.
pub(super) const CMD_SET_COUNT: &str = "setvdnum";
/// Command verb that mounts an archive onto a slot.
pub(super) const CMD_MOUNT: &str = "mount";
/// Command verb that unmounts a slot (or `all`).
pub(super) const CMD_UNMOUNT: &str = "unmount";
/// Unmount target covering every slot.
pub(super) const UNMOUNT_ALL: &str = "all";

/// Marks an empty slot in `listvd` output.
const NO_MEDIA_MARKER: &str = "<No media>";
/// Marks a failed mount in the first response line (case-sensitive).
const MOUNT_FAILURE_MARKER: &str = "fail";
/// Exact success marker for unmount responses.
const UNMOUNT_SUCCESS_MARKER: &str = "Unmount successfully";

/// One virtual drive slot as reported by `listvd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveSlot {
    /// Two-character slot code (e.g. "G0").
    pub id: String,
    /// True when the slot holds no mounted media.
    pub is_empty: bool,
}

/// Parse `listvd` output lines into drive slots.
///
/// The slot code is the two characters following the first `[` of a line;
/// `<No media>` marks the slot as empty. Lines without a recognizable slot
/// code are skipped rather than trusted.
pub fn parse_drive_list(lines: &[String]) -> Vec<DriveSlot> {
    lines.iter().filter_map(|line| parse_drive_line(line)).collect()
}

fn parse_drive_line(line: &str) -> Option<DriveSlot> {
    let start = line.find('[')? + 1;
    let id: String = line[start..].chars().take(2).collect();
    if id.chars().count() != 2 {
        return None;
    }
    Some(DriveSlot {
        id,
        is_empty: line.contains(NO_MEDIA_MARKER),
    })
}

/// True when a mount response reports success.
///
/// Any first line containing `fail` classifies as failure; so does an empty
/// response, which means the utility never answered.
pub(super) fn mount_succeeded(lines: &[String]) -> bool {
    match lines.first() {
        Some(first) => !first.contains(MOUNT_FAILURE_MARKER),
        None => false,
    }
}

/// True when an unmount response carries the exact success marker.
pub(super) fn unmount_succeeded(lines: &[String]) -> bool {
    lines
        .first()
        .is_some_and(|first| first.contains(UNMOUNT_SUCCESS_MARKER))
}

/// True when a `setvdnum` invocation succeeded.
///
/// The utility reports creation errors as extra output lines; any output at
/// all is failure.
pub(super) fn create_succeeded(lines: &[String]) -> bool {
    lines.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_drive_line_empty_slot() {
        let slots = parse_drive_list(&lines(&["Virtual drive [G0] <No media>"]));
        assert_eq!(
            slots,
            vec![DriveSlot {
                id: "G0".to_string(),
                is_empty: true,
            }]
        );
    }

    #[test]
    fn test_parse_drive_line_occupied_slot() {
        let slots = parse_drive_list(&lines(&["Virtual drive [G1] D:\\games\\ff7.mbi"]));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].id, "G1");
        assert!(!slots[0].is_empty);
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let slots = parse_drive_list(&lines(&[
            "no bracket at all",
            "[G", // slot code cut short
            "[",
            "Virtual drive [H0] <No media>",
        ]));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].id, "H0");
    }

    #[test]
    fn test_mount_classification_is_substring_based() {
        assert!(mount_succeeded(&lines(&["Mount image file to [G0] OK"])));
        assert!(!mount_succeeded(&lines(&["Mount image file failed."])));
        // The check is case-sensitive; "Fail" alone would not match,
        // matching the external tool's observed output.
        assert!(mount_succeeded(&lines(&["FAILURE"])));
    }

    #[test]
    fn test_mount_empty_response_is_failure() {
        assert!(!mount_succeeded(&[]));
    }

    #[test]
    fn test_unmount_requires_exact_marker() {
        assert!(unmount_succeeded(&lines(&["Unmount successfully."])));
        assert!(!unmount_succeeded(&lines(&["Unmount failed"])));
        assert!(!unmount_succeeded(&[]));
    }

    #[test]
    fn test_create_fails_on_any_output() {
        assert!(create_succeeded(&[]));
        assert!(!create_succeeded(&lines(&["Invalid parameter"])));
    }
}
