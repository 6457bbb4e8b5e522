//! End-to-end mount flow against a scripted utility: one empty slot is
//! reported, the archive mounts onto it, and the priority search picks the
//! cue sheet over the raw track data sitting next to it.

use std::fs;
use std::path::Path;

use vdrive_core::{
    find_best_match, mount_root, ScriptedInvoker, VdriveSession, IMAGE_EXTENSIONS,
};

#[test]
fn mount_search_launchable_unmount() {
    // Simulated mounted tree: a two-file disc image.
    let tree = tempfile::tempdir().unwrap();
    fs::write(tree.path().join("game.cue"), "FILE \"game.bin\" BINARY\n").unwrap();
    fs::write(tree.path().join("game.bin"), [0u8; 2352]).unwrap();

    let mut invoker = ScriptedInvoker::new();
    invoker.push_response(["Virtual drive [G0] <No media>"]);
    invoker.push_response(["Mount image file to [G0] OK"]);
    invoker.push_response(["Unmount successfully."]);
    let mut session = VdriveSession::new(invoker);

    let slot = session.mount_auto(Path::new("game.mbi")).unwrap();
    assert_eq!(slot, "G0");

    // The mount root is derived from the slot the session returned.
    let root = mount_root(&slot);
    assert!(root.to_string_lossy().starts_with("G0"));

    // .cue outranks .bin even though both are present.
    let image = find_best_match(tree.path(), IMAGE_EXTENSIONS).unwrap();
    assert_eq!(image.file_name().unwrap(), "game.cue");

    assert!(session.unmount_all());

    let calls = session.invoker().calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], vec!["listvd"]);
    assert_eq!(calls[1], vec!["mount", "game.mbi", "G0"]);
    assert_eq!(calls[2], vec!["unmount", "all"]);
}

#[test]
fn empty_mount_root_fails_the_search() {
    let tree = tempfile::tempdir().unwrap();

    let err = find_best_match(tree.path(), IMAGE_EXTENSIONS).unwrap_err();
    assert!(matches!(err, vdrive_core::VdriveError::ImageNotFound(_)));
}
