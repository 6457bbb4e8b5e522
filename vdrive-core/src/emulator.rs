//! Launching the ePSXe emulator against a resolved image.

use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::info;

use crate::error::VdriveResult;

/// Expected file stem of the emulator executable, compared
/// case-insensitively.
pub const EMULATOR_STEM: &str = "epsxe";

/// True when `path` names an ePSXe executable.
pub fn is_emulator_path(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.eq_ignore_ascii_case(EMULATOR_STEM))
}

/// Run the emulator headless against `image` and block until it exits.
///
/// The working directory is set to the emulator's own directory: ePSXe
/// resolves its bios and plugin folders relative to the working directory,
/// not the executable.
pub fn run_emulator(epsxe: &Path, image: &Path) -> VdriveResult<ExitStatus> {
    let mut cmd = Command::new(epsxe);
    cmd.arg("-nogui").arg("-loadbin").arg(image);
    if let Some(dir) = epsxe.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        cmd.current_dir(dir);
    }
    hide_window(&mut cmd);

    info!(emulator = %epsxe.display(), image = %image.display(), "starting emulator");
    let status = cmd.status()?;
    info!(%status, "emulator exited");
    Ok(status)
}

#[cfg(windows)]
fn hide_window(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    cmd.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn hide_window(_cmd: &mut Command) {}
