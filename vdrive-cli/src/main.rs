//! ePSXe archive launcher - mount a game archive on a virtual drive, find
//! the best image inside it, run ePSXe against it, and unmount afterward.
//!
//! Usage:
//!   epsxe-launch <EPSXE_PATH> <ARCHIVE_PATH>

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use vdrive_core::{
    find_best_match, is_emulator_path, mount_root, run_emulator, ProcessInvoker, UtilityLocator,
    VdriveSession, IMAGE_EXTENSIONS,
};

/// Run ePSXe against a game image inside a mountable archive.
#[derive(Parser, Debug)]
#[command(name = "epsxe-launch")]
#[command(about = "Run ePSXe against an archived disc image")]
struct Args {
    /// Path to the ePSXe executable
    epsxe_path: PathBuf,

    /// Path to the disc archive to mount
    archive_path: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if !args.epsxe_path.is_file() || !is_emulator_path(&args.epsxe_path) {
        eprintln!("epsxe path is invalid: {}", args.epsxe_path.display());
        std::process::exit(1);
    }
    if !args.archive_path.is_file() {
        eprintln!("archive path is invalid: {}", args.archive_path.display());
        std::process::exit(1);
    }

    let utility = UtilityLocator::new().resolve()?;
    let mut session = VdriveSession::new(ProcessInvoker::new(utility));

    let slot = session.mount_auto(&args.archive_path)?;
    let root = mount_root(&slot);

    let image = match find_best_match(&root, IMAGE_EXTENSIONS) {
        Ok(image) => image,
        Err(err) => {
            // The archive is mounted by now; release the slot before bailing.
            if !session.unmount_one(&slot) {
                warn!(%slot, "could not release slot after failed image search");
            }
            return Err(err.into());
        }
    };

    println!("ePSXe: {}", args.epsxe_path.display());
    println!("Archive: {}", args.archive_path.display());
    println!("Image: {}", image.display());
    println!("Starting emulator...");

    let status = run_emulator(&args.epsxe_path, &image)?;
    if !status.success() {
        warn!(%status, "emulator exited with failure status");
    }

    println!("Unmounting image");
    if !session.unmount_all() {
        warn!("unmount was not confirmed; a drive may still hold media");
    }

    Ok(())
}
