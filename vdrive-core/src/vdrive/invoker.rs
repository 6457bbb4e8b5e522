//! Running the mounting utility as a subprocess.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::protocol::BANNER_LINES;

/// Runs one mounting-utility command and returns its usable output lines.
///
/// Implementations never fail the caller: a subprocess that cannot start, or
/// one that produces nothing, yields an empty sequence. Callers validate the
/// output shape instead of matching on errors.
pub trait UtilityInvoker {
    /// Run the utility with the given arguments. Returns stdout split into
    /// trimmed, non-empty lines with the banner removed.
    fn run(&mut self, args: &[&str]) -> Vec<String>;
}

/// Invoker backed by the real utility executable.
///
/// The executable path is resolved once, before the first command, and never
/// changes for the life of the process.
pub struct ProcessInvoker {
    utility: PathBuf,
}

impl ProcessInvoker {
    /// Wrap an already-resolved utility path.
    pub fn new(utility: impl Into<PathBuf>) -> Self {
        Self {
            utility: utility.into(),
        }
    }

    /// Path of the wrapped executable.
    pub fn utility_path(&self) -> &Path {
        &self.utility
    }
}

impl UtilityInvoker for ProcessInvoker {
    fn run(&mut self, args: &[&str]) -> Vec<String> {
        let mut cmd = Command::new(&self.utility);
        cmd.args(args);
        hide_window(&mut cmd);

        let output = match cmd.output() {
            Ok(output) => output,
            Err(err) => {
                // Indistinguishable from "utility produced no output" by
                // contract; downstream parsers handle the empty sequence.
                debug!(utility = %self.utility.display(), %err, "utility failed to start");
                return Vec::new();
            }
        };

        let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        strip_banner(lines)
    }
}

/// Drop the fixed banner from a response.
///
/// Length-safe: a response shorter than the banner yields an empty result.
fn strip_banner(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().skip(BANNER_LINES).collect()
}

#[cfg(windows)]
fn hide_window(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    cmd.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn hide_window(_cmd: &mut Command) {}

/// Scripted invoker for tests: replays canned responses and records every
/// call it receives.
///
/// Responses are queued as post-banner lines, matching what `run` returns.
#[derive(Default)]
pub struct ScriptedInvoker {
    responses: VecDeque<Vec<String>>,
    calls: Vec<Vec<String>>,
}

impl ScriptedInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the lines returned by the next unanswered call.
    pub fn push_response<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.responses
            .push_back(lines.into_iter().map(Into::into).collect());
    }

    /// Every argument vector passed to `run`, in call order.
    pub fn calls(&self) -> &[Vec<String>] {
        &self.calls
    }
}

impl UtilityInvoker for ScriptedInvoker {
    fn run(&mut self, args: &[&str]) -> Vec<String> {
        self.calls
            .push(args.iter().map(|arg| arg.to_string()).collect());
        // Out of script = utility that went silent.
        self.responses.pop_front().unwrap_or_default()
    }
}
