//! Clipboard access for media URLs
//!
//! Pipes the text into the first clipboard tool found on the system.
//! Detection order: pbcopy (macOS) → wl-copy (Wayland) → xclip (X11) → xsel (X11 fallback)

use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

const CLIPBOARD_COMMANDS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("failed to run {program}: {source}")]
    Io {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("no clipboard tool found (install pbcopy, wl-copy, xclip or xsel)")]
    NoTool,
}

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    for cmd_args in CLIPBOARD_COMMANDS {
        let program = cmd_args[0];
        if !is_available(program) {
            continue;
        }
        if pipe_to(program, &cmd_args[1..], text)? {
            return Ok(());
        }
    }
    Err(ClipboardError::NoTool)
}

/// Run `program` with `text` on stdin; `Ok(false)` when it exits non-zero
fn pipe_to(program: &'static str, args: &[&str], text: &str) -> Result<bool, ClipboardError> {
    let io_err = |source| ClipboardError::Io { program, source };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(io_err)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(io_err)?;
    }

    let status = child.wait().map_err(io_err)?;
    Ok(status.success())
}

/// Check if a command is available on the system
fn is_available(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}
