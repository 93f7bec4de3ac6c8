use anyhow::{Context, Result, bail};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Clipboard writers tried in order: Wayland first, then X11
const CLIPBOARD_TOOLS: [(&str, &[&str]); 2] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
];

/// Pipes `text` into the first clipboard tool that accepts it
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_error = None;

    for (program, args) in CLIPBOARD_TOOLS {
        match pipe_into(program, args, text) {
            Ok(()) => {
                debug!(program, bytes = text.len(), "copied to clipboard");
                return Ok(());
            }
            Err(e) => {
                debug!(program, error = %e, "clipboard tool failed");
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(e.context("Clipboard tools not available (wl-copy or xclip)")),
        None => bail!("No clipboard tool configured"),
    }
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to start {}", program))?;

    child
        .stdin
        .take()
        .context("Clipboard process has no stdin")?
        .write_all(text.as_bytes())
        .with_context(|| format!("Failed to write to {}", program))?;

    let status = child.wait().with_context(|| format!("{} did not exit", program))?;
    if !status.success() {
        bail!("{} exited with {}", program, status);
    }
    Ok(())
}
