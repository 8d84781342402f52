//! Clipboard helper for copying the displayed quote.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

/// Copy text to the system clipboard.
///
/// Uses `pbcopy` on macOS and `xclip` on Linux.
/// Returns `true` on success.
pub fn copy_to_clipboard(text: &str) -> bool {
    let command = if cfg!(target_os = "macos") {
        Command::new("pbcopy")
    } else {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        xclip
    };

    match pipe_to(command, text) {
        Ok(status) => status.success(),
        Err(e) => {
            tracing::debug!("Clipboard command failed: {e}");
            false
        }
    }
}

/// Feed `text` to the command's stdin and wait for it to exit.
///
/// The child is always waited on, even when writing fails.
fn pipe_to(mut command: Command, text: &str) -> io::Result<ExitStatus> {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // stdin must be closed before waiting or xclip never exits
    let written = child
        .stdin
        .take()
        .map_or(Ok(()), |mut stdin| stdin.write_all(text.as_bytes()));
    let status = child.wait()?;
    written.map(|()| status)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_to_reports_exit_status() {
        let status = pipe_to(Command::new("cat"), "\"This too shall pass.\"").unwrap();
        assert!(status.success());

        let mut failing = Command::new("sh");
        failing.args(["-c", "cat >/dev/null; exit 3"]);
        let status = pipe_to(failing, "quote").unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn test_pipe_to_reaps_child_when_write_fails() {
        // Exits without reading, so a large write hits a closed pipe.
        let mut closed = Command::new("sh");
        closed.args(["-c", "exec 0<&-; exit 0"]);
        let text = "x".repeat(1 << 20);
        match pipe_to(closed, &text) {
            Ok(status) => assert!(status.success()),
            Err(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        }
    }

    #[test]
    fn test_missing_program_is_an_error() {
        assert!(pipe_to(Command::new("mood-quotes-no-such-program"), "x").is_err());
    }
}
