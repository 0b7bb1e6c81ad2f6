//! Best-effort "open this URL in a browser"

use std::io::{self, Write};
use std::process::{Command, Stdio};

#[cfg(target_os = "windows")]
const OPENERS: &[&[&str]] = &[&["cmd", "/C", "start", ""]];
#[cfg(target_os = "macos")]
const OPENERS: &[&[&str]] = &[&["open"], &["xdg-open"]];
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const OPENERS: &[&[&str]] = &[&["xdg-open"], &["open"]];

/// Announce on `out`, then try each platform opener until one succeeds.
///
/// Nothing is propagated: a missing opener or a failed launch is only logged.
pub fn open_in_browser<W: Write>(url: &str, out: &mut W) {
    if let Err(e) = writeln!(out, "Opening browser for URL: {url}").and_then(|()| out.flush()) {
        tracing::debug!(target: "webcache::browser", error = %e, "could not write announcement");
    }

    for opener in OPENERS {
        match launch(opener, url) {
            Ok(true) => return,
            Ok(false) => {
                tracing::debug!(target: "webcache::browser", opener = opener[0], "opener exited unsuccessfully");
            }
            Err(e) => {
                tracing::debug!(target: "webcache::browser", opener = opener[0], error = %e, "opener not available");
            }
        }
    }

    tracing::warn!(target: "webcache::browser", url, "no browser could be opened");
}

fn launch(opener: &[&str], url: &str) -> io::Result<bool> {
    let (program, args) = opener
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty opener"))?;

    let status = Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    Ok(status.success())
}
