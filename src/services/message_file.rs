// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::CRLF;
use crate::error::{Error, Result};

/// Read the message file into lines. A missing file has no lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "message file does not exist yet");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(Error::ReadMessage {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect())
}

/// Rewrite every line ending (`\n`, `\r\n` or a lone `\r`) as CRLF.
pub fn normalize_line_endings(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 32);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(CRLF);
            }
            '\n' => out.push_str(CRLF),
            c => out.push(c),
        }
    }
    out
}

pub fn write_message(path: &Path, output: &str) -> Result<()> {
    let normalized = normalize_line_endings(output);
    fs::write(path, normalized.as_bytes()).map_err(|source| Error::WriteMessage {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = normalized.len(), "message written");
    Ok(())
}

/// Empty the message file so the calling tool aborts
pub fn truncate(path: &Path) -> Result<()> {
    write_message(path, "")
}
