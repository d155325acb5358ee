// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use crate::domain::{CRLF, CommentMarker, Message};

/// Number of trailing non-empty lines that must agree on their first
/// character before it is taken as the comment marker.
pub const MARKER_SAMPLE: usize = 5;

/// Guess the comment marker from the instructions git appends to the file.
///
/// Only the tail is sampled so that body text starting with `#` doesn't
/// count. Falls back to `default` for short or mixed files.
pub fn detect_marker<S: AsRef<str>>(lines: &[S], default: CommentMarker) -> CommentMarker {
    let leading: Vec<char> = lines
        .iter()
        .filter_map(|line| line.as_ref().chars().next())
        .collect();

    if leading.len() > MARKER_SAMPLE {
        let tail = &leading[leading.len() - MARKER_SAMPLE..];
        if tail.iter().all(|c| *c == tail[0]) {
            return CommentMarker::new(tail[0]);
        }
    }

    default
}

/// Drop comment lines and split what's left into title and body.
///
/// Returns `None` when no content remains.
pub fn split_message<S: AsRef<str>>(lines: &[S], marker: CommentMarker) -> Option<Message> {
    let mut content = lines
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|line| !marker.marks(line))
        .skip_while(|line| line.is_empty());

    let title = content.next()?;
    let body = content.collect::<Vec<_>>().join(CRLF);

    Some(Message::new(title, body.trim()))
}

/// Whether any line of `output` would be read back as a comment
pub fn has_marker_line(output: &str, marker: CommentMarker) -> bool {
    marker.marks(output) || output.split('\n').skip(1).any(|line| marker.marks(line))
}
