// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::VecDeque;

use commitpad::Event;
use commitpad::domain::{CommentMarker, Focus, Message};
use commitpad::surface::Surface;

/// Comment block git appends to COMMIT_EDITMSG
#[allow(dead_code)]
pub const GIT_COMMENTS: &str = "# Please enter the commit message for your changes. Lines starting
# with '#' will be ignored, and an empty message aborts the commit.
#
# On branch main
# Changes to be committed:
#\tmodified:   src/lib.rs
#
";

/// Join lines with CRLF
#[allow(dead_code)]
pub fn crlf(lines: &[&str]) -> String {
    lines.join("\r\n")
}

/// Surface that plays back a fixed script and records what the dialog
/// showed it.
#[allow(dead_code)]
pub struct ScriptedSurface {
    events: VecDeque<Event>,
    /// Answer to the comment warning; `None` dismisses it
    pub answer: Option<bool>,
    pub title_lengths: Vec<String>,
    pub errors: Vec<String>,
    pub confirmations: usize,
}

#[allow(dead_code)]
impl ScriptedSurface {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            answer: None,
            title_lengths: Vec::new(),
            errors: Vec::new(),
            confirmations: 0,
        }
    }

    pub fn answering(mut self, answer: bool) -> Self {
        self.answer = Some(answer);
        self
    }
}

impl Surface for ScriptedSurface {
    fn next_event(&mut self, _message: &Message, _focus: Focus) -> commitpad::Result<Event> {
        Ok(self
            .events
            .pop_front()
            .expect("script ran out of events before the dialog closed"))
    }

    fn show_title_length(&mut self, label: &str) {
        self.title_lengths.push(label.to_string());
    }

    fn confirm_comment_lines(&mut self, _marker: CommentMarker) -> commitpad::Result<bool> {
        self.confirmations += 1;
        Ok(self.answer.unwrap_or(false))
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        self.errors.push(format!("{title}: {message}"));
    }
}
