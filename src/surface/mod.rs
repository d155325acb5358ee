// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::VecDeque;

use console::style;

use crate::dialog::Event;
use crate::domain::{CommentMarker, Focus, Message};
use crate::error::{Error, Result};

pub mod terminal;

pub use terminal::TerminalSurface;

/// The UI the dialog talks to.
pub trait Surface {
    /// Block until the user does something
    fn next_event(&mut self, message: &Message, focus: Focus) -> Result<Event>;

    /// Title length indicator, refreshed whenever the title changes
    fn show_title_length(&mut self, label: &str);

    /// Ask before writing lines that start with `marker`. Dismissing the
    /// question counts as a no.
    fn confirm_comment_lines(&mut self, marker: CommentMarker) -> Result<bool>;

    fn notify_error(&mut self, title: &str, message: &str);
}

/// Replays a fixed list of events without prompting (`--format`). Once the
/// list runs out the dialog is aborted.
pub struct BatchSurface {
    events: VecDeque<Event>,
    assume_yes: bool,
    errors: Vec<String>,
}

impl BatchSurface {
    pub fn new(events: impl IntoIterator<Item = Event>, assume_yes: bool) -> Self {
        Self {
            events: events.into_iter().collect(),
            assume_yes,
            errors: Vec::new(),
        }
    }

    /// Reformat, then commit
    pub fn format(assume_yes: bool) -> Self {
        Self::new([Event::Reformat, Event::Commit], assume_yes)
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl Surface for BatchSurface {
    fn next_event(&mut self, _message: &Message, _focus: Focus) -> Result<Event> {
        Ok(self.events.pop_front().unwrap_or(Event::Abort))
    }

    fn show_title_length(&mut self, _label: &str) {}

    fn confirm_comment_lines(&mut self, marker: CommentMarker) -> Result<bool> {
        if self.assume_yes {
            Ok(true)
        } else {
            Err(Error::CommentLines {
                marker: marker.as_char(),
            })
        }
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        eprintln!("{} {}: {}", style("error:").red().bold(), title, message);
        self.errors.push(format!("{title}: {message}"));
    }
}
