// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::{CommentMarker, Focus, Message};
use crate::error::Result;
use crate::services::{
    comments::{detect_marker, has_marker_line, split_message},
    message_file,
    reformat::Reformatter,
    session::SessionStore,
};
use crate::surface::Surface;

/// Something the user did to the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Show,
    TitleChanged(String),
    BodyChanged(String),
    Reformat,
    Commit,
    Abort,
    ToggleFocus,
    Close,
}

/// Whether the dialog keeps running after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Close,
}

/// Owns the message being composed and handles one event at a time.
pub struct Dialog {
    path: PathBuf,
    message: Message,
    marker: CommentMarker,
    focus: Focus,
    reformatter: Reformatter,
    session: SessionStore,
    default_marker: CommentMarker,
    restore_session: bool,
    title_warn_length: usize,
}

impl Dialog {
    pub fn new(path: impl Into<PathBuf>, config: &Config, session: SessionStore) -> Self {
        Self {
            path: path.into(),
            message: Message::default(),
            marker: config.marker(),
            focus: Focus::Title,
            reformatter: Reformatter::from_config(config),
            session,
            default_marker: config.marker(),
            restore_session: config.restore_session,
            title_warn_length: config.title_warn_length,
        }
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn marker(&self) -> CommentMarker {
        self.marker
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Show the dialog, feed it events from `surface` until it closes, then
    /// run the close handler. The close handler also runs when an event
    /// fails, so the snapshot survives interrupted sessions.
    pub fn run(&mut self, surface: &mut dyn Surface) -> Result<()> {
        let result = self.event_loop(surface);
        self.dispatch(Event::Close, surface)?;
        result
    }

    fn event_loop(&mut self, surface: &mut dyn Surface) -> Result<()> {
        self.dispatch(Event::Show, surface)?;
        loop {
            let event = surface.next_event(&self.message, self.focus)?;
            if self.dispatch(event, surface)? == Flow::Close {
                return Ok(());
            }
        }
    }

    pub fn dispatch(&mut self, event: Event, surface: &mut dyn Surface) -> Result<Flow> {
        debug!(?event, "dispatch");
        match event {
            Event::Show => self.on_show(surface),
            Event::TitleChanged(title) => {
                self.message.set_title(title);
                self.publish_title_length(surface);
                Ok(Flow::Continue)
            }
            Event::BodyChanged(body) => {
                self.message.body = message_file::normalize_line_endings(&body);
                Ok(Flow::Continue)
            }
            Event::Reformat => {
                self.message = self.reformatter.reformat(&self.message);
                self.publish_title_length(surface);
                Ok(Flow::Continue)
            }
            Event::Commit => self.on_commit(surface),
            Event::Abort => self.on_abort(surface),
            Event::ToggleFocus => {
                self.focus = self.focus.toggled();
                Ok(Flow::Continue)
            }
            Event::Close => {
                self.session.save(&self.message);
                Ok(Flow::Close)
            }
        }
    }

    fn on_show(&mut self, surface: &mut dyn Surface) -> Result<Flow> {
        let lines = match message_file::read_lines(&self.path) {
            Ok(lines) => lines,
            Err(e) => {
                warn!(error = %e, "could not read message file");
                surface.notify_error("Failed to read commit message", &error_chain(&e));
                Vec::new()
            }
        };

        self.marker = detect_marker(&lines, self.default_marker);
        debug!(marker = %self.marker, lines = lines.len(), "comment marker detected");

        self.message = match split_message(&lines, self.marker) {
            Some(message) => message,
            None if self.restore_session => {
                debug!("message file has no content, restoring last session");
                self.session.load()
            }
            None => Message::default(),
        };

        self.focus = Focus::Title;
        self.publish_title_length(surface);
        Ok(Flow::Continue)
    }

    fn on_commit(&mut self, surface: &mut dyn Surface) -> Result<Flow> {
        let output = message_file::normalize_line_endings(&self.message.compose());

        if has_marker_line(&output, self.marker) && !surface.confirm_comment_lines(self.marker)? {
            debug!("commit cancelled at comment warning");
            return Ok(Flow::Continue);
        }

        if let Err(e) = message_file::write_message(&self.path, &output) {
            warn!(error = %e, "commit message not written");
            surface.notify_error("Failed to save commit message", &error_chain(&e));
        }

        // The next session should start empty after a commit
        self.message.clear();
        Ok(Flow::Close)
    }

    fn on_abort(&mut self, surface: &mut dyn Surface) -> Result<Flow> {
        if let Err(e) = message_file::truncate(&self.path) {
            warn!(error = %e, "message file not truncated");
            surface.notify_error("Failed to abort commit", &error_chain(&e));
        }
        Ok(Flow::Close)
    }

    fn publish_title_length(&self, surface: &mut dyn Surface) {
        surface.show_title_length(&self.message.title_length_label(self.title_warn_length));
    }
}

fn error_chain(e: &dyn std::error::Error) -> String {
    let mut text = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
