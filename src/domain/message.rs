// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

pub const CRLF: &str = "\r\n";

/// Title and body being composed in the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub title: String,
    pub body: String,
}

impl Message {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let mut message = Self {
            title: String::new(),
            body: body.into(),
        };
        message.set_title(title);
        message
    }

    /// Replace the title, keeping only its first line.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.title = match title.find(['\r', '\n']) {
            Some(end) => title[..end].to_string(),
            None => title,
        };
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
    }

    /// Text written to the message file: the title, then a blank line and
    /// the body when there is one.
    pub fn compose(&self) -> String {
        if self.body.is_empty() {
            self.title.clone()
        } else {
            format!("{}{CRLF}{CRLF}{}", self.title, self.body)
        }
    }

    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    /// Character count of the title, flagged with `!` past `warn_length`
    pub fn title_length_label(&self, warn_length: usize) -> String {
        let n = self.title_len();
        if n > warn_length {
            format!("{n} !")
        } else {
            n.to_string()
        }
    }
}

/// Which input field edits apply to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Title,
    Body,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Title => Self::Body,
            Self::Body => Self::Title,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Body => "body",
        }
    }
}
