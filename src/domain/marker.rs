// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

/// Leading character that marks a line as a comment in the message file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentMarker(char);

impl CommentMarker {
    pub const DEFAULT: CommentMarker = CommentMarker('#');

    pub fn new(c: char) -> Self {
        Self(c)
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    /// Whether `line` is a comment line under this marker
    pub fn marks(&self, line: &str) -> bool {
        line.starts_with(self.0)
    }
}

impl Default for CommentMarker {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for CommentMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
