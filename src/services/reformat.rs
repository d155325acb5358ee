// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::config::Config;
use crate::domain::{CRLF, Message};
use crate::services::message_file::normalize_line_endings;

pub const DEFAULT_MAX_WIDTH: usize = 72;
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Title cleanup and greedy body reflow.
///
/// Widths are counted in characters, not bytes. Reflow never breaks a word:
/// a token longer than the width stays on its own over-long line. Wrapped
/// continuation lines repeat the indentation of the line they came from, so
/// bullet lists keep a hanging indent.
#[derive(Debug, Clone, Copy)]
pub struct Reformatter {
    max_width: usize,
    tab_width: usize,
}

impl Default for Reformatter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WIDTH, DEFAULT_TAB_WIDTH)
    }
}

impl Reformatter {
    pub fn new(max_width: usize, tab_width: usize) -> Self {
        Self {
            max_width,
            tab_width,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_width, config.tab_width)
    }

    pub fn reformat(&self, message: &Message) -> Message {
        Message::new(self.title(&message.title), self.body(&message.body))
    }

    /// Trim, drop trailing periods and capitalize.
    pub fn title(&self, title: &str) -> String {
        // "blah . . ." needs several rounds
        let mut title = title.trim();
        loop {
            let before = title;
            title = title.trim();
            title = title.strip_suffix('.').unwrap_or(title);
            if title == before {
                break;
            }
        }
        capitalize(title)
    }

    pub fn body(&self, body: &str) -> String {
        let cleaned = body.trim().replace('\t', &" ".repeat(self.tab_width));
        let cleaned = normalize_line_endings(&cleaned);

        let mut lines = Vec::new();
        for line in cleaned.split(CRLF) {
            let indent = indentation_width(line);
            let (mut head, mut tail) = self.split_line(line, indent);
            lines.push(head);
            while let Some(rest) = tail {
                (head, tail) = self.split_line(&rest, indent);
                lines.push(head);
            }
        }
        lines.join(CRLF)
    }

    /// Break `line` at the last space that fits, returning the part that
    /// stays and, if anything was cut, the indented remainder.
    fn split_line(&self, line: &str, indent: usize) -> (String, Option<String>) {
        if line.chars().count() <= self.max_width {
            return (line.to_string(), None);
        }

        let window_end = byte_offset(line, self.max_width);
        let indent_end = byte_offset(line, indent);

        // Spaces inside the indentation are never break points
        match line[..window_end].rfind(' ') {
            Some(i) if i > indent_end => {
                let rest = format!("{}{}", " ".repeat(indent), &line[i + 1..]);
                (line[..i].to_string(), Some(rest))
            }
            _ => (line.to_string(), None),
        }
    }
}

/// Uppercase the first character, leave the rest alone
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Number of leading characters that are neither letters nor decimal
/// digits: whitespace, bullets (including `①` or `½`), quote markers and
/// the like.
pub fn indentation_width(line: &str) -> usize {
    line.chars().take_while(|&c| !starts_text(c)).count()
}

fn starts_text(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
    )
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}
