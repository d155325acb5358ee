// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::config::Config;
use crate::domain::Message;

pub const SESSION_FILE_NAME: &str = "last_message";

const SEPARATOR: u8 = 0;

/// Best-effort snapshot of the last title and body.
///
/// Stored as `title 0x00 body`. Every failure is swallowed: losing the
/// snapshot must never get in the way of committing.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: Option<PathBuf>,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A store that never reads or writes anything
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            path: config.session_file.clone().or_else(Self::default_path),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "commitpad").map(|dirs| dirs.data_dir().join(SESSION_FILE_NAME))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn save(&self, message: &Message) {
        let Some(path) = &self.path else {
            return;
        };

        let mut bytes = Vec::with_capacity(message.title.len() + message.body.len() + 1);
        bytes.extend_from_slice(message.title.as_bytes());
        bytes.push(SEPARATOR);
        bytes.extend_from_slice(message.body.as_bytes());

        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        match fs::write(path, bytes) {
            Ok(()) => debug!(path = %path.display(), "session saved"),
            Err(e) => debug!(path = %path.display(), error = %e, "session not saved"),
        }
    }

    pub fn load(&self) -> Message {
        let Some(path) = &self.path else {
            return Message::default();
        };

        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no session restored");
                return Message::default();
            }
        };

        match data.iter().position(|b| *b == SEPARATOR) {
            Some(i) => Message::new(
                String::from_utf8_lossy(&data[..i]),
                String::from_utf8_lossy(&data[i + 1..]),
            ),
            None => Message::new(String::from_utf8_lossy(&data), String::new()),
        }
    }
}
