// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::domain::CommentMarker;
use crate::error::{Error, Result};
use crate::services::reformat::{DEFAULT_MAX_WIDTH, DEFAULT_TAB_WIDTH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Body lines are wrapped at this many characters (default 72)
    #[serde(default = "default_max_width")]
    pub max_width: usize,

    /// Spaces substituted for each tab when reformatting (default 4)
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,

    /// Titles longer than this are flagged with `!` (default 50)
    #[serde(default = "default_title_warn_length")]
    pub title_warn_length: usize,

    /// Hard cap on interactively entered titles (default 72)
    #[serde(default = "default_title_max_length")]
    pub title_max_length: usize,

    /// Comment marker used when the message file doesn't reveal one
    #[serde(default = "default_marker")]
    pub default_marker: char,

    /// Restore the last message when the message file is empty
    #[serde(default = "default_true")]
    pub restore_session: bool,

    /// Override for the last-message snapshot location
    #[serde(default)]
    pub session_file: Option<PathBuf>,

    /// Editor command for the body (falls back to $VISUAL / $EDITOR)
    #[serde(default)]
    pub editor: Option<String>,
}

fn default_max_width() -> usize {
    DEFAULT_MAX_WIDTH
}
fn default_tab_width() -> usize {
    DEFAULT_TAB_WIDTH
}
fn default_title_warn_length() -> usize {
    50
}
fn default_title_max_length() -> usize {
    72
}
fn default_marker() -> char {
    CommentMarker::DEFAULT.as_char()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            tab_width: default_tab_width(),
            title_warn_length: default_title_warn_length(),
            title_max_length: default_title_max_length(),
            default_marker: default_marker(),
            restore_session: true,
            session_file: None,
            editor: None,
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.commitpad.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".commitpad.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // COMMITPAD_MAX_WIDTH, COMMITPAD_SESSION_FILE, ...
        figment = figment.merge(Env::prefixed("COMMITPAD_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "commitpad").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn marker(&self) -> CommentMarker {
        CommentMarker::new(self.default_marker)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(width) = cli.max_width {
            self.max_width = width;
        }
        if cli.no_session {
            self.restore_session = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(20..=1_000).contains(&self.max_width) {
            return Err(Error::Config(format!(
                "max_width must be 20–1000, got {}",
                self.max_width
            )));
        }

        if !(1..=16).contains(&self.tab_width) {
            return Err(Error::Config(format!(
                "tab_width must be 1–16, got {}",
                self.tab_width
            )));
        }

        if !(1..=1_000).contains(&self.title_max_length) {
            return Err(Error::Config(format!(
                "title_max_length must be 1–1000, got {}",
                self.title_max_length
            )));
        }

        if self.title_warn_length > self.title_max_length {
            return Err(Error::Config(format!(
                "title_warn_length ({}) cannot exceed title_max_length ({})",
                self.title_warn_length, self.title_max_length
            )));
        }

        if self.default_marker.is_whitespace() {
            return Err(Error::Config(
                "default_marker cannot be a whitespace character".into(),
            ));
        }

        Ok(())
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r##"# commitpad configuration

# Wrap body lines at this many characters
max_width = 72

# Spaces per tab when formatting
tab_width = 4

# Titles longer than this get a "!" next to their length
title_warn_length = 50

# Titles can't be longer than this
title_max_length = 72

# Comment marker to assume when the message file doesn't show one
# (git uses core.commentChar, "#" unless configured)
default_marker = "#"

# Restore the last aborted message when git hands over an empty file
restore_session = true

# Where the last message is kept (defaults to the user data directory)
# session_file = "/path/to/last_message"

# Editor for the body (defaults to $VISUAL, then $EDITOR)
# editor = "vim"
"##;

        fs::write(&path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
