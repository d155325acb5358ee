// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::IsTerminal;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::dialog::Dialog;
use crate::error::{Error, Result};
use crate::services::session::SessionStore;
use crate::surface::{BatchSurface, TerminalSurface};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        // Nothing is read or written before the argument is known to be there
        if cli.command.is_none() && cli.file.is_none() {
            return Err(Error::MissingMessageFile);
        }

        let config = Config::load(&cli)?;
        debug!(
            max_width = config.max_width,
            default_marker = %config.default_marker,
            restore_session = config.restore_session,
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub fn run(&mut self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        let path = self.cli.file.clone().ok_or(Error::MissingMessageFile)?;
        let session = if self.cli.no_session {
            SessionStore::disabled()
        } else {
            SessionStore::from_config(&self.config)
        };
        debug!(
            file = %path.display(),
            session = ?session.path(),
            "opening message"
        );

        let mut dialog = Dialog::new(path, &self.config, session);

        if self.cli.format {
            let mut surface = BatchSurface::format(self.cli.yes);
            dialog.run(&mut surface)?;
            // Already printed by the surface; only the exit status is left
            if let Some(first) = surface.errors().first() {
                return Err(Error::Dialog(first.clone()));
            }
            return Ok(());
        }

        let is_interactive = std::io::stderr().is_terminal() && std::io::stdin().is_terminal();
        if !is_interactive {
            return Err(Error::NotInteractive);
        }

        let mut surface = TerminalSurface::new(&self.config);
        surface.print_banner();
        dialog.run(&mut surface)
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                println!("Max width: {}", self.config.max_width);
                println!("Tab width: {}", self.config.tab_width);
                println!("Title warn length: {}", self.config.title_warn_length);
                println!("Title max length: {}", self.config.title_max_length);
                println!("Default marker: {}", self.config.default_marker);
                println!("Restore session: {}", self.config.restore_session);
                match SessionStore::from_config(&self.config).path() {
                    Some(path) => println!("Session file: {}", path.display()),
                    None => println!("Session file: (none)"),
                }
                println!(
                    "Editor: {}",
                    self.config.editor.as_deref().unwrap_or("$VISUAL / $EDITOR")
                );
                if let Some(ref path) = Config::config_path() {
                    let status = if path.exists() { "found" } else { "not found" };
                    println!("Config file: {} ({})", path.display(), status);
                }
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "commitpad", &mut std::io::stdout());
                Ok(())
            }
        }
    }
}
