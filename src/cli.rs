// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "commitpad")]
#[command(version)]
#[command(about = "Commit message editor with title and body formatting", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Commit message file to edit (git passes this to core.editor).
    /// A file named after a subcommand has to be spelled as a path, e.g.
    /// `./init`.
    pub file: Option<PathBuf>,

    /// Reformat and save the message without prompting
    #[arg(long)]
    pub format: bool,

    /// Write the message even if it contains comment-marker lines
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Neither restore nor remember the last message
    #[arg(long)]
    pub no_session: bool,

    /// Maximum body line width
    #[arg(long, value_name = "COLUMNS")]
    pub max_width: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
