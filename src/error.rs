// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Expecting the commit message file as argument")]
    #[diagnostic(
        code(commitpad::usage),
        help("Register commitpad as git's editor: git config --global core.editor commitpad")
    )]
    MissingMessageFile,

    #[error("Failed to read commit message from {}", .path.display())]
    #[diagnostic(code(commitpad::io::read))]
    ReadMessage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save commit message to {}", .path.display())]
    #[diagnostic(
        code(commitpad::io::write),
        help("Check that the file is writable")
    )]
    WriteMessage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Message contains lines starting with the comment marker '{marker}'")]
    #[diagnostic(
        code(commitpad::commit::comment_lines),
        help("Those lines would be dropped as comments. Pass --yes to write the message anyway")
    )]
    CommentLines { marker: char },

    #[error("Not a terminal")]
    #[diagnostic(
        code(commitpad::not_interactive),
        help("Use --format to reformat the message without prompting")
    )]
    NotInteractive,

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Configuration error: {0}")]
    #[diagnostic(code(commitpad::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                Error::Cancelled
            }
            other => Error::Dialog(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
