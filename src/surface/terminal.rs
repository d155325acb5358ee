// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use console::style;
use dialoguer::{Confirm, Editor, Input, Select};

use crate::config::Config;
use crate::dialog::Event;
use crate::domain::{CRLF, CommentMarker, Focus, Message};
use crate::error::Result;
use crate::surface::Surface;

const BODY_PREVIEW_LINES: usize = 8;

#[derive(Debug, Clone, Copy)]
enum Action {
    Edit,
    Switch,
    Format,
    Commit,
    Abort,
}

const ACTIONS: [Action; 5] = [
    Action::Edit,
    Action::Switch,
    Action::Format,
    Action::Commit,
    Action::Abort,
];

impl Action {
    fn label(self, focus: Focus) -> String {
        match self {
            Self::Edit => format!("Edit {}", focus.as_str()),
            Self::Switch => format!("Switch to {} (Tab)", focus.toggled().as_str()),
            Self::Format => "Format title and body (Ctrl+F)".into(),
            Self::Commit => "Commit (Ctrl+Enter)".into(),
            Self::Abort => "Abort commit (Esc)".into(),
        }
    }
}

/// Interactive surface: a command menu on stderr, a line prompt for the
/// title and the user's editor for the body.
pub struct TerminalSurface {
    title_max_length: usize,
    editor: Option<String>,
    title_length: String,
}

impl TerminalSurface {
    pub fn new(config: &Config) -> Self {
        Self {
            title_max_length: config.title_max_length,
            editor: config.editor.clone(),
            title_length: "0".into(),
        }
    }

    pub fn print_banner(&self) {
        eprintln!("{}", style("Enter Commit Message").bold());
        eprintln!(
            "  {} formats the title and wraps the body, {} writes the message, {} aborts",
            style("Format").cyan(),
            style("Commit").green(),
            style("Abort").red()
        );
    }

    fn render(&self, message: &Message, focus: Focus) {
        let cursor = |field: Focus| if field == focus { "›" } else { " " };

        let length = if self.title_length.ends_with('!') {
            style(format!("[{}]", self.title_length)).yellow().bold()
        } else {
            style(format!("[{}]", self.title_length)).dim()
        };
        let title = if message.title.is_empty() {
            style("(empty)".to_string()).dim()
        } else {
            style(message.title.clone())
        };

        eprintln!();
        eprintln!("{} {} {} {}", cursor(Focus::Title), style("Title").bold(), length, title);

        if message.body.is_empty() {
            eprintln!("{} {} {}", cursor(Focus::Body), style("Body").bold(), style("(empty)").dim());
            return;
        }

        eprintln!("{} {}", cursor(Focus::Body), style("Body").bold());
        let lines: Vec<&str> = message.body.split(CRLF).collect();
        for line in lines.iter().take(BODY_PREVIEW_LINES) {
            eprintln!("    {line}");
        }
        if lines.len() > BODY_PREVIEW_LINES {
            eprintln!(
                "    {}",
                style(format!("… {} more lines", lines.len() - BODY_PREVIEW_LINES)).dim()
            );
        }
    }

    fn edit_title(&self, current: &str) -> Result<Event> {
        let max = self.title_max_length;
        let title: String = Input::new()
            .with_prompt("Title")
            .with_initial_text(current)
            .allow_empty(true)
            .validate_with(move |input: &String| -> std::result::Result<(), String> {
                let n = input.chars().count();
                if n <= max {
                    Ok(())
                } else {
                    Err(format!("Title is {n} characters, the limit is {max}"))
                }
            })
            .interact_text()?;
        Ok(Event::TitleChanged(title))
    }

    fn edit_body(&self, current: &str) -> Result<Option<Event>> {
        let mut editor = Editor::new();
        editor.extension(".txt");
        if let Some(ref cmd) = self.editor {
            editor.executable(cmd);
        }

        let text = current.replace(CRLF, "\n");
        match editor.edit(&text)? {
            Some(edited) => Ok(Some(Event::BodyChanged(
                edited.trim_end_matches(['\r', '\n']).to_string(),
            ))),
            None => {
                eprintln!("{} Body unchanged (editor closed without saving)", style("info:").cyan());
                Ok(None)
            }
        }
    }
}

impl Surface for TerminalSurface {
    fn next_event(&mut self, message: &Message, focus: Focus) -> Result<Event> {
        loop {
            self.render(message, focus);

            let items: Vec<String> = ACTIONS.iter().map(|a| a.label(focus)).collect();
            let choice = Select::new()
                .with_prompt("Action")
                .items(&items)
                .default(0)
                .interact_opt()?;

            // Esc on the menu aborts, like Esc in the dialog
            let Some(action) = choice.map(|i| ACTIONS[i]) else {
                return Ok(Event::Abort);
            };

            match action {
                Action::Edit => match focus {
                    Focus::Title => return self.edit_title(&message.title),
                    Focus::Body => {
                        if let Some(event) = self.edit_body(&message.body)? {
                            return Ok(event);
                        }
                    }
                },
                Action::Switch => return Ok(Event::ToggleFocus),
                Action::Format => return Ok(Event::Reformat),
                Action::Commit => return Ok(Event::Commit),
                Action::Abort => return Ok(Event::Abort),
            }
        }
    }

    fn show_title_length(&mut self, label: &str) {
        self.title_length = label.to_string();
    }

    fn confirm_comment_lines(&mut self, marker: CommentMarker) -> Result<bool> {
        eprintln!(
            "{} Lines starting with '{}' will be dropped as comments by git.",
            style("warning:").yellow().bold(),
            marker
        );
        let proceed = Confirm::new()
            .with_prompt("Commit anyway?")
            .default(false)
            .interact_opt()?;
        Ok(proceed.unwrap_or(false))
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        eprintln!("{} {}: {}", style("error:").red().bold(), title, message);
    }
}
