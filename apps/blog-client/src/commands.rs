//! Line commands - the user actions of the console client.

use std::str::FromStr;
use std::sync::Arc;

use inkpost_core::{ClientError, LifecycleController};
use inkpost_infra::MarkupEditor;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  new              open the compose dialog
  title <text>     set the post title
  author <text>    set the author
  body <markup>    replace the post body with markup
  text <text>      append a paragraph of plain text to the body
  submit           submit the post
  cancel           close the dialog and discard the draft
  reload           reload the feed
  help             show this help
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Title(String),
    Author(String),
    Body(String),
    Text(String),
    Submit,
    Cancel,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let argument = |name: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        match name {
            "new" => Ok(Command::New),
            "title" => argument("title").map(Command::Title),
            "author" => argument("author").map(Command::Author),
            "body" => argument("body").map(Command::Body),
            "text" => argument("text").map(Command::Text),
            "submit" => Ok(Command::Submit),
            "cancel" => Ok(Command::Cancel),
            "reload" => Ok(Command::Reload),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Whether the session keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A running client: the controller plus direct access to the editor
/// document for body input.
pub struct Session {
    controller: LifecycleController,
    editor: Arc<MarkupEditor>,
}

impl Session {
    pub fn new(controller: LifecycleController, editor: Arc<MarkupEditor>) -> Self {
        Self { controller, editor }
    }

    pub fn controller(&self) -> &LifecycleController {
        &self.controller
    }

    pub async fn start(&mut self) -> Result<(), ClientError> {
        self.controller.start().await
    }

    /// Run one command. Failures have already been shown to the user.
    pub async fn execute(&mut self, command: Command) -> Flow {
        let result = match command {
            Command::New => {
                self.controller.open_compose();
                Ok(())
            }
            Command::Title(title) => {
                self.controller.set_title(title);
                Ok(())
            }
            Command::Author(author) => {
                self.controller.set_author(author);
                Ok(())
            }
            Command::Body(markup) => {
                self.editor.set_markup(&markup);
                Ok(())
            }
            Command::Text(text) => {
                self.editor.insert_text(&text);
                Ok(())
            }
            Command::Submit => self.controller.submit().await.map(|outcome| {
                tracing::debug!(?outcome, "Submit finished");
            }),
            Command::Cancel => {
                self.controller.cancel();
                Ok(())
            }
            Command::Reload => self.controller.reload().await,
            Command::Help => {
                println!("{HELP}");
                Ok(())
            }
            Command::Quit => return Flow::Quit,
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, "Action failed");
        }
        Flow::Continue
    }
}
