//! Interactive terminal front-end
//!
//! The only layer that touches stdin/stdout. It parses one command per
//! line, forwards actions to the controller, and re-renders the filtered
//! list with its derived footer after every change. Input validation that
//! the reducer deliberately does not do lives here: blank titles are
//! rejected before dispatch, and committing an edit with an empty title
//! deletes the task instead.

use crate::app::controller::TaskController;
use crate::domain::reducer::Action;
use crate::domain::task::{Task, TaskId};
use crate::domain::view::{self, Filter};
use crate::store::blob::BlobStore;
use std::io::{BufRead, Write};

/// One parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { title: String },
    Toggle { id: TaskId },
    Delete { id: TaskId },
    Edit { id: TaskId, title: String },
    Clear,
    ToggleAll,
    Filter(Filter),
    List,
    Help,
    Quit,
}

/// Errors produced while parsing a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line was empty
    Empty,
    /// The first word is not a known command
    UnknownCommand(String),
    /// The command needs an id and none (or a non-numeric one) was given
    InvalidId,
    /// `add` was called with a blank title
    BlankTitle,
    /// `filter` was called with something other than all/active/completed
    InvalidFilter(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::UnknownCommand(word) => write!(f, "unknown command '{word}'"),
            ParseError::InvalidId => write!(f, "expected a numeric task id"),
            ParseError::BlankTitle => write!(f, "title must not be blank"),
            ParseError::InvalidFilter(word) => {
                write!(f, "unknown filter '{word}' (all, active, completed)")
            }
        }
    }
}

/// Parses one input line into a command
///
/// Titles keep their inner whitespace but are trimmed at the edges; a
/// title that trims to nothing is rejected here so the reducer never
/// sees it.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None if line.is_empty() => return Err(ParseError::Empty),
        None => (line, ""),
    };

    match word {
        "add" => {
            if rest.is_empty() {
                Err(ParseError::BlankTitle)
            } else {
                Ok(Command::Add {
                    title: rest.to_string(),
                })
            }
        }
        "toggle" => parse_id(rest).map(|id| Command::Toggle { id }),
        "rm" | "delete" => parse_id(rest).map(|id| Command::Delete { id }),
        "edit" => {
            let (id_word, title) = match rest.split_once(char::is_whitespace) {
                Some((id_word, title)) => (id_word, title.trim()),
                None => (rest, ""),
            };
            let id = parse_id(id_word)?;
            Ok(Command::Edit {
                id,
                title: title.to_string(),
            })
        }
        "clear" => Ok(Command::Clear),
        "toggle-all" => Ok(Command::ToggleAll),
        "filter" => match rest {
            "all" => Ok(Command::Filter(Filter::All)),
            "active" => Ok(Command::Filter(Filter::Active)),
            "completed" => Ok(Command::Filter(Filter::Completed)),
            other => Err(ParseError::InvalidFilter(other.to_string())),
        },
        "list" | "ls" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_id(word: &str) -> Result<TaskId, ParseError> {
    word.parse().map_err(|_| ParseError::InvalidId)
}

const USAGE: &str = "commands:\n  \
    add <title>        create a task\n  \
    toggle <id>        flip a task's completion\n  \
    rm <id>            delete a task\n  \
    edit <id> <title>  retitle a task (empty title deletes it)\n  \
    clear              remove all completed tasks\n  \
    toggle-all         mark all complete, or all active if already complete\n  \
    filter <which>     all | active | completed\n  \
    list               show tasks under the current filter\n  \
    quit               exit";

/// Terminal session over a controller
pub struct ConsoleUi<B: BlobStore> {
    controller: TaskController<B>,
    filter: Filter,
}

impl<B: BlobStore> ConsoleUi<B> {
    pub fn new(controller: TaskController<B>) -> Self {
        Self {
            controller,
            filter: Filter::All,
        }
    }

    /// Runs the command loop until quit or end of input
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
        writeln!(output, "{USAGE}")?;
        self.render(&mut output)?;

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(output, "{USAGE}")?,
                Ok(command) => {
                    self.apply(command);
                    self.render(&mut output)?;
                }
                Err(ParseError::Empty) => {}
                Err(err) => writeln!(output, "error: {err}")?,
            }
        }

        Ok(())
    }

    /// Applies one command to the controller
    ///
    /// `Quit` and `Help` are handled by the loop; here they fall through
    /// as no-ops.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Add { title } => {
                self.controller.add_task(title);
            }
            Command::Toggle { id } => self.controller.dispatch(Action::Toggle(id)),
            Command::Delete { id } => self.controller.dispatch(Action::Delete(id)),
            Command::Edit { id, title } => {
                // Committing an empty title deletes the task instead
                if title.is_empty() {
                    self.controller.dispatch(Action::Delete(id));
                } else {
                    self.controller.dispatch(Action::Edit(Task {
                        id,
                        title,
                        completed: false,
                    }));
                }
            }
            Command::Clear => self.controller.dispatch(Action::Clear),
            Command::ToggleAll => {
                let target = !self.controller.all_complete();
                self.controller.dispatch(Action::ToggleAll(target));
            }
            Command::Filter(filter) => self.filter = filter,
            Command::List | Command::Help | Command::Quit => {}
        }
    }

    /// Renders the filtered list and the derived footer
    fn render(&self, output: &mut impl Write) -> std::io::Result<()> {
        let state = self.controller.state();

        for task in view::filtered(state, self.filter) {
            let mark = if task.completed { "x" } else { " " };
            writeln!(output, "[{mark}] {:>3}  {}", task.id, task.title)?;
        }

        let filter_label = match self.filter {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        };
        writeln!(
            output,
            "-- {} item(s) left | filter: {filter_label}{}",
            self.controller.remaining(),
            if self.controller.all_complete() && !state.is_empty() {
                " | all complete"
            } else {
                ""
            }
        )
    }

    #[cfg(test)]
    fn controller(&self) -> &TaskController<B> {
        &self.controller
    }
}
