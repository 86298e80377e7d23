pub mod console;

pub use console::{Command, ConsoleUi, ParseError};
