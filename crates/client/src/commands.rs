//! Interactive command parsing.

use thiserror::Error;

/// One operator action typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the code input.
    SetCode(String),
    /// Look up the current code.
    Read,
    /// Set the code and look it up in one go (scanner-style input).
    Scan(String),
    Add,
    Buy,
    List,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("nothing entered")]
    Empty,
    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(&'static str),
}

pub const HELP: &str = "\
commands:
  code <text>   set the product code
  read          look up the current code
  add           add the shown product to the purchase list
  buy           complete the purchase and clear the list
  list          show the purchase list
  show          show the code and the current product
  help          this text
  quit          leave
any other input is treated as a code and looked up immediately";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let bare = |cmd: Command, name: &'static str| {
            if rest.is_empty() {
                Ok(cmd)
            } else {
                Err(CommandError::UnexpectedArgument(name))
            }
        };

        match word {
            // `code` with no argument clears the input
            "code" => Ok(Command::SetCode(rest.to_string())),
            "read" => bare(Command::Read, "read"),
            "add" => bare(Command::Add, "add"),
            "buy" => bare(Command::Buy, "buy"),
            "list" => bare(Command::List, "list"),
            "show" => bare(Command::Show, "show"),
            "help" | "?" => bare(Command::Help, "help"),
            "quit" | "exit" => bare(Command::Quit, "quit"),
            _ => Ok(Command::Scan(line.to_string())),
        }
    }
}
