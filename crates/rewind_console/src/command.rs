//! Parsing of console input lines into commands.

use derive_more::Display;
use rewind_tictactoe::{Action, Position, Resize};
use std::str::FromStr;
use tracing::instrument;

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark.
    Play(Position),
    /// Jump to a history entry.
    Jump(usize),
    /// Start over at an absolute size.
    Size(usize),
    /// Start over one size larger.
    Grow,
    /// Start over one size smaller.
    Shrink,
    /// List the move history.
    History,
    /// Redraw the board.
    Show,
    /// Dump the state as JSON.
    State,
    /// List commands.
    Help,
    /// Leave the console.
    Quit,
}

impl Command {
    /// The game action this command maps to, if it is one.
    pub fn action(self) -> Option<Action> {
        match self {
            Command::Play(position) => Some(Action::Play(position)),
            Command::Jump(index) => Some(Action::JumpTo(index)),
            Command::Size(size) => Some(Action::Resize(Resize::To(size))),
            Command::Grow => Some(Action::Resize(Resize::Grow)),
            Command::Shrink => Some(Action::Resize(Resize::Shrink)),
            Command::History | Command::Show | Command::State | Command::Help | Command::Quit => {
                None
            }
        }
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  play <row> <col>   place the next mark (alias: p)
  jump <index>       go to a history entry (alias: j)
  size <n>           start over on an n×n board
  grow | +           start over one size larger
  shrink | -         start over one size smaller
  history            list moves (alias: h)
  show               redraw the board (alias: s)
  state              print the game state as JSON
  help               this list (alias: ?)
  quit               leave (alias: q)";

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,

    /// First word is not a known command.
    #[display("Unrecognized command {:?}", _0)]
    Unknown(String),

    /// A required argument is absent.
    #[display("`{}` is missing its {} argument", command, argument)]
    MissingArgument {
        /// Command keyword.
        command: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// An argument is not a non-negative integer.
    #[display("{} must be a non-negative integer, got {:?}", argument, value)]
    InvalidNumber {
        /// Name of the argument.
        argument: &'static str,
        /// What was typed.
        value: String,
    },

    /// Extra words after a complete command.
    #[display("Unexpected argument {:?}", _0)]
    TrailingInput(String),
}

impl std::error::Error for CommandError {}

fn number<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<usize, CommandError> {
    let word = words
        .next()
        .ok_or(CommandError::MissingArgument { command, argument })?;
    word.parse().map_err(|_| CommandError::InvalidNumber {
        argument,
        value: word.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?.to_lowercase();

        let command = match keyword.as_str() {
            "play" | "p" => {
                let row = number(&mut words, "play", "row")?;
                let col = number(&mut words, "play", "col")?;
                Command::Play(Position::new(row, col))
            }
            "jump" | "j" => Command::Jump(number(&mut words, "jump", "index")?),
            "size" => Command::Size(number(&mut words, "size", "size")?),
            "grow" | "+" => Command::Grow,
            "shrink" | "-" => Command::Shrink,
            "history" | "h" => Command::History,
            "show" | "s" => Command::Show,
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(keyword)),
        };

        match words.next() {
            Some(extra) => Err(CommandError::TrailingInput(extra.to_string())),
            None => Ok(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_and_alias() {
        assert_eq!(
            "play 1 2".parse::<Command>(),
            Ok(Command::Play(Position::new(1, 2)))
        );
        assert_eq!(
            "  P 0 0 ".parse::<Command>(),
            Ok(Command::Play(Position::new(0, 0)))
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!("jump 4".parse::<Command>(), Ok(Command::Jump(4)));
        assert_eq!("size 5".parse::<Command>(), Ok(Command::Size(5)));
        assert_eq!("+".parse::<Command>(), Ok(Command::Grow));
        assert_eq!("Shrink".parse::<Command>(), Ok(Command::Shrink));
        assert_eq!("h".parse::<Command>(), Ok(Command::History));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "fly".parse::<Command>(),
            Err(CommandError::Unknown("fly".to_string()))
        );
        assert_eq!(
            "play 1".parse::<Command>(),
            Err(CommandError::MissingArgument {
                command: "play",
                argument: "col"
            })
        );
        assert_eq!(
            "jump -1".parse::<Command>(),
            Err(CommandError::InvalidNumber {
                argument: "index",
                value: "-1".to_string()
            })
        );
        assert_eq!(
            "show me".parse::<Command>(),
            Err(CommandError::TrailingInput("me".to_string()))
        );
    }

    #[test]
    fn test_action_mapping() {
        assert_eq!(Command::Grow.action(), Some(Action::Resize(Resize::Grow)));
        assert_eq!(Command::Jump(2).action(), Some(Action::JumpTo(2)));
        assert_eq!(Command::History.action(), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CommandError::MissingArgument {
                command: "jump",
                argument: "index"
            }
            .to_string(),
            "`jump` is missing its index argument"
        );
    }
}
