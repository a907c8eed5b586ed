use std::fmt;
use std::str::FromStr;

/// One line of REPL input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 1-based option number.
    Select(usize),
    Submit,
    Next,
    Reset,
    History,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCommandError {
    raw: String,
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command: {}", self.raw)
    }
}

impl std::error::Error for ParseCommandError {}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if let Ok(number) = raw.parse::<usize>() {
            return Ok(Self::Select(number));
        }
        match raw.to_ascii_lowercase().as_str() {
            "s" | "submit" => Ok(Self::Submit),
            "n" | "next" => Ok(Self::Next),
            "r" | "reset" => Ok(Self::Reset),
            "h" | "history" => Ok(Self::History),
            "?" | "help" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => Err(ParseCommandError {
                raw: raw.to_string(),
            }),
        }
    }
}

pub const HELP: &str = "\
Commands:
  1-4          select an option
  s, submit    submit the selected option
  n, next      next question (after answering)
  r, reset     reset score and history
  h, history   show recent answers
  ?, help      show this help
  q, quit      leave the quiz";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_as_selection() {
        assert_eq!("3".parse::<Command>(), Ok(Command::Select(3)));
        assert_eq!(" 1 ".parse::<Command>(), Ok(Command::Select(1)));
    }

    #[test]
    fn parses_words_and_shortcuts() {
        assert_eq!("s".parse::<Command>(), Ok(Command::Submit));
        assert_eq!("NEXT".parse::<Command>(), Ok(Command::Next));
        assert_eq!("reset".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("h".parse::<Command>(), Ok(Command::History));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_unknown_input() {
        let err = "launch".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "unknown command: launch");
    }
}
