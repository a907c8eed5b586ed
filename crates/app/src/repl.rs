//! Line-oriented quiz loop over any reader/writer pair.

use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

use services::{AnyQuizSession, QuizKind, SessionError};

use crate::command::{Command, HELP};
use crate::render::{render_history, render_home, render_view};

enum Outcome {
    Render,
    Print(String),
    Quit,
}

/// Show the home menu and read a quiz choice. `None` means the user quit.
///
/// # Errors
///
/// Returns I/O errors from `input` or `output`.
pub fn choose_quiz<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<QuizKind>> {
    writeln!(output, "{}", render_home())?;
    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let choice = line.trim();
        if matches!(choice, "q" | "quit" | "exit") {
            return Ok(None);
        }
        let picked = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| QuizKind::ALL.get(idx).copied());
        match picked {
            Some(kind) => return Ok(Some(kind)),
            None => writeln!(output, "choose 1-{} or q", QuizKind::ALL.len())?,
        }
    }
}

/// Run the quiz until the user quits or input ends.
///
/// Rejected transitions are reported and leave the session unchanged.
///
/// # Errors
///
/// Returns I/O errors from `input` or `output`.
pub fn run<R: BufRead, W: Write>(
    session: &mut AnyQuizSession,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{}", render_view(&session.view()))?;
    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err} (type ? for help)")?;
                continue;
            }
        };
        debug!(?command, "command");

        match apply(session, command) {
            Ok(Outcome::Render) => writeln!(output, "{}", render_view(&session.view()))?,
            Ok(Outcome::Print(text)) => writeln!(output, "{text}")?,
            Ok(Outcome::Quit) => break,
            Err(err) => writeln!(output, "{} {err}", "!".yellow())?,
        }
    }
    Ok(())
}

fn apply(session: &mut AnyQuizSession, command: Command) -> Result<Outcome, SessionError> {
    match command {
        Command::Select(number) => {
            let options = session.view().options;
            let Some(value) = number.checked_sub(1).and_then(|idx| options.get(idx)) else {
                return Ok(Outcome::Print(format!(
                    "choose an option between 1 and {}",
                    options.len()
                )));
            };
            session.select_option(value)?;
            Ok(Outcome::Render)
        }
        Command::Submit => {
            session.submit_answer()?;
            Ok(Outcome::Render)
        }
        Command::Next => {
            session.next_question()?;
            Ok(Outcome::Render)
        }
        Command::Reset => {
            session.reset()?;
            Ok(Outcome::Render)
        }
        Command::History => Ok(Outcome::Print(render_history(&session.view()))),
        Command::Help => Ok(Outcome::Print(HELP.to_string())),
        Command::Quit => Ok(Outcome::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use trivia_core::time::fixed_clock;

    fn run_script(session: &mut AnyQuizSession, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run(session, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn scripted_round_updates_score() {
        let mut session = AnyQuizSession::start(QuizKind::Composer, &fixed_clock()).unwrap();
        let out = run_script(&mut session, "2\ns\nh\nn\nq\n");

        assert_eq!(session.score().attempted(), 1);
        assert!(out.contains("Recent Answers"));
        assert!(!session.view().answered);
    }

    #[test]
    fn rejected_transitions_are_reported() {
        let mut session = AnyQuizSession::start(QuizKind::Movie, &fixed_clock()).unwrap();
        let out = run_script(&mut session, "s\nn\n9\nfoo\n");

        assert!(out.contains("no option selected"));
        assert!(out.contains("question not answered yet"));
        assert!(out.contains("choose an option between 1 and 4"));
        assert!(out.contains("unknown command: foo"));
        assert_eq!(session.score().attempted(), 0);
    }

    #[test]
    fn home_menu_picks_by_number() {
        let mut input = Cursor::new(b"x\n2\n".to_vec());
        let mut output = Vec::new();
        let kind = choose_quiz(&mut input, &mut output).unwrap();
        assert_eq!(kind, Some(QuizKind::Composer));

        let mut input = Cursor::new(b"q\n".to_vec());
        let kind = choose_quiz(&mut input, &mut Vec::new()).unwrap();
        assert_eq!(kind, None);
    }
}
