//! Terminal front-end for the film music trivia quizzes.

mod command;
mod render;
mod repl;
mod summary;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use services::{AnyQuizSession, Clock, QuizKind};
use summary::SessionSummary;

#[derive(Debug, Parser)]
#[command(name = "trivia", version, about = "Film music trivia in the terminal")]
struct Cli {
    /// Quiz to start; shows the home menu when omitted
    #[arg(long, value_enum, env = "TRIVIA_QUIZ")]
    quiz: Option<QuizArg>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print a JSON summary of the session on exit
    #[arg(long)]
    summary_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum QuizArg {
    Composer,
    Movie,
}

impl From<QuizArg> for QuizKind {
    fn from(arg: QuizArg) -> Self {
        match arg {
            QuizArg::Composer => QuizKind::Composer,
            QuizArg::Movie => QuizKind::Movie,
        }
    }
}

/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let kind = match cli.quiz {
        Some(arg) => QuizKind::from(arg),
        None => match repl::choose_quiz(&mut input, &mut output)? {
            Some(kind) => kind,
            None => return Ok(()),
        },
    };

    let clock = Clock::default_clock();
    let mut session = AnyQuizSession::start(kind, &clock)?;
    repl::run(&mut session, &mut input, &mut output)?;

    let score = session.score();
    info!(quiz = %kind, %score, "quiz finished");

    if cli.summary_json {
        let summary = SessionSummary::from_session(&session);
        writeln!(output, "{}", serde_json::to_string_pretty(&summary)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_quiz_and_verbosity() {
        let cli = Cli::try_parse_from(["trivia", "--quiz", "movie", "-vv", "--summary-json"])
            .unwrap();
        assert_eq!(cli.quiz, Some(QuizArg::Movie));
        assert_eq!(cli.verbose, 2);
        assert!(cli.summary_json);
    }

    #[test]
    fn cli_rejects_unknown_quiz() {
        assert!(Cli::try_parse_from(["trivia", "--quiz", "opera"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
