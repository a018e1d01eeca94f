use std::io;
use std::process::ExitCode;

use clap::Parser;
use services::QuizSession;
use tracing::info;

mod cli;
mod error;
mod telemetry;
mod terminal;
mod vm;

use cli::Cli;
use error::AppError;
use terminal::{RunEnd, Terminal};

fn run(cli: &Cli) -> Result<RunEnd, AppError> {
    let config = cli.digit_config()?;
    let mut session = QuizSession::new().with_generator(cli.generator());
    info!(%config, seeded = cli.seed.is_some(), "launching drill");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock(), cli.run_options());
    terminal.run(&mut session, config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing();

    match run(&cli) {
        Ok(end) => {
            info!(?end, "drill ended");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // binary glue: report once and exit non-zero
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
