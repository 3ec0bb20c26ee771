//! # Purlin Designer CLI
//!
//! Line-driven front end for the design pages. Reads commands from stdin (or a
//! script piped in), applies them to the same page state the GUI uses, and
//! prints page state and rejected edits as JSON.
//!
//! ```text
//! $ printf 'go /project\nspans 3\nstate\n' | purlin_cli
//! ```
//!
//! Type `help` for the command list.

mod script;
mod session;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use purlin_core::{AppConfig, PurlinError};

use script::parse_line;
use session::{Outcome, Session};

fn init_tracing(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn report(line_no: usize, error: &PurlinError) {
    eprintln!("line {}: {}", line_no, error);
    if let Ok(json) = serde_json::to_string(error) {
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    let (config, config_error) = match AppConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_tracing(&config);
    if let Some(e) = config_error {
        warn!(error = %e, "invalid configuration, using defaults");
    }

    let mut session = match Session::new(&config) {
        Ok(session) => session,
        Err(e) => {
            report(0, &e);
            return ExitCode::FAILURE;
        }
    };

    let interactive = io::stdin().is_terminal();
    if interactive {
        println!("Purlin Designer CLI - type 'help' for commands");
    }

    let mut rejected = 0usize;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut line_no = 0usize;

    loop {
        if interactive {
            print!("{}> ", session.page().route());
            if io::stdout().flush().is_err() {
                break;
            }
        }
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        line_no += 1;

        let outcome = parse_line(&line).and_then(|action| match action {
            Some(action) => session.run(action),
            None => Ok(Outcome::Continue),
        });
        match outcome {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Print(text)) => println!("{}", text),
            Ok(Outcome::Quit) => break,
            Err(e) => {
                rejected += 1;
                report(line_no, &e);
            }
        }
    }

    info!(lines = line_no, rejected, "session finished");
    if rejected > 0 && !interactive {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
