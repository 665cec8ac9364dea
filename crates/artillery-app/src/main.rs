use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;

use artillery_app::cli::Cli;
use artillery_app::console::StdConsole;
use artillery_app::session;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.game_config()?;
    tracing::debug!(?config, seed = cli.seed, "configuration loaded");

    if cli.test {
        for line in session::test_shot(&config, &cli.test_shot(), cli.seed)? {
            println!("{line}");
        }
        return Ok(());
    }

    let summary = match &cli.answers {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening answers {}", path.display()))?;
            let mut console =
                StdConsole::new(BufReader::new(file), io::stdout().lock()).echo_answers();
            session::play(&mut console, &config, cli.seed)?
        }
        None => {
            let mut console = StdConsole::new(io::stdin().lock(), io::stdout().lock());
            session::play(&mut console, &config, cli.seed)?
        }
    };
    tracing::info!(games = summary.games, input_closed = summary.input_closed, "session over");
    Ok(())
}
