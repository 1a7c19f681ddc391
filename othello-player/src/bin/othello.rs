use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use async_std::task;
use clap::Parser;

use othello_player::connectors::{ConsoleConnector, ScriptConnector};
use othello_player::{run_match, MatchConfig, MatchOptions, MatchReport, Script, SMOKE_TEST};

/// Play Othello from a move script or the console.
#[derive(Parser)]
#[command(name = "othello", about = "Play Othello from a move script or the console")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "othello.toml")]
    config: PathBuf,

    /// Move script to replay, overriding the configuration
    #[arg(long, conflicts_with_all = ["smoke_test", "interactive"])]
    script: Option<PathBuf>,

    /// Replay the built-in smoke test game
    #[arg(long, conflicts_with = "interactive")]
    smoke_test: bool,

    /// Read moves from the console
    #[arg(long)]
    interactive: bool,

    /// Override the black player's name
    #[arg(long)]
    black: Option<String>,

    /// Override the white player's name
    #[arg(long)]
    white: Option<String>,

    /// Do not print the board after each move
    #[arg(long)]
    quiet: bool,
}

async fn play(
    interactive: bool,
    smoke_test: bool,
    config: &MatchConfig,
    options: MatchOptions,
) -> Result<MatchReport> {
    let roster = config.roster();

    if interactive {
        let mut connector = ConsoleConnector::new();
        return Ok(run_match(&mut connector, &roster, options).await?);
    }

    let script = if smoke_test {
        Script::parse(SMOKE_TEST)?
    } else {
        match &config.script {
            Some(path) => Script::load(path)?,
            None => bail!("no moves to play: pass --script, --smoke-test or --interactive"),
        }
    };

    let mut connector = ScriptConnector::new(script);
    let report = run_match(&mut connector, &roster, options).await?;
    if connector.remaining() > 0 {
        eprintln!(
            "Game ended with {} scripted moves left unplayed",
            connector.remaining()
        );
    }
    Ok(report)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = MatchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(name) = cli.black {
        config.black = name;
    }
    if let Some(name) = cli.white {
        config.white = name;
    }
    if cli.script.is_some() {
        config.script = cli.script;
    }
    if cli.quiet {
        config.render = false;
    }
    config.validate()?;

    let options = MatchOptions {
        render: config.render,
    };

    let report = task::block_on(play(cli.interactive, cli.smoke_test, &config, options))?;

    if report.game_over().is_none() {
        println!(
            "Moves ran out before the game finished ({} played, {} rejected)",
            report.played, report.rejected
        );
    }

    Ok(())
}
