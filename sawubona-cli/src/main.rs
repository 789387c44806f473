//! Sawubona CLI - lesson kit on the console
//!
//! Runs the school mapping lesson and the Ubuntu helper game in a terminal.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sawubona_cli::commands;
use sawubona_cli::{config, CliError, Console};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sawubona")]
#[command(about = "School mapping and Ubuntu lessons on the console", long_about = None)]
struct Cli {
    /// Lesson configuration file (TOML); the bundled school catalog is used if omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Width and height of the map grid (overrides the config file)
    #[arg(long, global = true)]
    grid_size: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Map the reference school and measure a distance
    Demo,
    /// Build your own school map from a menu
    Interactive,
    /// List the location types in every language
    Catalog,
    /// Play the Ubuntu community helper game
    Game,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        e.exit();
    }
    if let Err(e) = run(cli) {
        e.exit();
    }
}

/// Log to stderr so lesson output on stdout stays clean
fn init_logging() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}

fn run(cli: Cli) -> Result<(), CliError> {
    let lesson = config::load(cli.config.as_deref(), cli.grid_size)?;
    let catalog = config::catalog(&lesson)?;
    let grid_size = lesson.map.grid_size;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => commands::demo::run(&mut console, &catalog, grid_size),
        Command::Interactive => commands::interactive::run(&mut console, &catalog, grid_size),
        Command::Catalog => commands::catalog::run(&mut console, &catalog),
        Command::Game => commands::game::run(&mut console).map(|score| {
            tracing::info!(total = score.total, rounds = score.rounds, "Game finished");
        }),
    }
}
