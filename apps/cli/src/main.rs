//! Meridian CLI - Command-line interface for the Meridian mission engine
//!
//! This CLI provides an `mrd` command for decomposing mission directives
//! into task plans and running them through the executor.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Meridian CLI - Mission planning and task execution
#[derive(Parser, Debug)]
#[command(
    name = "mrd",
    author,
    version,
    about = "Meridian - Mission planning and task execution",
    long_about = "Meridian (mrd) decomposes high-level mission directives into \
dependency-ordered tasks, schedules them by priority, and executes them \
through pluggable tools."
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mission planning operations
    #[command(subcommand)]
    Mission(commands::mission::MissionCommand),

    /// Plan a mission and execute every task through the built-in tools
    Run {
        /// Path to a TOML directive file
        #[arg(long)]
        file: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Mission(command) => commands::mission::execute(command).await,
        Command::Run { file } => commands::run::execute(&file).await,
    }
}
