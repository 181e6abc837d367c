//! eqviz CLI
//!
//! Command-line front end for the equalizer curve and editing core.

use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use eqviz::cli::{commands, Cli, Commands};
use eqviz::config::EditorConfig;
use eqviz::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("eqviz v{}", env!("CARGO_PKG_VERSION"));

    let config = commands::load_config(cli.config.as_deref())?;
    debug!("Using config: {:?}", config);

    match cli.command {
        Some(cmd) => handle_command(cmd, &config),
        None => {
            println!("eqviz v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands, config: &EditorConfig) -> Result<()> {
    match cmd {
        Commands::Curve {
            state,
            width,
            height,
        } => commands::curve(config, state.as_deref(), width, height),
        Commands::Points {
            state,
            width,
            height,
        } => commands::points(config, state.as_deref(), width, height),
        Commands::Drag {
            state,
            events,
            width,
            height,
        } => commands::drag(config, &state, &events, width, height),
        Commands::Dial {
            band,
            param,
            angle,
            state,
        } => commands::dial(band, param, angle, state.as_deref()),
        Commands::Reset => commands::reset(),
    }
}
