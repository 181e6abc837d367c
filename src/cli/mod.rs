//! CLI Module
//!
//! Command-line front end for inspecting curves and replaying edits.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::controls::DialParam;
use crate::dsp::BandId;

/// eqviz - three-band equalizer curve and editing tool
#[derive(Parser, Debug)]
#[command(name = "eqviz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Editor config file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the sampled response curve and control points
    #[command(name = "curve")]
    Curve {
        /// Equalizer state file (defaults when omitted)
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Surface width in pixels
        #[arg(long, default_value_t = 800.0)]
        width: f64,

        /// Surface height in pixels
        #[arg(long, default_value_t = 400.0)]
        height: f64,
    },

    /// Print the control point positions
    #[command(name = "points")]
    Points {
        /// Equalizer state file (defaults when omitted)
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Surface width in pixels
        #[arg(long)]
        width: f64,

        /// Surface height in pixels
        #[arg(long)]
        height: f64,
    },

    /// Replay a pointer event script and print the resulting state
    #[command(name = "drag")]
    Drag {
        /// Equalizer state file
        #[arg(short, long)]
        state: PathBuf,

        /// Pointer event script (JSON array)
        #[arg(short, long)]
        events: PathBuf,

        /// Surface width in pixels
        #[arg(long)]
        width: f64,

        /// Surface height in pixels
        #[arg(long)]
        height: f64,
    },

    /// Set a band parameter from a dial angle
    #[command(name = "dial")]
    Dial {
        /// Band to edit (low, mid, high)
        #[arg(short, long, value_parser = parse_band)]
        band: BandId,

        /// Parameter to edit (gain, frequency, q)
        #[arg(short, long)]
        param: DialParam,

        /// Dial angle in degrees (-135 to 135)
        #[arg(short, long, allow_hyphen_values = true)]
        angle: f64,

        /// Equalizer state file (defaults when omitted)
        #[arg(short, long)]
        state: Option<PathBuf>,
    },

    /// Print the default state
    #[command(name = "reset")]
    Reset,
}

fn parse_band(s: &str) -> std::result::Result<BandId, String> {
    match s.to_ascii_lowercase().as_str() {
        "low" => Ok(BandId::Low),
        "mid" => Ok(BandId::Mid),
        "high" => Ok(BandId::High),
        other => Err(format!("unknown band '{}', expected low, mid or high", other)),
    }
}
