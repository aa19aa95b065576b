// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use regionsnap_core::{Rect, View};

#[derive(Debug, Parser)]
#[command(
    name = "regionsnap",
    version,
    about = "Map on-screen selections to device-native capture regions."
)]
pub struct Args {
    /// Override config file (default: $XDG_CONFIG_HOME/regionsnap/regionsnap.rune)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log to stderr (in addition to the log file)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Override log file path (default: $XDG_STATE_HOME/regionsnap/regionsnap.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub calibration: CalibrationArgs,

    #[command(subcommand)]
    pub cmd: Cmd,
}

/// Per-run overrides for the live-stream calibration.
#[derive(Debug, Default, ClapArgs)]
pub struct CalibrationArgs {
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub offset_y: Option<i32>,

    #[arg(long, global = true, allow_negative_numbers = true)]
    pub offset_w: Option<i32>,

    #[arg(long, global = true, allow_negative_numbers = true)]
    pub offset_h: Option<i32>,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Map one displayed-space rectangle and print the native region
    Map {
        #[arg(long)]
        displayed_width: f64,
        #[arg(long)]
        displayed_height: f64,
        #[arg(long)]
        native_width: f64,
        #[arg(long)]
        native_height: f64,

        /// Selection as x,y,w,h in displayed pixels
        #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
        rect: Rect,

        /// live applies the stream calibration, gallery maps plainly
        #[arg(long, value_enum, default_value = "live")]
        view: View,
    },

    /// Replay a gesture script and print the request bodies it produces
    Replay {
        /// Script file, one event per line ("-" for stdin)
        script: PathBuf,

        #[arg(long, value_enum, default_value = "live")]
        view: View,

        /// Filename sent with snap/crop requests
        #[arg(long, short = 'f')]
        filename: String,
    },
}

pub fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, w, h] = parts.as_slice() else {
        return Err(format!("expected x,y,w,h, got \"{s}\""));
    };

    let num = |v: &str| {
        v.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| format!("invalid number \"{v}\" in \"{s}\""))
    };

    Ok(Rect::new(num(*x)?, num(*y)?, num(*w)?, num(*h)?))
}
