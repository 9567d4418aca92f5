//! Command-line configuration for the visualizer.
//!
//! The grid dimension, the pace of the animation and the log destination are gathered here and
//! handed to the application at construction time.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// Number of cells along each side of the grid when none is given.
///
/// The bordered grid and the status bar under it fit an 80 by 24 terminal at this size.
pub const DEFAULT_GRID_SIZE: usize = 19;

/// Largest accepted grid size; the bordered grid, two columns per cell plus borders, must fit in
/// `u16` terminal coordinates.
pub const MAX_GRID_SIZE: usize = 32_766;

/// Milliseconds between two animated search steps when none is given.
pub const DEFAULT_STEP_DELAY_MS: u64 = 15;

/// Runtime configuration parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(version, about)]
pub struct Config {
    /// Number of cells along each side of the square grid.
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE, value_parser = parse_size)]
    pub size: usize,
    /// Milliseconds to wait between two animated search steps.
    #[arg(short = 'd', long, default_value_t = DEFAULT_STEP_DELAY_MS)]
    pub step_delay: u64,
    /// File to append log records to; logging stays off when omitted.
    ///
    /// The verbosity is read from the `RUST_LOG` environment variable and defaults to `info`.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            step_delay: DEFAULT_STEP_DELAY_MS,
            log_file: None,
        }
    }
}

impl Config {
    /// Returns the delay between two animated search steps.
    #[must_use]
    pub const fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay)
    }
}

/// Parses a grid dimension, rejecting zero and sizes the interface cannot draw.
fn parse_size(input: &str) -> Result<usize, String> {
    let size = input
        .parse::<usize>()
        .map_err(|err| format!("`{input}` is not a grid size: {err}"))?;

    match size {
        0 => Err("the grid needs at least one cell per side".to_owned()),
        size if size > MAX_GRID_SIZE => Err(format!(
            "the grid can have at most {MAX_GRID_SIZE} cells per side"
        )),
        size => Ok(size),
    }
}
