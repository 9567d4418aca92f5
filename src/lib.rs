//! Interactive A* pathfinding visualizer for the terminal.
//!
//! The user paints a start, an end and obstacles on a square grid and watches an A* search expand
//! towards the end one cell at a time. The algorithmic core is usable on its own:
//!
//! - [`grid`] holds the cell roles and the 4-connected adjacency rules.
//! - [`search`] runs A* over a grid, either step by step through [`search::AStar`] or to completion
//!   through [`search::run`] with a repaint callback.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod animation;
mod app;
pub mod config;
pub mod error;
mod events;
pub mod grid;
pub mod logging;
pub mod search;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
