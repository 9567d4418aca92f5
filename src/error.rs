//! Typed errors raised by the grid model and the search engine.

use thiserror::Error;

use crate::grid::Cell;

/// Failures of grid model operations.
///
/// These are raised when the grid is asked to be built with a nonsensical dimension or when a
/// caller addresses a cell that lies outside of it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A grid must hold at least one cell per side.
    #[error("grid size must be at least 1")]
    ZeroSize,
    /// The cell count of the requested grid overflows a `usize`.
    #[error("a {size}x{size} grid holds more cells than can be addressed")]
    TooLarge {
        /// The requested side length.
        size: usize,
    },
    /// The addressed cell lies outside the grid.
    #[error("cell ({}, {}) is outside of a {size}x{size} grid", .cell.row, .cell.col)]
    OutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// The side length of the grid that was addressed.
        size: usize,
    },
}

/// Reasons a search cannot be started.
///
/// The engine checks its preconditions before touching any cell role, so a rejected request
/// leaves the grid exactly as it was handed over.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSearchRequest {
    /// No start cell has been placed yet.
    #[error("no start cell has been placed")]
    MissingStart,
    /// No end cell has been placed yet.
    #[error("no end cell has been placed")]
    MissingEnd,
    /// Start and end refer to the same cell.
    #[error("start and end are the same cell ({}, {})", .0.row, .0.col)]
    SameCell(Cell),
    /// An endpoint lies outside the grid.
    #[error("endpoint ({}, {}) is outside of the grid", .0.row, .0.col)]
    OutOfBounds(Cell),
    /// An endpoint sits on an obstacle.
    #[error("endpoint ({}, {}) is an obstacle", .0.row, .0.col)]
    Obstructed(Cell),
}
