//! Type definitions for cursor movement and status reporting.

use crate::{error::InvalidSearchRequest, search::SearchOutcome};

/// Direction the grid cursor can move in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Message shown in the status bar below the grid.
///
/// This enumeration holds what the application last did, so the interface can tell the user what
/// is going on without the search engine knowing anything about rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    /// Nothing has happened yet, or the grid was just cleared.
    Idle,
    /// A search is being animated.
    Searching,
    /// The last search is over.
    Finished {
        /// What the search ended with.
        outcome: SearchOutcome,
        /// How many cells it dequeued.
        expanded: usize,
    },
    /// The last search request was turned down before it started.
    Rejected(InvalidSearchRequest),
}

impl Status {
    /// Returns the text shown for the status.
    pub(crate) fn message(&self) -> String {
        match self {
            Self::Idle => "paint a start and an end, then press space".to_owned(),
            Self::Searching => "searching...".to_owned(),
            Self::Finished {
                outcome: SearchOutcome::Found(path),
                expanded,
            } => format!(
                "path found: {} steps, {expanded} cells expanded",
                path.cost
            ),
            Self::Finished {
                outcome: SearchOutcome::NotFound,
                expanded,
            } => format!("no path: {expanded} cells expanded"),
            Self::Rejected(err) => format!("cannot search: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::Cell, search::Path};

    #[test]
    fn test_idle_and_searching_messages() {
        assert_eq!(
            Status::Idle.message(),
            "paint a start and an end, then press space"
        );
        assert_eq!(Status::Searching.message(), "searching...");
    }

    #[test]
    fn test_finished_messages() {
        let found = Status::Finished {
            outcome: SearchOutcome::Found(Path {
                cells: vec![Cell::new(0, 1), Cell::new(0, 2)],
                cost: 2,
            }),
            expanded: 3,
        };
        let not_found = Status::Finished {
            outcome: SearchOutcome::NotFound,
            expanded: 9,
        };

        assert_eq!(found.message(), "path found: 2 steps, 3 cells expanded");
        assert_eq!(not_found.message(), "no path: 9 cells expanded");
    }

    #[test]
    fn test_rejected_message() {
        let status = Status::Rejected(InvalidSearchRequest::MissingStart);

        assert_eq!(
            status.message(),
            "cannot search: no start cell has been placed"
        );
    }

    #[test]
    fn test_direction_variants() {
        assert_ne!(Direction::Up, Direction::Down);
        assert_ne!(Direction::Left, Direction::Right);
        assert_eq!(format!("{:?}", Direction::Left), "Left");
    }
}
