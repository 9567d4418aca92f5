//! Grid model module.
//!
//! This module contains the square grid the user paints on, the role tag every cell carries, and the
//! adjacency rules the search engine walks. Neighbor lists are a derived cache that has to be
//! rebuilt with [`Grid::recompute_all_neighbors`] after obstacles change.

use log::{debug, warn};

use crate::error::GridError;

/// Position of a cell in the grid.
///
/// Cells are addressed by a zero-based `(row, col)` pair. The type is a plain value so it can be
/// used as a key in the search engine's score maps and ordered inside its priority queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row index, growing downwards.
    pub row: usize,
    /// Zero-based column index, growing to the right.
    pub col: usize,
}

impl Cell {
    /// Builds a cell from its row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the Manhattan distance between two cells.
    ///
    /// This is the sum of the absolute row and column differences, which is the exact length of a
    /// shortest path between the two cells on an obstacle-free 4-connected grid.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Tells whether two cells share an edge.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

/// Role currently held by a cell.
///
/// Roles are mutually exclusive. [`Role::Obstacle`], [`Role::Start`] and [`Role::End`] are
/// structural and stay until explicitly reset, while [`Role::Frontier`], [`Role::Visited`] and
/// [`Role::Path`] are annotations left behind by a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// Walkable cell with nothing on it.
    #[default]
    Empty,
    /// Blocked cell; never enumerated as a neighbor.
    Obstacle,
    /// The cell a search departs from.
    Start,
    /// The cell a search is looking for.
    End,
    /// Discovered by a search and waiting in its open set.
    Frontier,
    /// Dequeued and expanded by a search.
    Visited,
    /// Part of the shortest path found by the last search.
    Path,
}

impl Role {
    /// Tells whether the role is a transient search annotation.
    #[must_use]
    pub const fn is_annotation(self) -> bool {
        matches!(self, Self::Frontier | Self::Visited | Self::Path)
    }
}

/// Square grid of cell roles with a cached adjacency list per cell.
///
/// The grid owns every cell role and keeps track of where the single start and the single end
/// currently are, so placing a second one moves it instead of duplicating it.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Side length of the grid.
    size: usize,
    /// Row-major role of every cell.
    roles: Vec<Role>,
    /// Row-major neighbor cache, rebuilt by [`Grid::recompute_all_neighbors`].
    neighbors: Vec<Vec<Cell>>,
    /// Cell currently holding [`Role::Start`], if any.
    start: Option<Cell>,
    /// Cell currently holding [`Role::End`], if any.
    end: Option<Cell>,
}

impl Grid {
    /// Creates a `size` by `size` grid with every cell empty.
    ///
    /// The neighbor cache starts out empty; call [`Grid::recompute_all_neighbors`] before asking
    /// for neighbors.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroSize`] when `size` is zero and [`GridError::TooLarge`] when the
    /// cell count does not fit in a `usize`.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }

        let cells = size.checked_mul(size).ok_or(GridError::TooLarge { size })?;

        Ok(Self {
            size,
            roles: vec![Role::Empty; cells],
            neighbors: vec![Vec::new(); cells],
            start: None,
            end: None,
        })
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell currently marked as start.
    #[must_use]
    pub const fn start(&self) -> Option<Cell> {
        self.start
    }

    /// Returns the cell currently marked as end.
    #[must_use]
    pub const fn end(&self) -> Option<Cell> {
        self.end
    }

    /// Tells whether the cell lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Maps a cell to its row-major index.
    fn index(&self, cell: Cell) -> Result<usize, GridError> {
        if self.contains(cell) {
            Ok(cell.row * self.size + cell.col)
        } else {
            Err(GridError::OutOfBounds {
                cell,
                size: self.size,
            })
        }
    }

    /// Returns the role of a cell, or `None` when it lies outside the grid.
    #[must_use]
    pub fn role(&self, cell: Cell) -> Option<Role> {
        self.index(cell)
            .ok()
            .and_then(|idx| self.roles.get(idx).copied())
    }

    /// Overwrites the role of a cell.
    ///
    /// Placing a start or an end reverts the previous start or end to [`Role::Empty`], so there is
    /// never more than one of each. Overwriting the current start or end with any other role
    /// forgets it. Setting a role the cell already has is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when the cell lies outside the grid.
    pub fn set_role(&mut self, cell: Cell, role: Role) -> Result<(), GridError> {
        let idx = self.index(cell)?;

        if self.start == Some(cell) && role != Role::Start {
            self.start = None;
        }
        if self.end == Some(cell) && role != Role::End {
            self.end = None;
        }

        let displaced = match role {
            Role::Start => self.start.replace(cell),
            Role::End => self.end.replace(cell),
            _ => None,
        };
        if let Some(previous) = displaced.filter(|previous| *previous != cell) {
            self.write(previous, Role::Empty);
        }

        if let Some(slot) = self.roles.get_mut(idx) {
            *slot = role;
        }

        Ok(())
    }

    /// Writes a role into an in-bounds cell without touching the start and end bookkeeping.
    fn write(&mut self, cell: Cell, role: Role) {
        if let Ok(idx) = self.index(cell) {
            if let Some(slot) = self.roles.get_mut(idx) {
                *slot = role;
            }
        }
    }

    /// Sets the role of a cell back to [`Role::Empty`].
    ///
    /// This is also what erasing a cell in the editor does: a start or end reset this way is
    /// forgotten, so the next paint places it again.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when the cell lies outside the grid.
    pub fn reset(&mut self, cell: Cell) -> Result<(), GridError> {
        self.set_role(cell, Role::Empty)
    }

    /// Paints a cell the way a left click does in the editor.
    ///
    /// The first painted cell becomes the start, the next distinct one becomes the end, and every
    /// cell painted after that which is neither of the two becomes an obstacle. The role the cell
    /// ends up with is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when the cell lies outside the grid.
    pub fn paint(&mut self, cell: Cell) -> Result<Role, GridError> {
        let current = self.role(cell).ok_or(GridError::OutOfBounds {
            cell,
            size: self.size,
        })?;

        let role = if self.start.is_none() {
            Role::Start
        } else if self.end.is_none() && self.start != Some(cell) {
            Role::End
        } else if self.start != Some(cell) && self.end != Some(cell) {
            Role::Obstacle
        } else {
            return Ok(current);
        };

        self.set_role(cell, role)?;

        Ok(role)
    }

    /// Applies a role on behalf of the search engine.
    ///
    /// The engine only ever annotates cells it got from this grid, so a failure here means the
    /// grid was swapped under a running search; it is logged and skipped.
    pub(crate) fn annotate(&mut self, cell: Cell, role: Role) {
        if let Err(err) = self.set_role(cell, role) {
            warn!("skipping {role:?} annotation: {err}");
        }
    }

    /// Reverts every frontier, visited and path cell to [`Role::Empty`].
    pub fn clear_annotations(&mut self) {
        for role in &mut self.roles {
            if role.is_annotation() {
                *role = Role::Empty;
            }
        }
    }

    /// Reverts every cell to [`Role::Empty`], dropping the start and the end.
    pub fn clear(&mut self) {
        self.roles.fill(Role::Empty);
        self.start = None;
        self.end = None;
    }

    /// Iterates over the grid one row at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Role]> {
        self.roles.chunks(self.size)
    }

    /// Returns the cached neighbors of a cell.
    ///
    /// The list comes from the last [`Grid::recompute_all_neighbors`] call and is ordered down,
    /// up, left, right. Cells outside the grid have no neighbors.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> &[Cell] {
        self.index(cell)
            .ok()
            .and_then(|idx| self.neighbors.get(idx))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Rebuilds the neighbor cache of every cell from the current obstacles.
    pub fn recompute_all_neighbors(&mut self) {
        let size = self.size;
        self.neighbors = (0..size * size)
            .map(|idx| self.open_adjacent(Cell::new(idx / size, idx % size)))
            .collect();

        debug!("recomputed neighbor cache for a {size}x{size} grid");
    }

    /// Lists the in-bounds, non-obstacle cells sharing an edge with `cell`.
    fn open_adjacent(&self, cell: Cell) -> Vec<Cell> {
        let mut adjacent = Vec::with_capacity(4);

        // Down, up, left, right.
        if cell.row + 1 < self.size {
            adjacent.push(Cell::new(cell.row + 1, cell.col));
        }
        if cell.row > 0 {
            adjacent.push(Cell::new(cell.row - 1, cell.col));
        }
        if cell.col > 0 {
            adjacent.push(Cell::new(cell.row, cell.col - 1));
        }
        if cell.col + 1 < self.size {
            adjacent.push(Cell::new(cell.row, cell.col + 1));
        }

        adjacent.retain(|near| self.role(*near) != Some(Role::Obstacle));
        adjacent
    }
}
