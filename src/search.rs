//! A* search engine module.
//!
//! This module contains the incremental A* search that runs over a [`Grid`]. A search is a small
//! state machine, [`AStar`], that performs one unit of work per [`AStar::step`] call so a frame
//! driven interface can animate it, plus the [`run`] driver that takes a search to completion and
//! calls back after every step so the caller can repaint.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
};

use log::{debug, trace};

use crate::{
    error::InvalidSearchRequest,
    grid::{Cell, Grid, Role},
};

/// Shortest path found by a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    /// Cells from the one right after the start up to and including the end.
    pub cells: Vec<Cell>,
    /// Number of unit edges walked from the start to the end.
    pub cost: usize,
}

/// Final result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The end was reached; path cells have been marked on the grid.
    Found(Path),
    /// The open set ran dry before the end was dequeued.
    NotFound,
}

/// Unit of work performed by a single [`AStar::step`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A cell was dequeued and, unless it was the end, its neighbors were relaxed.
    Expanded(Cell),
    /// A cell on the way back from the end was marked as part of the path.
    Traced(Cell),
    /// The search is over. Further steps keep returning the same outcome.
    Finished(SearchOutcome),
}

/// Where an [`AStar`] search currently stands.
#[derive(Clone, Debug)]
enum Phase {
    /// Dequeuing cells from the open set.
    Expanding,
    /// Walking predecessors back from the end; holds the last cell reached.
    Tracing(Cell),
    /// Nothing left to do.
    Done(SearchOutcome),
}

/// Bookkeeping that only lives for the duration of one search.
#[derive(Clone, Debug, Default)]
struct SearchState {
    /// Best known cost from the start. Missing cells are at infinity.
    g_score: HashMap<Cell, usize>,
    /// Best known cost plus heuristic. Missing cells are at infinity.
    f_score: HashMap<Cell, usize>,
    /// Predecessor of every relaxed cell.
    came_from: HashMap<Cell, Cell>,
    /// Min-queue on `(f_score, insertion sequence)`; the sequence breaks ties in FIFO order.
    open_set: BinaryHeap<Reverse<(usize, u64, Cell)>>,
    /// Cells currently held in `open_set`.
    open_membership: HashSet<Cell>,
    /// Last insertion sequence number handed out.
    sequence: u64,
}

impl SearchState {
    /// Returns the cost from the start, saturating at `usize::MAX` for undiscovered cells.
    fn cost(&self, cell: Cell) -> usize {
        self.g_score.get(&cell).copied().unwrap_or(usize::MAX)
    }

    /// Queues a cell with the given priority under a fresh sequence number.
    fn enqueue(&mut self, cell: Cell, priority: usize) {
        self.open_set.push(Reverse((priority, self.sequence, cell)));
        let _ = self.open_membership.insert(cell);
        self.sequence += 1;
    }
}

/// Manhattan distance heuristic; admissible and consistent on a 4-connected unit-cost grid.
#[must_use]
pub const fn heuristic(from: Cell, to: Cell) -> usize {
    from.manhattan(to)
}

/// Incremental A* search between two cells of a grid.
///
/// The search borrows the grid only while stepping, which lets the caller render the grid between
/// steps. The grid must not be edited until the search is finished; the search assumes the neighbor
/// cache it built on creation still holds.
#[derive(Clone, Debug)]
pub struct AStar {
    /// Cell the search departs from.
    start: Cell,
    /// Cell the search is looking for.
    end: Cell,
    /// Scores, predecessors and the open set.
    state: SearchState,
    /// Current phase of the state machine.
    phase: Phase,
    /// Every dequeued cell in dequeue order.
    expanded: Vec<Cell>,
    /// Cells marked while walking back from the end, end first.
    traced: Vec<Cell>,
}

impl AStar {
    /// Prepares a search from `start` to `end`.
    ///
    /// The request is validated before anything is touched. On success the grid's neighbor cache is
    /// rebuilt so obstacles painted since the last search are honored, and the start is queued.
    ///
    /// Reaching `end` marks it [`Role::End`]. A grid holds a single end, so when `end` is not the
    /// end painted on the grid, the painted one is reset to [`Role::Empty`] at that point. Use
    /// [`AStar::from_grid`] to search towards the painted end.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidSearchRequest`] when an endpoint is outside the grid or on an obstacle,
    /// or when both endpoints are the same cell.
    pub fn new(grid: &mut Grid, start: Cell, end: Cell) -> Result<Self, InvalidSearchRequest> {
        for endpoint in [start, end] {
            match grid.role(endpoint) {
                None => return Err(InvalidSearchRequest::OutOfBounds(endpoint)),
                Some(Role::Obstacle) => return Err(InvalidSearchRequest::Obstructed(endpoint)),
                Some(_) => {}
            }
        }
        if start == end {
            return Err(InvalidSearchRequest::SameCell(start));
        }

        grid.recompute_all_neighbors();

        let mut state = SearchState::default();
        let estimate = heuristic(start, end);
        let _ = state.g_score.insert(start, 0);
        let _ = state.f_score.insert(start, estimate);
        state.enqueue(start, estimate);

        debug!(
            "starting search from ({}, {}) to ({}, {})",
            start.row, start.col, end.row, end.col
        );

        Ok(Self {
            start,
            end,
            state,
            phase: Phase::Expanding,
            expanded: Vec::new(),
            traced: Vec::new(),
        })
    }

    /// Prepares a search between the start and end currently placed on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSearchRequest::MissingStart`] or [`InvalidSearchRequest::MissingEnd`] when
    /// an endpoint has not been placed, and otherwise behaves like [`AStar::new`].
    pub fn from_grid(grid: &mut Grid) -> Result<Self, InvalidSearchRequest> {
        let start = grid.start().ok_or(InvalidSearchRequest::MissingStart)?;
        let end = grid.end().ok_or(InvalidSearchRequest::MissingEnd)?;

        Self::new(grid, start, end)
    }

    /// Performs one unit of work and reports what it was.
    pub fn step(&mut self, grid: &mut Grid) -> Step {
        match self.phase {
            Phase::Expanding => self.expand(grid),
            Phase::Tracing(cursor) => self.trace(grid, cursor),
            Phase::Done(ref outcome) => Step::Finished(outcome.clone()),
        }
    }

    /// Dequeues the most promising cell and relaxes its neighbors.
    fn expand(&mut self, grid: &mut Grid) -> Step {
        let Some(Reverse((priority, _, current))) = self.state.open_set.pop() else {
            return self.finish(SearchOutcome::NotFound);
        };
        let _ = self.state.open_membership.remove(&current);
        self.expanded.push(current);

        trace!(
            "dequeued ({}, {}) with f = {priority}",
            current.row,
            current.col
        );

        if current == self.end {
            if grid.role(current) != Some(Role::End) {
                grid.annotate(current, Role::End);
            }
            self.traced.push(current);
            self.phase = Phase::Tracing(current);
            return Step::Expanded(current);
        }

        let tentative = self.state.cost(current).saturating_add(1);
        let neighbors = grid.neighbors(current).to_vec();

        for neighbor in neighbors {
            if tentative >= self.state.cost(neighbor) {
                continue;
            }

            let _ = self.state.came_from.insert(neighbor, current);
            let _ = self.state.g_score.insert(neighbor, tentative);
            let priority = tentative + heuristic(neighbor, self.end);
            let _ = self.state.f_score.insert(neighbor, priority);

            if !self.state.open_membership.contains(&neighbor) {
                self.state.enqueue(neighbor, priority);
                if neighbor != self.end {
                    grid.annotate(neighbor, Role::Frontier);
                }
            }
        }

        if current != self.start {
            grid.annotate(current, Role::Visited);
        }

        Step::Expanded(current)
    }

    /// Marks the predecessor of `cursor` as path, or wraps up once the start is reached.
    fn trace(&mut self, grid: &mut Grid, cursor: Cell) -> Step {
        match self.state.came_from.get(&cursor).copied() {
            Some(previous) if previous != self.start => {
                grid.annotate(previous, Role::Path);
                self.traced.push(previous);
                self.phase = Phase::Tracing(previous);

                Step::Traced(previous)
            }
            _ => {
                let mut cells = self.traced.clone();
                cells.reverse();
                let cost = self.state.cost(self.end);

                self.finish(SearchOutcome::Found(Path { cells, cost }))
            }
        }
    }

    /// Moves the search into its final phase.
    fn finish(&mut self, outcome: SearchOutcome) -> Step {
        match &outcome {
            SearchOutcome::Found(path) => debug!(
                "found a path of cost {} after expanding {} cells",
                path.cost,
                self.expanded.len()
            ),
            SearchOutcome::NotFound => debug!(
                "no path after expanding {} cells",
                self.expanded.len()
            ),
        }

        self.phase = Phase::Done(outcome.clone());

        Step::Finished(outcome)
    }

    /// Tells whether the next step will dequeue a cell.
    #[must_use]
    pub fn is_expanding(&self) -> bool {
        matches!(self.phase, Phase::Expanding) && !self.state.open_set.is_empty()
    }

    /// Tells whether the search is over.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Done(_))
    }

    /// Returns the outcome once the search is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<&SearchOutcome> {
        match &self.phase {
            Phase::Done(outcome) => Some(outcome),
            Phase::Expanding | Phase::Tracing(_) => None,
        }
    }

    /// Returns the cell the search departs from.
    #[must_use]
    pub const fn start(&self) -> Cell {
        self.start
    }

    /// Returns the cell the search is looking for.
    #[must_use]
    pub const fn end(&self) -> Cell {
        self.end
    }

    /// Returns the best known cost from the start, or `None` while it is still infinite.
    #[must_use]
    pub fn g_score(&self, cell: Cell) -> Option<usize> {
        self.state.g_score.get(&cell).copied()
    }

    /// Returns the best known priority of a cell, or `None` while it is still infinite.
    #[must_use]
    pub fn f_score(&self, cell: Cell) -> Option<usize> {
        self.state.f_score.get(&cell).copied()
    }

    /// Returns the predecessor recorded for a relaxed cell.
    #[must_use]
    pub fn came_from(&self, cell: Cell) -> Option<Cell> {
        self.state.came_from.get(&cell).copied()
    }

    /// Returns every dequeued cell in dequeue order.
    #[must_use]
    pub fn expanded(&self) -> &[Cell] {
        &self.expanded
    }
}

/// Runs a search from `start` to `end` to completion.
///
/// `on_step` is called right before every dequeue and right after every path cell is marked, with
/// the grid lent back so the caller can read the current roles and repaint.
///
/// Like [`AStar::new`], reaching an `end` other than the one painted on the grid moves the grid's
/// end there.
///
/// # Errors
///
/// Returns an [`InvalidSearchRequest`] when the endpoints are unusable; see [`AStar::new`].
pub fn run<F>(
    grid: &mut Grid,
    start: Cell,
    end: Cell,
    on_step: F,
) -> Result<SearchOutcome, InvalidSearchRequest>
where
    F: FnMut(&Grid),
{
    run_to_end(grid, start, end, on_step).map(|(outcome, _)| outcome)
}

/// Runs a search like [`run`] and hands back the finished search along with its outcome.
///
/// The returned [`AStar`] keeps the final scores and predecessors, which is handy for checking a
/// result or logging how much of the grid was explored.
///
/// # Errors
///
/// Returns an [`InvalidSearchRequest`] when the endpoints are unusable; see [`AStar::new`].
pub fn run_to_end<F>(
    grid: &mut Grid,
    start: Cell,
    end: Cell,
    mut on_step: F,
) -> Result<(SearchOutcome, AStar), InvalidSearchRequest>
where
    F: FnMut(&Grid),
{
    let mut search = AStar::new(grid, start, end)?;

    loop {
        if search.is_expanding() {
            on_step(&*grid);
        }

        match search.step(grid) {
            Step::Expanded(_) => {}
            Step::Traced(_) => on_step(&*grid),
            Step::Finished(outcome) => return Ok((outcome, search)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a grid with obstacles at the given cells.
    fn grid_with_obstacles(size: usize, obstacles: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size).expect("failed to create grid");
        for &(row, col) in obstacles {
            grid.set_role(Cell::new(row, col), Role::Obstacle)
                .expect("failed to place obstacle");
        }
        grid
    }

    /// Unwraps a found path.
    fn expect_path(outcome: &SearchOutcome) -> &Path {
        match outcome {
            SearchOutcome::Found(path) => path,
            SearchOutcome::NotFound => panic!("expected a path to be found"),
        }
    }

    #[test]
    fn test_straight_line_path() {
        let mut grid = grid_with_obstacles(5, &[]);
        let start = Cell::new(0, 0);
        let end = Cell::new(0, 4);

        let (outcome, search) =
            run_to_end(&mut grid, start, end, |_| {}).expect("request should be valid");
        let path = expect_path(&outcome);

        assert_eq!(
            path.cells,
            vec![
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(0, 3),
                Cell::new(0, 4)
            ]
        );
        assert_eq!(path.cost, 4);
        assert_eq!(search.g_score(end), Some(4));
        assert_eq!(search.f_score(start), Some(4));
    }

    #[test]
    fn test_empty_grid_corner_to_corner() {
        for size in [2_usize, 3, 8, 15] {
            let mut grid = grid_with_obstacles(size, &[]);
            let last = size - 1;

            let outcome = run(&mut grid, Cell::new(0, 0), Cell::new(last, last), |_| {})
                .expect("request should be valid");

            assert_eq!(
                expect_path(&outcome).cells.len(),
                2 * last,
                "an obstacle-free grid needs no detour"
            );
        }
    }

    #[test]
    fn test_wall_splits_grid() {
        let mut grid = grid_with_obstacles(3, &[(0, 1), (1, 1), (2, 1)]);

        let outcome = run(&mut grid, Cell::new(0, 0), Cell::new(0, 2), |_| {})
            .expect("request should be valid");

        assert_eq!(outcome, SearchOutcome::NotFound);
    }

    #[test]
    fn test_enclosed_end_never_reached() {
        let mut grid = grid_with_obstacles(5, &[(1, 2), (3, 2), (2, 1), (2, 3)]);
        let end = Cell::new(2, 2);

        let (outcome, search) =
            run_to_end(&mut grid, Cell::new(0, 0), end, |_| {}).expect("request should be valid");

        assert_eq!(outcome, SearchOutcome::NotFound);
        assert_eq!(search.came_from(end), None);
        assert_eq!(search.g_score(end), None);
        assert_eq!(
            search.expanded().len(),
            20,
            "every reachable cell is expanded once"
        );
    }

    #[test]
    fn test_detour_around_wall() {
        let mut grid = grid_with_obstacles(5, &[(0, 2), (1, 2), (2, 2), (3, 2)]);
        let start = Cell::new(0, 0);
        let end = Cell::new(0, 4);

        let (outcome, search) =
            run_to_end(&mut grid, start, end, |_| {}).expect("request should be valid");
        let path = expect_path(&outcome);

        assert_eq!(path.cost, 12);
        assert!(path.cells.contains(&Cell::new(4, 2)));
        assert_eq!(search.g_score(end), Some(path.cells.len()));
    }

    #[test]
    fn test_path_is_connected() {
        let mut grid = grid_with_obstacles(6, &[(1, 1), (1, 2), (1, 3), (3, 2), (3, 3), (3, 4)]);
        let start = Cell::new(0, 0);
        let end = Cell::new(5, 5);

        let (outcome, search) =
            run_to_end(&mut grid, start, end, |_| {}).expect("request should be valid");
        let path = expect_path(&outcome);

        let mut previous = start;
        for cell in &path.cells {
            assert!(
                previous.is_adjacent(*cell),
                "path cells must share an edge with their predecessor"
            );
            assert_eq!(search.came_from(*cell), Some(previous));
            previous = *cell;
        }
        assert_eq!(previous, end);
        assert_eq!(search.g_score(end), Some(path.cells.len()));
        assert_eq!(path.cost, start.manhattan(end));
    }

    #[test]
    fn test_roles_after_found() {
        let mut grid = grid_with_obstacles(5, &[]);
        let start = Cell::new(0, 0);
        let end = Cell::new(0, 4);
        grid.set_role(start, Role::Start)
            .expect("failed to place start");
        grid.set_role(end, Role::End).expect("failed to place end");

        let _ = run(&mut grid, start, end, |_| {}).expect("request should be valid");

        assert_eq!(grid.role(start), Some(Role::Start));
        assert_eq!(grid.role(end), Some(Role::End));
        for col in 1..4 {
            assert_eq!(grid.role(Cell::new(0, col)), Some(Role::Path));
        }
        assert_eq!(grid.role(Cell::new(1, 0)), Some(Role::Frontier));
        assert_eq!(grid.start(), Some(start));
        assert_eq!(grid.end(), Some(end));
    }

    #[test]
    fn test_roles_after_not_found() {
        let mut grid = grid_with_obstacles(3, &[(0, 1), (1, 1), (2, 1)]);

        let _ = run(&mut grid, Cell::new(0, 0), Cell::new(0, 2), |_| {})
            .expect("request should be valid");

        assert_eq!(grid.role(Cell::new(1, 0)), Some(Role::Visited));
        assert_eq!(grid.role(Cell::new(2, 0)), Some(Role::Visited));
        assert_eq!(grid.role(Cell::new(1, 2)), Some(Role::Empty));
    }

    #[test]
    fn test_repaint_count() {
        let mut grid = grid_with_obstacles(5, &[(0, 2), (1, 2), (2, 2), (3, 2)]);
        let mut repaints = 0_usize;

        let (outcome, search) = run_to_end(&mut grid, Cell::new(0, 0), Cell::new(0, 4), |_| {
            repaints += 1;
        })
        .expect("request should be valid");
        let path = expect_path(&outcome);

        assert_eq!(
            repaints,
            search.expanded().len() + path.cells.len() - 1,
            "one repaint per dequeue and per intermediate path cell"
        );
    }

    #[test]
    fn test_repaint_sees_current_roles() {
        let mut grid = grid_with_obstacles(4, &[]);
        let mut path_cells_seen = Vec::new();

        let _ = run(&mut grid, Cell::new(0, 0), Cell::new(3, 3), |frame| {
            path_cells_seen.push(
                frame
                    .rows()
                    .flatten()
                    .filter(|role| **role == Role::Path)
                    .count(),
            );
        })
        .expect("request should be valid");

        assert_eq!(path_cells_seen.last().copied(), Some(5));
        assert!(path_cells_seen.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_deterministic_runs() {
        let obstacles = [(1, 1), (2, 3), (3, 1), (4, 4), (0, 5), (5, 2)];
        let start = Cell::new(0, 0);
        let end = Cell::new(6, 6);

        let mut first_grid = grid_with_obstacles(7, &obstacles);
        let mut second_grid = grid_with_obstacles(7, &obstacles);
        let (first, first_search) =
            run_to_end(&mut first_grid, start, end, |_| {}).expect("request should be valid");
        let (second, second_search) =
            run_to_end(&mut second_grid, start, end, |_| {}).expect("request should be valid");

        assert_eq!(first, second);
        assert_eq!(first_search.expanded(), second_search.expanded());
        assert!(first_grid.rows().eq(second_grid.rows()));
    }

    #[test]
    fn test_equal_priorities_dequeue_in_insertion_order() {
        let mut grid = grid_with_obstacles(3, &[]);
        let start = Cell::new(1, 1);
        let end = Cell::new(2, 2);
        let mut search = AStar::new(&mut grid, start, end).expect("request should be valid");

        assert_eq!(search.step(&mut grid), Step::Expanded(start));
        // Down and right both sit at f = 2; down was queued first.
        assert_eq!(search.step(&mut grid), Step::Expanded(Cell::new(2, 1)));
    }

    #[test]
    fn test_adjacent_endpoints() {
        let mut grid = grid_with_obstacles(2, &[]);
        let mut repaints = 0_usize;

        let outcome = run(&mut grid, Cell::new(0, 0), Cell::new(0, 1), |_| repaints += 1)
            .expect("request should be valid");

        assert_eq!(
            expect_path(&outcome).cells,
            vec![Cell::new(0, 1)],
            "the path is just the end"
        );
        assert_eq!(repaints, 2);
        assert!(grid.rows().flatten().all(|role| *role != Role::Path));
    }

    #[test]
    fn test_obstacles_painted_after_recompute_are_honored() {
        let mut grid = grid_with_obstacles(3, &[]);
        grid.recompute_all_neighbors();
        for row in 0..3 {
            grid.set_role(Cell::new(row, 1), Role::Obstacle)
                .expect("failed to place obstacle");
        }

        let outcome = run(&mut grid, Cell::new(0, 0), Cell::new(0, 2), |_| {})
            .expect("request should be valid");

        assert_eq!(outcome, SearchOutcome::NotFound);
    }

    #[test]
    fn test_finished_search_is_stable() {
        let mut grid = grid_with_obstacles(3, &[]);
        let mut search =
            AStar::new(&mut grid, Cell::new(0, 0), Cell::new(0, 1)).expect("request should be valid");

        while !search.is_finished() {
            let _ = search.step(&mut grid);
        }
        let outcome = search.outcome().cloned().expect("search should be over");

        assert_eq!(search.step(&mut grid), Step::Finished(outcome.clone()));
        assert_eq!(search.step(&mut grid), Step::Finished(outcome));
        assert!(!search.is_expanding());
    }

    #[test]
    fn test_invalid_requests() {
        let mut grid = grid_with_obstacles(3, &[(1, 1)]);

        assert_eq!(
            run(&mut grid, Cell::new(0, 0), Cell::new(0, 0), |_| {}),
            Err(InvalidSearchRequest::SameCell(Cell::new(0, 0)))
        );
        assert_eq!(
            run(&mut grid, Cell::new(0, 0), Cell::new(1, 1), |_| {}),
            Err(InvalidSearchRequest::Obstructed(Cell::new(1, 1)))
        );
        assert_eq!(
            run(&mut grid, Cell::new(3, 0), Cell::new(0, 0), |_| {}),
            Err(InvalidSearchRequest::OutOfBounds(Cell::new(3, 0)))
        );
        assert!(
            grid.rows()
                .flatten()
                .all(|role| matches!(role, Role::Empty | Role::Obstacle)),
            "rejected requests leave the grid untouched"
        );
    }

    #[test]
    fn test_from_grid_requires_endpoints() {
        let mut grid = grid_with_obstacles(3, &[]);

        assert_eq!(
            AStar::from_grid(&mut grid).map(|_| ()),
            Err(InvalidSearchRequest::MissingStart)
        );

        let _ = grid.paint(Cell::new(0, 0)).expect("failed to paint");

        assert_eq!(
            AStar::from_grid(&mut grid).map(|_| ()),
            Err(InvalidSearchRequest::MissingEnd)
        );

        let _ = grid.paint(Cell::new(2, 2)).expect("failed to paint");
        let search = AStar::from_grid(&mut grid).expect("request should be valid");

        assert_eq!(search.start(), Cell::new(0, 0));
        assert_eq!(search.end(), Cell::new(2, 2));
    }

    #[test]
    fn test_painted_end_is_kept() {
        let mut grid = grid_with_obstacles(5, &[]);
        let _ = grid.paint(Cell::new(0, 0)).expect("failed to paint");
        let _ = grid.paint(Cell::new(4, 4)).expect("failed to paint");

        let outcome = run(&mut grid, Cell::new(0, 0), Cell::new(4, 4), |_| {})
            .expect("request should be valid");

        assert_eq!(expect_path(&outcome).cost, 8);
        assert_eq!(grid.end(), Some(Cell::new(4, 4)));
        assert_eq!(grid.role(Cell::new(4, 4)), Some(Role::End));
    }

    #[test]
    fn test_searching_another_end_moves_it() {
        let mut grid = grid_with_obstacles(5, &[]);
        let _ = grid.paint(Cell::new(0, 0)).expect("failed to paint");
        let _ = grid.paint(Cell::new(4, 4)).expect("failed to paint");

        let outcome = run(&mut grid, Cell::new(0, 0), Cell::new(0, 3), |_| {})
            .expect("request should be valid");

        assert_eq!(expect_path(&outcome).cost, 3);
        assert_eq!(grid.end(), Some(Cell::new(0, 3)));
        assert_eq!(grid.role(Cell::new(0, 3)), Some(Role::End));
        assert_eq!(grid.role(Cell::new(4, 4)), Some(Role::Empty));
    }
}
