//! Search animation module.
//!
//! This module paces an [`AStar`] search so the interface can repaint the grid after each step
//! instead of jumping straight to the result.

use std::time::{Duration, Instant};

use crate::{
    grid::Grid,
    search::{AStar, Step},
};

/// Poll timeout used while no search is running.
pub(crate) const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Animation state manager for search visualization.
///
/// This structure owns the search being animated and the timing needed to advance it at most one
/// step per frame delay.
#[derive(Debug)]
pub(crate) struct AnimationManager {
    /// Search being animated, kept around after it finishes so its statistics can be read.
    search: Option<AStar>,
    /// Minimum time between two steps.
    delay: Duration,
    /// Time of the last step, or of the start of the animation.
    last_update_time: Instant,
}

impl AnimationManager {
    /// Creates an idle animation manager stepping at most once per `delay`.
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            search: None,
            delay,
            last_update_time: Instant::now(),
        }
    }

    /// Takes over a freshly created search and starts animating it.
    pub(crate) fn start(&mut self, search: AStar) {
        self.search = Some(search);
        self.last_update_time = Instant::now();
    }

    /// Drops the current search, running or not.
    pub(crate) fn clear(&mut self) {
        self.search = None;
    }

    /// Tells whether a search is still being stepped.
    pub(crate) fn is_running(&self) -> bool {
        self.search
            .as_ref()
            .is_some_and(|search| !search.is_finished())
    }

    /// Returns how many cells the current or last search dequeued.
    pub(crate) fn expanded(&self) -> usize {
        self.search
            .as_ref()
            .map_or(0, |search| search.expanded().len())
    }

    /// Returns how long the event loop may block waiting for input.
    ///
    /// While a search runs this is the time left until the next step is due, so input polling never
    /// holds the animation back.
    pub(crate) fn poll_timeout(&self) -> Duration {
        if self.is_running() {
            self.delay.saturating_sub(self.last_update_time.elapsed())
        } else {
            IDLE_POLL_TIMEOUT
        }
    }

    /// Advances the running search by one step once the frame delay has elapsed.
    ///
    /// Returns the step taken, or `None` when nothing is running or it is too early.
    pub(crate) fn update(&mut self, grid: &mut Grid) -> Option<Step> {
        if !self.is_running() || self.last_update_time.elapsed() < self.delay {
            return None;
        }

        self.last_update_time = Instant::now();
        self.search.as_mut().map(|search| search.step(grid))
    }
}
