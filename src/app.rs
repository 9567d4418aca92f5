//! Core application state and main loop of the visualizer.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    animation::AnimationManager,
    config::Config,
    events,
    grid::{Cell, Grid},
    types::Status,
    ui::{self, Palette},
};

/// Application state container for the visualizer.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui renders the grid and into which Crossterm events are written.
#[derive(Debug)]
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It starts off `false` and is set
    /// to `true` when the user quits.
    pub(crate) exit: bool,
    /// Grid the user paints on and the search runs over.
    pub(crate) grid: Grid,
    /// Cell under the editing cursor.
    pub(crate) cursor: Cell,
    /// Colors used to render each cell role.
    pub(crate) palette: Palette,
    /// Animation manager for search visualization.
    ///
    /// This field holds the search currently being stepped, if any, and paces it so every step is
    /// drawn before the next one happens. Grid edits are refused while it is running.
    pub(crate) animation: AnimationManager,
    /// Text shown in the status bar.
    pub(crate) status: Status,
}

impl App {
    /// Creates a new application from its configuration.
    ///
    /// # Errors
    ///
    /// - [`crate::error::GridError`] when the configured grid size is zero.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            exit: false,
            grid: Grid::new(config.size)?,
            cursor: Cell::new(0, 0),
            palette: Palette::default(),
            animation: AnimationManager::new(config.step_delay()),
            status: Status::Idle,
        })
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input, steps a running search, and redraws the grid on every
    /// iteration. The loop continues until the exit flag is set, after which the function returns
    /// to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
