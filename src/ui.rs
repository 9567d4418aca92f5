//! User interface rendering functions.
//!
//! The grid is drawn as a block of two-column wide cells colored by role through a [`Palette`],
//! with a status bar underneath. Nothing in here mutates the grid; the search engine only ever
//! tells the interface that it is time to draw again.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    grid::{Cell, Role},
    App,
};

/// Key bindings shown under the grid.
const KEY_HELP: &str =
    "(hjkl) move / (enter) paint / (x) erase / (space) search / (c) clear / (r) reset / (q) quit";

/// Lookup table from cell role to cell color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Palette {
    /// Color of [`Role::Empty`] cells.
    pub(crate) empty: Color,
    /// Color of [`Role::Obstacle`] cells.
    pub(crate) obstacle: Color,
    /// Color of the [`Role::Start`] cell.
    pub(crate) start: Color,
    /// Color of the [`Role::End`] cell.
    pub(crate) end: Color,
    /// Color of [`Role::Frontier`] cells.
    pub(crate) frontier: Color,
    /// Color of [`Role::Visited`] cells.
    pub(crate) visited: Color,
    /// Color of [`Role::Path`] cells.
    pub(crate) path: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: Color::Rgb(255, 255, 255),
            obstacle: Color::Rgb(0, 0, 0),
            start: Color::Rgb(255, 165, 0),
            end: Color::Rgb(64, 224, 208),
            frontier: Color::Rgb(0, 255, 0),
            visited: Color::Rgb(255, 0, 0),
            path: Color::Rgb(128, 0, 128),
        }
    }
}

impl Palette {
    /// Returns the color a role is drawn with.
    pub(crate) const fn color(&self, role: Role) -> Color {
        match role {
            Role::Empty => self.empty,
            Role::Obstacle => self.obstacle,
            Role::Start => self.start,
            Role::End => self.end,
            Role::Frontier => self.frontier,
            Role::Visited => self.visited,
            Role::Path => self.path,
        }
    }
}

/// Draws the whole interface from the current application state.
///
/// # Errors
///
/// This function may return errors when the grid is too large to express in terminal cells or
/// when a layout area cannot be retrieved.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Grid area
        Constraint::Length(3), // Status bar
    ])
    .split(frame.area());

    let grid_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get grid area from layout")?;
    let status_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get status area from layout")?;

    grid(app, frame, grid_area)?;
    status_bar(app, frame, status_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Centers a `width` by `height` rectangle inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Result<Rect> {
    let column = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered column from horizontal layout")?;

    Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(column)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered area from vertical layout")
}

/// Renders the grid, one two-column span per cell, with the cursor drawn on top.
///
/// A grid taller or wider than the terminal is scrolled just enough to show the cursor.
///
/// # Errors
///
/// This function may return errors if the grid does not fit in `u16` terminal coordinates.
pub(crate) fn grid(app: &App, frame: &mut Frame, area: Rect) -> Result<()> {
    let size = app.grid.size();
    let width = u16::try_from(size * 2 + 2)?;
    let height = u16::try_from(size + 2)?;
    let space = centered(area, width, height)?;

    let block = Block::bordered()
        .title("A* Search")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(space);

    frame.render_widget(block, space);

    let lines: Vec<Line> = app
        .grid
        .rows()
        .enumerate()
        .map(|(row, roles)| {
            roles
                .iter()
                .enumerate()
                .map(|(col, role)| {
                    let symbol = if app.cursor == Cell::new(row, col) {
                        "[]"
                    } else {
                        "  "
                    };
                    Span::styled(
                        symbol,
                        Style::default()
                            .fg(Color::DarkGray)
                            .bg(app.palette.color(*role)),
                    )
                })
                .collect::<Line>()
        })
        .collect();

    // Keep the cursor on screen when the terminal is smaller than the grid.
    let visible_rows = usize::from(inner_space.height).max(1);
    let visible_cols = usize::from(inner_space.width / 2).max(1);
    let top = (app.cursor.row + 1).saturating_sub(visible_rows);
    let left = (app.cursor.col + 1).saturating_sub(visible_cols);

    frame.render_widget(
        Paragraph::new(lines).scroll((u16::try_from(top)?, u16::try_from(left * 2)?)),
        inner_space,
    );

    Ok(())
}

/// Renders the status message with the key bindings as the bar's title.
pub(crate) fn status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .title(KEY_HELP)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let inner_space = block.inner(area);

    frame.render_widget(block, area);
    frame.render_widget(
        Line::raw(app.status.message()).centered(),
        inner_space,
    );
}
