//! Event handling functions for user input and application state updates.

use color_eyre::eyre::Result;
use log::{info, warn};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    grid::Cell,
    search::{AStar, Step},
    types::{Direction, Status},
    App,
};

/// Handles input events and steps the running search.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. The poll timeout is taken from the animation so a running
/// search keeps its pace even when no key is pressed.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(app.animation.poll_timeout())? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key_events(app, key.code)?;
            }
        }
    }

    handle_animation(app);

    Ok(())
}

/// Dispatches a key press.
///
/// Quitting is always possible. Every other key is ignored while a search is being animated, so
/// the grid cannot change under it.
pub(crate) fn handle_key_events(app: &mut App, code: KeyCode) -> Result<()> {
    if code == KeyCode::Char('q') {
        app.exit = true;
        return Ok(());
    }
    if app.animation.is_running() {
        return Ok(());
    }

    match code {
        KeyCode::Char('h') | KeyCode::Left => handle_movement(app, Direction::Left),
        KeyCode::Char('j') | KeyCode::Down => handle_movement(app, Direction::Down),
        KeyCode::Char('k') | KeyCode::Up => handle_movement(app, Direction::Up),
        KeyCode::Char('l') | KeyCode::Right => handle_movement(app, Direction::Right),
        KeyCode::Enter | KeyCode::Char('p') => handle_paint(app)?,
        KeyCode::Backspace | KeyCode::Char('x') => handle_erase(app)?,
        KeyCode::Char(' ') => handle_search(app),
        KeyCode::Char('c') => handle_clear(app),
        KeyCode::Char('r') => handle_reset(app),
        _ => {}
    }

    Ok(())
}

/// Moves the cursor one cell, stopping at the grid border.
pub(crate) fn handle_movement(app: &mut App, direction: Direction) {
    let last = app.grid.size() - 1;
    let Cell { row, col } = app.cursor;

    app.cursor = match direction {
        Direction::Up => Cell::new(row.saturating_sub(1), col),
        Direction::Down => Cell::new((row + 1).min(last), col),
        Direction::Left => Cell::new(row, col.saturating_sub(1)),
        Direction::Right => Cell::new(row, (col + 1).min(last)),
    };
}

/// Paints the cell under the cursor.
pub(crate) fn handle_paint(app: &mut App) -> Result<()> {
    let _ = app.grid.paint(app.cursor)?;

    Ok(())
}

/// Erases the cell under the cursor.
pub(crate) fn handle_erase(app: &mut App) -> Result<()> {
    app.grid.reset(app.cursor)?;

    Ok(())
}

/// Clears the previous search and starts animating a new one.
///
/// A request the engine turns down, such as one without an end, is reported in the status bar and
/// otherwise ignored.
pub(crate) fn handle_search(app: &mut App) {
    app.grid.clear_annotations();

    match AStar::from_grid(&mut app.grid) {
        Ok(search) => {
            app.animation.start(search);
            app.status = Status::Searching;
        }
        Err(err) => {
            warn!("search request rejected: {err}");
            app.status = Status::Rejected(err);
        }
    }
}

/// Reverts the annotations of the last search.
pub(crate) fn handle_clear(app: &mut App) {
    app.animation.clear();
    app.grid.clear_annotations();
    app.status = Status::Idle;
}

/// Reverts the whole grid.
pub(crate) fn handle_reset(app: &mut App) {
    app.animation.clear();
    app.grid.clear();
    app.status = Status::Idle;
}

/// Steps the running search when it is due and records how it ended.
pub(crate) fn handle_animation(app: &mut App) {
    if let Some(Step::Finished(outcome)) = app.animation.update(&mut app.grid) {
        let expanded = app.animation.expanded();
        info!("search finished after {expanded} expansions: {outcome:?}");
        app.status = Status::Finished { outcome, expanded };
    }
}
