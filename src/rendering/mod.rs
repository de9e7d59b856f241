use macroquad::prelude::*;

use crate::application::{AppState, Config};
use crate::domain::{CellFate, Grid};
use crate::ui::{Button, ButtonAction, Theme};

/// Map a cell's fate for this frame to its display color
fn cell_color(fate: CellFate, theme: &Theme) -> Color {
    match fate {
        CellFate::Background => theme.background,
        CellFate::Alive => theme.alive,
        CellFate::AboutToDie => theme.about_to_die,
        CellFate::AboutToBeBorn => theme.about_to_be_born,
    }
}

/// Draw the board. When `next` is given (simulation running), each cell is
/// classified against its upcoming state so the next generation previews
/// before it is committed; otherwise cells render by raw state.
/// Cells are drawn one pixel short of the cell size so the clear color
/// shows through as grid lines.
pub fn draw_cells(grid: &Grid, next: Option<&Grid>, cfg: &Config, theme: &Theme) {
    let size = cfg.cell_size;

    for (x, y, cell) in grid.iter_cells() {
        let next_cell = match next {
            Some(next_grid) => next_grid.get(x, y).unwrap_or(cell),
            None => cell,
        };
        let color = cell_color(CellFate::of(cell, next_cell), theme);

        draw_rectangle(
            x as f32 * size,
            y as f32 * size,
            size - 1.0,
            size - 1.0,
            color,
        );
    }
}

/// Draw the button bar with hover highlighting. The toggle button is
/// colored by the current running state instead.
pub fn draw_button_bar(
    buttons: &[Button],
    state: &AppState,
    theme: &Theme,
    mouse_pos: (f32, f32),
) {
    for button in buttons {
        let background = match button.action() {
            ButtonAction::ToggleRun => Some(if state.is_running {
                theme.button_running
            } else {
                theme.button_paused
            }),
            _ => None,
        };
        button.draw(mouse_pos, background, theme);
    }
}

/// Draw the status readout in the free space right of the buttons
pub fn draw_status(state: &AppState, cfg: &Config, theme: &Theme) {
    let y = cfg.window_height() - 20.0;

    draw_text(&format!("Gen {}", state.generation), 460.0, y, 20.0, theme.button_text);

    let (status, color) = if state.is_running {
        ("Running", theme.button_paused)
    } else {
        ("Paused", theme.button_text)
    };
    draw_text(status, 580.0, y, 20.0, color);

    draw_text(
        &format!("{:.0} gen/s", state.updates_per_second),
        680.0,
        y,
        20.0,
        theme.button_text,
    );
}
