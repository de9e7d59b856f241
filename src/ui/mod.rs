mod button;

pub use button::{Button, ButtonAction};

use macroquad::prelude::Color;

use crate::application::Config;

/// Color set for the board and the button bar.
/// An explicit immutable struct rather than loose module constants, so a
/// different skin is a construction-time decision.
#[derive(Clone, Copy)]
pub struct Theme {
    /// Dead cells
    pub background: Color,
    /// Gaps between cells, also the window clear color
    pub grid_lines: Color,
    pub alive: Color,
    pub about_to_die: Color,
    pub about_to_be_born: Color,
    pub button_bg: Color,
    pub button_hover: Color,
    pub button_text: Color,
    /// Toggle button while the simulation runs
    pub button_running: Color,
    /// Toggle button while paused
    pub button_paused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgba(10, 10, 10, 255),
            grid_lines: Color::from_rgba(40, 40, 40, 255),
            alive: Color::from_rgba(255, 255, 255, 255),
            about_to_die: Color::from_rgba(170, 170, 170, 255),
            about_to_be_born: Color::from_rgba(255, 255, 255, 255),
            button_bg: Color::from_rgba(50, 50, 50, 255),
            button_hover: Color::from_rgba(70, 70, 70, 255),
            button_text: Color::from_rgba(200, 200, 200, 255),
            button_running: Color::from_rgba(200, 50, 50, 255),
            button_paused: Color::from_rgba(50, 200, 50, 255),
        }
    }
}

/// Create the button bar with its fixed layout: four buttons along the
/// bottom strip, left to right
pub fn create_buttons(cfg: &Config) -> Vec<Button> {
    let y = cfg.window_height() - 40.0;
    let (w, h) = (cfg.button_width, cfg.button_height);
    vec![
        Button::new(10.0, y, w, h, "Start/Stop", ButtonAction::ToggleRun),
        Button::new(120.0, y, w, h, "Clear", ButtonAction::Clear),
        Button::new(230.0, y, w, h, "Randomize", ButtonAction::Randomize),
        Button::new(340.0, y, w, h, "Quit", ButtonAction::Quit),
    ]
}
