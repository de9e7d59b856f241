use macroquad::prelude::*;

use super::Theme;

/// Semantic meaning of a button press
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonAction {
    ToggleRun,
    Clear,
    Randomize,
    Quit,
}

/// Button UI component with hover highlighting.
/// Hit-testing is pure so the state machine can consume it headlessly;
/// only `draw` touches the display.
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    action: ButtonAction,
}

impl Button {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        label: impl Into<String>,
        action: ButtonAction,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            action,
        }
    }

    pub const fn action(&self) -> ButtonAction {
        self.action
    }

    /// Check if a screen position falls inside the button rectangle
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x
            && pos.0 <= self.x + self.width
            && pos.1 >= self.y
            && pos.1 <= self.y + self.height
    }

    /// Draw the button with hover effect.
    /// A background override wins over hover highlighting; the toggle-run
    /// button uses it to show the current running state.
    pub fn draw(&self, mouse_pos: (f32, f32), background: Option<Color>, theme: &Theme) {
        let color = background.unwrap_or(if self.contains(mouse_pos) {
            theme.button_hover
        } else {
            theme.button_bg
        });

        draw_rectangle(self.x, self.y, self.width, self.height, color);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            theme.button_text,
        );
    }
}
