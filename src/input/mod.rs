use macroquad::prelude::*;

use crate::application::InputEvent;

/// Poll the windowing layer once per frame and translate its state into
/// platform-independent events, in the order the state machine should see
/// them. The pointer position is reported every frame; painting the same
/// hovered cell repeatedly while drawing is idempotent.
pub fn poll_events() -> Vec<InputEvent> {
    let mut events = Vec::new();
    let mouse_pos = mouse_position();

    if is_mouse_button_pressed(MouseButton::Left) {
        events.push(InputEvent::PointerDown(mouse_pos));
    }
    events.push(InputEvent::PointerMoved(mouse_pos));
    if is_mouse_button_released(MouseButton::Left) {
        events.push(InputEvent::PointerUp);
    }

    if is_key_pressed(KeyCode::Space) {
        events.push(InputEvent::ToggleRun);
    }
    if is_key_pressed(KeyCode::C) {
        events.push(InputEvent::Clear);
    }
    if is_key_pressed(KeyCode::R) {
        events.push(InputEvent::Randomize);
    }
    if is_key_pressed(KeyCode::Up) {
        events.push(InputEvent::SpeedUp);
    }
    if is_key_pressed(KeyCode::Down) {
        events.push(InputEvent::SpeedDown);
    }

    if is_quit_requested() {
        events.push(InputEvent::CloseRequested);
    }

    events
}
