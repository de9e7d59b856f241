/// Platform-independent input vocabulary.
///
/// The input module translates raw windowing state into these events once
/// per frame; the state machine consumes them without ever touching the
/// display, which keeps every transition testable headlessly.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputEvent {
    /// Primary pointer button pressed at a screen position
    PointerDown((f32, f32)),
    /// Pointer at a screen position (paints while drawing)
    PointerMoved((f32, f32)),
    /// Primary pointer button released
    PointerUp,
    /// Play/pause requested (Space or the toggle button)
    ToggleRun,
    Clear,
    Randomize,
    SpeedUp,
    SpeedDown,
    /// Window close requested
    CloseRequested,
}
