// Domain layer - Core simulation logic
pub mod domain;

// Application layer - State machine and configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellFate, Grid};
pub use application::{AppState, Config, InputEvent, Outcome};
pub use ui::{Button, ButtonAction, Theme};
