mod config;
mod events;
mod state;

pub use config::Config;
pub use events::InputEvent;
pub use state::{AppState, Outcome};
