use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{Config, InputEvent};
use crate::domain::{Cell, Grid};
use crate::ui::{Button, ButtonAction};

/// What the frame loop should do after an event has been applied
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Continue,
    Exit,
}

/// AppState orchestrates the simulation and owns all interactive state.
/// This is the application layer that coordinates domain logic: the board,
/// the running/paused machine, and the drag-painting sub-state.
pub struct AppState {
    pub grid: Grid,
    pub is_running: bool,
    /// True while the primary pointer button is held after a press on the board
    pub is_drawing: bool,
    pub generation: u64,
    pub updates_per_second: f32,
    update_timer: f32,
    rng: StdRng,
}

impl AppState {
    /// Create new application state with an OS-seeded RNG
    pub fn new(cfg: &Config) -> Self {
        Self::with_rng(cfg, StdRng::from_os_rng())
    }

    /// Create new application state with an explicit RNG (seedable for tests)
    pub fn with_rng(cfg: &Config, rng: StdRng) -> Self {
        Self {
            grid: Grid::new(cfg.grid_width, cfg.grid_height),
            is_running: false,
            is_drawing: false,
            generation: 0,
            updates_per_second: cfg.updates_per_second,
            update_timer: 0.0,
            rng,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Replace the board with an all-dead one.
    /// The running state is deliberately left unchanged.
    pub fn clear(mut self) -> Self {
        self.grid = self.grid.clear();
        self.generation = 0;
        self
    }

    /// Replace the board with a random one.
    /// The running state is deliberately left unchanged.
    pub fn randomize(mut self, cfg: &Config) -> Self {
        self.grid = self.grid.randomize(cfg.alive_probability, &mut self.rng);
        self.generation = 0;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Apply one input event.
    ///
    /// Button hit-testing takes priority over board painting: a press
    /// inside a button rectangle executes the button's action and never
    /// paints, even if the point also falls inside the board region.
    pub fn apply(mut self, event: InputEvent, buttons: &[Button], cfg: &Config) -> (Self, Outcome) {
        match event {
            InputEvent::PointerDown(pos) => {
                if let Some(button) = buttons.iter().find(|b| b.contains(pos)) {
                    return self.activate(button.action(), cfg);
                }
                if let Some((x, y)) = cfg.cell_at(pos) {
                    self.is_drawing = true;
                    self.grid.set(x, y, Cell::Alive);
                }
            }
            InputEvent::PointerMoved(pos) => {
                // Painting is additive: drag sets cells alive, never erases
                if self.is_drawing {
                    if let Some((x, y)) = cfg.cell_at(pos) {
                        self.grid.set(x, y, Cell::Alive);
                    }
                }
            }
            InputEvent::PointerUp => self.is_drawing = false,
            InputEvent::ToggleRun => return (self.toggle_running(), Outcome::Continue),
            InputEvent::Clear => return (self.clear(), Outcome::Continue),
            InputEvent::Randomize => return (self.randomize(cfg), Outcome::Continue),
            InputEvent::SpeedUp => return (self.adjust_speed(5.0), Outcome::Continue),
            InputEvent::SpeedDown => return (self.adjust_speed(-5.0), Outcome::Continue),
            InputEvent::CloseRequested => return (self, Outcome::Exit),
        }
        (self, Outcome::Continue)
    }

    /// Execute a button's semantic action
    fn activate(self, action: ButtonAction, cfg: &Config) -> (Self, Outcome) {
        match action {
            ButtonAction::ToggleRun => (self.toggle_running(), Outcome::Continue),
            ButtonAction::Clear => (self.clear(), Outcome::Continue),
            ButtonAction::Randomize => (self.randomize(cfg), Outcome::Continue),
            ButtonAction::Quit => (self, Outcome::Exit),
        }
    }

    /// Advance the simulation clock by one frame.
    /// Steps the board once the accumulated time reaches the update
    /// interval; does nothing while paused.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.grid = self.grid.step();
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::create_buttons;

    fn cfg() -> Config {
        Config::default()
    }

    fn state() -> AppState {
        AppState::with_rng(&cfg(), StdRng::seed_from_u64(7))
    }

    fn apply(state: AppState, event: InputEvent) -> (AppState, Outcome) {
        let cfg = cfg();
        let buttons = create_buttons(&cfg);
        state.apply(event, &buttons, &cfg)
    }

    #[test]
    fn test_toggle_twice_restores_state_without_touching_grid() {
        let (mut s, _) = apply(state(), InputEvent::PointerDown((55.0, 55.0)));
        let before = s.grid.clone();

        s = s.toggle_running().toggle_running();
        assert!(!s.is_running);
        assert_eq!(s.grid, before);
    }

    #[test]
    fn test_pointer_press_paints_one_cell() {
        let (s, outcome) = apply(state(), InputEvent::PointerDown((55.0, 55.0)));

        assert_eq!(outcome, Outcome::Continue);
        assert!(s.is_drawing);
        assert_eq!(s.grid.get(5, 5), Some(Cell::Alive));
        assert_eq!(s.grid.population(), 1);
    }

    #[test]
    fn test_paint_then_pause_unpause_leaves_exactly_one_cell() {
        // E2E through the state machine: press on cell (5,5), then toggle twice
        let (s, _) = apply(state(), InputEvent::PointerDown((55.0, 55.0)));
        let (s, _) = apply(s, InputEvent::ToggleRun);
        let (s, _) = apply(s, InputEvent::ToggleRun);

        assert!(!s.is_running);
        assert_eq!(s.grid.population(), 1);
        assert_eq!(s.grid.get(5, 5), Some(Cell::Alive));
    }

    #[test]
    fn test_drag_paints_only_while_drawing() {
        let (s, _) = apply(state(), InputEvent::PointerDown((5.0, 5.0)));
        let (s, _) = apply(s, InputEvent::PointerMoved((15.0, 5.0)));
        assert_eq!(s.grid.population(), 2);

        let (s, _) = apply(s, InputEvent::PointerUp);
        assert!(!s.is_drawing);
        let (s, _) = apply(s, InputEvent::PointerMoved((25.0, 5.0)));
        assert_eq!(s.grid.population(), 2);
    }

    #[test]
    fn test_painting_is_additive() {
        let (s, _) = apply(state(), InputEvent::PointerDown((55.0, 55.0)));
        let (s, _) = apply(s, InputEvent::PointerUp);
        let (s, _) = apply(s, InputEvent::PointerDown((55.0, 55.0)));

        assert_eq!(s.grid.get(5, 5), Some(Cell::Alive));
        assert_eq!(s.grid.population(), 1);
    }

    #[test]
    fn test_press_outside_board_and_buttons_does_nothing() {
        // Button bar, right of the last button
        let (s, outcome) = apply(state(), InputEvent::PointerDown((500.0, 620.0)));

        assert_eq!(outcome, Outcome::Continue);
        assert!(!s.is_drawing);
        assert_eq!(s.grid.population(), 0);
    }

    #[test]
    fn test_button_hit_takes_priority_over_painting() {
        // A button overlapping the board region: the action must win
        let cfg = cfg();
        let buttons = vec![Button::new(40.0, 40.0, 100.0, 30.0, "Clear", ButtonAction::Clear)];

        let (s, outcome) = state().apply(InputEvent::PointerDown((55.0, 55.0)), &buttons, &cfg);

        assert_eq!(outcome, Outcome::Continue);
        assert!(!s.is_drawing, "button press must not enter drawing mode");
        assert_eq!(s.grid.population(), 0, "button press must not paint");
    }

    #[test]
    fn test_toggle_button_flips_running() {
        let (s, _) = apply(state(), InputEvent::PointerDown((60.0, 625.0)));
        assert!(s.is_running);
        let (s, _) = apply(s, InputEvent::PointerDown((60.0, 625.0)));
        assert!(!s.is_running);
    }

    #[test]
    fn test_clear_button_empties_board_and_preserves_running() {
        let (s, _) = apply(state(), InputEvent::PointerDown((55.0, 55.0)));
        let (s, _) = apply(s, InputEvent::ToggleRun);
        let (s, _) = apply(s, InputEvent::PointerDown((170.0, 625.0)));

        assert!(s.is_running);
        assert_eq!(s.grid.population(), 0);
        assert_eq!(s.generation, 0);
    }

    #[test]
    fn test_randomize_button_fills_board_and_preserves_running() {
        let (s, _) = apply(state(), InputEvent::ToggleRun);
        let (s, _) = apply(s, InputEvent::PointerDown((280.0, 625.0)));

        assert!(s.is_running);
        let population = s.grid.population();
        assert!(population > 0 && population < 80 * 60);
    }

    #[test]
    fn test_quit_button_exits() {
        let (_, outcome) = apply(state(), InputEvent::PointerDown((390.0, 625.0)));
        assert_eq!(outcome, Outcome::Exit);
    }

    #[test]
    fn test_close_request_exits() {
        let (_, outcome) = apply(state(), InputEvent::CloseRequested);
        assert_eq!(outcome, Outcome::Exit);
    }

    #[test]
    fn test_tick_steps_only_while_running() {
        // Blinker centered away from the edges
        let (s, _) = apply(state(), InputEvent::PointerDown((105.0, 105.0)));
        let (s, _) = apply(s, InputEvent::PointerMoved((115.0, 105.0)));
        let (s, _) = apply(s, InputEvent::PointerMoved((125.0, 105.0)));
        let (s, _) = apply(s, InputEvent::PointerUp);
        let before = s.grid.clone();

        let s = s.tick(1.0);
        assert_eq!(s.grid, before);
        assert_eq!(s.generation, 0);

        let s = s.toggle_running().tick(1.0);
        assert_ne!(s.grid, before);
        assert_eq!(s.generation, 1);

        // Period-2 oscillator returns after the second step
        let s = s.tick(1.0);
        assert_eq!(s.grid, before);
        assert_eq!(s.generation, 2);
    }

    #[test]
    fn test_tick_waits_for_the_update_interval() {
        let (s, _) = apply(state(), InputEvent::PointerDown((55.0, 55.0)));
        let s = s.toggle_running().tick(0.001);
        assert_eq!(s.generation, 0);
        assert_eq!(s.grid.population(), 1);
    }

    #[test]
    fn test_speed_adjustment_is_clamped() {
        let s = state().adjust_speed(1000.0);
        assert_eq!(s.updates_per_second, 60.0);
        let s = s.adjust_speed(-1000.0);
        assert_eq!(s.updates_per_second, 1.0);
    }
}
