/// Immutable layout and simulation configuration.
/// Constructed once at startup and passed by reference everywhere, so the
/// board geometry is never scattered across module-level globals.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Board width in cells
    pub grid_width: usize,
    /// Board height in cells
    pub grid_height: usize,
    /// Edge length of one cell in pixels
    pub cell_size: f32,
    /// Height of the button bar below the board
    pub bar_height: f32,
    pub button_width: f32,
    pub button_height: f32,
    /// Simulation rate while running, in generations per second
    pub updates_per_second: f32,
    /// Per-cell alive probability used by randomize
    pub alive_probability: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: 80,
            grid_height: 60,
            cell_size: 10.0,
            bar_height: 50.0,
            button_width: 100.0,
            button_height: 30.0,
            updates_per_second: 30.0,
            alive_probability: 0.2,
        }
    }
}

impl Config {
    /// Window width in pixels (the board spans the full width)
    pub fn window_width(&self) -> f32 {
        self.grid_width as f32 * self.cell_size
    }

    /// Window height in pixels: board plus button bar
    pub fn window_height(&self) -> f32 {
        self.grid_pixel_height() + self.bar_height
    }

    /// Height of the board region in pixels
    pub fn grid_pixel_height(&self) -> f32 {
        self.grid_height as f32 * self.cell_size
    }

    /// Map a screen position to the cell under it.
    /// Returns None for positions outside the board region (including the
    /// button bar), which callers treat as a no-op.
    pub fn cell_at(&self, pos: (f32, f32)) -> Option<(usize, usize)> {
        let (mx, my) = pos;
        if mx < 0.0 || my < 0.0 || mx >= self.window_width() || my >= self.grid_pixel_height() {
            return None;
        }
        Some(((mx / self.cell_size) as usize, (my / self.cell_size) as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_dimensions() {
        let cfg = Config::default();
        assert_eq!(cfg.window_width(), 800.0);
        assert_eq!(cfg.window_height(), 650.0);
        assert_eq!(cfg.grid_pixel_height(), 600.0);
    }

    #[test]
    fn test_cell_at_maps_pixels_to_cells() {
        let cfg = Config::default();
        assert_eq!(cfg.cell_at((0.0, 0.0)), Some((0, 0)));
        assert_eq!(cfg.cell_at((55.0, 55.0)), Some((5, 5)));
        assert_eq!(cfg.cell_at((799.9, 599.9)), Some((79, 59)));
    }

    #[test]
    fn test_cell_at_rejects_positions_outside_the_board() {
        let cfg = Config::default();
        // Button bar and beyond
        assert_eq!(cfg.cell_at((10.0, 600.0)), None);
        assert_eq!(cfg.cell_at((10.0, 649.0)), None);
        // Off-window
        assert_eq!(cfg.cell_at((800.0, 10.0)), None);
        assert_eq!(cfg.cell_at((-1.0, 10.0)), None);
        assert_eq!(cfg.cell_at((10.0, -1.0)), None);
    }
}
