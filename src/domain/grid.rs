use super::Cell;
use rand::Rng;

/// Grid manages the 2D cellular automaton board.
/// Uses functional, immutable updates for predictable state transitions:
/// `step` reads the old grid and produces a new one, so every cell's next
/// state is computed from its neighbors' current states.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position (mutable for painting).
    /// Out-of-bounds coordinates are a no-op: pointer positions outside
    /// the board region are expected during normal use.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors in the Moore neighborhood.
    /// The board is bounded: positions outside the grid are excluded from
    /// the count, so edge and corner cells see fewer than 8 neighbors.
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1i32..=1)
            .flat_map(|dy| (-1i32..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                (nx >= 0 && ny >= 0)
                    .then(|| self.get(nx as usize, ny as usize))
                    .flatten()
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure functional evolution - returns the next generation
    pub fn step(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                current.evolve(self.count_live_neighbors(x, y))
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(mut self) -> Self {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self
    }

    /// Randomize the board: each cell is independently alive with the
    /// given probability. The RNG is injected so callers can seed it.
    pub fn randomize(mut self, alive_probability: f64, rng: &mut impl Rng) -> Self {
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(alive_probability) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        self
    }

    /// Number of live cells on the board
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}
