use rand::Rng;

/// Live/dead state of every cell in a fixed `width x height` area, stored row-major
/// (`index = y * width + x`).
///
/// Coordinates passed to the accessors must lie inside the grid. Dimensions must be
/// positive; the grid never resizes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Creates a grid and marks `live_cell_count` uniformly drawn positions live.
    /// Draws are taken with replacement, so collisions leave fewer live cells than requested.
    pub fn initialize<R: Rng>(width: usize, height: usize, live_cell_count: usize, rng: &mut R) -> Self {
        let mut grid = Self::new(width, height);
        grid.place_live_cells((0..live_cell_count).map(|_| {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            (x, y)
        }));
        grid
    }

    /// Marks each given position live. Repeated positions are harmless.
    pub fn place_live_cells<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (x, y) in positions {
            self.set_cell_at(x, y, true);
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cell states, for renderers.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    #[inline(always)]
    pub fn cell_at(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    #[inline(always)]
    pub fn set_cell_at(&mut self, x: usize, y: usize, value: bool) {
        self.cells[y * self.width + x] = value;
    }

    /// Counts live cells in the Moore neighborhood of `(x, y)`.
    /// Positions outside the grid count as dead; there is no wraparound.
    #[inline(always)]
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for dy in -1..=1isize {
            for dx in -1..=1isize {
                if dx == 0 && dy == 0 { continue; }

                let Some(nx) = x.checked_add_signed(dx) else { continue };
                let Some(ny) = y.checked_add_signed(dy) else { continue };
                if nx >= self.width || ny >= self.height { continue; }

                if self.cell_at(nx, ny) {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn live_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Fraction of live cells, in `[0, 1]`.
    pub fn live_density(&self) -> f32 {
        self.live_cell_count() as f32 / self.cells.len() as f32
    }
}
