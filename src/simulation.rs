use crate::grid::Grid;
use crate::history::DensityHistory;
use crate::rule::Transition;
use life_common::{SimParams, SimulationConfig, Snapshot};
use log::{debug, info, trace};
use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Death draws are uniform integers in `[0, DEATH_DRAW_RANGE)`.
pub const DEATH_DRAW_RANGE: u32 = 1000;

/// Draws below this value kill the cell: `floor(1000 * delayed_density)`.
#[inline(always)]
pub fn death_threshold(delayed_density: f32) -> u32 {
    (DEATH_DRAW_RANGE as f32 * delayed_density).floor() as u32
}

/// Densities involved in a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// 1-based number of the tick that produced this report.
    pub tick: u64,
    /// Live cell ratio of the grid the tick read.
    pub current_density: f32,
    /// Delayed ratio evicted from the history and used as death probability.
    pub effective_density: f32,
}

/// Runs the modified Life automaton with delayed stochastic death.
pub struct Simulator {
    /// Current generation. Replaced wholesale every tick.
    grid: Grid,
    /// Densities of the last `delay_window` grids, most recent last.
    history: DensityHistory,
    /// Single RNG stream: initial placement, then one draw per cell per tick in row-major order.
    rng: StdRng,
    current_tick: u64,
    /// Delayed density consumed by the most recent tick (before the first tick, the one it will consume).
    effective_density: f32,
    /// Per-cell extinction flags for the tick being computed.
    kill_mask: Vec<bool>,
    /// Snapshots collected at record intervals.
    recorded_snapshots: Vec<Snapshot>,
}

impl Simulator {
    /// Creates a simulator with a randomly populated grid drawn from `rng`.
    pub fn new(params: &SimParams, mut rng: StdRng) -> Self {
        let grid = Grid::initialize(params.width, params.height, params.initial_live_cells, &mut rng);
        let history = DensityHistory::new(params.delay_window);
        Self::from_parts(grid, history, rng)
    }

    /// Builds the simulator described by `config`, seeding the RNG from the config or OS entropy.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let rng = match config.initial_conditions.seed {
            Some(seed) => {
                info!("Seeding RNG with {}.", seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                info!("No seed configured, seeding RNG from OS entropy.");
                StdRng::from_os_rng()
            }
        };
        let params = config.get_sim_params();
        debug!("Simulation Parameters: {:#?}", params);
        Self::new(&params, rng)
    }

    /// Assembles a simulator from an explicit grid and history.
    pub fn from_parts(grid: Grid, history: DensityHistory, rng: StdRng) -> Self {
        let num_cells = grid.cells().len();
        let effective_density = history.oldest();
        Self {
            grid,
            history,
            rng,
            current_tick: 0,
            effective_density,
            kill_mask: vec![false; num_cells],
            recorded_snapshots: Vec::new(),
        }
    }

    /// Advances the grid by exactly one tick.
    pub fn tick(&mut self) -> TickReport {
        let current_density = self.grid.live_density();
        let delayed_density = self.history.push(current_density);
        let threshold = death_threshold(delayed_density);

        // --- 1. Draw extinction events (Serial, row-major) ---
        // Every cell consumes one draw even when the threshold is zero, keeping the stream aligned.
        for killed in self.kill_mask.iter_mut() {
            *killed = self.rng.random_range(0..DEATH_DRAW_RANGE) < threshold;
        }

        // --- 2. Apply the rule into a fresh grid (Parallel by row) ---
        let width = self.grid.width();
        let mut next = Grid::new(width, self.grid.height());
        let current = &self.grid;
        let kill_mask = &self.kill_mask;
        next.cells_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = cell_transition(current, kill_mask[y * width + x], x, y).is_alive();
                }
            });

        // --- 3. Swap in the new generation ---
        self.grid = next;
        self.effective_density = delayed_density;
        self.current_tick += 1;

        trace!(
            "Tick {}: density {:.4}, effective {:.4} (threshold {})",
            self.current_tick, current_density, delayed_density, threshold
        );

        TickReport {
            tick: self.current_tick,
            current_density,
            effective_density: delayed_density,
        }
    }

    /// Stores a snapshot of the current population figures.
    /// Densities pair up per tick: the ratio the last tick pushed and the one it consumed.
    pub fn record_snapshot(&mut self) {
        let live_cell_count = self.grid.live_cell_count();
        // Before the first tick nothing has been pushed; use the ratio the first tick will push.
        let live_density = if self.current_tick == 0 {
            self.grid.live_density()
        } else {
            self.current_density()
        };
        let snapshot = Snapshot {
            tick: self.current_tick,
            live_cell_count: live_cell_count as u64,
            live_density,
            effective_density: self.effective_density,
            death_threshold: death_threshold(self.effective_density),
        };
        debug!("Recording snapshot at tick {}: {} live cells.", snapshot.tick, live_cell_count);
        self.recorded_snapshots.push(snapshot);
    }

    pub fn recorded_snapshots(&self) -> &[Snapshot] {
        &self.recorded_snapshots
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &DensityHistory {
        &self.history
    }

    /// Live cell ratio recorded by the most recent tick.
    pub fn current_density(&self) -> f32 {
        self.history.newest()
    }

    /// Delayed ratio that set the death probability of the most recent tick.
    pub fn effective_density(&self) -> f32 {
        self.effective_density
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }
}

#[inline(always)]
fn cell_transition(grid: &Grid, killed: bool, x: usize, y: usize) -> Transition {
    if killed {
        return Transition::Extinction;
    }
    Transition::classify(grid.cell_at(x, y), grid.count_live_neighbors(x, y))
}
