use serde::{Serialize, Deserialize};

/// Population figures for the grid at a specific tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Number of ticks applied before the snapshot was taken.
    pub tick: u64,
    /// Number of live cells in the current grid (after the tick).
    pub live_cell_count: u64,
    /// Live cell ratio of the grid the last tick read, i.e. the value it pushed into the history.
    /// At tick 0 this is the ratio of the initial grid.
    pub live_density: f32,
    /// Delayed live cell ratio that drove the death probability of the last tick.
    pub effective_density: f32,
    /// `floor(1000 * effective_density)`: draws in `[0, 1000)` below this value were killed.
    pub death_threshold: u32,
}
