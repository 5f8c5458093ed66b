use serde::{Deserialize, Serialize};

/// Runtime parameters derived from the configuration, consumed when building a simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimParams {
    // World
    pub width: usize,
    pub height: usize,
    pub num_cells: usize,

    // Initial state
    pub initial_live_cells: usize, // width * height / init_live_cell_factor

    // Dynamics
    pub delay_window: usize, // Capacity of the density history queue
}
