//! Modified Game of Life where every cell can die with a probability equal to the
//! live cell ratio observed `delay_window` ticks earlier.

pub mod grid;
pub mod history;
pub mod output;
pub mod rule;
pub mod simulation;

pub use grid::Grid;
pub use history::DensityHistory;
pub use rule::Transition;
pub use simulation::{Simulator, TickReport};
