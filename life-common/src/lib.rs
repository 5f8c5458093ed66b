pub mod config;
pub mod sim_params;
pub mod snapshot;

// Re-export key types for easier use by dependent crates
pub use config::{SimulationConfig, UniverseConfig, InitialConditions, DynamicsConfig, TimingConfig, OutputConfig, OutputFormat};
pub use sim_params::SimParams;
pub use snapshot::Snapshot;
