use serde::{Deserialize, Serialize};
use anyhow::Result;
use crate::sim_params::SimParams;
use std::path::Path;

// Size of the cell area
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UniverseConfig {
    pub width: usize,
    pub height: usize,
}

// Initial random population, loaded from config.toml
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct InitialConditions {
    /// Initial live cell count is `width * height / init_live_cell_factor`.
    #[serde(default = "default_init_live_cell_factor")]
    pub init_live_cell_factor: usize,
    /// Seed for the simulation RNG. Seeded from OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

// Parameters of the delayed death feedback
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DynamicsConfig {
    /// Number of ticks between recording a density sample and using it as death probability.
    #[serde(default = "default_delay_window")]
    pub delay_window: usize,
}

// Configuration for run length and recording cadence
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TimingConfig {
    pub total_ticks: u64,
    #[serde(default = "default_record_interval_ticks")]
    pub record_interval_ticks: u64,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Bincode,
    MessagePack,
}

// Configuration for output settings, loaded from config.toml
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub base_filename: String,
    pub save_stats: bool,
    #[serde(default = "default_output_format")]
    pub format: OutputFormat,
    #[serde(default = "default_save_density_csv")]
    pub save_density_csv: bool,
}

fn default_init_live_cell_factor() -> usize {
    50
}

fn default_delay_window() -> usize {
    20 // 20 to 50 gives cyclic population with a factor of 50
}

fn default_record_interval_ticks() -> u64 {
    1
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Json
}

fn default_save_density_csv() -> bool {
    true
}

impl Default for InitialConditions {
    fn default() -> Self {
        InitialConditions {
            init_live_cell_factor: default_init_live_cell_factor(),
            seed: None,
        }
    }
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        DynamicsConfig { delay_window: default_delay_window() }
    }
}

// Main simulation configuration structure, loaded from config.toml.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SimulationConfig {
    pub universe: UniverseConfig,
    #[serde(default)]
    pub initial_conditions: InitialConditions,
    #[serde(default)]
    pub dynamics: DynamicsConfig,
    pub timing: TimingConfig,
    pub output: OutputConfig,
}

impl SimulationConfig {
    /// Loads the simulation configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let config_str = std::fs::read_to_string(path_ref)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path_ref.display(), e))?;
        Self::from_toml_str(&config_str)
            .map_err(|e| anyhow::anyhow!("Invalid config '{}': {}", path_ref.display(), e))
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(config_str)
            .map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.universe.width == 0 || self.universe.height == 0 {
            anyhow::bail!(
                "universe dimensions must be positive (got {}x{}).",
                self.universe.width,
                self.universe.height
            );
        }
        if self.initial_conditions.init_live_cell_factor == 0 {
            anyhow::bail!("init_live_cell_factor must be greater than 0.");
        }
        if self.dynamics.delay_window == 0 {
            anyhow::bail!("delay_window must be greater than 0.");
        }
        if self.timing.record_interval_ticks == 0 {
            anyhow::bail!("record_interval_ticks must be greater than 0.");
        }
        Ok(())
    }

    /// Converts the configuration into the parameters used to build a simulator.
    pub fn get_sim_params(&self) -> SimParams {
        let width = self.universe.width;
        let height = self.universe.height;
        let num_cells = width * height;

        SimParams {
            width,
            height,
            num_cells,
            initial_live_cells: num_cells / self.initial_conditions.init_live_cell_factor,
            delay_window: self.dynamics.delay_window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [universe]
        width = 400
        height = 300

        [timing]
        total_ticks = 100

        [output]
        base_filename = "run"
        save_stats = true
    "#;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = SimulationConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.initial_conditions.init_live_cell_factor, 50);
        assert_eq!(config.initial_conditions.seed, None);
        assert_eq!(config.dynamics.delay_window, 20);
        assert_eq!(config.timing.record_interval_ticks, 1);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.save_density_csv);
    }

    #[test]
    fn sim_params_derive_initial_live_cells() {
        let config = SimulationConfig::from_toml_str(MINIMAL).unwrap();
        let params = config.get_sim_params();
        assert_eq!(params.num_cells, 120_000);
        assert_eq!(params.initial_live_cells, 2_400);
        assert_eq!(params.delay_window, 20);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let text = r#"
            [universe]
            width = 10
            height = 10

            [initial_conditions]
            init_live_cell_factor = 4
            seed = 7

            [dynamics]
            delay_window = 35

            [timing]
            total_ticks = 5
            record_interval_ticks = 5

            [output]
            base_filename = "out"
            save_stats = false
            format = "messagepack"
            save_density_csv = false
        "#;
        let config = SimulationConfig::from_toml_str(text).unwrap();
        assert_eq!(config.initial_conditions.seed, Some(7));
        assert_eq!(config.output.format, OutputFormat::MessagePack);
        assert_eq!(config.get_sim_params().initial_live_cells, 25);
        assert_eq!(config.get_sim_params().delay_window, 35);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let text = MINIMAL.replace("width = 400", "width = 0");
        let err = SimulationConfig::from_toml_str(&text).unwrap_err();
        assert!(err.to_string().contains("dimensions"));
    }

    #[test]
    fn rejects_zero_delay_window() {
        let text = format!("{}\n[dynamics]\ndelay_window = 0\n", MINIMAL);
        assert!(SimulationConfig::from_toml_str(&text).is_err());
    }

    #[test]
    fn rejects_unknown_output_format() {
        let text = MINIMAL.replace("save_stats = true", "save_stats = true\nformat = \"yaml\"");
        assert!(SimulationConfig::from_toml_str(&text).is_err());
    }
}
