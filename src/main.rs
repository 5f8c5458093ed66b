use anyhow::Result;
use std::time::Instant;
use log::{info, warn, error, trace};

use delayed_life::{output, Simulator};
use life_common::SimulationConfig;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();

    info!("Starting Modified Game of Life (stochastic delayed death)...");

    // --- Load Configuration ---
    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = SimulationConfig::load(&config_path)?;
    info!("Loaded configuration from {}.", config_path);
    info!("Using {} Rayon threads.", rayon::current_num_threads());

    // --- Initialize Simulation ---
    let mut sim = Simulator::from_config(&config);
    info!(
        "Grid {}x{} initialized with {} live cells (delay window {}).",
        sim.grid().width(),
        sim.grid().height(),
        sim.grid().live_cell_count(),
        sim.history().capacity()
    );

    // --- Simulation Loop ---
    let total_ticks = config.timing.total_ticks;
    let record_interval_ticks = config.timing.record_interval_ticks;
    info!("Recording snapshot every {} ticks.", record_interval_ticks);

    info!("Starting simulation loop for {} ticks...", total_ticks);
    let start_time = Instant::now();
    sim.record_snapshot();
    let mut extinction_reported = false;

    for tick in 0..total_ticks {
        let tick_start_time = Instant::now();
        let report = sim.tick();
        let tick_duration = tick_start_time.elapsed();

        let is_record_tick = report.tick % record_interval_ticks == 0;
        let is_last_tick = tick + 1 == total_ticks;

        if is_record_tick || is_last_tick {
            sim.record_snapshot();
            info!(
                "Tick [{}/{}] | Live Cell Ratio: {:.2} | Effective LCR: {:.2} | Live cells: {} | Elapsed: {:.2} s",
                report.tick,
                total_ticks,
                report.current_density,
                report.effective_density,
                sim.grid().live_cell_count(),
                start_time.elapsed().as_secs_f64()
            );
        } else {
            trace!("Tick [{}/{}] completed in {:.2} ms", report.tick, total_ticks, tick_duration.as_secs_f64() * 1000.0);
        }

        if !extinction_reported && sim.grid().live_cell_count() == 0 {
            extinction_reported = true;
            warn!("Population went extinct at tick {}.", report.tick);
        }
    }

    let total_duration = start_time.elapsed();
    info!(
        "Simulation finished after {} ticks in {:.3} seconds.",
        sim.current_tick(),
        total_duration.as_secs_f64()
    );

    // --- Save Recorded Data ---
    let snapshots = sim.recorded_snapshots();
    if config.output.save_stats {
        if let Err(e) = output::save_snapshots(&config.output, snapshots) {
            error!("Failed to save snapshots: {:#}", e);
        }
    } else {
        info!("Skipping saving snapshots as per config (save_stats is false).");
    }

    if config.output.save_density_csv {
        let filename = format!("{}_density.csv", config.output.base_filename);
        if let Err(e) = output::save_density_csv(&filename, snapshots) {
            error!("Failed to save density series: {:#}", e);
        }
    } else {
        info!("Skipping density CSV as per config.");
    }

    info!("Simulation Complete.");
    Ok(())
}
