use anyhow::{Context, Result};
use life_common::{OutputConfig, OutputFormat, Snapshot};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File that `save_snapshots` writes for the configured format.
pub fn snapshot_path(output: &OutputConfig) -> PathBuf {
    let extension = match output.format {
        OutputFormat::Json => "json",
        OutputFormat::Bincode => "bin",
        OutputFormat::MessagePack => "msgpack",
    };
    PathBuf::from(format!("{}_snapshots.{}", output.base_filename, extension))
}

/// Writes all snapshots in the configured format and returns the file path.
pub fn save_snapshots(output: &OutputConfig, snapshots: &[Snapshot]) -> Result<PathBuf> {
    let filename = snapshot_path(output);
    let file = File::create(&filename)
        .with_context(|| format!("Error creating snapshot file '{}'", filename.display()))?;
    let mut writer = BufWriter::new(file);

    match output.format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, snapshots)
                .context("Error serializing snapshots to JSON")?;
        }
        OutputFormat::Bincode => {
            bincode::serialize_into(&mut writer, snapshots)
                .context("Error serializing snapshots to bincode")?;
        }
        OutputFormat::MessagePack => {
            rmp_serde::encode::write(&mut writer, snapshots)
                .context("Error serializing snapshots to MessagePack")?;
        }
    }
    writer.flush()?;

    info!("{} snapshots saved to {} ({:?} format)", snapshots.len(), filename.display(), output.format);
    Ok(filename)
}

/// Writes the population time series as CSV.
pub fn save_density_csv<P: AsRef<Path>>(path: P, snapshots: &[Snapshot]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Error creating CSV file '{}'", path.display()))?;

    writer.write_record(["tick", "live_cell_count", "live_density", "effective_density"])?;
    for snapshot in snapshots {
        writer.write_record(&[
            snapshot.tick.to_string(),
            snapshot.live_cell_count.to_string(),
            format!("{:.4}", snapshot.live_density),
            format!("{:.4}", snapshot.effective_density),
        ])?;
    }
    writer.flush()?;

    info!("Density series saved to {}", path.display());
    Ok(())
}
