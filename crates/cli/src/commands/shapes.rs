use crate::{args::ShapesArgs, commands::ensure_dir, error::Error};
use std::path::{Path, PathBuf};
use tracing::info;
use transit_usage::prelude::*;

pub const SHAPE_DATA_FILE_NAME: &str = "shape_data.csv";
pub const PLOT_DATA_FILE_NAME: &str = "plot_data.csv";

pub fn shapes(args: ShapesArgs) -> Result<(), Error> {
    let reader = GtfsReader::default().from_path(&args.gtfs)?;
    let out_dir = args.out_dir.unwrap_or_else(|| default_out_dir(&args.gtfs));
    ensure_dir(&out_dir)?;

    info!("Loading {}...", args.gtfs.display());
    let data = reader.read_all()?;
    let shape_data = collect_shape_data(&data)?;
    let plot_data = generate_plot_data(&data, &shape_data);

    write_csv(out_dir.join(SHAPE_DATA_FILE_NAME), &shape_data)?;
    write_csv(out_dir.join(PLOT_DATA_FILE_NAME), &plot_data)?;
    info!(
        "Wrote {} shapes and {} plot rows to {}",
        shape_data.len(),
        plot_data.len(),
        out_dir.display()
    );
    Ok(())
}

fn default_out_dir(gtfs: &Path) -> PathBuf {
    if gtfs.is_dir() {
        return gtfs.to_path_buf();
    }
    match gtfs.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
