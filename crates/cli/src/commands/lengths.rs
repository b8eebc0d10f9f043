use crate::{args::LengthsArgs, error::Error};
use tracing::info;
use transit_usage::prelude::*;

pub fn lengths(args: LengthsArgs) -> Result<(), Error> {
    let reader = GtfsReader::default().from_path(&args.gtfs)?;
    let shapes = reader.read_shapes()?;
    let lengths = measure(&shapes);
    write_csv(&args.out, &lengths)?;
    let total: Distance = lengths
        .iter()
        .map(|length| Distance::from_kilometers(length.distance))
        .sum();
    info!(
        "Wrote lengths of {} shapes ({total} in total) to {}",
        lengths.len(),
        args.out.display()
    );
    Ok(())
}
