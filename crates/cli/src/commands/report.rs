use crate::{
    args::{ReportArgs, ReportTable},
    error::Error,
};
use tracing::info;
use transit_usage::prelude::*;

pub fn report(args: ReportArgs) -> Result<(), Error> {
    match args.table {
        ReportTable::Longest {
            shape_data,
            distance_data,
            out,
            num_rows,
        } => {
            let usage: Vec<ShapeUsage> = read_csv(&shape_data)?;
            let lengths: Vec<ShapeLength> = read_csv(&distance_data)?;
            let table = longest_routes(&usage, &lengths, num_rows);
            write_csv(&out, &table)?;
            info!("Wrote {} longest routes to {}", table.len(), out.display());
        }
        ReportTable::Vehicles { shape_data, out } => {
            let usage: Vec<ShapeUsage> = read_csv(&shape_data)?;
            let table = vehicle_distribution(&usage);
            table.iter().for_each(|row| {
                info!("{}: traveled {} times", row.vehicle_type, row.times_taken);
            });
            write_csv(&out, &table)?;
        }
    }
    Ok(())
}
