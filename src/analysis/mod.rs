use std::collections::HashMap;

use thiserror::Error;

use crate::gtfs::{self, GtfsData, GtfsShape};

mod calendar;
mod length;
mod plot;
mod report;
mod usage;

pub use calendar::*;
pub use length::*;
pub use plot::*;
pub use report::*;
pub use usage::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Gtfs(#[from] gtfs::Error),
    #[error("Unsupported feed: {0}")]
    UnsupportedFeedShape(String),
    #[error("Number of days a service operates on cannot be negative, services: {0:?}")]
    InvalidCalendarData(Vec<String>),
    #[error("Shape ids must uniquely identify route ids, shapes with several routes: {0:?}")]
    InvalidFeedInvariant(Vec<String>),
}

/// Counts the service days of every service and rolls them up per shape.
pub fn collect_shape_data(data: &GtfsData) -> Result<Vec<ShapeUsage>, self::Error> {
    let service_days = count_days(&data.calendar, &data.calendar_dates)?;
    aggregate(&data.trips, &data.routes, &service_days)
}

/// Point table of the feed with separators between shapes, joined to `usage`.
pub fn generate_plot_data(data: &GtfsData, usage: &[ShapeUsage]) -> Vec<PlotPoint> {
    reshape(&data.shapes, usage)
}

/// Groups shape points by `shape_id` in order of first appearance. Points
/// keep their file order inside a group.
pub(crate) fn group_by_shape(shapes: &[GtfsShape]) -> Vec<(&str, Vec<&GtfsShape>)> {
    let mut lookup: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&GtfsShape>)> = Vec::new();
    for shape in shapes {
        let idx = *lookup.entry(shape.shape_id.as_str()).or_insert_with(|| {
            groups.push((shape.shape_id.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[idx].1.push(shape);
    }
    groups
}
