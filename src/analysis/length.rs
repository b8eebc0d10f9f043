use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    analysis::group_by_shape,
    gtfs::GtfsShape,
    shared::{Coordinate, Distance, PlanarPoint},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShapeLength {
    pub shape_id: String,
    /// Kilometers.
    pub distance: f64,
}

/// Length of a path on the flat projection, summing the distance between
/// each point and its predecessor. The first point has no predecessor and
/// contributes nothing.
pub fn path_length<I>(coordinates: I) -> Distance
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut previous: Option<PlanarPoint> = None;
    coordinates
        .into_iter()
        .map(|coordinate| coordinate.to_planar())
        .map(|point| {
            let step = previous
                .map(|prev| prev.distance(&point))
                .unwrap_or_default();
            previous = Some(point);
            step
        })
        .sum()
}

/// Measures every shape of the feed, in order of first appearance. Points
/// are taken in file order, not sorted by `shape_pt_sequence`.
pub fn measure(shapes: &[GtfsShape]) -> Vec<ShapeLength> {
    debug!("Measuring shapes...");
    let now = Instant::now();
    let lengths: Vec<ShapeLength> = group_by_shape(shapes)
        .into_iter()
        .map(|(shape_id, points)| {
            let distance = path_length(
                points
                    .iter()
                    .map(|point| Coordinate::new(point.shape_pt_lat, point.shape_pt_lon)),
            );
            ShapeLength {
                shape_id: shape_id.to_string(),
                distance: distance.as_kilometers(),
            }
        })
        .collect();
    debug!(
        "Measuring {} shapes took {:?}",
        lengths.len(),
        now.elapsed()
    );
    lengths
}
