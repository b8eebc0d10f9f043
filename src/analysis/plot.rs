use std::{collections::HashMap, time::Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    analysis::{ShapeUsage, group_by_shape},
    gtfs::GtfsShape,
};

/// One row of the line plot input. Rows without coordinates separate the
/// point runs of two shapes, so a renderer drawing the whole table as one
/// series lifts the pen between them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PlotPoint {
    pub shape_id: String,
    pub shape_pt_lon: Option<f64>,
    pub shape_pt_lat: Option<f64>,
    pub shape_pt_sequence: Option<u32>,
    pub times_taken: Option<u64>,
    pub route_id: Option<String>,
    pub route_short_name: Option<String>,
    pub route_type: Option<i32>,
    pub route_color: Option<String>,
}

impl PlotPoint {
    pub fn separator(shape_id: &str) -> Self {
        Self {
            shape_id: shape_id.to_string(),
            ..Default::default()
        }
    }

    pub fn is_separator(&self) -> bool {
        self.shape_pt_lon.is_none() && self.shape_pt_lat.is_none()
    }
}

impl From<&GtfsShape> for PlotPoint {
    fn from(value: &GtfsShape) -> Self {
        Self {
            shape_id: value.shape_id.clone(),
            shape_pt_lon: Some(value.shape_pt_lon),
            shape_pt_lat: Some(value.shape_pt_lat),
            shape_pt_sequence: Some(value.shape_pt_sequence),
            ..Default::default()
        }
    }
}

/// Copies the points grouped by shape, in order of first appearance, and
/// appends one separator after each group.
pub fn insert_separators(shapes: &[GtfsShape]) -> Vec<PlotPoint> {
    let groups = group_by_shape(shapes);
    let mut points: Vec<PlotPoint> = Vec::with_capacity(shapes.len() + groups.len());
    for (shape_id, group) in groups {
        points.extend(group.into_iter().map(PlotPoint::from));
        points.push(PlotPoint::separator(shape_id));
    }
    points
}

/// Inserts the separators and left joins every row, separators included, to
/// the usage of its shape.
pub fn reshape(shapes: &[GtfsShape], usage: &[ShapeUsage]) -> Vec<PlotPoint> {
    debug!("Reshaping shape points for plotting...");
    let now = Instant::now();
    let usage_lookup: HashMap<&str, &ShapeUsage> = usage
        .iter()
        .map(|value| (value.shape_id.as_str(), value))
        .collect();

    let points: Vec<PlotPoint> = insert_separators(shapes)
        .into_iter()
        .map(|point| match usage_lookup.get(point.shape_id.as_str()) {
            Some(usage) => PlotPoint {
                times_taken: Some(usage.times_taken),
                route_id: Some(usage.route_id.clone()),
                route_short_name: usage.route_short_name.clone(),
                route_type: usage.route_type,
                route_color: usage.route_color.clone(),
                ..point
            },
            None => point,
        })
        .collect();
    debug!(
        "Reshaping {} plot rows took {:?}",
        points.len(),
        now.elapsed()
    );
    points
}
