use std::{cmp::Ordering, collections::HashMap, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::analysis::{ShapeLength, ShapeUsage};

pub const DEFAULT_LONGEST_ROUTES: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LongestRoute {
    pub route_short_name: Option<String>,
    pub times_taken: u64,
    /// Kilometers, rounded to one decimal.
    pub distance: f64,
}

/// The `limit` longest shapes that have both a usage and a length row.
pub fn longest_routes(
    usage: &[ShapeUsage],
    lengths: &[ShapeLength],
    limit: usize,
) -> Vec<LongestRoute> {
    let length_lookup: HashMap<&str, f64> = lengths
        .iter()
        .map(|length| (length.shape_id.as_str(), length.distance))
        .collect();

    let mut routes: Vec<LongestRoute> = usage
        .iter()
        .filter_map(|shape| {
            length_lookup
                .get(shape.shape_id.as_str())
                .map(|distance| LongestRoute {
                    route_short_name: shape.route_short_name.clone(),
                    times_taken: shape.times_taken,
                    distance: *distance,
                })
        })
        .collect();

    routes.sort_by(|a, b| b.distance.partial_cmp(&a.distance).unwrap_or(Ordering::Equal));
    routes.truncate(limit);
    routes.iter_mut().for_each(|route| {
        route.distance = (route.distance * 10.0).round() / 10.0;
    });
    routes
}

/// Vehicle category of the GTFS basic route types.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VehicleType {
    Tram,
    Subway,
    Rail,
    Bus,
    Ferry,
    CableTram,
    AerialLift,
    Funicular,
    Trolleybus,
    Monorail,
    Other,
}

impl From<i32> for VehicleType {
    fn from(route_type: i32) -> Self {
        match route_type {
            0 => Self::Tram,
            1 => Self::Subway,
            2 => Self::Rail,
            3 => Self::Bus,
            4 => Self::Ferry,
            5 => Self::CableTram,
            6 => Self::AerialLift,
            7 => Self::Funicular,
            11 => Self::Trolleybus,
            12 => Self::Monorail,
            _ => Self::Other,
        }
    }
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VehicleType::Tram => "Tram",
            VehicleType::Subway => "Subway",
            VehicleType::Rail => "Rail",
            VehicleType::Bus => "Bus",
            VehicleType::Ferry => "Ferry",
            VehicleType::CableTram => "Cable tram",
            VehicleType::AerialLift => "Aerial lift",
            VehicleType::Funicular => "Funicular",
            VehicleType::Trolleybus => "Trolleybus",
            VehicleType::Monorail => "Monorail",
            VehicleType::Other => "Other",
        };
        f.write_str(name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VehicleUsage {
    pub vehicle_type: VehicleType,
    pub times_taken: u64,
}

/// Total `times_taken` per vehicle category, busiest first. Shapes whose
/// route is unknown are left out.
pub fn vehicle_distribution(usage: &[ShapeUsage]) -> Vec<VehicleUsage> {
    let mut totals: HashMap<VehicleType, u64> = HashMap::new();
    usage
        .iter()
        .filter_map(|shape| shape.route_type.map(|t| (VehicleType::from(t), shape.times_taken)))
        .for_each(|(vehicle_type, times_taken)| {
            *totals.entry(vehicle_type).or_default() += times_taken;
        });

    let mut distribution: Vec<VehicleUsage> = totals
        .into_iter()
        .map(|(vehicle_type, times_taken)| VehicleUsage {
            vehicle_type,
            times_taken,
        })
        .collect();
    distribution.sort_by(|a, b| {
        b.times_taken
            .cmp(&a.times_taken)
            .then(a.vehicle_type.cmp(&b.vehicle_type))
    });
    distribution
}
