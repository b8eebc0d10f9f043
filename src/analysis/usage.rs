use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    time::Instant,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    analysis::{Error, ServiceDayCounts},
    gtfs::{GtfsRoute, GtfsTrip},
};

/// How often a shape is traveled over the validity window, and the route
/// it belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShapeUsage {
    pub shape_id: String,
    pub times_taken: u64,
    pub route_id: String,
    pub route_short_name: Option<String>,
    pub route_type: Option<i32>,
    pub route_color: Option<String>,
}

/// Fails with every shape whose trips belong to more than one route.
pub fn check_shape_routes(trips: &[GtfsTrip]) -> Result<(), Error> {
    let mut shape_routes: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for trip in trips {
        if let Some(shape_id) = trip.shape_id.as_deref() {
            shape_routes
                .entry(shape_id)
                .or_default()
                .insert(trip.route_id.as_str());
        }
    }

    let conflicting: Vec<String> = shape_routes
        .into_iter()
        .filter(|(_, routes)| routes.len() > 1)
        .map(|(shape_id, _)| shape_id.to_string())
        .collect();
    if conflicting.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidFeedInvariant(conflicting))
    }
}

/// Sums the service days of every trip per shape and attaches the metadata
/// of the route owning the shape. A trip on the same service as another trip
/// still adds the full day count. Trips on unknown services add nothing, and
/// shapes on unknown routes get no route metadata.
pub fn aggregate(
    trips: &[GtfsTrip],
    routes: &[GtfsRoute],
    service_days: &ServiceDayCounts,
) -> Result<Vec<ShapeUsage>, Error> {
    check_shape_routes(trips)?;

    debug!("Aggregating shape usage...");
    let now = Instant::now();
    let mut route_lookup: HashMap<&str, &GtfsRoute> = HashMap::new();
    routes.iter().for_each(|route| {
        route_lookup.entry(route.route_id.as_str()).or_insert(route);
    });

    let mut shapes: BTreeMap<&str, (u64, &str)> = BTreeMap::new();
    let mut unknown_services: BTreeSet<&str> = BTreeSet::new();
    let mut shapeless_trips = 0;
    for trip in trips {
        let Some(shape_id) = trip.shape_id.as_deref() else {
            shapeless_trips += 1;
            continue;
        };
        let (times_taken, _) = shapes
            .entry(shape_id)
            .or_insert((0, trip.route_id.as_str()));
        match service_days.get(trip.service_id.as_str()) {
            Some(days) => *times_taken += u64::from(*days),
            None => {
                unknown_services.insert(trip.service_id.as_str());
            }
        }
    }

    if shapeless_trips > 0 {
        debug!("Skipped {shapeless_trips} trips without a shape");
    }
    if !unknown_services.is_empty() {
        warn!("Trips reference services without a calendar: {unknown_services:?}");
    }

    let usage: Vec<ShapeUsage> = shapes
        .into_iter()
        .map(|(shape_id, (times_taken, route_id))| {
            let route = route_lookup.get(route_id);
            ShapeUsage {
                shape_id: shape_id.to_string(),
                times_taken,
                route_id: route_id.to_string(),
                route_short_name: route.and_then(|route| route.route_short_name.clone()),
                route_type: route.map(|route| route.route_type),
                route_color: route.and_then(|route| route.route_color.clone()),
            }
        })
        .collect();
    debug!(
        "Aggregating {} shapes took {:?}",
        usage.len(),
        now.elapsed()
    );
    Ok(usage)
}
