#![allow(dead_code)]

use chrono::NaiveDate;
use transit_usage::gtfs::{
    ExceptionType, GtfsCalendar, GtfsCalendarDate, GtfsRoute, GtfsShape, GtfsTrip,
};

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y%m%d").unwrap()
}

/// `days` lists the weekday flags from monday to sunday, e.g. "1111100".
pub fn calendar(service_id: &str, days: &str, start: &str, end: &str) -> GtfsCalendar {
    let flags: Vec<bool> = days.chars().map(|c| c == '1').collect();
    GtfsCalendar {
        service_id: service_id.into(),
        monday: flags[0],
        tuesday: flags[1],
        wednesday: flags[2],
        thursday: flags[3],
        friday: flags[4],
        saturday: flags[5],
        sunday: flags[6],
        start_date: date(start),
        end_date: date(end),
    }
}

pub fn added(service_id: &str, day: &str) -> GtfsCalendarDate {
    GtfsCalendarDate {
        service_id: service_id.into(),
        date: date(day),
        exception_type: ExceptionType::Added,
    }
}

pub fn removed(service_id: &str, day: &str) -> GtfsCalendarDate {
    GtfsCalendarDate {
        service_id: service_id.into(),
        date: date(day),
        exception_type: ExceptionType::Removed,
    }
}

pub fn trip(trip_id: &str, service_id: &str, route_id: &str, shape_id: Option<&str>) -> GtfsTrip {
    GtfsTrip {
        route_id: route_id.into(),
        service_id: service_id.into(),
        trip_id: trip_id.into(),
        shape_id: shape_id.map(|id| id.into()),
    }
}

pub fn route(route_id: &str, short_name: &str, route_type: i32, color: &str) -> GtfsRoute {
    GtfsRoute {
        route_id: route_id.into(),
        route_short_name: Some(short_name.into()),
        route_type,
        route_color: Some(color.into()),
    }
}

pub fn point(shape_id: &str, lat: f64, lon: f64, sequence: u32) -> GtfsShape {
    GtfsShape {
        shape_id: shape_id.into(),
        shape_pt_lat: lat,
        shape_pt_lon: lon,
        shape_pt_sequence: sequence,
    }
}

pub fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}
