use crate::gtfs::{GtfsCalendar, GtfsCalendarDate, GtfsRoute, GtfsShape, GtfsTrip};

/// Every table of one feed, held in memory for a single run.
#[derive(Default, Debug, Clone)]
pub struct GtfsData {
    pub calendar: Vec<GtfsCalendar>,
    pub calendar_dates: Vec<GtfsCalendarDate>,
    pub trips: Vec<GtfsTrip>,
    pub routes: Vec<GtfsRoute>,
    pub shapes: Vec<GtfsShape>,
}
