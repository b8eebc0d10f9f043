/// File names of the feed tables, relative to the feed directory or the
/// root of the zip archive.
#[derive(Debug, Clone)]
pub struct Config {
    pub calendar_file_name: String,
    pub calendar_dates_file_name: String,
    pub trips_file_name: String,
    pub routes_file_name: String,
    pub shapes_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calendar_file_name: "calendar.txt".into(),
            calendar_dates_file_name: "calendar_dates.txt".into(),
            trips_file_name: "trips.txt".into(),
            routes_file_name: "routes.txt".into(),
            shapes_file_name: "shapes.txt".into(),
        }
    }
}
