use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A row of `calendar.txt`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GtfsCalendar {
    pub service_id: String,
    #[serde(deserialize_with = "deserialize_bool", serialize_with = "serialize_bool")]
    pub monday: bool,
    #[serde(deserialize_with = "deserialize_bool", serialize_with = "serialize_bool")]
    pub tuesday: bool,
    #[serde(deserialize_with = "deserialize_bool", serialize_with = "serialize_bool")]
    pub wednesday: bool,
    #[serde(deserialize_with = "deserialize_bool", serialize_with = "serialize_bool")]
    pub thursday: bool,
    #[serde(deserialize_with = "deserialize_bool", serialize_with = "serialize_bool")]
    pub friday: bool,
    #[serde(deserialize_with = "deserialize_bool", serialize_with = "serialize_bool")]
    pub saturday: bool,
    #[serde(deserialize_with = "deserialize_bool", serialize_with = "serialize_bool")]
    pub sunday: bool,
    #[serde(deserialize_with = "deserialize_date", serialize_with = "serialize_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_date", serialize_with = "serialize_date")]
    pub end_date: NaiveDate,
}

impl GtfsCalendar {
    /// Flags in monday to sunday order.
    pub fn weekdays(&self) -> [bool; 7] {
        [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ]
    }

    pub fn active_weekdays(&self) -> u32 {
        self.weekdays().into_iter().filter(|active| *active).count() as u32
    }
}

/// Whether a [GtfsCalendarDate] adds or removes a day of service.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ExceptionType {
    #[serde(rename = "1")]
    Added,
    #[serde(rename = "2")]
    Removed,
}

impl ExceptionType {
    /// Change to the number of operating days caused by one exception.
    pub const fn day_diff(&self) -> i64 {
        match self {
            ExceptionType::Added => 1,
            ExceptionType::Removed => -1,
        }
    }
}

/// A row of `calendar_dates.txt`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GtfsCalendarDate {
    pub service_id: String,
    #[serde(deserialize_with = "deserialize_date", serialize_with = "serialize_date")]
    pub date: NaiveDate,
    pub exception_type: ExceptionType,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GtfsTrip {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    pub shape_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GtfsRoute {
    pub route_id: String,
    pub route_short_name: Option<String>,
    pub route_type: i32,
    /// Hex color without the leading `#`.
    pub route_color: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GtfsShape {
    pub shape_id: String,
    pub shape_pt_lat: f64,
    pub shape_pt_lon: f64,
    pub shape_pt_sequence: u32,
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&s, "%Y%m%d").map_err(serde::de::Error::custom)
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format("%Y%m%d").to_string())
}

fn deserialize_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        n => Err(serde::de::Error::custom(format!("Unknown bool value {n}"))),
    }
}

fn serialize_bool<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}
