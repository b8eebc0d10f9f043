use std::{collections::BTreeMap, time::Instant};

use tracing::{debug, warn};

use crate::{
    analysis::Error,
    gtfs::{GtfsCalendar, GtfsCalendarDate},
};

/// Active operating days per `service_id`.
pub type ServiceDayCounts = BTreeMap<String, u32>;

/// Number of whole weeks the timetable is valid for, or `None` for a feed
/// without a calendar table. Every service must share the same window.
/// Empty and reversed windows are rejected like any other window that is
/// not a whole number of weeks.
pub fn validity_weeks(calendar: &[GtfsCalendar]) -> Result<Option<i64>, Error> {
    let Some(first) = calendar.first() else {
        return Ok(None);
    };

    let non_uniform = calendar
        .iter()
        .any(|service| service.start_date != first.start_date || service.end_date != first.end_date);
    if non_uniform {
        return Err(Error::UnsupportedFeedShape(
            "non-uniform timetable validities are not handled".into(),
        ));
    }

    let validity_days = (first.end_date - first.start_date).num_days() + 1;
    if validity_days <= 0 || validity_days % 7 != 0 {
        return Err(Error::UnsupportedFeedShape(format!(
            "validity window {} to {} spans {validity_days} days, not a whole number of weeks",
            first.start_date, first.end_date
        )));
    }

    Ok(Some(validity_days / 7))
}

/// Counts the days each service runs on across the validity window: the
/// active weekdays times the number of weeks, plus one for every added date
/// and minus one for every removed date.
pub fn count_days(
    calendar: &[GtfsCalendar],
    exceptions: &[GtfsCalendarDate],
) -> Result<ServiceDayCounts, Error> {
    debug!("Counting service days...");
    let now = Instant::now();
    let weeks = validity_weeks(calendar)?.unwrap_or(0);

    let mut days: BTreeMap<&str, i64> = BTreeMap::new();
    for service in calendar {
        let regular_days = i64::from(service.active_weekdays()) * weeks;
        if days.contains_key(service.service_id.as_str()) {
            warn!("Duplicate calendar entry for {}", service.service_id);
        }
        *days.entry(service.service_id.as_str()).or_default() += regular_days;
    }

    for exception in exceptions {
        *days.entry(exception.service_id.as_str()).or_default() +=
            exception.exception_type.day_diff();
    }

    let negative: Vec<String> = days
        .iter()
        .filter(|(_, count)| **count < 0)
        .map(|(service_id, _)| service_id.to_string())
        .collect();
    if !negative.is_empty() {
        return Err(Error::InvalidCalendarData(negative));
    }

    let counts: ServiceDayCounts = days
        .into_iter()
        .map(|(service_id, count)| (service_id.to_string(), count as u32))
        .collect();
    debug!(
        "Counting days of {} services took {:?}",
        counts.len(),
        now.elapsed()
    );
    Ok(counts)
}
