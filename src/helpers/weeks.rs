use chrono::{Days, NaiveDate, Weekday};
use tracing::info;

use crate::error::{HarvestError, Result};

pub const WORKDAYS_PER_WEEK: u32 = 5;

/// Monday of ISO week `week` in ISO year `year`.
pub fn week_start(year: i32, week: u32) -> Result<NaiveDate> {
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .ok_or(HarvestError::InvalidWeek { year, week })
}

/// Monday through Friday of the given ISO week.
pub fn workdays(year: i32, week: u32) -> Result<[NaiveDate; WORKDAYS_PER_WEEK as usize]> {
    let monday = week_start(year, week)?;
    info!("Week {} of {} starts on {}", week, year, monday);

    let mut days = [monday; WORKDAYS_PER_WEEK as usize];
    for (offset, day) in days.iter_mut().enumerate() {
        *day = monday
            .checked_add_days(Days::new(offset as u64))
            .ok_or(HarvestError::InvalidWeek { year, week })?;
    }
    Ok(days)
}

/// Round to two decimal places, ties to even.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round_ties_even() / 100.0
}

/// The share of `weekly_hours` booked on each workday.
pub fn daily_hours(weekly_hours: u32) -> f64 {
    round_hours(f64::from(weekly_hours) / f64::from(WORKDAYS_PER_WEEK))
}
