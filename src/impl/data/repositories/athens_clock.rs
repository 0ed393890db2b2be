use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};

use crate::domain::repositories::clock::Clock;

/// Wall-clock date in Europe/Athens (EET/EEST). The EU daylight-saving rule
/// is applied directly: UTC+3 from 01:00 UTC on the last Sunday of March
/// until 01:00 UTC on the last Sunday of October, UTC+2 otherwise.
pub struct AthensClock;

impl AthensClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AthensClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for AthensClock {
    fn today(&self) -> NaiveDate {
        athens_date(Utc::now())
    }
}

pub(crate) fn athens_date(utc: DateTime<Utc>) -> NaiveDate {
    let year = utc.year();
    let dst_start = transition_instant(year, 3);
    let dst_end = transition_instant(year, 10);
    let offset_hours = if utc >= dst_start && utc < dst_end { 3 } else { 2 };
    (utc + Duration::hours(offset_hours)).date_naive()
}

fn transition_instant(year: i32, month: u32) -> DateTime<Utc> {
    let sunday = last_sunday(year, month);
    sunday
        .and_hms_opt(1, 0, 0)
        .expect("01:00 is a valid time")
        .and_utc()
}

fn last_sunday(year: i32, month: u32) -> NaiveDate {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("first of month is always valid");
    let last = first_of_next - Duration::days(1);
    let back = last.weekday().num_days_from_sunday() as u64;
    last.checked_sub_days(Days::new(back))
        .expect("same month subtraction cannot underflow")
}
