//! Resolution of raw date mentions to an explicit calendar date.
//!
//! Priority order: explicit date as given; a fully determined relative marker
//! computed from the clock; nothing mentioned maps to `Absent` (the validator
//! applies the only permitted default, today); a month without a day is
//! ambiguous and is never defaulted.

use chrono::{Days, NaiveDate};

use crate::entities::{DateMention, SlotMatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResolvedDate {
    Date(NaiveDate),
    Ambiguous(DateAmbiguity),
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateAmbiguity {
    MissingDay,
    ConflictingMentions,
}

pub(crate) fn resolve(date: &SlotMatch<DateMention>, today: NaiveDate) -> ResolvedDate {
    match date {
        SlotMatch::Absent => ResolvedDate::Absent,
        SlotMatch::Ambiguous => ResolvedDate::Ambiguous(DateAmbiguity::ConflictingMentions),
        SlotMatch::Found(mention) => match mention {
            DateMention::Explicit(date) => ResolvedDate::Date(*date),
            DateMention::DayMonth { day, month } => {
                // Day and month fully determine the date within the active
                // bookkeeping year.
                match NaiveDate::from_ymd_opt(chrono::Datelike::year(&today), *month, *day) {
                    Some(date) => ResolvedDate::Date(date),
                    None => ResolvedDate::Ambiguous(DateAmbiguity::MissingDay),
                }
            }
            DateMention::MonthOnly(_) => ResolvedDate::Ambiguous(DateAmbiguity::MissingDay),
            DateMention::Today => ResolvedDate::Date(today),
            DateMention::Yesterday => match today.checked_sub_days(Days::new(1)) {
                Some(date) => ResolvedDate::Date(date),
                None => ResolvedDate::Date(today),
            },
        },
    }
}
