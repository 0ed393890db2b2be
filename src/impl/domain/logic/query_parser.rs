//! Report-request detection and predicate building.
//!
//! A report request bypasses entry extraction entirely. The predicate is
//! built from the same lexicon the extractor uses (property, direction verbs,
//! category) plus a month mention, which scopes the query to the whole month
//! of the current year. A month without a day is perfectly fine here; it is a
//! range, not an entry date.

use chrono::{Datelike, Days, NaiveDate};

use crate::entities::{DateMention, Lexicon, ReportQuery, SlotMatch};

use super::field_extractor;
use super::normalize::{find_word, fold};

const REPORT_MARKERS: &[&str] = &[
    "ποσα",
    "ποσο",
    "συνολο",
    "συνολικα",
    "αναφορα",
    "δειξε",
    "λιστα",
    "ισοζυγιο",
    "κινησεισ",
];

/// Returns the query for a report request, or `None` when the utterance is
/// not one (and should go through entry extraction instead).
pub(crate) fn parse(utterance: &str, lexicon: &Lexicon, today: NaiveDate) -> Option<ReportQuery> {
    let folded = fold(utterance);
    if !REPORT_MARKERS
        .iter()
        .any(|marker| !find_word(&folded, marker).is_empty())
    {
        return None;
    }

    // Reuse the extractor: the same slots describe a predicate here.
    let partial = field_extractor::extract(utterance, lexicon);

    let (from, to) = match partial.date {
        SlotMatch::Found(DateMention::MonthOnly(month)) => month_range(today.year(), month),
        SlotMatch::Found(DateMention::Explicit(date)) => (Some(date), Some(date)),
        SlotMatch::Found(DateMention::DayMonth { day, month }) => {
            let date = NaiveDate::from_ymd_opt(today.year(), month, day);
            (date, date)
        }
        SlotMatch::Found(DateMention::Today) => (Some(today), Some(today)),
        SlotMatch::Found(DateMention::Yesterday) => {
            let date = today.checked_sub_days(Days::new(1));
            (date, date)
        }
        _ => (None, None),
    };

    Some(ReportQuery {
        from,
        to,
        property: partial.property.found().copied(),
        direction: partial.direction.found().copied(),
        category: partial.category.found().cloned(),
    })
}

fn month_range(year: i32, month: u32) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = next_first.and_then(|d| d.checked_sub_days(Days::new(1)));
    (first, last)
}
