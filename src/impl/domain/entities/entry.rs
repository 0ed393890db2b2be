use chrono::NaiveDate;
use serde_derive::Deserialize;

/// One of the two managed properties. No other values are permitted; a
/// property name that doesn't resolve to one of these is treated as absent,
/// never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Property {
    Thessaloniki,
    Vourvourou,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Direction {
    Expense,
    Income,
}

/// The unit of record. Immutable once stored; a correction is a new entry,
/// not an in-place mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    /// Always an explicit calendar date, never a relative marker.
    pub occurred_on: NaiveDate,
    pub property: Property,
    pub direction: Direction,
    /// Canonical lexicon label when one matched, otherwise a free-text
    /// fallback. Not required for logging.
    pub category: String,
    /// Positive; currency fixed to EUR.
    pub amount_eur: f64,
    pub note: Option<String>,
}

// --

impl Property {
    pub fn slug(&self) -> &'static str {
        match self {
            Property::Thessaloniki => "thessaloniki",
            Property::Vourvourou => "vourvourou",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Property::Thessaloniki => "Θεσσαλονίκη",
            Property::Vourvourou => "Βουρβουρού",
        }
    }
}

impl Direction {
    pub fn display_name(&self) -> &'static str {
        match self {
            Direction::Expense => "Έξοδο",
            Direction::Income => "Έσοδο",
        }
    }
}
