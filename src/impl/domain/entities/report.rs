use chrono::NaiveDate;

use super::entry::{Direction, LedgerEntry, Property};

/// Listing cap for a single report reply. Totals always cover the full
/// matching set; only the listing is capped, with `truncated` set instead of
/// silently dropping entries.
pub const MAX_LISTED: usize = 10;

/// Filter predicate for ledger queries. Produced per report request,
/// discarded after use. Matching is exact; no fuzzy matching at this layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub property: Option<Property>,
    pub direction: Option<Direction>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub total_expense_eur: f64,
    pub total_income_eur: f64,
    /// Full count of matching entries, including any not listed.
    pub matched: usize,
    pub entries: Vec<LedgerEntry>,
    pub truncated: bool,
}

// --

impl ReportQuery {
    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        if let Some(from) = self.from {
            if entry.occurred_on < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if entry.occurred_on > to {
                return false;
            }
        }
        if let Some(property) = self.property {
            if entry.property != property {
                return false;
            }
        }
        if let Some(direction) = self.direction {
            if entry.direction != direction {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &entry.category != category {
                return false;
            }
        }
        true
    }
}
