//! Aggregation over a queried slice of the ledger.
//!
//! Totals are grouped by direction and always cover the full matching set;
//! the listing is capped at `MAX_LISTED` with an explicit truncation flag.
//! Zero matches produce a zero report, not an error.

use crate::entities::{Direction, LedgerEntry, Report, MAX_LISTED};

pub(crate) fn summarize(mut entries: Vec<LedgerEntry>) -> Report {
    entries.sort_by_key(|e| e.occurred_on);

    let mut total_expense_eur = 0.0;
    let mut total_income_eur = 0.0;
    for entry in &entries {
        match entry.direction {
            Direction::Expense => total_expense_eur += entry.amount_eur,
            Direction::Income => total_income_eur += entry.amount_eur,
        }
    }

    let matched = entries.len();
    let truncated = matched > MAX_LISTED;
    entries.truncate(MAX_LISTED);

    Report {
        total_expense_eur,
        total_income_eur,
        matched,
        entries,
        truncated,
    }
}
