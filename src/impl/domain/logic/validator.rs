//! Clarification gate: approves a partial entry or asks exactly one question.
//!
//! Implemented as an ordered check list returning the first failure, so a
//! turn can never produce two questions. Amount is checked before property
//! and direction, and all required fields before date ambiguity. Nothing is
//! handed to the gateway on the clarification path.

use chrono::NaiveDate;

use crate::entities::{ClarificationRequest, Gap, LedgerEntry, PartialEntry, SlotMatch};

use super::date_resolver::{self, DateAmbiguity, ResolvedDate};

/// Category recorded when neither the lexicon nor the leftover text yields a
/// label.
const FALLBACK_CATEGORY: &str = "Λοιπά";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ValidationOutcome {
    Approved(LedgerEntry),
    ClarificationNeeded(ClarificationRequest),
}

pub(crate) fn evaluate(partial: PartialEntry, today: NaiveDate) -> ValidationOutcome {
    let ask = |gap: Gap, partial: PartialEntry| {
        ValidationOutcome::ClarificationNeeded(ClarificationRequest::new(gap, partial))
    };

    let amount_eur = match partial.amount_eur.found() {
        Some(v) => *v,
        None => return ask(Gap::Amount, partial),
    };
    let property = match partial.property.found() {
        Some(v) => *v,
        None => return ask(Gap::Property, partial),
    };
    let direction = match partial.direction.found() {
        Some(v) => *v,
        None => return ask(Gap::Direction, partial),
    };
    let occurred_on = match date_resolver::resolve(&partial.date, today) {
        ResolvedDate::Date(date) => date,
        // The only permitted default: no date mentioned at all.
        ResolvedDate::Absent => today,
        ResolvedDate::Ambiguous(DateAmbiguity::MissingDay) => {
            return ask(Gap::DayOfMonth, partial)
        }
        ResolvedDate::Ambiguous(DateAmbiguity::ConflictingMentions) => {
            return ask(Gap::ConflictingDates, partial)
        }
    };

    // Category is not required; a missing or ambiguous match degrades the
    // record to a free-text label instead of blocking it.
    let category = match &partial.category {
        SlotMatch::Found(label) => label.clone(),
        _ => partial
            .note
            .clone()
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
    };

    ValidationOutcome::Approved(LedgerEntry {
        occurred_on,
        property,
        direction,
        category,
        amount_eur,
        note: partial.note,
    })
}
