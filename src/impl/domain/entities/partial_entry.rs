use chrono::NaiveDate;

use super::entry::{Direction, Property};

/// Outcome of matching a single slot against the utterance.
///
/// `Ambiguous` means the utterance produced more than one distinct candidate
/// for the slot; downstream it gates exactly like `Absent` (the core never
/// arbitrates between candidates on its own).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotMatch<T> {
    Found(T),
    Ambiguous,
    Absent,
}

impl<T> Default for SlotMatch<T> {
    fn default() -> Self {
        SlotMatch::Absent
    }
}

/// Raw date evidence found in the utterance, before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMention {
    Explicit(NaiveDate),
    /// Day and month without a year; the current year completes it.
    DayMonth { day: u32, month: u32 },
    /// Month without a day. Never defaulted; requires clarification.
    MonthOnly(u32),
    Today,
    Yesterday,
}

// Before validation.
// ---

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartialEntry {
    pub property: SlotMatch<Property>,
    pub direction: SlotMatch<Direction>,
    pub category: SlotMatch<String>,
    pub amount_eur: SlotMatch<f64>,
    pub date: SlotMatch<DateMention>,
    /// Free text the extractor did not consume for any slot.
    pub note: Option<String>,
}

// --

impl<T> SlotMatch<T> {
    pub fn found(&self) -> Option<&T> {
        match self {
            SlotMatch::Found(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SlotMatch::Found(_))
    }

    /// Prefers `self` (the later turn) when it carries a definite match,
    /// otherwise falls back to `earlier`.
    fn merged_over(self, earlier: Self) -> Self {
        match (self, earlier) {
            (SlotMatch::Found(v), _) => SlotMatch::Found(v),
            (_, SlotMatch::Found(v)) => SlotMatch::Found(v),
            (SlotMatch::Ambiguous, _) | (_, SlotMatch::Ambiguous) => SlotMatch::Ambiguous,
            _ => SlotMatch::Absent,
        }
    }
}

impl PartialEntry {
    /// Reconstructs the entry under clarification from the full turn history.
    /// Later turns complete slots earlier turns left open; the core itself
    /// holds no session state between turns.
    pub fn merge(turns: impl IntoIterator<Item = PartialEntry>) -> PartialEntry {
        turns
            .into_iter()
            .fold(PartialEntry::default(), |acc, turn| PartialEntry {
                property: turn.property.merged_over(acc.property),
                direction: turn.direction.merged_over(acc.direction),
                category: turn.category.merged_over(acc.category),
                amount_eur: turn.amount_eur.merged_over(acc.amount_eur),
                date: turn.date.merged_over(acc.date),
                note: match (acc.note, turn.note) {
                    (Some(a), Some(b)) => Some(format!("{} {}", a, b)),
                    (a, b) => a.or(b),
                },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_turn_completes_missing_slots() {
        let first = PartialEntry {
            direction: SlotMatch::Found(Direction::Income),
            category: SlotMatch::Found("Airbnb".to_string()),
            ..Default::default()
        };
        let second = PartialEntry {
            amount_eur: SlotMatch::Found(320.0),
            ..Default::default()
        };
        let merged = PartialEntry::merge([first, second]);
        assert_eq!(merged.direction, SlotMatch::Found(Direction::Income));
        assert_eq!(merged.amount_eur, SlotMatch::Found(320.0));
        assert_eq!(merged.category, SlotMatch::Found("Airbnb".to_string()));
    }

    #[test]
    fn later_found_overrides_earlier_ambiguity() {
        let first = PartialEntry {
            property: SlotMatch::Ambiguous,
            ..Default::default()
        };
        let second = PartialEntry {
            property: SlotMatch::Found(Property::Vourvourou),
            ..Default::default()
        };
        let merged = PartialEntry::merge([first, second]);
        assert_eq!(merged.property, SlotMatch::Found(Property::Vourvourou));
    }
}
