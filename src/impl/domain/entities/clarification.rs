use super::partial_entry::PartialEntry;

/// The single item the clarification question targets. Required fields come
/// before date ambiguity; the ordering here is the ordering the validator
/// checks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gap {
    Amount,
    Property,
    Direction,
    DayOfMonth,
    ConflictingDates,
}

/// Transient value: one question plus the partial entry it pertains to.
/// Created by the validator, consumed when the user's follow-up is merged
/// into a fresh extraction pass. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ClarificationRequest {
    pub gap: Gap,
    pub question: String,
    pub partial: PartialEntry,
}

// --

impl Gap {
    pub fn question(&self) -> &'static str {
        match self {
            Gap::Amount => "Πόσο ήταν το ποσό σε ευρώ;",
            Gap::Property => "Για ποιο ακίνητο πρόκειται, τη Θεσσαλονίκη ή τη Βουρβουρού;",
            Gap::Direction => "Πρόκειται για έξοδο ή για είσπραξη;",
            Gap::DayOfMonth => "Ποια ημέρα του μήνα ακριβώς;",
            Gap::ConflictingDates => {
                "Βλέπω περισσότερες από μία ημερομηνίες. Ποια από τις δύο ισχύει;"
            }
        }
    }
}

impl ClarificationRequest {
    pub(crate) fn new(gap: Gap, partial: PartialEntry) -> Self {
        Self {
            gap,
            question: gap.question().to_string(),
            partial,
        }
    }
}
