use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::logic::{field_extractor, validator};
use crate::domain::repositories::ledger_gateway::LedgerGateway;
use crate::entities::{ClarificationRequest, LedgerEntry, Lexicon, PartialEntry};
use crate::errors::Result;

/// Single-turn logging pipeline: extract over the turn history, merge,
/// validate, and either store the approved entry or return the one
/// clarification question. Nothing reaches the gateway before approval.
pub(crate) struct LogEntryUsecase<'a, G: LedgerGateway> {
    lexicon: &'a Lexicon,
    gateway: &'a G,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LogOutcome {
    Stored(LedgerEntry),
    NeedsClarification(ClarificationRequest),
}

impl<'a, G: LedgerGateway> LogEntryUsecase<'a, G> {
    pub(crate) fn new(lexicon: &'a Lexicon, gateway: &'a G) -> Self {
        Self { lexicon, gateway }
    }

    pub(crate) async fn run(&self, turns: &[&str], today: NaiveDate) -> Result<LogOutcome> {
        let merged = PartialEntry::merge(
            turns
                .iter()
                .map(|turn| field_extractor::extract(turn, self.lexicon)),
        );
        debug!(?merged, "merged extraction over turn history");

        match validator::evaluate(merged, today) {
            validator::ValidationOutcome::Approved(entry) => {
                self.gateway.store(entry.clone()).await?;
                info!(
                    property = entry.property.slug(),
                    amount_eur = entry.amount_eur,
                    date = %entry.occurred_on,
                    "ledger entry stored"
                );
                Ok(LogOutcome::Stored(entry))
            }
            validator::ValidationOutcome::ClarificationNeeded(request) => {
                debug!(gap = ?request.gap, "clarification needed, nothing stored");
                Ok(LogOutcome::NeedsClarification(request))
            }
        }
    }
}
