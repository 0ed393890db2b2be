use tracing::warn;

use crate::data::datasources::lexicon_ron_datasource::{
    LexiconDatasource as _, LexiconRonDatasourceImpl,
};
use crate::domain::logic::normalize::{find_word, fold};
use crate::domain::logic::query_parser;
use crate::domain::repositories::clock::Clock;
use crate::domain::repositories::ledger_gateway::{ExportHandle, LedgerGateway};
use crate::domain::usecases::log_entry_usecase::{LogEntryUsecase, LogOutcome};
use crate::domain::usecases::report_usecase::ReportUsecase;
use crate::entities::{ClarificationRequest, LedgerEntry, Lexicon, Report, ReportQuery};
use crate::errors::{ClerkError, Result};
use crate::ext::standard_lexicon::STANDARD_LEXICON;
use crate::presentation::receipt_fmt::ReceiptPrinter;
use crate::presentation::report_fmt::ReportPrinter;

const EXPORT_MARKERS: &[&str] = &["export", "csv", "εξαγωγη"];

/// What a processed turn produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Logged(LedgerEntry),
    Clarification(ClarificationRequest),
    Reported(Report),
    Exported(ExportHandle),
    ExportUnavailable,
    StoreFailed { details: String },
}

/// Outcome plus the Greek reply text for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReply {
    pub outcome: TurnOutcome,
    pub text: String,
}

/// The bookkeeping core, wired end to end: lexicon-driven extraction, date
/// resolution, the clarification gate, the ledger gateway, and the report
/// engine. One utterance is processed to completion per call; the core holds
/// no state between turns beyond the read-only lexicon.
pub struct FinanceClerk<G: LedgerGateway, C: Clock> {
    lexicon: Lexicon,
    gateway: G,
    clock: C,
    receipt_printer: ReceiptPrinter,
    report_printer: ReportPrinter,
}

impl<G: LedgerGateway, C: Clock> FinanceClerk<G, C> {
    /// Uses the built-in Greek lexicon for the two managed properties.
    pub fn new(gateway: G, clock: C) -> Self {
        Self::with_lexicon(STANDARD_LEXICON.clone(), gateway, clock)
    }

    pub fn with_lexicon(lexicon: Lexicon, gateway: G, clock: C) -> Self {
        Self {
            lexicon,
            gateway,
            clock,
            receipt_printer: ReceiptPrinter::new(),
            report_printer: ReportPrinter::new(),
        }
    }

    /// Loads the lexicon from a RON file instead of the built-in one.
    pub fn with_lexicon_file<P>(path: P, gateway: G, clock: C) -> Result<Self>
    where
        P: AsRef<std::path::Path>,
    {
        let lexicon = LexiconRonDatasourceImpl::new().from_file(path)?;
        Ok(Self::with_lexicon(lexicon, gateway, clock))
    }

    /// Processes one conversational turn. `turns` is the turn history the
    /// platform supplies, oldest first; the last element is the current
    /// utterance, earlier ones let a clarification follow-up complete the
    /// entry it pertains to.
    pub async fn handle_turn(&self, turns: &[&str]) -> Result<TurnReply> {
        let today = self.clock.today();
        let current = turns.last().copied().unwrap_or("");
        let folded = fold(current);

        if EXPORT_MARKERS
            .iter()
            .any(|marker| !find_word(&folded, marker).is_empty())
        {
            return self.export(current, today).await;
        }

        if let Some(query) = query_parser::parse(current, &self.lexicon, today) {
            let report = ReportUsecase::new(&self.gateway).run(&query).await?;
            let text = self.report_printer.print_report(&query, &report);
            return Ok(TurnReply {
                outcome: TurnOutcome::Reported(report),
                text,
            });
        }

        match LogEntryUsecase::new(&self.lexicon, &self.gateway)
            .run(turns, today)
            .await
        {
            Ok(LogOutcome::Stored(entry)) => {
                let text = self.receipt_printer.print_receipt(&entry);
                Ok(TurnReply {
                    outcome: TurnOutcome::Logged(entry),
                    text,
                })
            }
            Ok(LogOutcome::NeedsClarification(request)) => {
                let text = request.question.clone();
                Ok(TurnReply {
                    outcome: TurnOutcome::Clarification(request),
                    text,
                })
            }
            // A store failure is surfaced as an explicit statement; the core
            // never claims the entry was logged.
            Err(ClerkError::StoreFailed { details }) => {
                warn!(details = %details, "gateway rejected the entry");
                Ok(TurnReply {
                    text: self.receipt_printer.print_store_failure(&details),
                    outcome: TurnOutcome::StoreFailed { details },
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Runs a report for an already-built predicate, bypassing parsing.
    pub async fn run_report(&self, query: &ReportQuery) -> Result<Report> {
        ReportUsecase::new(&self.gateway).run(query).await
    }

    async fn export(&self, utterance: &str, today: chrono::NaiveDate) -> Result<TurnReply> {
        let query =
            query_parser::parse(utterance, &self.lexicon, today).unwrap_or_default();
        match self.gateway.export_csv(&query).await {
            Ok(handle) => Ok(TurnReply {
                text: self.receipt_printer.print_export_ok(&handle),
                outcome: TurnOutcome::Exported(handle),
            }),
            Err(ClerkError::ExportUnavailable) => {
                warn!("export requested but unavailable");
                Ok(TurnReply {
                    outcome: TurnOutcome::ExportUnavailable,
                    text: self.receipt_printer.print_export_unavailable(),
                })
            }
            Err(other) => Err(other),
        }
    }
}
