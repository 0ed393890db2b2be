use tracing::debug;

use crate::domain::logic::report_engine;
use crate::domain::repositories::ledger_gateway::LedgerGateway;
use crate::entities::{Report, ReportQuery};
use crate::errors::Result;

/// Queries the gateway and aggregates the result. Totals come solely from
/// the entries the gateway returned; an empty result is a zero report.
pub(crate) struct ReportUsecase<'a, G: LedgerGateway> {
    gateway: &'a G,
}

impl<'a, G: LedgerGateway> ReportUsecase<'a, G> {
    pub(crate) fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub(crate) async fn run(&self, query: &ReportQuery) -> Result<Report> {
        let entries = self.gateway.query(query).await?;
        debug!(matched = entries.len(), "report query answered");
        Ok(report_engine::summarize(entries))
    }
}
