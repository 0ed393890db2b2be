use std::path::PathBuf;

use async_trait::async_trait;

use crate::entities::{LedgerEntry, ReportQuery};
use crate::errors::Result;

/// Reference to a produced export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportHandle {
    pub path: PathBuf,
    pub rows: usize,
}

/// The external store/query service the core depends on but does not own.
///
/// `store` is fire-and-confirm: on failure the caller must surface the
/// failure and must not claim the entry was logged. `query` is read-only and
/// returns exactly the entries satisfying the predicate. Consistency of the
/// underlying store is entirely the gateway's responsibility.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    async fn store(&self, entry: LedgerEntry) -> Result<()>;

    async fn query(&self, predicate: &ReportQuery) -> Result<Vec<LedgerEntry>>;

    /// Produces a CSV file of the entries matching the predicate, or
    /// `ClerkError::ExportUnavailable` when no export target is configured.
    async fn export_csv(&self, predicate: &ReportQuery) -> Result<ExportHandle>;
}
