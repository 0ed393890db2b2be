use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::repositories::ledger_gateway::{ExportHandle, LedgerGateway};
use crate::entities::{LedgerEntry, ReportQuery};
use crate::errors::{ClerkError, Result};

const EXPORT_FILE_NAME: &str = "ledger-export.csv";

/// In-memory ledger gateway. Filtering is exact predicate evaluation; CSV
/// export is only available when an export directory was configured,
/// otherwise `export_csv` reports `ExportUnavailable`.
pub struct MemoryLedgerGateway {
    entries: Mutex<Vec<LedgerEntry>>,
    export_dir: Option<PathBuf>,
}

impl MemoryLedgerGateway {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            export_dir: None,
        }
    }

    pub fn with_export_dir(export_dir: impl AsRef<Path>) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            export_dir: Some(export_dir.as_ref().to_path_buf()),
        }
    }

    fn snapshot(&self, predicate: &ReportQuery) -> Result<Vec<LedgerEntry>> {
        let entries = self.entries.lock().map_err(|e| ClerkError::QueryFailed {
            details: e.to_string(),
        })?;
        Ok(entries
            .iter()
            .filter(|entry| predicate.matches(entry))
            .cloned()
            .collect())
    }
}

impl Default for MemoryLedgerGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerGateway for MemoryLedgerGateway {
    async fn store(&self, entry: LedgerEntry) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|e| ClerkError::StoreFailed {
            details: e.to_string(),
        })?;
        debug!(
            property = entry.property.slug(),
            amount_eur = entry.amount_eur,
            "storing ledger entry"
        );
        entries.push(entry);
        Ok(())
    }

    async fn query(&self, predicate: &ReportQuery) -> Result<Vec<LedgerEntry>> {
        self.snapshot(predicate)
    }

    async fn export_csv(&self, predicate: &ReportQuery) -> Result<ExportHandle> {
        let export_dir = self
            .export_dir
            .as_ref()
            .ok_or(ClerkError::ExportUnavailable)?;
        let matching = self.snapshot(predicate)?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["date", "property", "direction", "category", "amount_eur", "note"])?;
        for entry in &matching {
            writer.write_record([
                entry.occurred_on.format("%Y-%m-%d").to_string(),
                entry.property.slug().to_string(),
                match entry.direction {
                    crate::entities::Direction::Expense => "expense".to_string(),
                    crate::entities::Direction::Income => "income".to_string(),
                },
                entry.category.clone(),
                format!("{:.2}", entry.amount_eur),
                entry.note.clone().unwrap_or_default(),
            ])?;
        }
        let buffer = writer
            .into_inner()
            .map_err(|e| ClerkError::Io(e.into_error()))?;

        let path = export_dir.join(EXPORT_FILE_NAME);
        tokio::fs::write(&path, buffer).await?;
        info!(path = %path.display(), rows = matching.len(), "ledger exported");
        Ok(ExportHandle {
            path,
            rows: matching.len(),
        })
    }
}
