use crate::domain::repositories::ledger_gateway::ExportHandle;
use crate::entities::LedgerEntry;

use super::utils::format_eur;

/// Renders confirmations for a single turn. Pure presentation; no validation
/// happens here.
pub(crate) struct ReceiptPrinter;

impl ReceiptPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_receipt(&self, entry: &LedgerEntry) -> String {
        let mut out = format!(
            "Καταχωρήθηκε: {} {} για {} ({}, {}).",
            entry.direction.display_name(),
            format_eur(entry.amount_eur),
            entry.category,
            entry.property.display_name(),
            entry.occurred_on.format("%d/%m/%Y"),
        );
        if let Some(note) = &entry.note {
            out.push_str(&format!(" Σημείωση: {}.", note));
        }
        out
    }

    pub(crate) fn print_store_failure(&self, details: &str) -> String {
        format!(
            "Η καταχώρηση ΔΕΝ αποθηκεύτηκε. Το βιβλίο επέστρεψε σφάλμα: {}. Δοκιμάστε ξανά.",
            details
        )
    }

    pub(crate) fn print_export_ok(&self, handle: &ExportHandle) -> String {
        format!(
            "Η εξαγωγή ολοκληρώθηκε: {} εγγραφές στο αρχείο {}.",
            handle.rows,
            handle.path.display()
        )
    }

    pub(crate) fn print_export_unavailable(&self) -> String {
        "Η εξαγωγή σε CSV δεν είναι διαθέσιμη αυτή τη στιγμή.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Direction, Property};
    use chrono::NaiveDate;

    #[test]
    fn receipt_carries_all_five_fields() {
        let entry = LedgerEntry {
            occurred_on: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            property: Property::Thessaloniki,
            direction: Direction::Expense,
            category: "Utilities".to_string(),
            amount_eur: 45.0,
            note: None,
        };
        let receipt = ReceiptPrinter::new().print_receipt(&entry);
        assert!(receipt.contains("Έξοδο"));
        assert!(receipt.contains("45,00 €"));
        assert!(receipt.contains("Utilities"));
        assert!(receipt.contains("Θεσσαλονίκη"));
        assert!(receipt.contains("15/12/2025"));
    }

    #[test]
    fn note_is_appended_when_present() {
        let entry = LedgerEntry {
            occurred_on: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            property: Property::Vourvourou,
            direction: Direction::Expense,
            category: "Repairs".to_string(),
            amount_eur: 80.0,
            note: Some("βρύση".to_string()),
        };
        let receipt = ReceiptPrinter::new().print_receipt(&entry);
        assert!(receipt.contains("Σημείωση: βρύση"));
    }
}
