use crate::entities::{Report, ReportQuery};

use super::utils::format_eur;

/// Renders a report into a short Greek summary: per-direction totals, a
/// capped listing, and an explicit truncation line when the listing does not
/// cover every match.
pub(crate) struct ReportPrinter;

impl ReportPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_report(&self, query: &ReportQuery, report: &Report) -> String {
        let mut out = String::new();

        out.push_str(&self.heading(query));
        out.push('\n');

        if report.matched == 0 {
            out.push_str("Δεν βρέθηκαν κινήσεις για αυτά τα κριτήρια.\n");
        }
        out.push_str(&format!("Έξοδα: {}\n", format_eur(report.total_expense_eur)));
        out.push_str(&format!("Έσοδα: {}\n", format_eur(report.total_income_eur)));

        for entry in &report.entries {
            out.push_str(&format!(
                "• {} {} {} {} ({})\n",
                entry.occurred_on.format("%d/%m/%Y"),
                entry.direction.display_name(),
                format_eur(entry.amount_eur),
                entry.category,
                entry.property.display_name(),
            ));
            if let Some(note) = &entry.note {
                for line in textwrap::wrap(note, 60) {
                    out.push_str(&format!("  {}\n", line));
                }
            }
        }

        if report.truncated {
            out.push_str(&format!(
                "… και {} ακόμη κινήσεις που δεν εμφανίζονται εδώ.\n",
                report.matched - report.entries.len()
            ));
        }

        out
    }

    fn heading(&self, query: &ReportQuery) -> String {
        let mut parts = vec!["Σύνοψη κινήσεων".to_string()];
        if let Some(property) = query.property {
            parts.push(property.display_name().to_string());
        }
        if let Some(category) = &query.category {
            parts.push(category.clone());
        }
        if let (Some(from), Some(to)) = (query.from, query.to) {
            parts.push(format!(
                "{} - {}",
                from.format("%d/%m/%Y"),
                to.format("%d/%m/%Y")
            ));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Direction, LedgerEntry, Property};
    use chrono::NaiveDate;

    fn report(entries: Vec<LedgerEntry>, matched: usize, truncated: bool) -> Report {
        let total_expense_eur = entries
            .iter()
            .filter(|e| e.direction == Direction::Expense)
            .map(|e| e.amount_eur)
            .sum();
        Report {
            total_expense_eur,
            total_income_eur: 0.0,
            matched,
            entries,
            truncated,
        }
    }

    fn entry(day: u32) -> LedgerEntry {
        LedgerEntry {
            occurred_on: NaiveDate::from_ymd_opt(2025, 12, day).unwrap(),
            property: Property::Vourvourou,
            direction: Direction::Expense,
            category: "Utilities".to_string(),
            amount_eur: 30.0,
            note: None,
        }
    }

    #[test]
    fn empty_report_states_it_plainly() {
        let text = ReportPrinter::new().print_report(&ReportQuery::default(), &report(vec![], 0, false));
        assert!(text.contains("Δεν βρέθηκαν κινήσεις"));
        assert!(text.contains("Έξοδα: 0,00 €"));
        assert!(text.contains("Έσοδα: 0,00 €"));
    }

    #[test]
    fn truncation_is_announced_not_silent() {
        let text = ReportPrinter::new().print_report(
            &ReportQuery::default(),
            &report(vec![entry(3)], 12, true),
        );
        assert!(text.contains("11 ακόμη"));
    }

    #[test]
    fn listing_shows_each_match() {
        let text = ReportPrinter::new().print_report(
            &ReportQuery {
                property: Some(Property::Vourvourou),
                ..Default::default()
            },
            &report(vec![entry(3), entry(5)], 2, false),
        );
        assert!(text.contains("03/12/2025"));
        assert!(text.contains("05/12/2025"));
        assert!(text.contains("Βουρβουρού"));
    }
}
