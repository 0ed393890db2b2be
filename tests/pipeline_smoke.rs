//! End-to-end turns through the clerk: extraction, the clarification gate,
//! the ledger gateway, and reporting.

use async_trait::async_trait;
use chrono::NaiveDate;

use oikonomos::entities::{Direction, Gap, LedgerEntry, Property, ReportQuery};
use oikonomos::errors::{ClerkError, Result};
use oikonomos::gateway::{Clock, ExportHandle, LedgerGateway, MemoryLedgerGateway};
use oikonomos::util::{FinanceClerk, TurnOutcome};

struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

fn december() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 12, 15).unwrap())
}

fn clerk(gateway: MemoryLedgerGateway) -> FinanceClerk<MemoryLedgerGateway, FixedClock> {
    FinanceClerk::new(gateway, december())
}

#[tokio::test]
async fn full_statement_is_logged_with_receipt() {
    let clerk = clerk(MemoryLedgerGateway::new());
    let reply = clerk
        .handle_turn(&["Πλήρωσα 45€ ρεύμα στη Θεσσαλονίκη σήμερα"])
        .await
        .unwrap();

    let entry = match reply.outcome {
        TurnOutcome::Logged(entry) => entry,
        other => panic!("expected a logged entry, got {:?}", other),
    };
    assert_eq!(entry.property, Property::Thessaloniki);
    assert_eq!(entry.direction, Direction::Expense);
    assert_eq!(entry.category, "Utilities");
    assert_eq!(entry.amount_eur, 45.0);
    assert_eq!(entry.occurred_on, NaiveDate::from_ymd_opt(2025, 12, 15).unwrap());

    // Receipt confirms all five fields.
    assert!(reply.text.contains("45,00 €"));
    assert!(reply.text.contains("Utilities"));
    assert!(reply.text.contains("Θεσσαλονίκη"));
    assert!(reply.text.contains("Έξοδο"));
    assert!(reply.text.contains("15/12/2025"));

    let stored = clerk.run_report(&ReportQuery::default()).await.unwrap();
    assert_eq!(stored.matched, 1);
}

#[tokio::test]
async fn missing_amount_asks_exactly_one_question_and_stores_nothing() {
    let clerk = clerk(MemoryLedgerGateway::new());
    let reply = clerk.handle_turn(&["Εισέπραξα από Airbnb"]).await.unwrap();

    match reply.outcome {
        TurnOutcome::Clarification(request) => assert_eq!(request.gap, Gap::Amount),
        other => panic!("expected a clarification, got {:?}", other),
    }
    // One question, and the ledger stays empty.
    assert_eq!(reply.text, Gap::Amount.question());
    let stored = clerk.run_report(&ReportQuery::default()).await.unwrap();
    assert_eq!(stored.matched, 0);
}

#[tokio::test]
async fn no_date_mention_defaults_to_today_in_athens() {
    let clerk = clerk(MemoryLedgerGateway::new());
    let reply = clerk
        .handle_turn(&["Πλήρωσα 30€ νερό στη Βουρβουρού"])
        .await
        .unwrap();
    match reply.outcome {
        TurnOutcome::Logged(entry) => {
            assert_eq!(entry.occurred_on, NaiveDate::from_ymd_opt(2025, 12, 15).unwrap())
        }
        other => panic!("expected a logged entry, got {:?}", other),
    }
}

#[tokio::test]
async fn month_without_day_is_clarified_not_guessed() {
    let clerk = clerk(MemoryLedgerGateway::new());
    let reply = clerk
        .handle_turn(&["Πλήρωσα 30€ νερό στη Βουρβουρού του Δεκέμβρη"])
        .await
        .unwrap();
    match reply.outcome {
        TurnOutcome::Clarification(request) => assert_eq!(request.gap, Gap::DayOfMonth),
        other => panic!("expected a clarification, got {:?}", other),
    }
    let stored = clerk.run_report(&ReportQuery::default()).await.unwrap();
    assert_eq!(stored.matched, 0);
}

#[tokio::test]
async fn clarification_follow_up_completes_the_entry() {
    let clerk = clerk(MemoryLedgerGateway::new());

    let first = clerk
        .handle_turn(&["Εισέπραξα από Airbnb στη Βουρβουρού"])
        .await
        .unwrap();
    assert!(matches!(first.outcome, TurnOutcome::Clarification(_)));

    let second = clerk
        .handle_turn(&["Εισέπραξα από Airbnb στη Βουρβουρού", "320 ευρώ"])
        .await
        .unwrap();
    match second.outcome {
        TurnOutcome::Logged(entry) => {
            assert_eq!(entry.direction, Direction::Income);
            assert_eq!(entry.property, Property::Vourvourou);
            assert_eq!(entry.category, "Airbnb");
            assert_eq!(entry.amount_eur, 320.0);
        }
        other => panic!("expected a logged entry, got {:?}", other),
    }
}

#[tokio::test]
async fn report_totals_come_only_from_matching_entries() {
    let gateway = MemoryLedgerGateway::new();
    seed(&gateway).await;
    let clerk = clerk(gateway);

    let reply = clerk
        .handle_turn(&["Πόσα ξόδεψα στη Βουρβουρού τον Δεκέμβριο;"])
        .await
        .unwrap();
    let report = match reply.outcome {
        TurnOutcome::Reported(report) => report,
        other => panic!("expected a report, got {:?}", other),
    };
    // Only the two December Vourvourou expenses; the Thessaloniki entry and
    // the November one are out.
    assert_eq!(report.matched, 2);
    assert_eq!(report.total_expense_eur, 75.0);
    assert_eq!(report.total_income_eur, 0.0);
    assert!(reply.text.contains("75,00 €"));
}

#[tokio::test]
async fn empty_report_is_zero_not_an_error() {
    let clerk = clerk(MemoryLedgerGateway::new());
    let report = clerk.run_report(&ReportQuery::default()).await.unwrap();
    assert_eq!(report.matched, 0);
    assert_eq!(report.total_expense_eur, 0.0);
    assert_eq!(report.total_income_eur, 0.0);
}

#[tokio::test]
async fn export_without_target_degrades_gracefully() {
    let clerk = clerk(MemoryLedgerGateway::new());
    let reply = clerk.handle_turn(&["Κάνε εξαγωγή σε CSV"]).await.unwrap();
    assert_eq!(reply.outcome, TurnOutcome::ExportUnavailable);
    assert!(reply.text.contains("δεν είναι διαθέσιμη"));
}

#[tokio::test]
async fn export_with_target_writes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = MemoryLedgerGateway::with_export_dir(dir.path());
    seed(&gateway).await;
    let clerk = clerk(gateway);

    let reply = clerk.handle_turn(&["Κάνε εξαγωγή σε CSV"]).await.unwrap();
    match reply.outcome {
        TurnOutcome::Exported(handle) => {
            assert_eq!(handle.rows, 4);
            assert!(handle.path.exists());
        }
        other => panic!("expected an export, got {:?}", other),
    }
}

#[tokio::test]
async fn store_failure_is_surfaced_never_a_fake_receipt() {
    struct RefusingGateway;

    #[async_trait]
    impl LedgerGateway for RefusingGateway {
        async fn store(&self, _entry: LedgerEntry) -> Result<()> {
            Err(ClerkError::StoreFailed {
                details: "disk full".to_string(),
            })
        }

        async fn query(&self, _predicate: &ReportQuery) -> Result<Vec<LedgerEntry>> {
            Ok(Vec::new())
        }

        async fn export_csv(&self, _predicate: &ReportQuery) -> Result<ExportHandle> {
            Err(ClerkError::ExportUnavailable)
        }
    }

    let clerk = FinanceClerk::new(RefusingGateway, december());
    let reply = clerk
        .handle_turn(&["Πλήρωσα 45€ ρεύμα στη Θεσσαλονίκη"])
        .await
        .unwrap();
    match reply.outcome {
        TurnOutcome::StoreFailed { details } => assert_eq!(details, "disk full"),
        other => panic!("expected a store failure, got {:?}", other),
    }
    assert!(reply.text.contains("ΔΕΝ αποθηκεύτηκε"));
    assert!(!reply.text.contains("Καταχωρήθηκε:"));
}

async fn seed(gateway: &MemoryLedgerGateway) {
    let entries = [
        ledger_entry(2025, 12, 3, Property::Vourvourou, Direction::Expense, 45.0),
        ledger_entry(2025, 12, 9, Property::Vourvourou, Direction::Expense, 30.0),
        ledger_entry(2025, 12, 5, Property::Thessaloniki, Direction::Expense, 60.0),
        ledger_entry(2025, 11, 20, Property::Vourvourou, Direction::Expense, 25.0),
    ];
    for entry in entries {
        gateway.store(entry).await.unwrap();
    }
}

fn ledger_entry(
    year: i32,
    month: u32,
    day: u32,
    property: Property,
    direction: Direction,
    amount_eur: f64,
) -> LedgerEntry {
    LedgerEntry {
        occurred_on: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        property,
        direction,
        category: "Utilities".to_string(),
        amount_eur,
        note: None,
    }
}
