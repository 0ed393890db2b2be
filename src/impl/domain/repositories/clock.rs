use chrono::NaiveDate;

/// Source of "today" for date defaulting and relative-date resolution. The
/// production implementation is fixed to Europe/Athens.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
