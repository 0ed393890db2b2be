use iso_currency::Currency;
use num_format::{Locale, ToFormattedString};

/// Formats a EUR amount the Greek way: "1.234,56 €". Amounts are always
/// positive (direction carries the sign of the flow).
pub(crate) fn format_eur(amount: f64) -> String {
    let currency = Currency::EUR;
    let decimal_places = currency.exponent().unwrap_or(0) as usize;
    let integer_part = (amount.trunc() as i64).to_formatted_string(&Locale::el);
    let fractional_part = format!("{:.decimal_places$}", amount.fract())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!("{},{} {}", integer_part, fractional_part, currency.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_greek_separators() {
        assert_eq!(format_eur(45.0), "45,00 €");
        assert_eq!(format_eur(45.5), "45,50 €");
        assert_eq!(format_eur(1234.56), "1.234,56 €");
    }
}
