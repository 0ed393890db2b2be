use std::str::FromStr;

use crate::errors::ClerkError;

/// Parsed EUR amount. Accepts an optional trailing currency marker, a Greek
/// comma decimal separator, and dot-grouped thousands ("1.200", "1.200,50");
/// rejects zero and negative values (an entry amount is always positive,
/// direction carries the sign of the flow).
#[derive(Debug)]
pub(crate) struct EurAmountModel(pub f64);

impl FromStr for EurAmountModel {
    type Err = ClerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s
            .trim()
            .trim_end_matches('€')
            .trim_end_matches("ευρω")
            .trim_end_matches("eur")
            .trim();
        // With a comma present every dot is a grouping separator; without
        // one, dots only group when the digits fall in strict groups of
        // three ("1.200"), otherwise the dot is a decimal point ("45.50").
        let numeric = match trimmed.split_once(',') {
            Some((int_part, frac)) => format!("{}.{}", int_part.replace('.', ""), frac),
            None if is_dot_grouped(trimmed) => trimmed.replace('.', ""),
            None => trimmed.to_string(),
        };
        let amount = numeric.parse::<f64>().map_err(|_| ClerkError::InvalidAmount {
            value: s.to_string(),
        })?;
        if amount <= 0.0 || !amount.is_finite() {
            return Err(ClerkError::InvalidAmount {
                value: s.to_string(),
            });
        }
        Ok(EurAmountModel(amount))
    }
}

fn is_dot_grouped(s: &str) -> bool {
    let mut parts = s.split('.');
    let leading = match parts.next() {
        Some(p) => p,
        None => return false,
    };
    if leading.is_empty() || leading.len() > 3 || !leading.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let mut grouped = false;
    for part in parts {
        if part.len() != 3 || !part.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        grouped = true;
    }
    grouped
}

impl From<EurAmountModel> for f64 {
    fn from(model: EurAmountModel) -> f64 {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_marked_amounts() {
        assert_eq!(EurAmountModel::from_str("45").unwrap().0, 45.0);
        assert_eq!(EurAmountModel::from_str("45€").unwrap().0, 45.0);
        assert_eq!(EurAmountModel::from_str("45,50").unwrap().0, 45.5);
    }

    #[test]
    fn parses_dot_grouped_thousands() {
        assert_eq!(EurAmountModel::from_str("1.200").unwrap().0, 1200.0);
        assert_eq!(EurAmountModel::from_str("1.200,50").unwrap().0, 1200.5);
        assert_eq!(EurAmountModel::from_str("12.345.678€").unwrap().0, 12_345_678.0);
        // A dot with one or two trailing digits stays a decimal point.
        assert_eq!(EurAmountModel::from_str("45.50").unwrap().0, 45.5);
    }

    #[test]
    fn rejects_non_positive_and_garbage() {
        assert!(EurAmountModel::from_str("0").is_err());
        assert!(EurAmountModel::from_str("-5").is_err());
        assert!(EurAmountModel::from_str("abc").is_err());
    }
}
