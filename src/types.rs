use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category applied when the user leaves the field blank.
pub const DEFAULT_CATEGORY: &str = "General";

/// An amount cell exactly as it appears in the ledger file.
///
/// Kept verbatim so that rows with unparsable amounts survive a
/// load/rewrite cycle untouched. Aggregation calls [`Amount::parse`]
/// and skips cells that do not parse; the store itself never drops them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount(String);

impl Amount {
    /// Build an amount from a decimal value, serialized with exactly
    /// two fractional digits.
    pub fn new(value: Decimal) -> Self {
        Self(format!("{:.2}", value.round_dp(2)))
    }

    /// Parse the cell back into a decimal, `None` for corrupt cells.
    pub fn parse(&self) -> Option<Decimal> {
        self.0.trim().parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One ledger entry: date, amount, category and free-text description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub amount: Amount,
    pub category: String,
    pub description: String,
}

impl Expense {
    /// Build an entry from validated inputs.
    ///
    /// This is the ingestion boundary: a blank category becomes
    /// [`DEFAULT_CATEGORY`] and the amount is rounded to two decimals.
    /// Records loaded from disk bypass it so untouched rows round-trip
    /// byte-for-byte.
    pub fn new(date: NaiveDate, amount: Decimal, category: &str, description: &str) -> Self {
        let category = category.trim();
        Self {
            date,
            amount: Amount::new(amount),
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            description: description.to_string(),
        }
    }

    /// Month key, the first seven characters of the ISO date.
    pub fn month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("12.5", "12.50")]
    #[case("12.50", "12.50")]
    #[case("40", "40.00")]
    #[case("9.999", "10.00")]
    #[case("-3.1", "-3.10")]
    #[case("0", "0.00")]
    fn test_amount_serializes_two_decimals(#[case] input: &str, #[case] expected: &str) {
        let amount = Amount::new(Decimal::from_str(input).unwrap());
        assert_eq!(amount.as_str(), expected);
    }

    #[rstest]
    #[case("12.50", Some("12.50"))]
    #[case(" 7.25 ", Some("7.25"))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("12,50", None)]
    fn test_amount_parse(#[case] input: &str, #[case] expected: Option<&str>) {
        let amount = Amount::from(input);
        let parsed = amount.parse();
        assert_eq!(parsed, expected.map(|e| Decimal::from_str(e).unwrap()));
    }

    #[test]
    fn test_amount_preserves_raw_text() {
        let amount = Amount::from("not-a-number");
        assert_eq!(amount.as_str(), "not-a-number");
        assert_eq!(amount.to_string(), "not-a-number");
    }

    #[rstest]
    #[case("", DEFAULT_CATEGORY)]
    #[case("   ", DEFAULT_CATEGORY)]
    #[case("Food", "Food")]
    #[case("  Transport  ", "Transport")]
    fn test_expense_category_normalization(#[case] input: &str, #[case] expected: &str) {
        let expense = Expense::new(
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            Decimal::from_str("12.50").unwrap(),
            input,
            "lunch",
        );
        assert_eq!(expense.category, expected);
    }

    #[rstest]
    #[case(2025, 1, 5, "2025-01")]
    #[case(2025, 12, 31, "2025-12")]
    #[case(1999, 7, 1, "1999-07")]
    fn test_expense_month_key(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: &str,
    ) {
        let expense = Expense::new(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            Decimal::from_str("1.00").unwrap(),
            "Food",
            "",
        );
        assert_eq!(expense.month(), expected);
    }

    #[test]
    fn test_expense_serialization() {
        let expense = Expense::new(
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            Decimal::from_str("12.50").unwrap(),
            "Food",
            "lunch",
        );

        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("Food"));
        assert!(json.contains("12.50"));

        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, expense);
    }
}
