use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::Expense;

/// Key an expense is grouped under when summarizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryKey {
    /// Verbatim category string
    #[serde(rename = "category")]
    Category,
    /// Exact ISO date, `YYYY-MM-DD`
    #[serde(rename = "date")]
    Date,
    /// Month prefix of the date, `YYYY-MM`
    #[serde(rename = "month")]
    Month,
}

impl SummaryKey {
    pub fn key_for(&self, expense: &Expense) -> String {
        match self {
            SummaryKey::Category => expense.category.clone(),
            SummaryKey::Date => expense.date.format("%Y-%m-%d").to_string(),
            SummaryKey::Month => expense.month(),
        }
    }
}

/// Group expenses by the given key and sum their amounts.
///
/// Accumulation is exact decimal arithmetic per key; rounding to two
/// decimals happens at display time only. Rows whose amount cell does
/// not parse are skipped, never failing the whole aggregation. The
/// returned map iterates in ascending key order.
pub fn group_and_sum(expenses: &[Expense], key: SummaryKey) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        let Some(amount) = expense.amount.parse() else {
            debug!(cell = expense.amount.as_str(), "skipping row with unparsable amount");
            continue;
        };
        *totals.entry(key.key_for(expense)).or_insert(Decimal::ZERO) += amount;
    }
    totals
}

/// Sum every parseable amount into a single total.
pub fn grand_total(expenses: &[Expense]) -> Decimal {
    expenses
        .iter()
        .filter_map(|expense| expense.amount.parse())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use std::str::FromStr;

    fn expense(date: &str, amount: &str, category: &str, description: &str) -> Expense {
        Expense::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            Decimal::from_str(amount).unwrap(),
            category,
            description,
        )
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("2025-01-05", "12.50", "Food", "lunch"),
            expense("2025-01-20", "40.00", "Transport", "bus pass"),
            expense("2025-02-01", "9.99", "Food", "snack"),
        ]
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_group_by_category() {
        let totals = group_and_sum(&sample(), SummaryKey::Category);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Food"], dec("22.49"));
        assert_eq!(totals["Transport"], dec("40.00"));
    }

    #[test]
    fn test_group_by_month() {
        let totals = group_and_sum(&sample(), SummaryKey::Month);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["2025-01"], dec("52.50"));
        assert_eq!(totals["2025-02"], dec("9.99"));
    }

    #[test]
    fn test_group_by_date() {
        let totals = group_and_sum(&sample(), SummaryKey::Date);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals["2025-01-05"], dec("12.50"));
        assert_eq!(totals["2025-01-20"], dec("40.00"));
        assert_eq!(totals["2025-02-01"], dec("9.99"));
    }

    #[test]
    fn test_grand_total() {
        assert_eq!(grand_total(&sample()), dec("62.49"));
    }

    #[test]
    fn test_keys_iterate_in_ascending_order() {
        let mut expenses = sample();
        expenses.push(expense("2024-12-31", "1.00", "Archive", "old"));

        let keys: Vec<String> = group_and_sum(&expenses, SummaryKey::Month)
            .into_keys()
            .collect();
        assert_eq!(keys, vec!["2024-12", "2025-01", "2025-02"]);

        let keys: Vec<String> = group_and_sum(&expenses, SummaryKey::Category)
            .into_keys()
            .collect();
        assert_eq!(keys, vec!["Archive", "Food", "Transport"]);
    }

    #[rstest]
    #[case(SummaryKey::Category)]
    #[case(SummaryKey::Date)]
    #[case(SummaryKey::Month)]
    fn test_order_independence(#[case] key: SummaryKey) {
        let forward = group_and_sum(&sample(), key);

        let mut reversed = sample();
        reversed.reverse();
        assert_eq!(group_and_sum(&reversed, key), forward);
    }

    #[test]
    fn test_grand_total_additivity() {
        let (a, b) = (sample(), vec![expense("2025-03-01", "100.10", "Rent", "march")]);
        let combined: Vec<Expense> = a.iter().chain(b.iter()).cloned().collect();
        assert_eq!(grand_total(&combined), grand_total(&a) + grand_total(&b));
    }

    #[test]
    fn test_corrupt_amounts_are_skipped_not_fatal() {
        let mut expenses = sample();
        expenses.push(Expense {
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            amount: crate::types::Amount::from("oops"),
            category: "Food".to_string(),
            description: "typo".to_string(),
        });

        let totals = group_and_sum(&expenses, SummaryKey::Category);
        assert_eq!(totals["Food"], dec("22.49"));
        assert_eq!(grand_total(&expenses), dec("62.49"));
    }

    #[test]
    fn test_empty_input() {
        assert!(group_and_sum(&[], SummaryKey::Category).is_empty());
        assert_eq!(grand_total(&[]), Decimal::ZERO);
    }
}
