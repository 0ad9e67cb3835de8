use chrono::NaiveDate;

use crate::types::Expense;

/// Optional criteria over expenses, combined with logical AND.
///
/// Absent criteria impose no constraint, so the default filter passes
/// everything through.
///
/// ```rust,ignore
/// let january_food = ExpenseFilter::new()
///     .category("Food")
///     .start_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
///     .end_date(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())
///     .apply(&expenses);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ExpenseFilter {
    category: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    text: Option<String>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive exact category match.
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Inclusive lower date bound.
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Inclusive upper date bound.
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Case-insensitive substring match over every field of the record.
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = &self.category {
            if expense.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        if let Some(text) = &self.text {
            let blob = format!(
                "{} {} {} {}",
                expense.date, expense.amount, expense.category, expense.description
            )
            .to_lowercase();
            if !blob.contains(&text.to_lowercase()) {
                return false;
            }
        }
        true
    }

    /// Keep matching records, preserving input order.
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        expenses
            .iter()
            .filter(|expense| self.matches(expense))
            .cloned()
            .collect()
    }
}
