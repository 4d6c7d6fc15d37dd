//! Expense summary report
//!
//! Totals per category, in order of each category's first appearance, and
//! the grand total across all expenses.

use std::collections::HashMap;

use crate::models::{Amount, Expense};

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category label as stored
    pub category: String,
    /// Sum of amounts in this category
    pub total: Amount,
    /// Number of expenses in this category
    pub count: usize,
}

/// Summary of all expenses
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseSummary {
    /// Per-category totals, first-appearance order
    pub categories: Vec<CategoryTotal>,
    /// Sum of all amounts
    pub total: Amount,
    /// Number of expenses
    pub count: usize,
}

impl ExpenseSummary {
    /// Generate a summary from an expense collection
    pub fn generate(expenses: &[Expense]) -> Self {
        let mut categories: Vec<CategoryTotal> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut total = Amount::zero();

        for expense in expenses {
            total += expense.amount;

            match positions.get(expense.category.as_str()) {
                Some(&pos) => {
                    categories[pos].total += expense.amount;
                    categories[pos].count += 1;
                }
                None => {
                    positions.insert(expense.category.as_str(), categories.len());
                    categories.push(CategoryTotal {
                        category: expense.category.clone(),
                        total: expense.amount,
                        count: 1,
                    });
                }
            }
        }

        Self {
            categories,
            total,
            count: expenses.len(),
        }
    }

    /// Check if there is nothing to summarize
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Total for a single category, if it has any expenses
    pub fn total_for(&self, category: &str) -> Option<Amount> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }
}

/// Category totals split into parallel sequences for charting
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryTotals {
    /// Category names
    pub labels: Vec<String>,
    /// Total amount for the label at the same position
    pub sizes: Vec<Amount>,
}

impl CategoryTotals {
    /// Compute totals straight from expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        Self::from(&ExpenseSummary::generate(expenses))
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if there are no categories
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of all sizes
    pub fn total(&self) -> Amount {
        self.sizes.iter().copied().sum()
    }

    /// `(label, size)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Amount)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.sizes.iter().copied())
    }
}

impl From<&ExpenseSummary> for CategoryTotals {
    fn from(summary: &ExpenseSummary) -> Self {
        let (labels, sizes) = summary
            .categories
            .iter()
            .map(|c| (c.category.clone(), c.total))
            .unzip();
        Self { labels, sizes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn expense(amount: Decimal, category: &str) -> Expense {
        Expense::new(Amount::new(amount), category, "2024-01-01")
    }

    #[test]
    fn test_empty_summary() {
        let summary = ExpenseSummary::generate(&[]);
        assert!(summary.is_empty());
        assert!(summary.categories.is_empty());
        assert!(summary.total.is_zero());
    }

    #[test]
    fn test_first_appearance_order() {
        let expenses = vec![
            expense(dec!(5.0), "Transport"),
            expense(dec!(10.0), "Food"),
            expense(dec!(2.5), "Transport"),
            expense(dec!(1.0), "Books"),
        ];

        let summary = ExpenseSummary::generate(&expenses);
        let names: Vec<_> = summary.categories.iter().map(|c| c.category.as_str()).collect();

        assert_eq!(names, vec!["Transport", "Food", "Books"]);
        assert_eq!(summary.total_for("Transport"), Some(Amount::new(dec!(7.5))));
        assert_eq!(summary.categories[0].count, 2);
        assert_eq!(summary.total_for("Rent"), None);
    }

    #[test]
    fn test_total_is_sum_of_amounts() {
        let expenses = vec![
            expense(dec!(50.0), "Food"),
            expense(dec!(20.0), "Transport"),
            expense(dec!(0.25), "Food"),
        ];

        let summary = ExpenseSummary::generate(&expenses);
        assert_eq!(summary.total.value(), dec!(70.25));
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_category_totals_match_summary() {
        let expenses = vec![
            expense(dec!(50.0), "Food"),
            expense(dec!(20.0), "Transport"),
            expense(dec!(30.0), "Food"),
        ];

        let summary = ExpenseSummary::generate(&expenses);
        let totals = CategoryTotals::from_expenses(&expenses);

        assert_eq!(totals.labels, vec!["Food", "Transport"]);
        assert_eq!(totals.sizes, vec![Amount::new(dec!(80)), Amount::new(dec!(20))]);
        assert_eq!(totals.len(), totals.sizes.len());
        assert_eq!(totals.total(), summary.total);
        assert_eq!(
            totals.iter().collect::<Vec<_>>(),
            vec![
                ("Food", Amount::new(dec!(80))),
                ("Transport", Amount::new(dec!(20)))
            ]
        );
    }

    #[test]
    fn test_category_labels_are_case_sensitive() {
        let expenses = vec![expense(dec!(1.0), "food"), expense(dec!(2.0), "Food")];
        assert_eq!(CategoryTotals::from_expenses(&expenses).len(), 2);
    }

    #[test]
    fn test_chart_sizes_add_up_to_grand_total() {
        // None of these has an exact binary representation
        let expenses = vec![
            expense(dec!(60.74), "A"),
            expense(dec!(69.58), "B"),
            expense(dec!(72.15), "A"),
        ];

        let summary = ExpenseSummary::generate(&expenses);
        let totals = CategoryTotals::from(&summary);

        assert_eq!(summary.total.value(), dec!(202.47));
        assert_eq!(totals.total(), summary.total);
        assert_eq!(totals.sizes[0].value(), dec!(132.89));
    }

    #[test]
    fn test_many_small_amounts_stay_exact() {
        let mut expenses: Vec<Expense> = (0..10).map(|_| expense(dec!(0.1), "Coffee")).collect();
        expenses.push(expense(dec!(0.2), "Tea"));

        let summary = ExpenseSummary::generate(&expenses);
        let totals = CategoryTotals::from_expenses(&expenses);

        assert_eq!(summary.total_for("Coffee"), Some(Amount::new(dec!(1))));
        assert_eq!(summary.total.value(), dec!(1.2));
        assert_eq!(totals.total(), summary.total);
    }
}
