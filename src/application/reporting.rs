use serde::{Deserialize, Serialize};

use crate::domain::{compute_net, Operation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub profile: String,
    pub count: usize,
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
    /// Sorted by total, largest first
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub is_income: bool,
    pub total: f64,
    pub count: usize,
}

/// Aggregate the operations of one profile. `operations` must already be
/// filtered to that profile; order does not matter.
pub fn summarize(profile: &str, operations: &[Operation]) -> ProfileSummary {
    let mut categories: Vec<CategorySummary> = Vec::new();
    let mut total_income = 0.0;
    let mut total_expense = 0.0;

    for op in operations {
        let amount = op.amount.value();
        if op.is_income() {
            total_income += amount;
        } else {
            total_expense += amount;
        }

        match categories.iter_mut().find(|c| c.category == op.category) {
            Some(entry) => {
                entry.total += amount;
                entry.count += 1;
            }
            None => categories.push(CategorySummary {
                category: op.category.clone(),
                is_income: op.is_income(),
                total: amount,
                count: 1,
            }),
        }
    }

    categories.sort_by(|a, b| b.total.total_cmp(&a.total));

    ProfileSummary {
        profile: profile.to_string(),
        count: operations.len(),
        total_income,
        total_expense,
        net: compute_net(operations),
        categories,
    }
}
