//! Trip budget: an overall total, the amount spent, and five fixed buckets.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// The fixed budget buckets shown on a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Transport,
    Accommodation,
    Activities,
    Food,
    Other,
}

impl BudgetCategory {
    pub const ALL: [Self; 5] = [
        Self::Transport,
        Self::Accommodation,
        Self::Activities,
        Self::Food,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Accommodation => "Accommodation",
            Self::Activities => "Activities",
            Self::Food => "Food & Dining",
            Self::Other => "Other",
        }
    }
}

/// Budget summary for a trip.
///
/// `spent <= total` is expected but never enforced; an overspent trip simply
/// reports a negative remainder.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Budget {
    pub total: f64,
    pub spent: f64,
    pub transport: f64,
    pub accommodation: f64,
    pub activities: f64,
    pub food: f64,
    pub other: f64,
}

impl Budget {
    /// Builds a budget with no category breakdown.
    ///
    /// Amounts must be finite and non-negative.
    pub fn new(total: f64, spent: f64) -> Result<Self> {
        let budget = Self {
            total,
            spent,
            ..Self::default()
        };
        budget.validate()?;
        Ok(budget)
    }

    /// Returns a copy with one bucket set.
    pub fn with_category(mut self, category: BudgetCategory, amount: f64) -> Result<Self> {
        check_amount(amount)?;
        *self.category_mut(category) = amount;
        Ok(self)
    }

    /// Checks every amount is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        check_amount(self.total)?;
        check_amount(self.spent)?;
        BudgetCategory::ALL
            .into_iter()
            .try_for_each(|category| check_amount(self.category(category)))
    }

    #[must_use]
    pub const fn category(&self, category: BudgetCategory) -> f64 {
        match category {
            BudgetCategory::Transport => self.transport,
            BudgetCategory::Accommodation => self.accommodation,
            BudgetCategory::Activities => self.activities,
            BudgetCategory::Food => self.food,
            BudgetCategory::Other => self.other,
        }
    }

    fn category_mut(&mut self, category: BudgetCategory) -> &mut f64 {
        match category {
            BudgetCategory::Transport => &mut self.transport,
            BudgetCategory::Accommodation => &mut self.accommodation,
            BudgetCategory::Activities => &mut self.activities,
            BudgetCategory::Food => &mut self.food,
            BudgetCategory::Other => &mut self.other,
        }
    }

    /// `(category, amount)` pairs in display order.
    pub fn breakdown(&self) -> impl Iterator<Item = (BudgetCategory, f64)> + '_ {
        BudgetCategory::ALL
            .into_iter()
            .map(|category| (category, self.category(category)))
    }

    /// Sum of the five buckets.
    #[must_use]
    pub fn category_sum(&self) -> f64 {
        self.breakdown().map(|(_, amount)| amount).sum()
    }

    /// `total - spent`, not clamped at zero.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.total - self.spent
    }

    /// `spent / total * 100`, or `None` when the total is zero.
    #[must_use]
    pub fn spent_percent(&self) -> Option<f64> {
        if self.total == 0.0 {
            return None;
        }
        Some(self.spent / self.total * 100.0)
    }
}

fn check_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}
