//! Break-even analysis over monthly buckets.

use rust_decimal::Decimal;

use super::types::{BreakEvenSnapshot, MonthlyBucket};

/// Fixed/variable cost split policy.
///
/// The split is an assumption of the break-even model, not something derived
/// from ledger data, so it is injected rather than hardcoded in the
/// arithmetic. The default treats 60% of average monthly expenses as fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostSplit {
    /// Share of average monthly expenses treated as fixed costs.
    pub fixed_cost_ratio: Decimal,
}

impl CostSplit {
    /// Creates a cost split with the given fixed-cost share.
    #[must_use]
    pub const fn new(fixed_cost_ratio: Decimal) -> Self {
        Self { fixed_cost_ratio }
    }

    /// The complementary variable-cost share.
    #[must_use]
    pub fn variable_cost_ratio(&self) -> Decimal {
        Decimal::ONE - self.fixed_cost_ratio
    }
}

impl Default for CostSplit {
    fn default() -> Self {
        // 60/40 fixed/variable.
        Self::new(Decimal::new(6, 1))
    }
}

/// Derives the break-even snapshot from a year's monthly buckets.
///
/// Averages are arithmetic means over the buckets provided (zero when there
/// are none). `variable_costs` is computed as the remainder after the fixed
/// share so the split always sums exactly to `avg_monthly_expenses`.
#[must_use]
pub fn break_even(buckets: &[MonthlyBucket], split: &CostSplit) -> BreakEvenSnapshot {
    let (avg_monthly_income, avg_monthly_expenses) = if buckets.is_empty() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let months = Decimal::from(buckets.len());
        let income: Decimal = buckets.iter().map(|b| b.income).sum();
        let expenses: Decimal = buckets.iter().map(|b| b.expenses).sum();
        (income / months, expenses / months)
    };

    let fixed_costs = avg_monthly_expenses * split.fixed_cost_ratio;
    let variable_costs = avg_monthly_expenses - fixed_costs;
    let contribution_margin = avg_monthly_income - variable_costs;

    let break_even_units = if contribution_margin > Decimal::ZERO {
        fixed_costs / contribution_margin
    } else {
        Decimal::ZERO
    };
    let break_even_revenue = break_even_units * avg_monthly_income;

    let margin_of_safety = avg_monthly_income - break_even_revenue;
    let margin_of_safety_percent = if avg_monthly_income > Decimal::ZERO {
        margin_of_safety / avg_monthly_income * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    BreakEvenSnapshot {
        fixed_costs,
        variable_costs,
        contribution_margin,
        break_even_revenue,
        break_even_units,
        margin_of_safety,
        margin_of_safety_percent,
        avg_monthly_income,
        avg_monthly_expenses,
    }
}
