//! Ratio derivation from aggregated bucket sums.
//!
//! Every function here is total: a zero denominator or an absent reference
//! bucket yields exactly `Decimal::ZERO`, never an error and never a NaN-like
//! sentinel. The one genuine error in the engine (`YearNotFound`) belongs to
//! [`FinancialRatios::for_year`] and must not be conflated with
//! zero-division.

use rust_decimal::Decimal;

use super::error::ReportingError;
use super::types::{FinancialRatios, KpiSnapshot, MonthlyBucket, YearlyBucket};

/// Months in a calendar year; the yearly-mode average divisor.
const MONTHS_PER_YEAR: i64 = 12;

/// Profit margin percent: `(income - expenses) / income * 100`, 0 when
/// income is 0.
#[must_use]
pub fn profit_margin(income: Decimal, expenses: Decimal) -> Decimal {
    if income > Decimal::ZERO {
        (income - expenses) / income * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Expense ratio percent: `expenses / income * 100`, 0 when income is 0.
#[must_use]
pub fn expense_ratio(income: Decimal, expenses: Decimal) -> Decimal {
    if income > Decimal::ZERO {
        expenses / income * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Current ratio: `income / expenses`, 0 when expenses are 0.
#[must_use]
pub fn current_ratio(income: Decimal, expenses: Decimal) -> Decimal {
    if expenses > Decimal::ZERO {
        income / expenses
    } else {
        Decimal::ZERO
    }
}

/// Income growth percent versus a previous period, 0 when the previous
/// period is absent or earned nothing.
#[must_use]
pub fn yoy_growth(current_income: Decimal, previous_income: Option<Decimal>) -> Decimal {
    match previous_income {
        Some(previous) if previous > Decimal::ZERO => {
            (current_income - previous) / previous * Decimal::ONE_HUNDRED
        }
        _ => Decimal::ZERO,
    }
}

impl KpiSnapshot {
    /// Builds the KPI snapshot from a year's sorted monthly buckets.
    ///
    /// The "current" bucket is the LAST bucket of the sequence and the
    /// "previous" bucket is the one directly before it - the prior calendar
    /// month within the same result set, not the same month one year
    /// earlier. Averages divide by the number of buckets present.
    #[must_use]
    pub fn for_months(buckets: &[MonthlyBucket]) -> Self {
        let total_income: Decimal = buckets.iter().map(|b| b.income).sum();
        let total_expenses: Decimal = buckets.iter().map(|b| b.expenses).sum();

        let (avg_monthly_income, avg_monthly_expenses) = if buckets.is_empty() {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            let months = Decimal::from(buckets.len());
            (total_income / months, total_expenses / months)
        };

        let current = buckets.last();
        let previous = buckets.len().checked_sub(2).and_then(|i| buckets.get(i));
        let (income, expenses) = current.map_or((Decimal::ZERO, Decimal::ZERO), |b| {
            (b.income, b.expenses)
        });

        Self {
            net_income: total_income - total_expenses,
            total_income,
            total_expenses,
            avg_monthly_income,
            avg_monthly_expenses,
            yoy_growth: yoy_growth(income, previous.map(|b| b.income)),
            profit_margin: profit_margin(income, expenses),
            expense_ratio: expense_ratio(income, expenses),
            current_ratio: current_ratio(income, expenses),
        }
    }

    /// Builds the KPI snapshot for one requested year from yearly buckets.
    ///
    /// The "current" bucket is the requested year (zeroed when absent) and
    /// the "previous" bucket is the year before it. Averages always divide
    /// by 12, not by the number of months that had activity.
    #[must_use]
    pub fn for_year(buckets: &[YearlyBucket], year: i32) -> Self {
        let current = buckets.iter().find(|b| b.year == year);
        let previous = buckets.iter().find(|b| b.year == year - 1);
        let (income, expenses) = current.map_or((Decimal::ZERO, Decimal::ZERO), |b| {
            (b.income, b.expenses)
        });

        let months = Decimal::from(MONTHS_PER_YEAR);

        Self {
            net_income: income - expenses,
            total_income: income,
            total_expenses: expenses,
            avg_monthly_income: income / months,
            avg_monthly_expenses: expenses / months,
            yoy_growth: yoy_growth(income, previous.map(|b| b.income)),
            profit_margin: profit_margin(income, expenses),
            expense_ratio: expense_ratio(income, expenses),
            current_ratio: current_ratio(income, expenses),
        }
    }
}

impl FinancialRatios {
    /// Derives the financial ratios for one year from yearly buckets.
    ///
    /// `debt_to_income` repeats `expense_ratio` and `return_on_revenue`
    /// repeats `profit_margin`; both aliases are part of the response
    /// contract and stay separate fields.
    ///
    /// # Errors
    ///
    /// Returns [`ReportingError::YearNotFound`] when no yearly bucket exists
    /// for the requested year.
    pub fn for_year(buckets: &[YearlyBucket], year: i32) -> Result<Self, ReportingError> {
        let current = buckets
            .iter()
            .find(|b| b.year == year)
            .ok_or(ReportingError::YearNotFound(year))?;
        let previous = buckets.iter().find(|b| b.year == year - 1);

        let margin = profit_margin(current.income, current.expenses);
        let ratio = expense_ratio(current.income, current.expenses);

        Ok(Self {
            year,
            total_income: current.income,
            total_expenses: current.expenses,
            net_income: current.net_income(),
            profit_margin: margin,
            expense_ratio: ratio,
            current_ratio: current_ratio(current.income, current.expenses),
            debt_to_income: ratio,
            return_on_revenue: margin,
            yoy_growth: yoy_growth(current.income, previous.map(|b| b.income)),
        })
    }
}
