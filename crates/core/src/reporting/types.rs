//! Reporting data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{ExpenseCategory, LedgerRecord, RecordType};

/// Three-letter month label ("Jan".."Dec").
///
/// Months outside 1-12 cannot come out of a calendar date; the fallback only
/// exists to keep this total.
#[must_use]
pub const fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

/// Per-month aggregation bucket.
///
/// Created implicitly when the first record for its `(year, month)` arrives;
/// months with no records never get a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Total income (all non-expense types).
    pub income: Decimal,
    /// Total expenses.
    pub expenses: Decimal,
    /// Income sub-bucket: rent payments.
    pub rent: Decimal,
    /// Income sub-bucket: deposits.
    pub deposits: Decimal,
    /// Expense sub-bucket: maintenance.
    pub maintenance: Decimal,
    /// Expense sub-bucket: supplies.
    pub supplies: Decimal,
    /// Expense sub-bucket: utilities.
    pub utilities: Decimal,
    /// Expense sub-bucket: HVAC.
    pub hvac: Decimal,
    /// Expense sub-bucket: security.
    pub security: Decimal,
}

impl MonthlyBucket {
    /// Creates an empty bucket for the given month.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
            rent: Decimal::ZERO,
            deposits: Decimal::ZERO,
            maintenance: Decimal::ZERO,
            supplies: Decimal::ZERO,
            utilities: Decimal::ZERO,
            hvac: Decimal::ZERO,
            security: Decimal::ZERO,
        }
    }

    /// Folds one record into the bucket, returning the updated bucket.
    ///
    /// Non-expense records add to `income` (and the rent/deposit sub-bucket
    /// where applicable); expense records add to `expenses` and to their
    /// category sub-bucket unless the category is `Other`.
    #[must_use]
    pub fn absorb(self, record: &LedgerRecord) -> Self {
        let mut next = self;
        match record.record_type {
            RecordType::Rent => {
                next.income += record.amount;
                next.rent += record.amount;
            }
            RecordType::Deposit => {
                next.income += record.amount;
                next.deposits += record.amount;
            }
            RecordType::LateFees | RecordType::Refund => {
                next.income += record.amount;
            }
            RecordType::Expense => {
                next.expenses += record.amount;
                match record.category.unwrap_or(ExpenseCategory::Other) {
                    ExpenseCategory::Maintenance => next.maintenance += record.amount,
                    ExpenseCategory::Supplies => next.supplies += record.amount,
                    ExpenseCategory::Utilities => next.utilities += record.amount,
                    ExpenseCategory::Hvac => next.hvac += record.amount,
                    ExpenseCategory::Security => next.security += record.amount,
                    ExpenseCategory::Other => {}
                }
            }
        }
        next
    }

    /// Three-letter label for this bucket's month.
    #[must_use]
    pub const fn month_label(&self) -> &'static str {
        month_label(self.month)
    }
}

/// Per-year aggregation bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyBucket {
    /// Calendar year.
    pub year: i32,
    /// Total income.
    pub income: Decimal,
    /// Total expenses.
    pub expenses: Decimal,
}

impl YearlyBucket {
    /// Creates an empty bucket for the given year.
    #[must_use]
    pub const fn new(year: i32) -> Self {
        Self {
            year,
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        }
    }

    /// Folds one record into the bucket, returning the updated bucket.
    #[must_use]
    pub fn absorb(self, record: &LedgerRecord) -> Self {
        let mut next = self;
        if record.is_income() {
            next.income += record.amount;
        } else {
            next.expenses += record.amount;
        }
        next
    }

    /// Net income for the year (derived, never stored).
    #[must_use]
    pub fn net_income(&self) -> Decimal {
        self.income - self.expenses
    }
}

/// Income and expense totals grouped by classification label.
///
/// The two maps are independent group-bys over the same records: income by
/// record type label, expenses by category label (missing/unknown categories
/// under `"Other"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Income totals keyed by record type label.
    pub income: BTreeMap<String, Decimal>,
    /// Expense totals keyed by category label.
    pub expenses: BTreeMap<String, Decimal>,
}

/// Key performance indicators derived from aggregated buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    /// Total income minus total expenses.
    pub net_income: Decimal,
    /// Total income over the period.
    pub total_income: Decimal,
    /// Total expenses over the period.
    pub total_expenses: Decimal,
    /// Average monthly income.
    pub avg_monthly_income: Decimal,
    /// Average monthly expenses.
    pub avg_monthly_expenses: Decimal,
    /// Income growth versus the previous period, percent.
    pub yoy_growth: Decimal,
    /// Profit margin of the current bucket, percent.
    pub profit_margin: Decimal,
    /// Expense ratio of the current bucket, percent.
    pub expense_ratio: Decimal,
    /// Income over expenses for the current bucket.
    pub current_ratio: Decimal,
}

/// Break-even analysis derived from monthly buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakEvenSnapshot {
    /// Fixed share of average monthly expenses.
    pub fixed_costs: Decimal,
    /// Variable share of average monthly expenses.
    pub variable_costs: Decimal,
    /// Average monthly income minus variable costs.
    pub contribution_margin: Decimal,
    /// Revenue needed to cover fixed costs.
    pub break_even_revenue: Decimal,
    /// Fixed costs over contribution margin.
    pub break_even_units: Decimal,
    /// Average monthly income minus break-even revenue.
    pub margin_of_safety: Decimal,
    /// Margin of safety as a share of average monthly income, percent.
    pub margin_of_safety_percent: Decimal,
    /// Arithmetic mean of bucket incomes.
    pub avg_monthly_income: Decimal,
    /// Arithmetic mean of bucket expenses.
    pub avg_monthly_expenses: Decimal,
}

/// One month of the cumulative cash-flow sequence.
///
/// `cumulative` carries forward across the ordered sequence, so each entry
/// depends on every entry before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowEntry {
    /// Three-letter month label.
    pub month: String,
    /// Income for the month.
    pub income: Decimal,
    /// Expenses for the month.
    pub expenses: Decimal,
    /// Income minus expenses for the month.
    pub net_cash_flow: Decimal,
    /// Running total of net cash flow up to and including this month.
    pub cumulative: Decimal,
}

/// Financial ratios for a single year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRatios {
    /// The year the ratios describe.
    pub year: i32,
    /// Total income for the year.
    pub total_income: Decimal,
    /// Total expenses for the year.
    pub total_expenses: Decimal,
    /// Income minus expenses.
    pub net_income: Decimal,
    /// Profit margin, percent.
    pub profit_margin: Decimal,
    /// Expense ratio, percent.
    pub expense_ratio: Decimal,
    /// Income over expenses.
    pub current_ratio: Decimal,
    /// Alias of `expense_ratio`, kept as a separate field for dashboard
    /// compatibility.
    pub debt_to_income: Decimal,
    /// Alias of `profit_margin`, kept as a separate field for dashboard
    /// compatibility.
    pub return_on_revenue: Decimal,
    /// Income growth versus the prior year, percent.
    pub yoy_growth: Decimal,
}
