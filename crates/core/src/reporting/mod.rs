//! Financial reporting and ratio engine.
//!
//! Pure, stateless transformations over ledger records fetched by a
//! collaborator store:
//!
//! - `aggregate` - groups records into monthly/yearly buckets and category
//!   breakdowns
//! - `ratios` - KPI and financial ratio derivation from bucket sums
//! - `breakeven` - break-even point and margin of safety
//! - `cashflow` - cumulative monthly cash flow
//!
//! Every request recomputes from scratch; nothing here caches, blocks, or
//! reads the clock.

pub mod aggregate;
pub mod breakeven;
pub mod cashflow;
pub mod error;
pub mod ratios;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregate::Aggregator;
pub use breakeven::{CostSplit, break_even};
pub use cashflow::cash_flow;
pub use error::ReportingError;
pub use ratios::{current_ratio, expense_ratio, profit_margin, yoy_growth};
pub use types::{
    BreakEvenSnapshot, CashFlowEntry, CategoryBreakdown, FinancialRatios, KpiSnapshot,
    MonthlyBucket, YearlyBucket, month_label,
};
