//! Cumulative monthly cash flow.

use rust_decimal::Decimal;

use super::types::{CashFlowEntry, MonthlyBucket};

/// Sequential scan over monthly buckets in ascending order.
///
/// The cumulative accumulator is seeded at zero and carried forward, so the
/// input order decides every entry after the first divergence; callers must
/// pass the aggregator's sorted output unchanged.
#[must_use]
pub fn cash_flow(buckets: &[MonthlyBucket]) -> Vec<CashFlowEntry> {
    let mut cumulative = Decimal::ZERO;

    buckets
        .iter()
        .map(|bucket| {
            let net_cash_flow = bucket.income - bucket.expenses;
            cumulative += net_cash_flow;
            CashFlowEntry {
                month: bucket.month_label().to_string(),
                income: bucket.income,
                expenses: bucket.expenses,
                net_cash_flow,
                cumulative,
            }
        })
        .collect()
}
