//! Record aggregation into time buckets.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use super::types::{CategoryBreakdown, MonthlyBucket, YearlyBucket};
use crate::ledger::{ExpenseCategory, LedgerRecord};

/// Groups ledger records into per-period buckets.
pub struct Aggregator;

impl Aggregator {
    /// Aggregates records into monthly buckets for one calendar year.
    ///
    /// Records dated outside `[Jan 1 year, Jan 1 year+1)` are ignored.
    /// Buckets come back sorted ascending by month; months with no records
    /// are omitted, not zero-filled. The sort is a correctness precondition
    /// for the cash-flow scan downstream.
    #[must_use]
    pub fn aggregate_monthly(records: &[LedgerRecord], year: i32) -> Vec<MonthlyBucket> {
        let mut buckets: BTreeMap<u32, MonthlyBucket> = BTreeMap::new();

        for record in records.iter().filter(|r| r.recorded_on.year() == year) {
            let month = record.recorded_on.month();
            let bucket = buckets
                .remove(&month)
                .unwrap_or_else(|| MonthlyBucket::new(year, month));
            buckets.insert(month, bucket.absorb(record));
        }

        buckets.into_values().collect()
    }

    /// Aggregates the entire record set into yearly buckets.
    ///
    /// No year filter is applied; output is sorted ascending by year.
    #[must_use]
    pub fn aggregate_yearly(records: &[LedgerRecord]) -> Vec<YearlyBucket> {
        let mut buckets: BTreeMap<i32, YearlyBucket> = BTreeMap::new();

        for record in records {
            let year = record.recorded_on.year();
            let bucket = buckets
                .remove(&year)
                .unwrap_or_else(|| YearlyBucket::new(year));
            buckets.insert(year, bucket.absorb(record));
        }

        buckets.into_values().collect()
    }

    /// Two independent group-bys: income by record type label, expenses by
    /// category label.
    ///
    /// Expense records with a missing or unrecognized category land under
    /// `"Other"`. The two maps are returned side by side, never merged.
    #[must_use]
    pub fn category_breakdown(records: &[LedgerRecord]) -> CategoryBreakdown {
        let mut breakdown = CategoryBreakdown::default();

        for record in records {
            if record.is_income() {
                *breakdown
                    .income
                    .entry(record.record_type.label().to_string())
                    .or_insert(Decimal::ZERO) += record.amount;
            } else {
                let label = record.category.unwrap_or(ExpenseCategory::Other).label();
                *breakdown
                    .expenses
                    .entry(label.to_string())
                    .or_insert(Decimal::ZERO) += record.amount;
            }
        }

        breakdown
    }
}
