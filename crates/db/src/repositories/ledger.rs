//! Ledger record repository - the reporting engine's collaborator store.

use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::warn;

use crate::entities::ledger_records;
use hostelops_core::ledger::{LedgerRecord, RecordType};

/// Error types for ledger store operations.
///
/// A failed fetch propagates unmodified to the caller; there is no retry and
/// no partial-result fallback.
#[derive(Debug, thiserror::Error)]
pub enum LedgerStoreError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Filter for fetching ledger records.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Earliest date to include (inclusive).
    pub date_from: Option<NaiveDate>,
    /// Latest date to include (exclusive).
    pub date_to: Option<NaiveDate>,
    /// Restrict to one record type.
    pub record_type: Option<RecordType>,
    /// Restrict to one stored category label.
    pub category: Option<String>,
}

impl RecordFilter {
    /// Filter covering one calendar year: `[Jan 1 year, Jan 1 year+1)`.
    #[must_use]
    pub fn for_year(year: i32) -> Self {
        Self {
            date_from: NaiveDate::from_ymd_opt(year, 1, 1),
            date_to: NaiveDate::from_ymd_opt(year.saturating_add(1), 1, 1),
            ..Self::default()
        }
    }
}

/// Ledger record repository.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches ledger records matching the filter, ordered ascending by date.
    ///
    /// Rows whose stored `record_type` label is not one of the known
    /// classifications belong to no bucket; they are skipped here with a
    /// warning rather than surfaced as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn fetch_records(
        &self,
        filter: &RecordFilter,
    ) -> Result<Vec<LedgerRecord>, LedgerStoreError> {
        let mut query = ledger_records::Entity::find();

        if let Some(from) = filter.date_from {
            query = query.filter(ledger_records::Column::RecordedOn.gte(from));
        }
        if let Some(to) = filter.date_to {
            query = query.filter(ledger_records::Column::RecordedOn.lt(to));
        }
        if let Some(record_type) = filter.record_type {
            query = query.filter(ledger_records::Column::RecordType.eq(record_type.label()));
        }
        if let Some(category) = &filter.category {
            query = query.filter(ledger_records::Column::Category.eq(category));
        }

        let rows = query
            .order_by_asc(ledger_records::Column::RecordedOn)
            .all(&self.db)
            .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            match RecordType::parse(&row.record_type) {
                Some(record_type) => records.push(LedgerRecord::classify(
                    row.amount,
                    record_type,
                    row.category.as_deref(),
                    row.recorded_on,
                )),
                None => warn!(
                    record_id = %row.id,
                    record_type = %row.record_type,
                    "Skipping ledger record with unknown type"
                ),
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_filter_covers_half_open_range() {
        let filter = RecordFilter::for_year(2024);
        assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.date_to, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert!(filter.record_type.is_none());
        assert!(filter.category.is_none());
    }
}
