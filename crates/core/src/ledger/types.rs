//! Ledger record types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of a ledger record.
///
/// Everything except `Expense` is money flowing in. The store persists these
/// as free-text labels, so parsing is fallible; rows with an unrecognized
/// label belong to no classification and are dropped at the store boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// Rent payment from a tenant.
    Rent,
    /// Security or booking deposit.
    Deposit,
    /// Late payment fee.
    LateFees,
    /// Refund issued back into the ledger.
    Refund,
    /// Operating expense.
    Expense,
}

impl RecordType {
    /// All record types, in display order.
    pub const ALL: [Self; 5] = [
        Self::Rent,
        Self::Deposit,
        Self::LateFees,
        Self::Refund,
        Self::Expense,
    ];

    /// Parses a stored label into a record type.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Rent" => Some(Self::Rent),
            "Deposit" => Some(Self::Deposit),
            "LateFees" => Some(Self::LateFees),
            "Refund" => Some(Self::Refund),
            "Expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Returns the label used in the store and in category breakdowns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Deposit => "Deposit",
            Self::LateFees => "LateFees",
            Self::Refund => "Refund",
            Self::Expense => "Expense",
        }
    }

    /// Returns true for the income classifications.
    #[must_use]
    pub const fn is_income(self) -> bool {
        !matches!(self, Self::Expense)
    }
}

/// Expense sub-classification.
///
/// Only the five named categories get their own sub-bucket during
/// aggregation; anything else folds into `Other`, which still counts toward
/// total expenses but has no sub-bucket of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Building and room maintenance.
    Maintenance,
    /// Consumable supplies.
    Supplies,
    /// Utility bills.
    Utilities,
    /// Heating, ventilation, and air conditioning.
    Hvac,
    /// Security services.
    Security,
    /// Any other or missing category.
    Other,
}

impl ExpenseCategory {
    /// Parses a stored category label; missing or unknown labels fold to `Other`.
    #[must_use]
    pub fn parse(label: Option<&str>) -> Self {
        match label {
            Some("Maintenance") => Self::Maintenance,
            Some("Supplies") => Self::Supplies,
            Some("Utilities") => Self::Utilities,
            Some("HVAC") => Self::Hvac,
            Some("Security") => Self::Security,
            _ => Self::Other,
        }
    }

    /// Returns the label used in the store and in category breakdowns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Maintenance => "Maintenance",
            Self::Supplies => "Supplies",
            Self::Utilities => "Utilities",
            Self::Hvac => "HVAC",
            Self::Security => "Security",
            Self::Other => "Other",
        }
    }
}

/// One financial transaction entry supplied by the ledger store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Transaction amount (non-negative).
    pub amount: Decimal,
    /// Income/expense classification.
    pub record_type: RecordType,
    /// Expense sub-classification; `Some` iff `record_type` is `Expense`.
    pub category: Option<ExpenseCategory>,
    /// Calendar date (UTC) used for bucketing.
    pub recorded_on: NaiveDate,
}

impl LedgerRecord {
    /// Builds a record from store fields, classifying the category label.
    ///
    /// The category label is ignored for income records.
    #[must_use]
    pub fn classify(
        amount: Decimal,
        record_type: RecordType,
        category_label: Option<&str>,
        recorded_on: NaiveDate,
    ) -> Self {
        let category = (record_type == RecordType::Expense)
            .then(|| ExpenseCategory::parse(category_label));

        Self {
            amount,
            record_type,
            category,
            recorded_on,
        }
    }

    /// Returns true if this record counts as income.
    #[must_use]
    pub const fn is_income(&self) -> bool {
        self.record_type.is_income()
    }
}
