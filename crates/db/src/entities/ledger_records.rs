//! `SeaORM` Entity for ledger_records table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One stored financial transaction.
///
/// `record_type` and `category` are free-text labels exactly as the original
/// document store kept them; classification into the closed domain enums
/// happens in the repository layer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ledger_records")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Transaction amount (non-negative).
    pub amount: Decimal,
    /// Classification label (Rent, Deposit, LateFees, Refund, Expense).
    pub record_type: String,
    /// Expense category label; meaningful only for Expense rows.
    pub category: Option<String>,
    /// Optional free-text note.
    pub description: Option<String>,
    /// Calendar date (UTC) used for report bucketing.
    pub recorded_on: Date,
    /// Row creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Row update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations (none).
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
