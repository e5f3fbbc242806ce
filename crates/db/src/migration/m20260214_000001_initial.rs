//! Initial schema: ledger records and alerts.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS alerts CASCADE;\n\
             DROP TABLE IF EXISTS ledger_records CASCADE;\n\
             DROP TYPE IF EXISTS alert_severity;",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
-- Ledger records: one row per financial transaction.
-- record_type and category stay free text; classification happens in code.
CREATE TABLE ledger_records (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    amount NUMERIC(19, 4) NOT NULL CHECK (amount >= 0),
    record_type VARCHAR(32) NOT NULL,
    category VARCHAR(64),
    description TEXT,
    recorded_on DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Index for date-window report queries (the dominant access path)
CREATE INDEX idx_ledger_records_recorded_on ON ledger_records(recorded_on);

-- Index for type-filtered fetches
CREATE INDEX idx_ledger_records_type ON ledger_records(record_type, recorded_on);

-- Alert severity levels
CREATE TYPE alert_severity AS ENUM ('info', 'warning', 'critical');

-- Dashboard alerts/notifications
CREATE TABLE alerts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    title VARCHAR(255) NOT NULL,
    message TEXT NOT NULL,
    severity alert_severity NOT NULL DEFAULT 'info',
    resolved BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Index for the newest-first dashboard listing
CREATE INDEX idx_alerts_created ON alerts(created_at DESC);

-- Index for unresolved alert lookups
CREATE INDEX idx_alerts_unresolved ON alerts(severity, created_at DESC) WHERE NOT resolved;
";
