//! Database seeder for Hostelops development and testing.
//!
//! Seeds two years of ledger records plus a handful of alerts so the report
//! endpoints return something worth looking at locally.
//!
//! Usage: cargo run --bin seeder

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use uuid::Uuid;

use hostelops_db::entities::{alerts, ledger_records, sea_orm_active_enums::AlertSeverity};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = hostelops_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding ledger records...");
    seed_ledger_records(&db).await;

    println!("Seeding alerts...");
    seed_alerts(&db).await;

    println!("Seeding complete!");
}

/// Monthly seed pattern: (type label, category label, amount, day of month).
const MONTHLY_PATTERN: &[(&str, Option<&str>, i64, u32)] = &[
    ("Rent", None, 10_000_00, 5),
    ("Rent", None, 8_500_00, 6),
    ("Deposit", None, 1_200_00, 10),
    ("LateFees", None, 150_00, 18),
    ("Expense", Some("Maintenance"), 1_800_00, 12),
    ("Expense", Some("Utilities"), 950_00, 15),
    ("Expense", Some("Supplies"), 420_00, 20),
    ("Expense", Some("HVAC"), 600_00, 22),
    ("Expense", Some("Security"), 380_00, 25),
    ("Expense", Some("Cleaning"), 250_00, 26),
];

/// Seeds ledger records for 2023 and 2024.
async fn seed_ledger_records(db: &DatabaseConnection) {
    // Skip if there is already data
    let existing = ledger_records::Entity::find()
        .count(db)
        .await
        .unwrap_or(0);
    if existing > 0 {
        println!("  Ledger records already exist, skipping...");
        return;
    }

    let mut inserted = 0u32;
    for year in [2023, 2024] {
        for month in 1..=12u32 {
            for &(record_type, category, cents, day) in MONTHLY_PATTERN {
                let Some(recorded_on) = NaiveDate::from_ymd_opt(year, month, day) else {
                    continue;
                };

                let record = ledger_records::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    amount: Set(Decimal::new(cents, 2)),
                    record_type: Set(record_type.to_string()),
                    category: Set(category.map(str::to_string)),
                    description: Set(None),
                    recorded_on: Set(recorded_on),
                    created_at: Set(Utc::now().into()),
                    updated_at: Set(Utc::now().into()),
                };

                if let Err(e) = record.insert(db).await {
                    eprintln!("Failed to insert ledger record: {e}");
                } else {
                    inserted += 1;
                }
            }
        }
    }

    println!("  Inserted {inserted} ledger records");
}

/// Seeds a few dashboard alerts.
async fn seed_alerts(db: &DatabaseConnection) {
    let existing = alerts::Entity::find().count(db).await.unwrap_or(0);
    if existing > 0 {
        println!("  Alerts already exist, skipping...");
        return;
    }

    let seeds = [
        (
            "Boiler inspection due",
            "Annual boiler inspection for building A is due this month.",
            AlertSeverity::Warning,
        ),
        (
            "Rent roll imported",
            "March rent roll imported successfully.",
            AlertSeverity::Info,
        ),
        (
            "Fire alarm fault",
            "Fire alarm panel in building B reports a fault and needs service.",
            AlertSeverity::Critical,
        ),
    ];

    for (title, message, severity) in seeds {
        let alert = alerts::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title.to_string()),
            message: Set(message.to_string()),
            severity: Set(severity),
            resolved: Set(false),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        if let Err(e) = alert.insert(db).await {
            eprintln!("Failed to insert alert: {e}");
        } else {
            println!("  Created alert: {title}");
        }
    }
}
