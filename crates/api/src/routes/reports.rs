//! Financial report routes.
//!
//! Each handler fetches ledger records through the repository, then runs the
//! pure reporting engine over them; nothing is cached between requests.

use std::collections::BTreeMap;

use axum::{
    Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    AppState,
    response::{ApiFailure, ApiResponse},
};
use hostelops_core::ledger::LedgerRecord;
use hostelops_core::reporting::{
    Aggregator, BreakEvenSnapshot, CashFlowEntry, CostSplit, FinancialRatios, KpiSnapshot,
    MonthlyBucket, ReportingError, YearlyBucket, break_even, cash_flow,
};
use hostelops_db::repositories::ledger::{LedgerRepository, RecordFilter};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/monthly", get(get_monthly))
        .route("/reports/yearly", get(get_yearly))
        .route("/reports/categories", get(get_categories))
        .route("/reports/kpis", get(get_kpis))
        .route("/reports/breakeven", get(get_breakeven))
        .route("/reports/cashflow", get(get_cashflow))
        .route("/reports/ratios", get(get_ratios))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for year-scoped reports.
#[derive(Debug, Deserialize)]
pub struct YearQuery {
    /// Report year (defaults to the configured year, then the current year).
    pub year: Option<i32>,
}

/// Query parameters for period-scoped reports.
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    /// Report period: `monthly` (default) or `yearly`.
    pub period: Option<String>,
    /// Report year.
    pub year: Option<i32>,
}

/// Report period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportPeriod {
    Monthly,
    Yearly,
}

impl ReportPeriod {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// One monthly bucket in the report response.
#[derive(Debug, Serialize)]
pub struct MonthlyBucketResponse {
    /// Three-letter month label.
    pub month: &'static str,
    /// Calendar year.
    pub year: i32,
    /// Total income.
    pub income: Decimal,
    /// Total expenses.
    pub expenses: Decimal,
    /// Rent income sub-bucket.
    pub rent: Decimal,
    /// Deposit income sub-bucket.
    pub deposits: Decimal,
    /// Maintenance expense sub-bucket.
    pub maintenance: Decimal,
    /// Supplies expense sub-bucket.
    pub supplies: Decimal,
    /// Utilities expense sub-bucket.
    pub utilities: Decimal,
    /// HVAC expense sub-bucket.
    pub hvac: Decimal,
    /// Security expense sub-bucket.
    pub security: Decimal,
}

/// One yearly bucket in the report response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyBucketResponse {
    /// Calendar year.
    pub year: i32,
    /// Total income.
    pub income: Decimal,
    /// Total expenses.
    pub expenses: Decimal,
    /// Income minus expenses.
    pub net_income: Decimal,
}

/// Category breakdown response.
#[derive(Debug, Serialize)]
pub struct CategoryBreakdownResponse {
    /// Income totals keyed by record type label.
    pub income: BTreeMap<String, Decimal>,
    /// Expense totals keyed by category label.
    pub expenses: BTreeMap<String, Decimal>,
    /// Echo of the requested period.
    pub period: &'static str,
    /// Echo of the requested year.
    pub year: i32,
}

/// KPI snapshot response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiResponse {
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
    /// Profit margin, percent.
    pub profit_margin: Decimal,
    /// Expense ratio, percent.
    pub expense_ratio: Decimal,
    /// Income over expenses.
    pub current_ratio: Decimal,
}

/// Break-even snapshot response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenResponse {
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
    /// Margin of safety as a share of income, percent.
    pub margin_of_safety_percent: Decimal,
    /// Arithmetic mean of bucket incomes.
    pub avg_monthly_income: Decimal,
    /// Arithmetic mean of bucket expenses.
    pub avg_monthly_expenses: Decimal,
}

/// One cash-flow entry in the report response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEntryResponse {
    /// Three-letter month label.
    pub month: String,
    /// Income for the month.
    pub income: Decimal,
    /// Expenses for the month.
    pub expenses: Decimal,
    /// Income minus expenses for the month.
    pub net_cash_flow: Decimal,
    /// Running total of net cash flow.
    pub cumulative: Decimal,
}

/// Financial ratios response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatiosResponse {
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
    /// Alias of the expense ratio.
    pub debt_to_income: Decimal,
    /// Alias of the profit margin.
    pub return_on_revenue: Decimal,
    /// Income growth versus the prior year, percent.
    pub yoy_growth: Decimal,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolves the report year: query, then configured default, then the
/// current calendar year. The wall clock is only ever read here at the
/// boundary, never inside the reporting core.
fn resolve_year(state: &AppState, requested: Option<i32>) -> i32 {
    requested
        .or(state.config.reporting.default_year)
        .unwrap_or_else(|| chrono::Utc::now().year())
}

/// Fetches ledger records, mapping a store failure to a 500 envelope.
async fn fetch_records(
    state: &AppState,
    filter: &RecordFilter,
) -> Result<Vec<LedgerRecord>, Response> {
    let repo = LedgerRepository::new((*state.db).clone());
    repo.fetch_records(filter).await.map_err(|e| {
        error!(error = %e, "Failed to fetch ledger records");
        ApiFailure::internal("Failed to fetch ledger records")
    })
}

fn monthly_bucket_to_response(bucket: &MonthlyBucket) -> MonthlyBucketResponse {
    MonthlyBucketResponse {
        month: bucket.month_label(),
        year: bucket.year,
        income: bucket.income,
        expenses: bucket.expenses,
        rent: bucket.rent,
        deposits: bucket.deposits,
        maintenance: bucket.maintenance,
        supplies: bucket.supplies,
        utilities: bucket.utilities,
        hvac: bucket.hvac,
        security: bucket.security,
    }
}

fn yearly_bucket_to_response(bucket: &YearlyBucket) -> YearlyBucketResponse {
    YearlyBucketResponse {
        year: bucket.year,
        income: bucket.income,
        expenses: bucket.expenses,
        net_income: bucket.net_income(),
    }
}

fn kpi_to_response(kpis: &KpiSnapshot) -> KpiResponse {
    KpiResponse {
        net_income: kpis.net_income,
        total_income: kpis.total_income,
        total_expenses: kpis.total_expenses,
        avg_monthly_income: kpis.avg_monthly_income,
        avg_monthly_expenses: kpis.avg_monthly_expenses,
        yoy_growth: kpis.yoy_growth,
        profit_margin: kpis.profit_margin,
        expense_ratio: kpis.expense_ratio,
        current_ratio: kpis.current_ratio,
    }
}

fn break_even_to_response(snapshot: &BreakEvenSnapshot) -> BreakEvenResponse {
    BreakEvenResponse {
        fixed_costs: snapshot.fixed_costs,
        variable_costs: snapshot.variable_costs,
        contribution_margin: snapshot.contribution_margin,
        break_even_revenue: snapshot.break_even_revenue,
        break_even_units: snapshot.break_even_units,
        margin_of_safety: snapshot.margin_of_safety,
        margin_of_safety_percent: snapshot.margin_of_safety_percent,
        avg_monthly_income: snapshot.avg_monthly_income,
        avg_monthly_expenses: snapshot.avg_monthly_expenses,
    }
}

fn cash_flow_entry_to_response(entry: &CashFlowEntry) -> CashFlowEntryResponse {
    CashFlowEntryResponse {
        month: entry.month.clone(),
        income: entry.income,
        expenses: entry.expenses,
        net_cash_flow: entry.net_cash_flow,
        cumulative: entry.cumulative,
    }
}

fn ratios_to_response(ratios: &FinancialRatios) -> FinancialRatiosResponse {
    FinancialRatiosResponse {
        year: ratios.year,
        total_income: ratios.total_income,
        total_expenses: ratios.total_expenses,
        net_income: ratios.net_income,
        profit_margin: ratios.profit_margin,
        expense_ratio: ratios.expense_ratio,
        current_ratio: ratios.current_ratio,
        debt_to_income: ratios.debt_to_income,
        return_on_revenue: ratios.return_on_revenue,
        yoy_growth: ratios.yoy_growth,
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /reports/monthly?year=YYYY
#[axum::debug_handler]
async fn get_monthly(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> impl IntoResponse {
    let year = resolve_year(&state, query.year);

    let records = match fetch_records(&state, &RecordFilter::for_year(year)).await {
        Ok(r) => r,
        Err(response) => return response,
    };

    let buckets = Aggregator::aggregate_monthly(&records, year);
    let data: Vec<MonthlyBucketResponse> =
        buckets.iter().map(monthly_bucket_to_response).collect();

    ApiResponse::ok(data, "Monthly report generated")
}

/// GET /reports/yearly
#[axum::debug_handler]
async fn get_yearly(State(state): State<AppState>) -> impl IntoResponse {
    let records = match fetch_records(&state, &RecordFilter::default()).await {
        Ok(r) => r,
        Err(response) => return response,
    };

    let buckets = Aggregator::aggregate_yearly(&records);
    let data: Vec<YearlyBucketResponse> = buckets.iter().map(yearly_bucket_to_response).collect();

    ApiResponse::ok(data, "Yearly report generated")
}

/// GET /reports/categories?period=monthly|yearly&year=YYYY
#[axum::debug_handler]
async fn get_categories(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> impl IntoResponse {
    let year = resolve_year(&state, query.year);
    let period = match &query.period {
        None => ReportPeriod::Monthly,
        Some(s) => match ReportPeriod::parse(s) {
            Some(p) => p,
            None => return ApiFailure::bad_request("Invalid period"),
        },
    };

    // Monthly scopes the breakdown to the requested year; yearly spans the
    // whole ledger.
    let filter = match period {
        ReportPeriod::Monthly => RecordFilter::for_year(year),
        ReportPeriod::Yearly => RecordFilter::default(),
    };

    let records = match fetch_records(&state, &filter).await {
        Ok(r) => r,
        Err(response) => return response,
    };

    let breakdown = Aggregator::category_breakdown(&records);
    let data = CategoryBreakdownResponse {
        income: breakdown.income,
        expenses: breakdown.expenses,
        period: period.label(),
        year,
    };

    ApiResponse::ok(data, "Category breakdown generated")
}

/// GET /reports/kpis?period=monthly|yearly&year=YYYY
#[axum::debug_handler]
async fn get_kpis(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> impl IntoResponse {
    let year = resolve_year(&state, query.year);
    let period = match &query.period {
        None => ReportPeriod::Monthly,
        Some(s) => match ReportPeriod::parse(s) {
            Some(p) => p,
            None => return ApiFailure::bad_request("Invalid period"),
        },
    };

    let kpis = match period {
        ReportPeriod::Monthly => {
            let records = match fetch_records(&state, &RecordFilter::for_year(year)).await {
                Ok(r) => r,
                Err(response) => return response,
            };
            let buckets = Aggregator::aggregate_monthly(&records, year);
            KpiSnapshot::for_months(&buckets)
        }
        ReportPeriod::Yearly => {
            let records = match fetch_records(&state, &RecordFilter::default()).await {
                Ok(r) => r,
                Err(response) => return response,
            };
            let buckets = Aggregator::aggregate_yearly(&records);
            KpiSnapshot::for_year(&buckets, year)
        }
    };

    ApiResponse::ok(kpi_to_response(&kpis), "KPIs generated")
}

/// GET /reports/breakeven?year=YYYY
#[axum::debug_handler]
async fn get_breakeven(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> impl IntoResponse {
    let year = resolve_year(&state, query.year);

    let records = match fetch_records(&state, &RecordFilter::for_year(year)).await {
        Ok(r) => r,
        Err(response) => return response,
    };

    let buckets = Aggregator::aggregate_monthly(&records, year);
    let split = CostSplit::new(state.config.reporting.fixed_cost_ratio);
    let snapshot = break_even(&buckets, &split);

    ApiResponse::ok(
        break_even_to_response(&snapshot),
        "Break-even analysis generated",
    )
}

/// GET /reports/cashflow?year=YYYY
#[axum::debug_handler]
async fn get_cashflow(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> impl IntoResponse {
    let year = resolve_year(&state, query.year);

    let records = match fetch_records(&state, &RecordFilter::for_year(year)).await {
        Ok(r) => r,
        Err(response) => return response,
    };

    let buckets = Aggregator::aggregate_monthly(&records, year);
    let data: Vec<CashFlowEntryResponse> = cash_flow(&buckets)
        .iter()
        .map(cash_flow_entry_to_response)
        .collect();

    ApiResponse::ok(data, "Cash flow report generated")
}

/// GET /reports/ratios?year=YYYY
#[axum::debug_handler]
async fn get_ratios(
    State(state): State<AppState>,
    Query(query): Query<YearQuery>,
) -> impl IntoResponse {
    let year = resolve_year(&state, query.year);

    let records = match fetch_records(&state, &RecordFilter::default()).await {
        Ok(r) => r,
        Err(response) => return response,
    };

    let buckets = Aggregator::aggregate_yearly(&records);

    match FinancialRatios::for_year(&buckets, year) {
        Ok(ratios) => ApiResponse::ok(ratios_to_response(&ratios), "Financial ratios generated"),
        Err(ReportingError::YearNotFound(_)) => ApiFailure::not_found("Year not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_bucket_response_uses_month_label() {
        let mut bucket = MonthlyBucket::new(2024, 1);
        bucket.income = dec!(10000);
        bucket.expenses = dec!(3000);
        bucket.rent = dec!(10000);
        bucket.maintenance = dec!(2000);
        bucket.utilities = dec!(1000);

        let response = monthly_bucket_to_response(&bucket);
        assert_eq!(response.month, "Jan");
        assert_eq!(response.year, 2024);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["month"], "Jan");
        assert_eq!(json["income"], serde_json::json!("10000"));
        assert_eq!(json["deposits"], serde_json::json!("0"));
    }

    #[test]
    fn test_kpi_response_serializes_camel_case() {
        let kpis = KpiSnapshot::for_months(&[]);
        let json = serde_json::to_value(kpi_to_response(&kpis)).unwrap();

        for key in [
            "netIncome",
            "totalIncome",
            "totalExpenses",
            "avgMonthlyIncome",
            "avgMonthlyExpenses",
            "yoyGrowth",
            "profitMargin",
            "expenseRatio",
            "currentRatio",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_cash_flow_response_serializes_camel_case() {
        let entry = CashFlowEntry {
            month: "Mar".to_string(),
            income: dec!(100),
            expenses: dec!(40),
            net_cash_flow: dec!(60),
            cumulative: dec!(60),
        };
        let json = serde_json::to_value(cash_flow_entry_to_response(&entry)).unwrap();
        assert_eq!(json["month"], "Mar");
        assert!(json.get("netCashFlow").is_some());
        assert!(json.get("cumulative").is_some());
    }

    #[test]
    fn test_period_parsing() {
        assert_eq!(ReportPeriod::parse("monthly"), Some(ReportPeriod::Monthly));
        assert_eq!(ReportPeriod::parse("yearly"), Some(ReportPeriod::Yearly));
        assert_eq!(ReportPeriod::parse("weekly"), None);
    }
}
