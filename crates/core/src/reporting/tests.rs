//! Property-based and unit tests for the reporting engine.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregate::Aggregator;
use super::breakeven::{CostSplit, break_even};
use super::cashflow::cash_flow;
use super::error::ReportingError;
use super::ratios::{current_ratio, expense_ratio, profit_margin, yoy_growth};
use super::types::{FinancialRatios, KpiSnapshot, MonthlyBucket, YearlyBucket, month_label};
use crate::ledger::{LedgerRecord, RecordType};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn record(
    amount: Decimal,
    record_type: RecordType,
    category: Option<&str>,
    recorded_on: NaiveDate,
) -> LedgerRecord {
    LedgerRecord::classify(amount, record_type, category, recorded_on)
}

fn month_bucket(month: u32, income: Decimal, expenses: Decimal) -> MonthlyBucket {
    let mut bucket = MonthlyBucket::new(2024, month);
    bucket.income = income;
    bucket.expenses = expenses;
    bucket
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn category_label_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop::sample::select(vec![
        None,
        Some("Maintenance"),
        Some("Supplies"),
        Some("Utilities"),
        Some("HVAC"),
        Some("Security"),
        Some("Cleaning"),
        Some("Landscaping"),
    ])
}

proptest! {
    /// Property 1: Classification completeness. Every non-expense record
    /// adds exactly its amount to income; every expense record adds exactly
    /// its amount to expenses, whatever its category says.
    #[test]
    fn test_classification_completeness(
        entries in prop::collection::vec(
            (amount_strategy(), 0usize..5, category_label_strategy(), 1u32..13, 1u32..28),
            0..40,
        )
    ) {
        let records: Vec<LedgerRecord> = entries
            .iter()
            .map(|(amount, type_idx, category, month, day)| {
                record(
                    *amount,
                    RecordType::ALL[*type_idx],
                    *category,
                    date(2024, *month, *day),
                )
            })
            .collect();

        let buckets = Aggregator::aggregate_monthly(&records, 2024);
        let income: Decimal = buckets.iter().map(|b| b.income).sum();
        let expenses: Decimal = buckets.iter().map(|b| b.expenses).sum();

        let expected_income: Decimal = records
            .iter()
            .filter(|r| r.is_income())
            .map(|r| r.amount)
            .sum();
        let expected_expenses: Decimal = records
            .iter()
            .filter(|r| !r.is_income())
            .map(|r| r.amount)
            .sum();

        prop_assert_eq!(income, expected_income);
        prop_assert_eq!(expenses, expected_expenses);
    }

    /// Property 2: Category sub-bucket containment. Sub-buckets only cover
    /// the known labels, so their sum never exceeds total expenses.
    #[test]
    fn test_category_sub_buckets_contained_in_expenses(
        entries in prop::collection::vec(
            (amount_strategy(), category_label_strategy(), 1u32..13, 1u32..28),
            1..40,
        )
    ) {
        let records: Vec<LedgerRecord> = entries
            .iter()
            .map(|(amount, category, month, day)| {
                record(*amount, RecordType::Expense, *category, date(2024, *month, *day))
            })
            .collect();

        for bucket in Aggregator::aggregate_monthly(&records, 2024) {
            let sub_total = bucket.maintenance
                + bucket.supplies
                + bucket.utilities
                + bucket.hvac
                + bucket.security;
            prop_assert!(sub_total <= bucket.expenses);
        }
    }

    /// Property 3: Zero-division law. Ratios with a zero denominator are
    /// exactly zero, never an error.
    #[test]
    fn test_zero_income_zeroes_margin_and_expense_ratio(expenses in amount_strategy()) {
        prop_assert_eq!(profit_margin(Decimal::ZERO, expenses), Decimal::ZERO);
        prop_assert_eq!(expense_ratio(Decimal::ZERO, expenses), Decimal::ZERO);
    }

    /// Property 3 (continued): zero expenses zero out the current ratio.
    #[test]
    fn test_zero_expenses_zeroes_current_ratio(income in amount_strategy()) {
        prop_assert_eq!(current_ratio(income, Decimal::ZERO), Decimal::ZERO);
    }

    /// Property 4: Cumulative cash flow is the prefix sum of net cash flow
    /// over the ordered bucket sequence.
    #[test]
    fn test_cash_flow_cumulative_is_prefix_sum(
        months in prop::collection::vec((amount_strategy(), amount_strategy()), 1..13)
    ) {
        let buckets: Vec<MonthlyBucket> = months
            .iter()
            .enumerate()
            .map(|(i, (income, expenses))| month_bucket(i as u32 + 1, *income, *expenses))
            .collect();

        let entries = cash_flow(&buckets);
        prop_assert_eq!(entries.len(), buckets.len());

        let mut expected = Decimal::ZERO;
        for (entry, bucket) in entries.iter().zip(&buckets) {
            let net = bucket.income - bucket.expenses;
            expected += net;
            prop_assert_eq!(entry.net_cash_flow, net);
            prop_assert_eq!(entry.cumulative, expected);
        }
    }

    /// Property 5: Break-even split invariant. Fixed plus variable costs
    /// reconstruct average monthly expenses exactly.
    #[test]
    fn test_break_even_split_sums_to_average(
        months in prop::collection::vec((amount_strategy(), amount_strategy()), 1..13)
    ) {
        let buckets: Vec<MonthlyBucket> = months
            .iter()
            .enumerate()
            .map(|(i, (income, expenses))| month_bucket(i as u32 + 1, *income, *expenses))
            .collect();

        let snapshot = break_even(&buckets, &CostSplit::default());
        prop_assert_eq!(
            snapshot.fixed_costs + snapshot.variable_costs,
            snapshot.avg_monthly_expenses
        );
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "Jan")]
    #[case(2, "Feb")]
    #[case(6, "Jun")]
    #[case(9, "Sep")]
    #[case(12, "Dec")]
    fn test_month_labels(#[case] month: u32, #[case] label: &str) {
        assert_eq!(month_label(month), label);
    }

    #[test]
    fn test_worked_example_single_month() {
        let records = vec![
            record(dec!(10000), RecordType::Rent, None, date(2024, 1, 15)),
            record(
                dec!(2000),
                RecordType::Expense,
                Some("Maintenance"),
                date(2024, 1, 20),
            ),
            record(
                dec!(1000),
                RecordType::Expense,
                Some("Utilities"),
                date(2024, 1, 25),
            ),
        ];

        let buckets = Aggregator::aggregate_monthly(&records, 2024);
        assert_eq!(buckets.len(), 1);

        let bucket = &buckets[0];
        assert_eq!(bucket.month_label(), "Jan");
        assert_eq!(bucket.year, 2024);
        assert_eq!(bucket.income, dec!(10000));
        assert_eq!(bucket.expenses, dec!(3000));
        assert_eq!(bucket.rent, dec!(10000));
        assert_eq!(bucket.deposits, dec!(0));
        assert_eq!(bucket.maintenance, dec!(2000));
        assert_eq!(bucket.utilities, dec!(1000));
        assert_eq!(bucket.supplies, dec!(0));
        assert_eq!(bucket.hvac, dec!(0));
        assert_eq!(bucket.security, dec!(0));

        assert_eq!(profit_margin(bucket.income, bucket.expenses), dec!(70));
    }

    #[test]
    fn test_worked_example_break_even() {
        let buckets = vec![month_bucket(1, dec!(10000), dec!(3000))];
        let snapshot = break_even(&buckets, &CostSplit::default());

        assert_eq!(snapshot.avg_monthly_income, dec!(10000));
        assert_eq!(snapshot.avg_monthly_expenses, dec!(3000));
        assert_eq!(snapshot.fixed_costs, dec!(1800));
        assert_eq!(snapshot.variable_costs, dec!(1200));
        assert_eq!(snapshot.contribution_margin, dec!(8800));
        assert_eq!(snapshot.break_even_units.round_dp(4), dec!(0.2045));
        assert_eq!(snapshot.break_even_revenue.round_dp(2), dec!(2045.45));
        assert_eq!(snapshot.margin_of_safety.round_dp(2), dec!(7954.55));
    }

    #[test]
    fn test_empty_months_are_omitted_and_sorted() {
        let records = vec![
            record(dec!(300), RecordType::Rent, None, date(2024, 11, 2)),
            record(dec!(100), RecordType::Rent, None, date(2024, 2, 9)),
            record(dec!(200), RecordType::Rent, None, date(2024, 7, 1)),
        ];

        let buckets = Aggregator::aggregate_monthly(&records, 2024);
        let months: Vec<u32> = buckets.iter().map(|b| b.month).collect();
        assert_eq!(months, vec![2, 7, 11]);
    }

    #[test]
    fn test_monthly_aggregation_filters_to_requested_year() {
        let records = vec![
            record(dec!(100), RecordType::Rent, None, date(2023, 12, 31)),
            record(dec!(200), RecordType::Rent, None, date(2024, 1, 1)),
            record(dec!(400), RecordType::Rent, None, date(2025, 1, 1)),
        ];

        let buckets = Aggregator::aggregate_monthly(&records, 2024);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].income, dec!(200));
    }

    #[test]
    fn test_yearly_aggregation_spans_all_years_sorted() {
        let records = vec![
            record(dec!(50), RecordType::Expense, None, date(2025, 3, 1)),
            record(dec!(100), RecordType::Rent, None, date(2023, 6, 1)),
            record(dec!(200), RecordType::Deposit, None, date(2024, 6, 1)),
        ];

        let buckets = Aggregator::aggregate_yearly(&records);
        let years: Vec<i32> = buckets.iter().map(|b| b.year).collect();
        assert_eq!(years, vec![2023, 2024, 2025]);
        assert_eq!(buckets[0].net_income(), dec!(100));
        assert_eq!(buckets[2].net_income(), dec!(-50));
    }

    #[test]
    fn test_empty_record_set_is_valid_output() {
        assert!(Aggregator::aggregate_monthly(&[], 2024).is_empty());
        assert!(Aggregator::aggregate_yearly(&[]).is_empty());
        assert!(cash_flow(&[]).is_empty());

        let breakdown = Aggregator::category_breakdown(&[]);
        assert!(breakdown.income.is_empty());
        assert!(breakdown.expenses.is_empty());
    }

    #[test]
    fn test_category_breakdown_folds_unknown_to_other() {
        let records = vec![
            record(dec!(500), RecordType::Rent, None, date(2024, 1, 1)),
            record(dec!(50), RecordType::LateFees, None, date(2024, 1, 2)),
            record(
                dec!(80),
                RecordType::Expense,
                Some("Maintenance"),
                date(2024, 1, 3),
            ),
            record(
                dec!(20),
                RecordType::Expense,
                Some("Gardening"),
                date(2024, 1, 4),
            ),
            record(dec!(10), RecordType::Expense, None, date(2024, 1, 5)),
        ];

        let breakdown = Aggregator::category_breakdown(&records);

        assert_eq!(breakdown.income.get("Rent"), Some(&dec!(500)));
        assert_eq!(breakdown.income.get("LateFees"), Some(&dec!(50)));
        assert_eq!(breakdown.income.len(), 2);

        assert_eq!(breakdown.expenses.get("Maintenance"), Some(&dec!(80)));
        assert_eq!(breakdown.expenses.get("Other"), Some(&dec!(30)));
        assert_eq!(breakdown.expenses.len(), 2);
    }

    #[test]
    fn test_monthly_kpi_previous_is_prior_bucket_in_sequence() {
        // The previous period is the bucket directly before the last one,
        // not the same month one year earlier.
        let buckets = vec![
            month_bucket(1, dec!(1000), dec!(400)),
            month_bucket(2, dec!(2000), dec!(500)),
            month_bucket(3, dec!(3000), dec!(600)),
        ];

        let kpis = KpiSnapshot::for_months(&buckets);

        // Growth of March over February: (3000 - 2000) / 2000 * 100.
        assert_eq!(kpis.yoy_growth, dec!(50));
        // Ratios come from the last bucket only.
        assert_eq!(kpis.profit_margin, dec!(80));
        assert_eq!(kpis.expense_ratio, dec!(20));
        assert_eq!(kpis.current_ratio, dec!(5));
        // Totals and averages span all buckets.
        assert_eq!(kpis.total_income, dec!(6000));
        assert_eq!(kpis.total_expenses, dec!(1500));
        assert_eq!(kpis.net_income, dec!(4500));
        assert_eq!(kpis.avg_monthly_income, dec!(2000));
        assert_eq!(kpis.avg_monthly_expenses, dec!(500));
    }

    #[test]
    fn test_monthly_kpi_single_bucket_has_no_previous() {
        let buckets = vec![month_bucket(5, dec!(1000), dec!(100))];
        let kpis = KpiSnapshot::for_months(&buckets);
        assert_eq!(kpis.yoy_growth, dec!(0));
    }

    #[test]
    fn test_monthly_kpi_empty_is_all_zero() {
        let kpis = KpiSnapshot::for_months(&[]);
        assert_eq!(kpis.net_income, dec!(0));
        assert_eq!(kpis.total_income, dec!(0));
        assert_eq!(kpis.avg_monthly_income, dec!(0));
        assert_eq!(kpis.profit_margin, dec!(0));
        assert_eq!(kpis.current_ratio, dec!(0));
    }

    #[test]
    fn test_yearly_kpi_divides_by_twelve_not_bucket_count() {
        // One month of activity still averages over the full year.
        let buckets = vec![YearlyBucket {
            year: 2024,
            income: dec!(12000),
            expenses: dec!(2400),
        }];

        let kpis = KpiSnapshot::for_year(&buckets, 2024);
        assert_eq!(kpis.avg_monthly_income, dec!(1000));
        assert_eq!(kpis.avg_monthly_expenses, dec!(200));
    }

    #[test]
    fn test_yearly_kpi_previous_is_prior_calendar_year() {
        let buckets = vec![
            YearlyBucket {
                year: 2023,
                income: dec!(8000),
                expenses: dec!(1000),
            },
            YearlyBucket {
                year: 2024,
                income: dec!(10000),
                expenses: dec!(2000),
            },
        ];

        let kpis = KpiSnapshot::for_year(&buckets, 2024);
        assert_eq!(kpis.yoy_growth, dec!(25));
        assert_eq!(kpis.net_income, dec!(8000));
    }

    #[test]
    fn test_yearly_kpi_absent_year_is_all_zero() {
        let buckets = vec![YearlyBucket {
            year: 2022,
            income: dec!(500),
            expenses: dec!(100),
        }];

        let kpis = KpiSnapshot::for_year(&buckets, 2024);
        assert_eq!(kpis.total_income, dec!(0));
        assert_eq!(kpis.yoy_growth, dec!(0));
        assert_eq!(kpis.profit_margin, dec!(0));
    }

    #[test]
    fn test_financial_ratios_absent_year_is_not_found() {
        let result = FinancialRatios::for_year(&[], 2024);
        assert_eq!(result, Err(ReportingError::YearNotFound(2024)));
    }

    #[test]
    fn test_financial_ratios_aliases_match_their_sources() {
        let buckets = vec![YearlyBucket {
            year: 2024,
            income: dec!(10000),
            expenses: dec!(4000),
        }];

        let ratios = FinancialRatios::for_year(&buckets, 2024).unwrap();
        assert_eq!(ratios.profit_margin, dec!(60));
        assert_eq!(ratios.expense_ratio, dec!(40));
        assert_eq!(ratios.debt_to_income, ratios.expense_ratio);
        assert_eq!(ratios.return_on_revenue, ratios.profit_margin);
        assert_eq!(ratios.current_ratio, dec!(2.5));
        assert_eq!(ratios.net_income, dec!(6000));
    }

    #[test]
    fn test_yoy_growth_requires_positive_previous_income() {
        assert_eq!(yoy_growth(dec!(100), None), dec!(0));
        assert_eq!(yoy_growth(dec!(100), Some(dec!(0))), dec!(0));
        assert_eq!(yoy_growth(dec!(150), Some(dec!(100))), dec!(50));
        assert_eq!(yoy_growth(dec!(50), Some(dec!(100))), dec!(-50));
    }

    #[test]
    fn test_break_even_with_no_buckets_is_all_zero() {
        let snapshot = break_even(&[], &CostSplit::default());
        assert_eq!(snapshot.avg_monthly_income, dec!(0));
        assert_eq!(snapshot.fixed_costs, dec!(0));
        assert_eq!(snapshot.break_even_units, dec!(0));
        assert_eq!(snapshot.margin_of_safety_percent, dec!(0));
    }

    #[test]
    fn test_break_even_honors_injected_split() {
        let buckets = vec![month_bucket(1, dec!(10000), dec!(3000))];
        let snapshot = break_even(&buckets, &CostSplit::new(dec!(0.5)));

        assert_eq!(snapshot.fixed_costs, dec!(1500));
        assert_eq!(snapshot.variable_costs, dec!(1500));
        assert_eq!(snapshot.contribution_margin, dec!(8500));
    }

    #[test]
    fn test_cash_flow_reordering_changes_cumulative() {
        let forward = vec![
            month_bucket(1, dec!(100), dec!(0)),
            month_bucket(2, dec!(0), dec!(30)),
        ];
        let reversed: Vec<MonthlyBucket> = forward.iter().rev().cloned().collect();

        let a = cash_flow(&forward);
        let b = cash_flow(&reversed);
        assert_eq!(a[0].cumulative, dec!(100));
        assert_eq!(b[0].cumulative, dec!(-30));
        assert_eq!(a[1].cumulative, b[1].cumulative);
    }
}
