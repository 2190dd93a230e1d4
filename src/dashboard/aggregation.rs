//! Transaction data aggregation for the summary cards, charts and filter controls.
//!
//! Provides functions to total transactions by direction, group them by state
//! and by month, and collect the distinct values used to populate the filter
//! form.

use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;
use time_tz::Tz;

use crate::{
    timezone::local_date,
    transaction::{Transaction, TransactionType},
};

/// A zero amount carrying the same two decimal places as normalized amounts.
fn zero_amount() -> Decimal {
    Decimal::new(0, 2)
}

/// The totals shown in the summary cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    /// The sum of all deposits.
    pub inflow: Decimal,
    /// The sum of all withdrawals.
    pub outflow: Decimal,
    /// Inflow minus outflow.
    pub net: Decimal,
    /// The number of pending transactions.
    ///
    /// Always zero since records carry no pending state.
    pub pending: u64,
}

/// The deposit and withdrawal sums for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateBreakdown {
    /// The state the sums belong to.
    pub state: String,
    /// The sum of deposits in this state.
    pub deposit: Decimal,
    /// The sum of withdrawals in this state.
    pub withdraw: Decimal,
}

/// The total amount moved in one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotal {
    /// The month formatted as "YYYY-MM".
    pub label: String,
    /// The sum of all amounts in the month, regardless of direction.
    pub total: Decimal,
}

/// The values offered by the filter form's drop-downs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Distinct states, in order of first appearance.
    pub states: Vec<String>,
    /// Distinct industries, in order of first appearance.
    pub industries: Vec<String>,
    /// Distinct accounts, in order of first appearance.
    pub accounts: Vec<String>,
}

/// Sums deposits and withdrawals.
pub(crate) fn summarize_totals(transactions: &[&Transaction]) -> Totals {
    let mut inflow = zero_amount();
    let mut outflow = zero_amount();

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Deposit => inflow += transaction.amount,
            TransactionType::Withdraw => outflow += transaction.amount,
        }
    }

    Totals {
        inflow,
        outflow,
        net: inflow - outflow,
        pending: 0,
    }
}

/// Groups transactions by state and sums deposits and withdrawals per state.
///
/// # Returns
/// One entry per distinct state, in order of the state's first appearance.
pub(crate) fn breakdown_by_state(transactions: &[&Transaction]) -> Vec<StateBreakdown> {
    let mut breakdown: Vec<StateBreakdown> = Vec::new();
    let mut index_by_state: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions {
        let index = *index_by_state
            .entry(transaction.state.as_str())
            .or_insert_with(|| {
                breakdown.push(StateBreakdown {
                    state: transaction.state.clone(),
                    deposit: zero_amount(),
                    withdraw: zero_amount(),
                });
                breakdown.len() - 1
            });

        let entry = &mut breakdown[index];
        match transaction.transaction_type {
            TransactionType::Deposit => entry.deposit += transaction.amount,
            TransactionType::Withdraw => entry.withdraw += transaction.amount,
        }
    }

    breakdown
}

/// Formats the month of `transaction` in the local timezone as "YYYY-MM".
pub(crate) fn month_label(transaction: &Transaction, local_timezone: &Tz) -> String {
    let local_date = local_date(transaction.date, local_timezone);

    format!("{:04}-{:02}", local_date.year(), u8::from(local_date.month()))
}

/// Aggregates transaction amounts by month.
///
/// Deposits and withdrawals both add to the total, so the result is the
/// amount of money moved rather than the net change.
///
/// # Returns
/// The monthly totals sorted by month, oldest first.
pub(crate) fn monthly_totals(
    transactions: &[&Transaction],
    local_timezone: &Tz,
) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();

    for transaction in transactions {
        *totals
            .entry(month_label(transaction, local_timezone))
            .or_insert_with(zero_amount) += transaction.amount;
    }

    totals
        .into_iter()
        .map(|(label, total)| MonthlyTotal { label, total })
        .collect()
}

/// Collects the distinct states, industries and accounts in `transactions`.
///
/// This should be given the full list of transactions rather than the
/// filtered list so that every value stays selectable.
pub(crate) fn filter_options(transactions: &[Transaction]) -> FilterOptions {
    FilterOptions {
        states: distinct(transactions.iter().map(|t| t.state.as_str())),
        industries: distinct(transactions.iter().map(|t| t.industry.as_str())),
        accounts: distinct(transactions.iter().map(|t| t.account.as_str())),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();

    values
        .filter(|value| seen.insert(*value))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use time::{OffsetDateTime, macros::datetime};
    use time_tz::Tz;

    use crate::{
        dashboard::aggregation::{
            FilterOptions, MonthlyTotal, StateBreakdown, Totals, breakdown_by_state,
            filter_options, month_label, monthly_totals, summarize_totals,
        },
        timezone::get_local_timezone,
        transaction::{Transaction, TransactionType},
    };

    fn utc() -> &'static Tz {
        get_local_timezone("Etc/UTC").unwrap()
    }

    fn create_test_transaction(
        amount: Decimal,
        date: OffsetDateTime,
        transaction_type: TransactionType,
        state: &str,
    ) -> Transaction {
        Transaction {
            date,
            amount,
            transaction_type,
            currency: "brl".to_owned(),
            account: format!("{state} account"),
            industry: "Retail".to_owned(),
            state: state.to_owned(),
        }
    }

    fn scenario_a() -> Vec<Transaction> {
        vec![
            create_test_transaction(
                Decimal::new(10000, 2),
                datetime!(2024-01-15 00:00 UTC),
                TransactionType::Deposit,
                "SP",
            ),
            create_test_transaction(
                Decimal::new(5000, 2),
                datetime!(2024-01-20 00:00 UTC),
                TransactionType::Withdraw,
                "SP",
            ),
        ]
    }

    #[test]
    fn totals_for_deposit_and_withdrawal() {
        let transactions = scenario_a();
        let transactions: Vec<_> = transactions.iter().collect();

        let got = summarize_totals(&transactions);

        assert_eq!(
            got,
            Totals {
                inflow: Decimal::new(10000, 2),
                outflow: Decimal::new(5000, 2),
                net: Decimal::new(5000, 2),
                pending: 0,
            }
        );
        assert_eq!(got.inflow.to_string(), "100.00");
        assert_eq!(got.net.to_string(), "50.00");
    }

    #[test]
    fn totals_for_no_transactions_are_zero() {
        let got = summarize_totals(&[]);

        assert_eq!(got.inflow, Decimal::ZERO);
        assert_eq!(got.outflow, Decimal::ZERO);
        assert_eq!(got.net, Decimal::ZERO);
        assert_eq!(got.pending, 0);
        assert_eq!(got.net.to_string(), "0.00");
    }

    #[test]
    fn net_is_inflow_minus_outflow() {
        let transactions: Vec<_> = (1..=40)
            .map(|i| {
                let transaction_type = if i % 3 == 0 {
                    TransactionType::Deposit
                } else {
                    TransactionType::Withdraw
                };
                create_test_transaction(
                    Decimal::new(i * 1234, 2),
                    datetime!(2024-01-01 00:00 UTC),
                    transaction_type,
                    "SP",
                )
            })
            .collect();
        let refs: Vec<_> = transactions.iter().collect();

        let got = summarize_totals(&refs);

        let deposits: Decimal = transactions
            .iter()
            .filter(|t| t.transaction_type == TransactionType::Deposit)
            .map(|t| t.amount)
            .sum();
        let withdrawals: Decimal = transactions
            .iter()
            .filter(|t| t.transaction_type == TransactionType::Withdraw)
            .map(|t| t.amount)
            .sum();
        assert_eq!(got.inflow, deposits);
        assert_eq!(got.outflow, withdrawals);
        assert_eq!(got.inflow - got.outflow, got.net);
        assert!(got.net < Decimal::ZERO);
    }

    #[test]
    fn breakdown_sums_each_direction_per_state() {
        let transactions = scenario_a();
        let transactions: Vec<_> = transactions.iter().collect();

        let got = breakdown_by_state(&transactions);

        assert_eq!(
            got,
            vec![StateBreakdown {
                state: "SP".to_owned(),
                deposit: Decimal::new(10000, 2),
                withdraw: Decimal::new(5000, 2),
            }]
        );
    }

    #[test]
    fn breakdown_has_one_entry_per_state_in_order_of_appearance() {
        let date = datetime!(2024-01-01 00:00 UTC);
        let transactions = vec![
            create_test_transaction(Decimal::new(100, 2), date, TransactionType::Withdraw, "RJ"),
            create_test_transaction(Decimal::new(200, 2), date, TransactionType::Deposit, "SP"),
            create_test_transaction(Decimal::new(300, 2), date, TransactionType::Withdraw, "RJ"),
            create_test_transaction(Decimal::new(400, 2), date, TransactionType::Deposit, "MG"),
        ];
        let transactions: Vec<_> = transactions.iter().collect();

        let got = breakdown_by_state(&transactions);

        assert_eq!(
            got,
            vec![
                StateBreakdown {
                    state: "RJ".to_owned(),
                    deposit: Decimal::ZERO,
                    withdraw: Decimal::new(400, 2),
                },
                StateBreakdown {
                    state: "SP".to_owned(),
                    deposit: Decimal::new(200, 2),
                    withdraw: Decimal::ZERO,
                },
                StateBreakdown {
                    state: "MG".to_owned(),
                    deposit: Decimal::new(400, 2),
                    withdraw: Decimal::ZERO,
                },
            ]
        );
    }

    #[test]
    fn breakdown_of_nothing_is_empty() {
        assert!(breakdown_by_state(&[]).is_empty());
    }

    #[test]
    fn monthly_totals_sum_both_directions_sorted_by_month() {
        let transactions = vec![
            create_test_transaction(
                Decimal::new(3000, 2),
                datetime!(2024-03-10 00:00 UTC),
                TransactionType::Deposit,
                "SP",
            ),
            create_test_transaction(
                Decimal::new(10000, 2),
                datetime!(2023-12-31 12:00 UTC),
                TransactionType::Withdraw,
                "SP",
            ),
            create_test_transaction(
                Decimal::new(10000, 2),
                datetime!(2024-01-15 00:00 UTC),
                TransactionType::Deposit,
                "SP",
            ),
            create_test_transaction(
                Decimal::new(5000, 2),
                datetime!(2024-01-20 00:00 UTC),
                TransactionType::Withdraw,
                "RJ",
            ),
        ];
        let transactions: Vec<_> = transactions.iter().collect();

        let got = monthly_totals(&transactions, utc());

        assert_eq!(
            got,
            vec![
                MonthlyTotal {
                    label: "2023-12".to_owned(),
                    total: Decimal::new(10000, 2),
                },
                MonthlyTotal {
                    label: "2024-01".to_owned(),
                    total: Decimal::new(15000, 2),
                },
                MonthlyTotal {
                    label: "2024-03".to_owned(),
                    total: Decimal::new(3000, 2),
                },
            ]
        );
        assert!(got.windows(2).all(|pair| pair[0].label <= pair[1].label));
    }

    #[test]
    fn month_label_uses_local_timezone() {
        let transaction = create_test_transaction(
            Decimal::new(100, 2),
            datetime!(2024-02-01 02:00 UTC),
            TransactionType::Deposit,
            "SP",
        );
        let sao_paulo = get_local_timezone("America/Sao_Paulo").unwrap();

        assert_eq!(month_label(&transaction, utc()), "2024-02");
        assert_eq!(month_label(&transaction, sao_paulo), "2024-01");
    }

    #[test]
    fn month_labels_follow_daylight_saving() {
        let transactions = [
            create_test_transaction(
                Decimal::new(100, 2),
                datetime!(2024-01-31 23:30 UTC),
                TransactionType::Deposit,
                "SP",
            ),
            create_test_transaction(
                Decimal::new(100, 2),
                datetime!(2024-07-31 23:30 UTC),
                TransactionType::Deposit,
                "SP",
            ),
        ];
        let transactions: Vec<_> = transactions.iter().collect();
        let london = get_local_timezone("Europe/London").unwrap();

        let labels: Vec<_> = monthly_totals(&transactions, london)
            .into_iter()
            .map(|total| total.label)
            .collect();

        assert_eq!(labels, ["2024-01", "2024-08"]);
    }

    #[test]
    fn month_label_is_zero_padded() {
        let transaction = create_test_transaction(
            Decimal::new(100, 2),
            datetime!(0999-07-04 00:00 UTC),
            TransactionType::Deposit,
            "SP",
        );

        assert_eq!(month_label(&transaction, utc()), "0999-07");
    }

    #[test]
    fn filter_options_are_distinct_in_order_of_appearance() {
        let date = datetime!(2024-01-01 00:00 UTC);
        let mut transactions = vec![
            create_test_transaction(Decimal::ONE, date, TransactionType::Deposit, "SP"),
            create_test_transaction(Decimal::ONE, date, TransactionType::Deposit, "RJ"),
            create_test_transaction(Decimal::ONE, date, TransactionType::Withdraw, "SP"),
        ];
        transactions[1].industry = "Food".to_owned();

        let got = filter_options(&transactions);

        assert_eq!(
            got,
            FilterOptions {
                states: vec!["SP".to_owned(), "RJ".to_owned()],
                industries: vec!["Retail".to_owned(), "Food".to_owned()],
                accounts: vec!["SP account".to_owned(), "RJ account".to_owned()],
            }
        );
    }

    #[test]
    fn filter_options_for_no_transactions_are_empty() {
        assert_eq!(filter_options(&[]), FilterOptions::default());
    }
}
