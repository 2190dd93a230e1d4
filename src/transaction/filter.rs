//! The predicate used to narrow down the transactions shown on the dashboard.

use time::OffsetDateTime;

use crate::transaction::{normalize::Transaction, record::TransactionType};

/// A set of optional constraints on transactions.
///
/// Every constraint that is set must hold for a transaction to match, and a
/// constraint that is `None` matches everything. The default filter therefore
/// matches every transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Only match transactions of this type.
    pub transaction_type: Option<TransactionType>,
    /// Only match transactions in this state.
    pub state: Option<String>,
    /// Only match transactions in this industry.
    pub industry: Option<String>,
    /// Only match transactions for this account.
    pub account: Option<String>,
    /// Only match transactions at or after this point in time.
    pub start_date: Option<OffsetDateTime>,
    /// Only match transactions at or before this point in time.
    pub end_date: Option<OffsetDateTime>,
}

impl TransactionFilter {
    /// Whether no constraint is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Whether `transaction` satisfies every constraint that is set.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let type_matches = self
            .transaction_type
            .is_none_or(|transaction_type| transaction.transaction_type == transaction_type);
        let state_matches = matches_tag(self.state.as_deref(), &transaction.state);
        let industry_matches = matches_tag(self.industry.as_deref(), &transaction.industry);
        let account_matches = matches_tag(self.account.as_deref(), &transaction.account);
        let start_matches = self
            .start_date
            .is_none_or(|start_date| transaction.date >= start_date);
        let end_matches = self
            .end_date
            .is_none_or(|end_date| transaction.date <= end_date);

        type_matches
            && state_matches
            && industry_matches
            && account_matches
            && start_matches
            && end_matches
    }
}

#[inline]
fn matches_tag(constraint: Option<&str>, value: &str) -> bool {
    constraint.is_none_or(|constraint| constraint == value)
}

/// Get the transactions that match `filter`, in their original order.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|transaction| filter.matches(transaction))
        .collect()
}

#[cfg(test)]
mod filter_tests {
    use rust_decimal::Decimal;
    use time::{OffsetDateTime, macros::datetime};

    use crate::transaction::{
        filter::{TransactionFilter, filter_transactions},
        normalize::Transaction,
        record::TransactionType,
    };

    fn transaction(
        date: OffsetDateTime,
        transaction_type: TransactionType,
        state: &str,
        industry: &str,
        account: &str,
    ) -> Transaction {
        Transaction {
            date,
            amount: Decimal::new(1000, 2),
            transaction_type,
            currency: "brl".to_owned(),
            account: account.to_owned(),
            industry: industry.to_owned(),
            state: state.to_owned(),
        }
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            transaction(
                datetime!(2024-01-15 10:00 UTC),
                TransactionType::Deposit,
                "SP",
                "Retail",
                "Acme",
            ),
            transaction(
                datetime!(2024-01-20 12:00 UTC),
                TransactionType::Withdraw,
                "SP",
                "Food",
                "Acme",
            ),
            transaction(
                datetime!(2024-02-03 08:30 UTC),
                TransactionType::Deposit,
                "RJ",
                "Retail",
                "Globex",
            ),
            transaction(
                datetime!(2024-03-10 17:45 UTC),
                TransactionType::Withdraw,
                "MG",
                "Oil and Gas",
                "Globex",
            ),
            transaction(
                datetime!(2024-03-31 23:59 UTC),
                TransactionType::Deposit,
                "SP",
                "Food",
                "Initech",
            ),
        ]
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let transactions = sample_transactions();
        let filter = TransactionFilter::default();

        let got = filter_transactions(&transactions, &filter);

        assert!(filter.is_empty());
        assert_eq!(got, transactions.iter().collect::<Vec<_>>());
    }

    #[test]
    fn filters_by_type() {
        let transactions = sample_transactions();
        let filter = TransactionFilter {
            transaction_type: Some(TransactionType::Withdraw),
            ..Default::default()
        };

        let got = filter_transactions(&transactions, &filter);

        assert_eq!(got, vec![&transactions[1], &transactions[3]]);
    }

    #[test]
    fn filters_by_tags() {
        let transactions = sample_transactions();

        let by_state = TransactionFilter {
            state: Some("SP".to_owned()),
            ..Default::default()
        };
        let by_industry = TransactionFilter {
            industry: Some("Retail".to_owned()),
            ..Default::default()
        };
        let by_account = TransactionFilter {
            account: Some("Globex".to_owned()),
            ..Default::default()
        };

        assert_eq!(
            filter_transactions(&transactions, &by_state),
            vec![&transactions[0], &transactions[1], &transactions[4]]
        );
        assert_eq!(
            filter_transactions(&transactions, &by_industry),
            vec![&transactions[0], &transactions[2]]
        );
        assert_eq!(
            filter_transactions(&transactions, &by_account),
            vec![&transactions[2], &transactions[3]]
        );
    }

    #[test]
    fn tag_match_is_exact() {
        let transactions = sample_transactions();
        let filter = TransactionFilter {
            state: Some("sp".to_owned()),
            ..Default::default()
        };

        assert!(filter_transactions(&transactions, &filter).is_empty());
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let transactions = sample_transactions();
        let filter = TransactionFilter {
            start_date: Some(datetime!(2024-01-20 12:00 UTC)),
            end_date: Some(datetime!(2024-03-10 17:45 UTC)),
            ..Default::default()
        };

        let got = filter_transactions(&transactions, &filter);

        assert_eq!(
            got,
            vec![&transactions[1], &transactions[2], &transactions[3]]
        );
    }

    #[test]
    fn start_date_alone_is_a_lower_bound() {
        let transactions = sample_transactions();
        let filter = TransactionFilter {
            start_date: Some(datetime!(2024-03-01 00:00 UTC)),
            ..Default::default()
        };

        let got = filter_transactions(&transactions, &filter);

        assert_eq!(got, vec![&transactions[3], &transactions[4]]);
    }

    #[test]
    fn end_date_alone_is_an_upper_bound() {
        let transactions = sample_transactions();
        let filter = TransactionFilter {
            end_date: Some(datetime!(2024-01-31 00:00 UTC)),
            ..Default::default()
        };

        let got = filter_transactions(&transactions, &filter);

        assert_eq!(got, vec![&transactions[0], &transactions[1]]);
    }

    #[test]
    fn constraints_are_combined_with_and() {
        let transactions = sample_transactions();
        let filter = TransactionFilter {
            transaction_type: Some(TransactionType::Deposit),
            state: Some("SP".to_owned()),
            industry: Some("Food".to_owned()),
            ..Default::default()
        };

        let got = filter_transactions(&transactions, &filter);

        assert_eq!(got, vec![&transactions[4]]);

        // Same result as intersecting the single-constraint filters.
        let singles = [
            TransactionFilter {
                transaction_type: filter.transaction_type,
                ..Default::default()
            },
            TransactionFilter {
                state: filter.state.clone(),
                ..Default::default()
            },
            TransactionFilter {
                industry: filter.industry.clone(),
                ..Default::default()
            },
        ];
        let intersection: Vec<_> = transactions
            .iter()
            .filter(|transaction| singles.iter().all(|single| single.matches(transaction)))
            .collect();
        assert_eq!(got, intersection);
    }

    #[test]
    fn no_matches_is_an_empty_list() {
        let transactions = sample_transactions();
        let filter = TransactionFilter {
            state: Some("RJ".to_owned()),
            transaction_type: Some(TransactionType::Withdraw),
            ..Default::default()
        };

        assert!(filter_transactions(&transactions, &filter).is_empty());
    }

    #[test]
    fn inverted_date_range_matches_nothing() {
        let transactions = sample_transactions();
        let filter = TransactionFilter {
            start_date: Some(datetime!(2024-03-01 00:00 UTC)),
            end_date: Some(datetime!(2024-02-01 00:00 UTC)),
            ..Default::default()
        };

        assert!(filter_transactions(&transactions, &filter).is_empty());
    }
}
