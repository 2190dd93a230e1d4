//! The transaction records as they are supplied by the fixture.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money flowing into an account.
    Deposit,
    /// Money flowing out of an account.
    Withdraw,
}

impl TransactionType {
    /// The value used for this type in the fixture and in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdraw => "withdraw",
        }
    }

    /// Parse the value used in the fixture and in query strings.
    ///
    /// Returns `None` for anything other than `"deposit"` or `"withdraw"`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "deposit" => Some(TransactionType::Deposit),
            "withdraw" => Some(TransactionType::Withdraw),
            _ => None,
        }
    }

    /// A human readable label for tables and form controls.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "Deposit",
            TransactionType::Withdraw => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction exactly as it appears in the record source.
///
/// The amount is kept as the original string of minor currency units (e.g.
/// cents). Use [crate::transaction::normalize_transactions] to convert a list of
/// records into [crate::transaction::Transaction]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// When the transaction happened, in milliseconds since the Unix epoch.
    pub date: i64,
    /// The amount in minor currency units, e.g. `"10000"` for 100.00.
    pub amount: String,
    /// Whether money came in or went out.
    pub transaction_type: TransactionType,
    /// The currency code, e.g. "brl".
    pub currency: String,
    /// The account the transaction belongs to.
    pub account: String,
    /// The industry of the counterparty.
    pub industry: String,
    /// The state (region) the transaction happened in.
    pub state: String,
}
