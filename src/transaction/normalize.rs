//! Converts records from the record source into transactions with amounts in
//! major currency units.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use time::OffsetDateTime;

use crate::{
    Error,
    transaction::record::{TransactionRecord, TransactionType},
};

/// The number of decimal places that amounts are carried with after normalization.
const AMOUNT_SCALE: u32 = 2;

/// A transaction with its amount in major currency units.
///
/// This is the form of a transaction that the filter, aggregation and
/// pagination stages work with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// When the transaction happened (UTC).
    pub date: OffsetDateTime,
    /// The amount in major currency units with exactly two decimal places.
    ///
    /// The amount is never negative; the direction is given by
    /// `transaction_type`.
    pub amount: Decimal,
    /// Whether money came in or went out.
    pub transaction_type: TransactionType,
    /// The currency code, carried through unchanged.
    pub currency: String,
    /// The account the transaction belongs to.
    pub account: String,
    /// The industry of the counterparty.
    pub industry: String,
    /// The state (region) the transaction happened in.
    pub state: String,
}

/// Normalize every record in `records`, preserving their order.
///
/// The records are not modified, new transactions are created instead.
///
/// # Errors
///
/// Stops at the first faulty record and returns:
/// - [Error::InvalidAmount] if its amount is not a number.
/// - [Error::InvalidTimestamp] if its date is outside the supported range.
pub fn normalize_transactions(records: &[TransactionRecord]) -> Result<Vec<Transaction>, Error> {
    records.iter().map(normalize_transaction).collect()
}

fn normalize_transaction(record: &TransactionRecord) -> Result<Transaction, Error> {
    Ok(Transaction {
        date: timestamp_to_date_time(record.date)?,
        amount: minor_to_major_units(&record.amount)?,
        transaction_type: record.transaction_type,
        currency: record.currency.clone(),
        account: record.account.clone(),
        industry: record.industry.clone(),
        state: record.state.clone(),
    })
}

/// Convert an amount of minor units (e.g. cents) into major units with two
/// decimal places, e.g. `"12345"` becomes `123.45`.
pub(crate) fn minor_to_major_units(amount: &str) -> Result<Decimal, Error> {
    let minor_units =
        Decimal::from_str(amount.trim()).map_err(|_| Error::InvalidAmount(amount.to_owned()))?;

    let mut major_units = (minor_units / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    major_units.rescale(AMOUNT_SCALE);

    Ok(major_units)
}

fn timestamp_to_date_time(timestamp_millis: i64) -> Result<OffsetDateTime, Error> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(timestamp_millis) * 1_000_000)
        .map_err(|_| Error::InvalidTimestamp(timestamp_millis))
}
