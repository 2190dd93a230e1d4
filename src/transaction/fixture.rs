//! Loads the static set of transaction records that the dashboard displays.

use std::{fs, path::Path};

use crate::{Error, transaction::record::TransactionRecord};

/// Read a JSON array of transaction records from the file at `path`.
///
/// # Errors
///
/// Returns:
/// - [Error::FixtureRead] if the file cannot be read.
/// - [Error::InvalidFixture] if the file is not a valid list of records.
///
/// Nothing is logged here, callers report the outcome.
pub fn load_transactions(path: &Path) -> Result<Vec<TransactionRecord>, Error> {
    let text = fs::read_to_string(path)
        .map_err(|error| Error::FixtureRead(format!("{}: {error}", path.display())))?;

    parse_transactions(&text)
}

/// Parse a JSON array of transaction records.
///
/// Fields that are not part of [TransactionRecord] are ignored.
///
/// # Errors
///
/// Returns [Error::InvalidFixture] if `text` is not a valid list of records,
/// e.g. a field is missing or the transaction type is unknown.
pub fn parse_transactions(text: &str) -> Result<Vec<TransactionRecord>, Error> {
    serde_json::from_str(text).map_err(|error| Error::InvalidFixture(error.to_string()))
}

#[cfg(test)]
mod fixture_tests {
    use std::{
        io,
        path::Path,
        sync::{Arc, Mutex},
    };

    use crate::{
        Error,
        transaction::{
            fixture::{load_transactions, parse_transactions},
            record::{TransactionRecord, TransactionType},
        },
    };

    #[test]
    fn parses_records() {
        let text = r#"[
            {
                "date": 1705276800000,
                "amount": "10000",
                "transaction_type": "deposit",
                "currency": "brl",
                "account": "Acme",
                "industry": "Retail",
                "state": "SP"
            },
            {
                "date": 1705708800000,
                "amount": "5000",
                "transaction_type": "withdraw",
                "currency": "brl",
                "account": "Acme",
                "industry": "Food",
                "state": "SP",
                "notes": "ignored"
            }
        ]"#;

        let records = parse_transactions(text).unwrap();

        assert_eq!(
            records,
            vec![
                TransactionRecord {
                    date: 1_705_276_800_000,
                    amount: "10000".to_owned(),
                    transaction_type: TransactionType::Deposit,
                    currency: "brl".to_owned(),
                    account: "Acme".to_owned(),
                    industry: "Retail".to_owned(),
                    state: "SP".to_owned(),
                },
                TransactionRecord {
                    date: 1_705_708_800_000,
                    amount: "5000".to_owned(),
                    transaction_type: TransactionType::Withdraw,
                    currency: "brl".to_owned(),
                    account: "Acme".to_owned(),
                    industry: "Food".to_owned(),
                    state: "SP".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn parses_empty_list() {
        assert_eq!(parse_transactions("[]"), Ok(vec![]));
    }

    #[test]
    fn unknown_transaction_type_is_an_error() {
        let text = r#"[{
            "date": 0,
            "amount": "1",
            "transaction_type": "pending",
            "currency": "brl",
            "account": "Acme",
            "industry": "Retail",
            "state": "SP"
        }]"#;

        let result = parse_transactions(text);

        assert!(
            matches!(result, Err(Error::InvalidFixture(_))),
            "got {result:?}"
        );
    }

    #[test]
    fn missing_field_is_an_error() {
        let text = r#"[{"date": 0, "amount": "1", "transaction_type": "deposit"}]"#;

        let result = parse_transactions(text);

        assert!(
            matches!(result, Err(Error::InvalidFixture(_))),
            "got {result:?}"
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_transactions(Path::new("does/not/exist.json"));

        assert!(matches!(result, Err(Error::FixtureRead(_))), "got {result:?}");
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn loading_does_not_log() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();
        let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/transactions.json");

        tracing::subscriber::with_default(subscriber, || {
            load_transactions(&bundled).unwrap();
            load_transactions(Path::new("does/not/exist.json")).unwrap_err();
        });

        let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).to_string();
        assert_eq!(logs, "");
    }

    #[test]
    fn bundled_fixture_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/transactions.json");

        let records = load_transactions(&path).unwrap();

        assert!(!records.is_empty());
    }
}
