use serde::Serialize;
use std::{error::Error, io::Write};

use crate::model::{Account, AccountNumber, Amount};
use crate::system::Registry;

// Intermediary representation of an account for serialization.
#[derive(Serialize)]
struct CsvAccount {
    account: AccountNumber,
    branch: &'static str,
    tax_id: String,
    balance: Amount,
}

// Takes the final session state after processing commands, and writes the
// accounts to the given writer in CSV form, ordered by account number.
pub fn write_report(registry: &Registry, writer: impl Write) -> Result<(), Box<dyn Error>> {
    let csv_accounts_iter = registry.accounts().into_iter().map(csv_account_from_account);
    write_csv_accounts(csv_accounts_iter, writer)
}

fn write_csv_accounts(
    csv_accounts: impl Iterator<Item = CsvAccount>,
    writer: impl Write,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(writer);

    for account in csv_accounts {
        wtr.serialize(account)?;
    }

    wtr.flush()?;

    Ok(())
}

fn csv_account_from_account(account: &Account) -> CsvAccount {
    CsvAccount {
        account: account.number(),
        branch: account.branch(),
        tax_id: account.owner_tax_id().to_string(),
        balance: account.balance(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Client;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_report() {
        let mut registry = Registry::new();
        registry
            .register_client(Client::individual(
                String::from("Jo Doe"),
                String::from("01-02-1990"),
                String::from("12345678901"),
                String::from("Elm St 1"),
            ))
            .expect("registration should succeed");
        registry
            .open_checking_account("12345678901")
            .expect("opening should succeed");
        registry
            .open_checking_account("12345678901")
            .expect("opening should succeed");
        registry
            .deposit("12345678901", 1, dec!(100))
            .expect("deposit should succeed");
        registry
            .deposit("12345678901", 2, dec!(0.5))
            .expect("deposit should succeed");

        let mut writer = Vec::new();
        write_report(&registry, &mut writer).expect("Expected no errors.");

        let output = String::from_utf8(writer).expect("Not UTF-8");
        assert_eq!(
            concat!(
                "account,branch,tax_id,balance\n",
                "1,0001,12345678901,100\n",
                "2,0001,12345678901,0.5\n"
            ),
            output,
        );
    }

    #[test]
    fn test_write_report_empty_session() {
        let registry = Registry::new();

        let mut writer = Vec::new();
        write_report(&registry, &mut writer).expect("Expected no errors.");

        let output = String::from_utf8(writer).expect("Not UTF-8");
        // Headers are only emitted alongside at least one record.
        assert_eq!("", output);
    }
}
