use core::str::FromStr;

use serde::Deserialize;
use std::{error::Error, io::Read};

use crate::model::{AccountNumber, Amount, Command};

#[derive(Deserialize)]
// intermediary struct for deserializing CSV. Columns that do not apply to a
// given op are left empty, so everything beyond `op` is read as a string
// and mapped manually afterwards.
pub struct CsvCommand {
    op: String,
    tax_id: String,
    account: String,
    amount: String,
    full_name: String,
    birth_date: String,
    address: String,
}

// Returns an iterator which itself yields Commands. It takes a reader that
// reads a CSV file.
pub fn parse_commands(reader: impl Read) -> impl Iterator<Item = Result<Command, Box<dyn Error>>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All) // this handles whitespace for us
        .from_reader(reader)
        .into_deserialize()
        .map(|result| parse_csv_command(result.map_err(|e| e.to_string())?))
}

fn parse_csv_command(csv_command: CsvCommand) -> Result<Command, Box<dyn Error>> {
    let command = match csv_command.op.as_ref() {
        "new_client" => Command::NewClient {
            full_name: csv_command.full_name,
            birth_date: csv_command.birth_date,
            tax_id: csv_command.tax_id,
            address: csv_command.address,
        },
        "new_account" => Command::NewAccount {
            tax_id: csv_command.tax_id,
        },
        "deposit" => Command::Deposit {
            tax_id: csv_command.tax_id,
            account_number: parse_account_number(&csv_command.account)?,
            amount: parse_amount(&csv_command.amount)?,
        },
        "withdrawal" => Command::Withdrawal {
            tax_id: csv_command.tax_id,
            account_number: parse_account_number(&csv_command.account)?,
            amount: parse_amount(&csv_command.amount)?,
        },
        _ => return Err(format!("Unknown op: {}.", csv_command.op).into()),
    };

    Ok(command)
}

fn parse_account_number(account: &str) -> Result<AccountNumber, Box<dyn Error>> {
    if account.is_empty() {
        return Err("Missing account number.".into());
    }

    Ok(AccountNumber::from_str(account)?)
}

fn parse_amount(amount: &str) -> Result<Amount, Box<dyn Error>> {
    if amount.is_empty() {
        return Err("Missing amount.".into());
    }

    Ok(Amount::from_str(amount)?)
}
