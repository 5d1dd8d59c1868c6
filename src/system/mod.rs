pub mod registry;
pub use registry::Registry;

use crate::model::{AccountNumber, Client, Command, OperationError, TaxId};

use std::{error::Error as StdError, io::Write};
use thiserror::Error;

// The failures a session-level operation can report. All of them are
// recoverable: the session keeps running and the caller decides how to
// present them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No client registered under tax id {0}.")]
    ClientNotFound(TaxId),
    #[error("Account {0} not found for this client.")]
    AccountNotFound(AccountNumber),
    #[error("A client is already registered under tax id {0}.")]
    DuplicateClient(TaxId),
    #[error("{0}")]
    Operation(#[from] OperationError),
}

// Takes a commands iterator and processes each command against a fresh
// Registry. Returns the final session state. Parse errors abort the run;
// business failures are written to `error_logger` and processing continues.
pub fn process_commands(
    commands_iter: impl Iterator<Item = Result<Command, Box<dyn StdError>>>,
    error_logger: &mut impl Write,
) -> Result<Registry, Box<dyn StdError>> {
    let mut registry = Registry::new();

    for command in commands_iter {
        if let Err(e) = apply_command(&mut registry, command?) {
            error_logger.write_all(format!("{}\n", e).as_bytes())?;
        }
    }

    Ok(registry)
}

fn apply_command(registry: &mut Registry, command: Command) -> Result<(), SessionError> {
    match command {
        Command::NewClient {
            full_name,
            birth_date,
            tax_id,
            address,
        } => registry.register_client(Client::individual(full_name, birth_date, tax_id, address)),
        Command::NewAccount { tax_id } => {
            registry.open_checking_account(&tax_id)?;
            Ok(())
        }
        Command::Deposit {
            tax_id,
            account_number,
            amount,
        } => registry.deposit(&tax_id, account_number, amount),
        Command::Withdrawal {
            tax_id,
            account_number,
            amount,
        } => registry.withdraw(&tax_id, account_number, amount),
    }
}
