pub mod account;
pub mod client;
pub mod error;
pub mod history;
pub mod transaction;
pub use account::*;
pub use client::*;
pub use error::*;
pub use history::*;
pub use transaction::*;

use rust_decimal::prelude::Decimal;

// A quick overview of the modelling here: a Registry (in `system`) owns all
// Clients and Accounts for one session. Clients hold the numbers of the
// accounts they own, and each Account carries its owner's tax id back, so
// there is no ownership cycle. A Transaction applies itself to an Account
// and records itself in the Account's History only when the balance
// mutation succeeded.

pub type Amount = Decimal;

// Sequential account numbers handed out by the Registry, starting at 1.
pub type AccountNumber = u32;

// The unique lookup key for an individual client.
pub type TaxId = String;

// Represents commands driving one session. These do not represent
// successfully processed commands, but rather the commands that need to be
// processed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    NewClient {
        full_name: String,
        birth_date: String,
        tax_id: TaxId,
        address: String,
    },
    NewAccount {
        tax_id: TaxId,
    },
    Deposit {
        tax_id: TaxId,
        account_number: AccountNumber,
        amount: Amount,
    },
    Withdrawal {
        tax_id: TaxId,
        account_number: AccountNumber,
        amount: Amount,
    },
}
