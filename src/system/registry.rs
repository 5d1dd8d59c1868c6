use super::SessionError;
use crate::model::{
    Account, AccountKind, AccountNumber, Amount, Client, TaxId, Transaction,
};

use std::collections::HashMap;

// This maintains the state of one session: every client keyed by tax id,
// every account keyed by number, and the numbering counter. Created at
// session start, dropped at session end; there is no global state.
pub struct Registry {
    clients_by_tax_id: HashMap<TaxId, Client>,
    accounts_by_number: HashMap<AccountNumber, Account>,
    next_account_number: AccountNumber,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            clients_by_tax_id: HashMap::new(),
            accounts_by_number: HashMap::new(),
            next_account_number: 1,
        }
    }

    pub fn register_client(&mut self, client: Client) -> Result<(), SessionError> {
        let tax_id = client.tax_id().to_string();
        if self.clients_by_tax_id.contains_key(&tax_id) {
            return Err(SessionError::DuplicateClient(tax_id));
        }

        tracing::info!(tax_id = %tax_id, "registered client");
        self.clients_by_tax_id.insert(tax_id, client);
        Ok(())
    }

    // Opens a checking account with the standard caps for an existing
    // client, assigning the next sequential number.
    pub fn open_checking_account(&mut self, tax_id: &str) -> Result<AccountNumber, SessionError> {
        let client = self
            .clients_by_tax_id
            .get_mut(tax_id)
            .ok_or_else(|| SessionError::ClientNotFound(tax_id.to_string()))?;

        let number = self.next_account_number;
        self.next_account_number += 1;

        client.add_account(number);
        self.accounts_by_number.insert(
            number,
            Account::new(number, tax_id.to_string(), AccountKind::checking()),
        );

        tracing::info!(tax_id = %tax_id, account = number, "opened checking account");
        Ok(number)
    }

    pub fn deposit(
        &mut self,
        tax_id: &str,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<(), SessionError> {
        self.execute(tax_id, account_number, Transaction::deposit(amount))
    }

    pub fn withdraw(
        &mut self,
        tax_id: &str,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<(), SessionError> {
        self.execute(tax_id, account_number, Transaction::withdrawal(amount))
    }

    // All mutations funnel through here: resolve the client, check the
    // account is theirs, then let the client run the transaction.
    fn execute(
        &mut self,
        tax_id: &str,
        account_number: AccountNumber,
        transaction: Transaction,
    ) -> Result<(), SessionError> {
        let client = self
            .clients_by_tax_id
            .get(tax_id)
            .ok_or_else(|| SessionError::ClientNotFound(tax_id.to_string()))?;

        if !client.owns_account(account_number) {
            return Err(SessionError::AccountNotFound(account_number));
        }

        let account = self
            .accounts_by_number
            .get_mut(&account_number)
            .ok_or(SessionError::AccountNotFound(account_number))?;

        client.execute_transaction(account, &transaction)?;

        tracing::debug!(
            tax_id = %tax_id,
            account = account_number,
            kind = transaction.kind().label(),
            amount = %transaction.amount(),
            "transaction registered"
        );
        Ok(())
    }

    pub fn client(&self, tax_id: &str) -> Result<&Client, SessionError> {
        self.clients_by_tax_id
            .get(tax_id)
            .ok_or_else(|| SessionError::ClientNotFound(tax_id.to_string()))
    }

    // Read-only view for statements; the account must belong to the client.
    pub fn account(
        &self,
        tax_id: &str,
        account_number: AccountNumber,
    ) -> Result<&Account, SessionError> {
        let client = self.client(tax_id)?;
        if !client.owns_account(account_number) {
            return Err(SessionError::AccountNotFound(account_number));
        }

        self.accounts_by_number
            .get(&account_number)
            .ok_or(SessionError::AccountNotFound(account_number))
    }

    // Every account in the session, ordered by number for listing/reports.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts_by_number.values().collect();
        accounts.sort_by_key(|a| a.number());
        accounts
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
