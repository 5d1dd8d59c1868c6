use super::{Account, AccountNumber, OperationError, TaxId, Transaction};

// The specializations of a client. Individual is the only one a session can
// create today; the tagged variant keeps room for other legal forms without
// touching the account plumbing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ClientKind {
    Individual {
        full_name: String,
        birth_date: String,
        tax_id: TaxId,
    },
}

// A party that owns accounts. The client stores account *numbers*; the
// accounts themselves live in the Registry.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Client {
    address: String,
    accounts: Vec<AccountNumber>,
    kind: ClientKind,
}

impl Client {
    pub fn individual(
        full_name: String,
        birth_date: String,
        tax_id: TaxId,
        address: String,
    ) -> Self {
        Self {
            address,
            accounts: Vec::new(),
            kind: ClientKind::Individual {
                full_name,
                birth_date,
                tax_id,
            },
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn kind(&self) -> &ClientKind {
        &self.kind
    }

    pub fn tax_id(&self) -> &str {
        match &self.kind {
            ClientKind::Individual { tax_id, .. } => tax_id,
        }
    }

    pub fn full_name(&self) -> &str {
        match &self.kind {
            ClientKind::Individual { full_name, .. } => full_name,
        }
    }

    pub fn birth_date(&self) -> &str {
        match &self.kind {
            ClientKind::Individual { birth_date, .. } => birth_date,
        }
    }

    // No uniqueness check: adding the same number twice is the caller's
    // problem. The Registry only ever adds freshly assigned numbers.
    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    pub fn owns_account(&self, number: AccountNumber) -> bool {
        self.accounts.contains(&number)
    }

    // Pass-through today; the indirection is the seam where a client
    // specialization could veto or limit a transaction before it runs.
    pub fn execute_transaction(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> Result<(), OperationError> {
        transaction.register(account)
    }
}
