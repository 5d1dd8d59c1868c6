use super::{Account, Amount, HistoryEntry, OperationError};

use chrono::Local;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    // The label under which an entry of this kind shows up on a statement.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

// Represents a single request to move money (either deposit or withdrawal).
// Immutable once built: applying it never changes the transaction itself,
// only the target account.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Transaction {
    amount: Amount,
    kind: TransactionKind,
}

impl Transaction {
    pub fn new(amount: Amount, kind: TransactionKind) -> Self {
        Self { amount, kind }
    }

    pub fn deposit(amount: Amount) -> Self {
        Self::new(amount, TransactionKind::Deposit)
    }

    pub fn withdrawal(amount: Amount) -> Self {
        Self::new(amount, TransactionKind::Withdrawal)
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    // Applies the transaction to `account` and, only if the balance
    // mutation succeeded, records it in the account's history. This is the
    // single choke point through which every logged mutation passes: a
    // rejected operation leaves no trace.
    pub fn register(&self, account: &mut Account) -> Result<(), OperationError> {
        match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount)?,
            TransactionKind::Withdrawal => account.withdraw(self.amount)?,
        }

        account
            .history_mut()
            .record(HistoryEntry::new(self.kind, self.amount, Local::now()));

        Ok(())
    }
}
