use super::{AccountNumber, Amount, History, OperationError, TaxId, TransactionKind};

use rust_decimal_macros::dec;

// Every account in a session belongs to the same fixed branch.
pub const BRANCH_CODE: &str = "0001";

pub const DEFAULT_PER_WITHDRAWAL_LIMIT: Amount = dec!(500);
pub const DEFAULT_MAX_WITHDRAWALS_PER_PERIOD: u32 = 3;

// The behavioral specializations of an account. A checking account layers
// two withdrawal gates over the base rules; a simple account has only the
// base rules.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AccountKind {
    Simple,
    Checking {
        per_withdrawal_limit: Amount,
        max_withdrawals_per_period: u32,
    },
}

impl AccountKind {
    // A checking account with the standard caps.
    pub fn checking() -> Self {
        AccountKind::Checking {
            per_withdrawal_limit: DEFAULT_PER_WITHDRAWAL_LIMIT,
            max_withdrawals_per_period: DEFAULT_MAX_WITHDRAWALS_PER_PERIOD,
        }
    }
}

// Represents the current state of one account. The balance is only ever
// changed through `deposit` and `withdraw`, and neither goes below zero.
#[derive(Debug, PartialEq, Clone)]
pub struct Account {
    number: AccountNumber,
    owner_tax_id: TaxId,
    balance: Amount,
    history: History,
    kind: AccountKind,
}

impl Account {
    pub fn new(number: AccountNumber, owner_tax_id: TaxId, kind: AccountKind) -> Self {
        Self {
            number,
            owner_tax_id,
            balance: dec!(0),
            history: History::new(),
            kind,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        BRANCH_CODE
    }

    pub fn owner_tax_id(&self) -> &str {
        &self.owner_tax_id
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<(), OperationError> {
        if amount <= dec!(0) {
            return Err(OperationError::InvalidAmount);
        }

        self.balance += amount;
        Ok(())
    }

    // For a checking account the two gates run first, in this order: the
    // per-period count cap, then the per-withdrawal amount cap. Only then do
    // the base rules apply. The count gate looks at *recorded* withdrawals,
    // so attempts that failed the base rules never use up the cap.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), OperationError> {
        if let AccountKind::Checking {
            per_withdrawal_limit,
            max_withdrawals_per_period,
        } = self.kind
        {
            let recorded = self.history.count_of_kind(TransactionKind::Withdrawal);
            if recorded >= max_withdrawals_per_period as usize {
                return Err(OperationError::WithdrawalLimitExceeded);
            }

            if amount > per_withdrawal_limit {
                return Err(OperationError::WithdrawalAmountExceedsLimit);
            }
        }

        self.withdraw_base(amount)
    }

    fn withdraw_base(&mut self, amount: Amount) -> Result<(), OperationError> {
        if amount <= dec!(0) {
            return Err(OperationError::InvalidAmount);
        }

        if amount > self.balance {
            return Err(OperationError::InsufficientFunds);
        }

        self.balance -= amount;
        Ok(())
    }
}
