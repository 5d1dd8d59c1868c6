use thiserror::Error;

// The recoverable outcomes of a deposit/withdraw attempt. None of these are
// fatal: the caller reports them and the session carries on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    #[error("Amount must be greater than zero.")]
    InvalidAmount,
    #[error("Insufficient funds.")]
    InsufficientFunds,
    #[error("Withdrawal limit reached for this period.")]
    WithdrawalLimitExceeded,
    #[error("Amount exceeds the per-withdrawal limit.")]
    WithdrawalAmountExceedsLimit,
}
