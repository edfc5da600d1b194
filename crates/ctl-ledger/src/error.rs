use ctl_types::{Amount, TypeError};

/// Errors produced by ledger operations.
///
/// Every variant is surfaced synchronously with no retry; a failed
/// enforcement check leaves the input snapshot untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("schema error: {0}")]
    Schema(String),

    #[error("mint would exceed max supply: max {max_supply}, attempted {attempted}")]
    SupplyExceeded {
        max_supply: Amount,
        attempted: Amount,
    },

    #[error("amount must be positive")]
    InvalidAmount,

    #[error("token is soulbound; transfers are disabled")]
    TransferDisabled,

    #[error("insufficient balance: available {available}, required {required}")]
    InsufficientBalance {
        available: Amount,
        required: Amount,
    },

    #[error("transfer exceeds max_per_tx: limit {limit}, requested {requested}")]
    LimitExceeded { limit: Amount, requested: Amount },

    #[error("transfer exceeds vested balance: available {available}, requested {requested}")]
    VestingLocked {
        available: Amount,
        requested: Amount,
    },

    #[error("invalid vesting schedule: {0}")]
    VestingScheduleInvalid(String),

    #[error("commitment mismatch: {}", .failed.join(", "))]
    CommitmentMismatch { failed: Vec<String> },

    #[error("arithmetic overflow during {0}")]
    Overflow(&'static str),

    #[error("encoding error: {0}")]
    Encoding(String),
}

impl From<TypeError> for LedgerError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::Overflow(context) => Self::Overflow(context),
            TypeError::InvalidSchedule(reason) => Self::VestingScheduleInvalid(reason),
            other => Self::Schema(other.to_string()),
        }
    }
}

impl From<ctl_crypto::EncodeError> for LedgerError {
    fn from(err: ctl_crypto::EncodeError) -> Self {
        Self::Encoding(err.to_string())
    }
}
