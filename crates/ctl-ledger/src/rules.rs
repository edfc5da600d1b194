use ctl_types::{Amount, TokenState};

use crate::error::LedgerError;

/// Token rule enforcement.
///
/// Every check runs against the unmutated snapshot before any state change
/// (validate-then-apply); check order is part of the observable contract
/// because the first failing check names the error.
pub struct RuleEnforcer;

impl RuleEnforcer {
    /// Checks for a proposed mint: positive amount, then supply cap.
    pub fn check_mint(state: &TokenState, amount: Amount) -> Result<Amount, LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::InvalidAmount);
        }
        let attempted = state.minted_supply.checked_add(amount, "minted supply")?;
        if attempted > state.token.max_supply {
            return Err(LedgerError::SupplyExceeded {
                max_supply: state.token.max_supply,
                attempted,
            });
        }
        Ok(attempted)
    }

    /// Checks for a proposed transfer, in order: soulbound, positive amount,
    /// sender balance, per-transaction cap, vesting availability at `height`.
    pub fn check_transfer(
        state: &TokenState,
        sender: &str,
        amount: Amount,
        height: u64,
    ) -> Result<(), LedgerError> {
        if state.rules.soulbound {
            return Err(LedgerError::TransferDisabled);
        }
        if amount.is_zero() {
            return Err(LedgerError::InvalidAmount);
        }
        let available = state.balance_of(sender);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                available,
                required: amount,
            });
        }
        if let Some(limit) = state.rules.max_per_tx {
            if amount > limit {
                return Err(LedgerError::LimitExceeded {
                    limit,
                    requested: amount,
                });
            }
        }
        if let Some(schedule) = state.vesting.get(sender) {
            let available = schedule.available(height);
            if amount > available {
                return Err(LedgerError::VestingLocked {
                    available,
                    requested: amount,
                });
            }
        }
        Ok(())
    }
}
