use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::TypeError;

/// Per-address unlock schedule with spend accounting.
///
/// The unlock curve is zero before the cliff and before `start_height`,
/// linear between `start_height` and `start_height + duration`, and equal to
/// `total` afterwards. `spent` accumulates every vested transfer debit and
/// never exceeds the unlocked portion at the height it was checked against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingSchedule {
    pub total: Amount,
    pub start_height: u64,
    pub cliff_height: u64,
    pub duration: u64,
    pub spent: Amount,
}

impl VestingSchedule {
    /// Create a schedule, validating its shape.
    pub fn new(
        total: Amount,
        start_height: u64,
        cliff_height: u64,
        duration: u64,
    ) -> Result<Self, TypeError> {
        if duration == 0 {
            return Err(TypeError::InvalidSchedule(
                "duration must be positive".into(),
            ));
        }
        if cliff_height > start_height.saturating_add(duration) {
            return Err(TypeError::InvalidSchedule(
                "cliff cannot fall beyond the end of the schedule".into(),
            ));
        }
        Ok(Self {
            total,
            start_height,
            cliff_height,
            duration,
            spent: Amount::ZERO,
        })
    }

    /// Amount unlocked at `height`, monotone non-decreasing and bounded by
    /// `total`.
    pub fn unlocked(&self, height: u64) -> Amount {
        if height < self.cliff_height {
            return Amount::ZERO;
        }
        if height >= self.start_height.saturating_add(self.duration) {
            return self.total;
        }
        if height < self.start_height {
            return Amount::ZERO;
        }
        let elapsed = height - self.start_height;
        let unlocked = mul_div_floor(self.total.value(), elapsed as u128, self.duration as u128);
        Amount::new(unlocked).min(self.total)
    }

    /// Amount still spendable at `height`, clamped at zero.
    pub fn available(&self, height: u64) -> Amount {
        self.unlocked(height).saturating_sub(self.spent)
    }

    /// Record a vested debit after enforcement has passed.
    pub fn record_spend(&mut self, amount: Amount) -> Result<(), TypeError> {
        self.spent = self.spent.checked_add(amount, "vesting spend")?;
        Ok(())
    }
}

/// Exact `floor(total * elapsed / duration)` without intermediate overflow.
///
/// Requires `elapsed < duration`, which the linear branch of the unlock curve
/// guarantees; both partial products then fit in a `u128`.
fn mul_div_floor(total: u128, elapsed: u128, duration: u128) -> u128 {
    let quotient = total / duration;
    let remainder = total % duration;
    quotient * elapsed + remainder * elapsed / duration
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn schedule(total: u128, start: u64, cliff: u64, duration: u64) -> VestingSchedule {
        VestingSchedule::new(Amount::new(total), start, cliff, duration).unwrap()
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = VestingSchedule::new(Amount::new(100), 0, 0, 0).unwrap_err();
        assert!(matches!(err, TypeError::InvalidSchedule(_)));
    }

    #[test]
    fn cliff_beyond_schedule_end_is_rejected() {
        let err = VestingSchedule::new(Amount::new(100), 10, 31, 20).unwrap_err();
        assert!(matches!(err, TypeError::InvalidSchedule(_)));
    }

    #[test]
    fn nothing_unlocks_before_cliff() {
        let schedule = schedule(1000, 10, 20, 100);
        assert_eq!(schedule.unlocked(0), Amount::ZERO);
        assert_eq!(schedule.unlocked(19), Amount::ZERO);
    }

    #[test]
    fn everything_unlocks_after_duration() {
        let schedule = schedule(1000, 10, 10, 100);
        assert_eq!(schedule.unlocked(110), Amount::new(1000));
        assert_eq!(schedule.unlocked(u64::MAX), Amount::new(1000));
    }

    #[test]
    fn linear_interpolation_floors() {
        // total=1000, duration=100: 1 height unit unlocks 10 tokens
        let even = schedule(1000, 0, 0, 100);
        assert_eq!(even.unlocked(25), Amount::new(250));
        // total=10, duration=3: floor(10 * 1 / 3) = 3
        let uneven = schedule(10, 0, 0, 3);
        assert_eq!(uneven.unlocked(1), Amount::new(3));
        assert_eq!(uneven.unlocked(2), Amount::new(6));
    }

    #[test]
    fn cliff_before_start_defers_to_start() {
        let schedule = schedule(1000, 50, 10, 100);
        assert_eq!(schedule.unlocked(30), Amount::ZERO);
        assert_eq!(schedule.unlocked(50), Amount::ZERO);
        assert_eq!(schedule.unlocked(100), Amount::new(500));
    }

    #[test]
    fn available_subtracts_spent_and_clamps() {
        let mut schedule = schedule(1000, 0, 0, 100);
        schedule.record_spend(Amount::new(200)).unwrap();
        assert_eq!(schedule.available(50), Amount::new(300));
        // spent beyond currently unlocked clamps to zero instead of underflowing
        assert_eq!(schedule.available(10), Amount::ZERO);
    }

    #[test]
    fn record_spend_accumulates() {
        let mut schedule = schedule(1000, 0, 0, 10);
        schedule.record_spend(Amount::new(100)).unwrap();
        schedule.record_spend(Amount::new(50)).unwrap();
        assert_eq!(schedule.spent, Amount::new(150));
    }

    #[test]
    fn huge_totals_do_not_overflow() {
        let schedule = schedule(u128::MAX, 0, 0, u64::MAX);
        let mid = schedule.unlocked(u64::MAX / 2);
        assert!(mid < Amount::new(u128::MAX));
        assert!(mid > Amount::ZERO);
    }

    proptest! {
        #[test]
        fn unlocked_is_monotone_and_bounded(
            total in 0u128..=u128::MAX / 2,
            start in 0u64..1_000_000,
            cliff_offset in 0u64..1_000,
            duration in 1u64..1_000_000,
            h1 in 0u64..3_000_000,
            h2 in 0u64..3_000_000,
        ) {
            let schedule = VestingSchedule::new(
                Amount::new(total),
                start,
                start.saturating_add(cliff_offset.min(duration)),
                duration,
            ).unwrap();
            let (lo, hi) = if h1 <= h2 { (h1, h2) } else { (h2, h1) };
            prop_assert!(schedule.unlocked(lo) <= schedule.unlocked(hi));
            prop_assert!(schedule.unlocked(hi) <= schedule.total);
        }
    }
}
