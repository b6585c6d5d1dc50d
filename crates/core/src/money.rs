//! Currency amounts.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

const MINOR_PER_MAJOR: u64 = 100;

/// Non-negative amount in the smallest currency unit (e.g. cents).
///
/// Stored as an integer so sums and averages are exact; never negative by
/// construction.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units (e.g. dollars).
    pub fn from_major(units: u64) -> DomainResult<Self> {
        units
            .checked_mul(MINOR_PER_MAJOR)
            .map(Self)
            .ok_or_else(|| DomainError::overflow(format!("{units} currency units exceed representable range")))
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Sum of all amounts; zero for an empty input.
    pub fn sum(amounts: impl IntoIterator<Item = Money>) -> DomainResult<Money> {
        amounts.into_iter().try_fold(Money::zero(), |acc, amount| {
            acc.checked_add(amount)
                .ok_or_else(|| DomainError::overflow("sum of prices exceeds representable range"))
        })
    }

    /// Mean of `count` amounts totalling `total`, rounded half-up to the
    /// nearest minor unit. This is not the exact mean: three prices totalling
    /// 0.01 average to 0.00.
    pub fn average(total: Money, count: usize) -> DomainResult<Money> {
        if count == 0 {
            return Err(DomainError::division_by_zero("average of an empty set of prices"));
        }

        let count = count as u128;
        let rounded = (u128::from(total.0) + count / 2) / count;
        // rounded <= total, so it always fits back into u64.
        Ok(Money(rounded as u64))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (major, minor) = (self.0 / MINOR_PER_MAJOR, self.0 % MINOR_PER_MAJOR);
        if minor == 0 {
            write!(f, "{major}")
        } else {
            write!(f, "{major}.{minor:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn displays_whole_amounts_without_fraction() {
        assert_eq!(Money::from_major(1200).unwrap().to_string(), "1200");
        assert_eq!(Money::zero().to_string(), "0");
    }

    #[test]
    fn displays_fractional_amounts_with_two_decimals() {
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(1250).to_string(), "12.50");
        assert_eq!(Money::from_cents(37033).to_string(), "370.33");
    }

    #[test]
    fn from_major_reports_overflow() {
        let err = Money::from_major(u64::MAX / 10).unwrap_err();
        match err {
            DomainError::Overflow(_) => {}
            _ => panic!("Expected Overflow error"),
        }
        assert_eq!(Money::from_major(u64::MAX / 100).unwrap().cents(), (u64::MAX / 100) * 100);
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        assert_eq!(Money::sum(Vec::new()).unwrap(), Money::zero());
    }

    #[test]
    fn sum_reports_overflow() {
        let err = Money::sum([Money::from_cents(u64::MAX), Money::from_cents(1)]).unwrap_err();
        match err {
            DomainError::Overflow(_) => {}
            _ => panic!("Expected Overflow error"),
        }
    }

    #[test]
    fn average_of_empty_set_is_division_by_zero() {
        let err = Money::average(Money::zero(), 0).unwrap_err();
        match err {
            DomainError::DivisionByZero(_) => {}
            _ => panic!("Expected DivisionByZero error"),
        }
    }

    #[test]
    fn average_rounds_half_up() {
        // 2222.00 / 6 = 370.333..
        assert_eq!(
            Money::average(Money::from_cents(222_200), 6).unwrap(),
            Money::from_cents(37033)
        );
        // 0.01 / 3 = 0.00333..
        assert_eq!(Money::average(Money::from_cents(1), 3).unwrap(), Money::zero());
        // 0.05 / 2 = 0.025
        assert_eq!(Money::average(Money::from_cents(5), 2).unwrap(), Money::from_cents(3));
        // 0.04 / 3 = 0.0133..
        assert_eq!(Money::average(Money::from_cents(4), 3).unwrap(), Money::from_cents(1));
    }

    #[test]
    fn serializes_as_cent_count() {
        let json = serde_json::to_string(&Money::from_cents(4500)).unwrap();
        assert_eq!(json, "4500");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::from_cents(4500));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the average lies within the range of a uniform split.
        #[test]
        fn average_is_within_half_a_cent(
            cents in prop::collection::vec(0u64..10_000_000u64, 1..20)
        ) {
            let amounts: Vec<Money> = cents.iter().copied().map(Money::from_cents).collect();
            let total = Money::sum(amounts.iter().copied()).unwrap();
            let avg = Money::average(total, amounts.len()).unwrap();

            let n = amounts.len() as u128;
            let exact_times_n = u128::from(total.cents());
            let avg_times_n = u128::from(avg.cents()) * n;
            // |avg - total/n| <= 1/2 cent
            prop_assert!(2 * avg_times_n.abs_diff(exact_times_n) <= n);
        }
    }
}
