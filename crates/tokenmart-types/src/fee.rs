//! Fees in basis points.
//!
//! Two fee instances exist in a deployment: the single platform-wide fee
//! (cap 5000 bp) and a per-asset-contract creator royalty (cap 2000 bp).
//! A fee with a null receiver or zero bips contributes nothing to a split.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_PLATFORM_FEE_BIPS, MAX_ROYALTY_BIPS};
use crate::{Address, MartError, Result};

/// A fee: receiver plus percentage in basis points (1 bp = 0.01%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// Who receives this fee. The null address disables the fee.
    pub receiver: Address,
    /// Percentage in basis points over a 10000 denominator.
    pub bips: u16,
}

impl Fee {
    /// A disabled fee: null receiver, zero bips.
    pub const NONE: Self = Self {
        receiver: Address::NULL,
        bips: 0,
    };

    /// Construct a platform fee. Rejects values above 5000 bp (50%).
    pub fn platform(receiver: Address, bips: u16) -> Result<Self> {
        if bips > MAX_PLATFORM_FEE_BIPS {
            return Err(MartError::FeeTooHigh {
                bips,
                cap: MAX_PLATFORM_FEE_BIPS,
            });
        }
        Ok(Self { receiver, bips })
    }

    /// Construct a creator royalty. Rejects values above 2000 bp (20%).
    pub fn royalty(receiver: Address, bips: u16) -> Result<Self> {
        if bips > MAX_ROYALTY_BIPS {
            return Err(MartError::FeeTooHigh {
                bips,
                cap: MAX_ROYALTY_BIPS,
            });
        }
        Ok(Self { receiver, bips })
    }

    /// Returns `true` if this fee takes nothing (null receiver or 0 bp).
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.receiver.is_null() || self.bips == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_fee_within_cap() {
        let fee = Fee::platform(Address::test(1), 5000).unwrap();
        assert_eq!(fee.bips, 5000);
        assert!(!fee.is_disabled());
    }

    #[test]
    fn platform_fee_above_cap_rejected() {
        let err = Fee::platform(Address::test(1), 5001).unwrap_err();
        assert!(matches!(err, MartError::FeeTooHigh { cap: 5000, .. }));
    }

    #[test]
    fn royalty_within_cap() {
        assert!(Fee::royalty(Address::test(1), 2000).is_ok());
    }

    #[test]
    fn royalty_above_cap_rejected() {
        let err = Fee::royalty(Address::test(1), 2001).unwrap_err();
        assert!(matches!(err, MartError::FeeTooHigh { cap: 2000, .. }));
    }

    #[test]
    fn null_receiver_disables() {
        let fee = Fee::platform(Address::NULL, 300).unwrap();
        assert!(fee.is_disabled());
        assert!(Fee::NONE.is_disabled());
    }

    #[test]
    fn zero_bips_disables() {
        let fee = Fee::royalty(Address::test(1), 0).unwrap();
        assert!(fee.is_disabled());
    }
}
