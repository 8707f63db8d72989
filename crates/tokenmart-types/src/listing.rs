//! Fixed-price listing record.

use serde::{Deserialize, Serialize};

use crate::{Address, AssetId, Currency};

/// An active fixed-price offer of a quantity of one asset by one seller.
///
/// Stored in the `ListingLedger` under (asset contract, asset id, seller).
/// Invariant: `quantity > 0` while the record is present; the record is
/// deleted the moment quantity reaches zero. Price and currency are fixed
/// at creation — a later deposit under the same key only increases the
/// quantity (first-creation-wins, a documented limitation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// The asset within the asset contract.
    pub asset_id: AssetId,
    /// Price per unit, in `currency` base units.
    pub unit_price: u128,
    /// Units still available for purchase.
    pub quantity: u64,
    /// The currency buyers must pay in.
    pub currency: Currency,
    /// The seller whose asset is escrowed.
    pub seller: Address,
}

impl Listing {
    /// Total price for `quantity` units, or `None` on overflow.
    #[must_use]
    pub fn total_price(&self, quantity: u64) -> Option<u128> {
        self.unit_price.checked_mul(u128::from(quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_price() {
        let listing = Listing {
            asset_id: AssetId(7),
            unit_price: 100,
            quantity: 3,
            currency: Currency::Native,
            seller: Address::test(1),
        };
        assert_eq!(listing.total_price(2), Some(200));
        assert_eq!(listing.total_price(0), Some(0));
    }

    #[test]
    fn total_price_overflow_is_none() {
        let listing = Listing {
            asset_id: AssetId(7),
            unit_price: u128::MAX,
            quantity: 3,
            currency: Currency::Native,
            seller: Address::test(1),
        };
        assert_eq!(listing.total_price(2), None);
    }

    #[test]
    fn serde_roundtrip() {
        let listing = Listing {
            asset_id: AssetId(42),
            unit_price: 1000,
            quantity: 1,
            currency: Currency::Token(Address::test(9)),
            seller: Address::test(1),
        };
        let json = serde_json::to_string(&listing).unwrap();
        let back: Listing = serde_json::from_str(&json).unwrap();
        assert_eq!(listing, back);
    }
}
