//! Fixed-price listing ledger.
//!
//! Persistent map from [`MarketKey`] to the active [`Listing`]. The split
//! between `check_buy` (read-only validation) and `consume` (mutation)
//! exists so the engine can validate before releasing any external
//! transfer and mutate only after every leg succeeded — a failed
//! invocation must leave the ledger untouched.

use std::collections::HashMap;

use tokenmart_types::{Address, Currency, Listing, MarketKey, MartError, Result};

use crate::AccessPolicy;

/// Map of all active fixed-price listings.
#[derive(Debug, Default)]
pub struct ListingLedger {
    listings: HashMap<MarketKey, Listing>,
}

impl ListingLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the active listing for a key.
    #[must_use]
    pub fn get(&self, key: &MarketKey) -> Option<&Listing> {
        self.listings.get(key)
    }

    /// Create a listing, or increase the quantity of an existing one.
    ///
    /// Price and currency of the *first* creation win: a later deposit
    /// under the same key only adds quantity and cannot reprice the
    /// listing. Relisting at a different price requires cancelling first —
    /// a known limitation.
    ///
    /// # Errors
    /// `InvalidTerms` if the price or quantity is zero, the seller or
    /// asset contract is the null address, or the quantity would overflow.
    pub fn create_or_increase(
        &mut self,
        key: MarketKey,
        unit_price: u128,
        quantity: u64,
        currency: Currency,
    ) -> Result<&Listing> {
        if key.party.is_null() || key.asset_contract.is_null() {
            return Err(MartError::InvalidTerms {
                reason: "seller and asset contract must be non-null".into(),
            });
        }
        if unit_price == 0 || quantity == 0 {
            return Err(MartError::InvalidTerms {
                reason: "price and quantity must be nonzero".into(),
            });
        }

        if let Some(listing) = self.listings.get_mut(&key) {
            listing.quantity = listing.quantity.checked_add(quantity).ok_or_else(|| {
                MartError::InvalidTerms {
                    reason: "listing quantity overflow".into(),
                }
            })?;
        } else {
            self.listings.insert(
                key,
                Listing {
                    asset_id: key.asset_id,
                    unit_price,
                    quantity,
                    currency,
                    seller: key.party,
                },
            );
        }
        Ok(&self.listings[&key])
    }

    /// Validate a prospective buy without mutating anything.
    ///
    /// # Errors
    /// - `NoActiveListing` if the key is absent
    /// - `SelfTradeForbidden` if the buyer is the seller
    /// - `AdminRestricted` if the buyer holds an administrator role
    /// - `InvalidTerms` if the requested quantity is zero
    /// - `QuantityExceeded` if the request exceeds what is available
    pub fn check_buy(
        &self,
        key: &MarketKey,
        buyer: Address,
        quantity: u64,
        policy: &AccessPolicy,
    ) -> Result<&Listing> {
        let listing = self.check_quantity(key, quantity)?;
        if buyer == listing.seller {
            return Err(MartError::SelfTradeForbidden(buyer));
        }
        if policy.is_admin(buyer) {
            return Err(MartError::AdminRestricted);
        }
        Ok(listing)
    }

    /// Existence and quantity validation only. Used by the fiat path,
    /// where the self-trade and admin-buyer restrictions do not apply.
    pub fn check_quantity(&self, key: &MarketKey, quantity: u64) -> Result<&Listing> {
        let listing = self
            .listings
            .get(key)
            .ok_or(MartError::NoActiveListing(*key))?;
        if quantity == 0 {
            return Err(MartError::InvalidTerms {
                reason: "purchase quantity must be nonzero".into(),
            });
        }
        if quantity > listing.quantity {
            return Err(MartError::QuantityExceeded {
                requested: quantity,
                available: listing.quantity,
            });
        }
        Ok(listing)
    }

    /// Decrement a listing after a successful settlement. Deletes the
    /// record when the quantity reaches exactly zero. Returns the
    /// remaining quantity.
    ///
    /// # Errors
    /// `NoActiveListing` / `QuantityExceeded` — the engine validates
    /// these up front via [`ListingLedger::check_buy`]; they recur here
    /// only as a last line of defense.
    pub fn consume(&mut self, key: &MarketKey, quantity: u64) -> Result<u64> {
        let listing = self
            .listings
            .get_mut(key)
            .ok_or(MartError::NoActiveListing(*key))?;
        if quantity > listing.quantity {
            return Err(MartError::QuantityExceeded {
                requested: quantity,
                available: listing.quantity,
            });
        }
        listing.quantity -= quantity;
        let remaining = listing.quantity;
        if remaining == 0 {
            self.listings.remove(key);
        }
        Ok(remaining)
    }

    /// Delete a listing outright (cancellation). Returns the record.
    ///
    /// # Errors
    /// `NoActiveListing` if the key is absent.
    pub fn remove(&mut self, key: &MarketKey) -> Result<Listing> {
        self.listings
            .remove(key)
            .ok_or(MartError::NoActiveListing(*key))
    }

    /// Number of active listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokenmart_types::AssetId;

    fn key() -> MarketKey {
        MarketKey::new(Address::test(10), AssetId(7), Address::test(1))
    }

    fn policy() -> AccessPolicy {
        AccessPolicy::new(Address::test(0xad)).unwrap()
    }

    fn ledger_with_listing(quantity: u64) -> ListingLedger {
        let mut ledger = ListingLedger::new();
        ledger
            .create_or_increase(key(), 100, quantity, Currency::Native)
            .unwrap();
        ledger
    }

    #[test]
    fn create_inserts_record() {
        let ledger = ledger_with_listing(3);
        let listing = ledger.get(&key()).unwrap();
        assert_eq!(listing.unit_price, 100);
        assert_eq!(listing.quantity, 3);
        assert_eq!(listing.seller, Address::test(1));
    }

    #[test]
    fn zero_price_rejected() {
        let mut ledger = ListingLedger::new();
        let err = ledger
            .create_or_increase(key(), 0, 3, Currency::Native)
            .unwrap_err();
        assert!(matches!(err, MartError::InvalidTerms { .. }));
    }

    #[test]
    fn zero_quantity_rejected() {
        let mut ledger = ListingLedger::new();
        let err = ledger
            .create_or_increase(key(), 100, 0, Currency::Native)
            .unwrap_err();
        assert!(matches!(err, MartError::InvalidTerms { .. }));
    }

    #[test]
    fn null_seller_rejected() {
        let mut ledger = ListingLedger::new();
        let bad = MarketKey::new(Address::test(10), AssetId(7), Address::NULL);
        let err = ledger
            .create_or_increase(bad, 100, 1, Currency::Native)
            .unwrap_err();
        assert!(matches!(err, MartError::InvalidTerms { .. }));
    }

    #[test]
    fn increase_keeps_first_price() {
        let mut ledger = ledger_with_listing(3);
        // Second deposit at a different price: quantity adds, price stays.
        ledger
            .create_or_increase(key(), 999, 2, Currency::Native)
            .unwrap();
        let listing = ledger.get(&key()).unwrap();
        assert_eq!(listing.quantity, 5);
        assert_eq!(listing.unit_price, 100);
    }

    #[test]
    fn partial_consumption_and_exhaustion() {
        let mut ledger = ledger_with_listing(3);
        assert_eq!(ledger.consume(&key(), 2).unwrap(), 1);
        assert_eq!(ledger.get(&key()).unwrap().quantity, 1);
        // Exhaustion deletes the record.
        assert_eq!(ledger.consume(&key(), 1).unwrap(), 0);
        assert!(ledger.get(&key()).is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn consume_absent_key_fails() {
        let mut ledger = ListingLedger::new();
        let err = ledger.consume(&key(), 1).unwrap_err();
        assert!(matches!(err, MartError::NoActiveListing(_)));
    }

    #[test]
    fn check_buy_rejects_seller() {
        let ledger = ledger_with_listing(3);
        let err = ledger
            .check_buy(&key(), Address::test(1), 1, &policy())
            .unwrap_err();
        assert!(matches!(err, MartError::SelfTradeForbidden(_)));
    }

    #[test]
    fn check_buy_rejects_admin() {
        let ledger = ledger_with_listing(3);
        let err = ledger
            .check_buy(&key(), Address::test(0xad), 1, &policy())
            .unwrap_err();
        assert!(matches!(err, MartError::AdminRestricted));
    }

    #[test]
    fn check_buy_rejects_excess_quantity() {
        let ledger = ledger_with_listing(3);
        let err = ledger
            .check_buy(&key(), Address::test(2), 4, &policy())
            .unwrap_err();
        assert!(matches!(
            err,
            MartError::QuantityExceeded {
                requested: 4,
                available: 3
            }
        ));
    }

    #[test]
    fn check_quantity_skips_party_restrictions() {
        let ledger = ledger_with_listing(3);
        // The fiat path uses this: even the seller's own address passes.
        assert!(ledger.check_quantity(&key(), 3).is_ok());
    }

    #[test]
    fn remove_twice_fails_second_time() {
        let mut ledger = ledger_with_listing(1);
        ledger.remove(&key()).unwrap();
        let err = ledger.remove(&key()).unwrap_err();
        assert!(matches!(err, MartError::NoActiveListing(_)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn sum_of_partial_buys_preserves_quantity() {
        let mut ledger = ledger_with_listing(10);
        for q in [1u64, 2, 3] {
            ledger.consume(&key(), q).unwrap();
        }
        assert_eq!(ledger.get(&key()).unwrap().quantity, 10 - 6);
    }
}
