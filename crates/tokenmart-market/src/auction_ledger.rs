//! Ascending-auction ledger.
//!
//! Persistent map from [`MarketKey`] to the active [`Auction`]. Bids are
//! monotonic: each accepted bid strictly exceeds its predecessor, and the
//! displaced bidder's refund claim is handed back to the engine for
//! execution before the replacement is recorded.

use std::collections::HashMap;

use tokenmart_types::{
    Address, Auction, Currency, DistributionLeg, MarketKey, MartError, Result,
};

use crate::AccessPolicy;

/// Map of all active auctions.
#[derive(Debug, Default)]
pub struct AuctionLedger {
    auctions: HashMap<MarketKey, Auction>,
}

impl AuctionLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the active auction for a key.
    #[must_use]
    pub fn get(&self, key: &MarketKey) -> Option<&Auction> {
        self.auctions.get(key)
    }

    /// Open an auction.
    ///
    /// # Errors
    /// `InvalidTerms` if the base price or quantity is zero, the
    /// auctioneer or asset contract is null, or an auction already exists
    /// under this key (an auction cannot be topped up like a listing).
    pub fn create(
        &mut self,
        key: MarketKey,
        base_price: u128,
        instant_buy_price: u128,
        quantity: u64,
        currency: Currency,
    ) -> Result<&Auction> {
        if key.party.is_null() || key.asset_contract.is_null() {
            return Err(MartError::InvalidTerms {
                reason: "auctioneer and asset contract must be non-null".into(),
            });
        }
        if base_price == 0 || quantity == 0 {
            return Err(MartError::InvalidTerms {
                reason: "base price and quantity must be nonzero".into(),
            });
        }
        if self.auctions.contains_key(&key) {
            return Err(MartError::InvalidTerms {
                reason: format!("an auction is already active for {key}"),
            });
        }
        self.auctions.insert(
            key,
            Auction {
                asset_id: key.asset_id,
                base_price,
                instant_buy_price,
                currency,
                quantity,
                auctioneer: key.party,
                current_bidder: None,
                current_bid: 0,
            },
        );
        Ok(&self.auctions[&key])
    }

    /// Validate a prospective bid without mutating anything.
    ///
    /// # Errors
    /// - `NoActiveAuction` if the key is absent
    /// - `AdminRestricted` if the bidder holds an administrator role
    /// - `SelfTradeForbidden` if the bidder is the auctioneer
    /// - `BidTooLow` if `amount` is below the base price or does not
    ///   strictly exceed the current bid
    pub fn check_bid(
        &self,
        key: &MarketKey,
        bidder: Address,
        amount: u128,
        policy: &AccessPolicy,
    ) -> Result<&Auction> {
        let auction = self
            .auctions
            .get(key)
            .ok_or(MartError::NoActiveAuction(*key))?;
        if policy.is_admin(bidder) {
            return Err(MartError::AdminRestricted);
        }
        if bidder == auction.auctioneer {
            return Err(MartError::SelfTradeForbidden(bidder));
        }
        let floor = auction.min_acceptable_bid();
        if amount < floor {
            return Err(MartError::BidTooLow { amount, floor });
        }
        Ok(auction)
    }

    /// Record an accepted bid, replacing the previous bidder. Returns the
    /// displaced bidder's refund claim, which the engine must already
    /// have honored (the refund executes before this mutation).
    ///
    /// # Errors
    /// `NoActiveAuction` / `BidTooLow` — validated up front via
    /// [`AuctionLedger::check_bid`]; rechecked here defensively.
    pub fn record_bid(
        &mut self,
        key: &MarketKey,
        bidder: Address,
        amount: u128,
    ) -> Result<Option<DistributionLeg>> {
        let auction = self
            .auctions
            .get_mut(key)
            .ok_or(MartError::NoActiveAuction(*key))?;
        let floor = auction.min_acceptable_bid();
        if amount < floor {
            return Err(MartError::BidTooLow { amount, floor });
        }
        let displaced = auction.current_bidder.map(|receiver| DistributionLeg {
            receiver,
            amount: auction.current_bid,
        });
        auction.current_bidder = Some(bidder);
        auction.current_bid = amount;
        Ok(displaced)
    }

    /// Delete an auction (settlement or cancellation). Returns the record
    /// so the engine can release the escrowed asset and any standing bid.
    ///
    /// # Errors
    /// `NoActiveAuction` if the key is absent.
    pub fn remove(&mut self, key: &MarketKey) -> Result<Auction> {
        self.auctions
            .remove(key)
            .ok_or(MartError::NoActiveAuction(*key))
    }

    /// Number of active auctions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.auctions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.auctions.is_empty()
    }
}
