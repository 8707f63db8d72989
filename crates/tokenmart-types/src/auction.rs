//! Ascending-auction record.

use serde::{Deserialize, Serialize};

use crate::{Address, AssetId, Currency};

/// An active ascending-bid offer with an optional instant-buy price.
///
/// Stored in the `AuctionLedger` under (asset contract, asset id,
/// auctioneer). Invariants while active:
/// - `base_price > 0` and `quantity > 0`
/// - `current_bid >= base_price` once a bidder exists, and each accepted
///   bid strictly increases it
/// - `current_bidder` holds the exclusive refund claim over `current_bid`
///   until displaced, settled, or cancelled
///
/// An `instant_buy_price` of zero disables the instant-buy path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    /// The asset within the asset contract.
    pub asset_id: AssetId,
    /// Minimum acceptable first bid.
    pub base_price: u128,
    /// Price at which a buyer may bypass bidding entirely (0 = disabled).
    pub instant_buy_price: u128,
    /// The currency bids are denominated in.
    pub currency: Currency,
    /// Units under auction (sold as one lot).
    pub quantity: u64,
    /// The auctioneer whose asset is escrowed.
    pub auctioneer: Address,
    /// The currently winning bidder, if any bid has been accepted.
    pub current_bidder: Option<Address>,
    /// The currently winning bid; 0 until a bid exists.
    pub current_bid: u128,
}

impl Auction {
    /// The smallest acceptable next bid: strictly above the current bid
    /// once one exists, otherwise the base price itself.
    #[must_use]
    pub fn min_acceptable_bid(&self) -> u128 {
        if self.current_bidder.is_some() {
            self.current_bid.saturating_add(1)
        } else {
            self.base_price
        }
    }

    /// Returns `true` if at least one bid has been accepted.
    #[must_use]
    pub fn has_bid(&self) -> bool {
        self.current_bidder.is_some()
    }
}
