//! Audit-trail events.
//!
//! Every significant engine action appends a [`MarketEvent`] to an
//! append-only log, wrapped in an [`EventRecord`] carrying a time-ordered
//! id and timestamp.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Address, Currency, MarketKey};

/// Time-ordered identifier for a logged event (UUIDv7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ev:{}", self.0)
    }
}

/// One leg of a fund distribution: who received how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionLeg {
    pub receiver: Address,
    pub amount: u128,
}

/// A significant engine action, for observability and audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// A fixed-price listing was created (or its quantity increased).
    ListingCreated {
        key: MarketKey,
        unit_price: u128,
        quantity: u64,
        currency: Currency,
    },
    /// A fixed-price purchase or instant buy completed.
    SaleCompleted {
        key: MarketKey,
        buyer: Address,
        quantity: u64,
        total_price: u128,
        currency: Currency,
    },
    /// A listing was cancelled and the asset returned to the seller.
    ListingCancelled { key: MarketKey },
    /// An auction was opened.
    AuctionCreated {
        key: MarketKey,
        base_price: u128,
        instant_buy_price: u128,
        quantity: u64,
        currency: Currency,
    },
    /// A bid was accepted; the displaced bidder (if any) was refunded.
    BidPlaced {
        key: MarketKey,
        bidder: Address,
        amount: u128,
        refunded: Option<DistributionLeg>,
    },
    /// An auction was settled: asset to the winner (or back to the
    /// auctioneer when no bid existed).
    AuctionSettled {
        key: MarketKey,
        winner: Option<Address>,
        amount: u128,
    },
    /// An auction was cancelled; standing bid refunded, asset returned.
    AuctionCancelled {
        key: MarketKey,
        refunded: Option<DistributionLeg>,
    },
    /// Sale proceeds were split three ways. All legs are listed even
    /// when an amount is zero.
    FundsDistributed {
        currency: Currency,
        royalty: DistributionLeg,
        platform: DistributionLeg,
        seller: DistributionLeg,
    },
    /// An unsolicited incoming native transfer was received.
    FundsReceived { from: Address, amount: u128 },
}

impl MarketEvent {
    /// Short tag for log lines.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ListingCreated { .. } => "LISTING_CREATED",
            Self::SaleCompleted { .. } => "SALE_COMPLETED",
            Self::ListingCancelled { .. } => "LISTING_CANCELLED",
            Self::AuctionCreated { .. } => "AUCTION_CREATED",
            Self::BidPlaced { .. } => "BID_PLACED",
            Self::AuctionSettled { .. } => "AUCTION_SETTLED",
            Self::AuctionCancelled { .. } => "AUCTION_CANCELLED",
            Self::FundsDistributed { .. } => "FUNDS_DISTRIBUTED",
            Self::FundsReceived { .. } => "FUNDS_RECEIVED",
        }
    }
}

/// A logged event: time-ordered id, timestamp, payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    pub at: DateTime<Utc>,
    pub event: MarketEvent,
}

impl EventRecord {
    #[must_use]
    pub fn new(event: MarketEvent) -> Self {
        Self {
            id: EventId::new(),
            at: Utc::now(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AssetId;

    fn key() -> MarketKey {
        MarketKey::new(Address::test(1), AssetId(7), Address::test(2))
    }

    #[test]
    fn event_ids_are_time_ordered() {
        let a = EventId::new();
        let b = EventId::new();
        assert!(a < b);
    }

    #[test]
    fn tags() {
        let ev = MarketEvent::ListingCancelled { key: key() };
        assert_eq!(ev.tag(), "LISTING_CANCELLED");
        let ev = MarketEvent::FundsReceived {
            from: Address::test(3),
            amount: 5,
        };
        assert_eq!(ev.tag(), "FUNDS_RECEIVED");
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = EventRecord::new(MarketEvent::SaleCompleted {
            key: key(),
            buyer: Address::test(3),
            quantity: 2,
            total_price: 200,
            currency: Currency::Native,
        });
        let json = serde_json::to_string(&record).unwrap();
        let back: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.id, back.id);
        assert_eq!(record.event, back.event);
    }
}
