//! Sale terms embedded in deposit callbacks.
//!
//! When a seller transfers an asset into escrow, the transfer carries a
//! serialized [`SaleTerms`] payload. The deposit callback decodes it and
//! creates the corresponding listing or auction.

use serde::{Deserialize, Serialize};

use crate::{Currency, MartError, Result};

/// Entry-point discriminator: which ledger an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleKind {
    /// A fixed-price listing.
    FixedPrice,
    /// An ascending auction.
    Auction,
}

impl std::fmt::Display for SaleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FixedPrice => write!(f, "FIXED_PRICE"),
            Self::Auction => write!(f, "AUCTION"),
        }
    }
}

/// The terms a seller embeds in an escrow deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleTerms {
    /// Create (or top up) a fixed-price listing.
    FixedPrice {
        /// Price per unit.
        unit_price: u128,
        /// Currency buyers must pay in.
        currency: Currency,
    },
    /// Open an ascending auction.
    Auction {
        /// Minimum acceptable first bid. Must be nonzero.
        base_price: u128,
        /// Instant-buy price; 0 disables instant buy.
        instant_buy_price: u128,
        /// Currency bids are denominated in.
        currency: Currency,
    },
}

impl SaleTerms {
    /// Decode a deposit payload.
    pub fn decode(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(MartError::from)
    }

    /// Encode for embedding in a deposit.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("SaleTerms serialization cannot fail")
    }

    /// Which ledger these terms create an entry in.
    #[must_use]
    pub fn kind(&self) -> SaleKind {
        match self {
            Self::FixedPrice { .. } => SaleKind::FixedPrice,
            Self::Auction { .. } => SaleKind::Auction,
        }
    }

    /// The currency of these terms.
    #[must_use]
    pub fn currency(&self) -> Currency {
        match *self {
            Self::FixedPrice { currency, .. } | Self::Auction { currency, .. } => currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Address;

    #[test]
    fn encode_decode_fixed_price() {
        let terms = SaleTerms::FixedPrice {
            unit_price: 1000,
            currency: Currency::Native,
        };
        let back = SaleTerms::decode(&terms.encode()).unwrap();
        assert_eq!(terms, back);
        assert_eq!(back.kind(), SaleKind::FixedPrice);
    }

    #[test]
    fn encode_decode_auction() {
        let terms = SaleTerms::Auction {
            base_price: 50,
            instant_buy_price: 200,
            currency: Currency::Token(Address::test(9)),
        };
        let back = SaleTerms::decode(&terms.encode()).unwrap();
        assert_eq!(terms, back);
        assert_eq!(back.kind(), SaleKind::Auction);
        assert_eq!(back.currency(), Currency::Token(Address::test(9)));
    }

    #[test]
    fn garbage_payload_is_serialization_error() {
        let err = SaleTerms::decode(b"\x00\x01\x02").unwrap_err();
        assert!(matches!(err, MartError::Serialization(_)));
    }

    #[test]
    fn sale_kind_display() {
        assert_eq!(format!("{}", SaleKind::FixedPrice), "FIXED_PRICE");
        assert_eq!(format!("{}", SaleKind::Auction), "AUCTION");
    }
}
