//! Identifiers used throughout TokenMart.
//!
//! An [`Address`] is the raw ed25519 public key of an account or contract
//! (32 bytes). The all-zero address is a reserved sentinel: it denotes
//! "no receiver" in fee configuration and "native currency" in currency
//! fields, and is never a valid party to a sale.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// An account or contract address: the raw ed25519 public key (32 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Address(pub [u8; 32]);

impl Address {
    /// The reserved null sentinel (all zeroes).
    pub const NULL: Self = Self([0u8; 32]);

    #[must_use]
    pub fn from_pubkey(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns `true` if this is the reserved null sentinel.
    #[must_use]
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "addr:{}", hex::encode(&self.0[..8]))
    }
}

// ---------------------------------------------------------------------------
// AssetId
// ---------------------------------------------------------------------------

/// Identifier of one asset within an asset contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AssetId(pub u128);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// MarketKey
// ---------------------------------------------------------------------------

/// The composite key both ledgers are indexed by:
/// (asset contract, asset id, seller/auctioneer).
///
/// One party can have at most one active listing and one active auction
/// per (contract, asset) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketKey {
    /// The asset-ownership contract holding the asset.
    pub asset_contract: Address,
    /// The asset within that contract.
    pub asset_id: AssetId,
    /// The seller (fixed-price) or auctioneer (auction).
    pub party: Address,
}

impl MarketKey {
    #[must_use]
    pub fn new(asset_contract: Address, asset_id: AssetId, party: Address) -> Self {
        Self {
            asset_contract,
            asset_id,
            party,
        }
    }
}

impl fmt::Display for MarketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.asset_contract.short(),
            self.asset_id.0,
            self.party.short()
        )
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Deterministic test addresses. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl Address {
    /// An address whose bytes are all `tag`. `Address::test(0)` is NULL.
    #[must_use]
    pub fn test(tag: u8) -> Self {
        Self([tag; 32])
    }

    /// A fresh random address (not a usable signing identity).
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }
}
