//! Error types for the TokenMart settlement engine.
//!
//! All errors use the `TM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Listing errors
//! - 2xx: Auction errors
//! - 3xx: Authorization / role errors
//! - 4xx: Payment errors
//! - 5xx: Asset transfer errors
//! - 9xx: General / internal errors
//!
//! Every validation failure is fail-fast and aborts the whole invocation:
//! there is no partial commit and no internal retry.

use thiserror::Error;

use crate::{Address, MarketKey};

/// Central error enum for all TokenMart operations.
#[derive(Debug, Error)]
pub enum MartError {
    // =================================================================
    // Listing Errors (1xx)
    // =================================================================
    /// No active listing exists under this key.
    #[error("TM_ERR_100: No active listing for {0}")]
    NoActiveListing(MarketKey),

    /// The sale terms failed validation (zero price/quantity, null
    /// addresses, unsupported asset contract).
    #[error("TM_ERR_101: Invalid terms: {reason}")]
    InvalidTerms { reason: String },

    /// A buy requested more units than the listing holds.
    #[error("TM_ERR_102: Quantity exceeded: requested {requested}, available {available}")]
    QuantityExceeded { requested: u64, available: u64 },

    // =================================================================
    // Auction Errors (2xx)
    // =================================================================
    /// No active auction exists under this key.
    #[error("TM_ERR_200: No active auction for {0}")]
    NoActiveAuction(MarketKey),

    /// A bid below the base price, or not strictly above the current bid.
    #[error("TM_ERR_201: Bid too low: {amount} below minimum acceptable {floor}")]
    BidTooLow { amount: u128, floor: u128 },

    // =================================================================
    // Authorization / Role Errors (3xx)
    // =================================================================
    /// Signature or role check failed.
    #[error("TM_ERR_300: Unauthorized: {reason}")]
    Unauthorized { reason: String },

    /// A seller buying their own listing, or an auctioneer bidding on
    /// their own auction.
    #[error("TM_ERR_301: Self-trade forbidden for {0}")]
    SelfTradeForbidden(Address),

    /// An administrator attempting to transact as buyer or bidder.
    #[error("TM_ERR_302: Administrators may not transact as buyers or bidders")]
    AdminRestricted,

    // =================================================================
    // Payment Errors (4xx)
    // =================================================================
    /// Native value mismatch or token allowance shortfall.
    #[error("TM_ERR_400: Insufficient payment: need {needed}, supplied {supplied}")]
    InsufficientPayment { needed: u128, supplied: u128 },

    /// A leg of an asset or fund transfer failed in the collaborator.
    #[error("TM_ERR_401: Transfer failed: {reason}")]
    TransferFailed { reason: String },

    /// A fee above its configured cap.
    #[error("TM_ERR_402: Fee too high: {bips} bp exceeds cap of {cap} bp")]
    FeeTooHigh { bips: u16, cap: u16 },

    // =================================================================
    // Asset Transfer Errors (5xx)
    // =================================================================
    /// The contract implements neither supported asset standard.
    #[error("TM_ERR_500: Unsupported asset contract: {0}")]
    UnsupportedAsset(Address),

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// A nested call reached a state-mutating entry point while another
    /// invocation was still executing.
    #[error("TM_ERR_900: Reentrant call rejected")]
    ReentrantCall,

    /// Serialization / deserialization error (bad deposit payload).
    #[error("TM_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, MartError>;

impl From<serde_json::Error> for MartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
