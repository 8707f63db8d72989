//! # tokenmart-market
//!
//! The bookkeeping plane: listing and auction ledgers plus the
//! administrator access policy.
//!
//! ## Architecture
//!
//! 1. **AccessPolicy**: exactly one root administrator plus an extensible
//!    administrator set; injected by reference wherever role checks happen
//! 2. **ListingLedger**: (asset contract, asset id, seller) → active
//!    fixed-price listing; create-or-increase, partial consumption,
//!    delete-on-exhaustion
//! 3. **AuctionLedger**: (asset contract, asset id, auctioneer) → active
//!    auction; monotonic bid replacement, settlement, cancellation
//!
//! The ledgers are pure bookkeeping: external effects (asset custody
//! release, refunds, payouts) are driven by the engine crate, which calls
//! the `check_*` accessors here *before* any external transfer and the
//! mutating operations *after* every transfer leg has succeeded.

pub mod access_policy;
pub mod auction_ledger;
pub mod listing_ledger;

pub use access_policy::AccessPolicy;
pub use auction_ledger::AuctionLedger;
pub use listing_ledger::ListingLedger;
