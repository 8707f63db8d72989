//! # tokenmart-types
//!
//! Shared types, errors, and configuration for the **TokenMart** marketplace
//! settlement engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Address`], [`AssetId`], [`MarketKey`]
//! - **Currency model**: [`Currency`] with the native-currency sentinel
//! - **Sale records**: [`Listing`], [`Auction`]
//! - **Sale terms**: [`SaleTerms`], [`SaleKind`] (deposit-callback payloads)
//! - **Fees**: [`Fee`] in basis points, with platform/royalty caps
//! - **Vouchers**: [`Voucher`] — the off-platform authorization signature
//! - **Events**: [`MarketEvent`], [`EventRecord`] (audit trail)
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`MartError`] with `TM_ERR_` prefix codes
//! - **Constants**: fee caps, digest domain tags, engine identity

pub mod auction;
pub mod config;
pub mod constants;
pub mod currency;
pub mod error;
pub mod event;
pub mod fee;
pub mod ids;
pub mod listing;
pub mod terms;
pub mod voucher;

// Re-export all primary types at crate root for ergonomic imports:
//   use tokenmart_types::{Address, Listing, Auction, MartError, ...};

pub use auction::*;
pub use config::*;
pub use currency::*;
pub use error::*;
pub use event::*;
pub use fee::*;
pub use ids::*;
pub use listing::*;
pub use terms::*;
pub use voucher::*;

// Constants are accessed via `tokenmart_types::constants::FOO`
// (not re-exported to avoid name collisions).
