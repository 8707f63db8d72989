//! # tokenmart-settlement
//!
//! The money-movement plane: fee split arithmetic, three-way fund
//! distribution, and the asset-standard transfer adapter.
//!
//! ## Architecture
//!
//! 1. **ChainHost**: the collaborator boundary — native transfers, token
//!    pulls/pushes, asset capability probing and custody release all go
//!    through this trait; the engine never talks to the platform directly
//! 2. **AssetTransferAdapter**: probes which of the two asset standards a
//!    contract implements and dispatches to the matching primitive
//! 3. **split**: basis-point arithmetic — royalty and platform fee round
//!    down, the remainder accrues to the seller, the sum is exact
//! 4. **PaymentSettlement**: executes the three legs in the designated
//!    currency and payment mode, producing a [`Distribution`] record
//!
//! Every host call is a potential failure point; any failing leg aborts
//! the whole invocation with `TransferFailed` before the caller commits
//! ledger state.

pub mod asset_adapter;
pub mod distribute;
pub mod host;
pub mod split;

pub use asset_adapter::AssetTransferAdapter;
pub use distribute::{Distribution, PaymentSettlement, SettlementMode};
pub use host::{AssetCapability, ChainHost};
pub use split::{split, FeeSplit};

#[cfg(any(test, feature = "test-helpers"))]
pub use host::MockHost;
