//! # tokenmart-engine
//!
//! The externally invocable surface of the TokenMart settlement engine.
//!
//! ## Architecture
//!
//! 1. **InvocationLock**: global reentrancy guard — set on entry, cleared
//!    on every exit path; any nested call into a state-mutating entry
//!    point is rejected outright
//! 2. **AuthorizationVerifier**: rebuilds the canonical voucher digest
//!    from the ledger's *current* record and checks the administrator
//!    signature over it
//! 3. **MarketEngine**: the entry points — deposit callbacks, buy,
//!    fiat settlement, bidding, auction settlement/cancellation, and
//!    role/fee administration
//!
//! ## Invocation Flow
//!
//! ```text
//! entry point → InvocationLock.enter() → ledger checks → voucher verify
//!             → external transfers (ChainHost) → ledger mutation
//!             → event append → InvocationLock.exit()
//! ```
//!
//! Ledger state mutates only after every external transfer leg has
//! succeeded, so a failed invocation leaves no partial state behind.

pub mod engine;
pub mod lock;
pub mod verifier;

pub use engine::{CallContext, MarketEngine};
pub use lock::InvocationLock;
pub use verifier::AuthorizationVerifier;
