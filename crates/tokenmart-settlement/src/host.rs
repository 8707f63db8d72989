//! The collaborator boundary to the hosting platform.
//!
//! Every external effect — asset custody release, native value transfer,
//! fungible-token movement — goes through [`ChainHost`]. The engine holds
//! no platform state of its own; it only issues calls and treats any
//! failure as fatal for the whole invocation.

use tokenmart_types::{Address, AssetId, Result};

/// Which asset standard a contract implements, probed dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCapability {
    /// The single-unit ownership standard: one owner per asset id,
    /// transfers carry an implicit quantity of 1.
    SingleUnit,
    /// The multi-unit standard: per-owner quantities per asset id.
    MultiUnit,
    /// Neither supported standard.
    Unsupported,
}

/// Platform collaborator interface.
///
/// Native transfers and token pushes move value out of the engine's own
/// custody; token pulls spend a buyer's pre-approved allowance granted to
/// the engine. Collaborator calls can fail (or, on a real platform,
/// re-enter the engine) — callers sequence them before any ledger
/// mutation and propagate failures as-is.
pub trait ChainHost {
    /// Probe which asset standard `contract` implements.
    fn asset_capability(&self, contract: Address) -> AssetCapability;

    /// Single-unit transfer primitive (implicit quantity 1).
    fn transfer_single(
        &mut self,
        contract: Address,
        from: Address,
        to: Address,
        asset_id: AssetId,
    ) -> Result<()>;

    /// Quantity-bearing transfer primitive.
    fn transfer_multi(
        &mut self,
        contract: Address,
        from: Address,
        to: Address,
        asset_id: AssetId,
        quantity: u64,
    ) -> Result<()>;

    /// Transfer native currency out of the engine's custody.
    fn native_transfer(&mut self, to: Address, amount: u128) -> Result<()>;

    /// The token allowance `owner` has granted the engine.
    fn token_allowance(&self, token: Address, owner: Address) -> u128;

    /// Pull tokens from `from` (spending the engine's allowance) to `to`.
    fn token_pull(&mut self, token: Address, from: Address, to: Address, amount: u128)
        -> Result<()>;

    /// Push tokens out of the engine's own token balance to `to`.
    fn token_push(&mut self, token: Address, to: Address, amount: u128) -> Result<()>;
}

// ---------------------------------------------------------------------------
// MockHost — in-memory test double
// ---------------------------------------------------------------------------

/// In-memory [`ChainHost`] with failure injection. **Tests only.**
#[cfg(any(test, feature = "test-helpers"))]
mod mock {
    use std::collections::HashMap;

    use super::{AssetCapability, ChainHost};
    use tokenmart_types::{Address, AssetId, MartError, Result};

    /// In-memory platform double: native balances, token ledgers, asset
    /// registries, and per-subsystem failure switches.
    #[derive(Debug)]
    pub struct MockHost {
        engine: Address,
        /// Native currency held by the engine between deposit and payout.
        custody_native: u128,
        /// Native balances of everyone else.
        native: HashMap<Address, u128>,
        /// (token, owner) → balance. The engine's own escrowed tokens
        /// live under (token, engine).
        tokens: HashMap<(Address, Address), u128>,
        /// (token, owner) → allowance granted to the engine.
        allowances: HashMap<(Address, Address), u128>,
        /// Asset contract capabilities.
        capabilities: HashMap<Address, AssetCapability>,
        /// (contract, asset id, owner) → units held.
        holdings: HashMap<(Address, AssetId, Address), u64>,
        /// Failure switches.
        pub fail_native: bool,
        pub fail_token: bool,
        pub fail_asset: bool,
    }

    impl MockHost {
        #[must_use]
        pub fn new(engine: Address) -> Self {
            Self {
                engine,
                custody_native: 0,
                native: HashMap::new(),
                tokens: HashMap::new(),
                allowances: HashMap::new(),
                capabilities: HashMap::new(),
                holdings: HashMap::new(),
                fail_native: false,
                fail_token: false,
                fail_asset: false,
            }
        }

        /// Register an asset contract with the given capability.
        pub fn register_asset(&mut self, contract: Address, capability: AssetCapability) {
            self.capabilities.insert(contract, capability);
        }

        /// Credit asset units to an owner (mint-time setup).
        pub fn mint_asset(
            &mut self,
            contract: Address,
            asset_id: AssetId,
            owner: Address,
            quantity: u64,
        ) {
            *self.holdings.entry((contract, asset_id, owner)).or_insert(0) += quantity;
        }

        #[must_use]
        pub fn asset_holding(&self, contract: Address, asset_id: AssetId, owner: Address) -> u64 {
            self.holdings
                .get(&(contract, asset_id, owner))
                .copied()
                .unwrap_or(0)
        }

        /// Simulate native value arriving in engine custody (the platform
        /// credits `msg.value`-style payments automatically).
        pub fn fund_custody(&mut self, amount: u128) {
            self.custody_native += amount;
        }

        #[must_use]
        pub fn custody_native(&self) -> u128 {
            self.custody_native
        }

        #[must_use]
        pub fn native_balance(&self, addr: Address) -> u128 {
            self.native.get(&addr).copied().unwrap_or(0)
        }

        /// Credit tokens to an owner.
        pub fn fund_token(&mut self, token: Address, owner: Address, amount: u128) {
            *self.tokens.entry((token, owner)).or_insert(0) += amount;
        }

        /// Grant the engine an allowance over `owner`'s tokens.
        pub fn approve(&mut self, token: Address, owner: Address, amount: u128) {
            self.allowances.insert((token, owner), amount);
        }

        #[must_use]
        pub fn token_balance(&self, token: Address, owner: Address) -> u128 {
            self.tokens.get(&(token, owner)).copied().unwrap_or(0)
        }

        fn move_holding(
            &mut self,
            contract: Address,
            asset_id: AssetId,
            from: Address,
            to: Address,
            quantity: u64,
        ) -> Result<()> {
            let held = self.holdings.entry((contract, asset_id, from)).or_insert(0);
            if *held < quantity {
                return Err(MartError::TransferFailed {
                    reason: format!("{from} holds {held} of {asset_id}, needs {quantity}"),
                });
            }
            *held -= quantity;
            *self.holdings.entry((contract, asset_id, to)).or_insert(0) += quantity;
            Ok(())
        }
    }

    impl ChainHost for MockHost {
        fn asset_capability(&self, contract: Address) -> AssetCapability {
            self.capabilities
                .get(&contract)
                .copied()
                .unwrap_or(AssetCapability::Unsupported)
        }

        fn transfer_single(
            &mut self,
            contract: Address,
            from: Address,
            to: Address,
            asset_id: AssetId,
        ) -> Result<()> {
            if self.fail_asset {
                return Err(MartError::TransferFailed {
                    reason: "injected asset failure".into(),
                });
            }
            self.move_holding(contract, asset_id, from, to, 1)
        }

        fn transfer_multi(
            &mut self,
            contract: Address,
            from: Address,
            to: Address,
            asset_id: AssetId,
            quantity: u64,
        ) -> Result<()> {
            if self.fail_asset {
                return Err(MartError::TransferFailed {
                    reason: "injected asset failure".into(),
                });
            }
            self.move_holding(contract, asset_id, from, to, quantity)
        }

        fn native_transfer(&mut self, to: Address, amount: u128) -> Result<()> {
            if self.fail_native {
                return Err(MartError::TransferFailed {
                    reason: "injected native failure".into(),
                });
            }
            if self.custody_native < amount {
                return Err(MartError::TransferFailed {
                    reason: format!(
                        "engine custody {} below transfer of {amount}",
                        self.custody_native
                    ),
                });
            }
            self.custody_native -= amount;
            *self.native.entry(to).or_insert(0) += amount;
            Ok(())
        }

        fn token_allowance(&self, token: Address, owner: Address) -> u128 {
            self.allowances.get(&(token, owner)).copied().unwrap_or(0)
        }

        fn token_pull(
            &mut self,
            token: Address,
            from: Address,
            to: Address,
            amount: u128,
        ) -> Result<()> {
            if self.fail_token {
                return Err(MartError::TransferFailed {
                    reason: "injected token failure".into(),
                });
            }
            let allowance = self.allowances.entry((token, from)).or_insert(0);
            if *allowance < amount {
                return Err(MartError::TransferFailed {
                    reason: format!("allowance {allowance} below pull of {amount}"),
                });
            }
            let balance = self.tokens.entry((token, from)).or_insert(0);
            if *balance < amount {
                return Err(MartError::TransferFailed {
                    reason: format!("balance {balance} below pull of {amount}"),
                });
            }
            *balance -= amount;
            *self.allowances.entry((token, from)).or_insert(0) -= amount;
            *self.tokens.entry((token, to)).or_insert(0) += amount;
            Ok(())
        }

        fn token_push(&mut self, token: Address, to: Address, amount: u128) -> Result<()> {
            if self.fail_token {
                return Err(MartError::TransferFailed {
                    reason: "injected token failure".into(),
                });
            }
            let engine = self.engine;
            let balance = self.tokens.entry((token, engine)).or_insert(0);
            if *balance < amount {
                return Err(MartError::TransferFailed {
                    reason: format!("engine token balance {balance} below push of {amount}"),
                });
            }
            *balance -= amount;
            *self.tokens.entry((token, to)).or_insert(0) += amount;
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
pub use mock::MockHost;
