//! Asset-standard transfer adapter.
//!
//! Two mutually exclusive ownership standards exist: single-unit (one
//! owner per asset, implicit quantity 1) and multi-unit (per-owner
//! quantities). The adapter probes which one a contract implements and
//! dispatches to the matching transfer primitive; contracts implementing
//! neither are rejected outright.

use tokenmart_types::{Address, AssetId, MartError, Result};

use crate::host::{AssetCapability, ChainHost};

/// Capability-dispatching transfer adapter. Stateless — the capability is
/// probed per call, never cached, so a contract upgrade cannot strand a
/// stale classification.
pub struct AssetTransferAdapter;

impl AssetTransferAdapter {
    /// Returns `true` iff the contract implements either supported
    /// standard.
    #[must_use]
    pub fn is_supported(host: &dyn ChainHost, contract: Address) -> bool {
        host.asset_capability(contract) != AssetCapability::Unsupported
    }

    /// Move `quantity` units of `asset_id` between owners, using
    /// whichever transfer primitive the contract supports.
    ///
    /// # Errors
    /// - `UnsupportedAsset` if the contract implements neither standard
    /// - `InvalidTerms` if a single-unit transfer requests a quantity
    ///   other than 1
    /// - `TransferFailed` if the primitive itself fails
    pub fn transfer(
        host: &mut dyn ChainHost,
        contract: Address,
        from: Address,
        to: Address,
        asset_id: AssetId,
        quantity: u64,
    ) -> Result<()> {
        match host.asset_capability(contract) {
            AssetCapability::SingleUnit => {
                if quantity != 1 {
                    return Err(MartError::InvalidTerms {
                        reason: format!(
                            "single-unit asset transfer requires quantity 1, got {quantity}"
                        ),
                    });
                }
                host.transfer_single(contract, from, to, asset_id)
            }
            AssetCapability::MultiUnit => {
                host.transfer_multi(contract, from, to, asset_id, quantity)
            }
            AssetCapability::Unsupported => Err(MartError::UnsupportedAsset(contract)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;

    fn setup(capability: AssetCapability) -> (MockHost, Address, Address, Address) {
        let engine = Address::test(0xee);
        let mut host = MockHost::new(engine);
        let contract = Address::test(10);
        let seller = Address::test(1);
        host.register_asset(contract, capability);
        host.mint_asset(contract, AssetId(7), seller, 5);
        (host, contract, seller, engine)
    }

    #[test]
    fn probes_support() {
        let (host, contract, _, _) = setup(AssetCapability::SingleUnit);
        assert!(AssetTransferAdapter::is_supported(&host, contract));
        assert!(!AssetTransferAdapter::is_supported(&host, Address::test(99)));
    }

    #[test]
    fn single_unit_dispatch() {
        let (mut host, contract, seller, engine) = setup(AssetCapability::SingleUnit);
        AssetTransferAdapter::transfer(&mut host, contract, seller, engine, AssetId(7), 1)
            .unwrap();
        assert_eq!(host.asset_holding(contract, AssetId(7), engine), 1);
    }

    #[test]
    fn single_unit_rejects_other_quantities() {
        let (mut host, contract, seller, engine) = setup(AssetCapability::SingleUnit);
        let err =
            AssetTransferAdapter::transfer(&mut host, contract, seller, engine, AssetId(7), 2)
                .unwrap_err();
        assert!(matches!(err, MartError::InvalidTerms { .. }));
    }

    #[test]
    fn multi_unit_dispatch() {
        let (mut host, contract, seller, engine) = setup(AssetCapability::MultiUnit);
        AssetTransferAdapter::transfer(&mut host, contract, seller, engine, AssetId(7), 3)
            .unwrap();
        assert_eq!(host.asset_holding(contract, AssetId(7), seller), 2);
        assert_eq!(host.asset_holding(contract, AssetId(7), engine), 3);
    }

    #[test]
    fn unsupported_contract_rejected() {
        let (mut host, _, seller, engine) = setup(AssetCapability::SingleUnit);
        let unknown = Address::test(99);
        let err =
            AssetTransferAdapter::transfer(&mut host, unknown, seller, engine, AssetId(7), 1)
                .unwrap_err();
        assert!(matches!(err, MartError::UnsupportedAsset(addr) if addr == unknown));
    }
}
