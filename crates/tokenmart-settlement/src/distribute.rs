//! Three-way fund distribution.
//!
//! One settlement moves the sale total to up to three receivers: the
//! creator royalty, the platform fee, and the seller profit. The payment
//! mode is an explicit parameter, never inferred from context: a direct
//! purchase pulls token legs straight from the buyer, while escrow-funded
//! settlement (auction payout, fiat) pushes from the engine's custody.
//! Native currency always pays out of custody — the buyer's value arrived
//! with the invocation.

use serde::{Deserialize, Serialize};

use tokenmart_types::{Address, Currency, DistributionLeg, Fee, Result};

use crate::host::ChainHost;
use crate::split::split;

/// Where the funds being distributed come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementMode {
    /// Token legs pull from the buyer's pre-approved allowance.
    DirectPurchase,
    /// Token legs push from the engine's escrowed balance (auction
    /// settlement, fiat-settled sales).
    EscrowFunded,
}

/// Record of one completed distribution. All three legs are listed even
/// when an amount is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub currency: Currency,
    pub royalty: DistributionLeg,
    pub platform: DistributionLeg,
    pub seller: DistributionLeg,
}

impl Distribution {
    /// Sum of all legs — always equals the settled total.
    #[must_use]
    pub fn total(&self) -> u128 {
        self.royalty.amount + self.platform.amount + self.seller.amount
    }
}

/// Executes fund distributions against a [`ChainHost`].
pub struct PaymentSettlement;

impl PaymentSettlement {
    /// Split `total` and execute the three transfer legs.
    ///
    /// A disabled fee (null receiver or zero bips) contributes a zero
    /// leg; its share stays with the seller. Any failing transfer aborts
    /// the whole distribution — the caller must not have mutated ledger
    /// state yet.
    #[allow(clippy::too_many_arguments)]
    pub fn distribute(
        host: &mut dyn ChainHost,
        currency: Currency,
        mode: SettlementMode,
        buyer: Address,
        seller: Address,
        royalty_fee: Fee,
        platform_fee: Fee,
        total: u128,
    ) -> Result<Distribution> {
        let royalty_bips = if royalty_fee.is_disabled() { 0 } else { royalty_fee.bips };
        let platform_bips = if platform_fee.is_disabled() { 0 } else { platform_fee.bips };
        let amounts = split(total, royalty_bips, platform_bips);

        let legs = [
            (royalty_fee.receiver, amounts.royalty),
            (platform_fee.receiver, amounts.platform),
            (seller, amounts.seller),
        ];
        for (receiver, amount) in legs {
            if amount == 0 {
                continue;
            }
            match (currency, mode) {
                (Currency::Native, _) => host.native_transfer(receiver, amount)?,
                (Currency::Token(token), SettlementMode::DirectPurchase) => {
                    host.token_pull(token, buyer, receiver, amount)?;
                }
                (Currency::Token(token), SettlementMode::EscrowFunded) => {
                    host.token_push(token, receiver, amount)?;
                }
            }
        }

        tracing::debug!(
            %currency,
            royalty = amounts.royalty,
            platform = amounts.platform,
            seller = amounts.seller,
            "distribution executed"
        );
        Ok(Distribution {
            currency,
            royalty: DistributionLeg {
                receiver: royalty_fee.receiver,
                amount: amounts.royalty,
            },
            platform: DistributionLeg {
                receiver: platform_fee.receiver,
                amount: amounts.platform,
            },
            seller: DistributionLeg {
                receiver: seller,
                amount: amounts.seller,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHost;
    use tokenmart_types::MartError;

    const ENGINE: Address = Address([0xee; 32]);
    const BUYER: Address = Address([2; 32]);
    const SELLER: Address = Address([1; 32]);
    const CREATOR: Address = Address([3; 32]);
    const PLATFORM: Address = Address([4; 32]);

    fn fees() -> (Fee, Fee) {
        (
            Fee::royalty(CREATOR, 1000).unwrap(),   // 10%
            Fee::platform(PLATFORM, 500).unwrap(),  // 5%
        )
    }

    #[test]
    fn native_distribution_pays_all_legs_from_custody() {
        let mut host = MockHost::new(ENGINE);
        host.fund_custody(1000);
        let (royalty, platform) = fees();

        let dist = PaymentSettlement::distribute(
            &mut host,
            Currency::Native,
            SettlementMode::DirectPurchase,
            BUYER,
            SELLER,
            royalty,
            platform,
            1000,
        )
        .unwrap();

        assert_eq!(host.native_balance(CREATOR), 100);
        assert_eq!(host.native_balance(PLATFORM), 50);
        assert_eq!(host.native_balance(SELLER), 850);
        assert_eq!(host.custody_native(), 0);
        assert_eq!(dist.total(), 1000);
    }

    #[test]
    fn token_direct_purchase_pulls_from_buyer() {
        let mut host = MockHost::new(ENGINE);
        let token = Address::test(20);
        host.fund_token(token, BUYER, 1000);
        host.approve(token, BUYER, 1000);
        let (royalty, platform) = fees();

        PaymentSettlement::distribute(
            &mut host,
            Currency::Token(token),
            SettlementMode::DirectPurchase,
            BUYER,
            SELLER,
            royalty,
            platform,
            1000,
        )
        .unwrap();

        assert_eq!(host.token_balance(token, BUYER), 0);
        assert_eq!(host.token_balance(token, CREATOR), 100);
        assert_eq!(host.token_balance(token, PLATFORM), 50);
        assert_eq!(host.token_balance(token, SELLER), 850);
    }

    #[test]
    fn token_escrow_funded_pushes_from_engine() {
        let mut host = MockHost::new(ENGINE);
        let token = Address::test(20);
        host.fund_token(token, ENGINE, 1000);
        let (royalty, platform) = fees();

        PaymentSettlement::distribute(
            &mut host,
            Currency::Token(token),
            SettlementMode::EscrowFunded,
            BUYER,
            SELLER,
            royalty,
            platform,
            1000,
        )
        .unwrap();

        assert_eq!(host.token_balance(token, ENGINE), 0);
        assert_eq!(host.token_balance(token, SELLER), 850);
    }

    #[test]
    fn disabled_royalty_goes_to_seller_with_zero_leg() {
        let mut host = MockHost::new(ENGINE);
        host.fund_custody(1000);
        let platform = Fee::platform(PLATFORM, 500).unwrap();

        let dist = PaymentSettlement::distribute(
            &mut host,
            Currency::Native,
            SettlementMode::DirectPurchase,
            BUYER,
            SELLER,
            Fee::NONE,
            platform,
            1000,
        )
        .unwrap();

        // The zero leg is still listed.
        assert_eq!(dist.royalty.amount, 0);
        assert_eq!(dist.royalty.receiver, Address::NULL);
        assert_eq!(dist.seller.amount, 950);
        assert_eq!(host.native_balance(SELLER), 950);
    }

    #[test]
    fn failing_leg_aborts_distribution() {
        let mut host = MockHost::new(ENGINE);
        host.fund_custody(500); // Not enough for a 1000 payout.
        let (royalty, platform) = fees();

        let err = PaymentSettlement::distribute(
            &mut host,
            Currency::Native,
            SettlementMode::DirectPurchase,
            BUYER,
            SELLER,
            royalty,
            platform,
            1000,
        )
        .unwrap_err();
        assert!(matches!(err, MartError::TransferFailed { .. }));
    }

    #[test]
    fn remainder_accrues_to_seller_in_record() {
        let mut host = MockHost::new(ENGINE);
        host.fund_custody(333);
        let (royalty, platform) = fees();

        let dist = PaymentSettlement::distribute(
            &mut host,
            Currency::Native,
            SettlementMode::DirectPurchase,
            BUYER,
            SELLER,
            royalty,
            platform,
            333,
        )
        .unwrap();
        // 10% of 333 = 33.3 → 33; 5% = 16.65 → 16; seller gets 284.
        assert_eq!(dist.royalty.amount, 33);
        assert_eq!(dist.platform.amount, 16);
        assert_eq!(dist.seller.amount, 284);
        assert_eq!(dist.total(), 333);
    }
}
