//! Voucher authorization.
//!
//! Vouchers are issued off-platform by administrators. The verifier never
//! trusts caller-supplied terms: the canonical digest is rebuilt from the
//! ledger's *current* stored record for the key, so a voucher authorizes
//! exactly what the ledger holds — once the record mutates (a partial
//! buy, a relist), the old signature goes stale. This closes the
//! terms-substitution attack of replaying a signature against modified
//! terms.

use sha2::{Digest, Sha256};

use tokenmart_market::AccessPolicy;
use tokenmart_types::constants::{AUCTION_DOMAIN_TAG, LISTING_DOMAIN_TAG};
use tokenmart_types::{
    Auction, EngineConfig, Listing, MarketKey, MartError, Result, Voucher,
};

/// Rebuilds canonical digests and checks administrator signatures.
pub struct AuthorizationVerifier;

impl AuthorizationVerifier {
    /// Canonical digest of a stored listing, bound to this deployment's
    /// domain. Fields: asset id, unit price, quantity, currency, seller,
    /// asset contract.
    #[must_use]
    pub fn listing_digest(config: &EngineConfig, key: &MarketKey, listing: &Listing) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(LISTING_DOMAIN_TAG);
        hasher.update(config.domain());
        hasher.update(listing.asset_id.0.to_le_bytes());
        hasher.update(listing.unit_price.to_le_bytes());
        hasher.update(u128::from(listing.quantity).to_le_bytes());
        hasher.update(listing.currency.to_address().as_bytes());
        hasher.update(listing.seller.as_bytes());
        hasher.update(key.asset_contract.as_bytes());
        hasher.finalize().into()
    }

    /// Canonical digest of a stored auction. Fields: asset id, base
    /// price, instant-buy price, quantity, currency, auctioneer, asset
    /// contract.
    #[must_use]
    pub fn auction_digest(config: &EngineConfig, key: &MarketKey, auction: &Auction) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(AUCTION_DOMAIN_TAG);
        hasher.update(config.domain());
        hasher.update(auction.asset_id.0.to_le_bytes());
        hasher.update(auction.base_price.to_le_bytes());
        hasher.update(auction.instant_buy_price.to_le_bytes());
        hasher.update(u128::from(auction.quantity).to_le_bytes());
        hasher.update(auction.currency.to_address().as_bytes());
        hasher.update(auction.auctioneer.as_bytes());
        hasher.update(key.asset_contract.as_bytes());
        hasher.finalize().into()
    }

    /// Verify a voucher against the stored listing record.
    ///
    /// # Errors
    /// `Unauthorized` if the signature does not verify over the current
    /// record's digest, or the signer holds no administrator role.
    pub fn verify_listing(
        policy: &AccessPolicy,
        config: &EngineConfig,
        key: &MarketKey,
        listing: &Listing,
        voucher: &Voucher,
    ) -> Result<()> {
        let digest = Self::listing_digest(config, key, listing);
        Self::check(policy, voucher, &digest)
    }

    /// Verify a voucher against the stored auction record.
    pub fn verify_auction(
        policy: &AccessPolicy,
        config: &EngineConfig,
        key: &MarketKey,
        auction: &Auction,
        voucher: &Voucher,
    ) -> Result<()> {
        let digest = Self::auction_digest(config, key, auction);
        Self::check(policy, voucher, &digest)
    }

    fn check(policy: &AccessPolicy, voucher: &Voucher, digest: &[u8; 32]) -> Result<()> {
        voucher.check_signature(digest)?;
        if !policy.is_admin(voucher.signer) {
            return Err(MartError::Unauthorized {
                reason: format!("voucher signer {} holds no admin role", voucher.signer),
            });
        }
        Ok(())
    }
}
