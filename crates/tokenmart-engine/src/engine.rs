//! The externally invocable entry points.
//!
//! Every state-mutating operation follows the same discipline:
//! acquire the invocation lock, validate against the ledgers' current
//! state, verify the voucher where one is required, execute external
//! transfers through the [`ChainHost`], and only then commit the ledger
//! mutation and append the audit event. A failure anywhere propagates
//! before any ledger state changes.

use std::collections::HashMap;

use tokenmart_market::{AccessPolicy, AuctionLedger, ListingLedger};
use tokenmart_settlement::{
    AssetCapability, AssetTransferAdapter, ChainHost, Distribution, PaymentSettlement,
    SettlementMode,
};
use tokenmart_types::{
    Address, AssetId, Auction, Currency, DistributionLeg, EngineConfig, EventRecord, Fee, Listing,
    MarketEvent, MarketKey, MartError, Result, SaleKind, SaleTerms, Voucher,
};

use crate::lock::InvocationLock;
use crate::verifier::AuthorizationVerifier;

/// Identity and value of one invocation.
#[derive(Debug, Clone, Copy)]
pub struct CallContext {
    /// The invoking account (or contract).
    pub caller: Address,
    /// Native value submitted with the call, already in engine custody.
    pub value: u128,
    /// Whether the call originated from another contract rather than an
    /// externally owned account.
    pub from_contract: bool,
}

impl CallContext {
    /// A plain call from an externally owned account, no value attached.
    #[must_use]
    pub fn direct(caller: Address) -> Self {
        Self {
            caller,
            value: 0,
            from_contract: false,
        }
    }

    /// A call carrying native value.
    #[must_use]
    pub fn with_value(caller: Address, value: u128) -> Self {
        Self {
            caller,
            value,
            from_contract: false,
        }
    }

    /// A call originating from another contract.
    #[must_use]
    pub fn contract_call(caller: Address) -> Self {
        Self {
            caller,
            value: 0,
            from_contract: true,
        }
    }
}

/// The marketplace settlement engine.
///
/// Owns the two ledgers, the access policy, the fee configuration, and
/// the append-only event log. All external effects go through the
/// [`ChainHost`] passed into each entry point.
pub struct MarketEngine {
    config: EngineConfig,
    policy: AccessPolicy,
    listings: ListingLedger,
    auctions: AuctionLedger,
    /// Per-asset-contract creator royalty, registered by administrators.
    royalties: HashMap<Address, Fee>,
    lock: InvocationLock,
    events: Vec<EventRecord>,
}

impl MarketEngine {
    /// Create an engine with the given deployment config and root
    /// administrator.
    pub fn new(config: EngineConfig, root_admin: Address) -> Result<Self> {
        Ok(Self {
            config,
            policy: AccessPolicy::new(root_admin)?,
            listings: ListingLedger::new(),
            auctions: AuctionLedger::new(),
            royalties: HashMap::new(),
            lock: InvocationLock::new(),
            events: Vec::new(),
        })
    }

    // =====================================================================
    // Read surface
    // =====================================================================

    #[must_use]
    pub fn listing(&self, key: &MarketKey) -> Option<&Listing> {
        self.listings.get(key)
    }

    #[must_use]
    pub fn auction(&self, key: &MarketKey) -> Option<&Auction> {
        self.auctions.get(key)
    }

    #[must_use]
    pub fn platform_fee(&self) -> Fee {
        self.config.platform_fee
    }

    #[must_use]
    pub fn creator_royalty(&self, asset_contract: Address) -> Fee {
        self.royalties
            .get(&asset_contract)
            .copied()
            .unwrap_or(Fee::NONE)
    }

    #[must_use]
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The audit trail, oldest first.
    #[must_use]
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    // =====================================================================
    // Deposit callbacks
    // =====================================================================

    /// Callback for a single-unit asset arriving in escrow. The caller
    /// *is* the asset contract; `data` carries the serialized
    /// [`SaleTerms`]. Creates a listing or auction with quantity 1.
    pub fn on_single_unit_deposit(
        &mut self,
        host: &dyn ChainHost,
        ctx: CallContext,
        seller: Address,
        asset_id: AssetId,
        data: &[u8],
    ) -> Result<()> {
        self.lock.enter()?;
        let result =
            self.deposit_inner(host, ctx, seller, asset_id, 1, data, AssetCapability::SingleUnit);
        self.lock.exit();
        result
    }

    /// Callback for a multi-unit asset arriving in escrow, with the
    /// deposited quantity supplied by the asset contract.
    pub fn on_multi_unit_deposit(
        &mut self,
        host: &dyn ChainHost,
        ctx: CallContext,
        seller: Address,
        asset_id: AssetId,
        quantity: u64,
        data: &[u8],
    ) -> Result<()> {
        self.lock.enter()?;
        let result = self.deposit_inner(
            host,
            ctx,
            seller,
            asset_id,
            quantity,
            data,
            AssetCapability::MultiUnit,
        );
        self.lock.exit();
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn deposit_inner(
        &mut self,
        host: &dyn ChainHost,
        ctx: CallContext,
        seller: Address,
        asset_id: AssetId,
        quantity: u64,
        data: &[u8],
        expected: AssetCapability,
    ) -> Result<()> {
        // Only a supported asset contract of the matching standard may
        // trigger its own deposit hook.
        if host.asset_capability(ctx.caller) != expected {
            return Err(MartError::UnsupportedAsset(ctx.caller));
        }
        let terms = SaleTerms::decode(data)?;
        let key = MarketKey::new(ctx.caller, asset_id, seller);
        match terms {
            SaleTerms::FixedPrice {
                unit_price,
                currency,
            } => {
                self.listings
                    .create_or_increase(key, unit_price, quantity, currency)?;
                tracing::info!(%key, unit_price, quantity, %currency, "listing created");
                self.push_event(MarketEvent::ListingCreated {
                    key,
                    unit_price,
                    quantity,
                    currency,
                });
            }
            SaleTerms::Auction {
                base_price,
                instant_buy_price,
                currency,
            } => {
                self.auctions
                    .create(key, base_price, instant_buy_price, quantity, currency)?;
                tracing::info!(%key, base_price, instant_buy_price, %currency, "auction created");
                self.push_event(MarketEvent::AuctionCreated {
                    key,
                    base_price,
                    instant_buy_price,
                    quantity,
                    currency,
                });
            }
        }
        Ok(())
    }

    // =====================================================================
    // Buying
    // =====================================================================

    /// Fixed-price purchase or auction instant-buy, by sale-type
    /// discriminator. `quantity` applies to fixed-price sales; an
    /// auction lot is always sold whole.
    pub fn buy(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        key: MarketKey,
        kind: SaleKind,
        quantity: u64,
        voucher: &Voucher,
    ) -> Result<Distribution> {
        self.lock.enter()?;
        let result = match kind {
            SaleKind::FixedPrice => self.buy_listing_inner(host, ctx, key, quantity, voucher),
            SaleKind::Auction => self.instant_buy_inner(host, ctx, key, voucher),
        };
        self.lock.exit();
        result
    }

    fn buy_listing_inner(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        key: MarketKey,
        quantity: u64,
        voucher: &Voucher,
    ) -> Result<Distribution> {
        let listing = self
            .listings
            .check_buy(&key, ctx.caller, quantity, &self.policy)?
            .clone();
        AuthorizationVerifier::verify_listing(
            &self.policy,
            &self.config,
            &key,
            &listing,
            voucher,
        )?;

        let total = listing
            .total_price(quantity)
            .ok_or_else(|| MartError::InvalidTerms {
                reason: "total price overflow".into(),
            })?;
        self.check_payment(host, &ctx, listing.currency, total)?;

        AssetTransferAdapter::transfer(
            host,
            key.asset_contract,
            self.config.engine_address,
            ctx.caller,
            key.asset_id,
            quantity,
        )?;
        let dist = PaymentSettlement::distribute(
            host,
            listing.currency,
            SettlementMode::DirectPurchase,
            ctx.caller,
            listing.seller,
            self.creator_royalty(key.asset_contract),
            self.config.platform_fee,
            total,
        )?;

        self.listings.consume(&key, quantity)?;
        tracing::info!(%key, buyer = %ctx.caller, quantity, total, "sale completed");
        self.push_sale_events(key, ctx.caller, quantity, total, listing.currency, dist);
        Ok(dist)
    }

    fn instant_buy_inner(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        key: MarketKey,
        voucher: &Voucher,
    ) -> Result<Distribution> {
        let auction = self
            .auctions
            .get(&key)
            .ok_or(MartError::NoActiveAuction(key))?
            .clone();
        if self.policy.is_admin(ctx.caller) {
            return Err(MartError::AdminRestricted);
        }
        if ctx.caller == auction.auctioneer {
            return Err(MartError::SelfTradeForbidden(ctx.caller));
        }
        let price = auction.instant_buy_price;
        // Instant buy is only open while it beats the standing bid
        // (price 0 means the auctioneer disabled it).
        if price == 0 || price <= auction.current_bid {
            return Err(MartError::BidTooLow {
                amount: price,
                floor: auction.current_bid.saturating_add(1),
            });
        }
        AuthorizationVerifier::verify_auction(
            &self.policy,
            &self.config,
            &key,
            &auction,
            voucher,
        )?;
        self.check_payment(host, &ctx, auction.currency, price)?;

        self.refund_standing_bid(host, &auction)?;
        AssetTransferAdapter::transfer(
            host,
            key.asset_contract,
            self.config.engine_address,
            ctx.caller,
            key.asset_id,
            auction.quantity,
        )?;
        let dist = PaymentSettlement::distribute(
            host,
            auction.currency,
            SettlementMode::DirectPurchase,
            ctx.caller,
            auction.auctioneer,
            self.creator_royalty(key.asset_contract),
            self.config.platform_fee,
            price,
        )?;

        self.auctions.remove(&key)?;
        tracing::info!(%key, buyer = %ctx.caller, price, "auction instant-buy completed");
        self.push_sale_events(key, ctx.caller, auction.quantity, price, auction.currency, dist);
        Ok(dist)
    }

    /// Administrator-only completion of a sale on behalf of an
    /// off-platform (fiat) buyer. Performs the same voucher verification
    /// and ledger mutation as [`MarketEngine::buy`], but payment is
    /// assumed to already sit in engine custody from an external on-ramp,
    /// and the self-trade/admin-buyer restrictions do not apply to the
    /// third-party buyer.
    #[allow(clippy::too_many_arguments)]
    pub fn fiat_settle(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        buyer: Address,
        key: MarketKey,
        kind: SaleKind,
        quantity: u64,
        voucher: &Voucher,
    ) -> Result<Distribution> {
        self.lock.enter()?;
        let result = self.fiat_settle_inner(host, ctx, buyer, key, kind, quantity, voucher);
        self.lock.exit();
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn fiat_settle_inner(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        buyer: Address,
        key: MarketKey,
        kind: SaleKind,
        quantity: u64,
        voucher: &Voucher,
    ) -> Result<Distribution> {
        if !self.policy.is_admin(ctx.caller) {
            return Err(MartError::Unauthorized {
                reason: "fiat settlement is administrator-only".into(),
            });
        }
        if buyer.is_null() {
            return Err(MartError::InvalidTerms {
                reason: "fiat buyer cannot be the null address".into(),
            });
        }
        match kind {
            SaleKind::FixedPrice => {
                let listing = self.listings.check_quantity(&key, quantity)?.clone();
                AuthorizationVerifier::verify_listing(
                    &self.policy,
                    &self.config,
                    &key,
                    &listing,
                    voucher,
                )?;
                let total =
                    listing
                        .total_price(quantity)
                        .ok_or_else(|| MartError::InvalidTerms {
                            reason: "total price overflow".into(),
                        })?;

                AssetTransferAdapter::transfer(
                    host,
                    key.asset_contract,
                    self.config.engine_address,
                    buyer,
                    key.asset_id,
                    quantity,
                )?;
                let dist = PaymentSettlement::distribute(
                    host,
                    listing.currency,
                    SettlementMode::EscrowFunded,
                    buyer,
                    listing.seller,
                    self.creator_royalty(key.asset_contract),
                    self.config.platform_fee,
                    total,
                )?;

                self.listings.consume(&key, quantity)?;
                tracing::info!(%key, %buyer, quantity, total, "fiat sale completed");
                self.push_sale_events(key, buyer, quantity, total, listing.currency, dist);
                Ok(dist)
            }
            SaleKind::Auction => {
                let auction = self
                    .auctions
                    .get(&key)
                    .ok_or(MartError::NoActiveAuction(key))?
                    .clone();
                let price = auction.instant_buy_price;
                if price == 0 || price <= auction.current_bid {
                    return Err(MartError::BidTooLow {
                        amount: price,
                        floor: auction.current_bid.saturating_add(1),
                    });
                }
                AuthorizationVerifier::verify_auction(
                    &self.policy,
                    &self.config,
                    &key,
                    &auction,
                    voucher,
                )?;

                self.refund_standing_bid(host, &auction)?;
                AssetTransferAdapter::transfer(
                    host,
                    key.asset_contract,
                    self.config.engine_address,
                    buyer,
                    key.asset_id,
                    auction.quantity,
                )?;
                let dist = PaymentSettlement::distribute(
                    host,
                    auction.currency,
                    SettlementMode::EscrowFunded,
                    buyer,
                    auction.auctioneer,
                    self.creator_royalty(key.asset_contract),
                    self.config.platform_fee,
                    price,
                )?;

                self.auctions.remove(&key)?;
                tracing::info!(%key, %buyer, price, "fiat auction settlement completed");
                self.push_sale_events(key, buyer, auction.quantity, price, auction.currency, dist);
                Ok(dist)
            }
        }
    }

    // =====================================================================
    // Listing cancellation
    // =====================================================================

    /// Return the escrowed asset to the seller and delete the listing.
    /// Seller or administrator only.
    pub fn cancel_listing(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        key: MarketKey,
    ) -> Result<()> {
        self.lock.enter()?;
        let result = self.cancel_listing_inner(host, ctx, key);
        self.lock.exit();
        result
    }

    fn cancel_listing_inner(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        key: MarketKey,
    ) -> Result<()> {
        let listing = self
            .listings
            .get(&key)
            .ok_or(MartError::NoActiveListing(key))?
            .clone();
        if ctx.caller != listing.seller && !self.policy.is_admin(ctx.caller) {
            return Err(MartError::Unauthorized {
                reason: "only the seller or an administrator may cancel a listing".into(),
            });
        }
        AssetTransferAdapter::transfer(
            host,
            key.asset_contract,
            self.config.engine_address,
            listing.seller,
            key.asset_id,
            listing.quantity,
        )?;
        self.listings.remove(&key)?;
        tracing::info!(%key, "listing cancelled");
        self.push_event(MarketEvent::ListingCancelled { key });
        Ok(())
    }

    // =====================================================================
    // Bidding
    // =====================================================================

    /// Record a bid; the displaced bidder (if any) is refunded their full
    /// prior bid in the same currency. Contract-originated calls are
    /// rejected.
    pub fn place_bid(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        key: MarketKey,
        amount: u128,
        voucher: &Voucher,
    ) -> Result<()> {
        self.lock.enter()?;
        let result = self.place_bid_inner(host, ctx, key, amount, voucher);
        self.lock.exit();
        result
    }

    fn place_bid_inner(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        key: MarketKey,
        amount: u128,
        voucher: &Voucher,
    ) -> Result<()> {
        if ctx.from_contract {
            return Err(MartError::Unauthorized {
                reason: "contract callers cannot place bids".into(),
            });
        }
        let auction = self
            .auctions
            .check_bid(&key, ctx.caller, amount, &self.policy)?
            .clone();
        AuthorizationVerifier::verify_auction(
            &self.policy,
            &self.config,
            &key,
            &auction,
            voucher,
        )?;

        match auction.currency {
            Currency::Native => {
                // The submitted value must equal the bid exactly; it is
                // already in engine custody.
                if ctx.value != amount {
                    return Err(MartError::InsufficientPayment {
                        needed: amount,
                        supplied: ctx.value,
                    });
                }
            }
            Currency::Token(token) => {
                let allowance = host.token_allowance(token, ctx.caller);
                if allowance < amount {
                    return Err(MartError::InsufficientPayment {
                        needed: amount,
                        supplied: allowance,
                    });
                }
                // Pull the bid into escrow; it is held until the bidder
                // is outbid, wins, or the auction is cancelled.
                host.token_pull(token, ctx.caller, self.config.engine_address, amount)?;
            }
        }

        self.refund_standing_bid(host, &auction)?;
        let displaced = self.auctions.record_bid(&key, ctx.caller, amount)?;
        tracing::debug!(%key, bidder = %ctx.caller, amount, "bid placed");
        self.push_event(MarketEvent::BidPlaced {
            key,
            bidder: ctx.caller,
            amount,
            refunded: displaced,
        });
        Ok(())
    }

    // =====================================================================
    // Auction settlement / cancellation
    // =====================================================================

    /// Finalize an auction: asset to the winning bidder and proceeds to
    /// the auctioneer (split three ways), or a no-sale return when no bid
    /// exists. Auctioneer or administrator only.
    pub fn settle_auction(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        key: MarketKey,
    ) -> Result<()> {
        self.lock.enter()?;
        let result = self.settle_auction_inner(host, ctx, key);
        self.lock.exit();
        result
    }

    fn settle_auction_inner(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        key: MarketKey,
    ) -> Result<()> {
        let auction = self.auction_for_party_op(ctx.caller, &key)?;

        if let Some(winner) = auction.current_bidder {
            AssetTransferAdapter::transfer(
                host,
                key.asset_contract,
                self.config.engine_address,
                winner,
                key.asset_id,
                auction.quantity,
            )?;
            // Proceeds sit in escrow since the winning bid was placed.
            let dist = PaymentSettlement::distribute(
                host,
                auction.currency,
                SettlementMode::EscrowFunded,
                winner,
                auction.auctioneer,
                self.creator_royalty(key.asset_contract),
                self.config.platform_fee,
                auction.current_bid,
            )?;
            self.auctions.remove(&key)?;
            tracing::info!(%key, winner = %winner, amount = auction.current_bid, "auction settled");
            self.push_event(MarketEvent::AuctionSettled {
                key,
                winner: Some(winner),
                amount: auction.current_bid,
            });
            self.push_event(MarketEvent::FundsDistributed {
                currency: auction.currency,
                royalty: dist.royalty,
                platform: dist.platform,
                seller: dist.seller,
            });
        } else {
            // No sale: the asset goes back to the auctioneer, nothing is
            // paid out.
            AssetTransferAdapter::transfer(
                host,
                key.asset_contract,
                self.config.engine_address,
                auction.auctioneer,
                key.asset_id,
                auction.quantity,
            )?;
            self.auctions.remove(&key)?;
            tracing::info!(%key, "auction settled with no bids");
            self.push_event(MarketEvent::AuctionSettled {
                key,
                winner: None,
                amount: 0,
            });
        }
        Ok(())
    }

    /// Refund any standing bid, return the asset to the auctioneer, and
    /// delete the auction. Auctioneer or administrator only.
    pub fn cancel_auction(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        key: MarketKey,
    ) -> Result<()> {
        self.lock.enter()?;
        let result = self.cancel_auction_inner(host, ctx, key);
        self.lock.exit();
        result
    }

    fn cancel_auction_inner(
        &mut self,
        host: &mut dyn ChainHost,
        ctx: CallContext,
        key: MarketKey,
    ) -> Result<()> {
        let auction = self.auction_for_party_op(ctx.caller, &key)?;

        self.refund_standing_bid(host, &auction)?;
        AssetTransferAdapter::transfer(
            host,
            key.asset_contract,
            self.config.engine_address,
            auction.auctioneer,
            key.asset_id,
            auction.quantity,
        )?;
        self.auctions.remove(&key)?;
        let refunded = auction.current_bidder.map(|receiver| DistributionLeg {
            receiver,
            amount: auction.current_bid,
        });
        tracing::info!(%key, "auction cancelled");
        self.push_event(MarketEvent::AuctionCancelled { key, refunded });
        Ok(())
    }

    // =====================================================================
    // Administration
    // =====================================================================

    /// Update the platform-wide fee. Administrator only; caps at 5000 bp.
    pub fn set_platform_fee(&mut self, ctx: CallContext, receiver: Address, bips: u16) -> Result<()> {
        self.require_admin(ctx.caller)?;
        self.config.platform_fee = Fee::platform(receiver, bips)?;
        Ok(())
    }

    /// Register (or update) the creator royalty for an asset contract.
    /// Administrator only; caps at 2000 bp.
    pub fn set_creator_royalty(
        &mut self,
        ctx: CallContext,
        asset_contract: Address,
        receiver: Address,
        bips: u16,
    ) -> Result<()> {
        self.require_admin(ctx.caller)?;
        if asset_contract.is_null() {
            return Err(MartError::InvalidTerms {
                reason: "royalty asset contract cannot be the null address".into(),
            });
        }
        self.royalties
            .insert(asset_contract, Fee::royalty(receiver, bips)?);
        Ok(())
    }

    /// Grant an administrator role. Root administrator only.
    pub fn grant_admin_role(&mut self, ctx: CallContext, addr: Address) -> Result<()> {
        self.policy.grant_admin(ctx.caller, addr)
    }

    /// Revoke an administrator role. Root administrator only.
    pub fn revoke_admin_role(&mut self, ctx: CallContext, addr: Address) -> Result<()> {
        self.policy.revoke_admin(ctx.caller, addr)
    }

    /// Hand the root administrator role to another address. Root only;
    /// exactly one root exists at any time.
    pub fn change_root_admin(&mut self, ctx: CallContext, new_root: Address) -> Result<()> {
        self.policy.change_root_admin(ctx.caller, new_root)
    }

    /// Hook for unsolicited incoming native transfers: logged, never
    /// rejected.
    pub fn receive_funds(&mut self, ctx: CallContext) {
        self.push_event(MarketEvent::FundsReceived {
            from: ctx.caller,
            amount: ctx.value,
        });
    }

    // =====================================================================
    // Internals
    // =====================================================================

    /// Validate a native value or token allowance against the amount due.
    fn check_payment(
        &self,
        host: &dyn ChainHost,
        ctx: &CallContext,
        currency: Currency,
        total: u128,
    ) -> Result<()> {
        match currency {
            Currency::Native => {
                if ctx.value != total {
                    return Err(MartError::InsufficientPayment {
                        needed: total,
                        supplied: ctx.value,
                    });
                }
            }
            Currency::Token(token) => {
                let allowance = host.token_allowance(token, ctx.caller);
                if allowance < total {
                    return Err(MartError::InsufficientPayment {
                        needed: total,
                        supplied: allowance,
                    });
                }
            }
        }
        Ok(())
    }

    /// Refund the standing bid out of engine escrow, if one exists.
    fn refund_standing_bid(&self, host: &mut dyn ChainHost, auction: &Auction) -> Result<()> {
        let Some(bidder) = auction.current_bidder else {
            return Ok(());
        };
        match auction.currency {
            Currency::Native => host.native_transfer(bidder, auction.current_bid),
            Currency::Token(token) => host.token_push(token, bidder, auction.current_bid),
        }
    }

    /// Look up an auction for a settle/cancel operation and check the
    /// caller is its auctioneer or an administrator.
    fn auction_for_party_op(&self, caller: Address, key: &MarketKey) -> Result<Auction> {
        let auction = self
            .auctions
            .get(key)
            .ok_or(MartError::NoActiveAuction(*key))?;
        if caller != auction.auctioneer && !self.policy.is_admin(caller) {
            return Err(MartError::Unauthorized {
                reason: "only the auctioneer or an administrator may do this".into(),
            });
        }
        Ok(auction.clone())
    }

    fn require_admin(&self, caller: Address) -> Result<()> {
        if self.policy.is_admin(caller) {
            Ok(())
        } else {
            Err(MartError::Unauthorized {
                reason: format!("{caller} holds no admin role"),
            })
        }
    }

    fn push_sale_events(
        &mut self,
        key: MarketKey,
        buyer: Address,
        quantity: u64,
        total_price: u128,
        currency: Currency,
        dist: Distribution,
    ) {
        self.push_event(MarketEvent::SaleCompleted {
            key,
            buyer,
            quantity,
            total_price,
            currency,
        });
        self.push_event(MarketEvent::FundsDistributed {
            currency,
            royalty: dist.royalty,
            platform: dist.platform,
            seller: dist.seller,
        });
    }

    fn push_event(&mut self, event: MarketEvent) {
        self.events.push(EventRecord::new(event));
    }
}

/// Lock manipulation for reentrancy tests. **Never use in production.**
impl MarketEngine {
    /// Hold the invocation lock, as if an invocation were mid-flight.
    ///
    /// # Panics
    /// If an invocation is already executing.
    #[doc(hidden)]
    pub fn seize_lock(&mut self) {
        self.lock.enter().expect("lock already held");
    }

    /// Whether the invocation lock is currently held.
    #[doc(hidden)]
    #[must_use]
    pub fn lock_held(&self) -> bool {
        self.lock.is_held()
    }
}
