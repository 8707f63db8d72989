//! System-wide constants for the TokenMart settlement engine.

/// Denominator for basis-point fee arithmetic (1 bp = 0.01%).
pub const BIPS_DENOMINATOR: u128 = 10_000;

/// Maximum platform fee: 5000 bp (50%).
pub const MAX_PLATFORM_FEE_BIPS: u16 = 5_000;

/// Maximum per-contract creator royalty: 2000 bp (20%).
pub const MAX_ROYALTY_BIPS: u16 = 2_000;

/// Domain tag for fixed-price listing voucher digests.
pub const LISTING_DOMAIN_TAG: &[u8] = b"tokenmart:listing:v1:";

/// Domain tag for auction voucher digests.
pub const AUCTION_DOMAIN_TAG: &[u8] = b"tokenmart:auction:v1:";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name. Bound into every voucher digest together with the
/// version so signatures cannot replay against a different deployment.
pub const ENGINE_NAME: &str = "TokenMart";
