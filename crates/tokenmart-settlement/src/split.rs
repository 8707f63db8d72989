//! Basis-point fee split arithmetic.
//!
//! `royalty + platform + seller == total` holds exactly for every input:
//! the two fee legs truncate (integer division over the 10000
//! denominator) and the rounding remainder accrues to the seller. This
//! tie-break is part of the accounting contract and must not change.

use serde::{Deserialize, Serialize};

use tokenmart_types::constants::BIPS_DENOMINATOR;

/// The three-way division of a sale total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSplit {
    /// Creator royalty, rounded down.
    pub royalty: u128,
    /// Platform fee, rounded down.
    pub platform: u128,
    /// Seller profit: `total - royalty - platform`.
    pub seller: u128,
}

/// Split `total` by royalty and platform basis points.
///
/// Fee bips are `u16` and each leg rounds down, so the two legs can never
/// exceed `total` for the caps enforced at configuration time (royalty
/// ≤ 2000 bp, platform ≤ 5000 bp).
#[must_use]
pub fn split(total: u128, royalty_bips: u16, platform_bips: u16) -> FeeSplit {
    let royalty = leg(total, royalty_bips);
    let platform = leg(total, platform_bips);
    FeeSplit {
        royalty,
        platform,
        seller: total - royalty - platform,
    }
}

/// `total * bips / 10000`, truncating, without intermediate overflow:
/// with `total = q * 10000 + r` the product decomposes into
/// `q * bips + r * bips / 10000`, and `q * bips <= total` for any
/// `bips <= 10000`.
fn leg(total: u128, bips: u16) -> u128 {
    let bips = u128::from(bips);
    (total / BIPS_DENOMINATOR) * bips + (total % BIPS_DENOMINATOR) * bips / BIPS_DENOMINATOR
}
