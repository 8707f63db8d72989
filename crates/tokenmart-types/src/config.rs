//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::{Address, Fee};

/// Configuration for one engine deployment.
///
/// `name` and `version` feed the voucher digest domain separator, so a
/// signature issued for one deployment can never authorize an operation
/// on another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine name bound into voucher digests.
    pub name: String,
    /// Engine version bound into voucher digests.
    pub version: String,
    /// The engine's own custodial address (holds escrowed assets and
    /// in-flight funds).
    pub engine_address: Address,
    /// Platform-wide fee applied to every settlement.
    pub platform_fee: Fee,
}

impl EngineConfig {
    /// Config with the crate's own name and version.
    #[must_use]
    pub fn new(engine_address: Address, platform_fee: Fee) -> Self {
        Self {
            name: constants::ENGINE_NAME.to_string(),
            version: constants::VERSION.to_string(),
            engine_address,
            platform_fee,
        }
    }

    /// The domain separator prefix shared by all voucher digests of this
    /// deployment.
    #[must_use]
    pub fn domain(&self) -> Vec<u8> {
        let mut domain = Vec::with_capacity(self.name.len() + self.version.len() + 1);
        domain.extend_from_slice(self.name.as_bytes());
        domain.push(b':');
        domain.extend_from_slice(self.version.as_bytes());
        domain
    }
}
