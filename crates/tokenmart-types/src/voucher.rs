//! Vouchers: off-platform authorization signatures.
//!
//! Every buy and bid must present a voucher — an ed25519 signature, issued
//! by an administrator off-platform, over a canonical digest of the sale
//! terms. The digest is always rebuilt from the ledger's *current* stored
//! record (see the engine's `AuthorizationVerifier`), so a voucher
//! authorizes whatever the ledger currently holds for a key, never
//! caller-supplied terms.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};

use crate::{Address, MartError, Result};

/// A signed authorization over a canonical terms digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    /// The claimed signer. Must be an administrator address; the address
    /// bytes are the ed25519 public key the signature is checked against.
    pub signer: Address,
    /// Ed25519 signature (64 bytes) over the canonical digest.
    pub signature: Vec<u8>,
}

impl Voucher {
    /// Check the signature cryptographically against this voucher's
    /// claimed signer key.
    ///
    /// Role membership of the signer is checked separately by the
    /// engine's `AuthorizationVerifier`.
    ///
    /// # Errors
    /// `Unauthorized` if the signer bytes are not a valid ed25519 public
    /// key, the signature bytes are malformed, or verification fails.
    pub fn check_signature(&self, digest: &[u8]) -> Result<()> {
        let key = VerifyingKey::from_bytes(self.signer.as_bytes()).map_err(|_| {
            MartError::Unauthorized {
                reason: format!("signer {} is not a valid ed25519 key", self.signer),
            }
        })?;
        let sig =
            Signature::from_slice(&self.signature).map_err(|_| MartError::Unauthorized {
                reason: "malformed signature".into(),
            })?;
        key.verify(digest, &sig)
            .map_err(|_| MartError::Unauthorized {
                reason: format!("signature by {} does not verify", self.signer),
            })
    }
}

/// Signing helpers for tests. **Never use in production** — voucher
/// issuance is off-platform by design.
#[cfg(any(test, feature = "test-helpers"))]
impl Voucher {
    /// Sign `digest` with `key`, producing a voucher whose signer address
    /// is the key's public half.
    #[must_use]
    pub fn sign(key: &ed25519_dalek::SigningKey, digest: &[u8]) -> Self {
        use ed25519_dalek::Signer;
        Self {
            signer: Address::from_pubkey(key.verifying_key().to_bytes()),
            signature: key.sign(digest).to_bytes().to_vec(),
        }
    }

    /// A keypair for tests, derived from a fixed seed byte.
    #[must_use]
    pub fn test_key(seed: u8) -> ed25519_dalek::SigningKey {
        ed25519_dalek::SigningKey::from_bytes(&[seed; 32])
    }
}
