//! Administrator role model.
//!
//! Exactly one root administrator exists at any time. The root may grant
//! and revoke ordinary administrator roles and may hand the root role to
//! another address. The root always counts as an administrator.

use std::collections::HashSet;

use tokenmart_types::{Address, MartError, Result};

/// Role state: one root administrator plus an extensible admin set.
///
/// The "exactly one root" invariant is enforced here, at the policy
/// boundary: the root is a single field, and every root mutation goes
/// through [`AccessPolicy::change_root_admin`].
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    root: Address,
    admins: HashSet<Address>,
}

impl AccessPolicy {
    /// Create a policy with the given root administrator.
    ///
    /// # Errors
    /// `InvalidTerms` if `root` is the null sentinel.
    pub fn new(root: Address) -> Result<Self> {
        if root.is_null() {
            return Err(MartError::InvalidTerms {
                reason: "root administrator cannot be the null address".into(),
            });
        }
        Ok(Self {
            root,
            admins: HashSet::new(),
        })
    }

    /// The current root administrator.
    #[must_use]
    pub fn root(&self) -> Address {
        self.root
    }

    /// Returns `true` if `addr` is the root administrator.
    #[must_use]
    pub fn is_root(&self, addr: Address) -> bool {
        addr == self.root
    }

    /// Returns `true` if `addr` holds an administrator role. The root
    /// always does.
    #[must_use]
    pub fn is_admin(&self, addr: Address) -> bool {
        self.is_root(addr) || self.admins.contains(&addr)
    }

    /// Grant an administrator role. Root only.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the root
    /// - `InvalidTerms` if `addr` is the null address
    pub fn grant_admin(&mut self, caller: Address, addr: Address) -> Result<()> {
        self.require_root(caller)?;
        if addr.is_null() {
            return Err(MartError::InvalidTerms {
                reason: "cannot grant the admin role to the null address".into(),
            });
        }
        self.admins.insert(addr);
        Ok(())
    }

    /// Revoke an administrator role. Root only. The root itself cannot be
    /// revoked — use [`AccessPolicy::change_root_admin`] instead.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the root
    /// - `InvalidTerms` if `addr` is the root
    pub fn revoke_admin(&mut self, caller: Address, addr: Address) -> Result<()> {
        self.require_root(caller)?;
        if self.is_root(addr) {
            return Err(MartError::InvalidTerms {
                reason: "the root administrator cannot be revoked".into(),
            });
        }
        self.admins.remove(&addr);
        Ok(())
    }

    /// Hand the root role to `new_root`. Root only. The outgoing root
    /// keeps an admin role only if it was separately granted one.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the root
    /// - `InvalidTerms` if `new_root` is the null address
    pub fn change_root_admin(&mut self, caller: Address, new_root: Address) -> Result<()> {
        self.require_root(caller)?;
        if new_root.is_null() {
            return Err(MartError::InvalidTerms {
                reason: "new root cannot be the null address".into(),
            });
        }
        // The new root's standing admin grant (if any) is subsumed.
        self.admins.remove(&new_root);
        self.root = new_root;
        Ok(())
    }

    /// Number of non-root administrators.
    #[must_use]
    pub fn admin_count(&self) -> usize {
        self.admins.len()
    }

    fn require_root(&self, caller: Address) -> Result<()> {
        if self.is_root(caller) {
            Ok(())
        } else {
            Err(MartError::Unauthorized {
                reason: format!("{caller} is not the root administrator"),
            })
        }
    }
}
