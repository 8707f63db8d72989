//! Currency model.
//!
//! A sale is denominated either in the platform's native currency or in a
//! fungible-token contract. On the wire the distinction is an address
//! sentinel: the null address means native, anything else is a token
//! contract. Internally the distinction is an explicit enum so no code
//! path branches on a magic value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Address;

/// The currency a listing or auction is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// The platform's base transferable value.
    Native,
    /// A fungible-token contract.
    Token(Address),
}

impl Currency {
    /// Map the wire-level sentinel: the null address denotes native
    /// currency, any other value a token contract.
    #[must_use]
    pub fn from_address(addr: Address) -> Self {
        if addr.is_null() {
            Self::Native
        } else {
            Self::Token(addr)
        }
    }

    /// Inverse of [`Currency::from_address`].
    #[must_use]
    pub fn to_address(self) -> Address {
        match self {
            Self::Native => Address::NULL,
            Self::Token(addr) => addr,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Token(addr) => write!(f, "token:{}", addr.short()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_address_is_native() {
        assert_eq!(Currency::from_address(Address::NULL), Currency::Native);
    }

    #[test]
    fn nonnull_address_is_token() {
        let addr = Address::test(9);
        assert_eq!(Currency::from_address(addr), Currency::Token(addr));
    }

    #[test]
    fn address_roundtrip() {
        for c in [Currency::Native, Currency::Token(Address::test(3))] {
            assert_eq!(Currency::from_address(c.to_address()), c);
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Currency::Native), "native");
        assert_eq!(
            format!("{}", Currency::Token(Address::test(0xff))),
            "token:ffffffff"
        );
    }
}
