//! Addresses, signing credentials, and identities.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// A 20-byte on-chain address.
///
/// Displayed and serialized as a `0x`-prefixed hex string. The harness never
/// interprets address contents; they are opaque routing values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    /// Construct an address from raw bytes.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Raw byte view.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

/// Errors from parsing an address or signing key from hex.
#[derive(Debug, thiserror::Error)]
pub enum AddressParseError {
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(raw)?;
        let bytes: [u8; 20] =
            bytes
                .try_into()
                .map_err(|v: Vec<u8>| AddressParseError::WrongLength {
                    expected: 20,
                    actual: v.len(),
                })?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An opaque 32-byte signing credential.
///
/// The harness never signs with it directly; signing happens inside the
/// chain client boundary. Debug output is redacted so credentials cannot
/// leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey([u8; 32]);

impl SigningKey {
    /// Construct a key from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw byte view.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derive the address bound to this credential.
    ///
    /// The address is the trailing 20 bytes of the SHA-256 digest of the key
    /// material, so distinct keys map to distinct addresses.
    pub fn derive_address(&self) -> Address {
        let digest = Sha256::digest(self.0);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest[12..32]);
        Address::from_bytes(bytes)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey(0x{}..)", hex::encode(&self.0[..2]))
    }
}

impl FromStr for SigningKey {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(raw)?;
        let bytes: [u8; 32] =
            bytes
                .try_into()
                .map_err(|v: Vec<u8>| AddressParseError::WrongLength {
                    expected: 32,
                    actual: v.len(),
                })?;
        Ok(Self(bytes))
    }
}

impl Serialize for SigningKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(self.0)))
    }
}

impl<'de> Deserialize<'de> for SigningKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A simulated account: an address bound to its signing credential.
///
/// Immutable once constructed. The address is always derived from the key,
/// never supplied independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    address: Address,
    key: SigningKey,
}

impl Identity {
    /// Build an identity from a signing credential.
    pub fn from_key(key: SigningKey) -> Self {
        let address = key.derive_address();
        Self { address, key }
    }

    /// The identity's address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The identity's signing credential.
    pub fn key(&self) -> &SigningKey {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_hex_round_trip() {
        let addr: Address = "0x5fbdb2315678afecb367f032d93f642f64180aa3"
            .parse()
            .unwrap();
        assert_eq!(
            addr.to_string(),
            "0x5fbdb2315678afecb367f032d93f642f64180aa3"
        );
    }

    #[test]
    fn address_rejects_wrong_length() {
        let err = "0xdeadbeef".parse::<Address>().unwrap_err();
        assert!(matches!(
            err,
            AddressParseError::WrongLength {
                expected: 20,
                actual: 4
            }
        ));
    }

    #[test]
    fn address_serde_as_hex_string() {
        let addr: Address = "0x5fbdb2315678afecb367f032d93f642f64180aa3"
            .parse()
            .unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"0x5fbdb2315678afecb367f032d93f642f64180aa3\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn derived_addresses_are_deterministic_and_distinct() {
        let a = SigningKey::from_bytes([1u8; 32]);
        let b = SigningKey::from_bytes([2u8; 32]);

        assert_eq!(a.derive_address(), a.derive_address());
        assert_ne!(a.derive_address(), b.derive_address());

        let identity = Identity::from_key(a.clone());
        assert_eq!(identity.address(), a.derive_address());
        assert_eq!(identity.key(), &a);
    }

    #[test]
    fn signing_key_debug_is_redacted() {
        let key = SigningKey::from_bytes([0xAB; 32]);
        let rendered = format!("{:?}", key);
        assert!(!rendered.contains(&hex::encode([0xAB; 32])));
    }
}
