use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use crate::error::StarkTraceError;

/// Big-endian bytes of the Starknet field prime `2^251 + 17 * 2^192 + 1`.
const FIELD_PRIME: [u8; 32] = [
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

/// Starknet field element, kept as 32 big-endian bytes.
///
/// Parsed from `0x`-prefixed hex and always rendered in the node's canonical
/// form: lower-case, no leading zeros, `0x0` for zero.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Felt([u8; 32]);

impl Felt {
    pub const ZERO: Felt = Felt([0u8; 32]);

    pub fn from_bytes_be(bytes: [u8; 32]) -> Result<Self, StarkTraceError> {
        if bytes >= FIELD_PRIME {
            return Err(StarkTraceError::MalformedResponse(
                "Felt value exceeds the field prime".to_string(),
            ));
        }
        Ok(Self(bytes))
    }

    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    pub fn to_bytes_be(&self) -> [u8; 32] {
        self.0
    }

    pub fn from_hex(s: &str) -> Result<Self, StarkTraceError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| StarkTraceError::MalformedResponse(format!("Felt {s} missing 0x")))?;

        if digits.is_empty() || digits.len() > 64 {
            return Err(StarkTraceError::MalformedResponse(format!(
                "Felt {s} must have between 1 and 64 hex digits"
            )));
        }

        // hex::decode needs an even number of digits
        let padded = format!("{digits:0>64}");
        let decoded = hex::decode(&padded)
            .map_err(|e| StarkTraceError::MalformedResponse(format!("Invalid felt {s}: {e}")))?;

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&decoded);
        Self::from_bytes_be(bytes)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl FromStr for Felt {
    type Err = StarkTraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = hex::encode(self.0);
        let trimmed = encoded.trim_start_matches('0');
        if trimmed.is_empty() {
            write!(f, "0x0")
        } else {
            write!(f, "0x{trimmed}")
        }
    }
}

impl fmt::Debug for Felt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Felt({self})")
    }
}

impl From<u64> for Felt {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl Serialize for Felt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Felt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Felt::from_hex(&s).map_err(de::Error::custom)
    }
}
