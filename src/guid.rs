use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD as BASE64_STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;
use crate::algorithm::Algorithm;
use crate::error::GuidError;
use crate::key::Key;
use crate::key_factory;

pub const MULTIHASH_DELIMITER: char = '_';

/// Rendering of the invalid sentinel.
pub const INVALID_STRING: &str = "INVALID";

/// Hex digits per group in the canonical form.
const CANON_GROUP_LENGTH: usize = 8;
const CANON_SEPARATOR: char = '-';

/// Standard alphabet that accepts digits with or without `=` padding.
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Digit encodings for the last multihash field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    Hex,
    Canon,
    Base64,
    Invalid,
}

impl Base {
    pub fn code(&self) -> i32 {
        match self {
            Base::Hex => 16,
            Base::Canon => 1,
            Base::Base64 => 64,
            Base::Invalid => -1,
        }
    }

    pub fn from_code(code: i32) -> Result<Self, GuidError> {
        match code {
            16 => Ok(Base::Hex),
            1 => Ok(Base::Canon),
            64 => Ok(Base::Base64),
            -1 => Ok(Base::Invalid),
            _ => Err(GuidError::Generation(format!("unknown base code: {}", code))),
        }
    }

    /// Digits of `key` in this base. Keys marked invalid keep their hex digits.
    pub(crate) fn encode(&self, key: &Key) -> String {
        match self {
            Base::Hex | Base::Invalid => key.to_string(),
            Base::Canon => {
                let hex = key.to_string();
                let mut grouped = String::with_capacity(hex.len() + hex.len() / CANON_GROUP_LENGTH);
                for (i, c) in hex.chars().enumerate() {
                    if i > 0 && i % CANON_GROUP_LENGTH == 0 {
                        grouped.push(CANON_SEPARATOR);
                    }
                    grouped.push(c);
                }
                grouped
            }
            Base::Base64 => BASE64_STANDARD.encode(key.to_bytes()),
        }
    }

    /// Digest bytes carried by `digits`, or `None` for the invalid base.
    fn decode(&self, digits: &str) -> Result<Option<Vec<u8>>, GuidError> {
        match self {
            Base::Hex => Ok(Some(hex::decode(digits)?)),
            Base::Canon => {
                let cleaned = digits.replace(CANON_SEPARATOR, "");
                Ok(Some(hex::decode(cleaned)?))
            }
            Base::Base64 => Ok(Some(BASE64_LENIENT.decode(digits)?)),
            Base::Invalid => Ok(None),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A content-derived identifier, or the sentinel for "no valid identifier"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Guid {
    Key(Key),
    Invalid,
}

impl Guid {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Guid::Invalid)
    }

    pub fn as_key(&self) -> Option<&Key> {
        match self {
            Guid::Key(key) => Some(key),
            Guid::Invalid => None,
        }
    }

    pub fn into_key(self) -> Option<Key> {
        match self {
            Guid::Key(key) => Some(key),
            Guid::Invalid => None,
        }
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        self.as_key().map(Key::algorithm)
    }

    /// Numeric comparison of two identifiers. Anything involving the invalid
    /// sentinel is not comparable and reports `Equal` instead of failing.
    pub fn compare(&self, other: &Guid) -> Ordering {
        match (self, other) {
            (Guid::Key(a), Guid::Key(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    pub fn to_short_string(&self) -> String {
        match self {
            Guid::Key(key) => key.to_short_string(),
            Guid::Invalid => INVALID_STRING.to_string(),
        }
    }

    pub fn to_multihash(&self, base: Base) -> String {
        match self {
            Guid::Key(key) => key.to_multihash(base),
            Guid::Invalid => INVALID_STRING.to_string(),
        }
    }

    pub fn to_multihash_hex(&self) -> String {
        self.to_multihash(Base::Hex)
    }

    /// Parse `ALGORITHM_BASE_DIGITS`.
    ///
    /// The digits are decoded back into digest bytes and the key is rebuilt
    /// from them directly; nothing is hashed. A base code of `-1` yields
    /// [`Guid::Invalid`] rather than an error. Integer codes that name no
    /// known base are deliberately rejected as malformed input instead of
    /// being folded into the sentinel, so a typo never reads as "invalid".
    /// Base64 digits are accepted with or without `=` padding.
    pub fn from_multihash(s: &str) -> Result<Self, GuidError> {
        if s.is_empty() {
            return Err(GuidError::Generation("empty multihash".to_string()));
        }

        let parts: Vec<&str> = s.split(MULTIHASH_DELIMITER).collect();
        if parts.len() != 3 {
            return Err(GuidError::Generation(format!(
                "multihash must have 3 parts, got {}: {}",
                parts.len(), s
            )));
        }
        trace!(algorithm = parts[0], base = parts[1], digits = parts[2], "split multihash");

        let algorithm = Algorithm::from_str(parts[0])?;

        let code = parts[1].parse::<i32>()
            .map_err(|_| GuidError::Generation(format!("base code is not an integer: {}", parts[1])))?;
        let base = Base::from_code(code)?;

        if parts[2].is_empty() {
            return Err(GuidError::Generation(format!("multihash has no digits: {}", s)));
        }

        match base.decode(parts[2])? {
            Some(digest) => Ok(Guid::Key(key_factory::recreate_key(algorithm, &digest))),
            None => Ok(Guid::Invalid),
        }
    }
}

impl From<Key> for Guid {
    fn from(key: Key) -> Self {
        Guid::Key(key)
    }
}

impl FromStr for Guid {
    type Err = GuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_multihash(s)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guid::Key(key) => write!(f, "{}", key),
            Guid::Invalid => write!(f, "{}", INVALID_STRING),
        }
    }
}

impl Serialize for Guid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_multihash_hex())
    }
}

impl<'de> Deserialize<'de> for Guid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == INVALID_STRING {
            return Ok(Guid::Invalid);
        }
        Guid::from_multihash(&s).map_err(serde::de::Error::custom)
    }
}
