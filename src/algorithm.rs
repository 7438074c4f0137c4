use std::fmt;
use std::str::FromStr;
use num_bigint::BigUint;
use num_traits::One;
use crate::error::GuidError;

/// Digest algorithms a key can be derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    Sha1,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Md5,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Md5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "SHA1",
            Algorithm::Sha256 => "SHA256",
            Algorithm::Sha384 => "SHA384",
            Algorithm::Sha512 => "SHA512",
            Algorithm::Md5 => "MD5",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, GuidError> {
        match s {
            "SHA1" => Ok(Algorithm::Sha1),
            "SHA256" => Ok(Algorithm::Sha256),
            "SHA384" => Ok(Algorithm::Sha384),
            "SHA512" => Ok(Algorithm::Sha512),
            "MD5" => Ok(Algorithm::Md5),
            _ => Err(GuidError::Generation(format!("unknown algorithm: {}", s))),
        }
    }

    /// Key width in bits.
    pub const fn width(&self) -> usize {
        match self {
            Algorithm::Sha1 => 160,
            Algorithm::Sha256 => 256,
            Algorithm::Sha384 => 384,
            Algorithm::Sha512 => 512,
            Algorithm::Md5 => 128,
        }
    }

    pub const fn digest_len(&self) -> usize {
        self.width() / 8
    }

    /// Hex digits in the canonical rendering.
    pub const fn canonical_length(&self) -> usize {
        self.width() / 4
    }

    /// `2^width`, the number of distinct keys this algorithm can produce.
    pub fn keyspace_size(&self) -> BigUint {
        BigUint::one() << self.width()
    }
}

impl FromStr for Algorithm {
    type Err = GuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_str(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
