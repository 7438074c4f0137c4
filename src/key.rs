use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use num_bigint::{BigInt, BigUint};
use num_traits::Signed;
use crate::algorithm::Algorithm;
use crate::error::GuidError;
use crate::guid::Base;
use crate::radix::bits_needed_to_represent;

/// Radix of the canonical string form.
pub const DEFAULT_RADIX: u32 = 16;

/// A content-derived key: a value in `[0, 2^width)` tagged with the digest
/// algorithm that fixes `width`.
///
/// Equality, ordering and hashing look at the value only, so keys of
/// different algorithms that happen to hold the same integer compare equal.
#[derive(Debug, Clone)]
pub struct Key {
    algorithm: Algorithm,
    value: BigUint,
}

impl Key {
    pub const SHORT_STRING_LENGTH: usize = 8;

    /// Build a key from any integer, reducing it into the keyspace.
    /// Negative remainders wrap around by adding the keyspace size.
    pub fn from_integer(algorithm: Algorithm, value: BigInt) -> Self {
        let modulus = BigInt::from(algorithm.keyspace_size());
        let mut reduced = value % &modulus;
        if reduced.is_negative() {
            reduced += &modulus;
        }
        let (_, value) = reduced.into_parts();

        Self { algorithm, value }
    }

    /// Build a key from a base-16 digit string, optionally signed.
    pub fn from_digits(algorithm: Algorithm, digits: &str) -> Result<Self, GuidError> {
        // num-bigint skips `_` separators; plain digit strings only
        if digits.contains('_') {
            return Err(GuidError::Generation(format!("not a base-16 integer: {:?}", digits)));
        }
        let value = BigInt::parse_bytes(digits.as_bytes(), DEFAULT_RADIX)
            .ok_or_else(|| GuidError::Generation(format!("not a base-16 integer: {:?}", digits)))?;
        Ok(Self::from_integer(algorithm, value))
    }

    /// Build a key from big-endian digest bytes without hashing them again.
    pub fn from_digest(algorithm: Algorithm, digest: &[u8]) -> Self {
        let value = BigUint::from_bytes_be(digest) % algorithm.keyspace_size();
        Self { algorithm, value }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn width(&self) -> usize {
        self.algorithm.width()
    }

    pub fn canonical_length(&self) -> usize {
        self.algorithm.canonical_length()
    }

    pub fn big_integer_representation(&self) -> &BigUint {
        &self.value
    }

    /// Fixed-width big-endian bytes, `width / 8` long.
    pub fn to_bytes(&self) -> Vec<u8> {
        let digits = self.value.to_bytes_be();
        let mut bytes = vec![0u8; self.algorithm.digest_len().saturating_sub(digits.len())];
        bytes.extend_from_slice(&digits);
        bytes
    }

    /// Render in `radix`, padded to as many digits as the key width needs
    /// at `bits_needed_to_represent(radix)` bits per digit.
    pub fn to_string_radix(&self, radix: u32) -> Result<String, GuidError> {
        check_radix(radix)?;
        let bits_per_digit = bits_needed_to_represent(radix) as usize;
        self.to_padded_string(radix, self.width() / bits_per_digit)
    }

    /// Render in `radix`, left-padded with zeros to `length` digits. Longer
    /// renderings are returned whole.
    pub fn to_padded_string(&self, radix: u32, length: usize) -> Result<String, GuidError> {
        check_radix(radix)?;
        Ok(format!("{:0>length$}", self.value.to_str_radix(radix), length = length))
    }

    pub fn to_short_string(&self) -> String {
        let mut short = self.to_string();
        short.truncate(Self::SHORT_STRING_LENGTH);
        short
    }

    pub fn to_multihash(&self, base: Base) -> String {
        format!("{}_{}_{}", self.algorithm, base.code(), base.encode(self))
    }

    pub fn to_multihash_hex(&self) -> String {
        self.to_multihash(Base::Hex)
    }
}

fn check_radix(radix: u32) -> Result<(), GuidError> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(GuidError::UnsupportedRadix(radix))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>length$}", self.value.to_str_radix(DEFAULT_RADIX), length = self.canonical_length())
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}
