use std::io::Read;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use crate::algorithm::Algorithm;
use crate::error::GuidError;
use crate::hash;
use crate::key::Key;

/// Read buffer used when digesting streams.
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Generate a key from the UTF-8 bytes of a non-empty string.
pub fn generate_key_from_str(algorithm: Algorithm, s: &str) -> Result<Key, GuidError> {
    if s.is_empty() {
        return Err(GuidError::Generation("cannot generate a key from an empty string".to_string()));
    }
    generate_key(algorithm, s.as_bytes())
}

/// Generate a key from a non-empty byte slice.
pub fn generate_key(algorithm: Algorithm, data: &[u8]) -> Result<Key, GuidError> {
    if data.is_empty() {
        return Err(GuidError::Generation("cannot generate a key from empty bytes".to_string()));
    }

    debug!(%algorithm, len = data.len(), "generating key from bytes");
    let digest = hash::digest(algorithm, data);
    Ok(Key::from_digest(algorithm, &digest))
}

/// Generate a key from everything `reader` yields. An empty stream is fine and
/// gives the digest of no input; read failures are returned as
/// [`GuidError::Read`].
pub fn generate_key_from_reader<R: Read>(algorithm: Algorithm, reader: R, buffer_size: usize) -> Result<Key, GuidError> {
    debug!(%algorithm, buffer_size, "generating key from stream");
    let digest = hash::digest_reader(algorithm, reader, buffer_size)?;
    Ok(Key::from_digest(algorithm, &digest))
}

/// Generate a key from the decimal rendering of a random `i64` drawn from the
/// operating system's CSPRNG.
pub fn generate_random_key(algorithm: Algorithm) -> Result<Key, GuidError> {
    let mut seed = [0u8; 8];
    OsRng.try_fill_bytes(&mut seed)
        .map_err(|e| GuidError::Generation(format!("random source unavailable: {}", e)))?;

    generate_key_from_str(algorithm, &i64::from_le_bytes(seed).to_string())
}

/// Rebuild a key from digest bytes that were already computed, e.g. decoded
/// from a multihash. Nothing is hashed.
pub fn recreate_key(algorithm: Algorithm, digest: &[u8]) -> Key {
    debug!(%algorithm, len = digest.len(), "recreating key from digest");
    Key::from_digest(algorithm, digest)
}
