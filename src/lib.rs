use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::warn;

pub mod algorithm;
pub mod error;
pub mod guid;
pub mod hash;
pub mod key;
pub mod key_factory;
pub mod radix;

pub use algorithm::Algorithm;
pub use error::GuidError;
pub use guid::{Base, Guid, INVALID_STRING, MULTIHASH_DELIMITER};
pub use key::Key;
pub use radix::bits_needed_to_represent;

#[derive(Clone)]
pub struct GuidFactory {
    pub algorithm: Algorithm,
    pub buffer_size: usize,
}

impl Default for GuidFactory {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            buffer_size: key_factory::DEFAULT_BUFFER_SIZE,
        }
    }
}

impl GuidFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Generate a GUID from non-empty bytes
    pub fn generate_guid(&self, data: &[u8]) -> Result<Guid, GuidError> {
        Ok(key_factory::generate_key(self.algorithm, data)?.into())
    }

    /// Generate a GUID from a non-empty string
    pub fn generate_guid_from_str(&self, s: &str) -> Result<Guid, GuidError> {
        Ok(key_factory::generate_key_from_str(self.algorithm, s)?.into())
    }

    /// Generate a GUID from a stream
    pub fn generate_guid_from_reader<R: Read>(&self, reader: R) -> Result<Guid, GuidError> {
        Ok(key_factory::generate_key_from_reader(self.algorithm, reader, self.buffer_size)?.into())
    }

    /// Generate a GUID from a file's content
    pub fn generate_guid_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Guid, GuidError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => GuidError::FileNotFound(path.to_path_buf()),
            _ => GuidError::Read(e),
        })?;
        self.generate_guid_from_reader(file)
    }

    /// Generate a random GUID. Never fails: if no key can be produced the
    /// invalid sentinel is returned instead.
    pub fn generate_random_guid(&self) -> Guid {
        match key_factory::generate_random_key(self.algorithm) {
            Ok(key) => Guid::Key(key),
            Err(err) => {
                warn!(algorithm = %self.algorithm, error = %err, "random GUID generation failed");
                Guid::Invalid
            }
        }
    }

    /// Recreate a GUID from its multihash string, e.g.
    /// `SHA1_16_a9993e364706816aba3e25717850c26c9cd0d89d`.
    ///
    /// The algorithm named in the string wins over the factory's own.
    pub fn recreate_guid(&self, multihash: &str) -> Result<Guid, GuidError> {
        Guid::from_multihash(multihash)
    }

    /// Check whether `data` hashes to the GUID encoded in `expected_multihash`
    pub fn verify_guid(&self, data: &[u8], expected_multihash: &str) -> Result<bool, GuidError> {
        let expected = Guid::from_multihash(expected_multihash)?;
        let algorithm = match expected.algorithm() {
            Some(algorithm) => algorithm,
            None => return Ok(false),
        };

        let actual = key_factory::generate_key(algorithm, data)?;
        Ok(expected.as_key() == Some(&actual))
    }
}
