use std::io::{self, Read};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use crate::algorithm::Algorithm;

/// Digest `data` with `algorithm`.
pub fn digest(algorithm: Algorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        Algorithm::Sha1 => Sha1::digest(data).to_vec(),
        Algorithm::Sha256 => Sha256::digest(data).to_vec(),
        Algorithm::Sha384 => Sha384::digest(data).to_vec(),
        Algorithm::Sha512 => Sha512::digest(data).to_vec(),
        Algorithm::Md5 => Md5::digest(data).to_vec(),
    }
}

/// Digest everything `reader` yields, reading `buffer_size` bytes at a time.
pub fn digest_reader<R: Read>(algorithm: Algorithm, reader: R, buffer_size: usize) -> io::Result<Vec<u8>> {
    match algorithm {
        Algorithm::Sha1 => consume::<Sha1, R>(reader, buffer_size),
        Algorithm::Sha256 => consume::<Sha256, R>(reader, buffer_size),
        Algorithm::Sha384 => consume::<Sha384, R>(reader, buffer_size),
        Algorithm::Sha512 => consume::<Sha512, R>(reader, buffer_size),
        Algorithm::Md5 => consume::<Md5, R>(reader, buffer_size),
    }
}

fn consume<D: Digest, R: Read>(mut reader: R, buffer_size: usize) -> io::Result<Vec<u8>> {
    let mut hasher = D::new();
    let mut buffer = vec![0u8; buffer_size.max(1)];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buffer[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(hasher.finalize().to_vec())
}
