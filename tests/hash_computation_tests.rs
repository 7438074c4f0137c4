use std::fs;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use guid::{Algorithm, GuidError, GuidFactory};

// NIST test vectors: https://csrc.nist.gov/projects/cryptographic-standards-and-guidelines/example-values
const ABC: &str = "abc";
const NIST_448: &str = "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const NIST_896: &str = "abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
const HELLO_SHA1: &str = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";
const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";
const HELLO_SHA384: &str = "59e1748777448c69de6b800d7a33bbfb9ff1b463e44354c3553bcdb9c666fa90125a3c79f90397bdf5f6a13de828684f";
const HELLO_SHA512: &str = "9b71d224bd62f3785d96d46ad3ea3d73319bfbc2890caadae2dff72519673ca72323c3d99ba5c11d7c7acc6e14b8c5da0c4663475c2e5c3adef46f73bcdec043";
const HELLO_MD5: &str = "5d41402abc4b2a76b9719d911017c592";

/// Test helper to create a temporary directory with fixture files
struct TestDir {
    temp_dir: TempDir,
}

impl TestDir {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    fn create_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let file_path = self.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "device unplugged"))
    }
}

fn hash_str(algorithm: Algorithm, s: &str) -> String {
    GuidFactory::new().with_algorithm(algorithm).generate_guid_from_str(s).unwrap().to_string()
}

#[test]
fn test_sha1_nist_vectors() {
    assert_eq!(hash_str(Algorithm::Sha1, ABC), "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(hash_str(Algorithm::Sha1, NIST_448), "84983e441c3bd26ebaae4aa1f95129e5e54670f1");
}

#[test]
fn test_sha256_nist_vectors() {
    assert_eq!(hash_str(Algorithm::Sha256, ABC), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    assert_eq!(hash_str(Algorithm::Sha256, NIST_448), "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1");
}

#[test]
fn test_sha384_nist_vectors() {
    assert_eq!(
        hash_str(Algorithm::Sha384, ABC),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
    );
    assert_eq!(
        hash_str(Algorithm::Sha384, NIST_896),
        "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039"
    );
}

#[test]
fn test_sha512_nist_vectors() {
    assert_eq!(
        hash_str(Algorithm::Sha512, ABC),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
    assert_eq!(
        hash_str(Algorithm::Sha512, NIST_896),
        "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
    );
}

#[test]
fn test_md5_rfc1321_vector() {
    assert_eq!(hash_str(Algorithm::Md5, ABC), "900150983cd24fb0d6963f7d28e17f72");
}

#[test]
fn test_stream_hash() {
    let factory = GuidFactory::new().with_algorithm(Algorithm::Sha1);
    let guid = factory.generate_guid_from_reader(Cursor::new("TEST")).unwrap();
    assert_eq!(guid.to_string(), "984816fd329622876e14907634264e6f332e9fb3");
}

#[test]
fn test_empty_stream_hash() {
    let factory = GuidFactory::new().with_algorithm(Algorithm::Sha1);
    let guid = factory.generate_guid_from_reader(Cursor::new("")).unwrap();
    assert_eq!(guid.to_string(), EMPTY_SHA1);
}

#[test]
fn test_failing_stream() {
    let err = GuidFactory::new().generate_guid_from_reader(FailingReader).unwrap_err();
    assert!(matches!(err, GuidError::Read(_)));
    assert!(err.is_generation_error());
}

#[test]
fn test_file_hashes() {
    let test_dir = TestDir::new();
    let hello = test_dir.create_file("hello.txt", b"hello");

    let expected = [
        (Algorithm::Sha1, "SHA1", HELLO_SHA1),
        (Algorithm::Sha256, "SHA256", HELLO_SHA256),
        (Algorithm::Sha384, "SHA384", HELLO_SHA384),
        (Algorithm::Sha512, "SHA512", HELLO_SHA512),
        (Algorithm::Md5, "MD5", HELLO_MD5),
    ];

    for (algorithm, name, digest) in expected {
        let guid = GuidFactory::new().with_algorithm(algorithm).generate_guid_from_file(&hello).unwrap();
        assert_eq!(guid.to_multihash_hex(), format!("{}_16_{}", name, digest));
    }
}

#[test]
fn test_file_and_bytes_agree() {
    let test_dir = TestDir::new();
    let content = vec![b'a'; 100_000];
    let file_path = test_dir.create_file("large.bin", &content);

    for algorithm in Algorithm::ALL {
        let factory = GuidFactory::new().with_algorithm(algorithm).with_buffer_size(4096);
        let from_file = factory.generate_guid_from_file(&file_path).unwrap();
        let from_bytes = factory.generate_guid(&content).unwrap();
        assert_eq!(from_file, from_bytes);
    }
}

#[test]
fn test_empty_file_hash() {
    let test_dir = TestDir::new();
    let empty = test_dir.create_file("empty.txt", b"");

    let guid = GuidFactory::new().with_algorithm(Algorithm::Sha1).generate_guid_from_file(&empty).unwrap();
    assert_eq!(guid.to_multihash_hex(), format!("SHA1_16_{}", EMPTY_SHA1));
}

#[test]
fn test_missing_file_is_not_a_generation_error() {
    let test_dir = TestDir::new();
    let err = GuidFactory::new()
        .generate_guid_from_file(test_dir.path().join("nope.txt"))
        .unwrap_err();

    assert!(matches!(err, GuidError::FileNotFound(_)));
    assert!(!err.is_generation_error());
}

#[test]
fn test_default_algorithm_file_hash() {
    let test_dir = TestDir::new();
    let hello = test_dir.create_file("hello.txt", b"hello");

    let guid = GuidFactory::new().generate_guid_from_file(&hello).unwrap();
    assert_eq!(guid.to_string(), HELLO_SHA256);
}
