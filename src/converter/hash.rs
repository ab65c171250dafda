use crate::error::ConvertError;
use md5::Md5;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use sha3::Sha3_512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
    Sha3_512,
    Ripemd160,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Ripemd160,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha3_512 => "SHA3-512",
            HashAlgorithm::Ripemd160 => "RIPEMD-160",
        }
    }

    pub fn from_name(name: &str) -> Option<HashAlgorithm> {
        match name.to_ascii_lowercase().as_str() {
            "md5" => Some(HashAlgorithm::Md5),
            "sha1" | "sha-1" => Some(HashAlgorithm::Sha1),
            "sha256" | "sha-256" => Some(HashAlgorithm::Sha256),
            "sha512" | "sha-512" => Some(HashAlgorithm::Sha512),
            "sha3" | "sha3-512" => Some(HashAlgorithm::Sha3_512),
            "ripemd160" | "ripemd-160" => Some(HashAlgorithm::Ripemd160),
            _ => None,
        }
    }

    pub fn digest_hex(&self, input: &str) -> String {
        let bytes = input.as_bytes();
        match self {
            HashAlgorithm::Md5 => hex::encode(Md5::digest(bytes)),
            HashAlgorithm::Sha1 => hex::encode(Sha1::digest(bytes)),
            HashAlgorithm::Sha256 => hex::encode(Sha256::digest(bytes)),
            HashAlgorithm::Sha512 => hex::encode(Sha512::digest(bytes)),
            HashAlgorithm::Sha3_512 => hex::encode(Sha3_512::digest(bytes)),
            HashAlgorithm::Ripemd160 => hex::encode(Ripemd160::digest(bytes)),
        }
    }
}

pub fn default_selection() -> Vec<HashAlgorithm> {
    vec![
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
    ]
}

/// Computes the selected digests of `input`, returned as `(label, hex)`
/// pairs in a fixed algorithm order regardless of selection order.
pub fn digest_all(
    input: &str,
    selection: &[HashAlgorithm],
) -> Result<Vec<(&'static str, String)>, ConvertError> {
    if input.is_empty() {
        return Err(ConvertError::precondition("No input provided"));
    }
    Ok(HashAlgorithm::ALL
        .iter()
        .copied()
        .filter(|algorithm| selection.contains(algorithm))
        .map(|algorithm| (algorithm.label(), algorithm.digest_hex(input)))
        .collect())
}

/// One `LABEL: hex` line per selected algorithm.
pub fn report(input: &str, selection: &[HashAlgorithm]) -> Result<String, ConvertError> {
    let digests = digest_all(input, selection)?;
    Ok(digests
        .iter()
        .map(|(label, hash)| format!("{}: {}", label, hash))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors_for_hello() {
        let cases = [
            (
                HashAlgorithm::Md5,
                "5d41402abc4b2a76b9719d911017c592",
            ),
            (
                HashAlgorithm::Sha1,
                "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d",
            ),
            (
                HashAlgorithm::Sha256,
                "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
            ),
            (
                HashAlgorithm::Sha512,
                "9b71d224bd62f3785d96d46ad3ea3d73319bfbc2890caadae2dff72519673ca72323c3d99ba5c11d7c7acc6e14b8c5da0c4663475c2e5c3adef46f73bcdec043",
            ),
            (
                HashAlgorithm::Sha3_512,
                "75d527c368f2efe848ecf6b073a36767800805e9eef2b1857d5f984f036eb6df891d75f72d9b154518c1cd58835286d1da9a38deba3de98b5a53e5ed78a84976",
            ),
            (
                HashAlgorithm::Ripemd160,
                "108f07b8382412612c048d07d13f814118445acd",
            ),
        ];
        for (algorithm, expected) in cases {
            assert_eq!(algorithm.digest_hex("hello"), expected, "{}", algorithm.label());
        }
    }

    #[test]
    fn report_orders_by_algorithm_not_selection() {
        let selection = [HashAlgorithm::Sha256, HashAlgorithm::Md5];
        let digests = digest_all("hello", &selection).unwrap();
        assert_eq!(digests[0].0, "MD5");
        assert_eq!(digests[1].0, "SHA-256");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(report("", &default_selection()).unwrap_err().is_precondition());
    }

    #[test]
    fn resolves_algorithm_names() {
        assert_eq!(HashAlgorithm::from_name("SHA-256"), Some(HashAlgorithm::Sha256));
        assert_eq!(HashAlgorithm::from_name("sha3"), Some(HashAlgorithm::Sha3_512));
        assert_eq!(HashAlgorithm::from_name("blake2"), None);
    }
}
