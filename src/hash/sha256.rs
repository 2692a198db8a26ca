use sha2::{Digest, Sha256};

use crate::core::types::DigestValue;

pub fn hash(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

pub fn hash_hex(data: &[u8]) -> String {
    hex::encode(hash(data))
}

pub fn verify(data: &[u8], expected: &DigestValue) -> bool {
    DigestValue::from_bytes(hash(data)).matches(expected).is_match()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(
            hash_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_verify() {
        let expected = DigestValue::from_bytes(hash(b"hunter2"));
        assert!(verify(b"hunter2", &expected));
        assert!(!verify(b"hunter3", &expected));
    }
}
