use crate::{
    core::{DigestPrimitive, DigestValue},
    error::DigestError,
    hash::sha256::hash,
};

/// Production primitive backed by the `sha2` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Primitive;

impl DigestPrimitive for Sha256Primitive {
    fn digest(&self, input: &[u8]) -> Result<DigestValue, DigestError> {
        Ok(DigestValue::from_bytes(hash(input)))
    }
}
