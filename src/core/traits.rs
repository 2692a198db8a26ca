use crate::{core::types::DigestValue, error::DigestError};

/// 受信任的摘要原语
///
/// Implementations only fail on environmental conditions; callers surface
/// the failure immediately and never retry.
pub trait DigestPrimitive {
    fn digest(&self, input: &[u8]) -> Result<DigestValue, DigestError>;
}
