use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    core::{DigestPrimitive, DigestValue},
    error::DigestError,
};

use super::sha256::Sha256Primitive;

/// 一个总是失败的原语：
/// - 用于验证失败不会提交任何状态
#[derive(Debug, Clone)]
pub struct FailingPrimitive {
    pub reason: String,
}

impl FailingPrimitive {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl DigestPrimitive for FailingPrimitive {
    fn digest(&self, _input: &[u8]) -> Result<DigestValue, DigestError> {
        Err(DigestError::PrimitiveFailure(self.reason.clone()))
    }
}

/// 计数原语：
/// - 委托给 SHA-256，同时记录调用次数
/// - 用于断言校验失败时没有调用原语
#[derive(Debug, Default)]
pub struct CountingPrimitive {
    calls: AtomicUsize,
}

impl CountingPrimitive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DigestPrimitive for CountingPrimitive {
    fn digest(&self, input: &[u8]) -> Result<DigestValue, DigestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Sha256Primitive.digest(input)
    }
}
