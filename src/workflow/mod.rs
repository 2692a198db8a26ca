pub mod input;
pub mod session;

use std::sync::Arc;

use subtle::ConstantTimeEq;
use tracing::{debug, info, warn};

use crate::{
    backend::Sha256Primitive,
    config::WorkflowConfig,
    core::{DigestPrimitive, DigestValue, MatchResult, SaltedDigest},
    error::DigestError,
    hash::salt::generate_salt,
};

use input::InputBytes;
use session::StoredDigest;

/// 快速摘要的预置样例
pub const QUICK_SAMPLES: [&str; 4] = ["Hello World", "Password123", "admin", "test@email.com"];

/// 摘要工作流
///
/// 负责输入校验、调用摘要原语、以及存储/验证密码摘要。
///
/// 状态机：`Empty -> Stored` 仅经由 `store_*`；重复存储直接覆盖；
/// `verify_digest` 只读，在 `Empty` 状态下返回 `Precondition`。
pub struct DigestWorkflow<P = Sha256Primitive> {
    primitive: P,
    config: WorkflowConfig,
    stored: Arc<StoredDigest>,
}

impl DigestWorkflow<Sha256Primitive> {
    pub fn new(config: WorkflowConfig) -> Result<Self, DigestError> {
        Self::with_parts(Sha256Primitive, config, Arc::new(StoredDigest::new()))
    }
}

impl Default for DigestWorkflow<Sha256Primitive> {
    fn default() -> Self {
        Self {
            primitive: Sha256Primitive,
            config: WorkflowConfig::default(),
            stored: Arc::new(StoredDigest::new()),
        }
    }
}

impl<P: DigestPrimitive> DigestWorkflow<P> {
    /// 使用指定的原语和（可共享的）存储槽创建工作流
    pub fn with_parts(
        primitive: P,
        config: WorkflowConfig,
        stored: Arc<StoredDigest>,
    ) -> Result<Self, DigestError> {
        config.validate()?;
        Ok(Self {
            primitive,
            config,
            stored,
        })
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<StoredDigest> {
        &self.stored
    }

    fn digest_input(&self, input: &[u8]) -> Result<DigestValue, DigestError> {
        self.primitive
            .digest(input)
            .inspect_err(|e| warn!(error = %e, "digest primitive failed"))
    }

    /// 计算文本的 SHA-256 摘要
    pub fn compute_digest(&self, text: &str) -> Result<DigestValue, DigestError> {
        let input = input::normalize(text, "message", &self.config)?;
        let digest = self.digest_input(&input)?;
        debug!(input_len = input.len(), "computed digest");
        Ok(digest)
    }

    /// 计算 `SHA256(text || salt)`，盐为新生成的随机十六进制串
    pub fn compute_salted(&self, text: &str) -> Result<SaltedDigest, DigestError> {
        let input = input::normalize(text, "message", &self.config)?;
        let salt = generate_salt(self.config.salt_len);
        let digest = self.digest_input(&input::with_salt(&input, &salt))?;
        debug!(input_len = input.len(), salt_len = salt.len(), "computed salted digest");
        Ok(SaltedDigest { salt, digest })
    }

    pub fn verify_salted(
        &self,
        text: &str,
        salted: &SaltedDigest,
    ) -> Result<MatchResult, DigestError> {
        let input = input::normalize(text, "message", &self.config)?;
        let digest = self.digest_input(&input::with_salt(&input, &salted.salt))?;
        Ok(digest.matches(&salted.digest))
    }

    /// 存储密码摘要，覆盖之前的值
    ///
    /// 明文只存在于本次调用内的清零缓冲区中。
    pub fn store_digest(&self, password: &str) -> Result<DigestValue, DigestError> {
        if self.config.require_confirmation {
            return Err(DigestError::Validation(
                "password confirmation required".to_string(),
            ));
        }
        let password = input::normalize(password, "password", &self.config)?;
        self.store_input(password)
    }

    /// 两次输入一致时存储密码摘要
    pub fn store_confirmed(
        &self,
        password: &str,
        confirmation: &str,
    ) -> Result<DigestValue, DigestError> {
        let password = input::normalize(password, "password", &self.config)?;
        let confirmation = input::normalize(confirmation, "confirmation", &self.config)?;

        if !bool::from(password.as_slice().ct_eq(confirmation.as_slice())) {
            return Err(DigestError::Validation(
                "passwords do not match".to_string(),
            ));
        }
        drop(confirmation);

        self.store_input(password)
    }

    fn store_input(&self, password: InputBytes) -> Result<DigestValue, DigestError> {
        // computed before touching the slot; a failure leaves it as it was
        let digest = self.digest_input(&password)?;
        drop(password);

        let replaced = self.stored.replace(digest).is_some();
        info!(replaced, "stored password digest");
        Ok(digest)
    }

    /// 与已存储的摘要比对
    ///
    /// 尚未存储任何摘要时，无论候选值为何都返回 `Precondition`。
    pub fn verify_digest(&self, candidate: &str) -> Result<MatchResult, DigestError> {
        let stored = self
            .stored
            .current()
            .ok_or_else(|| DigestError::Precondition("no password stored yet".to_string()))?;
        self.verify_against(candidate, &stored)
    }

    /// 与外部持有的摘要比对，不读取存储槽
    pub fn verify_against(
        &self,
        candidate: &str,
        expected: &DigestValue,
    ) -> Result<MatchResult, DigestError> {
        let input = input::normalize(candidate, "password", &self.config)?;
        let digest = self.digest_input(&input)?;
        let result = digest.matches(expected);
        info!(matched = result.is_match(), "verified password");
        Ok(result)
    }

    pub fn stored_digest(&self) -> Option<DigestValue> {
        self.stored.current()
    }

    pub fn has_stored(&self) -> bool {
        !self.stored.is_empty()
    }

    /// Digest one of [`QUICK_SAMPLES`].
    pub fn quick_digest(&self, index: usize) -> Result<(&'static str, DigestValue), DigestError> {
        let sample = QUICK_SAMPLES.get(index).copied().ok_or_else(|| {
            DigestError::Validation(format!(
                "quick sample index {index} out of range (0..{})",
                QUICK_SAMPLES.len()
            ))
        })?;
        Ok((sample, self.compute_digest(sample)?))
    }
}
