use thiserror::Error;

/// 摘要工作流的错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// 输入为空、仅含空白、两次密码不一致或超出长度限制
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 前置条件不满足（例如尚未存储任何摘要就进行验证）
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// 底层摘要原语失败
    #[error("Digest primitive failed: {0}")]
    PrimitiveFailure(String),

    /// 无法解析的十六进制摘要
    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Coarse classification used by front ends to pick user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Precondition,
    PrimitiveFailure,
    Other,
}

impl DigestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DigestError::Validation(_) => ErrorKind::Validation,
            DigestError::Precondition(_) => ErrorKind::Precondition,
            DigestError::PrimitiveFailure(_) => ErrorKind::PrimitiveFailure,
            DigestError::InvalidDigest(_)
            | DigestError::Configuration(_)
            | DigestError::Serialization(_) => ErrorKind::Other,
        }
    }
}

impl From<serde_json::Error> for DigestError {
    fn from(err: serde_json::Error) -> Self {
        DigestError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;
