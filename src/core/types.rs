use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::error::DigestError;

/// SHA-256 摘要值（32 字节），对外以 64 个小写十六进制字符表示
///
/// 一旦计算完成即不可变。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigestValue {
    bytes: [u8; 32],
}

impl DigestValue {
    pub const ALGORITHM: &'static str = "SHA-256";
    pub const BITS: usize = 256;
    /// 原始字节长度
    pub const LEN: usize = 32;
    /// 十六进制表示长度
    pub const HEX_LEN: usize = 64;

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// 小写十六进制，每字节两位，高半字节在前，无分隔符
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// First `n` hex characters followed by `...`, for compact display.
    pub fn preview(&self, n: usize) -> String {
        let hex = self.to_hex();
        if n >= hex.len() {
            return hex;
        }
        format!("{}...", &hex[..n])
    }

    /// 精确比较两个摘要（常数时间）
    pub fn matches(&self, other: &DigestValue) -> MatchResult {
        MatchResult::from(bool::from(self.bytes[..].ct_eq(&other.bytes[..])))
    }
}

impl fmt::Display for DigestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for DigestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigestValue({})", self.to_hex())
    }
}

impl FromStr for DigestValue {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::HEX_LEN {
            return Err(DigestError::InvalidDigest(format!(
                "expected {} hex chars, got {}",
                Self::HEX_LEN,
                s.len()
            )));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| DigestError::InvalidDigest(e.to_string()))?;
        Ok(Self { bytes })
    }
}

impl TryFrom<String> for DigestValue {
    type Error = DigestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DigestValue> for String {
    fn from(value: DigestValue) -> Self {
        value.to_hex()
    }
}

/// 验证结果：不匹配是正常结果，不是错误
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Match,
    Mismatch,
}

impl MatchResult {
    pub fn is_match(self) -> bool {
        matches!(self, MatchResult::Match)
    }
}

impl From<bool> for MatchResult {
    fn from(matched: bool) -> Self {
        if matched {
            MatchResult::Match
        } else {
            MatchResult::Mismatch
        }
    }
}

/// 加盐摘要：`digest = SHA256(text || salt)`，盐以十六进制字符串保存
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaltedDigest {
    pub salt: String,
    pub digest: DigestValue,
}
