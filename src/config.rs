use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DigestError;

/// 盐长度上限（字节）
pub const MAX_SALT_LEN: usize = 64;

/// 工作流配置参数
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// 是否对去除首尾空白后的文本计算摘要
    pub trim_input: bool,
    /// 随机盐长度（字节），十六进制后长度翻倍
    pub salt_len: usize,
    /// 输入最大长度（字节），`None` 表示不限制
    pub max_input_len: Option<usize>,
    /// 存储密码时是否必须提供确认密码
    pub require_confirmation: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            trim_input: true,
            // 8 字节 -> 16 个十六进制字符
            salt_len: 8,
            max_input_len: None,
            require_confirmation: false,
        }
    }
}

impl WorkflowConfig {
    pub fn from_json_str(json: &str) -> Result<Self, DigestError> {
        let config: WorkflowConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DigestError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DigestError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), DigestError> {
        if self.salt_len == 0 || self.salt_len > MAX_SALT_LEN {
            return Err(DigestError::Configuration(format!(
                "salt_len must be in 1..={MAX_SALT_LEN}, got {}",
                self.salt_len
            )));
        }
        if self.max_input_len == Some(0) {
            return Err(DigestError::Configuration(
                "max_input_len must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
