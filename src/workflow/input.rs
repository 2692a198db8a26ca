use zeroize::Zeroizing;

use crate::{config::WorkflowConfig, error::DigestError};

/// Canonical UTF-8 bytes of a validated input, wiped on drop.
pub type InputBytes = Zeroizing<Vec<u8>>;

/// 校验输入并转换为规范字节
///
/// - 去除首尾空白后必须非空，否则返回 `Validation`，不会调用摘要原语
/// - `trim_input` 为 true 时返回去除空白后的字节
/// - 超出 `max_input_len` 时返回 `Validation`
pub fn normalize(text: &str, field: &str, config: &WorkflowConfig) -> Result<InputBytes, DigestError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DigestError::Validation(format!("{field} must not be empty")));
    }

    let chosen = if config.trim_input { trimmed } else { text };

    if let Some(max) = config.max_input_len {
        if chosen.len() > max {
            return Err(DigestError::Validation(format!(
                "{field} too long: {} > {max} bytes",
                chosen.len()
            )));
        }
    }

    Ok(Zeroizing::new(chosen.as_bytes().to_vec()))
}

/// `input || salt`，同样在释放时清零
pub fn with_salt(input: &[u8], salt: &str) -> InputBytes {
    let mut buf = Zeroizing::new(Vec::with_capacity(input.len() + salt.len()));
    buf.extend_from_slice(input);
    buf.extend_from_slice(salt.as_bytes());
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_whitespace() {
        let config = WorkflowConfig::default();
        for text in ["", "   ", "\t\n "] {
            let err = normalize(text, "message", &config).unwrap_err();
            assert_eq!(
                err,
                DigestError::Validation("message must not be empty".to_string())
            );
        }
    }

    #[test]
    fn test_trims_by_default() {
        let config = WorkflowConfig::default();
        let bytes = normalize("  abc \n", "message", &config).unwrap();
        assert_eq!(bytes.as_slice(), b"abc");
    }

    #[test]
    fn test_keeps_whitespace_when_trim_disabled() {
        let config = WorkflowConfig {
            trim_input: false,
            ..WorkflowConfig::default()
        };
        let bytes = normalize(" abc ", "message", &config).unwrap();
        assert_eq!(bytes.as_slice(), b" abc ");

        // whitespace-only is still rejected
        assert!(normalize("  ", "message", &config).is_err());
    }

    #[test]
    fn test_utf8_encoding() {
        let config = WorkflowConfig::default();
        let bytes = normalize("héllo", "message", &config).unwrap();
        assert_eq!(bytes.as_slice(), "héllo".as_bytes());
        assert_eq!(bytes.len(), 6);
    }

    #[test]
    fn test_max_len() {
        let config = WorkflowConfig {
            max_input_len: Some(4),
            ..WorkflowConfig::default()
        };
        assert!(normalize("abcd", "password", &config).is_ok());
        assert!(matches!(
            normalize("abcde", "password", &config),
            Err(DigestError::Validation(_))
        ));
    }

    #[test]
    fn test_with_salt() {
        let buf = with_salt(b"hello", "00ff");
        assert_eq!(buf.as_slice(), b"hello00ff");
    }
}
