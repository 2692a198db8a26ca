use rand::RngCore;

/// 生成 `len` 字节随机盐，返回小写十六进制字符串（长度为 `2 * len`）
pub fn generate_salt(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_shape() {
        let salt = generate_salt(8);
        assert_eq!(salt.len(), 16);
        assert!(salt.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn test_salts_differ() {
        // 16 random bytes colliding is not a realistic outcome
        assert_ne!(generate_salt(16), generate_salt(16));
    }
}
