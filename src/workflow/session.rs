use parking_lot::RwLock;

use crate::core::DigestValue;

/// 单槽摘要存储
///
/// Holds at most one [`DigestValue`]. Writers replace the whole value under
/// the write lock, so readers see either the previous or the new digest.
/// Nothing is persisted; the value is lost when the holder is dropped.
#[derive(Debug, Default)]
pub struct StoredDigest {
    slot: RwLock<Option<DigestValue>>,
}

impl StoredDigest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot, returning the previous value.
    pub fn replace(&self, digest: DigestValue) -> Option<DigestValue> {
        self.slot.write().replace(digest)
    }

    pub fn current(&self) -> Option<DigestValue> {
        *self.slot.read()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.read().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_then_stored() {
        let stored = StoredDigest::new();
        assert!(stored.is_empty());
        assert_eq!(stored.current(), None);

        let first = DigestValue::from_bytes([1u8; 32]);
        assert_eq!(stored.replace(first), None);
        assert_eq!(stored.current(), Some(first));

        let second = DigestValue::from_bytes([2u8; 32]);
        assert_eq!(stored.replace(second), Some(first));
        assert_eq!(stored.current(), Some(second));
        assert!(!stored.is_empty());
    }
}
