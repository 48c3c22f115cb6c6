//! Byte-string key and value types.

use std::cmp::Ordering;

use crate::bytes;

/// Key type - variable length bytes, ordered by [`bytes::compare`].
///
/// Equality follows the same order, so two keys that differ only by trailing
/// zero bytes are the same key.
#[derive(Clone, Debug)]
pub struct Key(pub Vec<u8>);

impl Key {
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self(data.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        bytes::compare(&self.0, &other.0)
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Key {
    fn from(data: &[u8]) -> Self {
        Self::from_slice(data)
    }
}

impl<const N: usize> From<&[u8; N]> for Key {
    fn from(data: &[u8; N]) -> Self {
        Self::from_slice(data)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::from_slice(s.as_bytes())
    }
}

impl From<Vec<u8>> for Key {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

/// Value type - variable length bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Value(pub Vec<u8>);

impl Value {
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self(data.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Value {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::from_slice(s.as_bytes())
    }
}

impl From<Vec<u8>> for Value {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_key_ordering() {
        assert!(Key::from("a") < Key::from("b"));
        assert!(Key::from(&[0x01]) < Key::from(&[0xff]));
        assert!(Key::from(&[1]) < Key::from(&[1, 1]));
    }

    #[test]
    fn test_key_equality_ignores_zero_tail() {
        assert_eq!(Key::from(&[1]), Key::from(&[1, 0]));
        assert_ne!(Key::from(&[1]), Key::from(&[1, 1]));
    }

    #[test]
    fn test_map_keeps_first_inserted_key_bytes() {
        let mut map = BTreeMap::new();
        map.insert(Key::from(&[7]), Value::from("first"));
        map.insert(Key::from(&[7, 0]), Value::from("second"));

        assert_eq!(map.len(), 1);
        let (key, value) = map.iter().next().unwrap();
        assert_eq!(key.as_bytes(), &[7]);
        assert_eq!(value.as_bytes(), b"second");
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from("abc").as_bytes(), b"abc");
        assert_eq!(Value::from(vec![1, 2]).into_vec(), vec![1, 2]);
        assert!(Value::new(Vec::new()).is_empty());
    }
}
