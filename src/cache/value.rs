//! Cache Value Module
//!
//! Defines the owned byte-sequence type stored in the cache.

// == Cache Value ==
/// An owned, explicitly-sized sequence of bytes.
///
/// Values are opaque: the cache never interprets them as text and never
/// relies on a terminator. Construction copies the caller's bytes, and
/// `clone()` produces an independent deep copy, so a value handed out by
/// the cache shares no memory with the stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheValue {
    /// The value bytes
    data: Box<[u8]>,
}

impl CacheValue {
    // == Constructor ==
    /// Creates a value by deep-copying the given byte slice.
    pub fn copy_from(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec().into_boxed_slice(),
        }
    }

    // == Size ==
    /// Returns the value size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    // == As Bytes ==
    /// Returns the stored bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    // == Into Bytes ==
    /// Consumes the value and returns its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data.into_vec()
    }

    // == Is Empty ==
    /// Returns true for a zero-length value (still a real, stored value).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for CacheValue {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }
}
