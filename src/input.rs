//! Types for input abstraction.
//!
//! Parsers always consume `&[u8]`; this trait lets callers hand over the
//! usual byte-ish containers without spelling out the conversion.

/// Convert self as a reference to `[u8]`
pub trait AsBytes {
    /// Convert the input type to a byte slice
    fn as_bytes(&self) -> &[u8];
}

impl AsBytes for [u8] {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> AsBytes for [u8; N] {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsBytes for str {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }
}

impl AsBytes for String {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        String::as_bytes(self)
    }
}

impl AsBytes for Vec<u8> {
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<T> AsBytes for &T
where
    T: AsBytes + ?Sized,
{
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        (**self).as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::AsBytes;

    #[test]
    fn test_as_bytes() {
        assert_eq!(AsBytes::as_bytes("hello"), b"hello");
        assert_eq!(AsBytes::as_bytes(b"hello"), b"hello");
        assert_eq!(AsBytes::as_bytes(&"hello".to_string()), b"hello");
        assert_eq!(AsBytes::as_bytes(&b"hello".to_vec()), b"hello");
    }
}
