//! Byte-string helpers for a heap-free userland.
//!
//! Console input is plain bytes (printable ASCII after line editing), so
//! everything here works on `&[u8]` and fixed-capacity buffers rather than
//! `str`.

use core::ffi::CStr;
use core::fmt;

#[inline(always)]
pub fn is_space(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r'
}

pub fn trim_start(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| !is_space(b)).unwrap_or(bytes.len());
    &bytes[start..]
}

pub fn trim_end(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| !is_space(b)).map_or(0, |i| i + 1);
    &bytes[..end]
}

pub fn trim(bytes: &[u8]) -> &[u8] {
    trim_end(trim_start(bytes))
}

/// Split off the first whitespace-delimited word.
///
/// Leading whitespace is skipped on both halves, so `"  ls   /dev"` gives
/// `("ls", "/dev")`. Trailing whitespace of the remainder is kept.
pub fn split_word(bytes: &[u8]) -> (&[u8], &[u8]) {
    let bytes = trim_start(bytes);
    let end = bytes.iter().position(|&b| is_space(b)).unwrap_or(bytes.len());
    (&bytes[..end], trim_start(&bytes[end..]))
}

/// Parse an optionally signed decimal `i32`. No whitespace is accepted.
pub fn parse_i32(bytes: &[u8]) -> Option<i32> {
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + (b - b'0') as i64;
        if value > i32::MAX as i64 + 1 {
            return None;
        }
    }
    let value = if negative { -value } else { value };
    i32::try_from(value).ok()
}

/// Extract a NUL-padded byte array as a `&str`.
///
/// Scans for the first NUL byte (or end of slice) and interprets the
/// prefix as UTF-8. Returns `"<invalid>"` if the bytes are not valid
/// UTF-8.
#[inline]
pub fn bytes_as_str(buf: &[u8]) -> &str {
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    core::str::from_utf8(&buf[..len]).unwrap_or("<invalid>")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CStrBufError {
    /// Input plus terminator does not fit.
    TooLong,
    /// Input contains a NUL byte before its end.
    InteriorNul,
}

impl fmt::Display for CStrBufError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CStrBufError::TooLong => f.write_str("too long"),
            CStrBufError::InteriorNul => f.write_str("contains NUL"),
        }
    }
}

/// Fixed-capacity, always NUL-terminated byte string.
///
/// Holds at most `N - 1` bytes. The buffer is reused in place by `set` and
/// `clear`; nothing ever grows.
#[derive(Clone)]
pub struct CStrBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> CStrBuf<N> {
    pub const fn new() -> Self {
        const { assert!(N > 0) };
        Self { buf: [0; N], len: 0 }
    }

    pub const fn capacity(&self) -> usize {
        N - 1
    }

    pub fn clear(&mut self) {
        self.buf[0] = 0;
        self.len = 0;
    }

    /// Replace the contents. On error the buffer is left empty.
    pub fn set(&mut self, bytes: &[u8]) -> Result<(), CStrBufError> {
        self.clear();
        if bytes.len() >= N {
            return Err(CStrBufError::TooLong);
        }
        if bytes.contains(&0) {
            return Err(CStrBufError::InteriorNul);
        }
        self.buf[..bytes.len()].copy_from_slice(bytes);
        self.buf[bytes.len()] = 0;
        self.len = bytes.len();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Contents without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_cstr(&self) -> &CStr {
        // SAFETY: `set`/`clear` keep `buf[len] == 0` and reject interior NULs,
        // so `buf[..=len]` is exactly one NUL-terminated string.
        unsafe { CStr::from_bytes_with_nul_unchecked(&self.buf[..=self.len]) }
    }
}

impl<const N: usize> Default for CStrBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for CStrBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CStrBuf({:?})", bytes_as_str(self.as_bytes()))
    }
}
