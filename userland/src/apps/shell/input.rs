//! Line editor: echo, backspace, and the line buffer.
//!
//! The console is raw, so the editor does its own echo. Input is consumed
//! one byte at a time and the visible terminal line always matches the
//! buffer contents.

use crate::config::{LINE_CAPACITY, LINE_MAX};
use crate::console::{print, put_char, read_char};
use crate::syscall::{Kernel, SyscallResult};

const KEY_BACKSPACE: u8 = 0x08;
const KEY_DELETE: u8 = 0x7f;

/// Back up, blank the cell, back up again.
static ERASE: &[u8] = b"\x08 \x08";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    Accumulating,
    Done,
}

/// Fixed buffer holding the line being edited.
///
/// `buf[len]` is always 0, and `len` never exceeds [`LINE_MAX`].
pub struct LineBuffer {
    buf: [u8; LINE_CAPACITY],
    len: usize,
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            buf: [0; LINE_CAPACITY],
            len: 0,
        }
    }

    pub fn clear(&mut self) {
        self.buf.fill(0);
        self.len = 0;
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Contents including the terminating NUL.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= LINE_MAX
    }

    /// Apply one input byte, echoing as needed.
    ///
    /// A full buffer ends the line without echoing a newline.
    pub fn feed(&mut self, byte: u8, k: &mut dyn Kernel) -> LineState {
        match byte {
            b'\n' | b'\r' => {
                put_char(k, b'\n');
                return LineState::Done;
            }
            KEY_BACKSPACE | KEY_DELETE => {
                if self.len > 0 {
                    self.len -= 1;
                    self.buf[self.len] = 0;
                    print(k, ERASE);
                }
            }
            0x20..=0x7e => {
                if !self.is_full() {
                    self.buf[self.len] = byte;
                    self.len += 1;
                    self.buf[self.len] = 0;
                    put_char(k, byte);
                }
            }
            _ => {}
        }

        if self.is_full() {
            LineState::Done
        } else {
            LineState::Accumulating
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Read bytes into `line` until it is terminated.
///
/// The buffer is not cleared first, so a caller retrying after an input
/// error keeps what was already typed.
pub fn read_line(line: &mut LineBuffer, k: &mut dyn Kernel) -> SyscallResult<()> {
    loop {
        let byte = read_char(k)?;
        if line.feed(byte, k) == LineState::Done {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syscall::SyscallError;
    use crate::syscall::fake::FakeKernel;

    fn feed_all(line: &mut LineBuffer, k: &mut FakeKernel, bytes: &[u8]) -> LineState {
        let mut state = LineState::Accumulating;
        for &b in bytes {
            state = line.feed(b, k);
        }
        state
    }

    #[test]
    fn test_enter_ends_line_with_echo() {
        let mut k = FakeKernel::new();
        let mut line = LineBuffer::new();
        assert_eq!(feed_all(&mut line, &mut k, b"ls /\n"), LineState::Done);
        assert_eq!(line.as_bytes(), b"ls /");
        assert_eq!(k.stdout, b"ls /\n");
    }

    #[test]
    fn test_carriage_return_ends_line() {
        let mut k = FakeKernel::new();
        let mut line = LineBuffer::new();
        assert_eq!(feed_all(&mut line, &mut k, b"pwd\r"), LineState::Done);
        assert_eq!(line.as_bytes(), b"pwd");
        assert_eq!(k.stdout, b"pwd\n");
    }

    #[test]
    fn test_backspace_erases_last_byte() {
        let mut k = FakeKernel::new();
        let mut line = LineBuffer::new();
        feed_all(&mut line, &mut k, b"cdx\x08");
        assert_eq!(line.as_bytes(), b"cd");
        assert_eq!(k.stdout, b"cdx\x08 \x08");

        feed_all(&mut line, &mut k, &[0x7f]);
        assert_eq!(line.as_bytes(), b"c");
        assert_eq!(line.as_bytes_with_nul(), b"c\0");
    }

    #[test]
    fn test_backspace_on_empty_line_is_silent() {
        let mut k = FakeKernel::new();
        let mut line = LineBuffer::new();
        assert_eq!(line.feed(0x08, &mut k), LineState::Accumulating);
        assert_eq!(line.feed(0x7f, &mut k), LineState::Accumulating);
        assert!(line.is_empty());
        assert!(k.stdout.is_empty());
    }

    #[test]
    fn test_non_printable_bytes_are_ignored() {
        let mut k = FakeKernel::new();
        let mut line = LineBuffer::new();
        feed_all(&mut line, &mut k, b"a\x1b\x01\tb\x80\xff");
        assert_eq!(line.as_bytes(), b"ab");
        assert_eq!(k.stdout, b"ab");
    }

    #[test]
    fn test_full_line_terminates_without_newline() {
        let mut k = FakeKernel::new();
        let mut line = LineBuffer::new();
        let mut states = std::vec::Vec::new();
        for _ in 0..200 {
            states.push(line.feed(b'x', &mut k));
            if line.is_full() {
                break;
            }
        }
        assert_eq!(line.len(), LINE_MAX);
        assert_eq!(states.len(), LINE_MAX);
        assert_eq!(states.last(), Some(&LineState::Done));
        assert_eq!(line.as_bytes_with_nul()[LINE_MAX], 0);
        assert_eq!(k.stdout.len(), LINE_MAX);
        assert!(!k.stdout.contains(&b'\n'));
    }

    #[test]
    fn test_length_and_nul_hold_under_mixed_input() {
        let mut k = FakeKernel::new();
        let mut line = LineBuffer::new();
        let pattern = b"ab\x08\x08\x08c\x7fdef\x01";
        for round in 0..64 {
            for &b in pattern {
                line.feed(b, &mut k);
                assert!(line.len() <= LINE_MAX, "round {round}");
                assert_eq!(line.as_bytes_with_nul()[line.len()], 0);
            }
        }
    }

    #[test]
    fn test_read_line_reads_until_enter() {
        let mut k = FakeKernel::new().with_input(b"echo hi\nrest");
        let mut line = LineBuffer::new();
        assert_eq!(read_line(&mut line, &mut k), Ok(()));
        assert_eq!(line.as_bytes(), b"echo hi");
        assert_eq!(k.input.len(), 4);
    }

    #[test]
    fn test_read_line_keeps_partial_input_on_error() {
        let mut k = FakeKernel::new().with_input(b"ec");
        let mut line = LineBuffer::new();
        assert_eq!(read_line(&mut line, &mut k), Err(SyscallError::EIO));
        k.push_input(b"ho\n");
        assert_eq!(read_line(&mut line, &mut k), Ok(()));
        assert_eq!(line.as_bytes(), b"echo");
    }
}
