//! Character I/O over the console descriptors.
//!
//! Output is unbuffered: every byte is its own `write`, so echo and prompts
//! show up immediately on a serial line. Input is polled one byte at a time.

use minishell_lib::klog_trace;

use crate::syscall::{Kernel, STDIN, STDOUT, SyscallError, SyscallResult};

/// Emit one byte. Console write failures have nowhere to be reported.
#[inline]
pub fn put_char(k: &mut dyn Kernel, byte: u8) {
    let _ = k.write(STDOUT, &[byte]);
}

/// Emit `text` byte by byte, stopping early at a NUL.
pub fn print(k: &mut dyn Kernel, text: &[u8]) {
    for &byte in text.iter().take_while(|&&b| b != 0) {
        put_char(k, byte);
    }
}

/// Write all of `buf` to the console, resuming after short writes.
///
/// `EAGAIN`/`EINTR` yield and retry. A write that accepts nothing is
/// reported as `EIO`.
pub fn write_all(k: &mut dyn Kernel, mut buf: &[u8]) -> SyscallResult<()> {
    while !buf.is_empty() {
        match k.write(STDOUT, buf) {
            Ok(0) => return Err(SyscallError::EIO),
            Ok(n) => buf = buf.get(n..).unwrap_or_default(),
            Err(err) if err.is_transient() => {
                klog_trace!("console: write {}, retrying", err);
                k.sched_yield();
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Block until the console delivers a byte.
///
/// A read with no data (0 bytes, `EAGAIN`, `EINTR`) yields the CPU and
/// retries. Any other error is returned to the caller.
pub fn read_char(k: &mut dyn Kernel) -> SyscallResult<u8> {
    let mut byte = [0u8; 1];
    loop {
        match k.read(STDIN, &mut byte) {
            Ok(1..) => return Ok(byte[0]),
            Ok(0) => {}
            Err(err) if err.is_transient() => {
                klog_trace!("console: read {}, retrying", err);
            }
            Err(err) => return Err(err),
        }
        k.sched_yield();
    }
}
