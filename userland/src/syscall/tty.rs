//! Diagnostics on the standard error descriptor.
//!
//! Unbuffered: one write per call, no newline translation.

use minishell_abi::STDERR;

use super::error::SyscallResult;
use super::fs;

#[inline(always)]
pub fn write_err(buf: &[u8]) -> SyscallResult<usize> {
    fs::write(STDERR, buf)
}

#[cfg(all(test, not(any(target_arch = "riscv32", target_arch = "riscv64"))))]
mod tests {
    use super::*;
    use crate::syscall::SyscallError;

    #[test]
    fn test_write_err_reaches_the_gateway() {
        assert_eq!(write_err(b"init: test\n"), Err(SyscallError::ENOSYS));
    }
}
