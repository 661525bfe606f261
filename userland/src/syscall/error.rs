//! Syscall error handling with errno-compatible representation.
//!
//! This module provides the single point of error conversion for all syscalls.
//! The `demux()` function converts raw kernel return values to
//! `Result<usize, SyscallError>`.

use core::fmt;

/// Syscall error with errno-compatible representation.
///
/// Values correspond to the Linux errno codes the kernel returns.
#[derive(Clone, Copy, Eq, PartialEq)]
#[repr(transparent)]
pub struct SyscallError(i32);

impl SyscallError {
    /// Operation not permitted
    pub const EPERM: Self = Self(1);
    /// No such file or directory
    pub const ENOENT: Self = Self(2);
    /// Interrupted system call
    pub const EINTR: Self = Self(4);
    /// I/O error
    pub const EIO: Self = Self(5);
    /// Bad file descriptor
    pub const EBADF: Self = Self(9);
    /// Try again / Resource temporarily unavailable
    pub const EAGAIN: Self = Self(11);
    /// Out of memory
    pub const ENOMEM: Self = Self(12);
    /// Permission denied
    pub const EACCES: Self = Self(13);
    /// Bad address
    pub const EFAULT: Self = Self(14);
    /// Device or resource busy
    pub const EBUSY: Self = Self(16);
    /// File exists
    pub const EEXIST: Self = Self(17);
    /// No such device
    pub const ENODEV: Self = Self(19);
    /// Not a directory
    pub const ENOTDIR: Self = Self(20);
    /// Is a directory
    pub const EISDIR: Self = Self(21);
    /// Invalid argument
    pub const EINVAL: Self = Self(22);
    /// Too many open files
    pub const EMFILE: Self = Self(24);
    /// No space left on device
    pub const ENOSPC: Self = Self(28);
    /// Read-only file system
    pub const EROFS: Self = Self(30);
    /// Result too large (buffer too small)
    pub const ERANGE: Self = Self(34);
    /// File name too long
    pub const ENAMETOOLONG: Self = Self(36);
    /// Function not implemented
    pub const ENOSYS: Self = Self(38);
    /// Directory not empty
    pub const ENOTEMPTY: Self = Self(39);

    /// Create a SyscallError from a raw errno value.
    #[inline]
    pub const fn from_errno(errno: i32) -> Self {
        Self(errno)
    }

    /// Get the raw errno value.
    #[inline]
    pub const fn errno(self) -> i32 {
        self.0
    }

    /// A read that failed this way may succeed if simply retried.
    #[inline]
    pub const fn is_transient(self) -> bool {
        self.0 == Self::EAGAIN.0 || self.0 == Self::EINTR.0
    }

    /// Get a human-readable description of the error.
    pub const fn as_str(self) -> &'static str {
        match self.0 {
            1 => "Operation not permitted",
            2 => "No such file or directory",
            4 => "Interrupted system call",
            5 => "I/O error",
            9 => "Bad file descriptor",
            11 => "Resource temporarily unavailable",
            12 => "Out of memory",
            13 => "Permission denied",
            14 => "Bad address",
            16 => "Device or resource busy",
            17 => "File exists",
            19 => "No such device",
            20 => "Not a directory",
            21 => "Is a directory",
            22 => "Invalid argument",
            24 => "Too many open files",
            28 => "No space left on device",
            30 => "Read-only file system",
            34 => "Result too large",
            36 => "File name too long",
            38 => "Function not implemented",
            39 => "Directory not empty",
            _ => "Unknown error",
        }
    }
}

impl fmt::Debug for SyscallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SyscallError({}: {})", self.0, self.as_str())
    }
}

impl fmt::Display for SyscallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result type for syscall operations.
pub type SyscallResult<T> = Result<T, SyscallError>;

/// Convert raw syscall return value to Result (SINGLE CONVERSION POINT).
///
/// Linux convention: negative values in the range [-4095, -1] indicate
/// errors, with the negated value being the errno. Everything else is a
/// successful count, size, or descriptor.
///
/// # Examples
///
/// ```ignore
/// let result = unsafe { syscall1(SYSCALL_CLOSE, fd as usize) };
/// match demux(result) {
///     Ok(_) => {}
///     Err(e) => klog_debug!("close failed: {}", e),
/// }
/// ```
#[inline]
pub fn demux(value: usize) -> SyscallResult<usize> {
    let signed = value as isize;
    if (-4095..0).contains(&signed) {
        Err(SyscallError((-signed) as i32))
    } else {
        Ok(value)
    }
}
