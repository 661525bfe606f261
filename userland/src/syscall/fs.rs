//! File descriptor and directory operations.
//!
//! Typed wrappers returning `SyscallResult<T>`. Paths are `&CStr` so the
//! kernel always sees a terminated string; descriptors are sign-extended
//! so `AT_FDCWD` reaches the kernel as a negative word.

use core::ffi::CStr;

use minishell_abi::OpenFlags;

use super::RawFd;
use super::error::{SyscallResult, demux};
use super::numbers::*;
use super::raw::{syscall1, syscall2, syscall3, syscall4};

#[inline(always)]
fn fd_arg(fd: RawFd) -> usize {
    fd as isize as usize
}

/// Read from a file descriptor into a buffer.
///
/// # Returns
/// Number of bytes read, or 0 on EOF
///
/// # Errors
/// * `EBADF` - Invalid file descriptor
/// * `EISDIR` - Descriptor refers to a directory
/// * `EIO` - I/O error
#[inline(always)]
pub fn read(fd: RawFd, buf: &mut [u8]) -> SyscallResult<usize> {
    let result = unsafe {
        syscall3(
            SYSCALL_READ,
            fd_arg(fd),
            buf.as_mut_ptr() as usize,
            buf.len(),
        )
    };
    demux(result)
}

/// Write to a file descriptor from a buffer.
///
/// # Returns
/// Number of bytes written
#[inline(always)]
pub fn write(fd: RawFd, buf: &[u8]) -> SyscallResult<usize> {
    let result = unsafe { syscall3(SYSCALL_WRITE, fd_arg(fd), buf.as_ptr() as usize, buf.len()) };
    demux(result)
}

/// Open `path` relative to the directory handle `dirfd`.
///
/// # Errors
/// * `ENOENT` - File not found and `CREAT` not given
/// * `EACCES` - Permission denied
/// * `ENOTDIR` - A path component is not a directory
#[inline(always)]
pub fn openat(dirfd: RawFd, path: &CStr, flags: OpenFlags, mode: u32) -> SyscallResult<RawFd> {
    let result = unsafe {
        syscall4(
            SYSCALL_OPENAT,
            fd_arg(dirfd),
            path.as_ptr() as usize,
            flags.bits() as usize,
            mode as usize,
        )
    };
    demux(result).map(|v| v as RawFd)
}

/// Close a file descriptor.
///
/// # Errors
/// * `EBADF` - Invalid file descriptor
#[inline(always)]
pub fn close(fd: RawFd) -> SyscallResult<()> {
    let result = unsafe { syscall1(SYSCALL_CLOSE, fd_arg(fd)) };
    demux(result).map(|_| ())
}

/// Fill `buf` with packed `dirent64` records.
///
/// # Returns
/// Bytes filled; 0 once the directory is exhausted
///
/// # Errors
/// * `ENOTDIR` - Descriptor is not a directory
/// * `EINVAL` - Buffer too small for the next record
#[inline(always)]
pub fn getdents64(fd: RawFd, buf: &mut [u8]) -> SyscallResult<usize> {
    let result = unsafe {
        syscall3(
            SYSCALL_GETDENTS64,
            fd_arg(fd),
            buf.as_mut_ptr() as usize,
            buf.len(),
        )
    };
    demux(result)
}

/// Copy the working directory, NUL-terminated, into `buf`.
///
/// # Returns
/// Length including the terminator
///
/// # Errors
/// * `ERANGE` - `buf` is too small
#[inline(always)]
pub fn getcwd(buf: &mut [u8]) -> SyscallResult<usize> {
    let result = unsafe { syscall2(SYSCALL_GETCWD, buf.as_mut_ptr() as usize, buf.len()) };
    demux(result)
}

/// Change the working directory.
#[inline(always)]
pub fn chdir(path: &CStr) -> SyscallResult<()> {
    let result = unsafe { syscall1(SYSCALL_CHDIR, path.as_ptr() as usize) };
    demux(result).map(|_| ())
}

/// Create a directory relative to `dirfd`.
///
/// # Errors
/// * `EEXIST` - Path already exists
/// * `ENOENT` - Parent directory not found
#[inline(always)]
pub fn mkdirat(dirfd: RawFd, path: &CStr, mode: u32) -> SyscallResult<()> {
    let result = unsafe {
        syscall3(
            SYSCALL_MKDIRAT,
            fd_arg(dirfd),
            path.as_ptr() as usize,
            mode as usize,
        )
    };
    demux(result).map(|_| ())
}
