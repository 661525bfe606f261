//! Filesystem attach and system identification.

use core::ffi::CStr;

use minishell_abi::{MountFlags, UtsName};

use super::error::{SyscallResult, demux};
use super::numbers::*;
use super::raw::{syscall1, syscall5};

/// Attach a filesystem of type `fstype` from `source` at `target`.
///
/// No filesystem-specific data is passed.
///
/// # Errors
/// * `ENODEV` - Filesystem type not supported by the kernel
/// * `ENOENT` - Mount point does not exist
/// * `EBUSY` - Already mounted
#[inline(always)]
pub fn mount(source: &CStr, target: &CStr, fstype: &CStr, flags: MountFlags) -> SyscallResult<()> {
    let result = unsafe {
        syscall5(
            SYSCALL_MOUNT,
            source.as_ptr() as usize,
            target.as_ptr() as usize,
            fstype.as_ptr() as usize,
            flags.bits() as usize,
            0,
        )
    };
    demux(result).map(|_| ())
}

/// Fill `out` with the kernel's identification strings.
///
/// `UtsName` carries all six fields, so the kernel's write stays in bounds.
#[inline(always)]
pub fn uname(out: &mut UtsName) -> SyscallResult<()> {
    let result = unsafe { syscall1(SYSCALL_UNAME, out as *mut UtsName as usize) };
    demux(result).map(|_| ())
}
