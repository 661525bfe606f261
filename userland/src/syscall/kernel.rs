//! The kernel as seen by the shell.
//!
//! [`Kernel`] is the seam between the shell and the trap layer: every
//! operation the shell performs against the kernel is one method here, and
//! the shell only ever holds a `&mut dyn Kernel`. [`Gateway`] is the real
//! implementation and forwards each method to exactly one syscall.

use core::ffi::CStr;

use minishell_abi::{MountFlags, OpenFlags, UtsName};

use super::RawFd;
use super::error::SyscallResult;
use super::{core as sys_core, fs, system};

pub trait Kernel {
    fn read(&mut self, fd: RawFd, buf: &mut [u8]) -> SyscallResult<usize>;

    fn write(&mut self, fd: RawFd, buf: &[u8]) -> SyscallResult<usize>;

    fn openat(
        &mut self,
        dirfd: RawFd,
        path: &CStr,
        flags: OpenFlags,
        mode: u32,
    ) -> SyscallResult<RawFd>;

    fn close(&mut self, fd: RawFd) -> SyscallResult<()>;

    fn getdents64(&mut self, fd: RawFd, buf: &mut [u8]) -> SyscallResult<usize>;

    fn getcwd(&mut self, buf: &mut [u8]) -> SyscallResult<usize>;

    fn chdir(&mut self, path: &CStr) -> SyscallResult<()>;

    fn mkdirat(&mut self, dirfd: RawFd, path: &CStr, mode: u32) -> SyscallResult<()>;

    fn mount(
        &mut self,
        source: &CStr,
        target: &CStr,
        fstype: &CStr,
        flags: MountFlags,
    ) -> SyscallResult<()>;

    fn uname(&mut self, out: &mut UtsName) -> SyscallResult<()>;

    fn sched_yield(&mut self);

    fn exit(&mut self, code: i32) -> !;
}

/// Traps straight into the running kernel.
#[derive(Debug, Default, Clone, Copy)]
pub struct Gateway;

impl Kernel for Gateway {
    #[inline]
    fn read(&mut self, fd: RawFd, buf: &mut [u8]) -> SyscallResult<usize> {
        fs::read(fd, buf)
    }

    #[inline]
    fn write(&mut self, fd: RawFd, buf: &[u8]) -> SyscallResult<usize> {
        fs::write(fd, buf)
    }

    #[inline]
    fn openat(
        &mut self,
        dirfd: RawFd,
        path: &CStr,
        flags: OpenFlags,
        mode: u32,
    ) -> SyscallResult<RawFd> {
        fs::openat(dirfd, path, flags, mode)
    }

    #[inline]
    fn close(&mut self, fd: RawFd) -> SyscallResult<()> {
        fs::close(fd)
    }

    #[inline]
    fn getdents64(&mut self, fd: RawFd, buf: &mut [u8]) -> SyscallResult<usize> {
        fs::getdents64(fd, buf)
    }

    #[inline]
    fn getcwd(&mut self, buf: &mut [u8]) -> SyscallResult<usize> {
        fs::getcwd(buf)
    }

    #[inline]
    fn chdir(&mut self, path: &CStr) -> SyscallResult<()> {
        fs::chdir(path)
    }

    #[inline]
    fn mkdirat(&mut self, dirfd: RawFd, path: &CStr, mode: u32) -> SyscallResult<()> {
        fs::mkdirat(dirfd, path, mode)
    }

    #[inline]
    fn mount(
        &mut self,
        source: &CStr,
        target: &CStr,
        fstype: &CStr,
        flags: MountFlags,
    ) -> SyscallResult<()> {
        system::mount(source, target, fstype, flags)
    }

    #[inline]
    fn uname(&mut self, out: &mut UtsName) -> SyscallResult<()> {
        system::uname(out)
    }

    #[inline]
    fn sched_yield(&mut self) {
        sys_core::yield_now();
    }

    #[inline]
    fn exit(&mut self, code: i32) -> ! {
        sys_core::exit(code)
    }
}
