//! File descriptor RAII wrapper.

use crate::syscall::RawFd;
use crate::syscall::error::SyscallResult;
use crate::syscall::kernel::Kernel;

/// Owns an open descriptor and closes it on drop.
///
/// The guard borrows the kernel handle for its lifetime; use
/// [`FdGuard::kernel`] to issue unrelated calls (console output) while the
/// descriptor is open.
pub struct FdGuard<'k> {
    kernel: &'k mut dyn Kernel,
    fd: RawFd,
}

impl<'k> FdGuard<'k> {
    #[inline]
    pub fn from_raw(kernel: &'k mut dyn Kernel, fd: RawFd) -> Self {
        Self { kernel, fd }
    }

    #[inline]
    pub const fn as_raw(&self) -> RawFd {
        self.fd
    }

    #[inline]
    pub fn kernel(&mut self) -> &mut dyn Kernel {
        &mut *self.kernel
    }

    #[inline]
    pub fn read(&mut self, buf: &mut [u8]) -> SyscallResult<usize> {
        self.kernel.read(self.fd, buf)
    }

    #[inline]
    pub fn getdents64(&mut self, buf: &mut [u8]) -> SyscallResult<usize> {
        self.kernel.getdents64(self.fd, buf)
    }

    /// Close now and report the result instead of discarding it in `drop`.
    #[inline]
    pub fn close(self) -> SyscallResult<()> {
        let mut this = core::mem::ManuallyDrop::new(self);
        let fd = this.fd;
        this.kernel.close(fd)
    }
}

impl Drop for FdGuard<'_> {
    #[inline]
    fn drop(&mut self) {
        let _ = self.kernel.close(self.fd);
    }
}
