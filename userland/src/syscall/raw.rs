//! Raw syscall primitives for RISC-V minishell userland.
//!
//! This module is the only place in the workspace that traps into the
//! kernel. Every higher layer goes through these functions.
//!
//! # ABI Convention
//!
//! Minishell uses the standard RISC-V Linux convention:
//! - a7: syscall number
//! - a0-a4: arguments 0-4
//! - a0: return value (values in `[-4095, -1]` are negated errno codes)
//!
//! On any other architecture there is no kernel to trap into; the
//! primitives return `-ENOSYS` so host builds and unit tests link and run.

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
mod imp {
    use core::arch::asm;

    #[inline(always)]
    pub unsafe fn syscall0(num: usize) -> usize {
        let ret: usize;
        unsafe {
            asm!(
                "ecall",
                in("a7") num,
                lateout("a0") ret,
                options(nostack),
            );
        }
        ret
    }

    #[inline(always)]
    pub unsafe fn syscall1(num: usize, arg0: usize) -> usize {
        let ret: usize;
        unsafe {
            asm!(
                "ecall",
                in("a7") num,
                inlateout("a0") arg0 => ret,
                options(nostack),
            );
        }
        ret
    }

    #[inline(always)]
    pub unsafe fn syscall2(num: usize, arg0: usize, arg1: usize) -> usize {
        let ret: usize;
        unsafe {
            asm!(
                "ecall",
                in("a7") num,
                inlateout("a0") arg0 => ret,
                in("a1") arg1,
                options(nostack),
            );
        }
        ret
    }

    #[inline(always)]
    pub unsafe fn syscall3(num: usize, arg0: usize, arg1: usize, arg2: usize) -> usize {
        let ret: usize;
        unsafe {
            asm!(
                "ecall",
                in("a7") num,
                inlateout("a0") arg0 => ret,
                in("a1") arg1,
                in("a2") arg2,
                options(nostack),
            );
        }
        ret
    }

    #[inline(always)]
    pub unsafe fn syscall4(num: usize, arg0: usize, arg1: usize, arg2: usize, arg3: usize) -> usize {
        let ret: usize;
        unsafe {
            asm!(
                "ecall",
                in("a7") num,
                inlateout("a0") arg0 => ret,
                in("a1") arg1,
                in("a2") arg2,
                in("a3") arg3,
                options(nostack),
            );
        }
        ret
    }

    #[inline(always)]
    pub unsafe fn syscall5(
        num: usize,
        arg0: usize,
        arg1: usize,
        arg2: usize,
        arg3: usize,
        arg4: usize,
    ) -> usize {
        let ret: usize;
        unsafe {
            asm!(
                "ecall",
                in("a7") num,
                inlateout("a0") arg0 => ret,
                in("a1") arg1,
                in("a2") arg2,
                in("a3") arg3,
                in("a4") arg4,
                options(nostack),
            );
        }
        ret
    }
}

#[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
mod imp {
    const ENOSYS_RET: usize = -38isize as usize;

    #[inline(always)]
    pub unsafe fn syscall0(_num: usize) -> usize {
        ENOSYS_RET
    }

    #[inline(always)]
    pub unsafe fn syscall1(_num: usize, _arg0: usize) -> usize {
        ENOSYS_RET
    }

    #[inline(always)]
    pub unsafe fn syscall2(_num: usize, _arg0: usize, _arg1: usize) -> usize {
        ENOSYS_RET
    }

    #[inline(always)]
    pub unsafe fn syscall3(_num: usize, _arg0: usize, _arg1: usize, _arg2: usize) -> usize {
        ENOSYS_RET
    }

    #[inline(always)]
    pub unsafe fn syscall4(
        _num: usize,
        _arg0: usize,
        _arg1: usize,
        _arg2: usize,
        _arg3: usize,
    ) -> usize {
        ENOSYS_RET
    }

    #[inline(always)]
    pub unsafe fn syscall5(
        _num: usize,
        _arg0: usize,
        _arg1: usize,
        _arg2: usize,
        _arg3: usize,
        _arg4: usize,
    ) -> usize {
        ENOSYS_RET
    }
}

pub use imp::{syscall0, syscall1, syscall2, syscall3, syscall4, syscall5};
