//! Core syscalls: yield, exit.

use super::numbers::*;
use super::raw::{syscall0, syscall1};

#[inline(always)]
pub fn yield_now() {
    unsafe {
        syscall0(SYSCALL_SCHED_YIELD);
    }
}

#[inline(always)]
pub fn exit(code: i32) -> ! {
    unsafe {
        syscall1(SYSCALL_EXIT, code as isize as usize);
    }
    loop {
        core::hint::spin_loop();
    }
}
