#![no_std]
#![no_main]

use minishell_lib::klog_error;
use minishell_userland::apps::shell::shell_main;
use minishell_userland::syscall::{Gateway, Kernel};
use minishell_userland::{bootstrap, runtime};

const PANIC_STATUS: i32 = 101;

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    klog_error!("panic: {}", info);
    Gateway.exit(PANIC_STATUS)
}

#[unsafe(no_mangle)]
pub extern "C" fn _start() -> ! {
    bootstrap::init_logging();

    let mut gateway = Gateway;
    bootstrap::run(&mut gateway);
    let status = shell_main(&mut gateway);
    gateway.exit(status)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcpy(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    unsafe { runtime::mem_copy(dest, src, n) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn memmove(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    unsafe { runtime::mem_move(dest, src, n) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn memset(dest: *mut u8, c: i32, n: usize) -> *mut u8 {
    unsafe { runtime::mem_set(dest, c, n) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcmp(a: *const u8, b: *const u8, n: usize) -> i32 {
    unsafe { runtime::mem_compare(a, b, n) }
}
