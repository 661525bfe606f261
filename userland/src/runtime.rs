//! Memory routines behind the `memcpy`/`memmove`/`memset`/`memcmp` symbols
//! that `init` exports.
//!
//! `core` lowers slice copies and fills into calls to those symbols and
//! nothing else provides them: no libc is linked. Every byte goes through a
//! volatile access so the loops cannot be recognised and turned back into
//! calls to the symbols they implement.

use core::ptr::{read_volatile, write_volatile};

/// Copy `n` bytes forward from `src` to `dest`.
///
/// # Safety
/// Both ranges must be valid for `n` bytes and must not overlap.
pub unsafe fn mem_copy(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    let mut i = 0;
    while i < n {
        unsafe { write_volatile(dest.add(i), read_volatile(src.add(i))) };
        i += 1;
    }
    dest
}

/// Copy `n` bytes from `src` to `dest`; the ranges may overlap.
///
/// # Safety
/// Both ranges must be valid for `n` bytes.
pub unsafe fn mem_move(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    if (dest as usize) <= (src as usize) {
        return unsafe { mem_copy(dest, src, n) };
    }
    let mut i = n;
    while i > 0 {
        i -= 1;
        unsafe { write_volatile(dest.add(i), read_volatile(src.add(i))) };
    }
    dest
}

/// Fill `n` bytes at `dest` with the low byte of `c`.
///
/// # Safety
/// `dest` must be valid for `n` bytes.
pub unsafe fn mem_set(dest: *mut u8, c: i32, n: usize) -> *mut u8 {
    let byte = c as u8;
    let mut i = 0;
    while i < n {
        unsafe { write_volatile(dest.add(i), byte) };
        i += 1;
    }
    dest
}

/// Compare `n` bytes; the sign of the first differing pair decides.
///
/// # Safety
/// Both ranges must be valid for `n` bytes.
pub unsafe fn mem_compare(a: *const u8, b: *const u8, n: usize) -> i32 {
    let mut i = 0;
    while i < n {
        let (x, y) = unsafe { (read_volatile(a.add(i)), read_volatile(b.add(i))) };
        if x != y {
            return x as i32 - y as i32;
        }
        i += 1;
    }
    0
}
