//! Minishell kernel-userland ABI types.
//!
//! Everything the init shell exchanges with the kernel lives here: syscall
//! numbers, descriptor and flag constants, and the two fixed-layout records
//! the kernel fills in (`dirent64` and `utsname`). Userland and any test
//! double that stands in for the kernel both import from this crate, so the
//! wire formats have a single definition.
//!
//! All record types are `#[repr(C)]` or parsed from raw bytes; nothing here
//! needs `unsafe`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod fs;
pub mod syscall;
pub mod utsname;

pub use fs::*;
pub use syscall::*;
pub use utsname::{UTS_FIELD_LEN, UtsField, UtsName};
