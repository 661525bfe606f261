#![no_std]

#[cfg(test)]
extern crate std;

pub mod klog;
pub mod string;

pub use klog::{
    KlogBackend, KlogLevel, klog_get_level, klog_init, klog_is_enabled, klog_register_backend,
    klog_set_level,
};
pub use string::{
    CStrBuf, CStrBufError, bytes_as_str, is_space, parse_i32, split_word, trim, trim_end, trim_start,
};
