//! Syscall number re-exports from the ABI crate.
//!
//! This module simply re-exports all syscall numbers from
//! `minishell_abi::syscall` to provide a single source of truth for
//! syscall numbers in userland.

pub use minishell_abi::syscall::*;
