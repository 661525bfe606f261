//! Unified syscall module for minishell userland.
//!
//! This module provides a layered API for issuing system calls:
//!
//! - **Layer 1** (`raw`): Inline assembly primitives
//! - **Layer 2** (`error`): Error demultiplexing and `SyscallResult` type
//! - **Layer 3** (domain modules): Syscall wrappers organized by function
//! - **Layer 4** (`kernel`): The `Kernel` trait the shell is written against
//! - **Layer 5** (`wrappers`): RAII wrappers for resources
//!
//! # Module Organization
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `raw` | Low-level `ecall` primitives, 0 to 5 arguments |
//! | `error` | `SyscallError`, `SyscallResult`, `demux()` |
//! | `numbers` | Re-exports syscall numbers from `minishell_abi` |
//! | `core` | Yield, exit |
//! | `tty` | Diagnostics on the standard error descriptor |
//! | `fs` | Descriptor, directory, and working-directory operations |
//! | `system` | mount, uname |
//! | `kernel` | `Kernel` trait and the trapping `Gateway` |
//! | `wrappers` | RAII types (FdGuard) |

pub mod core;
pub mod error;
pub mod fs;
pub mod kernel;
pub mod numbers;
pub mod raw;
pub mod system;
pub mod tty;
pub mod wrappers;

#[cfg(test)]
pub(crate) mod fake;

// Re-export commonly used items at the module root
pub use error::{SyscallError, SyscallResult};
pub use kernel::{Gateway, Kernel};
pub use numbers::*;

pub use minishell_abi::{
    AT_FDCWD, DIR_MODE_DEFAULT, DirEntry, DirentIter, EntryKind, FILE_MODE_DEFAULT, MountFlags,
    OpenFlags, STDERR, STDIN, STDOUT, UtsField, UtsName,
};

pub use wrappers::fd::FdGuard;

pub type RawFd = i32;
