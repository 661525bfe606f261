//! Syscall number definitions (kernel-userland ABI).
//!
//! The kernel implements the asm-generic Linux table, the same numbering
//! RISC-V Linux uses. Only the calls the init shell issues are listed.
//! Arguments and results are word sized (`usize`).

// =============================================================================
// Filesystem
// =============================================================================

pub const SYSCALL_GETCWD: usize = 17;
pub const SYSCALL_MKDIRAT: usize = 34;
pub const SYSCALL_MOUNT: usize = 40;
pub const SYSCALL_CHDIR: usize = 49;
pub const SYSCALL_OPENAT: usize = 56;
pub const SYSCALL_CLOSE: usize = 57;
pub const SYSCALL_GETDENTS64: usize = 61;

// =============================================================================
// Console / descriptor I/O
// =============================================================================

pub const SYSCALL_READ: usize = 63;
pub const SYSCALL_WRITE: usize = 64;

// =============================================================================
// Process and system
// =============================================================================

pub const SYSCALL_EXIT: usize = 93;
pub const SYSCALL_SCHED_YIELD: usize = 124;
pub const SYSCALL_UNAME: usize = 160;
