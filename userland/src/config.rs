//! Compile-time configuration of the init shell.
//!
//! The shell has no runtime configuration: no environment, no arguments,
//! no config files. Everything tunable lives here.

use core::ffi::CStr;

pub const PROMPT: &[u8] = b"# ";

pub const BANNER: &[u8] = b"\n================================\n OtoRISCV Mini Shell\n================================\n\n";
pub const MOUNTING: &[u8] = b"Mounting filesystems...\n";
pub const READY: &[u8] = b"\nType 'help' for commands.\n\n";

/// One entry of the boot-time mount table.
#[derive(Debug, Clone, Copy)]
pub struct MountPoint {
    pub source: &'static CStr,
    pub target: &'static CStr,
    pub fstype: &'static CStr,
}

pub const MOUNT_TABLE: &[MountPoint] = &[
    MountPoint {
        source: c"none",
        target: c"/proc",
        fstype: c"proc",
    },
    MountPoint {
        source: c"none",
        target: c"/dev",
        fstype: c"devtmpfs",
    },
    MountPoint {
        source: c"none",
        target: c"/sys",
        fstype: c"sysfs",
    },
];

/// Line buffer size including the terminating NUL.
pub const LINE_CAPACITY: usize = 128;
/// Longest line the editor accepts; the last slot is kept for the NUL.
pub const LINE_MAX: usize = LINE_CAPACITY - 2;

pub const PATH_BUF: usize = 128;
pub const CWD_BUF: usize = 128;
pub const DIRENT_BUF: usize = 256;
pub const CAT_CHUNK: usize = 128;

pub const MOUNT_SOURCE_BUF: usize = 32;
pub const MOUNT_TARGET_BUF: usize = 32;
pub const MOUNT_FSTYPE_BUF: usize = 16;

/// Consecutive console read failures tolerated before the shell gives up.
pub const INPUT_ERROR_LIMIT: u32 = 64;

const _: () = assert!(LINE_MAX < LINE_CAPACITY);
