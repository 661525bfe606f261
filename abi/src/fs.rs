//! Filesystem ABI types shared between kernel and userland.

use bitflags::bitflags;

/// Directory handle meaning "relative to the current working directory".
pub const AT_FDCWD: i32 = -100;

pub const STDIN: i32 = 0;
pub const STDOUT: i32 = 1;
pub const STDERR: i32 = 2;

/// Permission bits for files created by `touch`.
pub const FILE_MODE_DEFAULT: u32 = 0o644;
/// Permission bits for directories created by `mkdir`.
pub const DIR_MODE_DEFAULT: u32 = 0o755;

bitflags! {
    /// `openat` flags (asm-generic values).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpenFlags: u32 {
        const WRONLY = 0o1;
        const RDWR = 0o2;
        const CREAT = 0o100;
        const TRUNC = 0o1000;
        const APPEND = 0o2000;
        const DIRECTORY = 0o200000;
    }
}

impl OpenFlags {
    /// Read-only access is the absence of both write bits.
    pub const RDONLY: Self = Self::empty();
}

bitflags! {
    /// `mount` flags. The shell always attaches with the empty set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MountFlags: u32 {
        const RDONLY = 1;
        const NOSUID = 2;
        const NODEV = 4;
        const NOEXEC = 8;
    }
}

// =============================================================================
// dirent64
// =============================================================================

/// `d_type` value for a directory.
pub const DT_DIR: u8 = 4;
/// `d_type` value for a regular file.
pub const DT_REG: u8 = 8;
/// `d_type` value when the filesystem does not report a type.
pub const DT_UNKNOWN: u8 = 0;

/// Bytes before the name: `d_ino` (8), `d_off` (8), `d_reclen` (2), `d_type` (1).
pub const DIRENT64_HEADER_LEN: usize = 19;

const RECLEN_OFFSET: usize = 16;
const TYPE_OFFSET: usize = 18;
const DIRENT64_ALIGN: usize = 8;

/// Entry type reported in `d_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Regular,
    Other(u8),
}

impl EntryKind {
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            DT_DIR => EntryKind::Directory,
            DT_REG => EntryKind::Regular,
            other => EntryKind::Other(other),
        }
    }

    pub const fn as_raw(self) -> u8 {
        match self {
            EntryKind::Directory => DT_DIR,
            EntryKind::Regular => DT_REG,
            EntryKind::Other(raw) => raw,
        }
    }

    /// One-character marker used by directory listings.
    pub const fn marker(self) -> u8 {
        match self {
            EntryKind::Directory => b'd',
            EntryKind::Regular => b'-',
            EntryKind::Other(_) => b'?',
        }
    }
}

/// Read-only view of one record inside a getdents64 buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirEntry<'a> {
    pub ino: u64,
    pub off: i64,
    pub reclen: u16,
    pub kind: EntryKind,
    /// Name bytes up to (not including) the terminating NUL.
    pub name: &'a [u8],
}

/// Walks the records of a filled getdents64 buffer.
///
/// Each record is advanced by its own `d_reclen`. A record length that is
/// shorter than the header or runs past the end of the buffer ends the
/// walk, so a corrupt buffer can never loop or read out of bounds.
pub struct DirentIter<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> DirentIter<'a> {
    /// `buf` must be exactly the prefix the kernel reported as filled.
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl<'a> Iterator for DirentIter<'a> {
    type Item = DirEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.buf.get(self.pos..)?;
        if rest.len() < DIRENT64_HEADER_LEN {
            return None;
        }

        let reclen = u16::from_ne_bytes([rest[RECLEN_OFFSET], rest[RECLEN_OFFSET + 1]]);
        let len = reclen as usize;
        if len < DIRENT64_HEADER_LEN || len > rest.len() {
            self.pos = self.buf.len();
            return None;
        }

        let record = &rest[..len];
        let name_field = &record[DIRENT64_HEADER_LEN..];
        let name_len = name_field
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(name_field.len());

        self.pos += len;

        Some(DirEntry {
            ino: u64::from_ne_bytes(word(record, 0)),
            off: i64::from_ne_bytes(word(record, 8)),
            reclen,
            kind: EntryKind::from_raw(record[TYPE_OFFSET]),
            name: &name_field[..name_len],
        })
    }
}

fn word(record: &[u8], at: usize) -> [u8; 8] {
    let mut out = [0u8; 8];
    out.copy_from_slice(&record[at..at + 8]);
    out
}

/// Record length the kernel uses for a name of `name_len` bytes.
pub const fn dirent64_reclen(name_len: usize) -> usize {
    let raw = DIRENT64_HEADER_LEN + name_len + 1;
    (raw + DIRENT64_ALIGN - 1) & !(DIRENT64_ALIGN - 1)
}

/// Write one dirent64 record at the start of `buf`.
///
/// Returns the record length, or `None` when the record does not fit or
/// the name is too long for a 16-bit record length. Padding is zeroed.
pub fn encode_dirent(
    buf: &mut [u8],
    ino: u64,
    off: i64,
    kind: EntryKind,
    name: &[u8],
) -> Option<usize> {
    let len = dirent64_reclen(name.len());
    if len > buf.len() || len > u16::MAX as usize {
        return None;
    }

    let record = &mut buf[..len];
    record.fill(0);
    record[0..8].copy_from_slice(&ino.to_ne_bytes());
    record[8..16].copy_from_slice(&off.to_ne_bytes());
    record[RECLEN_OFFSET..RECLEN_OFFSET + 2].copy_from_slice(&(len as u16).to_ne_bytes());
    record[TYPE_OFFSET] = kind.as_raw();
    record[DIRENT64_HEADER_LEN..DIRENT64_HEADER_LEN + name.len()].copy_from_slice(name);
    Some(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn names(buf: &[u8]) -> Vec<(u8, &[u8])> {
        DirentIter::new(buf).map(|e| (e.kind.marker(), e.name)).collect()
    }

    #[test]
    fn test_reclen_is_aligned() {
        assert_eq!(dirent64_reclen(0), 24);
        assert_eq!(dirent64_reclen(4), 24);
        assert_eq!(dirent64_reclen(5), 32);
        assert_eq!(dirent64_reclen(1) % 8, 0);
    }

    #[test]
    fn test_walks_kernel_buffer() {
        let mut buf = [0u8; 256];
        let mut pos = 0;
        pos += encode_dirent(&mut buf[pos..], 1, 1, EntryKind::Directory, b".").unwrap();
        pos += encode_dirent(&mut buf[pos..], 2, 2, EntryKind::Regular, b"init").unwrap();
        pos += encode_dirent(&mut buf[pos..], 3, 3, EntryKind::Other(2), b"console").unwrap();

        let entries: Vec<DirEntry<'_>> = DirentIter::new(&buf[..pos]).collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].ino, 2);
        assert_eq!(entries[1].off, 2);
        assert_eq!(entries[1].name, b"init");
        assert_eq!(
            names(&buf[..pos]),
            [(b'd', &b"."[..]), (b'-', &b"init"[..]), (b'?', &b"console"[..])]
        );
    }

    #[test]
    fn test_zero_reclen_stops_walk() {
        let mut buf = [0u8; 64];
        let first = encode_dirent(&mut buf, 7, 1, EntryKind::Regular, b"a").unwrap();
        // Second header present but with d_reclen == 0.
        buf[first] = 9;
        let mut iter = DirentIter::new(&buf[..first + DIRENT64_HEADER_LEN]);
        assert_eq!(iter.next().map(|e| e.name), Some(&b"a"[..]));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_overlong_reclen_stops_walk() {
        let mut buf = [0u8; 32];
        let len = encode_dirent(&mut buf, 1, 1, EntryKind::Regular, b"file").unwrap();
        assert!(DirentIter::new(&buf[..len - 1]).next().is_none());
    }

    #[test]
    fn test_encode_rejects_small_buffer() {
        let mut buf = [0u8; 16];
        assert_eq!(encode_dirent(&mut buf, 1, 1, EntryKind::Regular, b"x"), None);
    }

    #[test]
    fn test_entry_kind_markers() {
        assert_eq!(EntryKind::from_raw(DT_DIR).marker(), b'd');
        assert_eq!(EntryKind::from_raw(DT_REG).marker(), b'-');
        assert_eq!(EntryKind::from_raw(DT_UNKNOWN).marker(), b'?');
        assert_eq!(EntryKind::from_raw(10), EntryKind::Other(10));
    }

    #[test]
    fn test_open_flags_values() {
        assert_eq!(OpenFlags::RDONLY.bits(), 0);
        assert_eq!((OpenFlags::CREAT | OpenFlags::WRONLY).bits(), 0o101);
        assert!(MountFlags::empty().is_empty());
    }
}
