//! In-memory kernel used by unit tests.
//!
//! Holds a small directory tree, a scripted console input queue, captured
//! stdout/stderr, and a log of every call so tests can assert which
//! syscalls a command issued.

use core::ffi::CStr;
use std::borrow::ToOwned;
use std::collections::{BTreeMap, VecDeque};
use std::string::String;
use std::vec::Vec;

use minishell_abi::{
    AT_FDCWD, EntryKind, MountFlags, OpenFlags, STDERR, STDIN, STDOUT, UtsField, UtsName,
    encode_dirent,
};

use super::RawFd;
use super::error::{SyscallError, SyscallResult};
use super::kernel::Kernel;

/// One scripted result for a console read.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Input {
    Byte(u8),
    /// Read returns 0 bytes: nothing typed yet.
    Empty,
    Fail(SyscallError),
}

enum Node {
    Dir,
    File(Vec<u8>),
}

struct OpenFile {
    path: String,
    pos: usize,
}

pub(crate) struct FakeKernel {
    pub input: VecDeque<Input>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub calls: Vec<&'static str>,
    pub mounts: Vec<(String, String, String)>,
    /// Filesystem types whose mount fails with ENODEV.
    pub unsupported_fs: Vec<&'static str>,
    pub uts: UtsName,
    pub uname_error: Option<SyscallError>,
    /// Error returned by getdents64 after the first successful batch.
    pub getdents_error: Option<SyscallError>,
    /// Error returned by reads from regular files.
    pub file_read_error: Option<SyscallError>,
    /// Most bytes a single stdout write accepts.
    pub stdout_write_limit: Option<usize>,
    pub stdout_write_error: Option<SyscallError>,
    nodes: BTreeMap<String, Node>,
    cwd: String,
    fds: BTreeMap<RawFd, OpenFile>,
    next_fd: RawFd,
}

impl FakeKernel {
    pub fn new() -> Self {
        let mut uts = UtsName::new();
        uts.set_field(UtsField::SysName, b"Linux");
        uts.set_field(UtsField::NodeName, b"otoriscv");
        uts.set_field(UtsField::Release, b"6.1.0");
        uts.set_field(UtsField::Version, b"#1 SMP");
        uts.set_field(UtsField::Machine, b"riscv32");
        uts.set_field(UtsField::DomainName, b"(none)");

        let mut nodes = BTreeMap::new();
        nodes.insert("/".to_owned(), Node::Dir);

        Self {
            input: VecDeque::new(),
            stdout: Vec::new(),
            stderr: Vec::new(),
            calls: Vec::new(),
            mounts: Vec::new(),
            unsupported_fs: Vec::new(),
            uts,
            uname_error: None,
            getdents_error: None,
            file_read_error: None,
            stdout_write_limit: None,
            stdout_write_error: None,
            nodes,
            cwd: "/".to_owned(),
            fds: BTreeMap::new(),
            next_fd: 3,
        }
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.nodes.insert(path.to_owned(), Node::Dir);
        self
    }

    pub fn with_file(mut self, path: &str, contents: &[u8]) -> Self {
        self.nodes.insert(path.to_owned(), Node::File(contents.to_vec()));
        self
    }

    pub fn with_input(mut self, bytes: &[u8]) -> Self {
        self.push_input(bytes);
        self
    }

    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().map(|&b| Input::Byte(b)));
    }

    pub fn stdout_str(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn take_stdout(&mut self) -> String {
        let out = self.stdout_str();
        self.stdout.clear();
        out
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    pub fn open_fds(&self) -> usize {
        self.fds.len()
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn is_dir(&self, path: &str) -> bool {
        matches!(self.nodes.get(path), Some(Node::Dir))
    }

    pub fn file(&self, path: &str) -> Option<&[u8]> {
        match self.nodes.get(path) {
            Some(Node::File(data)) => Some(data),
            _ => None,
        }
    }

    fn resolve(&self, path: &CStr) -> String {
        let raw = path.to_str().unwrap_or("");
        let mut parts: Vec<&str> = Vec::new();
        let joined;
        let full = if raw.starts_with('/') {
            raw
        } else {
            joined = std::format!("{}/{}", self.cwd, raw);
            joined.as_str()
        };
        for part in full.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                name => parts.push(name),
            }
        }
        if parts.is_empty() {
            "/".to_owned()
        } else {
            std::format!("/{}", parts.join("/"))
        }
    }

    fn parent(path: &str) -> String {
        match path.rfind('/') {
            Some(0) | None => "/".to_owned(),
            Some(idx) => path[..idx].to_owned(),
        }
    }

    fn listing(&self, dir: &str) -> Vec<(Vec<u8>, EntryKind)> {
        let mut out = std::vec![
            (b".".to_vec(), EntryKind::Directory),
            (b"..".to_vec(), EntryKind::Directory),
        ];
        for (path, node) in &self.nodes {
            if path == "/" || Self::parent(path) != dir {
                continue;
            }
            let name = path.rsplit('/').next().unwrap_or("");
            let kind = match node {
                Node::Dir => EntryKind::Directory,
                Node::File(_) => EntryKind::Regular,
            };
            out.push((name.as_bytes().to_vec(), kind));
        }
        out
    }

    fn allocate_fd(&mut self, path: String) -> RawFd {
        let fd = self.next_fd;
        self.next_fd += 1;
        self.fds.insert(fd, OpenFile { path, pos: 0 });
        fd
    }
}

impl Kernel for FakeKernel {
    fn read(&mut self, fd: RawFd, buf: &mut [u8]) -> SyscallResult<usize> {
        self.calls.push("read");
        if fd == STDIN {
            return match self.input.pop_front() {
                Some(Input::Byte(b)) if !buf.is_empty() => {
                    buf[0] = b;
                    Ok(1)
                }
                Some(Input::Byte(_)) | Some(Input::Empty) => Ok(0),
                Some(Input::Fail(err)) => Err(err),
                None => Err(SyscallError::EIO),
            };
        }

        let file_read_error = self.file_read_error;
        let open = self.fds.get_mut(&fd).ok_or(SyscallError::EBADF)?;
        let data = match self.nodes.get(&open.path) {
            Some(Node::File(data)) => data,
            Some(Node::Dir) => return Err(SyscallError::EISDIR),
            None => return Err(SyscallError::EBADF),
        };
        if let Some(err) = file_read_error {
            return Err(err);
        }
        let remaining = &data[open.pos.min(data.len())..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        open.pos += n;
        Ok(n)
    }

    fn write(&mut self, fd: RawFd, buf: &[u8]) -> SyscallResult<usize> {
        self.calls.push("write");
        match fd {
            STDOUT => {
                if let Some(err) = self.stdout_write_error {
                    return Err(err);
                }
                let n = self.stdout_write_limit.map_or(buf.len(), |limit| limit.min(buf.len()));
                self.stdout.extend_from_slice(&buf[..n]);
                return Ok(n);
            }
            STDERR => self.stderr.extend_from_slice(buf),
            _ => {
                let open = self.fds.get(&fd).ok_or(SyscallError::EBADF)?;
                match self.nodes.get_mut(&open.path) {
                    Some(Node::File(data)) => data.extend_from_slice(buf),
                    _ => return Err(SyscallError::EBADF),
                }
            }
        }
        Ok(buf.len())
    }

    fn openat(
        &mut self,
        dirfd: RawFd,
        path: &CStr,
        flags: OpenFlags,
        _mode: u32,
    ) -> SyscallResult<RawFd> {
        self.calls.push("openat");
        if dirfd != AT_FDCWD {
            return Err(SyscallError::EBADF);
        }
        let full = self.resolve(path);
        let writable = flags.intersects(OpenFlags::WRONLY | OpenFlags::RDWR);
        match self.nodes.get(&full) {
            Some(Node::Dir) if writable => Err(SyscallError::EISDIR),
            Some(Node::File(_)) if flags.contains(OpenFlags::DIRECTORY) => {
                Err(SyscallError::ENOTDIR)
            }
            Some(_) => Ok(self.allocate_fd(full)),
            None if flags.contains(OpenFlags::CREAT) => {
                if !self.is_dir(&Self::parent(&full)) {
                    return Err(SyscallError::ENOENT);
                }
                self.nodes.insert(full.clone(), Node::File(Vec::new()));
                Ok(self.allocate_fd(full))
            }
            None => Err(SyscallError::ENOENT),
        }
    }

    fn close(&mut self, fd: RawFd) -> SyscallResult<()> {
        self.calls.push("close");
        self.fds.remove(&fd).map(|_| ()).ok_or(SyscallError::EBADF)
    }

    fn getdents64(&mut self, fd: RawFd, buf: &mut [u8]) -> SyscallResult<usize> {
        self.calls.push("getdents64");
        let open = self.fds.get(&fd).ok_or(SyscallError::EBADF)?;
        if !self.is_dir(&open.path) {
            return Err(SyscallError::ENOTDIR);
        }
        if open.pos > 0 {
            if let Some(err) = self.getdents_error {
                return Err(err);
            }
        }

        let entries = self.listing(&open.path);
        let mut index = open.pos;
        let mut filled = 0usize;
        while let Some((name, kind)) = entries.get(index) {
            let ino = index as u64 + 1;
            match encode_dirent(&mut buf[filled..], ino, ino as i64, *kind, name) {
                Some(len) => {
                    filled += len;
                    index += 1;
                }
                None => break,
            }
        }
        if filled == 0 && index < entries.len() {
            return Err(SyscallError::EINVAL);
        }
        if let Some(open) = self.fds.get_mut(&fd) {
            open.pos = index;
        }
        Ok(filled)
    }

    fn getcwd(&mut self, buf: &mut [u8]) -> SyscallResult<usize> {
        self.calls.push("getcwd");
        let bytes = self.cwd.as_bytes();
        if bytes.len() + 1 > buf.len() {
            return Err(SyscallError::ERANGE);
        }
        buf[..bytes.len()].copy_from_slice(bytes);
        buf[bytes.len()] = 0;
        Ok(bytes.len() + 1)
    }

    fn chdir(&mut self, path: &CStr) -> SyscallResult<()> {
        self.calls.push("chdir");
        let full = self.resolve(path);
        match self.nodes.get(&full) {
            Some(Node::Dir) => {
                self.cwd = full;
                Ok(())
            }
            Some(Node::File(_)) => Err(SyscallError::ENOTDIR),
            None => Err(SyscallError::ENOENT),
        }
    }

    fn mkdirat(&mut self, dirfd: RawFd, path: &CStr, _mode: u32) -> SyscallResult<()> {
        self.calls.push("mkdirat");
        if dirfd != AT_FDCWD {
            return Err(SyscallError::EBADF);
        }
        let full = self.resolve(path);
        if self.nodes.contains_key(&full) {
            return Err(SyscallError::EEXIST);
        }
        if !self.is_dir(&Self::parent(&full)) {
            return Err(SyscallError::ENOENT);
        }
        self.nodes.insert(full, Node::Dir);
        Ok(())
    }

    fn mount(
        &mut self,
        source: &CStr,
        target: &CStr,
        fstype: &CStr,
        _flags: MountFlags,
    ) -> SyscallResult<()> {
        self.calls.push("mount");
        let fstype = fstype.to_str().unwrap_or("");
        if self.unsupported_fs.contains(&fstype) {
            return Err(SyscallError::ENODEV);
        }
        let full = self.resolve(target);
        if !self.is_dir(&full) {
            return Err(SyscallError::ENOENT);
        }
        let source = source.to_str().unwrap_or("").to_owned();
        self.mounts.push((source, full, fstype.to_owned()));
        Ok(())
    }

    fn uname(&mut self, out: &mut UtsName) -> SyscallResult<()> {
        self.calls.push("uname");
        if let Some(err) = self.uname_error {
            return Err(err);
        }
        *out = self.uts;
        Ok(())
    }

    fn sched_yield(&mut self) {
        self.calls.push("sched_yield");
    }

    fn exit(&mut self, code: i32) -> ! {
        panic!("exit({code}) called on FakeKernel");
    }
}
