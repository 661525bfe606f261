//! File system builtin commands: ls, cd, pwd, cat, touch, mkdir, mount.

use minishell_lib::klog_debug;

use crate::config::{CAT_CHUNK, CWD_BUF, DIRENT_BUF};
use crate::console;
use crate::syscall::{
    AT_FDCWD, DIR_MODE_DEFAULT, DirentIter, FILE_MODE_DEFAULT, FdGuard, MountFlags, OpenFlags,
    SyscallError,
};

use super::super::buffers::MountArgError;
use super::super::{Control, NL, Shell};
use super::{fail, no_args, stage_path, syscall_failed};

pub fn cmd_ls(sh: &mut Shell<'_>, args: &[u8]) -> Control {
    let target: &[u8] = if args.is_empty() { b"." } else { args };
    if let Err(done) = stage_path(sh, b"ls", target) {
        return done;
    }

    let fd = match sh
        .kernel
        .openat(AT_FDCWD, sh.path.as_cstr(), OpenFlags::RDONLY, 0)
    {
        Ok(fd) => fd,
        Err(err) => return syscall_failed(sh.kernel(), b"ls", b"error", err),
    };

    let mut dir = FdGuard::from_raw(&mut *sh.kernel, fd);
    let mut buf = [0u8; DIRENT_BUF];
    loop {
        let filled = match dir.getdents64(&mut buf) {
            Ok(0) => break,
            Ok(n) => n.min(buf.len()),
            Err(err) => return syscall_failed(dir.kernel(), b"ls", b"read error", err),
        };

        let k = dir.kernel();
        let mut listed = 0usize;
        for entry in DirentIter::new(&buf[..filled]) {
            console::put_char(k, entry.kind.marker());
            console::put_char(k, b' ');
            console::print(k, entry.name);
            console::print(k, NL);
            listed += 1;
        }
        // A batch with no parsable record would otherwise repeat forever.
        if listed == 0 {
            return syscall_failed(k, b"ls", b"read error", SyscallError::EINVAL);
        }
    }
    Control::Continue(0)
}

pub fn cmd_cd(sh: &mut Shell<'_>, args: &[u8]) -> Control {
    let target: &[u8] = if args.is_empty() { b"/" } else { args };
    if let Err(done) = stage_path(sh, b"cd", target) {
        return done;
    }
    match sh.kernel.chdir(sh.path.as_cstr()) {
        Ok(()) => Control::Continue(0),
        Err(err) => syscall_failed(sh.kernel(), b"cd", b"error", err),
    }
}

pub fn cmd_pwd(sh: &mut Shell<'_>, args: &[u8]) -> Control {
    if let Err(done) = no_args(sh, b"pwd", args) {
        return done;
    }
    let mut buf = [0u8; CWD_BUF];
    match sh.kernel.getcwd(&mut buf) {
        Ok(n) => {
            let raw = &buf[..n.min(buf.len())];
            let len = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
            sh.print(&raw[..len]);
            sh.print(NL);
            Control::Continue(0)
        }
        Err(err) => syscall_failed(sh.kernel(), b"pwd", b"error", err),
    }
}

pub fn cmd_cat(sh: &mut Shell<'_>, args: &[u8]) -> Control {
    if args.is_empty() {
        return fail(sh.kernel(), b"cat", b"need file");
    }
    if let Err(done) = stage_path(sh, b"cat", args) {
        return done;
    }

    let fd = match sh
        .kernel
        .openat(AT_FDCWD, sh.path.as_cstr(), OpenFlags::RDONLY, 0)
    {
        Ok(fd) => fd,
        Err(err) => return syscall_failed(sh.kernel(), b"cat", b"error", err),
    };

    let mut file = FdGuard::from_raw(&mut *sh.kernel, fd);
    let mut chunk = [0u8; CAT_CHUNK];
    loop {
        match file.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                if let Err(err) = console::write_all(file.kernel(), &chunk[..n.min(chunk.len())]) {
                    klog_debug!("cat: write {}", err);
                    return Control::Continue(1);
                }
            }
            Err(err) => return syscall_failed(file.kernel(), b"cat", b"read error", err),
        }
    }
    Control::Continue(0)
}

pub fn cmd_touch(sh: &mut Shell<'_>, args: &[u8]) -> Control {
    if args.is_empty() {
        return fail(sh.kernel(), b"touch", b"need file");
    }
    if let Err(done) = stage_path(sh, b"touch", args) {
        return done;
    }

    let flags = OpenFlags::CREAT | OpenFlags::WRONLY;
    match sh
        .kernel
        .openat(AT_FDCWD, sh.path.as_cstr(), flags, FILE_MODE_DEFAULT)
    {
        Ok(fd) => {
            if let Err(err) = FdGuard::from_raw(&mut *sh.kernel, fd).close() {
                klog_debug!("touch: close: {}", err);
            }
            Control::Continue(0)
        }
        Err(err) => syscall_failed(sh.kernel(), b"touch", b"error", err),
    }
}

pub fn cmd_mkdir(sh: &mut Shell<'_>, args: &[u8]) -> Control {
    if args.is_empty() {
        return fail(sh.kernel(), b"mkdir", b"need dir");
    }
    if let Err(done) = stage_path(sh, b"mkdir", args) {
        return done;
    }
    match sh
        .kernel
        .mkdirat(AT_FDCWD, sh.path.as_cstr(), DIR_MODE_DEFAULT)
    {
        Ok(()) => Control::Continue(0),
        Err(err) => syscall_failed(sh.kernel(), b"mkdir", b"error", err),
    }
}

pub fn cmd_mount(sh: &mut Shell<'_>, args: &[u8]) -> Control {
    match sh.mount_args.parse(args) {
        Ok(()) => {}
        Err(MountArgError::Usage) => return fail(sh.kernel(), b"mount", b"<src> <dst> <type>"),
        Err(MountArgError::TooLong) => {
            return fail(sh.kernel(), b"mount", b"argument too long");
        }
    }

    let m = &sh.mount_args;
    match sh.kernel.mount(
        m.source.as_cstr(),
        m.target.as_cstr(),
        m.fstype.as_cstr(),
        MountFlags::empty(),
    ) {
        Ok(()) => {
            sh.print(b"OK\n");
            Control::Continue(0)
        }
        Err(err) => syscall_failed(sh.kernel(), b"mount", b"error", err),
    }
}
