//! Startup of the init process: logging, banner, pseudo-filesystems.

use core::fmt::{self, Write};

use minishell_lib::{KlogLevel, klog_debug, klog_init, klog_register_backend, klog_warn};

use crate::apps::shell::banner;
use crate::config::{MOUNT_TABLE, MOUNTING, MountPoint};
use crate::console;
use crate::syscall::{Kernel, MountFlags, SyscallResult, tty};

struct StderrWriter;

impl Write for StderrWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let _ = tty::write_err(s.as_bytes());
        Ok(())
    }
}

fn stderr_backend(level: KlogLevel, args: fmt::Arguments<'_>) {
    let _ = writeln!(StderrWriter, "init: {}: {}", level.label(), args);
}

/// Route log lines to standard error.
pub fn init_logging() {
    klog_init();
    klog_register_backend(stderr_backend);
}

fn mount_one(k: &mut dyn Kernel, mp: &MountPoint) -> SyscallResult<()> {
    k.mount(mp.source, mp.target, mp.fstype, MountFlags::empty())
}

/// Mount every table entry, reporting each on the console.
///
/// Failures are not fatal; returns how many mounts succeeded.
pub fn mount_pseudo_filesystems(k: &mut dyn Kernel) -> usize {
    console::print(k, MOUNTING);
    let mut mounted = 0usize;
    for mp in MOUNT_TABLE {
        let target = mp.target.to_bytes();
        console::print(k, b"  ");
        console::print(k, target);
        match mount_one(k, mp) {
            Ok(()) => {
                console::print(k, b" OK\n");
                mounted += 1;
            }
            Err(err) => {
                console::print(k, b" failed\n");
                klog_warn!("mount {:?} on {:?}: {}", mp.fstype, mp.target, err);
            }
        }
    }
    klog_debug!("bootstrap: {}/{} filesystems mounted", mounted, MOUNT_TABLE.len());
    mounted
}

/// Everything init does before the first prompt.
pub fn run(k: &mut dyn Kernel) {
    banner::print_welcome_banner(k);
    mount_pseudo_filesystems(k);
    banner::print_ready_hint(k);
}
