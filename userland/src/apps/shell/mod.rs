//! Interactive shell: prompt, read a line, dispatch it, repeat.

use minishell_lib::{klog_error, klog_trace, klog_warn};

use crate::config::{INPUT_ERROR_LIMIT, PROMPT};
use crate::console;
use crate::syscall::Kernel;

pub(crate) mod banner;
pub mod buffers;
pub mod builtins;
pub mod exec;
pub mod input;
pub mod parser;

use buffers::{MountArgs, PathBuf};
use input::LineBuffer;

pub(crate) static NL: &[u8] = b"\n";
pub(crate) static UNKNOWN_CMD: &[u8] = b"Unknown: ";
pub(crate) static ERR_PATH_TOO_LONG: &[u8] = b"path too long";
pub(crate) static ERR_BAD_PATH: &[u8] = b"invalid path";
pub(crate) static ERR_TOO_MANY_ARGS: &[u8] = b"too many arguments";

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep reading; the command's status.
    Continue(i32),
    /// Leave the loop and terminate with this status.
    Exit(i32),
}

/// Shell state: the kernel handle plus scratch buffers reused by every
/// command.
pub struct Shell<'k> {
    pub(crate) kernel: &'k mut dyn Kernel,
    pub(crate) path: PathBuf,
    pub(crate) mount_args: MountArgs,
    last_status: i32,
}

impl<'k> Shell<'k> {
    pub fn new(kernel: &'k mut dyn Kernel) -> Self {
        Self {
            kernel,
            path: PathBuf::new(),
            mount_args: MountArgs::new(),
            last_status: 0,
        }
    }

    /// Status of the most recent command that did not end the shell.
    #[inline]
    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    /// Dispatch one edited line and remember its status.
    pub fn run_line(&mut self, line: &[u8]) -> Control {
        let control = exec::execute_line(self, line);
        if let Control::Continue(status) = control {
            if status != 0 {
                klog_trace!("shell: status {}", status);
            }
            self.last_status = status;
        }
        control
    }

    #[inline]
    pub fn kernel(&mut self) -> &mut dyn Kernel {
        &mut *self.kernel
    }

    #[inline]
    pub fn print(&mut self, text: &[u8]) {
        console::print(&mut *self.kernel, text);
    }

    #[inline]
    pub fn put_char(&mut self, byte: u8) {
        console::put_char(&mut *self.kernel, byte);
    }
}

/// Run the read-dispatch loop until `exit` or the console fails for good.
///
/// Returns the status `init` should exit with.
pub fn shell_main(k: &mut dyn Kernel) -> i32 {
    let mut sh = Shell::new(k);
    let mut line = LineBuffer::new();
    let mut failures = 0u32;
    let mut need_prompt = true;

    loop {
        if need_prompt {
            line.clear();
            sh.print(PROMPT);
            need_prompt = false;
        }

        if let Err(err) = input::read_line(&mut line, sh.kernel()) {
            failures += 1;
            klog_warn!("shell: console read failed: {}", err);
            if failures >= INPUT_ERROR_LIMIT {
                klog_error!("shell: giving up after {} console errors", failures);
                return 1;
            }
            sh.kernel().sched_yield();
            continue;
        }
        failures = 0;
        need_prompt = true;

        if let Control::Exit(code) = sh.run_line(line.as_bytes()) {
            return code;
        }
    }
}
