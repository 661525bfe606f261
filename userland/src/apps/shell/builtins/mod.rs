//! Builtin command dispatch table and helpers.

pub mod fs;
pub mod system;

use minishell_lib::{CStrBufError, bytes_as_str, klog_debug};

use crate::console;
use crate::syscall::{Kernel, SyscallError};

use super::{Control, ERR_BAD_PATH, ERR_PATH_TOO_LONG, ERR_TOO_MANY_ARGS, NL, Shell};

/// A builtin gets the shell and the trimmed text after its verb, or the
/// untrimmed tail when its entry sets `literal_args`.
pub type BuiltinFn = fn(sh: &mut Shell<'_>, args: &[u8]) -> Control;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinCategory {
    System,
    Filesystem,
}

impl BuiltinCategory {
    pub const ALL: &[BuiltinCategory] = &[BuiltinCategory::System, BuiltinCategory::Filesystem];

    pub fn label(self) -> &'static [u8] {
        match self {
            BuiltinCategory::System => b"System",
            BuiltinCategory::Filesystem => b"Filesystem",
        }
    }
}

pub struct BuiltinEntry {
    pub name: &'static [u8],
    pub aliases: &'static [&'static [u8]],
    pub desc: &'static [u8],
    pub usage: &'static [u8],
    pub detail: &'static [u8],
    pub category: BuiltinCategory,
    /// Keep leading whitespace of the arguments.
    pub literal_args: bool,
    pub func: BuiltinFn,
}

impl BuiltinEntry {
    pub fn matches(&self, verb: &[u8]) -> bool {
        self.name == verb || self.aliases.iter().any(|alias| *alias == verb)
    }
}

use BuiltinCategory::*;

pub static BUILTINS: &[BuiltinEntry] = &[
    // ── System ──────────────────────────────────────────────────────────────
    BuiltinEntry {
        name: b"help",
        aliases: &[b"?"],
        desc: b"Show this help",
        usage: b"help [command]",
        detail: b"List the shell builtins by category.\nProvide a command name to see its usage.",
        category: System,
        literal_args: false,
        func: system::cmd_help,
    },
    BuiltinEntry {
        name: b"echo",
        aliases: &[],
        desc: b"Print text to the console",
        usage: b"echo [text]",
        detail: b"Write the text after the command, followed by a\nnewline.",
        category: System,
        literal_args: true,
        func: system::cmd_echo,
    },
    BuiltinEntry {
        name: b"uname",
        aliases: &[],
        desc: b"Show kernel name and version",
        usage: b"uname",
        detail: b"Print the kernel name, release, and machine\nhardware name.",
        category: System,
        literal_args: false,
        func: system::cmd_uname,
    },
    BuiltinEntry {
        name: b"exit",
        aliases: &[],
        desc: b"Leave the shell",
        usage: b"exit [code]",
        detail: b"Terminate init with the given status (default 0).\nOn most kernels this halts or panics the system.",
        category: System,
        literal_args: false,
        func: system::cmd_exit,
    },
    // ── Filesystem ──────────────────────────────────────────────────────────
    BuiltinEntry {
        name: b"ls",
        aliases: &[],
        desc: b"List directory contents",
        usage: b"ls [dir]",
        detail: b"List the entries of dir, one per line. Directories\nare marked d, regular files -, anything else ?.\nDefaults to the current directory.",
        category: Filesystem,
        literal_args: false,
        func: fs::cmd_ls,
    },
    BuiltinEntry {
        name: b"cd",
        aliases: &[],
        desc: b"Change working directory",
        usage: b"cd [dir]",
        detail: b"Change the current working directory to dir.\nWithout arguments, returns to /.",
        category: Filesystem,
        literal_args: false,
        func: fs::cmd_cd,
    },
    BuiltinEntry {
        name: b"pwd",
        aliases: &[],
        desc: b"Print working directory",
        usage: b"pwd",
        detail: b"Print the absolute path of the current working\ndirectory.",
        category: Filesystem,
        literal_args: false,
        func: fs::cmd_pwd,
    },
    BuiltinEntry {
        name: b"cat",
        aliases: &[],
        desc: b"Display file contents",
        usage: b"cat <file>",
        detail: b"Copy the contents of file to the console.",
        category: Filesystem,
        literal_args: false,
        func: fs::cmd_cat,
    },
    BuiltinEntry {
        name: b"touch",
        aliases: &[],
        desc: b"Create empty file",
        usage: b"touch <file>",
        detail: b"Create an empty file. An existing file is left\nunchanged.",
        category: Filesystem,
        literal_args: false,
        func: fs::cmd_touch,
    },
    BuiltinEntry {
        name: b"mkdir",
        aliases: &[],
        desc: b"Create a directory",
        usage: b"mkdir <dir>",
        detail: b"Create a new directory at the given path.",
        category: Filesystem,
        literal_args: false,
        func: fs::cmd_mkdir,
    },
    BuiltinEntry {
        name: b"mount",
        aliases: &[],
        desc: b"Mount a filesystem",
        usage: b"mount <src> <dst> <type>",
        detail: b"Attach a filesystem of the given type from src at\ndst, e.g. mount none /tmp tmpfs.",
        category: Filesystem,
        literal_args: false,
        func: fs::cmd_mount,
    },
];

/// Exact, case-sensitive lookup by name or alias.
pub fn find_builtin(verb: &[u8]) -> Option<&'static BuiltinEntry> {
    BUILTINS.iter().find(|entry| entry.matches(verb))
}

/// Print `<verb>: <msg>` and report failure.
pub(crate) fn fail(k: &mut dyn Kernel, verb: &[u8], msg: &[u8]) -> Control {
    console::print(k, verb);
    console::print(k, b": ");
    console::print(k, msg);
    console::print(k, NL);
    Control::Continue(1)
}

/// Like [`fail`], for a syscall that returned an error.
pub(crate) fn syscall_failed(
    k: &mut dyn Kernel,
    verb: &[u8],
    msg: &[u8],
    err: SyscallError,
) -> Control {
    klog_debug!("{}: {}", bytes_as_str(verb), err);
    fail(k, verb, msg)
}

/// Copy `path` into the shell's path buffer.
pub(crate) fn stage_path(sh: &mut Shell<'_>, verb: &[u8], path: &[u8]) -> Result<(), Control> {
    match sh.path.set(path) {
        Ok(()) => Ok(()),
        Err(CStrBufError::TooLong) => Err(fail(sh.kernel(), verb, ERR_PATH_TOO_LONG)),
        Err(CStrBufError::InteriorNul) => Err(fail(sh.kernel(), verb, ERR_BAD_PATH)),
    }
}

/// Reject arguments for commands that take none.
pub(crate) fn no_args(sh: &mut Shell<'_>, verb: &[u8], args: &[u8]) -> Result<(), Control> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(fail(sh.kernel(), verb, ERR_TOO_MANY_ARGS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        assert!(find_builtin(b"ls").is_some());
        assert!(find_builtin(b"l").is_none());
        assert!(find_builtin(b"Ls").is_none());
        assert!(find_builtin(b"").is_none());
        assert_eq!(find_builtin(b"?").map(|e| e.name), Some(&b"help"[..]));
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in BUILTINS.iter().enumerate() {
            for b in &BUILTINS[i + 1..] {
                assert!(!b.matches(a.name), "duplicate {:?}", bytes_as_str(a.name));
                for alias in a.aliases {
                    assert!(!b.matches(alias));
                }
            }
        }
    }

    #[test]
    fn test_only_echo_takes_literal_args() {
        for entry in BUILTINS {
            assert_eq!(entry.literal_args, entry.name == b"echo");
        }
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in BuiltinCategory::ALL {
            assert!(BUILTINS.iter().any(|e| e.category == *category));
        }
    }
}
