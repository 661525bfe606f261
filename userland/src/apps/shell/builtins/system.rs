//! System builtin commands: help, echo, uname, exit.

use minishell_lib::{parse_i32, split_word};

use crate::syscall::{UtsField, UtsName};

use super::super::{Control, NL, Shell};
use super::{BUILTINS, BuiltinCategory, BuiltinEntry, fail, find_builtin, no_args, syscall_failed};

static HELP_HEADER: &[u8] = b"Commands:\n";
const USAGE_COLUMN: usize = 26;

fn print_entry_line(sh: &mut Shell<'_>, entry: &BuiltinEntry) {
    sh.print(b"  ");
    sh.print(entry.usage);
    for _ in entry.usage.len()..USAGE_COLUMN {
        sh.put_char(b' ');
    }
    sh.print(entry.desc);
    sh.print(NL);
}

fn print_entry_detail(sh: &mut Shell<'_>, entry: &BuiltinEntry) {
    sh.print(b"usage: ");
    sh.print(entry.usage);
    sh.print(NL);
    if !entry.aliases.is_empty() {
        sh.print(b"aliases:");
        for alias in entry.aliases {
            sh.put_char(b' ');
            sh.print(alias);
        }
        sh.print(NL);
    }
    sh.print(entry.detail);
    sh.print(NL);
}

pub fn cmd_help(sh: &mut Shell<'_>, args: &[u8]) -> Control {
    let (name, _) = split_word(args);
    if !name.is_empty() {
        return match find_builtin(name) {
            Some(entry) => {
                print_entry_detail(sh, entry);
                Control::Continue(0)
            }
            None => {
                sh.print(b"help: no such command: ");
                sh.print(name);
                sh.print(NL);
                Control::Continue(1)
            }
        };
    }

    sh.print(HELP_HEADER);
    for &category in BuiltinCategory::ALL {
        sh.print(NL);
        sh.print(category.label());
        sh.print(b":\n");
        for entry in BUILTINS.iter().filter(|e| e.category == category) {
            print_entry_line(sh, entry);
        }
    }
    Control::Continue(0)
}

pub fn cmd_echo(sh: &mut Shell<'_>, args: &[u8]) -> Control {
    sh.print(args);
    sh.print(NL);
    Control::Continue(0)
}

pub fn cmd_uname(sh: &mut Shell<'_>, args: &[u8]) -> Control {
    if let Err(done) = no_args(sh, b"uname", args) {
        return done;
    }
    let mut uts = UtsName::new();
    if let Err(err) = sh.kernel.uname(&mut uts) {
        return syscall_failed(sh.kernel(), b"uname", b"error", err);
    }
    sh.print(uts.field(UtsField::SysName));
    sh.put_char(b' ');
    sh.print(uts.field(UtsField::Release));
    sh.put_char(b' ');
    sh.print(uts.field(UtsField::Machine));
    sh.print(NL);
    Control::Continue(0)
}

pub fn cmd_exit(sh: &mut Shell<'_>, args: &[u8]) -> Control {
    if args.is_empty() {
        return Control::Exit(0);
    }
    match parse_i32(args) {
        Some(code) => Control::Exit(code),
        None => fail(sh.kernel(), b"exit", b"numeric argument required"),
    }
}
