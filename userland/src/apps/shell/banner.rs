use crate::config::{BANNER, READY};
use crate::console;
use crate::syscall::Kernel;

pub fn print_welcome_banner(k: &mut dyn Kernel) {
    console::print(k, BANNER);
}

pub fn print_ready_hint(k: &mut dyn Kernel) {
    console::print(k, READY);
}
