#![no_std]

#[cfg(test)]
extern crate std;

pub mod apps;
pub mod bootstrap;
pub mod config;
pub mod console;
pub mod runtime;
pub mod syscall;
