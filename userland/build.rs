use std::env;

fn main() {
    // `init` brings its own `_start` and memory routines. On hosted Linux
    // targets keep every C runtime object and library out of the link.
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "linux" {
        println!("cargo:rustc-link-arg-bin=init=-nostdlib");
        println!("cargo:rustc-link-arg-bin=init=-static");
        println!("cargo:rustc-link-arg-bin=init=-no-pie");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
