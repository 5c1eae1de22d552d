//! # Custattr CLI
//!
//! Thin binary over the `custattr` library: this file only invokes `cli::run()`
//! and handles process termination. Argument parsing lives in `cli/setup.rs`,
//! dispatch and I/O in `cli/commands.rs`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
