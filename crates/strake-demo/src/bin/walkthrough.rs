//! Entry point: run the walkthrough against stdout.
//!
//! Takes no arguments and no configuration; exits with default success
//! once the transcript is written.

use std::io;

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    strake_demo::write_walkthrough(&mut out)
}
