use std::io::{self, Write};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "   \x1b[1mrxnreg\x1b[0m  Reaction registry bookkeeping              v{VERSION}"
    );
    let _ = writeln!(
        stderr,
        "   \x1b[2m───────────────────────────────────────────────────────────\x1b[0m"
    );
    let _ = writeln!(stderr);
}
