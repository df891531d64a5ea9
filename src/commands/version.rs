use std::env::consts::{ARCH, OS};

pub fn execute() {
    println!(
        "check-postqueue version {} [{} {}]",
        env!("CARGO_PKG_VERSION"),
        OS,
        ARCH
    );
}
