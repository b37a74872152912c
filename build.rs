//! Bakes build metadata into the binary.
//!
//! `HELLO_SERVER_VERSION`, `HELLO_SERVER_COMMIT` and `HELLO_SERVER_BUILD_DATE`
//! are forwarded from the build environment, trimmed; empty means unset. The
//! compiler version is captured as `HELLO_SERVER_RUSTC_VERSION`.

use std::env;
use std::process::Command;

const FORWARDED: [&str; 3] = [
    "HELLO_SERVER_VERSION",
    "HELLO_SERVER_COMMIT",
    "HELLO_SERVER_BUILD_DATE",
];

fn main() {
    for name in FORWARDED {
        println!("cargo:rerun-if-env-changed={}", name);
        // rustc inherits the build environment, so blank values are
        // re-emitted as empty and resolved to defaults in `config`.
        if let Ok(value) = env::var(name) {
            println!("cargo:rustc-env={}={}", name, value.trim());
        }
    }

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|version| version.trim().to_string())
        .filter(|version| !version.is_empty());

    if let Some(version) = rustc_version {
        println!("cargo:rustc-env=HELLO_SERVER_RUSTC_VERSION={}", version);
    }
}
