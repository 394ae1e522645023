//! Injects commit hash and build time for `termcue --version`.
//!
//! Both values can be pinned through the environment for reproducible
//! builds; otherwise they fall back to "unknown" markers.

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const HASH_VAR: &str = "TERMCUE_BUILD_GIT_HASH";
const TIME_VAR: &str = "TERMCUE_BUILD_TIMESTAMP";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
    println!("cargo:rerun-if-env-changed={HASH_VAR}");
    println!("cargo:rerun-if-env-changed={TIME_VAR}");

    let hash = env::var(HASH_VAR)
        .ok()
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".to_string());
    let timestamp = env::var(TIME_VAR).unwrap_or_else(|_| unix_timestamp());

    println!("cargo:rustc-env={HASH_VAR}={hash}");
    println!("cargo:rustc-env={TIME_VAR}={timestamp}");
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

fn unix_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|delta| format!("unix:{}", delta.as_secs()))
        .unwrap_or_else(|_| "unknown".to_string())
}
