//! Compile-time build metadata for `--version` output.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("TERMCUE_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("TERMCUE_BUILD_TIMESTAMP");

/// Version block shown by `termcue --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("TERMCUE_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("TERMCUE_BUILD_TIMESTAMP")
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_version_includes_all_fields() {
        assert!(LONG_VERSION.starts_with(VERSION));
        assert!(LONG_VERSION.contains(GIT_COMMIT));
        assert!(LONG_VERSION.contains(BUILD_TIMESTAMP));
    }
}
