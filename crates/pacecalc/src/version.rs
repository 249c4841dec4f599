//! Version information.

/// Crate version.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version string shown by `--version`: the crate version plus the
/// minimum supported Rust release.
#[must_use]
pub fn full_version() -> String {
    format!("{} (rust {})", version(), env!("CARGO_PKG_RUST_VERSION"))
}
