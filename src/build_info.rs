//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner, e.g. `arcade 0.1.0 (2026-10-18, 1a2b3c4)`.
pub fn version_line() -> String {
    format!(
        "arcade {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
