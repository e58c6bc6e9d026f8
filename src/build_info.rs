//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner, e.g. `icefish 0.1.0 (2026-10-19, 1a2b3c4)`.
pub fn version_line() -> String {
    format!("icefish {} ({}, {})", PKG_VERSION, BUILD_DATE, BUILD_COMMIT)
}
