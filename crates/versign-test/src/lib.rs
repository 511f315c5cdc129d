//! versign-test - Regression test helpers for versign
//!
//! Provides [`RegParams`], a regression runner with three modes:
//!
//! - **Generate**: write golden files
//! - **Compare**: compare results with golden files
//! - **Display**: run without comparing
//!
//! and [`synthetic`], deterministic signature-like fixtures.
//!
//! # Usage
//!
//! ```ignore
//! use versign_test::RegParams;
//!
//! let mut rp = RegParams::new("quadrant");
//! rp.compare_values(64.0, features.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "generate", "compare" or "display"

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Workspace root, two levels above this crate
fn workspace_root() -> String {
    format!("{}/../..", env!("CARGO_MANIFEST_DIR"))
}

/// Directory holding golden files
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Directory receiving regression output
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
