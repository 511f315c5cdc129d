//! Regression test bookkeeping

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use std::fs;
use std::path::Path;
use versign_core::Pix;
use versign_io::ImageFormat;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Write golden files
    Generate,
    /// Compare against golden files (default)
    #[default]
    Compare,
    /// Run without comparing files
    Display,
}

impl RegTestMode {
    /// Read the mode from `REGTEST_MODE`.
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// State of one regression test run.
///
/// Every check bumps an index; failures are recorded rather than
/// panicking so a test reports all mismatches before [`cleanup`]
/// returns the verdict.
///
/// [`cleanup`]: RegParams::cleanup
pub struct RegParams {
    /// Name of the test (e.g., "quadrant")
    pub test_name: String,
    index: usize,
    /// Generate, compare or display
    pub mode: RegTestMode,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a regression test named `test_name`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("=== {}_reg ({:?}) ===", test_name, mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Index of the last check
    pub fn index(&self) -> usize {
        self.index
    }

    /// True when golden files are neither written nor compared
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
    }

    /// Check that `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        // NaN never compares, so test the negation
        if !(diff <= delta) {
            self.fail(format!(
                "Failure in {}_reg, index {}: expected {}, actual {}, diff {} > delta {}",
                self.test_name, self.index, expected, actual, diff, delta
            ));
            return false;
        }
        true
    }

    /// Check that two images have the same size and samples.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if !pix1.sizes_equal(pix2) {
            self.fail(format!(
                "Failure in {}_reg, index {}: size {}x{} vs {}x{}",
                self.test_name,
                self.index,
                pix1.width(),
                pix1.height(),
                pix2.width(),
                pix2.height()
            ));
            return false;
        }

        if let Some(i) = first_mismatch(pix1.data(), pix2.data()) {
            let w = pix1.width() as usize;
            self.fail(format!(
                "Failure in {}_reg, index {}: sample mismatch at ({}, {})",
                self.test_name,
                self.index,
                i % w,
                i / w
            ));
            return false;
        }

        true
    }

    /// Check that two byte strings are identical.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;
        if data1 != data2 {
            let at = first_mismatch(data1, data2).unwrap_or(data1.len().min(data2.len()));
            self.fail(format!(
                "Failure in {}_reg, index {}: strings differ at byte {} (sizes {} vs {})",
                self.test_name,
                self.index,
                at,
                data1.len(),
                data2.len()
            ));
            return false;
        }
        true
    }

    /// Write `pix` under the regout directory and check it against the
    /// golden file of the same index.
    ///
    /// # Errors
    ///
    /// Returns [`TestError::ImageWrite`] if encoding fails, or an IO
    /// error if the golden file cannot be copied or read.
    pub fn write_pix_and_check(&mut self, pix: &Pix, format: ImageFormat) -> TestResult<()> {
        self.index += 1;
        let local_path = self.output_path(regout_dir(), "", format.extension());
        versign_io::write_image(pix, &local_path, format).map_err(|e| TestError::ImageWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;

        self.check_file(&local_path)
    }

    /// Write raw bytes under the regout directory and check them against
    /// the golden file of the same index.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be written.
    pub fn write_data_and_check(&mut self, data: &[u8], ext: &str) -> TestResult<()> {
        self.index += 1;
        let local_path = self.output_path(regout_dir(), "", ext);
        fs::write(&local_path, data)?;
        self.check_file(&local_path)
    }

    /// `<dir>/<test><tag>.<index>.<ext>`
    fn output_path(&self, dir: String, tag: &str, ext: &str) -> String {
        format!("{}/{}{}.{:02}.{}", dir, self.test_name, tag, self.index, ext)
    }

    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        let golden_path = self.output_path(golden_dir(), "_golden", ext);

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("golden file written: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    // record it first with REGTEST_MODE=generate
                    self.fail(format!(
                        "Failure in {}_reg, index {}: golden file not found: {}",
                        self.test_name, self.index, golden_path
                    ));
                    return Ok(());
                }
                let local = fs::read(local_path)?;
                let golden = fs::read(&golden_path)?;
                if local != golden && !same_image_file(local_path, &golden_path) {
                    self.fail(format!(
                        "Failure in {}_reg, index {}: {} differs from {}",
                        self.test_name, self.index, local_path, golden_path
                    ));
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Report the outcome and consume the run.
    ///
    /// Returns `true` if every check passed.
    pub fn cleanup(self) -> bool {
        let ok = self.is_success();
        let verdict = if ok { "SUCCESS" } else { "FAILURE" };
        eprintln!("{}: {}_reg ({} checks)", verdict, self.test_name, self.index);
        for failure in &self.failures {
            eprintln!("  {}", failure);
        }
        ok
    }

    /// True while no check has failed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Recorded failure messages
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

fn first_mismatch(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter().zip(b).position(|(x, y)| x != y)
}

/// Decoded comparison, for encoders that are not byte-stable.
fn same_image_file(path1: &str, path2: &str) -> bool {
    match (versign_io::read_image(path1), versign_io::read_image(path2)) {
        (Ok(p1), Ok(p2)) => p1.sizes_equal(&p2) && p1.data() == p2.data(),
        _ => false,
    }
}
