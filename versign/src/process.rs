//! File and batch processing

use crate::error::{Error, Result};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use versign_features::{FeatureSet, QuadrantFeatureExtractor};
use versign_io::ImageFormat;

/// Outcome of one batch input
#[derive(Debug)]
pub struct BatchItem {
    /// The input path as given
    pub input: PathBuf,
    /// Where the processed image was written, if anywhere
    pub output: Option<PathBuf>,
    /// Features, or why the input failed
    pub result: Result<FeatureSet>,
}

/// Read `input`, extract its features and, if `output` is given, write the
/// processed image there.
///
/// The output format follows the output extension; unknown extensions
/// are written as PNG.
///
/// # Errors
///
/// Returns [`Error::Io`] if the input cannot be decoded or the output
/// cannot be written, and [`Error::Features`] if extraction fails.
pub fn process_file<P: AsRef<Path>>(
    input: P,
    output: Option<&Path>,
    extractor: &QuadrantFeatureExtractor,
) -> Result<FeatureSet> {
    let input = input.as_ref();
    let pix = versign_io::read_image(input)?;
    info!(
        "processing {} ({}x{})",
        input.display(),
        pix.width(),
        pix.height()
    );

    let extraction = extractor.extract(&pix)?;

    if let Some(output) = output {
        let format = ImageFormat::from_path(output).unwrap_or(ImageFormat::Png);
        versign_io::write_image(&extraction.image, output, format)?;
        info!("wrote processed image {}", output.display());
    }

    info!(
        "extracted {} segments from {}",
        extraction.features.len(),
        input.display()
    );
    Ok(extraction.features)
}

/// Run [`process_file`] on every input.
///
/// Processed images go to `output_dir` under the input's file name. A
/// failing input is logged and reported in its [`BatchItem`]; the
/// remaining inputs are still processed.
pub fn process_batch<P: AsRef<Path>>(
    inputs: &[P],
    output_dir: Option<&Path>,
    extractor: &QuadrantFeatureExtractor,
) -> Vec<BatchItem> {
    let mut items = Vec::with_capacity(inputs.len());
    let mut failed = 0usize;

    for input in inputs {
        let input = input.as_ref();
        let (output, result) = match batch_output(input, output_dir) {
            Ok(output) => {
                let result = process_file(input, output.as_deref(), extractor);
                (output, result)
            }
            Err(e) => (None, Err(e)),
        };

        if let Err(e) = &result {
            warn!("skipping {}: {}", input.display(), e);
            failed += 1;
        }
        items.push(BatchItem {
            input: input.to_path_buf(),
            output,
            result,
        });
    }

    info!(
        "batch done: {} processed, {} failed",
        inputs.len() - failed,
        failed
    );
    items
}

fn batch_output(input: &Path, output_dir: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(dir) = output_dir else {
        return Ok(None);
    };
    let name = input
        .file_name()
        .ok_or_else(|| Error::NoFileName(input.to_path_buf()))?;
    fs::create_dir_all(dir).map_err(|source| Error::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(Some(dir.join(name)))
}
