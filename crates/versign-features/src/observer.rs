//! Extraction progress reporting
//!
//! [`ExtractionObserver`] receives the milestones of one extraction.
//! Every method has an empty default, so an observer only implements what
//! it cares about. `()` ignores everything; [`LogObserver`] forwards to
//! the `log` facade.

use crate::segment::Segment;
use log::{debug, trace};
use versign_core::{BoundingBox, Pix};

/// Sink for extraction milestones
pub trait ExtractionObserver {
    /// The binarization threshold was chosen.
    fn threshold_computed(&mut self, _threshold: u8) {}

    /// The ink bounding box was located on the binarized image.
    fn bounding_box_found(&mut self, _bbox: &BoundingBox) {}

    /// The cropped image was resized to the canonical width.
    fn image_normalized(&mut self, _normalized: &Pix) {}

    /// A leaf segment was completed. Leaves arrive in label order.
    fn leaf_completed(&mut self, _segment: &Segment) {}
}

impl ExtractionObserver for () {}

impl<O: ExtractionObserver + ?Sized> ExtractionObserver for &mut O {
    fn threshold_computed(&mut self, threshold: u8) {
        (**self).threshold_computed(threshold);
    }

    fn bounding_box_found(&mut self, bbox: &BoundingBox) {
        (**self).bounding_box_found(bbox);
    }

    fn image_normalized(&mut self, normalized: &Pix) {
        (**self).image_normalized(normalized);
    }

    fn leaf_completed(&mut self, segment: &Segment) {
        (**self).leaf_completed(segment);
    }
}

/// Observer that logs milestones at `debug` and leaves at `trace`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ExtractionObserver for LogObserver {
    fn threshold_computed(&mut self, threshold: u8) {
        debug!("binarization threshold {}", threshold);
    }

    fn bounding_box_found(&mut self, bbox: &BoundingBox) {
        debug!(
            "ink bounding box {} ({}x{})",
            bbox,
            bbox.width(),
            bbox.height()
        );
    }

    fn image_normalized(&mut self, normalized: &Pix) {
        debug!(
            "normalized to {}x{}",
            normalized.width(),
            normalized.height()
        );
    }

    fn leaf_completed(&mut self, segment: &Segment) {
        let f = &segment.features;
        trace!(
            "leaf {:>4} {}: ratio={:.2} transitions={} ink={} nsize={:.3} angle={:.4}",
            segment.label,
            segment.bounds,
            f.aspect_ratio,
            f.transitions,
            f.ink_count,
            f.normalized_size,
            f.inclination_angle
        );
    }
}
