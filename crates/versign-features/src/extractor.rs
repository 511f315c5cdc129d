//! Recursive quadrant feature extraction
//!
//! The pipeline for one image:
//!
//! 1. Binarize with the midrange threshold
//! 2. Locate the ink bounding box and crop to it (both edges inclusive)
//! 3. Resize to the canonical width, keeping the aspect ratio
//! 4. Split the image around the ink centroid into four quadrants, and
//!    each quadrant again, until `max_depth`; describe every leaf
//!
//! Every branch is split down to `max_depth`, so the feature set always
//! holds `4^max_depth` leaves. A region without ink splits around its
//! midpoint instead of its centroid.

use crate::annotate::annotate;
use crate::error::FeatureResult;
use crate::feature_set::FeatureSet;
use crate::observer::{ExtractionObserver, LogObserver};
use crate::options::ExtractorOptions;
use crate::segment::{Quadrant, Segment, SegmentFeatures};
use versign_core::{Bounds, Pix};
use versign_region::{InkCentroid, RegionError, binarize, ink_bounding_box, ink_centroid};
use versign_transform::scale_to_width;

/// Result of extracting one image
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The normalized binary image, annotated if requested
    pub image: Pix,
    /// Leaf descriptors keyed by quadrant label
    pub features: FeatureSet,
}

/// Pending node of the decomposition
struct Frame {
    label: String,
    depth: u32,
    bounds: Bounds,
}

/// Quadrant-tree feature extractor.
///
/// Immutable after construction; one extractor can serve any number of
/// images, from any number of threads.
///
/// # Examples
///
/// ```
/// use versign_core::Pix;
/// use versign_features::{ExtractorOptions, QuadrantFeatureExtractor};
///
/// let mut pm = Pix::new_filled(60, 40, 255).unwrap().to_mut();
/// for x in 10..50 {
///     pm.set_pixel(x, 20, 0).unwrap();
///     pm.set_pixel(x, 21, 0).unwrap();
/// }
/// let pix: Pix = pm.into();
///
/// let options = ExtractorOptions::new().with_canonical_width(128).with_max_depth(2);
/// let extractor = QuadrantFeatureExtractor::new(options).unwrap();
/// let out = extractor.extract(&pix).unwrap();
/// assert_eq!(out.features.len(), 16);
/// assert_eq!(out.image.width(), 128);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuadrantFeatureExtractor {
    options: ExtractorOptions,
}

impl QuadrantFeatureExtractor {
    /// Create an extractor.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::InvalidConfiguration`](crate::FeatureError::InvalidConfiguration)
    /// if `options` fail validation.
    pub fn new(options: ExtractorOptions) -> FeatureResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Options in use
    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Extract features, reporting milestones to the `log` facade.
    ///
    /// # Errors
    ///
    /// - [`RegionError::NoInkDetected`] (wrapped) for a blank page
    /// - other region, transform and core errors from the pipeline
    pub fn extract(&self, pix: &Pix) -> FeatureResult<Extraction> {
        self.extract_with_observer(pix, &mut LogObserver)
    }

    /// Extract features, reporting milestones to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`extract`](Self::extract).
    pub fn extract_with_observer<O: ExtractionObserver + ?Sized>(
        &self,
        pix: &Pix,
        observer: &mut O,
    ) -> FeatureResult<Extraction> {
        let normalized = self.normalize(pix, observer)?;
        let features = self.decompose(&normalized, observer)?;

        let image = if self.options.annotate {
            annotate(&normalized, &features)
        } else {
            normalized
        };
        Ok(Extraction { image, features })
    }

    /// Binarize, crop to the ink and resize to the canonical width.
    ///
    /// A page of a single gray level at or above the ink threshold has
    /// nothing to locate and yields [`RegionError::NoInkDetected`].
    ///
    /// # Errors
    ///
    /// Same as [`extract`](Self::extract).
    pub fn normalize<O: ExtractionObserver + ?Sized>(
        &self,
        pix: &Pix,
        observer: &mut O,
    ) -> FeatureResult<Pix> {
        let ink_threshold = self.options.ink_threshold;

        let bin = binarize(pix)?;
        observer.threshold_computed(bin.threshold);
        if bin.is_uniform() && bin.range.0 >= ink_threshold {
            return Err(RegionError::NoInkDetected {
                threshold: ink_threshold,
            }
            .into());
        }

        let bbox = ink_bounding_box(&bin.pix, ink_threshold)?;
        observer.bounding_box_found(&bbox);

        let cropped = bin.pix.clip_bounds(&bbox.to_bounds())?;
        let normalized = scale_to_width(&cropped, self.options.canonical_width)?;
        observer.image_normalized(&normalized);

        Ok(normalized)
    }

    /// Decompose a normalized binary image into its leaf segments.
    ///
    /// The whole image is the root, label `""`, depth 0.
    ///
    /// # Errors
    ///
    /// Propagates region errors; none occur for a valid image.
    pub fn decompose<O: ExtractionObserver + ?Sized>(
        &self,
        pix: &Pix,
        observer: &mut O,
    ) -> FeatureResult<FeatureSet> {
        let max_depth = self.options.max_depth;
        let mut features = FeatureSet::new();
        let mut stack = vec![Frame {
            label: String::new(),
            depth: 0,
            bounds: Bounds::full(pix),
        }];

        while let Some(frame) = stack.pop() {
            let centroid = if frame.bounds.is_empty() {
                InkCentroid::midpoint(&frame.bounds)
            } else {
                ink_centroid(pix, &frame.bounds)?
            };

            if frame.depth < max_depth {
                let (sx, sy) = centroid.split_point();
                let children = frame.bounds.split_at(sx, sy);
                // reversed so quadrant 1 is popped first
                for (quadrant, bounds) in Quadrant::ALL.iter().zip(children).rev() {
                    let mut label = String::with_capacity(frame.label.len() + 1);
                    label.push_str(&frame.label);
                    label.push(quadrant.digit());
                    stack.push(Frame {
                        label,
                        depth: frame.depth + 1,
                        bounds,
                    });
                }
                continue;
            }

            let segment = Segment {
                features: SegmentFeatures::compute(pix, &frame.bounds, &centroid)?,
                label: frame.label,
                depth: frame.depth,
                bounds: frame.bounds,
            };
            observer.leaf_completed(&segment);
            features.insert(segment);
        }

        Ok(features)
    }
}
