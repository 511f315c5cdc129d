//! Quadrant-tree segments and their leaf descriptors

use serde::{Serialize, Serializer};
use versign_core::{Bounds, Pix};
use versign_region::{InkCentroid, RegionResult, count_transitions};

/// One of the four children of a split region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    /// `left..sx`, `top..sy`
    TopLeft = 1,
    /// `sx..right`, `top..sy`
    TopRight = 2,
    /// `left..sx`, `sy..bottom`
    BottomLeft = 3,
    /// `sx..right`, `sy..bottom`
    BottomRight = 4,
}

impl Quadrant {
    /// All quadrants in label order, matching [`Bounds::split_at`]
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Label digit, `'1'..='4'`
    pub fn digit(self) -> char {
        (b'0' + self as u8) as char
    }

    /// Parse a label digit.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::TopLeft),
            '2' => Some(Self::TopRight),
            '3' => Some(Self::BottomLeft),
            '4' => Some(Self::BottomRight),
            _ => None,
        }
    }
}

/// Descriptors computed for one leaf segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentFeatures {
    /// `width / height` rounded to 2 decimals; 0 when the height is 0
    pub aspect_ratio: f64,
    /// Ink-to-background transitions in scan order
    pub transitions: u32,
    /// Ink centroid, or the region midpoint when there is no ink
    pub centroid: (f64, f64),
    /// Number of ink samples
    pub ink_count: u64,
    /// `width * height / ink_count`; 0 when there is no ink
    pub normalized_size: f64,
    /// `atan((bottom - cy) / (cx - left))`; 0 when `cx == left`
    pub inclination_angle: f64,
}

impl SegmentFeatures {
    /// Number of values [`push_values`](Self::push_values) appends
    pub const VECTOR_LEN: usize = 7;

    /// Compute the leaf descriptors of `bounds`.
    ///
    /// # Errors
    ///
    /// Propagates [`count_transitions`] errors for bounds outside `pix`.
    pub fn compute(pix: &Pix, bounds: &Bounds, centroid: &InkCentroid) -> RegionResult<Self> {
        let transitions = count_transitions(pix, bounds)?;

        let width = bounds.width() as f64;
        let height = bounds.height() as f64;

        let aspect_ratio = if height == 0.0 {
            0.0
        } else {
            round2(width / height)
        };

        let normalized_size = if centroid.count != 0 {
            width * height / centroid.count as f64
        } else {
            0.0
        };

        let dx = centroid.x - bounds.left as f64;
        let dy = bounds.bottom as f64 - centroid.y;
        let inclination_angle = if dx != 0.0 { (dy / dx).atan() } else { 0.0 };

        Ok(Self {
            aspect_ratio,
            transitions,
            centroid: (centroid.x, centroid.y),
            ink_count: centroid.count,
            normalized_size,
            inclination_angle,
        })
    }

    /// Append the flattened descriptor: aspect ratio, transitions, cx,
    /// cy, ink count, normalized size, angle.
    pub fn push_values(&self, out: &mut Vec<f64>) {
        out.extend_from_slice(&[
            self.aspect_ratio,
            self.transitions as f64,
            self.centroid.0,
            self.centroid.1,
            self.ink_count as f64,
            self.normalized_size,
            self.inclination_angle,
        ]);
    }
}

/// Round to 2 decimals, halves away from zero.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// A leaf of the quadrant decomposition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Quadrant path from the root, one digit per level
    pub label: String,
    /// Depth in the tree; the root is 0
    pub depth: u32,
    /// Region of the normalized image covered by the leaf
    #[serde(serialize_with = "serialize_bounds")]
    pub bounds: Bounds,
    /// Leaf descriptors
    pub features: SegmentFeatures,
}

impl Segment {
    /// Quadrant choices from the root down to this leaf
    pub fn path(&self) -> impl Iterator<Item = Quadrant> + '_ {
        self.label.chars().filter_map(Quadrant::from_digit)
    }
}

fn serialize_bounds<S: Serializer>(b: &Bounds, s: S) -> Result<S::Ok, S::Error> {
    [b.left, b.right, b.top, b.bottom].serialize(s)
}
