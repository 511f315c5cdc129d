//! The per-image feature mapping

use crate::segment::{Segment, SegmentFeatures};
use serde::Serialize;
use std::collections::BTreeMap;

/// Leaf segments of one image, keyed and ordered by quadrant label.
///
/// Built once by the extractor; there are no public mutators.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureSet {
    segments: BTreeMap<String, Segment>,
}

impl FeatureSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, segment: Segment) {
        self.segments.insert(segment.label.clone(), segment);
    }

    /// Number of leaf segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True if there are no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Descriptors of the leaf labelled `label`
    pub fn get(&self, label: &str) -> Option<&SegmentFeatures> {
        self.segments.get(label).map(|s| &s.features)
    }

    /// Leaf segment labelled `label`
    pub fn segment(&self, label: &str) -> Option<&Segment> {
        self.segments.get(label)
    }

    /// Leaf segments in label order
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values()
    }

    /// Labels in lexicographic order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.segments.keys().map(String::as_str)
    }

    /// Flatten into a fixed-shape vector, 7 values per leaf in label
    /// order (see [`SegmentFeatures::push_values`]).
    pub fn to_vector(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.len() * SegmentFeatures::VECTOR_LEN);
        for segment in self.segments.values() {
            segment.features.push_values(&mut out);
        }
        out
    }
}

impl<'a> IntoIterator for &'a FeatureSet {
    type Item = &'a Segment;
    type IntoIter = std::collections::btree_map::Values<'a, String, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.values()
    }
}
