//! Bounded buffer of rendered output.

use std::collections::VecDeque;

use crate::config::MAX_TRANSCRIPT_SEGMENTS;
use crate::models::Segment;

/// Rendered segments in display order.
///
/// Bounded by a capacity; when full, pushing drops the oldest segments.
#[derive(Clone, Debug)]
pub struct Transcript {
    segments: VecDeque<Segment>,
    capacity: usize,
}

impl Transcript {
    /// Creates a transcript holding up to [`MAX_TRANSCRIPT_SEGMENTS`] segments.
    pub fn new() -> Self {
        Self::with_capacity(MAX_TRANSCRIPT_SEGMENTS)
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Transcript capacity must be greater than 0");
        Self {
            segments: VecDeque::with_capacity(capacity.min(MAX_TRANSCRIPT_SEGMENTS)),
            capacity,
        }
    }

    pub fn push(&mut self, segment: Segment) {
        if self.segments.len() == self.capacity {
            self.segments.pop_front();
        }
        self.segments.push_back(segment);
    }

    pub fn extend(&mut self, segments: impl IntoIterator<Item = Segment>) {
        for segment in segments {
            self.push(segment);
        }
    }

    /// Clears all output.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn to_vec(&self) -> Vec<Segment> {
        self.segments.iter().cloned().collect()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
