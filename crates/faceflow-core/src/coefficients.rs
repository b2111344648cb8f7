//! Live coefficient storage
//!
//! The face-tracking source delivers batches of (channel, coefficient) pairs
//! at its own rate; the detector reads the latest values on its own tick.
//! Both run on the host's update cycle, so no locking is involved.

use crate::blend_shape::BlendShapeLocation;
use crate::expression::ExpressionLibrary;
use std::collections::HashMap;

/// Latest observed coefficient per tracked channel.
///
/// The key set is fixed at construction time: updates for channels outside
/// it are ignored. Detection is gated on [`is_ready`](Self::is_ready), which
/// flips on the first update from the source.
#[derive(Debug, Clone, Default)]
pub struct CoefficientStore {
    values: HashMap<BlendShapeLocation, f32>,
    ready: bool,
}

impl CoefficientStore {
    /// Build a store tracking every channel the library references,
    /// all values zero.
    pub fn for_library(library: &ExpressionLibrary) -> Self {
        Self {
            values: library.channels().into_iter().map(|loc| (loc, 0.0)).collect(),
            ready: false,
        }
    }

    /// Apply one batch of updates from the face-tracking source.
    ///
    /// Marks the store ready even when the batch is empty; values for
    /// untracked channels are dropped.
    pub fn apply<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = (BlendShapeLocation, f32)>,
    {
        self.ready = true;
        for (location, coefficient) in updates {
            if let Some(value) = self.values.get_mut(&location) {
                *value = coefficient;
            }
        }
    }

    /// Latest coefficient for a channel, if tracked.
    pub fn get(&self, location: BlendShapeLocation) -> Option<f32> {
        self.values.get(&location).copied()
    }

    /// Whether the source has delivered at least one update.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Number of tracked channels.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no channels are tracked.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterator over the tracked channels.
    pub fn locations(&self) -> impl Iterator<Item = BlendShapeLocation> + '_ {
        self.values.keys().copied()
    }

    /// Zero all values and clear the readiness flag.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            *value = 0.0;
        }
        self.ready = false;
    }
}
