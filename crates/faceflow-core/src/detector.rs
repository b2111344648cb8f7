//! Expression detection engine
//!
//! The detector runs on the host's per-frame update call but evaluates at a
//! configurable period. Each evaluation pass scans every configured range
//! against the live coefficients and produces a [`DetectionReport`] for the
//! control layer and overlay consumers.

use crate::action::ActionBinding;
use crate::blend_shape::BlendShapeLocation;
use crate::coefficients::CoefficientStore;
use crate::expression::ExpressionLibrary;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Default debug overlay line format.
///
/// Placeholders: `{0}` expression, `{1}` detection count, `{2}` channel,
/// `{3}` lower bound, `{4}` upper bound, `{5}` live value.
pub const DEFAULT_OVERLAY_FORMAT: &str = "{0}({1}){2}(min={3} max={4})-{5}";

/// Detector tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Seconds between evaluation passes.
    pub detection_rate: f32,
    /// RGBA color of overlay lines whose channel is currently hot.
    pub highlight_color: [f32; 4],
    /// Overlay line format, `{0}`..`{5}` placeholders.
    pub overlay_format: String,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            detection_rate: 1.0,
            highlight_color: [1.0, 0.0, 0.0, 1.0],
            overlay_format: DEFAULT_OVERLAY_FORMAT.to_string(),
        }
    }
}

/// Accumulator throttle for the evaluation pass.
///
/// The check runs before accumulation: the first pass fires once a full
/// period has accumulated, and the firing frame's delta is discarded.
#[derive(Debug, Clone, Copy)]
pub struct DetectionClock {
    rate: f32,
    timer: f32,
}

impl DetectionClock {
    /// Create a clock with the given period in seconds.
    pub fn new(rate: f32) -> Self {
        Self { rate, timer: 0.0 }
    }

    /// Advance by `dt` seconds; true when an evaluation pass is due.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.timer >= self.rate {
            self.timer = 0.0;
            true
        } else {
            self.timer += dt;
            false
        }
    }

    /// Restart the accumulator.
    pub fn reset(&mut self) {
        self.timer = 0.0;
    }
}

/// One evaluated range condition, for overlay consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSample {
    /// Owning expression name.
    pub expression: String,
    /// Sampled channel.
    pub location: BlendShapeLocation,
    /// Live coefficient at evaluation time.
    pub value: f32,
    /// Effective lower bound.
    pub low: f32,
    /// Effective upper bound.
    pub high: f32,
    /// Detection count after this pass.
    pub count: u32,
    /// Whether the value was in range.
    pub matched: bool,
}

/// Per-expression detection status.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatus {
    /// Expression name.
    pub expression: String,
    /// Whether the expression reported fully detected this pass.
    pub detected: bool,
}

/// Everything one evaluation pass produced.
///
/// This is the contract between the detector and its consumers: the control
/// layer dispatches `actions` and `statuses`, the overlay renders `samples`.
#[derive(Debug, Clone, Default)]
pub struct DetectionReport {
    /// One entry per evaluated range, in configuration order.
    pub samples: Vec<RangeSample>,
    /// One entry per expression, in configuration order.
    pub statuses: Vec<ExpressionStatus>,
    /// Actions to dispatch, in firing order.
    pub actions: Vec<ActionBinding>,
}

/// Scans configured expressions against live coefficients.
#[derive(Debug)]
pub struct ExpressionDetector {
    config: DetectorConfig,
    library: ExpressionLibrary,
    clock: DetectionClock,
    hot: HashSet<BlendShapeLocation>,
}

impl ExpressionDetector {
    /// Create a detector over `library` with the given tuning.
    pub fn new(library: ExpressionLibrary, config: DetectorConfig) -> Self {
        let clock = DetectionClock::new(config.detection_rate);
        Self {
            config,
            library,
            clock,
            hot: HashSet::new(),
        }
    }

    /// Create a detector with default tuning.
    pub fn with_defaults(library: ExpressionLibrary) -> Self {
        Self::new(library, DetectorConfig::default())
    }

    /// Advance the detector by `dt` seconds.
    ///
    /// Returns `None` while the face source has not delivered its first
    /// update, and between evaluation passes. Returns the pass report
    /// otherwise.
    pub fn update(&mut self, store: &CoefficientStore, dt: f32) -> Option<DetectionReport> {
        if !store.is_ready() {
            debug!("detection inactive: no face updates received yet");
            return None;
        }

        if !self.clock.tick(dt) {
            return None;
        }

        Some(self.evaluate(store))
    }

    fn evaluate(&mut self, store: &CoefficientStore) -> DetectionReport {
        let mut report = DetectionReport::default();
        let tracked = store.len();

        for expression in self.library.expressions_mut() {
            for range in &mut expression.ranges {
                // Untracked channels are skipped without touching any state.
                let Some(value) = store.get(range.location) else {
                    continue;
                };

                let (low, high) = range.effective_bounds();
                let matched = value >= low && value <= high;

                if matched {
                    self.hot.insert(range.location);
                    range.detection_count += 1;
                    if let Some(action) = &range.action {
                        if !action.is_inert() {
                            report.actions.push(action.clone());
                        }
                    }
                } else {
                    self.hot.remove(&range.location);
                }

                report.samples.push(RangeSample {
                    expression: expression.name.clone(),
                    location: range.location,
                    value,
                    low,
                    high,
                    count: range.detection_count,
                    matched,
                });
            }

            // Hot channels are counted across the whole library, not per
            // expression: full detection means every tracked channel is hot.
            let detected = self.hot.len() == tracked;

            if let Some(action) = &expression.action {
                if !action.is_inert() {
                    report.actions.push(action.clone());
                }
            }

            report.statuses.push(ExpressionStatus {
                expression: expression.name.clone(),
                detected,
            });
        }

        report
    }

    /// Whether a channel matched on the most recent pass it was evaluated.
    pub fn is_hot(&self, location: BlendShapeLocation) -> bool {
        self.hot.contains(&location)
    }

    /// Number of currently hot channels.
    pub fn hot_count(&self) -> usize {
        self.hot.len()
    }

    /// Clear hot state and counters and restart the evaluation clock.
    pub fn reset(&mut self) {
        self.hot.clear();
        self.clock.reset();
        self.library.reset_counters();
    }

    /// The detector's tuning.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// The configured library.
    pub fn library(&self) -> &ExpressionLibrary {
        &self.library
    }

    /// Mutable access to the configured library.
    pub fn library_mut(&mut self) -> &mut ExpressionLibrary {
        &mut self.library
    }
}
