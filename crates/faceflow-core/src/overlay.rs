//! Debug overlay state
//!
//! Render-agnostic model of the per-channel debug readout: one formatted
//! text line per configured range channel, highlighted while the channel is
//! hot. The host application owns the actual drawing.

use crate::blend_shape::BlendShapeLocation;
use crate::detector::{DetectionReport, DetectorConfig};
use crate::expression::ExpressionLibrary;
use std::collections::HashMap;

/// Color of overlay lines whose channel is not hot.
pub const IDLE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// One overlay readout line.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    /// Formatted readout text.
    pub text: String,
    /// Current RGBA color.
    pub color: [f32; 4],
}

/// Expands the `{0}`..`{5}` placeholders of an overlay format string.
///
/// Order: expression name, detection count, channel, lower bound, upper
/// bound, live value.
pub fn format_overlay_line(
    format: &str,
    expression: &str,
    count: u32,
    location: BlendShapeLocation,
    low: f32,
    high: f32,
    value: f32,
) -> String {
    format
        .replace("{0}", expression)
        .replace("{1}", &count.to_string())
        .replace("{2}", location.as_str())
        .replace("{3}", &low.to_string())
        .replace("{4}", &high.to_string())
        .replace("{5}", &value.to_string())
}

/// Per-channel overlay lines, rebuilt from detection reports.
#[derive(Debug, Clone, Default)]
pub struct DetectionOverlay {
    format: String,
    highlight: [f32; 4],
    lines: HashMap<BlendShapeLocation, OverlayLine>,
}

impl DetectionOverlay {
    /// Build the initial overlay for a library: one line per range channel,
    /// idle color, count and value zero, raw configured bounds.
    pub fn for_library(library: &ExpressionLibrary, config: &DetectorConfig) -> Self {
        let mut lines = HashMap::new();

        for expression in library.expressions() {
            for range in &expression.ranges {
                let text = format_overlay_line(
                    &config.overlay_format,
                    &expression.name,
                    0,
                    range.location,
                    range.low_bound,
                    range.upper_bound,
                    0.0,
                );
                lines.insert(
                    range.location,
                    OverlayLine {
                        text,
                        color: IDLE_COLOR,
                    },
                );
            }
        }

        Self {
            format: config.overlay_format.clone(),
            highlight: config.highlight_color,
            lines,
        }
    }

    /// Rewrite the lines of every channel sampled by this pass.
    ///
    /// Channels the pass skipped keep their previous text and color.
    pub fn apply(&mut self, report: &DetectionReport) {
        for sample in &report.samples {
            let text = format_overlay_line(
                &self.format,
                &sample.expression,
                sample.count,
                sample.location,
                sample.low,
                sample.high,
                sample.value,
            );
            let color = if sample.matched {
                self.highlight
            } else {
                IDLE_COLOR
            };
            self.lines.insert(sample.location, OverlayLine { text, color });
        }
    }

    /// Readout line for a channel, if one exists.
    pub fn line(&self, location: BlendShapeLocation) -> Option<&OverlayLine> {
        self.lines.get(&location)
    }

    /// All readout lines.
    pub fn lines(&self) -> impl Iterator<Item = (BlendShapeLocation, &OverlayLine)> {
        self.lines.iter().map(|(loc, line)| (*loc, line))
    }

    /// Number of readout lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when no lines exist.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines currently highlighted.
    pub fn highlighted_count(&self) -> usize {
        self.lines
            .values()
            .filter(|line| line.color == self.highlight)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::{RangeSample, DEFAULT_OVERLAY_FORMAT};
    use crate::expression::ExpressionDefinition;
    use crate::range::BlendShapeRange;

    fn library() -> ExpressionLibrary {
        let mut library = ExpressionLibrary::new();
        library.add(
            ExpressionDefinition::new("Surprise").with_range(BlendShapeRange::new(
                BlendShapeLocation::JawOpen,
                0.6,
                1.0,
            )),
        );
        library
    }

    #[test]
    fn test_format_placeholders() {
        let text = format_overlay_line(
            DEFAULT_OVERLAY_FORMAT,
            "Surprise",
            3,
            BlendShapeLocation::JawOpen,
            0.6,
            1.0,
            0.75,
        );
        assert_eq!(text, "Surprise(3)JawOpen(min=0.6 max=1)-0.75");
    }

    #[test]
    fn test_initial_lines_are_idle() {
        let overlay = DetectionOverlay::for_library(&library(), &DetectorConfig::default());

        assert_eq!(overlay.len(), 1);
        let line = overlay.line(BlendShapeLocation::JawOpen).unwrap();
        assert_eq!(line.color, IDLE_COLOR);
        assert_eq!(line.text, "Surprise(0)JawOpen(min=0.6 max=1)-0");
        assert_eq!(overlay.highlighted_count(), 0);
    }

    #[test]
    fn test_apply_highlights_matched_channels() {
        let config = DetectorConfig::default();
        let mut overlay = DetectionOverlay::for_library(&library(), &config);

        let report = DetectionReport {
            samples: vec![RangeSample {
                expression: "Surprise".to_string(),
                location: BlendShapeLocation::JawOpen,
                value: 0.8,
                low: 0.6,
                high: 1.0,
                count: 1,
                matched: true,
            }],
            statuses: vec![],
            actions: vec![],
        };
        overlay.apply(&report);

        let line = overlay.line(BlendShapeLocation::JawOpen).unwrap();
        assert_eq!(line.color, config.highlight_color);
        assert_eq!(line.text, "Surprise(1)JawOpen(min=0.6 max=1)-0.8");
        assert_eq!(overlay.highlighted_count(), 1);
    }

    #[test]
    fn test_apply_returns_missed_channels_to_idle() {
        let config = DetectorConfig::default();
        let mut overlay = DetectionOverlay::for_library(&library(), &config);

        let hit = RangeSample {
            expression: "Surprise".to_string(),
            location: BlendShapeLocation::JawOpen,
            value: 0.8,
            low: 0.6,
            high: 1.0,
            count: 1,
            matched: true,
        };
        overlay.apply(&DetectionReport {
            samples: vec![hit.clone()],
            statuses: vec![],
            actions: vec![],
        });

        overlay.apply(&DetectionReport {
            samples: vec![RangeSample {
                value: 0.2,
                matched: false,
                ..hit
            }],
            statuses: vec![],
            actions: vec![],
        });

        let line = overlay.line(BlendShapeLocation::JawOpen).unwrap();
        assert_eq!(line.color, IDLE_COLOR);
    }

    #[test]
    fn test_unsampled_channels_keep_their_line() {
        let mut overlay = DetectionOverlay::for_library(&library(), &DetectorConfig::default());
        let before = overlay.line(BlendShapeLocation::JawOpen).cloned();

        overlay.apply(&DetectionReport::default());

        assert_eq!(overlay.line(BlendShapeLocation::JawOpen).cloned(), before);
    }
}
