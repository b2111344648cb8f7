//! FaceFlow Core - Domain Model and Detection Engine
//!
//! This crate contains the core domain model for FaceFlow, including:
//! - Blend shape channel identifiers
//! - Expression/range configuration and JSON persistence
//! - Live coefficient storage fed by the face-tracking source
//! - The throttled expression detection engine
//! - Debug overlay state for host UIs

#![warn(missing_docs)]

use thiserror::Error;

pub mod action;
pub mod blend_shape;
pub mod coefficients;
pub mod detector;
pub mod expression;
pub mod overlay;
pub mod range;

// --- Re-exports grouped by category ---

// Configuration model
pub use action::ActionBinding;
pub use blend_shape::BlendShapeLocation;
pub use expression::{ExpressionDefinition, ExpressionLibrary};
pub use range::BlendShapeRange;

// Live data & detection
pub use coefficients::CoefficientStore;
pub use detector::{
    DetectionClock, DetectionReport, DetectorConfig, ExpressionDetector, ExpressionStatus,
    RangeSample, DEFAULT_OVERLAY_FORMAT,
};

// Overlay
pub use overlay::{format_overlay_line, DetectionOverlay, OverlayLine, IDLE_COLOR};

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Channel name not in the blend shape set
    #[error("Unknown blend shape: {0}")]
    UnknownBlendShape(String),

    /// I/O error while reading or writing a library file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
