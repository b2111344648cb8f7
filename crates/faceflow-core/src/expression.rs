//! Expression definitions and the configured library
//!
//! An expression bundles a set of range conditions under a name, optionally
//! with an expression-level action. The [`ExpressionLibrary`] is the full
//! configured set, loaded once at startup and persisted as JSON.

use crate::action::ActionBinding;
use crate::blend_shape::BlendShapeLocation;
use crate::range::BlendShapeRange;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

/// A named bundle of blend shape range conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionDefinition {
    /// Display name, also the lookup key inside the library.
    pub name: String,
    /// The range conditions making up this expression.
    pub ranges: Vec<BlendShapeRange>,
    /// Action reported whenever this expression's status is evaluated.
    #[serde(default)]
    pub action: Option<ActionBinding>,
}

impl ExpressionDefinition {
    /// Create an expression with no ranges.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ranges: Vec::new(),
            action: None,
        }
    }

    /// Append a range condition.
    pub fn with_range(mut self, range: BlendShapeRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Attach an expression-level action.
    pub fn with_action(mut self, action: ActionBinding) -> Self {
        self.action = Some(action);
        self
    }
}

/// The configured set of expressions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpressionLibrary {
    expressions: Vec<ExpressionDefinition>,
}

impl ExpressionLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expression definition.
    pub fn add(&mut self, expression: ExpressionDefinition) {
        self.expressions.push(expression);
    }

    /// Remove an expression by name. Returns the removed definition, if any.
    pub fn remove(&mut self, name: &str) -> Option<ExpressionDefinition> {
        let index = self.expressions.iter().position(|e| e.name == name)?;
        Some(self.expressions.remove(index))
    }

    /// Look up an expression by name.
    pub fn get(&self, name: &str) -> Option<&ExpressionDefinition> {
        self.expressions.iter().find(|e| e.name == name)
    }

    /// All configured expressions.
    pub fn expressions(&self) -> &[ExpressionDefinition] {
        &self.expressions
    }

    /// Mutable access to the configured expressions.
    pub fn expressions_mut(&mut self) -> &mut [ExpressionDefinition] {
        &mut self.expressions
    }

    /// Number of configured expressions.
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// True when no expressions are configured.
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// The union of all channels referenced by any range.
    ///
    /// `NotSet` placeholders are excluded. This set fixes the coefficient
    /// store keys at startup.
    pub fn channels(&self) -> BTreeSet<BlendShapeLocation> {
        self.expressions
            .iter()
            .flat_map(|e| e.ranges.iter())
            .map(|r| r.location)
            .filter(|loc| loc.is_set())
            .collect()
    }

    /// Zero every range's detection counter.
    pub fn reset_counters(&mut self) {
        for expression in &mut self.expressions {
            for range in &mut expression.ranges {
                range.detection_count = 0;
            }
        }
    }

    /// Load a library from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let library: ExpressionLibrary = serde_json::from_str(&json)?;

        info!("Loaded {} expressions", library.len());

        Ok(library)
    }

    /// Save the library to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;

        info!("Saved {} expressions", self.len());

        Ok(())
    }

    /// Import a library from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Export the library to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
