use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::task::TaskDescription;

/// Current schema version. Bump whenever the base-feature list or the
/// default vocabulary changes shape.
pub const SCHEMA_VERSION: u32 = 1;

/// Number of base features preceding the vocabulary columns:
/// title length, description length, tag count.
pub const BASE_FEATURES: usize = 3;

/// Versioned feature-column schema.
///
/// The column mapping of a feature row is part of the persisted model's
/// implicit input shape, so the schema travels inside the artifact and is
/// validated against the fitted stages at load time. Vocabulary order is
/// load-bearing: it defines column identity and must never be reordered
/// between training and inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSchema {
    /// Schema format version for mismatch detection at load time.
    pub version: u32,
    /// Canonical tag keywords, one vocabulary column each, in order.
    pub vocabulary: Vec<String>,
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            vocabulary: [
                "frontend",
                "backend",
                "ai",
                "blockchain",
                "security",
                "ui/ux",
                "devops",
                "marketing",
                "qa",
                "analytics",
                "mobile",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl FeatureSchema {
    /// Total feature-row width: base features plus one column per keyword.
    pub fn width(&self) -> usize {
        BASE_FEATURES + self.vocabulary.len()
    }

    /// Map a task description to a feature row under this schema.
    ///
    /// Base features come first, in fixed order: title length,
    /// description length, tag count (character counts and raw count,
    /// unscaled). Then one indicator column per vocabulary keyword: `1.0`
    /// when the keyword is an exact member of the normalized tag list or
    /// appears as a substring of the combined lowercased text, else `0.0`.
    ///
    /// The substring check is deliberately loose (no word boundaries), so
    /// e.g. a description containing "maintain" flips the "ai" column.
    /// Pure and deterministic: same input, same row, every time.
    pub fn extract(&self, task: &TaskDescription) -> Array1<f64> {
        let tags = task.tags.normalized();
        let full_text = format!("{} {}", task.title, task.description).to_lowercase();

        let mut row = Vec::with_capacity(self.width());
        row.push(task.title.chars().count() as f64);
        row.push(task.description.chars().count() as f64);
        row.push(tags.len() as f64);

        for keyword in &self.vocabulary {
            let hit = tags.iter().any(|t| t == keyword) || full_text.contains(keyword.as_str());
            row.push(if hit { 1.0 } else { 0.0 });
        }

        Array1::from_vec(row)
    }
}
