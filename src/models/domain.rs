use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::bands::FabricType;
use crate::core::keys::MeasurementKey;

/// Body measurements of a user, in centimeters (weight in kilograms)
///
/// Every field is optional: profiles are filled in gradually and the engine
/// only compares the dimensions that are actually present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyProfile {
    #[serde(default)]
    pub chest: Option<f64>,
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub hip: Option<f64>,
    #[serde(default)]
    pub shoulder: Option<f64>,
    #[serde(default)]
    pub arm_length: Option<f64>,
    #[serde(default)]
    pub leg_length: Option<f64>,
    #[serde(default)]
    pub thigh_circumference: Option<f64>,
    #[serde(default)]
    pub inseam: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl BodyProfile {
    /// Look up a measurement by its key
    pub fn measurement(&self, key: MeasurementKey) -> Option<f64> {
        match key {
            MeasurementKey::Chest => self.chest,
            MeasurementKey::Waist => self.waist,
            MeasurementKey::Hip => self.hip,
            MeasurementKey::Shoulder => self.shoulder,
            MeasurementKey::ArmLength => self.arm_length,
            MeasurementKey::LegLength => self.leg_length,
            MeasurementKey::ThighCircumference => self.thigh_circumference,
            MeasurementKey::Inseam => self.inseam,
            MeasurementKey::Height => self.height,
            MeasurementKey::Weight => self.weight,
        }
    }
}

/// Size chart extracted from a product: size label -> measurement key -> value
///
/// Values are raw JSON: non-numeric cells (notes, text ranges, the size label
/// itself) are skipped during evaluation. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeChart {
    pub sizes: serde_json::Map<String, serde_json::Value>,
}

impl SizeChart {
    pub fn new(sizes: serde_json::Map<String, serde_json::Value>) -> Self {
        Self { sizes }
    }

    /// Measurements for a single size, if the size exists and is an object
    pub fn measurements(&self, size_label: &str) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.sizes.get(size_label).and_then(|v| v.as_object())
    }
}

/// One matched pair between a body measurement and a garment measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementSample {
    pub key: MeasurementKey,
    pub user_value: f64,
    pub chart_value: f64,
}

/// Fit of a single measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitCategory {
    Perfect,
    Good,
    Tight,
    Loose,
}

impl FitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitCategory::Perfect => "perfect",
            FitCategory::Good => "good",
            FitCategory::Tight => "tight",
            FitCategory::Loose => "loose",
        }
    }
}

impl fmt::Display for FitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall fit label for one size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallConfidence {
    Perfect,
    Good,
    Tight,
    Loose,
}

impl OverallConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallConfidence::Perfect => "Perfect",
            OverallConfidence::Good => "Good",
            OverallConfidence::Tight => "Tight",
            OverallConfidence::Loose => "Loose",
        }
    }
}

impl fmt::Display for OverallConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable acceptable range for a chart value, whole centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRange {
    pub min: f64,
    pub max: f64,
}

/// Classification of one measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitVerdict {
    pub key: MeasurementKey,
    pub user_value: f64,
    pub chart_value: f64,
    /// chart - user, rounded to one decimal; positive means more ease
    pub difference: f64,
    pub category: FitCategory,
    pub range: MeasurementRange,
}

/// Category counts over all verdicts of a size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitSummary {
    pub perfect: usize,
    pub good: usize,
    pub tight: usize,
    pub loose: usize,
    pub overall: Option<OverallConfidence>,
}

impl FitSummary {
    pub fn total(&self) -> usize {
        self.perfect + self.good + self.tight + self.loose
    }
}

/// Evaluated fit of one size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeEvaluation {
    pub size_label: String,
    pub fabric: FabricType,
    pub verdicts: Vec<FitVerdict>,
    /// Derived label, or the external fallback when nothing could be compared
    pub overall_confidence: String,
    pub summary: FitSummary,
    #[serde(default)]
    pub is_recommended: bool,
}

/// Evaluation of every size in a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeComparison {
    pub fabric: FabricType,
    pub recommended_size: Option<String>,
    pub sizes: Vec<SizeEvaluation>,
}

impl SizeComparison {
    pub fn get(&self, size_label: &str) -> Option<&SizeEvaluation> {
        self.sizes.iter().find(|s| s.size_label == size_label)
    }
}
