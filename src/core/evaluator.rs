use std::sync::Arc;

use serde_json::{Map, Value};

use crate::core::{
    aggregator::{derive_confidence, summarize},
    bands::{BandTable, FabricType},
    classifier::Classifier,
    keys::{is_reserved, MeasurementKey},
};
use crate::models::{BodyProfile, MeasurementSample, SizeChart, SizeComparison, SizeEvaluation};

/// Fit evaluation orchestrator
///
/// # Pipeline
/// 1. Drop reserved and non-numeric chart cells
/// 2. Normalize chart keys and pair them with profile fields
/// 3. Classify each pair under the fabric's band
/// 4. Reduce the verdicts to one overall label
///
/// Holds nothing but the read-only band table.
#[derive(Debug, Clone)]
pub struct FitEvaluator {
    classifier: Classifier,
}

impl FitEvaluator {
    pub fn new(bands: Arc<BandTable>) -> Self {
        Self {
            classifier: Classifier::new(bands),
        }
    }

    pub fn with_default_bands() -> Self {
        Self::new(Arc::new(BandTable::default()))
    }

    pub fn bands(&self) -> &BandTable {
        self.classifier.bands()
    }

    /// Pair the measurements of one size with the profile
    ///
    /// Order follows the chart. Cells that are reserved, non-numeric, unknown
    /// to the profile, or missing from it are skipped.
    pub fn collect_samples(
        &self,
        profile: &BodyProfile,
        measurements: &Map<String, Value>,
    ) -> Vec<MeasurementSample> {
        measurements
            .iter()
            .filter_map(|(chart_key, value)| {
                if is_reserved(chart_key) {
                    return None;
                }

                let Some(chart_value) = value.as_f64() else {
                    tracing::debug!("Skipping non-numeric chart value for {}: {}", chart_key, value);
                    return None;
                };

                let Some(key) = MeasurementKey::from_chart_key(chart_key) else {
                    tracing::debug!("Chart key {} has no profile counterpart", chart_key);
                    return None;
                };

                let user_value = profile.measurement(key)?;

                Some(MeasurementSample {
                    key,
                    user_value,
                    chart_value,
                })
            })
            .collect()
    }

    /// Evaluate one size's measurements
    pub fn evaluate_measurements(
        &self,
        profile: &BodyProfile,
        size_label: &str,
        measurements: &Map<String, Value>,
        fabric: FabricType,
        fallback_confidence: &str,
    ) -> SizeEvaluation {
        let verdicts: Vec<_> = self
            .collect_samples(profile, measurements)
            .iter()
            .map(|sample| self.classifier.classify(sample, fabric))
            .collect();

        let overall_confidence = derive_confidence(&verdicts, fallback_confidence);
        let summary = summarize(&verdicts);

        tracing::debug!(
            "Size {} ({}): {} measurements compared, overall {}",
            size_label,
            fabric,
            verdicts.len(),
            overall_confidence
        );

        SizeEvaluation {
            size_label: size_label.to_string(),
            fabric,
            verdicts,
            overall_confidence,
            summary,
            is_recommended: false,
        }
    }

    /// Evaluate a single size of a chart
    ///
    /// Returns `None` if the chart has no such size or the entry is not a
    /// measurement map.
    pub fn evaluate_size(
        &self,
        profile: &BodyProfile,
        chart: &SizeChart,
        size_label: &str,
        fabric_tag: &str,
        fallback_confidence: &str,
    ) -> Option<SizeEvaluation> {
        let measurements = chart.measurements(size_label)?;
        let fabric = FabricType::from_tag(fabric_tag);

        Some(self.evaluate_measurements(profile, size_label, measurements, fabric, fallback_confidence))
    }

    /// Evaluate every size of a chart, in chart order
    ///
    /// `recommended_size` is supplied by the caller and only echoed back and
    /// flagged; the evaluator does not pick a size.
    pub fn compare_sizes(
        &self,
        profile: &BodyProfile,
        chart: &SizeChart,
        fabric_tag: &str,
        fallback_confidence: &str,
        recommended_size: Option<&str>,
    ) -> SizeComparison {
        let fabric = FabricType::from_tag(fabric_tag);

        let sizes = chart
            .sizes
            .iter()
            .filter_map(|(size_label, entry)| {
                let Some(measurements) = entry.as_object() else {
                    tracing::warn!("Size {} is not a measurement map, skipping", size_label);
                    return None;
                };

                let mut evaluation =
                    self.evaluate_measurements(profile, size_label, measurements, fabric, fallback_confidence);
                evaluation.is_recommended = recommended_size == Some(size_label.as_str());
                Some(evaluation)
            })
            .collect();

        SizeComparison {
            fabric,
            recommended_size: recommended_size.map(str::to_string),
            sizes,
        }
    }
}

impl Default for FitEvaluator {
    fn default() -> Self {
        Self::with_default_bands()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FitCategory, OverallConfidence};
    use serde_json::json;

    fn create_profile() -> BodyProfile {
        BodyProfile {
            chest: Some(90.0),
            waist: Some(80.0),
            hip: Some(95.0),
            arm_length: Some(60.0),
            ..Default::default()
        }
    }

    fn create_chart() -> SizeChart {
        serde_json::from_value(json!({
            "S": { "size": "S", "chest": 85, "waist": 76, "hip": 92 },
            "M": { "size": "M", "chest": 91, "waist": 81, "hip": 96, "arm_length": 61 },
            "L": { "size": "L", "chest": 97, "waist": 86, "hip": 101 }
        }))
        .unwrap()
    }

    #[test]
    fn test_collect_samples_skips_reserved_and_non_numeric() {
        let evaluator = FitEvaluator::with_default_bands();
        let measurements = json!({
            "size": "M",
            "chest": 91,
            "waist": "81-84",
            "notes": 3,
            "arm_length": 61.5,
            "inseam": 80
        });

        let samples = evaluator.collect_samples(&create_profile(), measurements.as_object().unwrap());
        let keys: Vec<_> = samples.iter().map(|s| s.key).collect();

        // inseam is missing from the profile, notes has no profile field
        assert_eq!(keys, vec![MeasurementKey::Chest, MeasurementKey::ArmLength]);
        assert_eq!(samples[1].chart_value, 61.5);
        assert_eq!(samples[1].user_value, 60.0);
    }

    #[test]
    fn test_evaluate_size_perfect() {
        let evaluator = FitEvaluator::with_default_bands();
        let evaluation = evaluator
            .evaluate_size(&create_profile(), &create_chart(), "M", "normal", "Good")
            .unwrap();

        assert_eq!(evaluation.size_label, "M");
        assert_eq!(evaluation.verdicts.len(), 4);
        assert!(evaluation.verdicts.iter().all(|v| v.category == FitCategory::Perfect));
        assert_eq!(evaluation.overall_confidence, "Perfect");
        assert_eq!(evaluation.summary.overall, Some(OverallConfidence::Perfect));
    }

    #[test]
    fn test_evaluate_size_tight_and_loose() {
        let evaluator = FitEvaluator::with_default_bands();
        let profile = create_profile();
        let chart = create_chart();

        let small = evaluator.evaluate_size(&profile, &chart, "S", "normal", "Good").unwrap();
        assert_eq!(small.overall_confidence, "Tight");

        let large = evaluator.evaluate_size(&profile, &chart, "L", "normal", "Good").unwrap();
        assert_eq!(large.overall_confidence, "Loose");
    }

    #[test]
    fn test_verdicts_follow_chart_order() {
        let evaluator = FitEvaluator::with_default_bands();
        let evaluation = evaluator
            .evaluate_size(&create_profile(), &create_chart(), "M", "normal", "Good")
            .unwrap();

        let keys: Vec<_> = evaluation.verdicts.iter().map(|v| v.key).collect();
        assert_eq!(
            keys,
            vec![
                MeasurementKey::Chest,
                MeasurementKey::Waist,
                MeasurementKey::Hip,
                MeasurementKey::ArmLength
            ]
        );
    }

    #[test]
    fn test_unknown_size_returns_none() {
        let evaluator = FitEvaluator::with_default_bands();
        assert!(evaluator
            .evaluate_size(&create_profile(), &create_chart(), "XXL", "normal", "Good")
            .is_none());
    }

    #[test]
    fn test_empty_profile_uses_fallback() {
        let evaluator = FitEvaluator::with_default_bands();
        let evaluation = evaluator
            .evaluate_size(&BodyProfile::default(), &create_chart(), "M", "normal", "High")
            .unwrap();

        assert!(evaluation.verdicts.is_empty());
        assert_eq!(evaluation.overall_confidence, "High");
        assert_eq!(evaluation.summary.overall, None);
    }

    #[test]
    fn test_fabric_changes_outcome() {
        let evaluator = FitEvaluator::with_default_bands();
        let profile = create_profile();
        let chart = create_chart();

        // Small is tight in a normal fabric but fits a stretchy one
        let stretchy = evaluator.evaluate_size(&profile, &chart, "S", "stretchy", "Good").unwrap();
        assert_eq!(stretchy.fabric, FabricType::Stretchy);
        assert_eq!(stretchy.overall_confidence, "Tight");
        assert_eq!(stretchy.summary.tight, 1); // chest is -5
        assert_eq!(stretchy.summary.perfect, 2);

        // Medium has too little ease for a rigid fabric
        let rigid = evaluator.evaluate_size(&profile, &chart, "M", "rigid", "Good").unwrap();
        assert_eq!(rigid.overall_confidence, "Tight");
    }

    #[test]
    fn test_compare_sizes() {
        let evaluator = FitEvaluator::with_default_bands();
        let comparison = evaluator.compare_sizes(&create_profile(), &create_chart(), "normal", "Good", Some("M"));

        let labels: Vec<_> = comparison.sizes.iter().map(|s| s.size_label.as_str()).collect();
        assert_eq!(labels, vec!["S", "M", "L"]);
        assert_eq!(comparison.recommended_size.as_deref(), Some("M"));
        assert!(comparison.get("M").unwrap().is_recommended);
        assert!(!comparison.get("S").unwrap().is_recommended);
    }

    #[test]
    fn test_compare_skips_malformed_sizes() {
        let evaluator = FitEvaluator::with_default_bands();
        let chart: SizeChart = serde_json::from_value(json!({
            "M": { "chest": 91 },
            "notes": "runs small"
        }))
        .unwrap();

        let comparison = evaluator.compare_sizes(&create_profile(), &chart, "unknown", "Good", None);
        assert_eq!(comparison.sizes.len(), 1);
        assert_eq!(comparison.fabric, FabricType::Normal);
        assert!(comparison.recommended_size.is_none());
    }
}
