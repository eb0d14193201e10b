use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{BodyProfile, SizeChart};

/// Request to evaluate a single size
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateFitRequest {
    pub profile: BodyProfile,
    #[serde(alias = "size_chart")]
    pub size_chart: SizeChart,
    #[validate(length(min = 1))]
    #[serde(alias = "size_label")]
    pub size_label: String,
    #[serde(default, alias = "fabric_type")]
    pub fabric_type: Option<String>,
    /// Confidence from the chart analysis, used when nothing can be compared
    #[serde(default, alias = "ai_confidence")]
    pub ai_confidence: Option<String>,
}

/// Request to evaluate every size of a chart
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompareSizesRequest {
    pub profile: BodyProfile,
    #[serde(alias = "size_chart")]
    pub size_chart: SizeChart,
    #[serde(default, alias = "fabric_type")]
    pub fabric_type: Option<String>,
    #[serde(default, alias = "ai_confidence")]
    pub ai_confidence: Option<String>,
    #[validate(length(min = 1))]
    #[serde(default, alias = "recommended_size")]
    pub recommended_size: Option<String>,
}
