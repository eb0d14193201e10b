//! SizeFit - fit scoring engine for garment size recommendations
//!
//! Compares a user's body measurements with a product's size chart,
//! classifies every measurement under fabric-specific tolerance bands and
//! reduces the verdicts to one overall fit label per size.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{classify, derive_confidence, normalize_key, BandTable, FabricType, FitEvaluator};
pub use models::{BodyProfile, FitCategory, FitVerdict, OverallConfidence, SizeChart, SizeComparison, SizeEvaluation};
