// Fit scoring engine
pub mod aggregator;
pub mod bands;
pub mod classifier;
pub mod evaluator;
pub mod keys;

pub use aggregator::{derive_confidence, derive_overall, display_range, summarize};
pub use bands::{BandError, BandTable, FabricToleranceBand, FabricType};
pub use classifier::{classify, Classifier};
pub use evaluator::FitEvaluator;
pub use keys::{normalize_key, MeasurementKey};
