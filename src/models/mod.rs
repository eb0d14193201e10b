// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BodyProfile, FitCategory, FitSummary, FitVerdict, MeasurementRange, MeasurementSample, OverallConfidence,
    SizeChart, SizeComparison, SizeEvaluation,
};
pub use requests::{CompareSizesRequest, EvaluateFitRequest};
pub use responses::{ErrorResponse, FabricBandResponse, FabricsResponse, HealthResponse};
