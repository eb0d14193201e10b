use std::sync::Arc;

use crate::core::aggregator::display_range;
use crate::core::bands::{BandTable, FabricToleranceBand, FabricType};
use crate::models::{FitCategory, FitVerdict, MeasurementSample};

/// Round to one decimal place, normalizing negative zero
#[inline]
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}

/// Classify one measurement against a tolerance band
///
/// Returns `(difference, category)` where `difference = chart - user` rounded
/// to one decimal. Only the band's perfect range gates the decision:
/// below it is tight, above it is loose. Never returns `Good`.
#[inline]
pub fn classify(user_value: f64, chart_value: f64, band: &FabricToleranceBand) -> (f64, FitCategory) {
    let difference = round_tenth(chart_value - user_value);

    let category = if difference >= band.perfect_min() && difference <= band.perfect_max() {
        FitCategory::Perfect
    } else if difference < band.perfect_min() {
        FitCategory::Tight
    } else {
        // Above perfect_max. NaN inputs also land here.
        FitCategory::Loose
    };

    (difference, category)
}

/// Measurement classifier bound to a band table
#[derive(Debug, Clone)]
pub struct Classifier {
    bands: Arc<BandTable>,
}

impl Classifier {
    pub fn new(bands: Arc<BandTable>) -> Self {
        Self { bands }
    }

    pub fn bands(&self) -> &BandTable {
        &self.bands
    }

    /// Classify a matched sample for the given fabric
    pub fn classify(&self, sample: &MeasurementSample, fabric: FabricType) -> FitVerdict {
        let (difference, category) = classify(sample.user_value, sample.chart_value, self.bands.band(fabric));

        FitVerdict {
            key: sample.key,
            user_value: sample.user_value,
            chart_value: sample.chart_value,
            difference,
            category,
            range: display_range(sample.chart_value),
        }
    }

    /// Classify with a raw fabric tag; unknown tags use the normal band
    pub fn classify_tagged(&self, sample: &MeasurementSample, fabric_tag: &str) -> FitVerdict {
        self.classify(sample, FabricType::from_tag(fabric_tag))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Arc::new(BandTable::default()))
    }
}
