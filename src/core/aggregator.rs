use crate::models::{FitCategory, FitSummary, FitVerdict, MeasurementRange, OverallConfidence};

/// Display heuristic: acceptable range is +/-5% of the chart value
const DISPLAY_RANGE_LOWER: f64 = 0.95;
const DISPLAY_RANGE_UPPER: f64 = 1.05;

/// Derive the overall fit of a size from its per-measurement verdicts
///
/// Priority, regardless of counts:
/// 1. any tight -> Tight
/// 2. any loose -> Loose
/// 3. all perfect -> Perfect
/// 4. otherwise -> Good
///
/// A single tight measurement makes the garment unwearable, so it is never
/// averaged away by the others. Returns `None` for an empty list.
pub fn derive_overall(verdicts: &[FitVerdict]) -> Option<OverallConfidence> {
    overall_from_categories(verdicts.iter().map(|v| v.category))
}

/// Same rule as [`derive_overall`], over bare categories
pub fn overall_from_categories<I>(categories: I) -> Option<OverallConfidence>
where
    I: IntoIterator<Item = FitCategory>,
{
    let mut any = false;
    let mut any_tight = false;
    let mut any_loose = false;
    let mut all_perfect = true;

    for category in categories {
        any = true;
        match category {
            FitCategory::Tight => any_tight = true,
            FitCategory::Loose => any_loose = true,
            FitCategory::Good => all_perfect = false,
            FitCategory::Perfect => {}
        }
    }

    if !any {
        return None;
    }

    let overall = if any_tight {
        OverallConfidence::Tight
    } else if any_loose {
        OverallConfidence::Loose
    } else if all_perfect {
        OverallConfidence::Perfect
    } else {
        OverallConfidence::Good
    };

    Some(overall)
}

/// Overall confidence label for a size
///
/// With no verdicts nothing could be compared, so the externally supplied
/// `fallback` is returned unchanged.
pub fn derive_confidence(verdicts: &[FitVerdict], fallback: &str) -> String {
    match derive_overall(verdicts) {
        Some(overall) => overall.as_str().to_string(),
        None => fallback.to_string(),
    }
}

/// Category counts and overall label, for the size comparison view
pub fn summarize(verdicts: &[FitVerdict]) -> FitSummary {
    let mut summary = verdicts.iter().fold(FitSummary::default(), |mut acc, v| {
        match v.category {
            FitCategory::Perfect => acc.perfect += 1,
            FitCategory::Good => acc.good += 1,
            FitCategory::Tight => acc.tight += 1,
            FitCategory::Loose => acc.loose += 1,
        }
        acc
    });

    summary.overall = derive_overall(verdicts);
    summary
}

/// Human-readable range for a chart value: `[floor(c * 0.95), ceil(c * 1.05)]`
///
/// Presentation only. This is unrelated to the fabric bands used by the
/// classifier and must not be used to decide fit.
#[inline]
pub fn display_range(chart_value: f64) -> MeasurementRange {
    MeasurementRange {
        min: (chart_value * DISPLAY_RANGE_LOWER).floor(),
        max: (chart_value * DISPLAY_RANGE_UPPER).ceil(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keys::MeasurementKey;

    fn verdict(category: FitCategory) -> FitVerdict {
        FitVerdict {
            key: MeasurementKey::Chest,
            user_value: 90.0,
            chart_value: 92.0,
            difference: 2.0,
            category,
            range: display_range(92.0),
        }
    }

    fn verdicts(categories: &[FitCategory]) -> Vec<FitVerdict> {
        categories.iter().copied().map(verdict).collect()
    }

    use FitCategory::{Good, Loose, Perfect, Tight};

    #[test]
    fn test_empty_returns_fallback() {
        assert_eq!(derive_confidence(&[], "High"), "High");
        assert_eq!(derive_confidence(&[], ""), "");
        assert_eq!(derive_overall(&[]), None);
    }

    #[test]
    fn test_priority_scenarios() {
        assert_eq!(derive_confidence(&verdicts(&[Perfect, Perfect, Tight]), "x"), "Tight");
        assert_eq!(derive_confidence(&verdicts(&[Perfect, Loose, Good]), "x"), "Loose");
        assert_eq!(derive_confidence(&verdicts(&[Perfect, Perfect, Perfect]), "x"), "Perfect");
        assert_eq!(derive_confidence(&verdicts(&[Perfect, Good]), "x"), "Good");
    }

    #[test]
    fn test_single_tight_dominates() {
        let mut categories = vec![Perfect; 9];
        categories.push(Tight);
        assert_eq!(derive_overall(&verdicts(&categories)), Some(OverallConfidence::Tight));
    }

    #[test]
    fn test_tight_dominates_loose() {
        assert_eq!(derive_overall(&verdicts(&[Loose, Loose, Tight])), Some(OverallConfidence::Tight));
        assert_eq!(derive_overall(&verdicts(&[Loose, Good])), Some(OverallConfidence::Loose));
    }

    #[test]
    fn test_all_good_is_good() {
        assert_eq!(derive_overall(&verdicts(&[Good, Good])), Some(OverallConfidence::Good));
    }

    #[test]
    fn test_summarize_counts() {
        let summary = summarize(&verdicts(&[Perfect, Perfect, Loose, Tight, Good]));

        assert_eq!(summary.perfect, 2);
        assert_eq!(summary.good, 1);
        assert_eq!(summary.loose, 1);
        assert_eq!(summary.tight, 1);
        assert_eq!(summary.total(), 5);
        assert_eq!(summary.overall, Some(OverallConfidence::Tight));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.overall, None);
    }

    #[test]
    fn test_display_range() {
        let range = display_range(100.0);
        assert_eq!((range.min, range.max), (95.0, 105.0));

        let range = display_range(91.0);
        assert_eq!((range.min, range.max), (86.0, 96.0));

        let range = display_range(86.0);
        assert_eq!((range.min, range.max), (81.0, 91.0));
    }
}
