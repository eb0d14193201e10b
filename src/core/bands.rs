use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while building the fabric band table
///
/// These are configuration mistakes and are meant to stop the process at
/// startup, never to surface during evaluation.
#[derive(Debug, Error, PartialEq)]
pub enum BandError {
    #[error("{fabric} band has a non-finite threshold")]
    NonFinite { fabric: FabricType },

    #[error(
        "{fabric} band thresholds out of order: expected tight ({tight}) <= perfect_min ({perfect_min}) <= perfect_max ({perfect_max}) <= loose ({loose})"
    )]
    Inverted {
        fabric: FabricType,
        tight: f64,
        perfect_min: f64,
        perfect_max: f64,
        loose: f64,
    },
}

/// Fabric stretch class of a garment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FabricType {
    /// Woven, no stretch
    Rigid,
    #[default]
    Normal,
    /// Elastic
    Stretchy,
}

impl FabricType {
    pub const ALL: [FabricType; 3] = [FabricType::Rigid, FabricType::Normal, FabricType::Stretchy];

    /// Resolve a fabric tag. Anything other than an exact known tag is `Normal`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "rigid" => FabricType::Rigid,
            "stretchy" => FabricType::Stretchy,
            "normal" => FabricType::Normal,
            other => {
                tracing::debug!("Unrecognized fabric type {:?}, using normal band", other);
                FabricType::Normal
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FabricType::Rigid => "rigid",
            FabricType::Normal => "normal",
            FabricType::Stretchy => "stretchy",
        }
    }
}

impl fmt::Display for FabricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ease offsets (cm, chart minus body) that define fit for one fabric class
///
/// Only `perfect_min`/`perfect_max` decide the category. `tight_threshold` and
/// `loose_threshold` describe the band for range display and are never used
/// as cut points during classification. Do not change that without product
/// sign-off: the advertised thresholds and the classifier disagree on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricToleranceBand {
    perfect_min: f64,
    perfect_max: f64,
    tight_threshold: f64,
    loose_threshold: f64,
}

impl FabricToleranceBand {
    pub const RIGID: FabricToleranceBand = FabricToleranceBand {
        perfect_min: 2.0,
        perfect_max: 4.0,
        tight_threshold: 0.0,
        loose_threshold: 6.0,
    };

    pub const NORMAL: FabricToleranceBand = FabricToleranceBand {
        perfect_min: -1.5,
        perfect_max: 2.0,
        tight_threshold: -3.0,
        loose_threshold: 4.0,
    };

    pub const STRETCHY: FabricToleranceBand = FabricToleranceBand {
        perfect_min: -4.0,
        perfect_max: 1.0,
        tight_threshold: -6.0,
        loose_threshold: 3.0,
    };

    /// Build a band, checking `tight <= perfect_min <= perfect_max <= loose`
    pub fn new(
        fabric: FabricType,
        perfect_min: f64,
        perfect_max: f64,
        tight_threshold: f64,
        loose_threshold: f64,
    ) -> Result<Self, BandError> {
        let band = Self {
            perfect_min,
            perfect_max,
            tight_threshold,
            loose_threshold,
        };
        band.validate(fabric)?;
        Ok(band)
    }

    /// Built-in band for a fabric class
    pub fn default_for(fabric: FabricType) -> Self {
        match fabric {
            FabricType::Rigid => Self::RIGID,
            FabricType::Normal => Self::NORMAL,
            FabricType::Stretchy => Self::STRETCHY,
        }
    }

    pub fn validate(&self, fabric: FabricType) -> Result<(), BandError> {
        let values = [
            self.tight_threshold,
            self.perfect_min,
            self.perfect_max,
            self.loose_threshold,
        ];

        if values.iter().any(|v| !v.is_finite()) {
            return Err(BandError::NonFinite { fabric });
        }

        if values.windows(2).any(|w| w[0] > w[1]) {
            return Err(BandError::Inverted {
                fabric,
                tight: self.tight_threshold,
                perfect_min: self.perfect_min,
                perfect_max: self.perfect_max,
                loose: self.loose_threshold,
            });
        }

        Ok(())
    }

    pub fn perfect_min(&self) -> f64 {
        self.perfect_min
    }

    pub fn perfect_max(&self) -> f64 {
        self.perfect_max
    }

    pub fn tight_threshold(&self) -> f64 {
        self.tight_threshold
    }

    pub fn loose_threshold(&self) -> f64 {
        self.loose_threshold
    }
}

/// One validated band per fabric class
///
/// Built once at startup and shared read-only (see `FitEvaluator`).
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    rigid: FabricToleranceBand,
    normal: FabricToleranceBand,
    stretchy: FabricToleranceBand,
}

impl BandTable {
    pub fn new(
        rigid: FabricToleranceBand,
        normal: FabricToleranceBand,
        stretchy: FabricToleranceBand,
    ) -> Result<Self, BandError> {
        rigid.validate(FabricType::Rigid)?;
        normal.validate(FabricType::Normal)?;
        stretchy.validate(FabricType::Stretchy)?;

        Ok(Self {
            rigid,
            normal,
            stretchy,
        })
    }

    #[inline]
    pub fn band(&self, fabric: FabricType) -> &FabricToleranceBand {
        match fabric {
            FabricType::Rigid => &self.rigid,
            FabricType::Normal => &self.normal,
            FabricType::Stretchy => &self.stretchy,
        }
    }

    /// Band for a raw fabric tag, falling back to the normal band
    pub fn band_for_tag(&self, tag: &str) -> &FabricToleranceBand {
        self.band(FabricType::from_tag(tag))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FabricType, &FabricToleranceBand)> {
        FabricType::ALL.into_iter().map(move |f| (f, self.band(f)))
    }
}

impl Default for BandTable {
    fn default() -> Self {
        Self {
            rigid: FabricToleranceBand::RIGID,
            normal: FabricToleranceBand::NORMAL,
            stretchy: FabricToleranceBand::STRETCHY,
        }
    }
}
