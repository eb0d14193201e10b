use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart keys that label a size rather than measure it
pub const RESERVED_KEYS: &[&str] = &["size"];

/// Body measurement dimensions a profile can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeasurementKey {
    Chest,
    Waist,
    Hip,
    Shoulder,
    ArmLength,
    LegLength,
    ThighCircumference,
    Inseam,
    Height,
    Weight,
}

impl MeasurementKey {
    pub const ALL: [MeasurementKey; 10] = [
        MeasurementKey::Chest,
        MeasurementKey::Waist,
        MeasurementKey::Hip,
        MeasurementKey::Shoulder,
        MeasurementKey::ArmLength,
        MeasurementKey::LegLength,
        MeasurementKey::ThighCircumference,
        MeasurementKey::Inseam,
        MeasurementKey::Height,
        MeasurementKey::Weight,
    ];

    /// Profile field name, as used on the wire
    pub fn field_name(&self) -> &'static str {
        match self {
            MeasurementKey::Chest => "chest",
            MeasurementKey::Waist => "waist",
            MeasurementKey::Hip => "hip",
            MeasurementKey::Shoulder => "shoulder",
            MeasurementKey::ArmLength => "armLength",
            MeasurementKey::LegLength => "legLength",
            MeasurementKey::ThighCircumference => "thighCircumference",
            MeasurementKey::Inseam => "inseam",
            MeasurementKey::Height => "height",
            MeasurementKey::Weight => "weight",
        }
    }

    /// Map a normalized (camelCase) key onto a profile field
    pub fn from_field(field: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.field_name() == field)
    }

    /// Map a raw size chart key onto a profile field
    ///
    /// Returns `None` for reserved labels and keys with no profile counterpart.
    pub fn from_chart_key(chart_key: &str) -> Option<Self> {
        if is_reserved(chart_key) {
            return None;
        }
        Self::from_field(&normalize_key(chart_key))
    }
}

impl fmt::Display for MeasurementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Convert a separator-joined chart key to the profile's casing
///
/// Each `_` is dropped and the character after it is uppercased:
/// `arm_length` -> `armLength`, `thigh_circumference` -> `thighCircumference`.
pub fn normalize_key(key: &str) -> String {
    let mut normalized = String::with_capacity(key.len());
    let mut upper_next = false;

    for ch in key.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            normalized.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            normalized.push(ch);
        }
    }

    normalized
}

#[inline]
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}
