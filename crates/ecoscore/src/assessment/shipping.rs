use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Freight mode for the origin-to-destination leg.
///
/// Unrecognized labels parse to [`ShippingMode::Unlisted`], which behaves as a straight-line,
/// sea-baseline route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShippingMode {
    #[default]
    Sea,
    Road,
    Rail,
    Air,
    Unlisted,
}

impl ShippingMode {
    pub fn from_label(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "sea" => Self::Sea,
            "road" => Self::Road,
            "rail" => Self::Rail,
            "air" => Self::Air,
            _ => Self::Unlisted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sea => "sea",
            Self::Road => "road",
            Self::Rail => "rail",
            Self::Air => "air",
            Self::Unlisted => "unlisted",
        }
    }

    /// Inflation applied to great-circle distance to approximate the real route.
    pub fn circuitry_factor(&self) -> f64 {
        match self {
            Self::Sea => 1.5,
            Self::Road => 1.2,
            Self::Air | Self::Rail | Self::Unlisted => 1.0,
        }
    }

    /// CO2 intensity relative to sea freight.
    pub fn co2_multiplier(&self) -> f64 {
        match self {
            Self::Sea | Self::Unlisted => 1.0,
            Self::Rail => 2.0,
            Self::Road => 5.0,
            Self::Air => 50.0,
        }
    }
}

impl From<&str> for ShippingMode {
    fn from(value: &str) -> Self {
        Self::from_label(value)
    }
}

impl fmt::Display for ShippingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ShippingMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ShippingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::from_label).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!(ShippingMode::from_label(" AIR "), ShippingMode::Air);
        assert_eq!(ShippingMode::from_label("Rail"), ShippingMode::Rail);
        assert_eq!(ShippingMode::from_label(""), ShippingMode::Sea);
        assert_eq!(ShippingMode::from_label("pipeline"), ShippingMode::Unlisted);
    }

    #[test]
    fn unlisted_mode_uses_neutral_factors() {
        let mode = ShippingMode::Unlisted;
        assert_eq!(mode.circuitry_factor(), 1.0);
        assert_eq!(mode.co2_multiplier(), 1.0);
    }

    #[test]
    fn deserializes_null_as_sea() {
        let mode: ShippingMode = serde_json::from_str("null").expect("null parses");
        assert_eq!(mode, ShippingMode::Sea);
        let mode: ShippingMode = serde_json::from_str("\"Road\"").expect("label parses");
        assert_eq!(mode, ShippingMode::Road);
    }
}
