use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Material shares by weight, kept in declaration order.
///
/// Shares are independent weighted contributions and are never renormalized; a partial
/// composition (shares summing below 1.0) simply under-weights the CO2 and water figures.
/// Non-positive shares are ignored by every consumer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialComposition {
    entries: Vec<(String, f64)>,
}

impl MaterialComposition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, material: impl Into<String>, share: f64) -> Self {
        self.push(material, share);
        self
    }

    /// Set a material's share. A repeated name keeps its first position and takes the new share.
    pub fn push(&mut self, material: impl Into<String>, share: f64) {
        let material = material.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == material) {
            Some(entry) => entry.1 = share,
            None => self.entries.push((material, share)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(material, share)| (material.as_str(), *share))
    }

    /// Entries with a strictly positive share, in declaration order.
    pub fn contributing(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter().filter(|(_, share)| *share > 0.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for MaterialComposition {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut composition = Self::new();
        for (material, share) in iter {
            composition.push(material, share);
        }
        composition
    }
}

impl Serialize for MaterialComposition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (material, share) in &self.entries {
            map.serialize_entry(material, share)?;
        }
        map.end()
    }
}

struct CompositionVisitor;

impl<'de> Visitor<'de> for CompositionVisitor {
    type Value = MaterialComposition;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of material name to share")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut composition = MaterialComposition::new();
        while let Some((material, share)) = access.next_entry::<String, f64>()? {
            composition.push(material, share);
        }
        Ok(composition)
    }
}

impl<'de> Deserialize<'de> for MaterialComposition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CompositionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialization_preserves_document_order() {
        let composition: MaterialComposition =
            serde_json::from_str(r#"{"wool": 0.2, "cotton": 0.5, "bamboo": 0.3}"#)
                .expect("composition parses");
        let names: Vec<&str> = composition.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["wool", "cotton", "bamboo"]);
    }

    #[test]
    fn contributing_skips_non_positive_shares() {
        let composition = MaterialComposition::new()
            .with("cotton", 0.0)
            .with("steel", -0.4)
            .with("hemp", 0.6);
        let names: Vec<&str> = composition.contributing().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["hemp"]);
        assert_eq!(composition.len(), 3);
    }

    #[test]
    fn repeated_json_keys_keep_first_position_and_last_share() {
        let composition: MaterialComposition =
            serde_json::from_str(r#"{"cotton": 0.5, "wool": 0.2, "cotton": 0.3}"#)
                .expect("composition parses");
        let entries: Vec<(&str, f64)> = composition.iter().collect();
        assert_eq!(entries, vec![("cotton", 0.3), ("wool", 0.2)]);
    }

    #[test]
    fn repeated_material_counts_once_in_co2() {
        let composition: MaterialComposition =
            serde_json::from_str(r#"{"cotton": 0.5, "cotton": 0.5}"#).expect("composition parses");
        assert_eq!(composition.len(), 1);
        assert_eq!(crate::assessment::scoring::material_co2_kg(&composition, 1.0), 2.6);
    }

    #[test]
    fn collecting_pairs_merges_repeats() {
        let composition: MaterialComposition =
            vec![("hemp", 0.4), ("hemp", 0.6)].into_iter().collect();
        let entries: Vec<(&str, f64)> = composition.iter().collect();
        assert_eq!(entries, vec![("hemp", 0.6)]);
    }

    #[test]
    fn serializes_as_json_object() {
        let composition = MaterialComposition::new().with("linen", 1.0);
        let json = serde_json::to_string(&composition).expect("serializes");
        assert_eq!(json, r#"{"linen":1.0}"#);
    }
}
