use super::BatchImportError;
use crate::assessment::{AssessmentRequest, MaterialComposition, ShippingMode};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug, Deserialize)]
struct BatchRow {
    product_name: String,
    materials: String,
    weight_kg: f64,
    origin_country: String,
    destination_country: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    shipping_mode: Option<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<AssessmentRequest>, BatchImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut requests = Vec::new();

    for (index, record) in csv_reader.deserialize::<BatchRow>().enumerate() {
        let row = record?;
        let material_composition =
            parse_materials(&row.materials).map_err(|detail| BatchImportError::Composition {
                row: index + 1,
                detail,
            })?;

        requests.push(AssessmentRequest {
            product_name: row.product_name,
            material_composition,
            weight_kg: row.weight_kg,
            origin_country: row.origin_country,
            destination_country: row.destination_country,
            shipping_mode: row
                .shipping_mode
                .as_deref()
                .map(ShippingMode::from_label)
                .unwrap_or_default(),
        });
    }

    Ok(requests)
}

/// Parse `cotton:0.6;polyester:0.4` into an ordered composition.
pub(crate) fn parse_materials(raw: &str) -> Result<MaterialComposition, String> {
    let mut composition = MaterialComposition::new();
    for pair in raw.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
        let (name, share) = pair
            .split_once(':')
            .ok_or_else(|| format!("expected name:share, found '{pair}'"))?;
        let (name, share) = (name.trim(), share.trim());
        let share = share
            .parse::<f64>()
            .map_err(|_| format!("share '{share}' for '{name}' is not a number"))?;
        composition.push(name, share);
    }
    Ok(composition)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
