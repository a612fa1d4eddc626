//! Deterministic impact assessment for a single product.
//!
//! Every function here is pure: unknown materials fall back to the `default` factor row,
//! unknown countries fall back to a stable pseudo-distance, and unknown shipping modes use
//! neutral factors. Input sanity (positive weight, non-empty names) is checked by
//! [`AssessmentRequest::validate`] at the calling boundary, never inside the engine.

pub mod batch;
mod cbam;
mod composition;
mod explanation;
pub mod geo;
mod methodology;
pub mod scoring;
mod shipping;
pub mod tables;

#[cfg(test)]
mod tests;

pub use batch::{BatchAssessmentImporter, BatchImportError};
pub use cbam::{cbam_analysis, CbamAnalysis};
pub use composition::MaterialComposition;
pub use explanation::explain;
pub use methodology::Methodology;
pub use shipping::ShippingMode;

use scoring::{
    composite_score, logistics_co2_for_distance, logistics_score_for_distance, material_co2_kg,
    material_score, round2, water_liters, weight_impact_score,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const METHODOLOGY_VERSION: &str = "v1.2.0";

/// Heaviest product accepted at the boundary; keeps every derived figure finite.
pub const MAX_WEIGHT_KG: f64 = 1_000_000.0;

pub const DISCLAIMER_TEXT: &str =
    "Indicative model-based estimate; not for regulatory CBAM filings.";

/// Inbound product description as accepted from HTTP, CLI, or CSV callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub product_name: String,
    pub material_composition: MaterialComposition,
    pub weight_kg: f64,
    pub origin_country: String,
    pub destination_country: String,
    #[serde(default)]
    pub shipping_mode: ShippingMode,
}

impl AssessmentRequest {
    /// Boundary checks the engine relies on but never performs itself.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_name.trim().is_empty() {
            return Err(ValidationError::EmptyProductName);
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(ValidationError::NonPositiveWeight(self.weight_kg));
        }
        if self.weight_kg > MAX_WEIGHT_KG {
            return Err(ValidationError::WeightTooLarge(self.weight_kg));
        }
        if self.origin_country.trim().is_empty() {
            return Err(ValidationError::EmptyCountry("origin_country"));
        }
        if self.destination_country.trim().is_empty() {
            return Err(ValidationError::EmptyCountry("destination_country"));
        }
        if self.material_composition.is_empty() {
            return Err(ValidationError::EmptyComposition);
        }
        for (material, share) in self.material_composition.iter() {
            if material.trim().is_empty() {
                return Err(ValidationError::EmptyMaterialName);
            }
            if !share.is_finite() || !(0.0..=1.0).contains(&share) {
                return Err(ValidationError::ShareOutOfRange {
                    material: material.to_string(),
                    share,
                });
            }
        }
        Ok(())
    }

    pub fn assess(&self) -> AssessmentResult {
        assess_impact(
            &self.product_name,
            &self.material_composition,
            self.weight_kg,
            &self.origin_country,
            &self.destination_country,
            self.shipping_mode,
        )
    }
}

/// Rejections raised before an assessment reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("product_name must not be empty")]
    EmptyProductName,
    #[error("weight_kg must be greater than 0 (found {0})")]
    NonPositiveWeight(f64),
    #[error("weight_kg must not exceed {max} (found {0})", max = MAX_WEIGHT_KG)]
    WeightTooLarge(f64),
    #[error("{0} must not be empty")]
    EmptyCountry(&'static str),
    #[error("material_composition must list at least one material")]
    EmptyComposition,
    #[error("material names must not be empty")]
    EmptyMaterialName,
    #[error("share for '{material}' must be between 0 and 1 (found {share})")]
    ShareOutOfRange { material: String, share: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

/// Per-dimension scores. `weight_penalty` and `weight_impact` are complements (sum to 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub material_score: f64,
    pub logistics_score: f64,
    pub weight_penalty: f64,
    pub weight_impact: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub product_name: String,
    pub total_sustainability_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub co2_estimate_kg: f64,
    pub water_usage_liters: f64,
    pub breakdown: Breakdown,
    pub cbam_analysis: CbamAnalysis,
    /// Mirrors `cbam_analysis.is_relevant` for consumers of the flat response shape.
    pub cbam_relevant: bool,
    pub explanation: Vec<String>,
    pub methodology_version: String,
    pub disclaimer: String,
    /// Mirrors `disclaimer`.
    pub limitations: String,
}

/// Score a product: material 50%, logistics 30%, weight 20%.
pub fn assess_impact(
    product_name: &str,
    composition: &MaterialComposition,
    weight_kg: f64,
    origin_country: &str,
    destination_country: &str,
    mode: ShippingMode,
) -> AssessmentResult {
    let distance = geo::distance_km(origin_country, destination_country);

    let material = material_score(composition);
    let logistics = logistics_score_for_distance(distance, mode);
    let weight_impact = weight_impact_score(weight_kg);
    let total = composite_score(material, logistics, weight_impact);

    let co2_materials = material_co2_kg(composition, weight_kg);
    let co2_logistics = logistics_co2_for_distance(distance, weight_kg, mode);
    let co2_total = round2(co2_materials + co2_logistics);

    let cbam = cbam_analysis(composition);
    let explanation = explain(composition, weight_kg, distance, mode);

    debug!(
        product = product_name,
        %mode,
        distance_km = distance,
        total_score = total,
        co2_kg = co2_total,
        "assessed product impact"
    );

    AssessmentResult {
        product_name: product_name.to_string(),
        total_sustainability_score: total,
        confidence_level: ConfidenceLevel::Medium,
        co2_estimate_kg: co2_total,
        water_usage_liters: water_liters(composition, weight_kg),
        breakdown: Breakdown {
            material_score: material,
            logistics_score: logistics,
            weight_penalty: round2(100.0 - weight_impact),
            weight_impact,
        },
        cbam_relevant: cbam.is_relevant,
        cbam_analysis: cbam,
        explanation,
        methodology_version: METHODOLOGY_VERSION.to_string(),
        disclaimer: DISCLAIMER_TEXT.to_string(),
        limitations: DISCLAIMER_TEXT.to_string(),
    }
}
