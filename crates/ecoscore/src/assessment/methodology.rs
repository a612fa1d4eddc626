use super::scoring::{
    KG_CO2_PER_KG_PER_1000_KM, LOGISTICS_WEIGHT, MATERIAL_WEIGHT, WEIGHT_IMPACT_WEIGHT,
};
use super::shipping::ShippingMode;
use super::{DISCLAIMER_TEXT, METHODOLOGY_VERSION};
use serde::Serialize;
use std::collections::BTreeMap;

const DESCRIPTION: &str = "Indicative sustainability scoring and impact estimates for products \
     based on material composition, weight, and origin-to-destination logistics. \
     Not a certified LCA.";

const MATERIAL_SCORE_NOTE: &str = "Share-weighted average of per-material sustainability scores \
     (0-100); 50 when no share is positive.";

const LOGISTICS_SCORE_NOTE: &str = "95 minus up to 75 points for distance and up to 50 points \
     for carbon-intensive modes, floored at 20.";

const MATERIAL_CO2_COMPONENT: &str =
    "Material CO2: sum over (weight_kg * share * material_CO2_per_kg) for each material";

const LOGISTICS_CO2_COMPONENT: &str = "Logistics CO2: weight_kg * \
     (min(distance_km * circuitry, 20000) / 1000) * kg_CO2_per_kg_per_1000_km * mode_multiplier";

const WATER_NOTE: &str =
    "Mainly from cultivation/processing (e.g. cotton). Synthetic materials use lower factors.";

/// Published description of how assessments are computed.
#[derive(Debug, Clone, Serialize)]
pub struct Methodology {
    pub methodology_version: &'static str,
    pub description: &'static str,
    pub total_sustainability_score: CompositeFormula,
    pub co2_estimate_kg: Co2Method,
    pub water_usage_liters: FormulaNote,
    pub breakdown: BTreeMap<&'static str, &'static str>,
    pub shipping_modes: Vec<ShippingModeFactors>,
    pub disclaimer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompositeFormula {
    pub formula: &'static str,
    pub weights: BTreeMap<&'static str, f64>,
    pub range: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Co2Method {
    pub components: Vec<&'static str>,
    pub kg_co2_per_kg_per_1000_km: f64,
    pub unit: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormulaNote {
    pub formula: &'static str,
    pub unit: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShippingModeFactors {
    pub mode: ShippingMode,
    pub circuitry_factor: f64,
    pub co2_multiplier: f64,
}

impl Methodology {
    pub fn current() -> Self {
        let weights = BTreeMap::from([
            ("material", MATERIAL_WEIGHT),
            ("logistics", LOGISTICS_WEIGHT),
            ("weight", WEIGHT_IMPACT_WEIGHT),
        ]);

        let breakdown = BTreeMap::from([
            ("material_score", MATERIAL_SCORE_NOTE),
            ("logistics_score", LOGISTICS_SCORE_NOTE),
            (
                "weight_impact",
                "90 up to 0.5 kg, then 2 points lower per additional kg, floored at 10.",
            ),
            ("weight_penalty", "100 minus weight_impact."),
        ]);

        let shipping_modes = [
            ShippingMode::Sea,
            ShippingMode::Rail,
            ShippingMode::Road,
            ShippingMode::Air,
        ]
        .into_iter()
        .map(|mode| ShippingModeFactors {
            mode,
            circuitry_factor: mode.circuitry_factor(),
            co2_multiplier: mode.co2_multiplier(),
        })
        .collect();

        Self {
            methodology_version: METHODOLOGY_VERSION,
            description: DESCRIPTION,
            total_sustainability_score: CompositeFormula {
                formula: "0.50 * material_score + 0.30 * logistics_score + 0.20 * weight_impact",
                weights,
                range: "0-100, higher is better",
            },
            co2_estimate_kg: Co2Method {
                components: vec![MATERIAL_CO2_COMPONENT, LOGISTICS_CO2_COMPONENT],
                kg_co2_per_kg_per_1000_km: KG_CO2_PER_KG_PER_1000_KM,
                unit: "kg CO2 equivalent",
            },
            water_usage_liters: FormulaNote {
                formula: "Sum over (weight_kg * share * water_liters_per_kg) for each material",
                unit: "liters",
                note: WATER_NOTE,
            },
            breakdown,
            shipping_modes,
            disclaimer: DISCLAIMER_TEXT,
        }
    }
}
