//! Sub-scores and impact estimates feeding the composite assessment.

use super::composition::MaterialComposition;
use super::geo::distance_km;
use super::shipping::ShippingMode;
use super::tables::{material_factors, normalize_material_key, MaterialFactors};

/// kg CO2e per kg of product per 1000 km, sea freight baseline.
pub const KG_CO2_PER_KG_PER_1000_KM: f64 = 0.58;
pub const MAX_DISTANCE_KM: f64 = 20_000.0;
pub const MIN_LOGISTICS_SCORE: f64 = 20.0;
pub const MAX_LOGISTICS_SCORE: f64 = 95.0;
pub const NEUTRAL_MATERIAL_SCORE: f64 = 50.0;

pub const WEIGHT_BASELINE_KG: f64 = 0.5;
pub const WEIGHT_PENALTY_PER_KG: f64 = 2.0;
pub const MAX_WEIGHT_IMPACT: f64 = 90.0;
pub const MIN_WEIGHT_IMPACT: f64 = 10.0;

pub const MATERIAL_WEIGHT: f64 = 0.50;
pub const LOGISTICS_WEIGHT: f64 = 0.30;
pub const WEIGHT_IMPACT_WEIGHT: f64 = 0.20;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn weighted_sum(
    composition: &MaterialComposition,
    weight_kg: f64,
    factor: impl Fn(&MaterialFactors) -> f64,
) -> f64 {
    composition
        .contributing()
        .map(|(material, share)| {
            let factors = material_factors(&normalize_material_key(material));
            weight_kg * share * factor(factors)
        })
        .sum()
}

/// CO2 from materials only (kg CO2e).
pub fn material_co2_kg(composition: &MaterialComposition, weight_kg: f64) -> f64 {
    round2(weighted_sum(composition, weight_kg, |f| f.co2_kg_per_kg))
}

/// Water used producing the materials (litres).
pub fn water_liters(composition: &MaterialComposition, weight_kg: f64) -> f64 {
    round2(weighted_sum(composition, weight_kg, |f| f.water_liters_per_kg))
}

/// Share-weighted average of per-material sustainability scores.
pub fn material_score(composition: &MaterialComposition) -> f64 {
    let (weighted, total_share) = composition.contributing().fold(
        (0.0, 0.0),
        |(weighted, total), (material, share)| {
            let score = material_factors(&normalize_material_key(material)).sustainability_score;
            (weighted + share * score, total + share)
        },
    );

    if total_share <= 0.0 {
        return NEUTRAL_MATERIAL_SCORE;
    }
    round2(weighted / total_share)
}

/// Transport CO2 (kg CO2e) for shipping `weight_kg` from origin to destination.
pub fn logistics_co2_kg(
    origin: &str,
    destination: &str,
    weight_kg: f64,
    mode: ShippingMode,
) -> f64 {
    logistics_co2_for_distance(distance_km(origin, destination), weight_kg, mode)
}

pub(crate) fn logistics_co2_for_distance(
    distance_km: f64,
    weight_kg: f64,
    mode: ShippingMode,
) -> f64 {
    let effective_km = (distance_km * mode.circuitry_factor()).min(MAX_DISTANCE_KM);
    let co2 =
        weight_kg * (effective_km / 1000.0) * KG_CO2_PER_KG_PER_1000_KM * mode.co2_multiplier();
    round2(co2)
}

/// Shipping sub-score: shorter routes and cleaner modes score higher, floored at 20.
pub fn logistics_score(origin: &str, destination: &str, mode: ShippingMode) -> f64 {
    logistics_score_for_distance(distance_km(origin, destination), mode)
}

pub(crate) fn logistics_score_for_distance(distance_km: f64, mode: ShippingMode) -> f64 {
    if distance_km <= 0.0 {
        return MAX_LOGISTICS_SCORE;
    }
    let ratio = (distance_km / 5000.0).min(3.0);
    let mode_penalty = ((mode.co2_multiplier() - 1.0) * 2.0).min(50.0);
    let score = MAX_LOGISTICS_SCORE - ratio * 25.0 - mode_penalty;
    round2(score.max(MIN_LOGISTICS_SCORE))
}

/// Weight sub-score: 90 up to the 0.5 kg baseline, then 2 points per extra kg down to 10.
pub fn weight_impact_score(weight_kg: f64) -> f64 {
    if weight_kg <= WEIGHT_BASELINE_KG {
        return MAX_WEIGHT_IMPACT;
    }
    let score = MAX_WEIGHT_IMPACT - (weight_kg - WEIGHT_BASELINE_KG) * WEIGHT_PENALTY_PER_KG;
    round2(score.clamp(MIN_WEIGHT_IMPACT, MAX_WEIGHT_IMPACT))
}

/// Weighted composite of the three sub-scores, clamped to 0-100.
pub fn composite_score(material: f64, logistics: f64, weight_impact: f64) -> f64 {
    let total = MATERIAL_WEIGHT * material
        + LOGISTICS_WEIGHT * logistics
        + WEIGHT_IMPACT_WEIGHT * weight_impact;
    round2(total.clamp(0.0, 100.0))
}
