use super::composition::MaterialComposition;
use super::shipping::ShippingMode;
use super::tables::{material_factors, normalize_material_key};

/// Human-readable rationale, in a fixed order: materials, mode, distance band, weight band.
pub fn explain(
    composition: &MaterialComposition,
    weight_kg: f64,
    distance_km: f64,
    mode: ShippingMode,
) -> Vec<String> {
    let mut lines: Vec<String> = composition
        .contributing()
        .filter_map(|(material, _)| material_factors(&normalize_material_key(material)).explanation)
        .map(str::to_string)
        .collect();

    if let Some(sentence) = mode_sentence(mode) {
        lines.push(sentence.to_string());
    }

    if distance_km > 10_000.0 {
        lines.push(
            "Very long-distance shipping (>10,000 km) substantially increases emissions."
                .to_string(),
        );
    } else if distance_km > 5_000.0 {
        lines.push("Long-distance shipping significantly increases the score.".to_string());
    } else if distance_km > 0.0 && distance_km < 500.0 {
        lines.push("Short shipping distance (<500 km) keeps logistics impact low.".to_string());
    }

    if weight_kg > 5.0 {
        lines.push(format!(
            "Heavy product ({weight_kg:.1} kg) adds significant weight penalty."
        ));
    } else if weight_kg < 0.3 {
        lines.push("Lightweight product contributes to a better sustainability score.".to_string());
    }

    lines
}

fn mode_sentence(mode: ShippingMode) -> Option<&'static str> {
    match mode {
        ShippingMode::Air => {
            Some("Air freight penalty applied (approx 50x higher CO2 than sea freight).")
        }
        ShippingMode::Road => Some("Road freight has ~5x higher CO2 than sea freight."),
        ShippingMode::Sea => Some("Sea freight is the most carbon-efficient shipping mode."),
        ShippingMode::Rail => Some("Rail freight is relatively efficient (~2x sea freight CO2)."),
        ShippingMode::Unlisted => None,
    }
}
