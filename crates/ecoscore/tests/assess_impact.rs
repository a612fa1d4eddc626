use ecoscore::assessment::geo::distance_km;
use ecoscore::assessment::scoring::{logistics_co2_kg, logistics_score};
use ecoscore::assessment::Methodology;
use ecoscore::{assess_impact, cbam_analysis, AssessmentRequest, MaterialComposition, ShippingMode};

fn request(json: &str) -> AssessmentRequest {
    serde_json::from_str(json).expect("request parses")
}

#[test]
fn json_request_round_trips_through_engine() {
    let request = request(
        r#"{
            "product_name": "Eco-friendly T-shirt",
            "material_composition": {"Organic Cotton": 1.0},
            "weight_kg": 0.2,
            "origin_country": "PT",
            "destination_country": "DE",
            "shipping_mode": "SEA"
        }"#,
    );
    request.validate().expect("request is valid");

    let result = request.assess();
    assert_eq!(result.breakdown.material_score, 74.0);
    assert_eq!(
        result.explanation.first().map(String::as_str),
        Some("Organic cotton uses less water and no synthetic pesticides.")
    );

    let body = serde_json::to_value(&result).expect("serializes");
    for field in [
        "product_name",
        "total_sustainability_score",
        "confidence_level",
        "co2_estimate_kg",
        "water_usage_liters",
        "breakdown",
        "cbam_analysis",
        "cbam_relevant",
        "explanation",
        "methodology_version",
        "disclaimer",
        "limitations",
    ] {
        assert!(body.get(field).is_some(), "missing field {field}");
    }
}

#[test]
fn total_score_stays_within_bounds_across_inputs() {
    let compositions = [
        MaterialComposition::new().with("leather", 1.0),
        MaterialComposition::new().with("hemp", 1.0),
        MaterialComposition::new().with("steel", 0.9).with("wool", 0.9),
        MaterialComposition::new().with("unknown", 0.0),
    ];
    let routes = [("CN", "US"), ("DE", "DE"), ("Atlantis", "BR"), ("AU", "GB")];
    let modes = [
        ShippingMode::Sea,
        ShippingMode::Road,
        ShippingMode::Rail,
        ShippingMode::Air,
        ShippingMode::Unlisted,
    ];

    for composition in &compositions {
        for (origin, destination) in routes {
            for mode in modes {
                for weight in [0.01, 0.5, 3.0, 75.0, 10_000.0] {
                    let result =
                        assess_impact("probe", composition, weight, origin, destination, mode);
                    let total = result.total_sustainability_score;
                    assert!((0.0..=100.0).contains(&total), "total {total} out of range");
                    assert!(result.co2_estimate_kg >= 0.0);
                    assert!(result.water_usage_liters >= 0.0);
                    assert_eq!(
                        result.breakdown.weight_penalty + result.breakdown.weight_impact,
                        100.0
                    );
                }
            }
        }
    }
}

#[test]
fn unlisted_mode_behaves_like_direct_sea_route() {
    let mode = ShippingMode::from_label("hovercraft");
    assert_eq!(mode, ShippingMode::Unlisted);

    assert_eq!(
        logistics_score("IN", "NL", mode),
        logistics_score("IN", "NL", ShippingMode::Sea)
    );
    let expected_co2 = (distance_km("IN", "NL") / 1000.0 * 0.58 * 100.0).round() / 100.0;
    assert_eq!(logistics_co2_kg("IN", "NL", 1.0, mode), expected_co2);

    let composition = MaterialComposition::new().with("linen", 1.0);
    let result = assess_impact("x", &composition, 1.0, "IN", "NL", mode);
    assert!(result
        .explanation
        .iter()
        .all(|line| !line.contains("freight")));
}

#[test]
fn standalone_cbam_analysis_matches_assessment() {
    let composition = MaterialComposition::new()
        .with("Aluminum", 0.4)
        .with("rubber", 0.6);
    let standalone = cbam_analysis(&composition);
    let embedded =
        assess_impact("pan", &composition, 1.2, "IT", "FR", ShippingMode::Road).cbam_analysis;
    assert_eq!(standalone, embedded);
    assert!(standalone.is_relevant);
}

#[test]
fn methodology_reports_engine_version() {
    let result = assess_impact(
        "x",
        &MaterialComposition::new().with("hemp", 1.0),
        1.0,
        "PL",
        "RO",
        ShippingMode::Rail,
    );
    assert_eq!(
        Methodology::current().methodology_version,
        result.methodology_version
    );
}
