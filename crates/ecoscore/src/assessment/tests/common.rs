use crate::assessment::{AssessmentRequest, MaterialComposition, ShippingMode};

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn organic_tee() -> MaterialComposition {
    MaterialComposition::new().with("organic_cotton", 1.0)
}

pub(super) fn bike_frame() -> MaterialComposition {
    MaterialComposition::new()
        .with("steel", 0.7)
        .with("rubber", 0.2)
        .with("Recycled Polyester", 0.1)
}

pub(super) fn tee_request() -> AssessmentRequest {
    AssessmentRequest {
        product_name: "Eco-friendly T-shirt".to_string(),
        material_composition: organic_tee(),
        weight_kg: 0.2,
        origin_country: "Portugal".to_string(),
        destination_country: "Germany".to_string(),
        shipping_mode: ShippingMode::Sea,
    }
}
