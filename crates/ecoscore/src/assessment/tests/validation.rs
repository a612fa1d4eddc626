use super::common::*;
use crate::assessment::{MaterialComposition, ValidationError, MAX_WEIGHT_KG};

#[test]
fn accepts_well_formed_request() {
    assert_eq!(tee_request().validate(), Ok(()));
}

#[test]
fn rejects_non_positive_weight() {
    let mut request = tee_request();
    request.weight_kg = 0.0;
    assert_eq!(request.validate(), Err(ValidationError::NonPositiveWeight(0.0)));

    request.weight_kg = f64::NAN;
    assert!(matches!(
        request.validate(),
        Err(ValidationError::NonPositiveWeight(_))
    ));
}

#[test]
fn rejects_weight_beyond_ceiling() {
    let mut request = tee_request();
    request.weight_kg = 1e308;
    assert_eq!(request.validate(), Err(ValidationError::WeightTooLarge(1e308)));

    request.weight_kg = MAX_WEIGHT_KG;
    assert_eq!(request.validate(), Ok(()));
    let result = request.assess();
    assert!(result.co2_estimate_kg.is_finite());
    assert!(result.water_usage_liters.is_finite());
}

#[test]
fn rejects_blank_names() {
    let mut request = tee_request();
    request.product_name = "  ".to_string();
    assert_eq!(request.validate(), Err(ValidationError::EmptyProductName));

    let mut request = tee_request();
    request.destination_country = String::new();
    assert_eq!(
        request.validate(),
        Err(ValidationError::EmptyCountry("destination_country"))
    );
}

#[test]
fn rejects_out_of_range_shares() {
    let mut request = tee_request();
    request.material_composition = MaterialComposition::new().with("cotton", 1.5);
    assert_eq!(
        request.validate(),
        Err(ValidationError::ShareOutOfRange {
            material: "cotton".to_string(),
            share: 1.5,
        })
    );

    request.material_composition = MaterialComposition::new();
    assert_eq!(request.validate(), Err(ValidationError::EmptyComposition));
}

#[test]
fn deserializes_request_with_default_mode() {
    let request: crate::assessment::AssessmentRequest = serde_json::from_str(
        r#"{
            "product_name": "Tee",
            "material_composition": {"organic_cotton": 1.0},
            "weight_kg": 0.2,
            "origin_country": "PT",
            "destination_country": "DE"
        }"#,
    )
    .expect("request parses");
    assert_eq!(request.shipping_mode, crate::assessment::ShippingMode::Sea);
    assert_eq!(request.validate(), Ok(()));
}
