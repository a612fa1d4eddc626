use super::composition::MaterialComposition;
use super::tables::{is_cbam_material, normalize_material_key, CBAM_MATERIALS_DISPLAY};
use serde::{Deserialize, Serialize};

/// Relevance of a composition to EU Carbon Border Adjustment Mechanism reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CbamAnalysis {
    pub is_relevant: bool,
    pub reason: String,
}

/// Flags compositions containing CBAM materials, naming them as the caller spelled them.
pub fn cbam_analysis(composition: &MaterialComposition) -> CbamAnalysis {
    let found: Vec<&str> = composition
        .contributing()
        .filter(|(material, _)| is_cbam_material(&normalize_material_key(material)))
        .map(|(material, _)| material)
        .collect();

    if found.is_empty() {
        CbamAnalysis {
            is_relevant: false,
            reason: format!("Materials do not contain {CBAM_MATERIALS_DISPLAY}."),
        }
    } else {
        CbamAnalysis {
            is_relevant: true,
            reason: format!(
                "Product contains CBAM-relevant material(s): {}.",
                found.join(", ")
            ),
        }
    }
}
