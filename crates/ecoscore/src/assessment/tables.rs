//! Static reference data: per-material factors, CBAM categories, and country coordinates.
//!
//! Every lookup is total. Material keys that are absent resolve to the `default` row; country
//! keys that are absent resolve to `None` and the caller decides the fallback.

/// Factors attached to one normalized material key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialFactors {
    /// kg CO2e per kg of material.
    pub co2_kg_per_kg: f64,
    /// Litres of water per kg of material.
    pub water_liters_per_kg: f64,
    /// 0-100, higher means lower impact.
    pub sustainability_score: f64,
    pub explanation: Option<&'static str>,
}

const fn row(
    co2_kg_per_kg: f64,
    water_liters_per_kg: f64,
    sustainability_score: f64,
    explanation: Option<&'static str>,
) -> MaterialFactors {
    MaterialFactors {
        co2_kg_per_kg,
        water_liters_per_kg,
        sustainability_score,
        explanation,
    }
}

pub const DEFAULT_MATERIAL_KEY: &str = "default";

const DEFAULT_FACTORS: MaterialFactors = row(5.8, 1_800.0, 52.0, None);

// Recycled polyester sits ~30% below virgin polyester (8.2 * 0.70).
static MATERIALS: &[(&str, MaterialFactors)] = &[
    (
        "cotton",
        row(
            5.2,
            9_500.0,
            48.0,
            Some("Conventional cotton has high water usage (up to 10,000 L/kg)."),
        ),
    ),
    (
        "organic_cotton",
        row(
            3.0,
            6_500.0,
            74.0,
            Some("Organic cotton uses less water and no synthetic pesticides."),
        ),
    ),
    (
        "polyester",
        row(
            8.2,
            95.0,
            36.0,
            Some("Polyester is a synthetic material with high energy intensity."),
        ),
    ),
    (
        "recycled_polyester",
        row(
            5.7,
            70.0,
            72.0,
            Some("Recycled polyester reduces virgin plastic use by ~30%."),
        ),
    ),
    (
        "nylon",
        row(
            8.8,
            95.0,
            34.0,
            Some("Nylon production is energy-intensive with significant CO2 emissions."),
        ),
    ),
    (
        "wool",
        row(
            24.0,
            480.0,
            42.0,
            Some("Wool production has high methane emissions from sheep."),
        ),
    ),
    (
        "linen",
        row(
            1.9,
            1_900.0,
            76.0,
            Some("Linen (flax) is one of the most sustainable natural fibers."),
        ),
    ),
    (
        "hemp",
        row(
            2.3,
            2_400.0,
            82.0,
            Some("Hemp requires minimal water and no pesticides; highly sustainable."),
        ),
    ),
    (
        "bamboo",
        row(
            3.5,
            750.0,
            70.0,
            Some("Bamboo grows fast but processing can be chemical-intensive."),
        ),
    ),
    ("viscose", row(4.0, 580.0, 56.0, None)),
    ("lyocell", row(2.6, 380.0, 72.0, None)),
    (
        "leather",
        row(
            62.0,
            16_000.0,
            26.0,
            Some("Leather has very high CO2 due to cattle farming and tanning."),
        ),
    ),
    ("rubber", row(2.8, 1_900.0, 62.0, None)),
    (
        "steel",
        row(
            1.85,
            150.0,
            55.0,
            Some("Steel production is carbon-intensive (CBAM-relevant)."),
        ),
    ),
    (
        "aluminum",
        row(
            11.5,
            1_200.0,
            38.0,
            Some("Aluminum smelting is very energy-intensive (CBAM-relevant)."),
        ),
    ),
    (
        "cement",
        row(
            0.85,
            50.0,
            50.0,
            Some("Cement is a major industrial CO2 source (CBAM-relevant)."),
        ),
    ),
    ("fertilizer", row(2.1, 200.0, 52.0, None)),
    ("hydrogen", row(10.0, 20.0, 45.0, None)),
    (
        "iron",
        row(
            1.9,
            120.0,
            52.0,
            Some("Iron production involves high-temperature furnaces (CBAM-relevant)."),
        ),
    ),
    (DEFAULT_MATERIAL_KEY, DEFAULT_FACTORS),
];

/// Materials subject to EU Carbon Border Adjustment Mechanism reporting.
pub const CBAM_MATERIALS: [&str; 6] = [
    "steel",
    "aluminum",
    "cement",
    "fertilizer",
    "hydrogen",
    "iron",
];

pub const CBAM_MATERIALS_DISPLAY: &str = "steel, aluminum, cement, fertilizer, hydrogen, or iron";

/// Approximate centroid (or capital) per country code or name, keyed in normalized form.
static COUNTRY_COORDINATES: &[(&str, f64, f64)] = &[
    ("at", 47.5162, 14.5501),
    ("austria", 47.5162, 14.5501),
    ("au", -25.2744, 133.7751),
    ("australia", -25.2744, 133.7751),
    ("be", 50.5039, 4.4699),
    ("belgium", 50.5039, 4.4699),
    ("bg", 42.7339, 25.4858),
    ("bulgaria", 42.7339, 25.4858),
    ("br", -14.2350, -51.9253),
    ("brazil", -14.2350, -51.9253),
    ("bd", 23.6850, 90.3563),
    ("bangladesh", 23.6850, 90.3563),
    ("ca", 56.1304, -106.3468),
    ("canada", 56.1304, -106.3468),
    ("cn", 35.8617, 104.1954),
    ("china", 35.8617, 104.1954),
    ("de", 51.1657, 10.4515),
    ("germany", 51.1657, 10.4515),
    ("fr", 46.2276, 2.2137),
    ("france", 46.2276, 2.2137),
    ("gb", 55.3781, -3.4360),
    ("uk", 55.3781, -3.4360),
    ("united_kingdom", 55.3781, -3.4360),
    ("in", 20.5937, 78.9629),
    ("india", 20.5937, 78.9629),
    ("it", 41.8719, 12.5674),
    ("italy", 41.8719, 12.5674),
    ("jp", 36.2048, 138.2529),
    ("japan", 36.2048, 138.2529),
    ("mx", 23.6345, -102.5528),
    ("mexico", 23.6345, -102.5528),
    ("nl", 52.1326, 5.2913),
    ("netherlands", 52.1326, 5.2913),
    ("pl", 51.9194, 19.1451),
    ("poland", 51.9194, 19.1451),
    ("pt", 39.3999, -8.2245),
    ("portugal", 39.3999, -8.2245),
    ("ro", 45.9432, 24.9668),
    ("romania", 45.9432, 24.9668),
    ("ru", 61.5240, 105.3188),
    ("russia", 61.5240, 105.3188),
    ("es", 40.4637, -3.7492),
    ("spain", 40.4637, -3.7492),
    ("tr", 38.9637, 35.2433),
    ("turkey", 38.9637, 35.2433),
    ("us", 37.0902, -95.7129),
    ("usa", 37.0902, -95.7129),
    ("united_states", 37.0902, -95.7129),
    ("vn", 14.0583, 108.2772),
    ("vietnam", 14.0583, 108.2772),
];

/// Trim, lowercase, and fold spaces and hyphens to underscores.
pub fn normalize_material_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Trim, lowercase, and fold spaces to underscores.
pub fn normalize_country_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Factors for a normalized material key, falling back to the `default` row.
pub fn material_factors(key: &str) -> &'static MaterialFactors {
    MATERIALS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, factors)| factors)
        .unwrap_or(&DEFAULT_FACTORS)
}

pub fn is_cbam_material(key: &str) -> bool {
    CBAM_MATERIALS.contains(&key)
}

/// Latitude/longitude in degrees for a normalized country key.
pub fn country_coordinates(key: &str) -> Option<(f64, f64)> {
    COUNTRY_COORDINATES
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|(_, lat, lon)| (*lat, *lon))
}
