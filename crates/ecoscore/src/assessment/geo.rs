//! Great-circle distance between country identifiers.

use super::tables::{country_coordinates, normalize_country_key};
use tracing::debug;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

const FALLBACK_MIN_KM: f64 = 500.0;
const FALLBACK_SPAN_KM: u64 = 14_500;

/// Distance in km between two countries given as ISO code or name.
///
/// Identical or blank identifiers yield 0. A pair with an unresolved side yields a stable
/// pseudo-distance in `[500, 15000)` km that is not geographically meaningful.
pub fn distance_km(origin: &str, destination: &str) -> f64 {
    let origin = normalize_country_key(origin);
    let destination = normalize_country_key(destination);
    if origin.is_empty() || destination.is_empty() || origin == destination {
        return 0.0;
    }

    match (
        country_coordinates(&origin),
        country_coordinates(&destination),
    ) {
        (Some((lat1, lon1)), Some((lat2, lon2))) => haversine_km(lat1, lon1, lat2, lon2),
        _ => {
            let distance = fallback_distance_km(&origin, &destination);
            debug!(%origin, %destination, distance, "using pseudo-distance for unresolved country");
            distance
        }
    }
}

/// Great-circle distance in km between two points given in degrees.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

fn fallback_distance_km(origin: &str, destination: &str) -> f64 {
    let mut key = Vec::with_capacity(origin.len() + destination.len() + 1);
    key.extend_from_slice(origin.as_bytes());
    key.push(b'|');
    key.extend_from_slice(destination.as_bytes());
    FALLBACK_MIN_KM + (fnv1a64(&key) % FALLBACK_SPAN_KM) as f64
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    let mut hash = OFFSET;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv_matches_reference_vectors() {
        assert_eq!(fnv1a64(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a64(b"a"), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn fallback_is_stable_and_in_range() {
        let first = fallback_distance_km("atlantis", "germany");
        let second = fallback_distance_km("atlantis", "germany");
        assert_eq!(first, second);
        assert!((500.0..15_000.0).contains(&first));
    }

    #[test]
    fn haversine_of_quarter_meridian() {
        let distance = haversine_km(0.0, 0.0, 90.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((distance - expected).abs() < 1e-6);
    }
}
