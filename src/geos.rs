/// A named reference point listings are scored against.
pub struct TargetArea {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// Fixed for the process lifetime; never mutated.
pub static TARGET_AREAS: [TargetArea; 3] = [
    TargetArea {
        name: "Töölö",
        lat: 60.1826,
        lon: 24.9221,
    },
    TargetArea {
        name: "Kallio",
        lat: 60.1854,
        lon: 24.9525,
    },
    TargetArea {
        name: "Punavuori",
        lat: 60.1595,
        lon: 24.9384,
    },
];

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two lat/lon points.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Name of the nearest target area and the distance to it, rounded to
/// two decimals. Exact ties go to the earlier table entry.
pub fn nearest_target_area(lat: f64, lon: f64) -> (&'static str, f64) {
    let mut nearest = &TARGET_AREAS[0];
    let mut best = haversine_km(lat, lon, nearest.lat, nearest.lon);

    for area in &TARGET_AREAS[1..] {
        let d = haversine_km(lat, lon, area.lat, area.lon);
        if d < best {
            nearest = area;
            best = d;
        }
    }

    (nearest.name, (best * 100.0).round() / 100.0)
}
