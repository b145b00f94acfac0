//! Great-circle primitives on a spherical Earth
//!
//! All angles are in degrees, all distances in nautical miles. Inputs are
//! assumed to be valid latitude/longitude pairs; `NaN` in produces `NaN`
//! out, callers are responsible for validating.

/// Mean Earth radius in nautical miles
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Great-circle distance between two points, in nautical miles
///
/// Uses the haversine formula, which stays numerically stable for the
/// short distances typical of VFR legs. Symmetric in its endpoints.
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_NM * c
}

/// Initial great-circle bearing from the first point to the second
///
/// Returns degrees true in `[0, 360)`. Not symmetric: the bearing from B
/// to A is generally not the reciprocal of the bearing from A to B.
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Reciprocal of a bearing, normalized to `[0, 360)`
///
/// Used as the leg radial (the outbound VOR radial from the destination
/// back along the leg).
pub fn reciprocal(bearing_deg: f64) -> f64 {
    (bearing_deg + 180.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn distance_rome_milan() {
        let d = great_circle_distance(41.8, 12.5, 45.5, 9.2);
        assert_abs_diff_eq!(d, 264.337, epsilon = 0.01);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            ((41.8, 12.5), (45.5, 9.2)),
            ((0.0, 0.0), (0.0, 90.0)),
            ((-33.9, 18.4), (51.5, -0.1)),
            ((89.0, 0.0), (-89.0, 180.0)),
        ];
        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let ab = great_circle_distance(lat1, lon1, lat2, lon2);
            let ba = great_circle_distance(lat2, lon2, lat1, lon1);
            assert_abs_diff_eq!(ab, ba, epsilon = 1e-9);
        }
    }

    #[test]
    fn distance_of_coincident_points_is_zero() {
        assert_abs_diff_eq!(great_circle_distance(41.8, 12.5, 41.8, 12.5), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        // One degree of arc is 1/360 of the full circle
        let d = great_circle_distance(0.0, 0.0, 0.0, 1.0);
        let expected = EARTH_RADIUS_NM * std::f64::consts::TAU / 360.0;
        assert_abs_diff_eq!(d, expected, epsilon = 1e-9);
    }

    #[test]
    fn bearing_cardinal_directions() {
        assert_abs_diff_eq!(initial_bearing(0.0, 0.0, 1.0, 0.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(initial_bearing(0.0, 0.0, 0.0, 1.0), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(initial_bearing(0.0, 0.0, -1.0, 0.0), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(initial_bearing(0.0, 0.0, 0.0, -1.0), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn bearing_stays_in_range() {
        let coords = [
            (41.8, 12.5),
            (45.5, 9.2),
            (-33.9, 18.4),
            (51.5, -0.1),
            (64.1, -21.9),
            (-41.3, 174.8),
        ];
        for &(lat1, lon1) in &coords {
            for &(lat2, lon2) in &coords {
                if (lat1, lon1) == (lat2, lon2) {
                    continue;
                }
                let b = initial_bearing(lat1, lon1, lat2, lon2);
                assert!((0.0..360.0).contains(&b), "bearing {b} out of range");
            }
        }
    }

    #[test]
    fn bearing_rome_to_milan_is_northwest() {
        let b = initial_bearing(41.8, 12.5, 45.5, 9.2);
        assert_abs_diff_eq!(b, 328.292, epsilon = 0.01);
    }

    #[test]
    fn reciprocal_wraps_around() {
        assert_abs_diff_eq!(reciprocal(0.0), 180.0);
        assert_abs_diff_eq!(reciprocal(90.0), 270.0);
        assert_abs_diff_eq!(reciprocal(270.0), 90.0);
        assert_abs_diff_eq!(reciprocal(359.0), 179.0);
    }
}
