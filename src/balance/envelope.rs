/// Ray-casting point-in-polygon test
///
/// Casts a horizontal ray from the point towards +x and toggles an inside
/// flag at every edge crossing. The polygon is treated as implicitly
/// closed (last point connects back to the first), so rotating the
/// starting index of the point list does not change the result.
///
/// Degenerate or self-intersecting polygons produce deterministic but
/// undefined results; callers supply a simple safety envelope as
/// configuration data.
pub fn point_in_polygon(point: (f64, f64), polygon: &[(f64, f64)]) -> bool {
    let (x, y) = point;
    let mut inside = false;

    if polygon.is_empty() {
        return false;
    }

    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];

        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tb9_envelope() -> Vec<(f64, f64)> {
        vec![
            (600.0, 500.0),
            (1280.0, 1060.0),
            (1100.0, 1060.0),
            (910.0, 980.0),
            (500.0, 550.0),
        ]
    }

    #[test]
    fn unit_square() {
        let square = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        assert!(point_in_polygon((0.5, 0.5), &square));
        assert!(!point_in_polygon((1.5, 0.5), &square));
        assert!(!point_in_polygon((-0.5, 0.5), &square));
        assert!(!point_in_polygon((0.5, 2.0), &square));
    }

    #[test]
    fn point_inside_envelope_band() {
        assert!(point_in_polygon((1000.0, 900.0), &tb9_envelope()));
        assert!(point_in_polygon((700.0, 650.0), &tb9_envelope()));
    }

    #[test]
    fn point_outside_envelope() {
        assert!(!point_in_polygon((2000.0, 2000.0), &tb9_envelope()));
        // Just below the lower envelope edge at x = 1000 (edge y ~= 829.4)
        assert!(!point_in_polygon((1000.0, 820.0), &tb9_envelope()));
        assert!(!point_in_polygon((0.0, 0.0), &tb9_envelope()));
    }

    #[test]
    fn result_is_invariant_under_polygon_rotation() {
        let envelope = tb9_envelope();
        let samples = [
            (1000.0, 900.0),
            (700.0, 650.0),
            (2000.0, 2000.0),
            (1000.0, 820.0),
            (0.0, 0.0),
        ];
        for rotation in 0..envelope.len() {
            let mut rotated = envelope.clone();
            rotated.rotate_left(rotation);
            for &sample in &samples {
                assert_eq!(
                    point_in_polygon(sample, &rotated),
                    point_in_polygon(sample, &envelope),
                    "rotation {rotation} changed result for {sample:?}"
                );
            }
        }
    }

    #[test]
    fn empty_polygon_contains_nothing() {
        assert!(!point_in_polygon((0.0, 0.0), &[]));
    }

    #[test]
    fn concave_polygon() {
        // U shape: the notch between the arms is outside
        let u = vec![
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ];
        assert!(point_in_polygon((0.5, 2.0), &u));
        assert!(point_in_polygon((2.5, 2.0), &u));
        assert!(!point_in_polygon((1.5, 2.0), &u));
        assert!(point_in_polygon((1.5, 0.5), &u));
    }
}
