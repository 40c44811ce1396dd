use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("zero-length vector at the angle vertex")]
pub struct DegenerateAngle;

#[inline]
pub fn distance(p: [f64; 3], q: [f64; 3]) -> f64 {
    let dx = p[0] - q[0];
    let dy = p[1] - q[1];
    let dz = p[2] - q[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Angle a-b-c in degrees, with b as the vertex. The cosine is clamped to
/// [-1, 1] before the arccosine; rounding can push the raw quotient just
/// past 1 for collinear atoms, and an unclamped value yields NaN.
pub fn angle_deg(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Result<f64, DegenerateAngle> {
    let v1 = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
    let v2 = [c[0] - b[0], c[1] - b[1], c[2] - b[2]];

    let n1 = (v1[0] * v1[0] + v1[1] * v1[1] + v1[2] * v1[2]).sqrt();
    let n2 = (v2[0] * v2[0] + v2[1] * v2[1] + v2[2] * v2[2]).sqrt();
    if n1 < 1e-12 || n2 < 1e-12 {
        return Err(DegenerateAngle);
    }

    let dot = v1[0] * v2[0] + v1[1] * v2[1] + v1[2] * v2[2];
    let cos = (dot / (n1 * n2)).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn distance_is_euclidean_norm() {
        assert!(approx_eq(
            distance([0.0, 0.0, 0.0], [3.0, 4.0, 0.0]),
            5.0,
            1e-12
        ));
        assert!(approx_eq(distance([1.0, 1.0, 1.0], [1.0, 1.0, 1.0]), 0.0, 1e-12));
    }

    #[test]
    fn right_angle_and_straight_angle() {
        let a = [1.0, 0.0, 0.0];
        let b = [0.0, 0.0, 0.0];
        assert!(approx_eq(
            angle_deg(a, b, [0.0, 1.0, 0.0]).unwrap(),
            90.0,
            1e-9
        ));
        assert!(approx_eq(
            angle_deg(a, b, [-2.0, 0.0, 0.0]).unwrap(),
            180.0,
            1e-9
        ));
    }

    #[test]
    fn angle_is_symmetric_in_outer_atoms() {
        let a = [1.3, -0.2, 0.7];
        let b = [0.1, 0.4, -0.3];
        let c = [-0.8, 1.9, 0.2];
        assert!(approx_eq(
            angle_deg(a, b, c).unwrap(),
            angle_deg(c, b, a).unwrap(),
            1e-12
        ));
    }

    #[test]
    fn collinear_atoms_do_not_produce_nan() {
        // Coordinates chosen so the cosine quotient lands slightly above 1.
        let a = [0.1 + 0.2, 0.0, 0.0];
        let b = [0.0, 0.0, 0.0];
        let c = [-0.3, 0.0, 0.0];
        let angle = angle_deg(a, b, c).unwrap();
        assert!(angle.is_finite());
        assert!(approx_eq(angle, 180.0, 1e-9));
    }

    #[test]
    fn coincident_atoms_are_degenerate() {
        let p = [1.0, 2.0, 3.0];
        assert_eq!(angle_deg(p, p, [0.0, 0.0, 0.0]), Err(DegenerateAngle));
        assert_eq!(angle_deg([0.0, 0.0, 0.0], p, p), Err(DegenerateAngle));
    }
}
