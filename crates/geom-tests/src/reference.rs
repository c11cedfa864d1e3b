//! Reference-value tests against hand-evaluated closed forms.
//!
//! Each table row is `(input, normal, eta, expected)` with `expected`
//! worked out from
//!
//! ```text
//! cos_theta      = min(dot(-v, n), 1)
//! r_out_perp     = (v + n * cos_theta) * eta
//! r_out_parallel = n * -sqrt(|1 - |r_out_perp|^2|)
//! refract        = r_out_perp + r_out_parallel
//! reflect        = v - n * 2 * dot(v, n)
//! ```

use approx::assert_abs_diff_eq;
use geom_math::{Vec2, Vec3};
use geom_random::Sampler;

// ============================================================================
// Refraction
// ============================================================================

const REFRACT_3D: &[([f64; 3], [f64; 3], f64, [f64; 3])] = &[
    // cos = min(-1, 1) = -1; perp = (1, 1, 0); |1 - 2| = 1 -> parallel (0, 0, -1)
    ([1.0, 1.0, 1.0], [0.0, 0.0, 1.0], 1.0, [1.0, 1.0, -1.0]),
    // head-on, any eta: perp = 0, parallel = -n
    ([0.0, 0.0, -1.0], [0.0, 0.0, 1.0], 1.5, [0.0, 0.0, -1.0]),
    // cos = 0.6; perp = (0.8, 0, 0) * 0.5 = (0.4, 0, 0); sqrt(0.84)
    ([0.8, -0.6, 0.0], [0.0, 1.0, 0.0], 0.5, [0.4, -0.916_515_138_991_168, 0.0]),
    // past the critical angle: perp = (1.6, 0, 0); |1 - 2.56| = 1.56
    ([0.8, -0.6, 0.0], [0.0, 1.0, 0.0], 2.0, [1.6, -1.248_999_599_679_679_7, 0.0]),
    // dot(-v, n) = 2 clamps cos to 1; perp = (0, -1, 0); |1 - 1| = 0
    ([0.0, -2.0, 0.0], [0.0, 1.0, 0.0], 1.0, [0.0, -1.0, 0.0]),
];

const REFRACT_2D: &[([f64; 2], [f64; 2], f64, [f64; 2])] = &[
    ([0.6, -0.8], [0.0, 1.0], 1.0, [0.6, -0.8]),
    // perp = (0.9, 0); sqrt(|1 - 0.81|) = sqrt(0.19)
    ([0.6, -0.8], [0.0, 1.0], 1.5, [0.9, -0.435_889_894_354_067_4]),
];

#[test]
fn test_refract_3d_reference() {
    for &(v, n, eta, expected) in REFRACT_3D {
        let r = Vec3::from(v).refract(Vec3::from(n), eta);
        for i in 0..3 {
            assert_abs_diff_eq!(r[i], expected[i], epsilon = 1e-12);
        }
    }
}

#[test]
fn test_refract_2d_reference() {
    for &(v, n, eta, expected) in REFRACT_2D {
        let r = Vec2::from(v).refract(Vec2::from(n), eta);
        assert_abs_diff_eq!(r.x, expected[0], epsilon = 1e-12);
        assert_abs_diff_eq!(r.y, expected[1], epsilon = 1e-12);
    }
}

// ============================================================================
// Reflection
// ============================================================================

const REFLECT_3D: &[([f64; 3], [f64; 3], [f64; 3])] = &[
    ([1.0, -1.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]),
    ([0.0, 0.0, -3.0], [0.0, 0.0, 1.0], [0.0, 0.0, 3.0]),
    // grazing: orthogonal to n, unchanged
    ([2.0, 0.0, 5.0], [0.0, 1.0, 0.0], [2.0, 0.0, 5.0]),
    // non-unit normal is not normalized: dot = -2, v - n * -4 = (1, 7, 0)
    ([1.0, -1.0, 0.0], [0.0, 2.0, 0.0], [1.0, 7.0, 0.0]),
];

#[test]
fn test_reflect_3d_reference() {
    for &(v, n, expected) in REFLECT_3D {
        assert_eq!(Vec3::from(v).reflect(Vec3::from(n)), Vec3::from(expected));
    }
}

// ============================================================================
// Sampler reproducibility
// ============================================================================

#[test]
fn test_sampler_streams_are_reproducible() {
    let draw = |seed| {
        let mut s = Sampler::seeded(seed);
        (
            s.uniform(0.0, 1.0),
            s.int(0, 100),
            s.normal(0.0, 1.0),
            s.in_unit_disk(),
            s.in_hemisphere(Vec3::Z),
        )
    };
    assert_eq!(draw(5), draw(5));
    assert_ne!(draw(5), draw(6));
}
