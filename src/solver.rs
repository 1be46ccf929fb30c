//! Inverse solver from hue, chroma, and tone to an sRGB color.
//!
//! CAM16 is only defined in the forward direction, so producing a color
//! with a requested appearance needs a numerical search. The solver
//! fixes two of the three constraints analytically: the tone pins the
//! linear-RGB luminance Y, and a Newton iteration on CAM16 lightness J
//! finds the color with the requested chroma on that luminance plane.
//! When the requested chroma is outside the sRGB gamut, a bisection
//! walks the gamut boundary at constant Y to the color of maximum
//! chroma at the requested hue.
//!
//! The per-channel chromatic adaptation used here folds the cone
//! matrix, the sRGB matrix, and the discount factors of the default
//! viewing conditions into a single pair of mutually inverse matrices,
//! baked once at first use.

use std::sync::LazyLock;

use crate::color::{SRGB_TO_XYZ, argb_from_linrgb, argb_from_lstar, y_from_lstar};
use crate::cam16::XYZ_TO_CAM16RGB;
use crate::math::{matrix_multiply, sanitize_degrees, signum};
use crate::viewing::DEFAULT_VIEWING_CONDITIONS;

/// Luminance weights of the linear RGB channels.
const Y_FROM_LINRGB: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Linear RGB to discounted, luminance-scaled cone responses, under
/// default viewing conditions.
static SCALED_DISCOUNT_FROM_LINRGB: LazyLock<[[f64; 3]; 3]> = LazyLock::new(|| {
    let vc = &*DEFAULT_VIEWING_CONDITIONS;
    let cone_from_linrgb = concat(&XYZ_TO_CAM16RGB, &SRGB_TO_XYZ);
    let mut scaled = cone_from_linrgb;
    for (row, d) in scaled.iter_mut().zip(vc.rgb_d) {
        for value in row.iter_mut() {
            *value *= d * vc.fl / 100.0;
        }
    }
    scaled
});

/// Inverse of [`SCALED_DISCOUNT_FROM_LINRGB`].
static LINRGB_FROM_SCALED_DISCOUNT: LazyLock<[[f64; 3]; 3]> =
    LazyLock::new(|| inverted(&SCALED_DISCOUNT_FROM_LINRGB));

/// Linear RGB levels at which an 8-bit sRGB channel changes value.
///
/// Plane `i` sits at the companded midpoint between codes `i` and
/// `i + 1`; the gamut bisection only needs to distinguish colors that
/// quantize differently.
static CRITICAL_PLANES: LazyLock<[f64; 255]> = LazyLock::new(|| {
    let mut planes = [0.0; 255];
    for (i, plane) in planes.iter_mut().enumerate() {
        let normalized = (i as f64 + 0.5) / 255.0;
        *plane = if normalized <= 0.040449936 {
            normalized / 12.92 * 100.0
        } else {
            ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
        };
    }
    planes
});

/// Solve for an ARGB color with the given hue, chroma, and tone.
///
/// Hue is sanitized to [0, 360); tone is L*. The result always has the
/// requested tone. Chroma is realised exactly when the triple is inside
/// the sRGB gamut, and otherwise reduced to the maximum available at
/// this hue and tone.
pub fn solve_to_int(hue_degrees: f64, chroma: f64, lstar: f64) -> u32 {
    if chroma < 0.0001 || lstar < 0.0001 || lstar > 99.9999 {
        return argb_from_lstar(lstar);
    }
    let hue_degrees = sanitize_degrees(hue_degrees);
    let hue_radians = hue_degrees.to_radians();
    let y = y_from_lstar(lstar);
    if let Some(exact) = find_result_by_j(hue_radians, chroma, y) {
        return exact;
    }
    let linrgb = bisect_to_limit(y, hue_radians);
    argb_from_linrgb(linrgb)
}

/// Newton iteration on CAM16 lightness J at fixed hue and chroma.
///
/// Returns the in-gamut answer, or `None` when the requested chroma is
/// not available at this hue and luminance.
fn find_result_by_j(hue_radians: f64, chroma: f64, y: f64) -> Option<u32> {
    let vc = &*DEFAULT_VIEWING_CONDITIONS;

    // Initial estimate of j.
    let mut j = y.sqrt() * 11.0;

    let t_inner_coeff = 1.0 / (1.64 - 0.29f64.powf(vc.n)).powf(0.73);
    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
    let h_sin = hue_radians.sin();
    let h_cos = hue_radians.cos();

    for iteration_round in 0..5 {
        let j_normalized = j / 100.0;
        let alpha = if chroma == 0.0 || j == 0.0 {
            0.0
        } else {
            chroma / j_normalized.sqrt()
        };
        let t = (alpha * t_inner_coeff).powf(1.0 / 0.9);
        let ac = vc.aw * j_normalized.powf(1.0 / vc.c / vc.z);
        let p2 = ac / vc.nbb;
        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;
        let linrgb = matrix_multiply(
            [
                inverse_chromatic_adaptation(r_a),
                inverse_chromatic_adaptation(g_a),
                inverse_chromatic_adaptation(b_a),
            ],
            &LINRGB_FROM_SCALED_DISCOUNT,
        );

        if linrgb[0] < 0.0 || linrgb[1] < 0.0 || linrgb[2] < 0.0 {
            return None;
        }
        let fnj = Y_FROM_LINRGB[0] * linrgb[0]
            + Y_FROM_LINRGB[1] * linrgb[1]
            + Y_FROM_LINRGB[2] * linrgb[2];
        if fnj <= 0.0 {
            return None;
        }
        if iteration_round == 4 || (fnj - y).abs() < 0.002 {
            if linrgb[0] > 100.01 || linrgb[1] > 100.01 || linrgb[2] > 100.01 {
                return None;
            }
            return Some(argb_from_linrgb(linrgb));
        }
        // 2 * fn(j) / j approximates fn'(j).
        j -= (fnj - y) * j / (2.0 * fnj);
    }
    None
}

/// Walk the gamut boundary at luminance `y` to the point whose hue
/// matches `target_hue`, then refine across quantization planes.
fn bisect_to_limit(y: f64, target_hue: f64) -> [f64; 3] {
    let (mut left, mut right) = bisect_to_segment(y, target_hue);
    let mut left_hue = hue_of(left);
    for axis in 0..3 {
        if left[axis] != right[axis] {
            let (mut l_plane, mut r_plane) = if left[axis] < right[axis] {
                (
                    critical_plane_below(true_delinearized(left[axis])),
                    critical_plane_above(true_delinearized(right[axis])),
                )
            } else {
                (
                    critical_plane_above(true_delinearized(left[axis])),
                    critical_plane_below(true_delinearized(right[axis])),
                )
            };
            for _ in 0..8 {
                if (r_plane - l_plane).abs() <= 1 {
                    break;
                }
                let m_plane = ((l_plane + r_plane) as f64 / 2.0).floor() as i32;
                let mid_plane_coordinate = CRITICAL_PLANES[m_plane as usize];
                let mid = set_coordinate(left, mid_plane_coordinate, right, axis);
                let mid_hue = hue_of(mid);
                if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                    right = mid;
                    r_plane = m_plane;
                } else {
                    left = mid;
                    left_hue = mid_hue;
                    l_plane = m_plane;
                }
            }
        }
    }
    midpoint(left, right)
}

/// Find two gamut-boundary points at luminance `y` whose hues bracket
/// `target_hue`.
fn bisect_to_segment(y: f64, target_hue: f64) -> ([f64; 3], [f64; 3]) {
    let mut left = [-1.0; 3];
    let mut right = left;
    let mut left_hue = 0.0;
    let mut right_hue = 0.0;
    let mut initialized = false;
    let mut uncut = true;
    for n in 0..12 {
        let Some(mid) = nth_vertex(y, n) else {
            continue;
        };
        let mid_hue = hue_of(mid);
        if !initialized {
            left = mid;
            right = mid;
            left_hue = mid_hue;
            right_hue = mid_hue;
            initialized = true;
            continue;
        }
        if uncut || are_in_cyclic_order(left_hue, mid_hue, right_hue) {
            uncut = false;
            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                right_hue = mid_hue;
            } else {
                left = mid;
                left_hue = mid_hue;
            }
        }
    }
    (left, right)
}

/// The `n`th possible vertex of the polygonal intersection between the
/// sRGB cube and the plane of luminance `y`, or `None` when that vertex
/// lies outside the cube.
fn nth_vertex(y: f64, n: usize) -> Option<[f64; 3]> {
    let [k_r, k_g, k_b] = Y_FROM_LINRGB;
    let coord_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coord_b = if n % 2 == 0 { 0.0 } else { 100.0 };
    if n < 4 {
        let g = coord_a;
        let b = coord_b;
        let r = (y - g * k_g - b * k_b) / k_r;
        is_bounded(r).then_some([r, g, b])
    } else if n < 8 {
        let b = coord_a;
        let r = coord_b;
        let g = (y - r * k_r - b * k_b) / k_g;
        is_bounded(g).then_some([r, g, b])
    } else {
        let r = coord_a;
        let g = coord_b;
        let b = (y - r * k_r - g * k_g) / k_b;
        is_bounded(b).then_some([r, g, b])
    }
}

/// CAM16 hue, in radians, of a linear RGB color.
fn hue_of(linrgb: [f64; 3]) -> f64 {
    let scaled_discount = matrix_multiply(linrgb, &SCALED_DISCOUNT_FROM_LINRGB);
    let r_a = chromatic_adaptation(scaled_discount[0]);
    let g_a = chromatic_adaptation(scaled_discount[1]);
    let b_a = chromatic_adaptation(scaled_discount[2]);
    let a = (11.0 * r_a - 12.0 * g_a + b_a) / 11.0;
    let b = (r_a + g_a - 2.0 * b_a) / 9.0;
    b.atan2(a)
}

fn chromatic_adaptation(component: f64) -> f64 {
    let af = component.abs().powf(0.42);
    signum(component) * 400.0 * af / (af + 27.13)
}

fn inverse_chromatic_adaptation(adapted: f64) -> f64 {
    let adapted_abs = adapted.abs();
    let base = (27.13 * adapted_abs / (400.0 - adapted_abs)).max(0.0);
    signum(adapted) * base.powf(1.0 / 0.42)
}

/// Whether `b` lies on the arc from `a` to `c`, walking the circle in
/// the positive direction.
fn are_in_cyclic_order(a: f64, b: f64, c: f64) -> bool {
    sanitize_radians(b - a) < sanitize_radians(c - a)
}

/// Sanitize a radian measure into [0, 2pi).
fn sanitize_radians(angle: f64) -> f64 {
    use std::f64::consts::PI;
    (angle + PI * 8.0) % (PI * 2.0)
}

/// Delinearize without rounding or clipping, onto a continuous 0-255
/// scale.
fn true_delinearized(rgb_component: f64) -> f64 {
    let normalized = rgb_component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    delinearized * 255.0
}

fn critical_plane_below(x: f64) -> i32 {
    (x - 0.5).floor() as i32
}

fn critical_plane_above(x: f64) -> i32 {
    (x - 0.5).ceil() as i32
}

fn is_bounded(x: f64) -> bool {
    (0.0..=100.0).contains(&x)
}

/// Where `mid` falls between `source` and `target`, as a 0-1 fraction.
fn intercept(source: f64, mid: f64, target: f64) -> f64 {
    (mid - source) / (target - source)
}

fn lerp_point(source: [f64; 3], t: f64, target: [f64; 3]) -> [f64; 3] {
    [
        source[0] + (target[0] - source[0]) * t,
        source[1] + (target[1] - source[1]) * t,
        source[2] + (target[2] - source[2]) * t,
    ]
}

/// The point on the segment from `source` to `target` whose `axis`
/// coordinate equals `coordinate`.
fn set_coordinate(source: [f64; 3], coordinate: f64, target: [f64; 3], axis: usize) -> [f64; 3] {
    let t = intercept(source[axis], coordinate, target[axis]);
    lerp_point(source, t, target)
}

fn midpoint(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        (a[0] + b[0]) / 2.0,
        (a[1] + b[1]) / 2.0,
        (a[2] + b[2]) / 2.0,
    ]
}

fn concat(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut out = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}

fn inverted(m: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
    [
        [
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
        ],
        [
            (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
        ],
        [
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
        ],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::lstar_from_argb;
    use approx::assert_abs_diff_eq;

    #[test]
    fn achromatic_fast_path() {
        assert_eq!(solve_to_int(120.0, 0.0, 50.0), argb_from_lstar(50.0));
        assert_eq!(solve_to_int(120.0, 40.0, 0.0), 0xff000000);
        assert_eq!(solve_to_int(120.0, 40.0, 100.0), 0xffffffff);
    }

    #[test]
    fn hue_is_sanitized_before_solving() {
        let direct = solve_to_int(282.0, 48.0, 50.0);
        assert_eq!(solve_to_int(282.0 + 360.0, 48.0, 50.0), direct);
        assert_eq!(solve_to_int(282.0 - 720.0, 48.0, 50.0), direct);
    }

    #[test]
    fn tone_contract_holds() {
        for tone in [5.0, 25.0, 50.0, 75.0, 95.0] {
            for hue in [27.0, 90.0, 142.0, 210.0, 282.0, 335.0] {
                let argb = solve_to_int(hue, 60.0, tone);
                assert_abs_diff_eq!(lstar_from_argb(argb), tone, epsilon = 0.5);
            }
        }
    }

    #[test]
    fn chroma_saturates_at_gamut_boundary() {
        // Once the requested chroma exceeds what the gamut offers at
        // this hue and tone, the output stops changing.
        let at_limit = solve_to_int(282.788, 200.0, 40.0);
        assert_eq!(solve_to_int(282.788, 500.0, 40.0), at_limit);
    }

    #[test]
    fn critical_planes_are_monotonic() {
        let planes = &*CRITICAL_PLANES;
        for pair in planes.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_abs_diff_eq!(planes[0], 0.015176349177441876, epsilon = 1e-12);
    }

    #[test]
    fn scaled_discount_matrices_are_inverses() {
        let product = concat(&SCALED_DISCOUNT_FROM_LINRGB, &LINRGB_FROM_SCALED_DISCOUNT);
        for (i, row) in product.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(*value, expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn gamut_limited_colors_keep_their_hue() {
        use crate::cam16::Cam16;
        use crate::math::difference_degrees;
        for hue in [27.408, 142.139, 282.788] {
            let argb = solve_to_int(hue, 200.0, 50.0);
            let realised = Cam16::from_argb(argb);
            assert!(
                difference_degrees(realised.hue, hue) < 4.0,
                "hue {hue} realised as {}",
                realised.hue
            );
        }
    }
}
