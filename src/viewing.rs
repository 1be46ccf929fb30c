//! CAM16 viewing conditions.
//!
//! A color appearance model describes a color relative to the
//! environment it is seen in. This module precomputes every CAM16
//! intermediate that depends only on that environment, so the forward
//! and inverse transforms stay cheap.

use std::sync::LazyLock;

use crate::cam16::XYZ_TO_CAM16RGB;
use crate::color::{white_point_d65, y_from_lstar};
use crate::math::{lerp, matrix_multiply};

/// Viewing conditions for display of an sRGB color: a D65 white point,
/// the adapting luminance of a gray world, a midgray background, and an
/// average surround.
pub static DEFAULT_VIEWING_CONDITIONS: LazyLock<ViewingConditions> =
    LazyLock::new(ViewingConditions::default);

/// Precomputed CAM16 constants for one viewing environment.
///
/// Fields depend only on the constructor arguments and are never
/// mutated; share a single instance by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewingConditions {
    pub aw: f64,
    pub nbb: f64,
    pub ncb: f64,
    pub c: f64,
    pub nc: f64,
    pub n: f64,
    pub rgb_d: [f64; 3],
    pub fl: f64,
    pub fl_root: f64,
    pub z: f64,
}

impl ViewingConditions {
    /// Create viewing conditions from physically relevant parameters.
    ///
    /// # Arguments
    /// * `white_point` - coordinates of white in XYZ (0-100 scale)
    /// * `adapting_luminance` - light strength, in cd/m2
    /// * `background_lstar` - average lightness of the 10 degrees around
    ///   the color, clamped to at least 0.1
    /// * `surround` - brightness of the wider environment, 0 (dark) to 2
    ///   (average)
    /// * `discounting_illuminant` - whether the eye is assumed fully
    ///   adapted to the illuminant
    pub fn new(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        let background_lstar = background_lstar.max(0.1);
        let [r_w, g_w, b_w] = matrix_multiply(white_point, &XYZ_TO_CAM16RGB);

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let d = if discounting_illuminant {
            1.0
        } else {
            (f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())).clamp(0.0, 1.0)
        };

        let nc = f;
        let rgb_d = [
            d * (100.0 / r_w) + 1.0 - d,
            d * (100.0 / g_w) + 1.0 - d,
            d * (100.0 / b_w) + 1.0 - d,
        ];

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();

        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        // Achromatic response of the white point, through the same cone
        // adaptation applied in the forward transform.
        let rgb_a_factors = [
            (fl * rgb_d[0] * r_w / 100.0).powf(0.42),
            (fl * rgb_d[1] * g_w / 100.0).powf(0.42),
            (fl * rgb_d[2] * b_w / 100.0).powf(0.42),
        ];
        let rgb_a = [
            400.0 * rgb_a_factors[0] / (rgb_a_factors[0] + 27.13),
            400.0 * rgb_a_factors[1] / (rgb_a_factors[1] + 27.13),
            400.0 * rgb_a_factors[2] / (rgb_a_factors[2] + 27.13),
        ];
        let aw = (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;

        Self {
            aw,
            nbb,
            ncb,
            c,
            nc,
            n,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// sRGB-like viewing conditions with a custom background lightness.
    pub fn with_background_lstar(background_lstar: f64) -> Self {
        Self::new(
            white_point_d65(),
            200.0 / std::f64::consts::PI * y_from_lstar(50.0) / 100.0,
            background_lstar,
            2.0,
            false,
        )
    }
}

impl Default for ViewingConditions {
    /// sRGB-like viewing conditions with a midgray (L* 50) background.
    fn default() -> Self {
        Self::with_background_lstar(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_conditions_match_reference() {
        let vc = &*DEFAULT_VIEWING_CONDITIONS;
        assert_relative_eq!(vc.n, 0.184186, epsilon = 1e-5);
        assert_relative_eq!(vc.aw, 29.981, epsilon = 1e-3);
        assert_relative_eq!(vc.nbb, 1.0169, epsilon = 1e-3);
        assert_relative_eq!(vc.ncb, vc.nbb);
        assert_relative_eq!(vc.c, 0.69, epsilon = 1e-9);
        assert_relative_eq!(vc.nc, 1.0, epsilon = 1e-9);
        assert_relative_eq!(vc.fl, 0.38848, epsilon = 1e-4);
        assert_relative_eq!(vc.fl_root, vc.fl.powf(0.25));
        assert_relative_eq!(vc.z, 1.48 + vc.n.sqrt());
    }

    #[test]
    fn background_lstar_is_clamped() {
        let vc = ViewingConditions::with_background_lstar(-10.0);
        let floor = ViewingConditions::with_background_lstar(0.1);
        assert_eq!(vc, floor);
    }

    #[test]
    fn discounting_fixes_full_adaptation() {
        let vc = ViewingConditions::new(white_point_d65(), 11.72, 50.0, 2.0, true);
        // With a discounted illuminant the degree of adaptation is 1 and
        // the white point maps exactly onto 100 per channel.
        for (d, w) in vc.rgb_d.iter().zip(matrix_multiply(
            white_point_d65(),
            &XYZ_TO_CAM16RGB,
        )) {
            assert_relative_eq!(d * w, 100.0, epsilon = 1e-9);
        }
    }
}
