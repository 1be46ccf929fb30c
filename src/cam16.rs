//! The CAM16 color appearance model.
//!
//! A CAM16 color is not just a hex code: it is a hex code plus viewing
//! conditions. The forward transform maps an observed color into nine
//! appearance coordinates; the inverse transform maps appearance
//! coordinates back into XYZ under a chosen environment. Distances
//! should be measured in the CAM16-UCS coordinates (`jstar`, `astar`,
//! `bstar`), which approximate perceived color difference.

use crate::color::{
    argb_from_xyz, blue_from_argb, green_from_argb, linearized, red_from_argb,
};
use crate::math::{matrix_multiply, signum};
use crate::viewing::{DEFAULT_VIEWING_CONDITIONS, ViewingConditions};

/// Transforms XYZ coordinates to 'cone'/'RGB' responses in CAM16.
pub(crate) const XYZ_TO_CAM16RGB: [[f64; 3]; 3] = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

/// Transforms 'cone'/'RGB' responses in CAM16 to XYZ coordinates.
pub(crate) const CAM16RGB_TO_XYZ: [[f64; 3]; 3] = [
    [1.8620678, -1.0112547, 0.14918678],
    [0.38752654, 0.62144744, -0.00897398],
    [-0.01584150, -0.03412294, 1.0499644],
];

/// A color in the CAM16 appearance model.
///
/// `hue`, `chroma`, and lightness `j` identify the color; brightness
/// `q`, colorfulness `m`, and saturation `s` are alternate correlates.
/// `jstar`, `astar`, `bstar` are the CAM16-UCS coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam16 {
    pub hue: f64,
    pub chroma: f64,
    pub j: f64,
    pub q: f64,
    pub m: f64,
    pub s: f64,
    pub jstar: f64,
    pub astar: f64,
    pub bstar: f64,
}

impl Cam16 {
    /// Create a CAM16 color from an ARGB color viewed in default
    /// viewing conditions.
    pub fn from_argb(argb: u32) -> Self {
        Self::from_argb_in_viewing_conditions(argb, &DEFAULT_VIEWING_CONDITIONS)
    }

    /// Create a CAM16 color from an ARGB color viewed in the given
    /// conditions.
    pub fn from_argb_in_viewing_conditions(argb: u32, vc: &ViewingConditions) -> Self {
        let red_l = linearized(red_from_argb(argb));
        let green_l = linearized(green_from_argb(argb));
        let blue_l = linearized(blue_from_argb(argb));
        let x = 0.41233895 * red_l + 0.35762064 * green_l + 0.18051042 * blue_l;
        let y = 0.2126 * red_l + 0.7152 * green_l + 0.0722 * blue_l;
        let z = 0.01932141 * red_l + 0.11916382 * green_l + 0.95034478 * blue_l;
        Self::from_xyz_in_viewing_conditions(x, y, z, vc)
    }

    /// Create a CAM16 color from XYZ coordinates viewed in the given
    /// conditions.
    pub fn from_xyz_in_viewing_conditions(x: f64, y: f64, z: f64, vc: &ViewingConditions) -> Self {
        // Cone responses, discounted for the illuminant.
        let [r_t, g_t, b_t] = matrix_multiply([x, y, z], &XYZ_TO_CAM16RGB);
        let r_d = vc.rgb_d[0] * r_t;
        let g_d = vc.rgb_d[1] * g_t;
        let b_d = vc.rgb_d[2] * b_t;

        // Chromatic adaptation.
        let r_af = (vc.fl * r_d.abs() / 100.0).powf(0.42);
        let g_af = (vc.fl * g_d.abs() / 100.0).powf(0.42);
        let b_af = (vc.fl * b_d.abs() / 100.0).powf(0.42);
        let r_a = signum(r_d) * 400.0 * r_af / (r_af + 27.13);
        let g_a = signum(g_d) * 400.0 * g_af / (g_af + 27.13);
        let b_a = signum(b_d) * 400.0 * b_af / (b_af + 27.13);

        // Redness-greenness and yellowness-blueness opponent axes.
        let a = (11.0 * r_a - 12.0 * g_a + b_a) / 11.0;
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;
        let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
        let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

        let atan_degrees = b.atan2(a).to_degrees();
        let hue = if atan_degrees < 0.0 {
            atan_degrees + 360.0
        } else if atan_degrees >= 360.0 {
            atan_degrees - 360.0
        } else {
            atan_degrees
        };
        let hue_radians = hue.to_radians();

        // Achromatic response, lightness, and brightness.
        let ac = p2 * vc.nbb;
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc * vc.ncb;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = (1.64 - 0.29f64.powf(vc.n)).powf(0.73) * t.powf(0.9);

        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root;
        let s = 50.0 * (alpha * vc.c / (vc.aw + 4.0)).sqrt();

        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();
        let astar = mstar * hue_radians.cos();
        let bstar = mstar * hue_radians.sin();

        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar,
            bstar,
        }
    }

    /// Create a CAM16 color from lightness, chroma, and hue, in default
    /// viewing conditions.
    pub fn from_jch(j: f64, c: f64, h: f64) -> Self {
        Self::from_jch_in_viewing_conditions(j, c, h, &DEFAULT_VIEWING_CONDITIONS)
    }

    /// Create a CAM16 color from lightness, chroma, and hue, in the
    /// given viewing conditions.
    pub fn from_jch_in_viewing_conditions(j: f64, c: f64, h: f64, vc: &ViewingConditions) -> Self {
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;
        let m = c * vc.fl_root;
        let alpha = c / (j / 100.0).sqrt();
        let s = 50.0 * (alpha * vc.c / (vc.aw + 4.0)).sqrt();

        let hue_radians = h.to_radians();
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();
        let astar = mstar * hue_radians.cos();
        let bstar = mstar * hue_radians.sin();

        Self {
            hue: h,
            chroma: c,
            j,
            q,
            m,
            s,
            jstar,
            astar,
            bstar,
        }
    }

    /// Create a CAM16 color from CAM16-UCS coordinates, in default
    /// viewing conditions.
    pub fn from_ucs(jstar: f64, astar: f64, bstar: f64) -> Self {
        Self::from_ucs_in_viewing_conditions(jstar, astar, bstar, &DEFAULT_VIEWING_CONDITIONS)
    }

    /// Create a CAM16 color from CAM16-UCS coordinates, in the given
    /// viewing conditions.
    pub fn from_ucs_in_viewing_conditions(
        jstar: f64,
        astar: f64,
        bstar: f64,
        vc: &ViewingConditions,
    ) -> Self {
        let m = astar.hypot(bstar);
        let m2 = ((m * 0.0228).exp() - 1.0) / 0.0228;
        let c = m2 / vc.fl_root;
        let mut h = bstar.atan2(astar).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        let j = jstar / (1.0 - (jstar - 100.0) * 0.007);
        Self::from_jch_in_viewing_conditions(j, c, h, vc)
    }

    /// CAM16-UCS distance to another color.
    pub fn distance(&self, other: &Cam16) -> f64 {
        let d_j = self.jstar - other.jstar;
        let d_a = self.astar - other.astar;
        let d_b = self.bstar - other.bstar;
        let de_prime = (d_j * d_j + d_a * d_a + d_b * d_b).sqrt();
        1.41 * de_prime.powf(0.63)
    }

    /// ARGB representation of this color, viewed in default conditions.
    pub fn to_argb(&self) -> u32 {
        self.viewed(&DEFAULT_VIEWING_CONDITIONS)
    }

    /// ARGB representation of this color, viewed in the given
    /// conditions. Out-of-gamut results are clipped channel-wise.
    pub fn viewed(&self, vc: &ViewingConditions) -> u32 {
        let [x, y, z] = self.xyz_in_viewing_conditions(vc);
        argb_from_xyz(x, y, z)
    }

    /// XYZ coordinates of this color when viewed in the given
    /// conditions.
    pub fn xyz_in_viewing_conditions(&self, vc: &ViewingConditions) -> [f64; 3] {
        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };

        let t = (alpha / (1.64 - 0.29f64.powf(vc.n)).powf(0.73)).powf(1.0 / 0.9);
        let h_rad = self.hue.to_radians();

        let e_hue = 0.25 * ((h_rad + 2.0).cos() + 3.8);
        let ac = vc.aw * (self.j / 100.0).powf(1.0 / (vc.c * vc.z));
        let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
        let p2 = ac / vc.nbb;

        let h_sin = h_rad.sin();
        let h_cos = h_rad.cos();

        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

        let r_c_base = (27.13 * r_a.abs() / (400.0 - r_a.abs())).max(0.0);
        let r_c = signum(r_a) * (100.0 / vc.fl) * r_c_base.powf(1.0 / 0.42);
        let g_c_base = (27.13 * g_a.abs() / (400.0 - g_a.abs())).max(0.0);
        let g_c = signum(g_a) * (100.0 / vc.fl) * g_c_base.powf(1.0 / 0.42);
        let b_c_base = (27.13 * b_a.abs() / (400.0 - b_a.abs())).max(0.0);
        let b_c = signum(b_a) * (100.0 / vc.fl) * b_c_base.powf(1.0 / 0.42);

        let r_f = r_c / vc.rgb_d[0];
        let g_f = g_c / vc.rgb_d[1];
        let b_f = b_c / vc.rgb_d[2];

        matrix_multiply([r_f, g_f, b_f], &CAM16RGB_TO_XYZ)
    }
}
