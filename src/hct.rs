//! HCT: hue and chroma from CAM16, tone from L*a*b*.
//!
//! Using L* for the lightness axis ties the color system directly to
//! contrast: tones are linear in human perception, and a tone delta of
//! 40 between two colors guarantees a WCAG contrast ratio of at least
//! 3.0, a delta of 50 at least 4.5.

use crate::cam16::Cam16;
use crate::color::{lstar_from_argb, lstar_from_y};
use crate::solver::solve_to_int;
use crate::viewing::ViewingConditions;

/// A color in the HCT color system.
///
/// The four fields are always mutually consistent: `argb` is the
/// in-gamut sRGB rendering of the hue, chroma, and tone, and the three
/// coordinates are re-measured from it. Requested chroma above the
/// gamut limit for a hue and tone is reduced, never clipped per
/// channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: u32,
}

impl Hct {
    /// Create an HCT color from hue, chroma, and tone.
    ///
    /// Hue is in degrees and is sanitized into [0, 360); tone is L* in
    /// [0, 100], corrected when out of range. The realised chroma may
    /// be lower than requested.
    pub fn from(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::from_argb(solve_to_int(hue, chroma, tone))
    }

    /// Measure an ARGB color in HCT.
    pub fn from_argb(argb: u32) -> Self {
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: lstar_from_argb(argb),
            argb,
        }
    }

    /// Hue in degrees, [0, 360).
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Chroma; informally, colorfulness.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Tone; L* lightness in [0, 100].
    #[inline]
    pub fn tone(&self) -> f64 {
        self.tone
    }

    /// The ARGB rendering of this color.
    #[inline]
    pub fn to_argb(&self) -> u32 {
        self.argb
    }

    /// This color with a different hue.
    ///
    /// Chroma may decrease; it has a different maximum for every hue
    /// and tone.
    pub fn with_hue(&self, hue: f64) -> Self {
        Self::from_argb(solve_to_int(hue, self.chroma, self.tone))
    }

    /// This color with a different chroma.
    pub fn with_chroma(&self, chroma: f64) -> Self {
        Self::from_argb(solve_to_int(self.hue, chroma, self.tone))
    }

    /// This color with a different tone.
    pub fn with_tone(&self, tone: f64) -> Self {
        Self::from_argb(solve_to_int(self.hue, self.chroma, tone))
    }

    /// Translate this color into different viewing conditions.
    ///
    /// The same hex code looks different under different environments;
    /// CAM16 models that relativity. The result is the HCT measurement,
    /// under default conditions, of how this color appears under `vc`.
    pub fn in_viewing_conditions(&self, vc: &ViewingConditions) -> Self {
        let viewed_in_vc = Cam16::from_argb(self.argb).xyz_in_viewing_conditions(vc);
        let recast = Cam16::from_xyz_in_viewing_conditions(
            viewed_in_vc[0],
            viewed_in_vc[1],
            viewed_in_vc[2],
            &crate::viewing::DEFAULT_VIEWING_CONDITIONS,
        );
        Self::from(recast.hue, recast.chroma, lstar_from_y(viewed_in_vc[1]))
    }
}

impl From<u32> for Hct {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Hct> for u32 {
    fn from(hct: Hct) -> Self {
        hct.to_argb()
    }
}
