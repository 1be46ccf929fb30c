//! The six tonal palettes derived from a single seed color.

use crate::cam16::Cam16;
use crate::palette::TonalPalette;

/// An intermediate concept between a seed color and a full color
/// scheme: accent palettes `a1`..`a3`, neutral palettes `n1`/`n2`, and
/// a fixed `error` palette.
#[derive(Debug, Clone)]
pub struct CorePalette {
    pub a1: TonalPalette,
    pub a2: TonalPalette,
    pub a3: TonalPalette,
    pub n1: TonalPalette,
    pub n2: TonalPalette,
    pub error: TonalPalette,
}

impl CorePalette {
    /// Create key tones from a seed color.
    ///
    /// Accent chroma is pushed up to at least 48 and the supporting
    /// palettes use fixed chroma, giving vivid, predictable schemes.
    pub fn of(argb: u32) -> Self {
        Self::new(argb, false)
    }

    /// Create content key tones from a seed color.
    ///
    /// All chroma values are derived proportionally from the seed, so
    /// the palettes stay faithful to the source material.
    pub fn content_of(argb: u32) -> Self {
        Self::new(argb, true)
    }

    fn new(argb: u32, is_content: bool) -> Self {
        let cam = Cam16::from_argb(argb);
        let hue = cam.hue;
        let chroma = cam.chroma;

        if is_content {
            Self {
                a1: TonalPalette::from_hue_chroma(hue, chroma),
                a2: TonalPalette::from_hue_chroma(hue, chroma / 3.0),
                a3: TonalPalette::from_hue_chroma(hue + 60.0, chroma / 2.0),
                n1: TonalPalette::from_hue_chroma(hue, (chroma / 12.0).min(4.0)),
                n2: TonalPalette::from_hue_chroma(hue, (chroma / 6.0).min(8.0)),
                error: TonalPalette::from_hue_chroma(25.0, 84.0),
            }
        } else {
            Self {
                a1: TonalPalette::from_hue_chroma(hue, chroma.max(48.0)),
                a2: TonalPalette::from_hue_chroma(hue, 16.0),
                a3: TonalPalette::from_hue_chroma(hue + 60.0, 24.0),
                n1: TonalPalette::from_hue_chroma(hue, 4.0),
                n2: TonalPalette::from_hue_chroma(hue, 8.0),
                error: TonalPalette::from_hue_chroma(25.0, 84.0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_chroma_has_a_floor() {
        // A washed-out seed still produces a vivid a1 palette in the
        // default mode.
        let pale = CorePalette::of(0xff8c9eff);
        assert!(pale.a1.chroma() >= 48.0);
    }

    #[test]
    fn content_mode_follows_the_seed() {
        let content = CorePalette::content_of(0xff0000ff);
        let seed = Cam16::from_argb(0xff0000ff);
        assert_eq!(content.a1.chroma(), seed.chroma);
        assert_eq!(content.a2.chroma(), seed.chroma / 3.0);
        assert_eq!(content.a3.hue(), seed.hue + 60.0);
    }

    #[test]
    fn error_palette_is_fixed() {
        let a = CorePalette::of(0xff0000ff);
        let b = CorePalette::of(0xff00ff00);
        assert_eq!(a.error.hue(), b.error.hue());
        assert_eq!(a.error.chroma(), 84.0);
    }
}
