//! tonesmith: a design-token tonal palette generator.
//!
//! From a single seed color, tonesmith derives families of tonal
//! palettes that share a hue and chroma while spanning a perceptual
//! lightness axis, then maps them onto named design tokens.
//!
//! The color system is HCT: hue and chroma from the CAM16 color
//! appearance model, tone from L* of L*a*b*. CAM16 has no closed-form
//! inverse, so [`hct::Hct`] is backed by a numerical solver
//! ([`solver`]) that finds, for a hue and tone, the closest in-gamut
//! sRGB color at up to the requested chroma.
//!
//! ```
//! use tonesmith::hct::Hct;
//! use tonesmith::palette::TonalPalette;
//!
//! let seed = Hct::from_argb(0xff0000ff);
//! let mut palette = TonalPalette::from_hct(seed);
//! assert_eq!(palette.tone(40), 0xff343dff);
//! ```

pub mod cam16;
pub mod cli;
pub mod color;
pub mod config;
pub mod core_palette;
pub mod generate;
pub mod hct;
pub mod logging;
pub mod math;
pub mod palette;
pub mod solver;
pub mod viewing;

pub use cam16::Cam16;
pub use core_palette::CorePalette;
pub use hct::Hct;
pub use palette::TonalPalette;
pub use viewing::ViewingConditions;
