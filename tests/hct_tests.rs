//! Contract tests for the HCT system across the color space.

use approx::assert_abs_diff_eq;
use tonesmith::color::{hex_from_argb, is_opaque, lstar_from_argb};
use tonesmith::hct::Hct;
use tonesmith::math::difference_degrees;

#[test]
fn test_solver_contracts_across_grid() {
    // Hue is preserved within solver tolerance, chroma never exceeds
    // the request by more than measurement noise, and tone is exact to
    // within 8-bit quantization.
    let mut hue = 15.0;
    while hue < 360.0 {
        for chroma in [0.0, 20.0, 40.0, 60.0, 80.0, 100.0] {
            for tone in [20.0, 40.0, 60.0, 80.0] {
                let hct = Hct::from(hue, chroma, tone);
                if chroma > 0.0 {
                    assert!(
                        difference_degrees(hct.hue(), hue) <= 4.0,
                        "hue {hue} chroma {chroma} tone {tone} realised hue {}",
                        hct.hue()
                    );
                }
                assert!(
                    hct.chroma() <= chroma + 2.5,
                    "hue {hue} chroma {chroma} tone {tone} realised chroma {}",
                    hct.chroma()
                );
                assert_abs_diff_eq!(hct.tone(), tone, epsilon = 0.5);
            }
        }
        hue += 30.0;
    }
}

#[test]
fn test_solver_output_is_opaque_and_in_gamut() {
    let mut hue = 0.0;
    while hue < 360.0 {
        let hct = Hct::from(hue, 500.0, 50.0);
        assert!(is_opaque(hct.to_argb()));
        hue += 15.0;
    }
}

#[test]
fn test_gamut_saturation_is_stable() {
    // Past the gamut limit, asking for more chroma changes nothing.
    for hue in [27.0, 90.0, 142.0, 210.0, 282.0, 335.0] {
        for tone in [20.0, 50.0, 80.0] {
            let at_limit = Hct::from(hue, 500.0, tone);
            let beyond = Hct::from(hue, 1000.0, tone);
            assert_eq!(at_limit.to_argb(), beyond.to_argb());
        }
    }
}

#[test]
fn test_tone_agrees_with_lstar() {
    let mut argb = 0xff000000u32;
    // A coarse sweep of the RGB cube.
    for r in (0..=255u32).step_by(51) {
        for g in (0..=255u32).step_by(51) {
            for b in (0..=255u32).step_by(51) {
                argb = 0xff000000 | (r << 16) | (g << 8) | b;
                let hct = Hct::from_argb(argb);
                assert_abs_diff_eq!(hct.tone(), lstar_from_argb(argb), epsilon = 1e-9);
            }
        }
    }
    assert_eq!(argb, 0xffffffff);
}

#[test]
fn test_blue_at_tone_40_formats_as_hex() {
    let blue = Hct::from_argb(0xff0000ff);
    assert_eq!(hex_from_argb(blue.with_tone(40.0).to_argb()), "#343dff");
}

#[test]
fn test_extreme_tones_are_pure() {
    assert_eq!(Hct::from(120.0, 60.0, 0.0).to_argb(), 0xff000000);
    assert_eq!(Hct::from(120.0, 60.0, 100.0).to_argb(), 0xffffffff);
}
