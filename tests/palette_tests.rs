//! Reference vectors for tonal and core palettes.
//!
//! The expected ARGB values are stable across implementations of the
//! tonal palette system to 8-bit precision; they must match exactly.

use tonesmith::core_palette::CorePalette;
use tonesmith::palette::TonalPalette;

#[test]
fn test_tonal_palette_of_blue() {
    let mut blue = TonalPalette::from_argb(0xff0000ff);

    assert_eq!(blue.tone(0), 0xff000000);
    assert_eq!(blue.tone(10), 0xff00006e);
    assert_eq!(blue.tone(20), 0xff0001ac);
    assert_eq!(blue.tone(30), 0xff0000ef);
    assert_eq!(blue.tone(40), 0xff343dff);
    assert_eq!(blue.tone(50), 0xff5a64ff);
    assert_eq!(blue.tone(60), 0xff7c84ff);
    assert_eq!(blue.tone(70), 0xff9da3ff);
    assert_eq!(blue.tone(80), 0xffbec2ff);
    assert_eq!(blue.tone(90), 0xffe0e0ff);
    assert_eq!(blue.tone(95), 0xfff1efff);
    assert_eq!(blue.tone(100), 0xffffffff);
}

#[test]
fn test_core_palette_of_blue() {
    let mut blue = CorePalette::of(0xff0000ff);

    assert_eq!(blue.a1.tone(0), 0xff000000);
    assert_eq!(blue.a1.tone(10), 0xff00006e);
    assert_eq!(blue.a1.tone(20), 0xff0001ac);
    assert_eq!(blue.a1.tone(30), 0xff0000ef);
    assert_eq!(blue.a1.tone(40), 0xff343dff);
    assert_eq!(blue.a1.tone(50), 0xff5a64ff);
    assert_eq!(blue.a1.tone(60), 0xff7c84ff);
    assert_eq!(blue.a1.tone(70), 0xff9da3ff);
    assert_eq!(blue.a1.tone(80), 0xffbec2ff);
    assert_eq!(blue.a1.tone(90), 0xffe0e0ff);
    assert_eq!(blue.a1.tone(95), 0xfff1efff);
    assert_eq!(blue.a1.tone(100), 0xffffffff);

    assert_eq!(blue.a2.tone(0), 0xff000000);
    assert_eq!(blue.a2.tone(10), 0xff191a2c);
    assert_eq!(blue.a2.tone(20), 0xff2e2f42);
    assert_eq!(blue.a2.tone(30), 0xff444559);
    assert_eq!(blue.a2.tone(40), 0xff5c5d72);
    assert_eq!(blue.a2.tone(50), 0xff75758b);
    assert_eq!(blue.a2.tone(60), 0xff8f8fa6);
    assert_eq!(blue.a2.tone(70), 0xffa9a9c1);
    assert_eq!(blue.a2.tone(80), 0xffc5c4dd);
    assert_eq!(blue.a2.tone(90), 0xffe1e0f9);
    assert_eq!(blue.a2.tone(95), 0xfff1efff);
    assert_eq!(blue.a2.tone(100), 0xffffffff);
}

#[test]
fn test_content_core_palette_of_blue() {
    let mut blue = CorePalette::content_of(0xff0000ff);

    assert_eq!(blue.a1.tone(0), 0xff000000);
    assert_eq!(blue.a1.tone(10), 0xff00006e);
    assert_eq!(blue.a1.tone(20), 0xff0001ac);
    assert_eq!(blue.a1.tone(30), 0xff0000ef);
    assert_eq!(blue.a1.tone(40), 0xff343dff);
    assert_eq!(blue.a1.tone(50), 0xff5a64ff);
    assert_eq!(blue.a1.tone(60), 0xff7c84ff);
    assert_eq!(blue.a1.tone(70), 0xff9da3ff);
    assert_eq!(blue.a1.tone(80), 0xffbec2ff);
    assert_eq!(blue.a1.tone(90), 0xffe0e0ff);
    assert_eq!(blue.a1.tone(95), 0xfff1efff);
    assert_eq!(blue.a1.tone(100), 0xffffffff);

    assert_eq!(blue.a2.tone(0), 0xff000000);
    assert_eq!(blue.a2.tone(10), 0xff14173f);
    assert_eq!(blue.a2.tone(20), 0xff2a2d55);
    assert_eq!(blue.a2.tone(30), 0xff40436d);
    assert_eq!(blue.a2.tone(40), 0xff585b86);
    assert_eq!(blue.a2.tone(50), 0xff7173a0);
    assert_eq!(blue.a2.tone(60), 0xff8b8dbb);
    assert_eq!(blue.a2.tone(70), 0xffa5a7d7);
    assert_eq!(blue.a2.tone(80), 0xffc1c3f4);
    assert_eq!(blue.a2.tone(90), 0xffe0e0ff);
    assert_eq!(blue.a2.tone(95), 0xfff1efff);
    assert_eq!(blue.a2.tone(100), 0xffffffff);
}

#[test]
fn test_key_color_sits_where_chroma_lives() {
    // Chroma 16 is realisable across the middle of the tone range, so
    // the key color stays near tone 50 and hits the chroma exactly.
    let palette = TonalPalette::from_hue_chroma(282.788, 16.0);
    let key = palette.key_color();
    assert!((key.chroma() - 16.0).abs() < 1.0);
    assert!((key.tone() - 50.0).abs() <= 3.0);

    // An impossible chroma request settles on the tone that realises
    // the most chroma for this hue.
    let vivid = TonalPalette::from_hue_chroma(282.788, 300.0);
    let vivid_key = vivid.key_color();
    assert!(vivid_key.chroma() > 80.0);
    assert!(vivid_key.tone() < 50.0);
}
