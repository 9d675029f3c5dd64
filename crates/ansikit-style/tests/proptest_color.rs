//! Property-based invariant tests for color conversion.
//!
//! Verifies:
//! 1. `to_hex` output always parses back to the same color
//! 2. `rgb_to_256` never lands in the 16-color range
//! 3. `blend` stays between the two endpoints on every channel
//! 4. `apply` output starts with the style's SGR and ends with a reset

use ansikit_style::{Color, ColorProfile, Rgb, SGR_RESET, Style, apply, rgb_to_256};
use proptest::prelude::*;

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn between(x: u8, a: u8, b: u8) -> bool {
    x >= a.min(b) && x <= a.max(b)
}

// ═════════════════════════════════════════════════════════════════════════
// Rgb
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_parses_back(rgb in rgb_strategy()) {
        prop_assert_eq!(Rgb::from_hex(&rgb.to_hex()), Ok(rgb));
        prop_assert_eq!(rgb.to_hex().parse::<Rgb>(), Ok(rgb));
    }

    #[test]
    fn palette_index_is_extended(rgb in rgb_strategy()) {
        prop_assert!(rgb_to_256(rgb.r, rgb.g, rgb.b) >= 16);
    }

    #[test]
    fn blend_stays_between(a in rgb_strategy(), b in rgb_strategy(), ratio in 0.0f64..=1.0) {
        let mixed = a.blend(b, ratio);
        prop_assert!(between(mixed.r, a.r, b.r));
        prop_assert!(between(mixed.g, a.g, b.g));
        prop_assert!(between(mixed.b, a.b, b.b));
    }

    #[test]
    fn components_clamp(r in any::<i32>(), g in any::<i32>(), b in any::<i32>()) {
        let rgb = Rgb::from_components(r, g, b);
        prop_assert_eq!(rgb.r, r.clamp(0, 255) as u8);
        prop_assert_eq!(rgb.g, g.clamp(0, 255) as u8);
        prop_assert_eq!(rgb.b, b.clamp(0, 255) as u8);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Style
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn apply_is_reset_wrapped(rgb in rgb_strategy(), text in "[a-z ]{0,16}") {
        let style = Style::new().fg(rgb);
        let out = apply(&style, &text);
        prop_assert!(out.starts_with(&style.sgr()));
        prop_assert!(out.ends_with(SGR_RESET));
        prop_assert!(out.contains(&text));
    }

    #[test]
    fn downgrade_fits_profile(rgb in rgb_strategy()) {
        let fg = Style::new().fg(rgb).downgrade(ColorProfile::Ansi16).fg;
        prop_assert!(matches!(fg, Some(Color::Ansi16(_))));
        let fg = Style::new().fg(rgb).downgrade(ColorProfile::Ansi256).fg;
        prop_assert!(matches!(fg, Some(Color::Ansi256(_))));
    }
}
