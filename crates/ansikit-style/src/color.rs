#![forbid(unsafe_code)]

//! Color types, profiles, parsing, and downgrade utilities.

use std::fmt;
use std::str::FromStr;

/// Terminal color profile used for downgrade decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorProfile {
    /// No color output.
    Mono,
    /// Standard 16 ANSI colors.
    Ansi16,
    /// Extended 256-color palette.
    Ansi256,
    /// Full 24-bit RGB color.
    TrueColor,
}

impl ColorProfile {
    /// Choose the best available profile from detection flags.
    ///
    /// `no_color` should reflect explicit user intent (e.g. NO_COLOR).
    #[must_use]
    pub const fn from_flags(true_color: bool, colors_256: bool, no_color: bool) -> Self {
        if no_color {
            Self::Mono
        } else if true_color {
            Self::TrueColor
        } else if colors_256 {
            Self::Ansi256
        } else {
            Self::Ansi16
        }
    }

    /// Profile for the attached terminal.
    #[must_use]
    pub fn detect() -> Self {
        let caps = ansikit_core::TerminalCapabilities::detect();
        Self::from_flags(caps.true_color, caps.colors_256, !caps.ansi_color)
    }
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input was empty.
    Empty,
    /// Not six hexadecimal digits (after an optional `#`).
    InvalidHex(String),
    /// Not a hex string and not in the named catalog.
    UnknownName(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "color string is empty"),
            Self::InvalidHex(raw) => write!(f, "invalid hex color: {raw:?}"),
            Self::UnknownName(raw) => write!(f, "unknown color name: {raw:?}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

/// Named colors accepted by [`Rgb::named`].
const NAMED: [(&str, Rgb); 16] = [
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("white", Rgb::new(255, 255, 255)),
    ("black", Rgb::new(0, 0, 0)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("pink", Rgb::new(255, 192, 203)),
    ("gray", Rgb::new(128, 128, 128)),
    ("lightgray", Rgb::new(211, 211, 211)),
    ("darkgray", Rgb::new(169, 169, 169)),
    ("brown", Rgb::new(165, 42, 42)),
    ("navy", Rgb::new(0, 0, 128)),
];

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wide components, clamping each to `0..=255`.
    #[must_use]
    pub fn from_components(r: i32, g: i32, b: i32) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive).
    pub fn from_hex(raw: &str) -> Result<Self, ColorParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(raw.to_owned()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidHex(raw.to_owned()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Look up a color from the small named catalog (case-insensitive).
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        let name = name.trim();
        NAMED
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, rgb)| rgb)
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Scale every channel by `factor`, truncating and clamping.
    #[must_use]
    pub fn brightness(self, factor: f64) -> Self {
        let scale = |c: u8| clamp_channel_f64(f64::from(c) * factor);
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// 30% darker.
    #[must_use]
    pub fn darker(self) -> Self {
        self.brightness(0.7)
    }

    /// 30% brighter.
    #[must_use]
    pub fn brighter(self) -> Self {
        self.brightness(1.3)
    }

    /// Linear blend, rounded; `ratio` 0.0 keeps `self`, 1.0 yields `other`.
    #[must_use]
    pub fn blend(self, other: Self, ratio: f64) -> Self {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| {
            clamp_channel_f64((f64::from(a) * (1.0 - ratio) + f64::from(b) * ratio).round())
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Accepts hex (`#ff8800`, `ff8800`) or a catalog name (`orange`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_hex(s) {
            Ok(rgb) => Ok(rgb),
            Err(ColorParseError::InvalidHex(_)) if !s.trim().starts_with('#') => {
                Self::named(s).ok_or_else(|| ColorParseError::UnknownName(s.to_owned()))
            }
            Err(err) => Err(err),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

fn clamp_channel_f64(v: f64) -> u8 {
    if v.is_nan() { 0 } else { v.clamp(0.0, 255.0) as u8 }
}

/// ANSI 16-color indices (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Ansi16 {
    /// Return the raw ANSI index (0–15).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Convert a `u8` index to an `Ansi16` variant, returning `None` if out of range.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Black),
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Blue),
            5 => Some(Self::Magenta),
            6 => Some(Self::Cyan),
            7 => Some(Self::White),
            8 => Some(Self::BrightBlack),
            9 => Some(Self::BrightRed),
            10 => Some(Self::BrightGreen),
            11 => Some(Self::BrightYellow),
            12 => Some(Self::BrightBlue),
            13 => Some(Self::BrightMagenta),
            14 => Some(Self::BrightCyan),
            15 => Some(Self::BrightWhite),
            _ => None,
        }
    }

    /// SGR parameter for this color as foreground (30–37, 90–97).
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        let idx = self.as_u8();
        if idx < 8 { 30 + idx } else { 90 + idx - 8 }
    }

    /// SGR parameter for this color as background (40–47, 100–107).
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

/// A color value at varying fidelity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// True-color RGB value.
    Rgb(Rgb),
    /// 256-color palette index.
    Ansi256(u8),
    /// Standard 16-color ANSI value.
    Ansi16(Ansi16),
}

impl Color {
    /// Create a true-color RGB value.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Downgrade this color to fit the given color profile.
    ///
    /// Returns `None` for [`ColorProfile::Mono`]: no color is emitted at all.
    #[must_use]
    pub fn downgrade(self, profile: ColorProfile) -> Option<Self> {
        let downgraded = match profile {
            ColorProfile::Mono => return None,
            ColorProfile::TrueColor => self,
            ColorProfile::Ansi256 => match self {
                Self::Rgb(rgb) => Self::Ansi256(rgb_to_256(rgb.r, rgb.g, rgb.b)),
                _ => self,
            },
            ColorProfile::Ansi16 => match self {
                Self::Rgb(rgb) => Self::Ansi16(rgb_to_ansi16(rgb.r, rgb.g, rgb.b)),
                Self::Ansi256(idx) => Self::Ansi16(rgb_to_ansi16_from_ansi256(idx)),
                Self::Ansi16(_) => self,
            },
        };
        Some(downgraded)
    }

    /// Append the SGR parameters selecting this color (no `ESC[` / `m`).
    pub(crate) fn push_params(self, background: bool, out: &mut Vec<String>) {
        match self {
            Self::Ansi16(c) => {
                let code = if background { c.bg_code() } else { c.fg_code() };
                out.push(code.to_string());
            }
            Self::Ansi256(idx) => {
                out.push(if background { "48" } else { "38" }.to_owned());
                out.push("5".to_owned());
                out.push(idx.to_string());
            }
            Self::Rgb(rgb) => {
                out.push(if background { "48" } else { "38" }.to_owned());
                out.push("2".to_owned());
                out.push(rgb.r.to_string());
                out.push(rgb.g.to_string());
                out.push(rgb.b.to_string());
            }
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Ansi16> for Color {
    fn from(color: Ansi16) -> Self {
        Self::Ansi16(color)
    }
}

const ANSI16_PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),       // Black
    Rgb::new(205, 0, 0),     // Red
    Rgb::new(0, 205, 0),     // Green
    Rgb::new(205, 205, 0),   // Yellow
    Rgb::new(0, 0, 238),     // Blue
    Rgb::new(205, 0, 205),   // Magenta
    Rgb::new(0, 205, 205),   // Cyan
    Rgb::new(229, 229, 229), // White
    Rgb::new(127, 127, 127), // Bright Black
    Rgb::new(255, 0, 0),     // Bright Red
    Rgb::new(0, 255, 0),     // Bright Green
    Rgb::new(255, 255, 0),   // Bright Yellow
    Rgb::new(92, 92, 255),   // Bright Blue
    Rgb::new(255, 0, 255),   // Bright Magenta
    Rgb::new(0, 255, 255),   // Bright Cyan
    Rgb::new(255, 255, 255), // Bright White
];

/// Convert an ANSI 16-color value to its canonical RGB representation.
#[must_use]
pub fn ansi16_to_rgb(color: Ansi16) -> Rgb {
    ANSI16_PALETTE[color.as_u8() as usize]
}

/// Convert an RGB color to the nearest ANSI 256-color index.
#[must_use]
pub fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return 232 + ((r - 8) / 10).min(23);
    }

    16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
}

/// Nearest level in the 6×6×6 cube `[0, 95, 135, 175, 215, 255]`,
/// split at the midpoints between levels.
fn cube_index(v: u8) -> u8 {
    if v < 48 {
        0
    } else if v < 115 {
        1
    } else {
        (v - 35) / 40
    }
}

/// Convert an ANSI 256-color index to its RGB representation.
#[must_use]
pub fn ansi256_to_rgb(index: u8) -> Rgb {
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    if index < 16 {
        return ANSI16_PALETTE[index as usize];
    }
    if index >= 232 {
        let gray = 8 + 10 * (index - 232);
        return Rgb::new(gray, gray, gray);
    }
    let idx = index - 16;
    Rgb::new(
        LEVELS[(idx / 36) as usize],
        LEVELS[((idx / 6) % 6) as usize],
        LEVELS[(idx % 6) as usize],
    )
}

/// Convert an RGB color to the nearest ANSI 16-color value.
#[must_use]
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> Ansi16 {
    let target = Rgb::new(r, g, b);
    ANSI16_PALETTE
        .iter()
        .enumerate()
        .min_by_key(|(_, candidate)| weighted_distance(target, **candidate))
        .and_then(|(idx, _)| Ansi16::from_u8(idx as u8))
        .unwrap_or(Ansi16::Black)
}

/// Convert an ANSI 256-color index to the nearest ANSI 16-color value.
#[must_use]
pub fn rgb_to_ansi16_from_ansi256(index: u8) -> Ansi16 {
    let rgb = ansi256_to_rgb(index);
    rgb_to_ansi16(rgb.r, rgb.g, rgb.b)
}

fn weighted_distance(a: Rgb, b: Rgb) -> u64 {
    let dr = (a.r as i32 - b.r as i32).unsigned_abs() as u64;
    let dg = (a.g as i32 - b.g as i32).unsigned_abs() as u64;
    let db = (a.b as i32 - b.b as i32).unsigned_abs() as u64;
    2126 * dr * dr + 7152 * dg * dg + 722 * db * db
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- ColorProfile tests ---

    #[test]
    fn profile_from_flags_prefers_mono() {
        assert_eq!(ColorProfile::from_flags(true, true, true), ColorProfile::Mono);
        assert_eq!(ColorProfile::from_flags(true, false, false), ColorProfile::TrueColor);
        assert_eq!(ColorProfile::from_flags(false, true, false), ColorProfile::Ansi256);
        assert_eq!(ColorProfile::from_flags(false, false, false), ColorProfile::Ansi16);
    }

    #[test]
    fn truecolor_passthrough() {
        let color = Color::rgb(12, 34, 56);
        assert_eq!(color.downgrade(ColorProfile::TrueColor), Some(color));
    }

    #[test]
    fn mono_drops_color() {
        assert_eq!(Color::rgb(1, 2, 3).downgrade(ColorProfile::Mono), None);
    }

    // --- Rgb tests ---

    #[test]
    fn from_components_clamps() {
        assert_eq!(Rgb::from_components(-20, 300, 128), Rgb::new(0, 255, 128));
    }

    #[test]
    fn hex_round_trip() {
        let rgb = Rgb::from_hex("#ff5500").unwrap();
        assert_eq!(rgb, Rgb::new(255, 85, 0));
        assert_eq!(rgb.to_hex(), "#FF5500");
        assert_eq!(Rgb::from_hex("00Aa10").unwrap(), Rgb::new(0, 170, 16));
    }

    #[test]
    fn hex_rejects_malformed() {
        assert_eq!(Rgb::from_hex(""), Err(ColorParseError::Empty));
        assert!(matches!(Rgb::from_hex("#fff"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(Rgb::from_hex("#gg0000"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(Rgb::from_hex("#ééé"), Err(ColorParseError::InvalidHex(_))));
    }

    #[test]
    fn named_lookup_is_case_insensitive() {
        assert_eq!(Rgb::named("Orange"), Some(Rgb::new(255, 165, 0)));
        assert_eq!(Rgb::named("NAVY"), Some(Rgb::new(0, 0, 128)));
        assert_eq!(Rgb::named("chartreuse"), None);
    }

    #[test]
    fn from_str_accepts_hex_and_names() {
        assert_eq!("pink".parse::<Rgb>(), Ok(Rgb::new(255, 192, 203)));
        assert_eq!("#000080".parse::<Rgb>(), Ok(Rgb::new(0, 0, 128)));
        assert!(matches!("teal".parse::<Rgb>(), Err(ColorParseError::UnknownName(_))));
        assert!(matches!("#teal".parse::<Rgb>(), Err(ColorParseError::InvalidHex(_))));
    }

    #[test]
    fn brightness_clamps() {
        assert_eq!(Rgb::new(200, 100, 10).brighter(), Rgb::new(255, 130, 13));
        assert_eq!(Rgb::new(100, 50, 0).darker(), Rgb::new(70, 35, 0));
        assert_eq!(Rgb::new(10, 10, 10).brightness(-1.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn blend_endpoints() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
        assert_eq!(a.blend(b, 0.5), Rgb::new(100, 50, 25));
        assert_eq!(a.blend(b, 7.0), b);
    }

    // --- Conversion tests ---

    #[test]
    fn rgb_to_256_grays() {
        assert_eq!(rgb_to_256(0, 0, 0), 16);
        assert_eq!(rgb_to_256(255, 255, 255), 231);
        assert_eq!(rgb_to_256(128, 128, 128), 244);
    }

    #[test]
    fn rgb_to_256_cube_corners() {
        assert_eq!(rgb_to_256(255, 0, 0), 196);
        assert_eq!(rgb_to_256(0, 255, 0), 46);
        assert_eq!(rgb_to_256(0, 0, 255), 21);
    }

    #[test]
    fn ansi256_round_trips_cube_entries() {
        for idx in 16u8..232 {
            let rgb = ansi256_to_rgb(idx);
            if rgb.r == rgb.g && rgb.g == rgb.b {
                continue;
            }
            assert_eq!(rgb_to_256(rgb.r, rgb.g, rgb.b), idx);
        }
    }

    #[test]
    fn rgb_to_ansi16_exact_palette_hits() {
        for idx in 0u8..16 {
            let color = Ansi16::from_u8(idx).unwrap();
            let rgb = ansi16_to_rgb(color);
            assert_eq!(rgb_to_ansi16(rgb.r, rgb.g, rgb.b), color);
        }
    }

    #[test]
    fn ansi16_codes() {
        assert_eq!(Ansi16::Red.fg_code(), 31);
        assert_eq!(Ansi16::BrightCyan.fg_code(), 96);
        assert_eq!(Ansi16::Black.bg_code(), 40);
        assert_eq!(Ansi16::BrightWhite.bg_code(), 107);
    }

    #[test]
    fn color_params() {
        let mut params = Vec::new();
        Color::rgb(1, 2, 3).push_params(false, &mut params);
        assert_eq!(params, ["38", "2", "1", "2", "3"]);
        params.clear();
        Color::Ansi256(208).push_params(true, &mut params);
        assert_eq!(params, ["48", "5", "208"]);
    }
}
