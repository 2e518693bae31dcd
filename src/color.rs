//! Theme color types and CSS hex parsing.
//!
//! The field reads two accent colors from the host's theme as CSS hex tokens
//! (`#8b5cf6`, shorthand `#8bf` also accepted). Parsing never fails outward:
//! a malformed token falls back to the documented default triple so a broken
//! stylesheet can't stop the animation.

/// An opaque RGB triple, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fallback for the primary accent (particle dots).
pub const DEFAULT_ACCENT: Rgb = Rgb { r: 139, g: 92, b: 246 };

/// Fallback for the secondary accent (connection lines).
pub const DEFAULT_ACCENT2: Rgb = Rgb { r: 6, g: 182, b: 212 };

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a CSS hex color, with or without the leading `#`.
    ///
    /// Accepts the 6-digit form (`#8b5cf6`) and the 3-digit shorthand
    /// (`#8bf`, each nibble doubled). Returns `None` for anything else.
    pub fn parse_hex(token: &str) -> Option<Self> {
        let trimmed = token.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        match hex.len() {
            3 => {
                let mut nibbles = [0u8; 3];
                for (slot, ch) in nibbles.iter_mut().zip(hex.chars()) {
                    let n = ch.to_digit(16)? as u8;
                    *slot = n << 4 | n;
                }
                Some(Self::new(nibbles[0], nibbles[1], nibbles[2]))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Parse a hex token, falling back to `default` on failure.
    pub fn parse_hex_or(token: &str, default: Rgb) -> Self {
        Self::parse_hex(token).unwrap_or(default)
    }

    /// Attach an alpha channel for drawing.
    pub const fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba { r: self.r, g: self.g, b: self.b, a: alpha }
    }
}

/// An RGB triple plus draw alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Channels as normalized floats (straight alpha), for GPU upload.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }

    /// The color without its alpha.
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Rgb::parse_hex("#8b5cf6"), Some(Rgb::new(139, 92, 246)));
        assert_eq!(Rgb::parse_hex("06b6d4"), Some(Rgb::new(6, 182, 212)));
    }

    #[test]
    fn parses_shorthand_hex() {
        assert_eq!(Rgb::parse_hex("#03F"), Some(Rgb::new(0x00, 0x33, 0xff)));
        assert_eq!(Rgb::parse_hex("fff"), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn trims_whitespace() {
        // getComputedStyle-style tokens often carry surrounding whitespace
        assert_eq!(Rgb::parse_hex(" #8b5cf6 "), Some(Rgb::new(139, 92, 246)));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(Rgb::parse_hex(""), None);
        assert_eq!(Rgb::parse_hex("#12345"), None);
        assert_eq!(Rgb::parse_hex("#gggggg"), None);
        assert_eq!(Rgb::parse_hex("rgb(1,2,3)"), None);
    }

    #[test]
    fn falls_back_on_failure() {
        assert_eq!(Rgb::parse_hex_or("nonsense", DEFAULT_ACCENT), DEFAULT_ACCENT);
        assert_eq!(
            Rgb::parse_hex_or("#ffffff", DEFAULT_ACCENT),
            Rgb::new(255, 255, 255)
        );
    }

    #[test]
    fn alpha_attachment_preserves_channels() {
        let c = Rgb::new(10, 20, 30).with_alpha(0.5);
        assert_eq!(c.rgb(), Rgb::new(10, 20, 30));
        assert_eq!(c.a, 0.5);
    }
}
