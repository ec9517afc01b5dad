use palette::{Hsl, IntoColor, Srgb};

use crate::error::SpectrumError;

// ---------------------------------------------------------------------------
// Rgb – plot line color
// ---------------------------------------------------------------------------

/// A plot color as 8-bit RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The classic IR plot default (the red the original tooling shipped with).
pub const IR_RED: Rgb = Rgb(0xFF, 0x00, 0x00);

impl Rgb {
    /// Parse `#RRGGBB` (leading `#` optional) or one of a small set of
    /// named colors.
    pub fn parse(s: &str) -> Result<Rgb, SpectrumError> {
        let trimmed = s.trim();
        if let Some(named) = named_color(trimmed) {
            return Ok(named);
        }
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() == 6 {
            if let Ok(bits) = u32::from_str_radix(hex, 16) {
                return Ok(Rgb(
                    (bits >> 16) as u8,
                    (bits >> 8) as u8,
                    bits as u8,
                ));
            }
        }
        Err(SpectrumError::UnknownColor(s.to_string()))
    }
}

fn named_color(name: &str) -> Option<Rgb> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "black" => Rgb(0x00, 0x00, 0x00),
        "red" => IR_RED,
        "green" => Rgb(0x00, 0x80, 0x00),
        "blue" => Rgb(0x00, 0x00, 0xFF),
        "orange" => Rgb(0xFF, 0xA5, 0x00),
        "purple" => Rgb(0x80, 0x00, 0x80),
        "teal" => Rgb(0x00, 0x80, 0x80),
        "gray" | "grey" => Rgb(0x80, 0x80, 0x80),
        _ => return None,
    };
    Some(rgb)
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colors using evenly spaced hues. Used
/// for default per-spectrum colors when no explicit color is supplied.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::parse("#FF0000").unwrap(), IR_RED);
        assert_eq!(Rgb::parse("00ff7f").unwrap(), Rgb(0x00, 0xFF, 0x7F));
    }

    #[test]
    fn parses_named_colors_case_insensitively() {
        assert_eq!(Rgb::parse("Red").unwrap(), IR_RED);
        assert_eq!(Rgb::parse("teal").unwrap(), Rgb(0x00, 0x80, 0x80));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            Rgb::parse("#12345"),
            Err(SpectrumError::UnknownColor(_))
        ));
        assert!(matches!(
            Rgb::parse("chartreuse-ish"),
            Err(SpectrumError::UnknownColor(_))
        ));
    }

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        let palette = generate_palette(4);
        assert_eq!(palette.len(), 4);
        assert_ne!(palette[0], palette[2]);
        assert!(generate_palette(0).is_empty());
    }
}
