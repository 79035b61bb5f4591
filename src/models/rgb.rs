//! RGB colors for preview placeholders.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::cast_possible_truncation)]

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Picks a uniformly random color out of the 24-bit space.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value: u32 = rng.gen_range(0..1 << 24);
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Converts the color to a CSS hex string, `#rrggbb` (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use flexcols::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Relative luminance in 0.0..=1.0 (Rec. 709 weights, no gamma).
    #[must_use]
    pub fn luminance(&self) -> f32 {
        (0.2126 * f32::from(self.r) + 0.7152 * f32::from(self.g) + 0.0722 * f32::from(self.b))
            / 255.0
    }

    /// Black or white, whichever reads better on top of this color.
    #[must_use]
    pub fn contrast_text(&self) -> Self {
        if self.luminance() > 0.5 {
            Self::new(0, 0, 0)
        } else {
            Self::new(255, 255, 255)
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_to_hex_pads_channels() {
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(RgbColor::new(255, 10, 1).to_hex(), "#ff0a01");
    }

    #[test]
    fn test_random_colors_are_valid_hex() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let hex = RgbColor::random(&mut rng).to_hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_random_is_seeded() {
        let a = RgbColor::random(&mut StdRng::seed_from_u64(1));
        let b = RgbColor::random(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(RgbColor::new(255, 255, 255).contrast_text(), RgbColor::new(0, 0, 0));
        assert_eq!(RgbColor::new(0, 0, 80).contrast_text(), RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_to_ratatui_color() {
        assert_eq!(
            RgbColor::new(1, 2, 3).to_ratatui_color(),
            ratatui::style::Color::Rgb(1, 2, 3)
        );
    }
}
