use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumCount, EnumIter, EnumString, VariantArray};

/// Sticker color.
#[derive(
    Debug,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    VariantArray,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    /// White, on the Up face when solved.
    White,
    /// Yellow, on the Down face when solved.
    Yellow,
    /// Orange, on the Left face when solved.
    Orange,
    /// Red, on the Right face when solved.
    Red,
    /// Green, on the Front face when solved.
    Green,
    /// Blue, on the Back face when solved.
    Blue,
}

impl Color {
    /// Returns the one-letter code for the color.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    /// Returns the default display color.
    pub fn rgb(self) -> Rgb {
        let rgb = match self {
            Color::White => [255, 255, 255],
            Color::Yellow => [255, 255, 0],
            Color::Orange => [255, 128, 0],
            Color::Red => [255, 0, 0],
            Color::Green => [0, 255, 0],
            Color::Blue => [0, 0, 255],
        };
        Rgb { rgb }
    }
}

per_variant_list! {
    /// List containing a value per sticker color.
    pub struct PerColor<T> for Color;
}

/// 8-bit sRGB color that displays as a string like `"#ff00ff"`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// sRGB component values.
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.rgb))
    }
}
impl FromStr for Rgb {
    type Err = hex::FromHexError;

    /// Parses a hex string like `#ff00ff` or `#f0f`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rgb = [0_u8; 3];
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        match s.len() {
            3 => {
                let s = &s.chars().flat_map(|c| [c, c]).collect::<String>();
                hex::decode_to_slice(s, &mut rgb)?;
            }
            _ => hex::decode_to_slice(s, &mut rgb)?,
        }
        Ok(Rgb { rgb })
    }
}
impl Rgb {
    /// Pure black
    pub const BLACK: Rgb = Rgb { rgb: [0; 3] };
    /// Pure white
    pub const WHITE: Rgb = Rgb { rgb: [255; 3] };

    /// Returns whether dark text is more legible than light text on top of
    /// this color.
    pub fn is_light(self) -> bool {
        let [r, g, b] = self.rgb.map(u32::from);
        // Rec. 601 luma
        r * 299 + g * 587 + b * 114 > 128_000
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rgb_hex_strings() {
        assert_eq!(Color::Orange.rgb().to_string(), "#ff8000");
        assert_eq!("#f0f".parse::<Rgb>(), Ok(Rgb { rgb: [255, 0, 255] }));
        assert_eq!("00ff00".parse::<Rgb>(), Ok(Color::Green.rgb()));
        "#ff00".parse::<Rgb>().expect_err("odd length");
        "#gggggg".parse::<Rgb>().expect_err("bad digits");
    }

    #[test]
    fn test_color_names() {
        assert_eq!("white".parse::<Color>(), Ok(Color::White));
        assert_eq!(Color::Blue.to_string(), "Blue");
        let letters: String = Color::VARIANTS.iter().map(|c| c.letter()).collect();
        assert_eq!(letters, "WYORGB");
    }

    #[test]
    fn test_light_colors() {
        assert!(Color::White.rgb().is_light());
        assert!(Color::Yellow.rgb().is_light());
        assert!(!Color::Blue.rgb().is_light());
        assert!(!Rgb::BLACK.is_light());
    }
}
