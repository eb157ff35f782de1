use std::fmt;

/// The color produced by a dominant color estimation.
///
/// A found color is always fully opaque. [`Color::EMPTY`] (all channels zero, including alpha) is
/// returned when no color could be found, for example for an empty or fully transparent image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    /// The "no dominant color found" result.
    pub const EMPTY: Color = Color {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 0,
    };

    pub fn opaque((red, green, blue): (u8, u8, u8)) -> Color {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn rgba(self) -> (u8, u8, u8, u8) {
        (self.red, self.green, self.blue, self.alpha)
    }

    /// The color as a lowercase `rrggbb` string, or `None` for [`Color::EMPTY`].
    pub fn hex(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

/// Formats the color as lowercase `rrggbb`. The empty color formats as an empty string.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        write!(f, "{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        image::Rgba([color.red, color.green, color.blue, color.alpha])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_color_formats_as_lowercase_hex() {
        let color = Color::opaque((0xab, 0x0c, 0xff));

        assert_eq!(color.hex().as_deref(), Some("ab0cff"));
        assert_eq!(color.to_string(), "ab0cff");
        assert_eq!(color.rgba(), (0xab, 0x0c, 0xff, 0xff));
    }

    #[test]
    fn empty_color_has_no_hex() {
        assert!(Color::EMPTY.is_empty());
        assert_eq!(Color::EMPTY.hex(), None);
        assert_eq!(Color::EMPTY.to_string(), "");
        assert_eq!(Color::default(), Color::EMPTY);
    }

    #[test]
    fn opaque_black_is_not_empty() {
        let black = Color::opaque((0, 0, 0));

        assert!(!black.is_empty());
        assert_eq!(black.hex().as_deref(), Some("000000"));
        assert_eq!(image::Rgba::from(black), image::Rgba([0, 0, 0, 255]));
    }
}
