use crate::{Activation, GroupSeed};
use std::fmt::{Display, Formatter};

/// An RGB color, displayed as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Derives the presentation color of a group from its seed.
///
/// Channels are kept in the upper half of the range so the color stays
/// readable on dark backgrounds.
pub fn render_color(seed: &GroupSeed) -> Rgb {
    let bytes = seed.view_bytes();

    Rgb {
        red: 0x80 | (bytes[16] >> 1),
        green: 0x80 | (bytes[17] >> 1),
        blue: 0x80 | (bytes[18] >> 1),
    }
}

/// Derives the ANSI foreground color code (31 to 37) of a group from its seed.
pub fn ansi_color(seed: &GroupSeed) -> u8 {
    31 + seed.view_bytes()[31] % 7
}

/// A wrapped [`Activation`] that implements [`Display`] by writing it inside a
/// bold ANSI color escape picked by [`ansi_color`].
pub struct Painted<'b, 'a>(pub(crate) &'b Activation<'a>);

impl Display for Painted<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let color = ansi_color(self.0.group().seed());

        write!(f, "\x1b[1;{};40m{}\x1b[0m", color, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn color_is_stable() {
        // Given
        let seed = GroupSeed::derive("alpha");

        // When
        let color_a = render_color(&seed);
        let color_b = render_color(&GroupSeed::derive("alpha"));

        // Then
        assert_eq!(color_a, color_b);
        assert!(color_a.red >= 0x80 && color_a.green >= 0x80 && color_a.blue >= 0x80);
    }

    #[test]
    fn hex_display() {
        // Given
        let color = Rgb {
            red: 0xff,
            green: 0x80,
            blue: 0x0a,
        };

        // When
        let hex = color.to_string();

        // Then
        assert_eq!(hex, "#ff800a");
    }

    #[test]
    fn ansi_range() {
        for name in ["", "a", "b", "c", "group", "another group"] {
            let code = ansi_color(&GroupSeed::derive(name));

            assert!((31..=37).contains(&code));
        }
    }
}
