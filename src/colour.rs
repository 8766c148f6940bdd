use crate::PaperError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGBA colour; r, g, b, and a range from 0.0 to 1.0
///
/// Opacity is folded into the alpha channel before a colour reaches the
/// pattern generators, which pass it through to every primitive untouched.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    /// Create a new, fully opaque colour. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour { r, g, b, a: 1.0 }
    }

    /// Create a new colour with an alpha channel. All components range from 0.0 to 1.0
    pub fn new_rgba(r: f32, g: f32, b: f32, a: f32) -> Colour {
        Colour { r, g, b, a }
    }

    /// Create a new, fully opaque colour. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string (the leading `#` is optional)
    ///
    /// ```
    /// use paper_gen::Colour;
    ///
    /// let grey = Colour::from_hex("#d1d5db").unwrap();
    /// assert_eq!(grey.to_bytes(), [209, 213, 219, 255]);
    /// assert!(Colour::from_hex("#fff").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Colour, PaperError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let hex_digits = digits.bytes().all(|b| b.is_ascii_hexdigit());
        if !(digits.len() == 6 || digits.len() == 8) || !hex_digits {
            return Err(PaperError::InvalidColour(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| PaperError::InvalidColour(hex.to_string()))
        };

        let mut colour = Colour::new_rgb_bytes(channel(0)?, channel(2)?, channel(4)?);
        if digits.len() == 8 {
            colour.a = channel(6)? as f32 / 255.0;
        }
        Ok(colour)
    }

    /// Parse a hex string, falling back to [colours::LIGHT_GREY] when it is malformed
    pub fn from_hex_or_default(hex: &str) -> Colour {
        Colour::from_hex(hex).unwrap_or_else(|err| {
            log::warn!("{err}, using the default colour instead");
            colours::LIGHT_GREY
        })
    }

    /// Return this colour with its alpha replaced by `opacity`, clamped to 0.0..=1.0
    pub fn with_opacity(self, opacity: f32) -> Colour {
        Colour {
            a: opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    /// The colour's components as bytes, in r, g, b, a order
    pub fn to_bytes(&self) -> [u8; 4] {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }

    /// Composite this colour over white paper, returning an opaque (r, g, b) triple.
    /// Used where the output format has no notion of transparency.
    pub fn over_white(&self) -> (f32, f32, f32) {
        let a = self.a.clamp(0.0, 1.0);
        let blend = |v: f32| a * v.clamp(0.0, 1.0) + (1.0 - a);
        (blend(self.r), blend(self.g), blend(self.b))
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when the colour is not fully opaque
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_bytes();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

/// Formats the colour as a CSS `rgba(r, g, b, a)` value
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.to_bytes();
        write!(f, "rgba({r}, {g}, {b}, {})", self.a.clamp(0.0, 1.0))
    }
}

impl Default for Colour {
    fn default() -> Self {
        colours::LIGHT_GREY
    }
}

impl TryFrom<String> for Colour {
    type Error = PaperError;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        Colour::from_hex(&hex)
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> Self {
        c.to_hex()
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::new_rgb(c.0.into(), c.1.into(), c.2.into())
    }
}

impl<T: Into<f32>> From<(T, T, T, T)> for Colour {
    fn from(c: (T, T, T, T)) -> Self {
        Colour::new_rgba(c.0.into(), c.1.into(), c.2.into(), c.3.into())
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Colour = Colour {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// `#d1d5db`, the default pattern colour
    pub const LIGHT_GREY: Colour = Colour {
        r: 209.0 / 255.0,
        g: 213.0 / 255.0,
        b: 219.0 / 255.0,
        a: 1.0,
    };
    pub const RED: Colour = Colour {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const GREEN: Colour = Colour {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };
    pub const BLUE: Colour = Colour {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };
}
