//! Pattern generators and the registry that selects them.
//!
//! Every generator is a plain function of a drawable [`Area`] and a [`Style`]. It
//! pushes its primitives, in a fixed order, into a bounded [`Primitives`] sink and
//! holds no state between calls. [`generate`] is the entry point that validates the
//! inputs first; the generators themselves assume a valid style and a non-empty area.
//!
//! ```
//! use paper_gen::pattern::{generate, PatternId, Style};
//! use paper_gen::layout::Area;
//! use paper_gen::{Mm, DEFAULT_PRIMITIVE_LIMIT};
//!
//! let style = Style::new(Mm(10.0)).with_line_thickness(0.05);
//! let lines = generate(PatternId::Lines, Area::new(100.0, 100.0), &style, DEFAULT_PRIMITIVE_LIMIT)?;
//! assert_eq!(lines.len(), 9);
//! # Ok::<(), paper_gen::PaperError>(())
//! ```

mod dots;
mod dotted_lines;
mod grid;
mod hexagons;
mod isometric;
mod lines;
mod music;

use crate::colour::Colour;
use crate::layout::Area;
use crate::primitive::{Primitive, Primitives};
use crate::units::Mm;
use crate::PaperError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Radius of a dot, as a fraction of the spacing, for the dot grid patterns
pub(crate) const DOT_RADIUS_RATIO: f64 = 0.05;

/// A pattern generator: fills the sink with the pattern's primitives for one area
pub type Generator = fn(Area, &Style, &mut Primitives) -> Result<(), PaperError>;

/// Identifies one of the available patterns
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternId {
    Dots,
    Graph,
    Lines,
    Isometric,
    Hexagons,
    Music,
    DottedLines,
}

/// Static description of a pattern, for listing the choices to a user
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PatternDescriptor {
    pub id: PatternId,
    pub display_name: &'static str,
}

/// Every pattern, in menu order
pub static PATTERNS: [PatternDescriptor; 7] = [
    PatternDescriptor {
        id: PatternId::Graph,
        display_name: "Graph",
    },
    PatternDescriptor {
        id: PatternId::Dots,
        display_name: "Dots",
    },
    PatternDescriptor {
        id: PatternId::Lines,
        display_name: "Lines",
    },
    PatternDescriptor {
        id: PatternId::Isometric,
        display_name: "Isometric Dots",
    },
    PatternDescriptor {
        id: PatternId::Hexagons,
        display_name: "Hexagons",
    },
    PatternDescriptor {
        id: PatternId::Music,
        display_name: "Music Staff",
    },
    PatternDescriptor {
        id: PatternId::DottedLines,
        display_name: "Dotted Lines",
    },
];

impl PatternId {
    /// The generator function for this pattern
    pub fn generator(self) -> Generator {
        match self {
            PatternId::Dots => dots::dots,
            PatternId::Graph => grid::grid,
            PatternId::Lines => lines::lines,
            PatternId::Isometric => isometric::isometric_dots,
            PatternId::Hexagons => hexagons::hexagons,
            PatternId::Music => music::music_staves,
            PatternId::DottedLines => dotted_lines::dotted_lines,
        }
    }

    /// The stable string identifier, as used in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            PatternId::Dots => "dots",
            PatternId::Graph => "graph",
            PatternId::Lines => "lines",
            PatternId::Isometric => "isometric",
            PatternId::Hexagons => "hexagons",
            PatternId::Music => "music",
            PatternId::DottedLines => "dotted-lines",
        }
    }

    /// This pattern's entry in [PATTERNS]
    pub fn descriptor(self) -> &'static PatternDescriptor {
        let index = match self {
            PatternId::Graph => 0,
            PatternId::Dots => 1,
            PatternId::Lines => 2,
            PatternId::Isometric => 3,
            PatternId::Hexagons => 4,
            PatternId::Music => 5,
            PatternId::DottedLines => 6,
        };
        &PATTERNS[index]
    }

    /// Human readable name, as shown in a menu
    pub fn display_name(self) -> &'static str {
        self.descriptor().display_name
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternId {
    type Err = PaperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PATTERNS
            .iter()
            .map(|d| d.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| PaperError::UnknownPattern(s.to_string()))
    }
}

/// Everything about a pattern's appearance except where it's drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// The repeat distance of the pattern's tiling unit
    pub spacing: Mm,
    /// Colour of every primitive, with opacity already folded in
    pub colour: Colour,
    /// Stroke width as a fraction of `spacing`
    pub line_thickness: f64,
    /// Distance between the dots of the dotted lines pattern, `spacing / 4` when unset
    pub dot_spacing: Option<Mm>,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            spacing: Mm(5.0),
            colour: Colour::default(),
            line_thickness: 0.025,
            dot_spacing: None,
        }
    }
}

impl Style {
    /// Default style with the given spacing
    pub fn new(spacing: Mm) -> Style {
        Style {
            spacing,
            ..Style::default()
        }
    }

    /// Replace the colour, keeping its alpha as given
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    /// Fold `opacity` into the colour's alpha
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.colour = self.colour.with_opacity(opacity);
        self
    }

    /// Set the stroke width as a fraction of the spacing
    pub fn with_line_thickness(mut self, line_thickness: f64) -> Self {
        self.line_thickness = line_thickness;
        self
    }

    /// Set the distance between dots along a dotted line
    pub fn with_dot_spacing(mut self, dot_spacing: Mm) -> Self {
        self.dot_spacing = Some(dot_spacing);
        self
    }

    /// Stroke width of lines, which scales with the spacing
    pub fn stroke_width(&self) -> f64 {
        *self.spacing * self.line_thickness
    }

    /// Distance between dots along a dotted line, falling back to a quarter of the spacing
    pub fn dot_spacing(&self) -> Mm {
        self.dot_spacing.unwrap_or(self.spacing * 0.25)
    }

    /// Check the numeric parameters, failing on the first out-of-range value
    pub fn validate(&self) -> Result<(), PaperError> {
        let spacing = *self.spacing;
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(PaperError::InvalidParameter {
                name: "spacing",
                value: spacing,
            });
        }
        if !(self.line_thickness.is_finite() && self.line_thickness >= 0.0) {
            return Err(PaperError::InvalidParameter {
                name: "line_thickness",
                value: self.line_thickness,
            });
        }
        if let Some(Mm(dot_spacing)) = self.dot_spacing {
            if !(dot_spacing.is_finite() && dot_spacing > 0.0) {
                return Err(PaperError::InvalidParameter {
                    name: "dot_spacing",
                    value: dot_spacing,
                });
            }
        }
        Ok(())
    }
}

/// Generate the primitives of a pattern, in the pattern's fixed order.
///
/// Fails on invalid style parameters or a non-finite area, and when more than `limit`
/// primitives would be emitted. An area with a zero side yields no primitives.
pub fn generate(
    id: PatternId,
    area: Area,
    style: &Style,
    limit: usize,
) -> Result<Vec<Primitive>, PaperError> {
    style.validate()?;
    if !area.is_finite() {
        let value = if area.width.is_finite() {
            *area.height
        } else {
            *area.width
        };
        return Err(PaperError::InvalidParameter {
            name: "area",
            value,
        });
    }
    if area.is_empty() {
        log::debug!("{id}: drawable area {area:?} is empty, nothing to generate");
        return Ok(Vec::new());
    }

    let mut sink = Primitives::with_limit(limit);
    (id.generator())(area, style, &mut sink)?;
    log::debug!(
        "{id}: {} primitives for a {} x {} area at {} spacing",
        sink.len(),
        area.width,
        area.height,
        style.spacing
    );
    Ok(sink.into_vec())
}

/// Multiples of `step` starting at `first * step`, while strictly below `bound`.
///
/// `step` must be positive, which bounds the sequence for any finite `bound`.
pub(crate) fn steps(step: f64, first: u32, bound: f64) -> impl Iterator<Item = f64> {
    (first..)
        .map(move |k| k as f64 * step)
        .take_while(move |&v| v < bound)
}
