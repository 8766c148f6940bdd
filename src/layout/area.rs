use super::Margins;
use crate::pagesize::PageSize;
use crate::units::Mm;

/// The region a pattern is generated into: the page after orientation, minus its margins.
///
/// Both sides are always ≥ 0. Constructors clamp negative (and NaN) lengths to zero, so
/// margins wider than the page produce an empty area instead of an inverted one.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Area {
    pub width: Mm,
    pub height: Mm,
}

impl Area {
    /// Create an area, clamping each side at zero
    pub fn new<W: Into<Mm>, H: Into<Mm>>(width: W, height: H) -> Area {
        Area {
            width: width.into().non_negative(),
            height: height.into().non_negative(),
        }
    }

    /// The part of `page` left inside `margins`, after [Margins::clamped]
    ///
    /// ```
    /// use paper_gen::layout::{Area, Margins};
    /// use paper_gen::{pagesize, Mm};
    ///
    /// let area = Area::within(pagesize::A4, &Margins::all(Mm(15.0)));
    /// assert_eq!(area, Area::new(180.0, 267.0));
    ///
    /// let squashed = Area::within(pagesize::A6, &Margins::all(Mm(60.0)));
    /// assert!(squashed.is_empty());
    /// ```
    pub fn within(page: PageSize, margins: &Margins) -> Area {
        let (width, height) = page;
        let margins = margins.clamped();
        let area = Area::new(width - margins.horizontal(), height - margins.vertical());
        if area.width.0 <= 0.0 || area.height.0 <= 0.0 {
            log::warn!(
                "margins ({}, {}) leave no drawable area on a {} x {} page",
                margins.horizontal(),
                margins.vertical(),
                width,
                height
            );
        }
        area
    }

    /// Whether nothing can be drawn in this area
    pub fn is_empty(&self) -> bool {
        self.width.0 <= 0.0 || self.height.0 <= 0.0
    }

    /// Whether both sides are finite numbers
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}
