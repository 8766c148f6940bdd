use crate::units::Mm;
use serde::{Deserialize, Serialize};

/// Margins separate the page edge from the area a pattern is drawn in. The
/// pattern's origin is moved to the top-left corner of the margins, and the
/// drawable area shrinks by the sum of each opposing pair.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Mm,
    pub right: Mm,
    pub bottom: Mm,
    pub left: Mm,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Mm, right: Mm, bottom: Mm, left: Mm) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Mm>>(value: D) -> Margins {
        let value: Mm = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Mm, horizontal: Mm) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Mm(0.0))
    }

    /// These margins with every negative or non-finite side replaced by zero
    pub fn clamped(&self) -> Margins {
        let side = |value: Mm| {
            if value.is_finite() {
                value.non_negative()
            } else {
                Mm(0.0)
            }
        };
        let clamped = Margins {
            top: side(self.top),
            right: side(self.right),
            bottom: side(self.bottom),
            left: side(self.left),
        };
        if clamped != *self {
            log::warn!("margins {self:?} clamped to {clamped:?}");
        }
        clamped
    }

    /// Combined left and right margins
    pub fn horizontal(&self) -> Mm {
        self.left + self.right
    }

    /// Combined top and bottom margins
    pub fn vertical(&self) -> Mm {
        self.top + self.bottom
    }

    /// The offset of the drawable area's origin from the page's top-left corner
    pub fn origin(&self) -> (Mm, Mm) {
        (self.left, self.top)
    }
}
