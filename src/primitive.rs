use crate::colour::Colour;
use crate::PaperError;

/// The default cap on the number of primitives a single pattern may emit
pub const DEFAULT_PRIMITIVE_LIMIT: usize = 200_000;

/// A single vector drawing instruction. Coordinates are in millimetres, relative to
/// the top-left corner of the drawable area, with y growing downwards.
#[derive(Clone, PartialEq, Debug)]
pub enum Primitive {
    /// A stroked line segment from (x1, y1) to (x2, y2)
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width: f64,
        colour: Colour,
    },
    /// A filled circle
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        colour: Colour,
    },
}

impl Primitive {
    pub fn colour(&self) -> Colour {
        match self {
            Primitive::Line { colour, .. } | Primitive::Circle { colour, .. } => *colour,
        }
    }

    /// Whether two primitives are painted identically, i.e. can share one stroke or fill
    pub fn same_paint(&self, other: &Primitive) -> bool {
        match (self, other) {
            (
                Primitive::Line {
                    stroke_width: wa,
                    colour: ca,
                    ..
                },
                Primitive::Line {
                    stroke_width: wb,
                    colour: cb,
                    ..
                },
            ) => wa == wb && ca == cb,
            (Primitive::Circle { colour: ca, .. }, Primitive::Circle { colour: cb, .. }) => {
                ca == cb
            }
            _ => false,
        }
    }

    /// The smallest (min_x, min_y, max_x, max_y) box holding the primitive's geometry,
    /// ignoring stroke width
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match *self {
            Primitive::Line { x1, y1, x2, y2, .. } => {
                (x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
            }
            Primitive::Circle { cx, cy, r, .. } => (cx - r, cy - r, cx + r, cy + r),
        }
    }
}

/// A bounded collector that generators push their primitives into.
///
/// Pushing past the limit fails with [PaperError::TooManyPrimitives], so a pathological
/// spacing on a large page is reported instead of exhausting memory. The collector is
/// consumed on success; on failure it is simply dropped, so no partial list escapes.
#[derive(Debug)]
pub struct Primitives {
    items: Vec<Primitive>,
    limit: usize,
}

impl Default for Primitives {
    fn default() -> Self {
        Primitives::with_limit(DEFAULT_PRIMITIVE_LIMIT)
    }
}

impl Primitives {
    /// An empty collector that accepts at most `limit` primitives
    pub fn with_limit(limit: usize) -> Primitives {
        Primitives {
            items: Vec::new(),
            limit,
        }
    }

    /// Append a primitive, failing once the limit has been reached
    pub fn push(&mut self, primitive: Primitive) -> Result<(), PaperError> {
        if self.items.len() >= self.limit {
            return Err(PaperError::TooManyPrimitives { limit: self.limit });
        }
        self.items.push(primitive);
        Ok(())
    }

    /// Append a line from one point to another
    pub fn line(
        &mut self,
        (x1, y1): (f64, f64),
        (x2, y2): (f64, f64),
        stroke_width: f64,
        colour: Colour,
    ) -> Result<(), PaperError> {
        self.push(Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            colour,
        })
    }

    /// Append a filled circle
    pub fn circle(&mut self, (cx, cy): (f64, f64), r: f64, colour: Colour) -> Result<(), PaperError> {
        self.push(Primitive::Circle { cx, cy, r, colour })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The collected primitives, in the order they were pushed
    pub fn into_vec(self) -> Vec<Primitive> {
        self.items
    }
}
