//! 2D transformation matrices for placing a surface on a PDF page.

use crate::units::*;
use pdf_writer::Content;

/// An affine transformation matrix, in the form PDF's `cm` operator takes.
///
/// The matrix is represented as [a, b, c, d, e, f] corresponding to:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
///
/// # Composing transforms
///
/// Transforms can be chained using [`then`](Transform::then) or
/// [`with_translate`](Transform::with_translate). Operations are applied in the order they're chained.
///
/// ```
/// use paper_gen::{Transform, Pt};
///
/// // scale content to half size, then move it 72 points right and up
/// let transform = Transform::scale(0.5, 0.5)
///     .with_translate(Pt(72.0), Pt(72.0));
/// assert_eq!(transform.apply(10.0, 10.0), (77.0, 77.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    /// Identity transform (no transformation)
    pub fn identity() -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a translation transform
    pub fn translate(x: Pt, y: Pt) -> Self {
        Transform {
            e: *x,
            f: *y,
            ..Self::identity()
        }
    }

    /// Create a scaling transform
    pub fn scale(sx: f32, sy: f32) -> Self {
        Transform {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }

    /// Map a surface laid out in millimetres, with a top-left origin and y growing
    /// downwards, onto a page of `page_height` in PDF points, whose origin is the
    /// bottom-left corner. `offset` moves the surface's origin away from the page corner.
    pub fn page_from_mm(page_height: Mm, offset: (Mm, Mm)) -> Self {
        let k = *Pt::from(Mm(1.0));
        let (left, top) = offset;
        Transform::scale(k, -k).with_translate(left.into(), (page_height - top).into())
    }

    /// Combine this transform with another (self * other)
    pub fn then(self, other: Transform) -> Self {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Add a translation to this transform
    pub fn with_translate(self, x: Pt, y: Pt) -> Self {
        self.then(Transform::translate(x, y))
    }

    /// Transform a point
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Write the transform to a PDF content stream
    pub fn write_to_content(&self, content: &mut Content) {
        content.transform([self.a, self.b, self.c, self.d, self.e, self.f]);
    }
}
