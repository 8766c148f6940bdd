use crate::layout::{Area, Margins};
use crate::pagesize::PageSize;
use crate::primitive::Primitive;
use crate::transform::Transform;
use crate::units::Mm;

/// One pattern instance placed on a page.
///
/// The surface is as large as the full page. Its primitives are relative to the top-left
/// corner of the drawable area, which sits `offset` away from the page's top-left corner.
/// Primitives are not clipped to the drawable area; anything that overscans it (e.g. the
/// border cells of the hexagon pattern) is cut off by the page edge only.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Full page width
    pub width: Mm,
    /// Full page height
    pub height: Mm,
    /// Origin of the drawable area, from the page's top-left corner
    pub offset: (Mm, Mm),
    /// The drawable area the pattern was generated for
    pub area: Area,
    /// The pattern, in generation order
    pub primitives: Vec<Primitive>,
}

impl Surface {
    /// Place `primitives` generated for `area` on a page of `page` size with `margins`.
    ///
    /// Negative or non-finite margins are treated as zero, as [Area::within] does.
    pub fn new(page: PageSize, margins: &Margins, area: Area, primitives: Vec<Primitive>) -> Surface {
        Surface {
            width: page.0,
            height: page.1,
            offset: margins.clamped().origin(),
            area,
            primitives,
        }
    }

    /// Transform from surface millimetres onto a PDF page of the same size, in points
    pub fn pdf_transform(&self) -> Transform {
        Transform::page_from_mm(self.height, self.offset)
    }
}
