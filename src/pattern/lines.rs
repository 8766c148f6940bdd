use super::grid::horizontal_rules;
use super::Style;
use crate::layout::Area;
use crate::primitive::Primitives;
use crate::PaperError;

/// Ruled paper: the horizontal half of the graph pattern
pub fn lines(area: Area, style: &Style, out: &mut Primitives) -> Result<(), PaperError> {
    horizontal_rules(area, style, out)
}
