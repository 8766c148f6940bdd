use super::{steps, Style};
use crate::layout::Area;
use crate::primitive::Primitives;
use crate::PaperError;

/// Ruled paper drawn as rows of dots: one row at every multiple of the spacing, with
/// dots every `dot_spacing` along it. No dot sits on the left edge. Dot radius is half
/// the stroke width the solid lines would have.
pub fn dotted_lines(area: Area, style: &Style, out: &mut Primitives) -> Result<(), PaperError> {
    let width = *area.width;
    let pitch = *style.dot_spacing();
    let radius = style.stroke_width() / 2.0;

    for y in steps(*style.spacing, 1, *area.height) {
        for x in steps(pitch, 0, width).filter(|&x| x > 0.0) {
            out.circle((x, y), radius, style.colour)?;
        }
    }
    Ok(())
}
