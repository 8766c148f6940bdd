use super::{Style, DOT_RADIUS_RATIO};
use crate::layout::Area;
use crate::primitive::Primitives;
use crate::PaperError;

/// Isometric dot grid: dots on a triangular lattice.
///
/// Rows are `spacing·√3/2` apart, starting one pitch down. Even rows are shifted right by
/// half the spacing. Columns run while `x·spacing − spacing/2 < width`, and a dot whose
/// shifted position lands past the right edge is dropped.
pub fn isometric_dots(area: Area, style: &Style, out: &mut Primitives) -> Result<(), PaperError> {
    let (width, height) = (*area.width, *area.height);
    let spacing = *style.spacing;
    let pitch = spacing * 3f64.sqrt() / 2.0;
    let radius = spacing * DOT_RADIUS_RATIO;

    for row in (1u32..).take_while(|&y| y as f64 * pitch < height) {
        let offset = if row % 2 == 0 { spacing / 2.0 } else { 0.0 };
        let cy = row as f64 * pitch;

        for column in (0u32..).take_while(|&x| x as f64 * spacing - spacing / 2.0 < width) {
            let cx = column as f64 * spacing + offset;
            if cx > width {
                continue;
            }
            out.circle((cx, cy), radius, style.colour)?;
        }
    }
    Ok(())
}
