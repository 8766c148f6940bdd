use super::{steps, Style, DOT_RADIUS_RATIO};
use crate::layout::Area;
use crate::primitive::Primitives;
use crate::PaperError;

/// Dot grid: a dot at every interior lattice point, row by row.
/// The radius follows the spacing only; line thickness has no effect.
pub fn dots(area: Area, style: &Style, out: &mut Primitives) -> Result<(), PaperError> {
    let spacing = *style.spacing;
    let radius = spacing * DOT_RADIUS_RATIO;

    for y in steps(spacing, 1, *area.height) {
        for x in steps(spacing, 1, *area.width) {
            out.circle((x, y), radius, style.colour)?;
        }
    }
    Ok(())
}
