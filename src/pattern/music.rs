use super::Style;
use crate::layout::Area;
use crate::primitive::Primitives;
use crate::PaperError;

/// Lines per staff
const STAFF_LINES: u32 = 5;

/// Music manuscript: groups of five lines a quarter of the spacing apart, with two
/// spacings of gap between groups. The first staff starts one spacing below the top.
///
/// Both loops stop at the first line that would fall below the area, so the last
/// staff may be cut short.
pub fn music_staves(area: Area, style: &Style, out: &mut Primitives) -> Result<(), PaperError> {
    let (width, height) = (*area.width, *area.height);
    let spacing = *style.spacing;
    let stroke = style.stroke_width();

    let line_gap = spacing / 4.0;
    let staff_height = line_gap * (STAFF_LINES - 1) as f64;
    let period = staff_height + spacing * 2.0;

    for group in (0u32..).take_while(|&i| i as f64 * period < height) {
        let top = group as f64 * period + spacing;
        if top > height {
            break;
        }

        for line in 0..STAFF_LINES {
            let y = top + line as f64 * line_gap;
            if y > height {
                break;
            }
            out.line((0.0, y), (width, y), stroke, style.colour)?;
        }
    }
    Ok(())
}
