use super::{steps, Style};
use crate::layout::Area;
use crate::primitive::Primitives;
use crate::PaperError;

/// Graph paper: full-height vertical lines at every multiple of the spacing, then
/// full-width horizontal lines. Nothing is drawn on the area's border itself.
pub fn grid(area: Area, style: &Style, out: &mut Primitives) -> Result<(), PaperError> {
    let (width, height) = (*area.width, *area.height);
    let stroke = style.stroke_width();

    for x in steps(*style.spacing, 1, width) {
        out.line((x, 0.0), (x, height), stroke, style.colour)?;
    }
    horizontal_rules(area, style, out)
}

/// One full-width line at every multiple of the spacing strictly inside the area's height
pub(super) fn horizontal_rules(
    area: Area,
    style: &Style,
    out: &mut Primitives,
) -> Result<(), PaperError> {
    let width = *area.width;
    let stroke = style.stroke_width();

    for y in steps(*style.spacing, 1, *area.height) {
        out.line((0.0, y), (width, y), stroke, style.colour)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;
    use crate::units::Mm;

    fn run(width: f64, height: f64, spacing: f64) -> Vec<Primitive> {
        let mut out = Primitives::default();
        let style = Style::new(Mm(spacing)).with_line_thickness(0.05);
        grid(Area::new(width, height), &style, &mut out).unwrap();
        out.into_vec()
    }

    #[test]
    fn hundred_by_hundred_at_ten() {
        let lines = run(100.0, 100.0, 10.0);
        assert_eq!(lines.len(), 18);

        let (vertical, horizontal): (Vec<_>, Vec<_>) = lines
            .iter()
            .partition(|p| matches!(p, Primitive::Line { x1, x2, .. } if x1 == x2));
        assert_eq!(vertical.len(), 9);
        assert_eq!(horizontal.len(), 9);

        for (i, line) in vertical.iter().enumerate() {
            let Primitive::Line {
                x1,
                y1,
                y2,
                stroke_width,
                ..
            } = line
            else {
                unreachable!()
            };
            assert_eq!(*x1, (i + 1) as f64 * 10.0);
            assert_eq!((*y1, *y2), (0.0, 100.0));
            assert!((stroke_width - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn verticals_come_before_horizontals() {
        let lines = run(30.0, 30.0, 10.0);
        let kinds: Vec<bool> = lines
            .iter()
            .map(|p| matches!(p, Primitive::Line { x1, x2, .. } if x1 == x2))
            .collect();
        assert_eq!(kinds, vec![true, true, false, false]);
    }

    #[test]
    fn no_line_on_the_far_edge() {
        // 30 is a multiple of 10 but sits on the bound, so only 10 and 20 are drawn
        let lines = run(30.0, 15.0, 10.0);
        assert_eq!(lines.len(), 3);
    }
}
