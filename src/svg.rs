//! SVG serialization of a [`Surface`].

use crate::primitive::Primitive;
use crate::surface::Surface;
use crate::PaperError;
use std::fmt::Write;

impl Surface {
    /// Write the surface as a standalone SVG document.
    ///
    /// The document is sized in millimetres with a `viewBox` spanning the whole page, so
    /// one user unit is one millimetre. The primitives sit in a group translated by the
    /// margins.
    ///
    /// ```
    /// use paper_gen::{render, PageSettings, PatternId};
    ///
    /// let settings = PageSettings {
    ///     pattern: PatternId::Lines,
    ///     ..PageSettings::default()
    /// };
    /// let svg = render(&settings)?.to_svg()?;
    /// assert!(svg.starts_with("<svg"));
    /// assert!(svg.contains(r#"<g transform="translate(15, 15)">"#));
    /// # Ok::<(), paper_gen::PaperError>(())
    /// ```
    pub fn to_svg(&self) -> Result<String, PaperError> {
        let mut svg = String::new();
        self.write_svg(&mut svg)?;
        Ok(svg)
    }

    /// Write the surface as an SVG document into any [std::fmt::Write] sink
    pub fn write_svg<W: Write>(&self, w: &mut W) -> Result<(), PaperError> {
        let (width, height) = (*self.width, *self.height);
        let (left, top) = (*self.offset.0, *self.offset.1);

        writeln!(
            w,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}mm" height="{height}mm" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(w, r#"<g transform="translate({left}, {top})">"#)?;
        for primitive in self.primitives.iter() {
            match primitive {
                Primitive::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    stroke_width,
                    colour,
                } => writeln!(
                    w,
                    r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{colour}" stroke-width="{stroke_width}"/>"#
                )?,
                Primitive::Circle { cx, cy, r, colour } => writeln!(
                    w,
                    r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{colour}"/>"#
                )?,
            }
        }
        writeln!(w, "</g>")?;
        write!(w, "</svg>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::colours;
    use crate::layout::{Area, Margins};
    use crate::primitive::Primitive;
    use crate::surface::Surface;
    use crate::units::Mm;

    #[test]
    fn one_element_per_primitive() {
        let surface = Surface::new(
            (Mm(100.0), Mm(50.0)),
            &Margins::trbl(Mm(5.0), Mm(0.0), Mm(0.0), Mm(10.0)),
            Area::new(90.0, 45.0),
            vec![
                Primitive::Line {
                    x1: 0.0,
                    y1: 10.0,
                    x2: 90.0,
                    y2: 10.0,
                    stroke_width: 0.25,
                    colour: colours::BLACK,
                },
                Primitive::Circle {
                    cx: 10.0,
                    cy: 10.0,
                    r: 0.5,
                    colour: colours::RED.with_opacity(0.5),
                },
            ],
        );
        let svg = surface.to_svg().unwrap();
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="100mm" height="50mm" viewBox="0 0 100 50">"#,
                r#"<g transform="translate(10, 5)">"#,
                r#"<line x1="0" y1="10" x2="90" y2="10" stroke="rgba(0, 0, 0, 1)" stroke-width="0.25"/>"#,
                r#"<circle cx="10" cy="10" r="0.5" fill="rgba(255, 0, 0, 0.5)"/>"#,
                "</g>",
                "</svg>",
            ]
        );
    }
}
