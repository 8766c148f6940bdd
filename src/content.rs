//! PDF content stream rendering of a [`Surface`].

use crate::colour::Colour;
use crate::primitive::Primitive;
use crate::surface::Surface;
use pdf_writer::Content;

/// Control point distance for approximating a quarter circle with a cubic Bézier
const KAPPA: f32 = 0.552_284_8;

impl Surface {
    /// Draw the surface into a new PDF content stream for a page of the surface's size.
    ///
    /// A single `cm` maps millimetres with a top-left origin onto points with PDF's
    /// bottom-left origin and applies the margin offset, so coordinates are written as
    /// generated. Consecutive primitives with the same paint share one path, stroked or
    /// filled once. Content streams carry no transparency here, so colours are
    /// composited over white paper first.
    ///
    /// ```
    /// use paper_gen::{render, PageSettings};
    ///
    /// let content = render(&PageSettings::default())?.to_pdf_content();
    /// let bytes = content.finish();
    /// assert!(!bytes.is_empty());
    /// # Ok::<(), paper_gen::PaperError>(())
    /// ```
    pub fn to_pdf_content(&self) -> Content {
        let mut content = Content::new();
        if self.primitives.is_empty() {
            return content;
        }

        content.save_state();
        self.pdf_transform().write_to_content(&mut content);

        for run in self.primitives.chunk_by(|a, b| a.same_paint(b)) {
            render_run(&mut content, run);
        }

        content.restore_state();
        content
    }
}

/// Render primitives that all share the first one's paint
fn render_run(content: &mut Content, run: &[Primitive]) {
    match run.first() {
        Some(Primitive::Line {
            stroke_width,
            colour,
            ..
        }) => {
            let (r, g, b) = colour.over_white();
            content.set_line_width(*stroke_width as f32);
            content.set_stroke_rgb(r, g, b);
            for primitive in run {
                if let Primitive::Line { x1, y1, x2, y2, .. } = *primitive {
                    content.move_to(x1 as f32, y1 as f32);
                    content.line_to(x2 as f32, y2 as f32);
                }
            }
            content.stroke();
        }
        Some(Primitive::Circle { colour, .. }) => {
            set_fill(content, *colour);
            for primitive in run {
                if let Primitive::Circle { cx, cy, r, .. } = *primitive {
                    circle(content, cx as f32, cy as f32, r as f32);
                }
            }
            content.fill_nonzero();
        }
        None => {}
    }
}

fn set_fill(content: &mut Content, colour: Colour) {
    let (r, g, b) = colour.over_white();
    content.set_fill_rgb(r, g, b);
}

/// Append a closed circle made of four cubic Bézier quadrants to the current path
fn circle(content: &mut Content, cx: f32, cy: f32, r: f32) {
    let k = r * KAPPA;
    content.move_to(cx + r, cy);
    content.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    content.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    content.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    content.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    content.close_path();
}
