use crate::layout::{Area, Margins};
use crate::pagesize::{self, Orientation, PageSize};
use crate::pattern::{generate, PatternId, Style};
use crate::primitive::DEFAULT_PRIMITIVE_LIMIT;
use crate::surface::Surface;
use crate::units::Mm;
use crate::PaperError;
use serde::{Deserialize, Serialize};

/// Everything needed to render one page of patterned paper.
///
/// Lengths are millimetres; converting from other units for display or input is up to
/// the caller. Missing fields take their [Default] values when deserializing.
///
/// ```
/// use paper_gen::{PageSettings, PatternId, Mm};
///
/// let settings = PageSettings {
///     pattern: PatternId::Dots,
///     ..PageSettings::default()
/// };
/// assert_eq!(settings.page_size, paper_gen::pagesize::A4);
/// assert_eq!(settings.style.spacing, Mm(5.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub pattern: PatternId,
    /// Page size as specified, before orientation is applied
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub margins: Margins,
    pub style: Style,
    /// Upper bound on the number of primitives the pattern may produce
    pub max_primitives: usize,
}

impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            pattern: PatternId::Graph,
            page_size: pagesize::A4,
            orientation: Orientation::Portrait,
            margins: Margins::all(Mm(15.0)),
            style: Style::default(),
            max_primitives: DEFAULT_PRIMITIVE_LIMIT,
        }
    }
}

impl PageSettings {
    /// The page size after orientation
    pub fn oriented_page(&self) -> PageSize {
        self.orientation.apply(self.page_size)
    }

    /// The area left for the pattern inside the margins
    pub fn drawable_area(&self) -> Area {
        Area::within(self.oriented_page(), &self.margins)
    }
}

/// Render the pattern described by `settings` onto a page-sized [Surface].
///
/// The page is oriented, the margins are subtracted to find the drawable area, and the
/// pattern's generator fills that area. Nothing is retained between calls; the same
/// settings always produce the same surface.
pub fn render(settings: &PageSettings) -> Result<Surface, PaperError> {
    let page = settings.oriented_page();
    let area = settings.drawable_area();

    let primitives = generate(
        settings.pattern,
        area,
        &settings.style,
        settings.max_primitives,
    )?;
    log::debug!(
        "rendered {} on a {} x {} page: {} primitives",
        settings.pattern.display_name(),
        page.0,
        page.1,
        primitives.len()
    );

    Ok(Surface::new(page, &settings.margins, area, primitives))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;

    #[test]
    fn landscape_swaps_the_drawable_area() {
        let settings = PageSettings {
            orientation: Orientation::Landscape,
            margins: Margins::trbl(Mm(10.0), Mm(20.0), Mm(30.0), Mm(40.0)),
            ..PageSettings::default()
        };
        assert_eq!(settings.oriented_page(), (Mm(297.0), Mm(210.0)));
        assert_eq!(settings.drawable_area(), Area::new(237.0, 170.0));

        let surface = render(&settings).unwrap();
        assert_eq!((surface.width, surface.height), (Mm(297.0), Mm(210.0)));
        assert_eq!(surface.offset, (Mm(40.0), Mm(10.0)));
    }

    #[test]
    fn lines_span_the_drawable_width_not_the_page() {
        let settings = PageSettings {
            pattern: PatternId::Lines,
            ..PageSettings::default()
        };
        let surface = render(&settings).unwrap();
        // 267mm of height at 5mm spacing: 5, 10, .., 265
        assert_eq!(surface.primitives.len(), 53);
        for p in &surface.primitives {
            let Primitive::Line { x1, x2, .. } = *p else {
                panic!("expected a line")
            };
            assert_eq!((x1, x2), (0.0, 180.0));
        }
    }

    #[test]
    fn oversized_margins_render_nothing() {
        let settings = PageSettings {
            pattern: PatternId::Hexagons,
            page_size: pagesize::A6,
            margins: Margins::all(Mm(80.0)),
            ..PageSettings::default()
        };
        let surface = render(&settings).unwrap();
        assert!(surface.area.is_empty());
        assert!(surface.primitives.is_empty());
    }

    #[test]
    fn the_primitive_cap_fails_the_whole_render() {
        let settings = PageSettings {
            pattern: PatternId::Dots,
            style: Style::new(Mm(0.01)),
            max_primitives: 1_000,
            ..PageSettings::default()
        };
        assert!(matches!(
            render(&settings),
            Err(PaperError::TooManyPrimitives { limit: 1_000 })
        ));
    }
}
