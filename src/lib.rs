//! Geometry for printable paper backgrounds.
//!
//! Given a page, its margins and a [`Style`](pattern::Style), [`render`] produces a
//! [`Surface`]: an ordered list of line and circle [`Primitive`]s covering the drawable
//! area with one of the patterns in [`pattern`]. The surface can be written out as SVG
//! ([`Surface::to_svg`]) or drawn into a PDF content stream ([`Surface::to_pdf_content`]).
//!
//! ```
//! use paper_gen::{render, pagesize, Mm, PageSettings, PatternId};
//! use paper_gen::layout::Margins;
//! use paper_gen::pattern::Style;
//!
//! let settings = PageSettings {
//!     pattern: PatternId::Hexagons,
//!     page_size: pagesize::A5,
//!     margins: Margins::all(Mm(10.0)),
//!     style: Style::new(Mm(8.0)).with_opacity(0.6),
//!     ..PageSettings::default()
//! };
//! let surface = render(&settings)?;
//! assert!(!surface.primitives.is_empty());
//! # Ok::<(), paper_gen::PaperError>(())
//! ```

mod colour;
pub use colour::*;

mod content;

mod error;
pub use error::*;

/// Margins and the drawable area they leave on a page
pub mod layout;

pub mod pagesize;

pub mod pattern;
pub use pattern::PatternId;

mod primitive;
pub use primitive::*;

mod settings;
pub use settings::*;

mod surface;
pub use surface::*;

mod svg;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, for embedding surfaces in documents
pub use pdf_writer;
