//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height,
//! in millimetres. Use [`Orientation`] to lay a size out in landscape.
//!
//! # Available Sizes
//!
//! ## North American
//! `LETTER`, `HALF_LETTER`, `JUNIOR_LEGAL`, `LEGAL`, `TABLOID`
//!
//! ## ISO A-Series
//! `A0` through `A6`
//!
//! # Example
//!
//! ```
//! use paper_gen::pagesize::{self, Orientation};
//! use paper_gen::Mm;
//!
//! let (width, height) = Orientation::Landscape.apply(pagesize::A4);
//! assert_eq!((width, height), (Mm(297.0), Mm(210.0)));
//!
//! assert_eq!(pagesize::by_name("letter"), Some(pagesize::LETTER));
//! ```

use crate::units::*;
use serde::{Deserialize, Serialize};

/// Page dimensions as (width, height) in millimetres.
pub type PageSize = (Mm, Mm);

// north american sizes
pub const LETTER: PageSize = (Mm(8.5 * MM_PER_INCH), Mm(11.0 * MM_PER_INCH));
pub const HALF_LETTER: PageSize = (Mm(5.5 * MM_PER_INCH), Mm(8.5 * MM_PER_INCH));
pub const JUNIOR_LEGAL: PageSize = (Mm(5.0 * MM_PER_INCH), Mm(8.0 * MM_PER_INCH));
pub const LEGAL: PageSize = (Mm(8.5 * MM_PER_INCH), Mm(14.0 * MM_PER_INCH));
pub const TABLOID: PageSize = (Mm(11.0 * MM_PER_INCH), Mm(17.0 * MM_PER_INCH));

// iso a-series
pub const A0: PageSize = (Mm(841.0), Mm(1189.0));
pub const A1: PageSize = (Mm(594.0), Mm(841.0));
pub const A2: PageSize = (Mm(420.0), Mm(594.0));
pub const A3: PageSize = (Mm(297.0), Mm(420.0));
pub const A4: PageSize = (Mm(210.0), Mm(297.0));
pub const A5: PageSize = (Mm(148.0), Mm(210.0));
pub const A6: PageSize = (Mm(105.0), Mm(148.0));

/// Named presets, in the order they are usually offered
pub const PRESETS: &[(&str, PageSize)] = &[
    ("A4", A4),
    ("Letter", LETTER),
    ("A3", A3),
    ("A5", A5),
    ("Legal", LEGAL),
    ("Tabloid", TABLOID),
    ("Half Letter", HALF_LETTER),
    ("Junior Legal", JUNIOR_LEGAL),
    ("A0", A0),
    ("A1", A1),
    ("A2", A2),
    ("A6", A6),
];

/// Look up a preset by name, ignoring case and surrounding whitespace
pub fn by_name(name: &str) -> Option<PageSize> {
    let name = name.trim();
    PRESETS
        .iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
        .map(|&(_, size)| size)
}

/// How a page is laid out relative to the size it was specified with
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// The size is used as given
    #[default]
    Portrait,
    /// Width and height are swapped
    Landscape,
}

impl Orientation {
    /// Apply the orientation to a (width, height) page size.
    ///
    /// Custom sizes are taken as given in portrait, so a size that is already wider
    /// than it is tall becomes tall again in landscape.
    pub fn apply(self, size: PageSize) -> PageSize {
        match self {
            Orientation::Portrait => size,
            Orientation::Landscape => (size.1, size.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_portrait() {
        for (name, (w, h)) in PRESETS {
            assert!(w <= h, "{name} is not portrait");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(by_name(" a4 "), Some(A4));
        assert_eq!(by_name("TABLOID"), Some(TABLOID));
        assert_eq!(by_name("B5"), None);
    }

    #[test]
    fn letter_matches_its_metric_size() {
        assert!((*LETTER.0 - 215.9).abs() < 1e-9);
        assert!((*LETTER.1 - 279.4).abs() < 1e-9);
        assert!((*LEGAL.1 - 355.6).abs() < 1e-9);
    }

    #[test]
    fn landscape_swaps_sides() {
        assert_eq!(Orientation::Portrait.apply(A5), A5);
        assert_eq!(Orientation::Landscape.apply(A5), (Mm(210.0), Mm(148.0)));
    }
}
