//! Page layout: margins and the drawable area they leave behind.
//!
//! A pattern never sees the page itself. The page size is oriented, the
//! [`Margins`] are subtracted, and the resulting [`Area`] is all a generator
//! is given. The margins come back into play as the translated origin of the
//! [`Surface`](crate::Surface) the pattern is drawn on.

mod area;
mod margins;

pub use area::*;
pub use margins::*;
