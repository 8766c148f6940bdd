//! Length units.
//!
//! The geometry engine works exclusively in millimetres ([`Mm`]). Points ([`Pt`])
//! only appear when a [`Surface`](crate::Surface) is encoded as a PDF content stream,
//! and are always derived from a millimetre value on read rather than stored alongside it.

use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Mul, MulAssign, Sub, Sum};
use serde::{Deserialize, Serialize};

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// PDF points per inch
pub const PT_PER_INCH: f64 = 72.0;

/// A length in millimetres
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    Mul,
    MulAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}mm")]
#[serde(transparent)]
pub struct Mm(pub f64);

/// A length in PDF points (1/72 of an inch)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    Mul,
    MulAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

impl Mm {
    /// Build a length from a value in inches
    pub fn from_inches(inches: f64) -> Mm {
        Mm(inches * MM_PER_INCH)
    }

    /// This length expressed in inches
    pub fn to_inches(self) -> f64 {
        self.0 / MM_PER_INCH
    }

    /// Clamp negative and NaN lengths to zero
    pub fn non_negative(self) -> Mm {
        if self.0 > 0.0 {
            self
        } else {
            Mm(0.0)
        }
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Self {
        Pt((mm.0 * PT_PER_INCH / MM_PER_INCH) as f32)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Self {
        Mm(pt.0 as f64 * MM_PER_INCH / PT_PER_INCH)
    }
}
