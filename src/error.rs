use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PaperError {
    /// A numeric input was out of range, e.g. a spacing that isn't strictly positive
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A pattern would have emitted more primitives than the configured limit
    #[error("pattern exceeds the limit of {limit} primitives")]
    TooManyPrimitives { limit: usize },

    /// A colour string couldn't be parsed as `#rrggbb` or `#rrggbbaa`
    #[error("invalid colour `{0}`")]
    InvalidColour(String),

    /// An unrecognised pattern identifier
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),

    #[error(transparent)]
    /// Writing an SVG document failed
    Fmt(#[from] std::fmt::Error),
}
