//! Error types for geom-math conversions.
//!
//! Vector and point arithmetic is total over `f64` and never fails: degenerate
//! inputs produce IEEE-754 NaN/Inf. Errors only arise when building a value
//! from untyped data, i.e. slices of the wrong length or text that does not
//! parse.
//!
//! # Usage
//!
//! ```rust
//! use geom_math::{Error, Vec3};
//!
//! let err = Vec3::try_from(&[1.0, 2.0][..]).unwrap_err();
//! assert!(matches!(err, Error::ComponentCount { expected: 3, got: 2 }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when converting untyped data into vectors or points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Wrong number of components for the target type.
    ///
    /// Returned by `TryFrom<&[f64]>` and `FromStr` when the input holds
    /// more or fewer numbers than the type has dimensions.
    #[error("expected {expected} components, got {got}")]
    ComponentCount {
        /// Dimension of the target type
        expected: usize,
        /// Number of components found
        got: usize,
    },

    /// A component could not be parsed as a number.
    #[error("invalid component {index} '{text}': {reason}")]
    ParseComponent {
        /// Zero-based position of the component
        index: usize,
        /// The offending text
        text: String,
        /// Parser message
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::ComponentCount`] error.
    #[inline]
    pub fn component_count(expected: usize, got: usize) -> Self {
        Self::ComponentCount { expected, got }
    }

    /// Creates an [`Error::ParseComponent`] error.
    #[inline]
    pub fn parse_component(index: usize, text: impl Into<String>, reason: impl ToString) -> Self {
        Self::ParseComponent {
            index,
            text: text.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns `true` if this is a component count error.
    #[inline]
    pub fn is_count_error(&self) -> bool {
        matches!(self, Self::ComponentCount { .. })
    }

    /// Returns `true` if this is a parse error.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseComponent { .. })
    }
}

/// Splits `"(1, 2, 3)"`, `"1 2 3"` or `"1,2,3"` into exactly `N` numbers.
pub(crate) fn parse_components<const N: usize>(s: &str) -> Result<[f64; N]> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    let parts: Vec<&str> = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() != N {
        return Err(Error::component_count(N, parts.len()));
    }

    let mut out = [0.0; N];
    for (index, (slot, part)) in out.iter_mut().zip(&parts).enumerate() {
        *slot = part
            .parse::<f64>()
            .map_err(|e| Error::parse_component(index, *part, e))?;
    }
    Ok(out)
}

/// Copies a slice of exactly `N` numbers into an array.
pub(crate) fn components_from_slice<const N: usize>(values: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(values).map_err(|_| Error::component_count(N, values.len()))
}
