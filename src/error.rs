/// Error categories for the math core.
///
/// Everything here is a local, recoverable condition; callers are expected
/// to handle it (substitute a fallback matrix, reject bad camera
/// parameters). Plain numeric misuse (division by zero, NaN inputs) is not
/// an error at this layer and propagates through results as IEEE-754
/// `NaN`/`inf` instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AlgError {
    /// `inverse` was called on a matrix whose determinant is exactly zero.
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,

    /// A projection constructor was given clipping planes or a field of
    /// view outside its valid range.
    #[error("invalid range: {0}")]
    InvalidRange(&'static str),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

impl AlgError {
    pub fn bad_hex(input: &str) -> Self {
        Self::InvalidColor(format!("expected 6 or 8 hex characters, got {:?}", input))
    }
}
