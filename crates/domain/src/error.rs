//! Domain errors.

/// Errors raised while building or checking domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A series does not match the length of the date axis.
    #[error("series '{series}' has {actual} points but the date axis has {expected}")]
    SeriesLengthMismatch {
        /// Series name as it appears on the wire.
        series: &'static str,
        /// Length of the date axis.
        expected: usize,
        /// Length of the offending series.
        actual: usize,
    },
    /// A required parameter field was left empty.
    #[error("parameter '{0}' is required")]
    MissingParameter(&'static str),
    /// A typed parameter is not strictly positive.
    #[error("parameter '{0}' must be positive")]
    NonPositiveParameter(&'static str),
}
