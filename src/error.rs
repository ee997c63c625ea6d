/// Convenience result type used across Velum.
pub type VelumResult<T> = Result<T, VelumError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The engine favors graceful degradation: malformed shapes are skipped and
/// missing colors/fonts fall back to fixed defaults. The only failures that
/// reach callers are an out-of-range slide index, invalid deck data reported
/// by [`crate::model::Deck::validate`], and errors raised by the drawing
/// surface itself.
#[derive(thiserror::Error, Debug)]
pub enum VelumError {
    /// Requested slide index outside `[0, slide_count)`.
    #[error("slide index {index} out of range (deck has {count} slides)")]
    SlideIndex {
        /// The requested index.
        index: usize,
        /// Number of slides in the deck.
        count: usize,
    },

    /// Invalid deck or canvas data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from a drawing surface or dependency.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VelumError {
    /// Build a [`VelumError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VelumError::SlideIndex`] value.
    pub fn slide_index(index: usize, count: usize) -> Self {
        Self::SlideIndex { index, count }
    }
}
