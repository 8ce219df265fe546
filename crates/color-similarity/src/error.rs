//! Error types for color parsing and engine operations
//!
//! Everything the engine can reject funnels through [`ColorError`]. Parsing
//! is the only place a color can be malformed: once a [`Color`](crate::Color)
//! exists, conversion and distance computations are total.

use thiserror::Error;

/// What exactly was wrong with a rejected color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatIssue {
    /// Hex digits after stripping `#` were not exactly six
    #[error("expected 6 hex digits, found {0}")]
    WrongLength(usize),

    /// A character outside `0-9a-fA-F`
    #[error("invalid hex digit {0:?}")]
    NonHexDigit(char),

    /// CSS functional notation that could not be decoded
    #[error("unsupported color notation")]
    UnsupportedNotation,

    /// `rgb()` channel outside 0..=255
    #[error("channel value {0} out of range 0..=255")]
    ChannelOutOfRange(u32),
}

/// Error type for the color-similarity engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Input string is not a representable 24-bit color.
    #[error("invalid color format {input:?}: {issue}")]
    InvalidColorFormat {
        /// The rejected input, verbatim
        input: String,
        /// Why it was rejected
        issue: FormatIssue,
    },

    /// Clustering threshold is negative, NaN or infinite.
    #[error("invalid threshold {0}: must be a finite, non-negative number")]
    InvalidThreshold(f64),

    /// A color inside a batch failed to parse.
    #[error("color at index {index}: {source}")]
    InBatch {
        /// Position of the offending entry in the input sequence
        index: usize,
        /// The underlying parse failure
        #[source]
        source: Box<ColorError>,
    },
}

impl ColorError {
    /// Build a [`ColorError::InvalidColorFormat`] for `input`.
    pub fn format(input: &str, issue: FormatIssue) -> Self {
        ColorError::InvalidColorFormat {
            input: input.to_string(),
            issue,
        }
    }

    /// Wrap a parse failure with the index it occurred at.
    pub fn in_batch(index: usize, source: ColorError) -> Self {
        ColorError::InBatch {
            index,
            source: Box::new(source),
        }
    }

    /// Returns true if this error (or the error it wraps) is a format error.
    pub fn is_format_error(&self) -> bool {
        match self {
            ColorError::InvalidColorFormat { .. } => true,
            ColorError::InBatch { source, .. } => source.is_format_error(),
            ColorError::InvalidThreshold(_) => false,
        }
    }
}
