//! Error type for the configuration and host-glue seams.
//!
//! The widget's own mutators never fail: out-of-range values are clamped.
//! Errors only come from parsing things a host hands us as text.

use std::num::ParseIntError;

/// Errors produced while reading attributes, colours or text input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A colour literal was not `#RRGGBB` or `#AARRGGBB`.
    #[error("invalid color {0:?}: expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    /// Text from an input field could not be read as a progress value.
    #[error("invalid progress value {input:?}")]
    InvalidProgress {
        /// The text that failed to parse.
        input: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The attribute document was malformed.
    #[error("invalid attributes: {0}")]
    Attributes(#[from] toml::de::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
