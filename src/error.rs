//! The error type shared by every fallible operation in the crate.
//!
//! Most of the crate can't fail at all: conversions are closed-form arithmetic, and unknown working
//! space or white point names fall back to a default with a logged warning instead of erroring.
//! What's left is parsing (hex strings, space names, name tables) and the handful of spaces that
//! are recognised but not implemented.

use thiserror::Error;

use crate::space::Space;

/// Result type for vermilion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or reading colors.
#[derive(Error, Debug)]
pub enum Error {
    /// The space is a known name, but conversions to and from it don't exist. Retrying won't help.
    #[error("conversion to or from {0} is not implemented")]
    NotImplemented(Space),

    /// A color space name that isn't one of the names [`Space`] knows about.
    #[error("unknown color space: {0:?}")]
    UnknownSpace(String),

    /// A color name that the name lookup doesn't know about.
    #[error("unknown color name: {0:?}")]
    UnknownColorName(String),

    /// A string that isn't a `#RRGGBB` hex triplet.
    #[error("invalid RGB hex string: {0:?}")]
    InvalidHex(String),

    /// A named-color table that couldn't be read.
    #[error("could not read color name table: {0}")]
    NameTable(#[from] csv::Error),
}
