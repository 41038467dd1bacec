//! Error types for dispatching and rendering colour-space plots.

use thiserror::Error;

use crate::space::Space;

/// Convenience type alias for results that may contain a [`PlotError`].
pub type PlotResult<T> = Result<T, PlotError>;

/// Errors that can occur while preparing or rendering a plot.
#[derive(Error, Debug)]
pub enum PlotError {
    /// The result was tagged with a space no renderer is registered for.
    #[error("unknown colour space tag {0:?}")]
    UnknownSpace(String),

    /// A row of a raw result lacks a coordinate its space requires.
    #[error("row {row} of a {space} result is missing column {column:?}")]
    MissingColumn {
        /// The space the row was being read as.
        space: Space,
        /// The missing column.
        column: &'static str,
        /// Index of the offending row.
        row: usize,
    },

    /// Sample names were given, but not one per point.
    #[error("{names} sample names given for {points} points")]
    MismatchedNames {
        /// Number of names.
        names: usize,
        /// Number of points.
        points: usize,
    },

    /// Options that cannot produce a plot.
    #[error("invalid plot options: {0}")]
    InvalidOptions(String),

    /// Font data could not be parsed.
    #[error("could not parse font data")]
    Font,

    /// Encoding or writing the image failed.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
