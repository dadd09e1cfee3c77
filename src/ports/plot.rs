//! # Plot Port
//!
//! Trait for drawing the clusterer state.
//!
//! Plotters only ever see a read-only [`ClusterSnapshot`]; they cannot
//! touch the clusterer itself.

use crate::core::ClusterSnapshot;

/// Result type for plot operations
pub type PlotResult<T> = Result<T, PlotError>;

/// Errors that can occur while plotting
#[derive(Debug)]
pub enum PlotError {
    /// Vectors have fewer than the two coordinates used as axes
    TooFewDimensions(usize),

    /// Writing to the sink failed
    Io(std::io::Error),

    /// The snapshot could not be encoded
    Encode(String),
}

impl std::fmt::Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotError::TooFewDimensions(got) => {
                write!(f, "Plot needs at least 2 dimensions, got {}", got)
            }
            PlotError::Io(e) => write!(f, "Plot IO error: {}", e),
            PlotError::Encode(msg) => write!(f, "Plot encoding error: {}", msg),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(e) => Some(e),
            PlotError::TooFewDimensions(_) | PlotError::Encode(_) => None,
        }
    }
}

impl From<std::io::Error> for PlotError {
    fn from(e: std::io::Error) -> Self {
        PlotError::Io(e)
    }
}

/// Trait for rendering clusterer snapshots
pub trait Plot {
    /// Draw records coloured by class and centroids as an overlay,
    /// using the first two coordinates as axes
    fn plot(&mut self, snapshot: &ClusterSnapshot<'_>) -> PlotResult<()>;
}
