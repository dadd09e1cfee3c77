//! Adapters - Swappable implementations of port interfaces, plus file loading

pub mod loader;
pub mod plot;
pub mod text;

pub use loader::{load_json, load_vectors, LoadError};
pub use plot::{AsciiPlot, JsonSnapshotPlot};
pub use text::TextReport;
