//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! This is the hexagonal architecture boundary:
//! - Ports define WHAT presentation is needed
//! - Adapters define HOW it's done
//!
//! The CORE doesn't know about adapters.
//! Adapters implement these port traits.

mod plot;
mod report;

// Re-export traits
pub use plot::Plot;
pub use report::Report;

// Re-export types from plot
pub use plot::{PlotError, PlotResult};

// Re-export types from report
pub use report::{ReportError, ReportResult};
