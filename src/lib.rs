//! # jsondiff-skmeans
//!
//! Two small utilities that share a crate and nothing else.
//!
//! ## Structural JSON diff
//!
//! `difference(a, b)` merges two JSON values into one tree. Shared
//! structure is kept; every point where the inputs disagree becomes a
//! divergence holding each side's value. `flatten_differences` turns that
//! tree into one row per divergence, addressed by a breadcrumb such as
//! `servers:List[2]:port`.
//!
//! ## Iterative spherical k-means
//!
//! `SphericalKMeans` clusters unit-length vectors by cosine similarity.
//! Instead of running to convergence it exposes `iterate()`, one
//! classify-then-update step, so each intermediate state can be drawn.
//!
//! ## Rust Usage
//!
//! ```rust
//! use jsondiff_skmeans::{difference, flatten_differences, ClusterConfig, SphericalKMeans};
//! use serde_json::json;
//!
//! let diff = difference(&json!({"a": [1, 2]}), &json!({"a": [1, 3]}));
//! let rows = flatten_differences(&diff);
//! assert_eq!(rows[0].path.to_string(), "a:List[1]");
//!
//! let mut km = SphericalKMeans::new(ClusterConfig::new(2, 2).with_seed(7)).unwrap();
//! km.add_record(&[1.0, 0.1]).unwrap();
//! km.add_record(&[0.1, 1.0]).unwrap();
//! km.iterate();
//! assert_eq!(km.classes().len(), 2);
//! ```

pub mod core;
pub mod ports;
pub mod adapters;

// Re-exports for convenience
pub use crate::core::{
    difference, flatten_differences, Breadcrumb, ClusterConfig, ClusterError, ClusterSnapshot,
    Diff, DiffRow, Divergence, IterationStats, ListingConfig, Point, Segment, SphericalKMeans,
};
pub use crate::ports::{Plot, Report};
pub use crate::adapters::{AsciiPlot, JsonSnapshotPlot, LoadError, TextReport};
