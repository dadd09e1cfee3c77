//! # Core Domain
//!
//! Pure algorithms, no I/O.
//!
//! This module contains the two utilities and their types:
//! - `merge` - Structural merge of two JSON values (`difference`)
//! - `listing` - One row per divergence (`flatten_differences`)
//! - `breadcrumb` - Paths into a merged tree
//! - `skmeans` - Iterative spherical k-means
//! - `Point` - Fixed-length feature vector
//!
//! ## Design Principles
//!
//! - Diff functions are pure (deterministic, no side effects)
//! - The clusterer mutates only its own buffers
//! - No file or terminal access; adapters do that
//! - Fully testable in isolation

mod point;
pub mod breadcrumb;
pub mod config;
pub mod listing;
pub mod merge;
pub mod skmeans;

// Re-exports
pub use point::Point;
pub use breadcrumb::{Breadcrumb, Segment};
pub use config::{ClusterConfig, ListingConfig};
pub use listing::{flatten_differences, DiffRow};
pub use merge::{difference, Diff, Divergence, A_SIDE, B_SIDE};
pub use skmeans::{ClusterError, ClusterSnapshot, IterationStats, SphericalKMeans};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reexports_compose() {
        let diff = difference(&json!({"v": 1}), &json!({"v": 2}));
        let rows = flatten_differences(&diff);
        assert_eq!(rows[0].path.segments(), &[Segment::Key("v".into())]);

        let km = SphericalKMeans::new(ClusterConfig::default().with_seed(1)).unwrap();
        assert!(km.medoids().iter().all(Point::is_normalized));
    }
}
