//! # Configuration
//!
//! Builder-style settings for the clusterer and the diff listing.
//!
//! Bounds set here are fixed for the lifetime of the object built from
//! them; only `k` and the record count move at runtime.

/// Settings for a [`SphericalKMeans`](super::skmeans::SphericalKMeans)
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterConfig {
    /// Number of active clusters at start (clamped into `[1, max_k]`)
    pub initial_k: usize,

    /// Length of every feature vector
    pub num_features: usize,

    /// Upper bound on `k`
    pub max_k: usize,

    /// Capacity of the record ring buffer
    pub max_records: usize,

    /// RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl ClusterConfig {
    /// Default upper bound on `k`
    pub const DEFAULT_MAX_K: usize = 10;

    /// Default record capacity
    pub const DEFAULT_MAX_RECORDS: usize = 500;

    /// Create a configuration with default bounds
    pub fn new(initial_k: usize, num_features: usize) -> Self {
        Self {
            initial_k,
            num_features,
            max_k: Self::DEFAULT_MAX_K,
            max_records: Self::DEFAULT_MAX_RECORDS,
            seed: None,
        }
    }

    /// Set the upper bound on `k`
    pub fn with_max_k(mut self, max_k: usize) -> Self {
        self.max_k = max_k;
        self
    }

    /// Set the record capacity
    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    /// Seed the RNG for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// `initial_k` clamped into `[1, max_k]`
    pub fn clamped_k(&self) -> usize {
        self.initial_k.clamp(1, self.max_k.max(1))
    }
}

impl Default for ClusterConfig {
    /// Two clusters over two features, the smallest plottable setup
    fn default() -> Self {
        Self::new(2, 2)
    }
}

/// Rendering settings for diff listing rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingConfig {
    /// Joins breadcrumb segments
    pub separator: String,

    /// Printed in place of an absent side
    pub absent: String,
}

impl ListingConfig {
    pub fn new() -> Self {
        Self {
            separator: ":".to_string(),
            absent: "None".to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_absent(mut self, absent: impl Into<String>) -> Self {
        self.absent = absent.into();
        self
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cluster_config() {
        let config = ClusterConfig::default();
        assert_eq!(config.initial_k, 2);
        assert_eq!(config.num_features, 2);
        assert_eq!(config.max_k, 10);
        assert_eq!(config.max_records, 500);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_custom_cluster_config() {
        let config = ClusterConfig::new(3, 16)
            .with_max_k(4)
            .with_max_records(32)
            .with_seed(7);

        assert_eq!(config.max_k, 4);
        assert_eq!(config.max_records, 32);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_clamped_k() {
        assert_eq!(ClusterConfig::new(0, 2).clamped_k(), 1);
        assert_eq!(ClusterConfig::new(50, 2).with_max_k(5).clamped_k(), 5);
        assert_eq!(ClusterConfig::new(3, 2).clamped_k(), 3);
    }

    #[test]
    fn test_listing_config() {
        let config = ListingConfig::default();
        assert_eq!(config.separator, ":");
        assert_eq!(config.absent, "None");

        let config = config.with_separator("/").with_absent("-");
        assert_eq!(config.separator, "/");
        assert_eq!(config.absent, "-");
    }
}
