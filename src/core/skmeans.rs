//! # Spherical K-Means
//!
//! Iterative spherical k-means over a bounded window of records.
//!
//! Nothing runs on its own: the caller triggers each classify-then-update
//! step with [`SphericalKMeans::iterate`], so every intermediate state can
//! be drawn.
//!
//! ## Storage
//!
//! All buffers are allocated once from the [`ClusterConfig`] bounds:
//! - `max_records` record slots, used as a ring buffer
//! - `max_k` centroid slots, of which the first `k` are active
//! - one class index per record slot
//!
//! Records and centroids are always unit length, so the dot product is
//! the cosine similarity.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use serde::Serialize;
use tracing::debug;

use super::config::ClusterConfig;
use super::point::Point;

/// Result type for clusterer operations
pub type ClusterResult<T> = Result<T, ClusterError>;

/// Errors raised by the clusterer
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClusterError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Dimensionality mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Record contains NaN or infinite values")]
    NonFinite,

    #[error("Cannot normalize zero vector")]
    ZeroVector,
}

/// What one call to [`SphericalKMeans::iterate`] changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IterationStats {
    /// Records whose class changed during classification
    pub reassigned: usize,

    /// Centroids replaced by a random direction because no record chose them
    pub reseeded: usize,
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClusterSnapshot<'a> {
    /// Active records, storage order
    pub records: &'a [Point],

    /// Class of each active record, parallel to `records`
    pub classes: &'a [usize],

    /// Active centroids
    pub medoids: &'a [Point],
}

/// Spherical k-means with a manual step
pub struct SphericalKMeans<R: Rng = StdRng> {
    k: usize,
    max_k: usize,
    max_records: usize,
    num_features: usize,

    /// Ring buffer of normalized records
    records: Vec<Point>,
    /// Active record count
    len: usize,
    /// Next slot to overwrite
    cursor: usize,

    /// Centroid slots; `medoids[..k]` are active
    medoids: Vec<Point>,
    /// Highest `k` reached so far; slots below it hold retained values
    high_water: usize,

    classes: Vec<usize>,

    /// Per-centroid scratch sums for the update step
    sums: Vec<Point>,

    rng: R,
}

impl SphericalKMeans<StdRng> {
    /// Create a clusterer, seeding the RNG from `config.seed` or OS entropy
    pub fn new(config: ClusterConfig) -> ClusterResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> SphericalKMeans<R> {
    /// Create a clusterer driven by the given RNG
    ///
    /// Every centroid slot, active or not, starts at a random direction.
    pub fn with_rng(config: ClusterConfig, mut rng: R) -> ClusterResult<Self> {
        if config.num_features == 0 {
            return Err(ClusterError::InvalidConfig("num_features must be at least 1".into()));
        }
        if config.max_k == 0 {
            return Err(ClusterError::InvalidConfig("max_k must be at least 1".into()));
        }
        if config.max_records == 0 {
            return Err(ClusterError::InvalidConfig("max_records must be at least 1".into()));
        }

        let n = config.num_features;
        let mut medoids = vec![Point::origin(n); config.max_k];
        for medoid in medoids.iter_mut() {
            random_unit_into(&mut rng, medoid);
        }

        let k = config.clamped_k();
        debug!(
            k,
            max_k = config.max_k,
            max_records = config.max_records,
            num_features = n,
            "created spherical k-means"
        );

        Ok(Self {
            k,
            max_k: config.max_k,
            max_records: config.max_records,
            num_features: n,
            records: vec![Point::origin(n); config.max_records],
            len: 0,
            cursor: 0,
            medoids,
            high_water: k,
            classes: vec![0; config.max_records],
            sums: vec![Point::origin(n); config.max_k],
            rng,
        })
    }

    /// Run one classification pass followed by one centroid update
    ///
    /// Each record moves to the centroid with the largest dot product,
    /// ties going to the lowest index. Each centroid then becomes the
    /// normalized sum of its records, or a fresh random direction if it
    /// has none.
    pub fn iterate(&mut self) -> IterationStats {
        let mut stats = IterationStats::default();

        let active = &self.medoids[..self.k];
        for (record, class) in self.records[..self.len]
            .iter()
            .zip(self.classes[..self.len].iter_mut())
        {
            let best = nearest(record, active);
            if best != *class {
                *class = best;
                stats.reassigned += 1;
            }
        }

        for sum in &mut self.sums[..self.k] {
            sum.clear();
        }
        for (record, &class) in self.records[..self.len].iter().zip(&self.classes[..self.len]) {
            self.sums[class].add_assign(record);
        }

        for (i, (medoid, sum)) in self.medoids[..self.k]
            .iter_mut()
            .zip(self.sums[..self.k].iter_mut())
            .enumerate()
        {
            if sum.normalize_mut() {
                medoid.copy_from(sum);
            } else {
                random_unit_into(&mut self.rng, medoid);
                stats.reseeded += 1;
                debug!(cluster = i, "empty cluster, centroid re-seeded");
            }
        }

        debug!(
            records = self.len,
            k = self.k,
            reassigned = stats.reassigned,
            reseeded = stats.reseeded,
            "iteration complete"
        );
        stats
    }

    /// Normalize a record and write it into the ring buffer
    ///
    /// Once `max_records` records are held, each new one overwrites the
    /// oldest. A rejected record leaves the clusterer unchanged.
    pub fn add_record(&mut self, record: &[f32]) -> ClusterResult<()> {
        if record.len() != self.num_features {
            return Err(ClusterError::DimensionMismatch {
                expected: self.num_features,
                got: record.len(),
            });
        }

        let mut point = Point::new(record.to_vec());
        if !point.is_finite() {
            return Err(ClusterError::NonFinite);
        }
        if !point.normalize_mut() {
            return Err(ClusterError::ZeroVector);
        }

        self.records[self.cursor] = point;
        self.cursor = (self.cursor + 1) % self.max_records;
        if self.len < self.max_records {
            self.len += 1;
        }
        Ok(())
    }

    /// Add records in order, stopping at the first rejected one
    pub fn add_records<I, V>(&mut self, records: I) -> ClusterResult<()>
    where
        I: IntoIterator<Item = V>,
        V: AsRef<[f32]>,
    {
        for record in records {
            self.add_record(record.as_ref())?;
        }
        Ok(())
    }

    /// Change the number of active clusters, clamped into `[1, max_k]`
    ///
    /// Growing activates slots one at a time. A slot that was never active
    /// gets a random direction; a slot deactivated by an earlier shrink
    /// comes back with the value it had.
    pub fn set_k(&mut self, new_k: usize) {
        let new_k = new_k.clamp(1, self.max_k);

        while self.k < new_k {
            if self.k >= self.high_water {
                random_unit_into(&mut self.rng, &mut self.medoids[self.k]);
            }
            self.k += 1;
        }
        self.k = new_k;
        self.high_water = self.high_water.max(new_k);
    }

    /// Send every active centroid to a fresh random direction
    pub fn shuffle(&mut self) {
        for medoid in &mut self.medoids[..self.k] {
            random_unit_into(&mut self.rng, medoid);
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn max_k(&self) -> usize {
        self.max_k
    }

    pub fn max_records(&self) -> usize {
        self.max_records
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Number of active records
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Active records in storage order
    pub fn records(&self) -> &[Point] {
        &self.records[..self.len]
    }

    /// Active records from oldest to newest
    pub fn records_oldest_first(&self) -> impl Iterator<Item = &Point> {
        let (head, tail) = if self.len == self.max_records {
            (&self.records[self.cursor..], &self.records[..self.cursor])
        } else {
            (&self.records[..self.len], &self.records[..0])
        };
        head.iter().chain(tail.iter())
    }

    /// Class of each active record, as of the last classification pass
    pub fn classes(&self) -> &[usize] {
        &self.classes[..self.len]
    }

    /// Active centroids
    pub fn medoids(&self) -> &[Point] {
        &self.medoids[..self.k]
    }

    /// Borrow the current state for rendering
    pub fn snapshot(&self) -> ClusterSnapshot<'_> {
        ClusterSnapshot {
            records: self.records(),
            classes: self.classes(),
            medoids: self.medoids(),
        }
    }
}

/// Index of the centroid with the largest dot product, lowest index on ties
fn nearest(record: &Point, medoids: &[Point]) -> usize {
    let mut best = 0;
    let mut best_score = f32::NEG_INFINITY;
    for (i, medoid) in medoids.iter().enumerate() {
        let score = record.dot(medoid);
        if score > best_score {
            best = i;
            best_score = score;
        }
    }
    best
}

/// Overwrite `point` with a random unit vector in the non-negative orthant
///
/// Coordinates are |N(0, 1)| draws, then normalized. A draw with zero
/// norm is repeated.
fn random_unit_into<R: Rng>(rng: &mut R, point: &mut Point) {
    loop {
        for x in point.dims_mut() {
            let sample: f32 = StandardNormal.sample(rng);
            *x = sample.abs();
        }
        if point.normalize_mut() {
            return;
        }
    }
}
