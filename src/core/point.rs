//! # Point
//!
//! A fixed-length feature vector. The unit the clusterer works in.
//!
//! Records and centroids are both points. The clusterer keeps every
//! point it owns on the unit sphere, so the dot product of two of them
//! is their cosine similarity.

use serde::Serialize;

/// A feature vector
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Point {
    dims: Vec<f32>,
}

impl Point {
    /// Create a new point from a vector of dimensions
    ///
    /// # Example
    /// ```
    /// use jsondiff_skmeans::Point;
    /// let p = Point::new(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(p.dimensionality(), 3);
    /// ```
    pub fn new(dims: Vec<f32>) -> Self {
        Self { dims }
    }

    /// Create an origin point (all zeros) of given dimensionality
    pub fn origin(dims: usize) -> Self {
        Self {
            dims: vec![0.0; dims],
        }
    }

    /// Get the dimensionality of this point
    pub fn dimensionality(&self) -> usize {
        self.dims.len()
    }

    /// Access the dimensions as a slice
    pub fn dims(&self) -> &[f32] {
        &self.dims
    }

    /// Mutable access to dimensions
    pub fn dims_mut(&mut self) -> &mut [f32] {
        &mut self.dims
    }

    /// Calculate the magnitude (L2 norm) of this point
    ///
    /// # Example
    /// ```
    /// use jsondiff_skmeans::Point;
    /// let p = Point::new(vec![3.0, 4.0]);
    /// assert!((p.magnitude() - 5.0).abs() < 0.0001);
    /// ```
    pub fn magnitude(&self) -> f32 {
        self.dims.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Check if this point is normalized (magnitude ≈ 1.0)
    pub fn is_normalized(&self) -> bool {
        let mag = self.magnitude();
        (mag - 1.0).abs() < 0.001
    }

    /// True when every coordinate is exactly zero
    pub fn is_zero(&self) -> bool {
        self.dims.iter().all(|&x| x == 0.0)
    }

    /// True when no coordinate is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.dims.iter().all(|x| x.is_finite())
    }

    /// Normalize in place.
    ///
    /// Returns `false` and leaves the point untouched when every coordinate
    /// is zero (the zero vector has no direction) or when a coordinate is
    /// not finite.
    ///
    /// Coordinates are divided by the largest absolute coordinate before
    /// the norm is taken, so the sum of squares lies in `[1, n]` and can
    /// neither overflow nor underflow.
    pub fn normalize_mut(&mut self) -> bool {
        if !self.is_finite() {
            return false;
        }
        let scale = self.dims.iter().fold(0.0f32, |m, x| m.max(x.abs()));
        if scale == 0.0 {
            return false;
        }
        for x in self.dims.iter_mut() {
            *x /= scale;
        }
        let mag = self.magnitude();
        for x in self.dims.iter_mut() {
            *x /= mag;
        }
        true
    }

    /// Return a normalized copy of this point
    ///
    /// If magnitude is zero, returns a clone of self.
    pub fn normalize(&self) -> Self {
        let mut out = self.clone();
        out.normalize_mut();
        out
    }

    /// Dot product with another point
    ///
    /// On unit vectors this is the cosine similarity.
    pub fn dot(&self, other: &Point) -> f32 {
        assert_eq!(
            self.dimensionality(),
            other.dimensionality(),
            "Points must have same dimensionality"
        );
        self.dims
            .iter()
            .zip(other.dims.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Add another point to this one in place (element-wise)
    pub fn add_assign(&mut self, other: &Point) {
        assert_eq!(
            self.dimensionality(),
            other.dimensionality(),
            "Points must have same dimensionality"
        );
        for (a, b) in self.dims.iter_mut().zip(other.dims.iter()) {
            *a += b;
        }
    }

    /// Reset every coordinate to zero, keeping the allocation
    pub fn clear(&mut self) {
        self.dims.iter_mut().for_each(|x| *x = 0.0);
    }

    /// Overwrite this point's coordinates with another's
    pub fn copy_from(&mut self, other: &Point) {
        self.dims.copy_from_slice(&other.dims);
    }
}

impl From<Vec<f32>> for Point {
    fn from(dims: Vec<f32>) -> Self {
        Self::new(dims)
    }
}
