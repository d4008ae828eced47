//! All-pairs neighbor metric.
//!
//! [`DistanceMatrix::pairwise`] is the O(N²) time and space cost centre of a
//! tick.  Everything downstream only sees the [`AdjacencyMask`] contract
//! (`distance < radius`, strict), so a grid-binned or tree-backed
//! implementation can replace the dense matrix without touching the rules.

use boids_core::Vec2;

/// Dense, row-major N×N Euclidean distance matrix.
///
/// Symmetric with a zero diagonal.  Each row is computed independently from
/// the same position snapshot, so the `parallel` feature produces
/// bit-identical results.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n:    usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Distances between every pair of `positions`.
    pub fn pairwise(positions: &[Vec2]) -> Self {
        let n = positions.len();
        let mut data = vec![0.0_f64; n * n];
        if n == 0 {
            return Self { n, data };
        }

        let fill_row = |(i, row): (usize, &mut [f64])| {
            let p = positions[i];
            for (d, &q) in row.iter_mut().zip(positions) {
                *d = p.distance(q);
            }
        };

        #[cfg(not(feature = "parallel"))]
        data.chunks_mut(n).enumerate().for_each(fill_row);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            data.par_chunks_mut(n).enumerate().for_each(fill_row);
        }

        Self { n, data }
    }

    /// Number of agents (the matrix is `len() × len()`).
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Distances from agent `i` to every agent, in index order.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Boolean adjacency at `radius`: `true` where `distance < radius`.
    ///
    /// A pair exactly `radius` apart is *not* adjacent.  The diagonal is
    /// always `true` for a positive radius.
    pub fn within_radius(&self, radius: f64) -> AdjacencyMask {
        AdjacencyMask {
            n:    self.n,
            data: self.data.iter().map(|&d| d < radius).collect(),
        }
    }
}

/// Row-major N×N boolean neighbor mask derived from a [`DistanceMatrix`].
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMask {
    n:    usize,
    data: Vec<bool>,
}

impl AdjacencyMask {
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.data[i * self.n + j]
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[bool] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Number of agents adjacent to `i`, self included.
    pub fn row_count(&self, i: usize) -> usize {
        self.row(i).iter().filter(|&&b| b).count()
    }

    /// `Σ_j mask[i][j] ? values[j] : 0`.
    ///
    /// `values` must be index-aligned with the mask.
    pub fn masked_sum(&self, i: usize, values: &[Vec2]) -> Vec2 {
        debug_assert_eq!(values.len(), self.n);
        self.row(i)
            .iter()
            .zip(values)
            .filter(|&(&hit, _)| hit)
            .map(|(_, &v)| v)
            .sum()
    }
}

/// Free-function form of [`DistanceMatrix::pairwise`].
#[inline]
pub fn pairwise_distances(positions: &[Vec2]) -> DistanceMatrix {
    DistanceMatrix::pairwise(positions)
}

/// Free-function form of [`DistanceMatrix::within_radius`].
#[inline]
pub fn within_radius(distances: &DistanceMatrix, radius: f64) -> AdjacencyMask {
    distances.within_radius(radius)
}
