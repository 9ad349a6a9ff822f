//! Result types produced by the grade and statistics computations.

use serde::Serialize;

/// Histogram bin edges, in percent. Six bins: `[40, 50)` through `[90, 100]`.
pub const BIN_EDGES: [f64; 7] = [40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];

/// Number of bins described by [`BIN_EDGES`].
pub const BIN_COUNT: usize = BIN_EDGES.len() - 1;

/// Min, average, and max score of one assignment, each as a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignmentStats {
    pub min: i64,
    pub avg: i64,
    pub max: i64,
}

/// Score distribution of one assignment over [`BIN_EDGES`].
///
/// Scores outside `[40, 100]` fall into no bin and are tallied in
/// `below_range` / `above_range` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Histogram {
    pub counts: [usize; BIN_COUNT],
    pub below_range: usize,
    pub above_range: usize,
}

/// One bin of a [`Histogram`] with its bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    /// Only the final bin includes its upper edge.
    pub closed: bool,
    pub count: usize,
}

impl Histogram {
    /// Iterates the bins in ascending order.
    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        BIN_EDGES
            .windows(2)
            .zip(self.counts.iter())
            .enumerate()
            .map(|(i, (edges, &count))| Bin {
                lower: edges[0],
                upper: edges[1],
                closed: i == BIN_COUNT - 1,
                count,
            })
    }

    /// Number of scores placed in a bin.
    pub fn binned(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of scores seen, binned or not.
    pub fn total(&self) -> usize {
        self.binned() + self.below_range + self.above_range
    }
}
