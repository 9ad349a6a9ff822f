use crate::analyzers::types::{AssignmentStats, BIN_EDGES, Histogram};
use crate::analyzers::utility::{max, mean, min};
use crate::model::Submission;

fn scores_for<'a, I>(assignment_id: u32, submissions: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a Submission>,
{
    submissions
        .into_iter()
        .filter(|s| s.assignment_id == assignment_id)
        .map(|s| s.score)
        .collect()
}

/// Computes min, average, and max score of an assignment.
///
/// `min` and `max` are truncated toward zero. `avg` is the floor of the
/// summed scores divided by their count; individual scores are never
/// truncated before averaging. Returns `None` when nobody submitted.
pub fn compute_assignment_statistics<'a, I>(
    assignment_id: u32,
    submissions: I,
) -> Option<AssignmentStats>
where
    I: IntoIterator<Item = &'a Submission>,
{
    let scores = scores_for(assignment_id, submissions);

    Some(AssignmentStats {
        min: min(&scores)?.trunc() as i64,
        avg: mean(&scores)?.floor() as i64,
        max: max(&scores)?.trunc() as i64,
    })
}

/// Groups an assignment's scores into the bins of [`BIN_EDGES`].
///
/// Returns `None` when nobody submitted.
pub fn bin_distribution<'a, I>(assignment_id: u32, submissions: I) -> Option<Histogram>
where
    I: IntoIterator<Item = &'a Submission>,
{
    let scores = scores_for(assignment_id, submissions);
    if scores.is_empty() {
        return None;
    }

    let mut hist = Histogram::default();
    for score in scores {
        match bin_index(score) {
            Some(i) => hist.counts[i] += 1,
            None if score < BIN_EDGES[0] => hist.below_range += 1,
            None => hist.above_range += 1,
        }
    }
    Some(hist)
}

/// Bin holding `score`: the bin whose lower edge is the greatest edge not
/// above the score. The top edge belongs to the last bin.
pub fn bin_index(score: f64) -> Option<usize> {
    let top = BIN_EDGES[BIN_EDGES.len() - 1];
    if score == top {
        return Some(BIN_EDGES.len() - 2);
    }
    BIN_EDGES
        .windows(2)
        .position(|edges| score >= edges[0] && score < edges[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subs(assignment_id: u32, scores: &[f64]) -> Vec<Submission> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| Submission::new(i as u32, assignment_id, score))
            .collect()
    }

    #[test]
    fn test_statistics_truncate_average() {
        let s = subs(3, &[70.0, 85.0, 90.0]);
        assert_eq!(
            compute_assignment_statistics(3, &s),
            Some(AssignmentStats {
                min: 70,
                avg: 81,
                max: 90
            })
        );
    }

    #[test]
    fn test_statistics_average_of_sum_not_of_truncated_scores() {
        // Truncating each score first would give floor((70 + 71) / 2) = 70
        let s = subs(3, &[70.6, 71.6]);
        let stats = compute_assignment_statistics(3, &s).unwrap();
        assert_eq!(stats.avg, 71);
        let s = subs(3, &[70.5, 71.5]);
        let stats = compute_assignment_statistics(3, &s).unwrap();
        assert_eq!(stats.avg, 71);
        assert_eq!(stats.min, 70);
        assert_eq!(stats.max, 71);
    }

    #[test]
    fn test_statistics_empty_is_absent() {
        assert_eq!(compute_assignment_statistics(3, &subs(3, &[])), None);
        assert_eq!(compute_assignment_statistics(4, &subs(3, &[88.0])), None);
    }

    #[test]
    fn test_statistics_only_matching_assignment() {
        let mut s = subs(3, &[60.0]);
        s.extend(subs(4, &[10.0, 100.0]));
        assert_eq!(
            compute_assignment_statistics(3, &s),
            Some(AssignmentStats {
                min: 60,
                avg: 60,
                max: 60
            })
        );
    }

    #[test]
    fn test_bin_index_edges() {
        assert_eq!(bin_index(39.999), None);
        assert_eq!(bin_index(40.0), Some(0));
        assert_eq!(bin_index(49.99), Some(0));
        assert_eq!(bin_index(50.0), Some(1));
        assert_eq!(bin_index(89.99), Some(4));
        assert_eq!(bin_index(90.0), Some(5));
        assert_eq!(bin_index(100.0), Some(5));
        assert_eq!(bin_index(100.5), None);
    }

    #[test]
    fn test_bin_distribution_mixed_scores() {
        let s = subs(1, &[39.0, 40.0, 55.0, 100.0]);
        let hist = bin_distribution(1, &s).unwrap();

        assert_eq!(hist.counts, [1, 1, 0, 0, 0, 1]);
        assert_eq!(hist.below_range, 1);
        assert_eq!(hist.above_range, 0);
        assert_eq!(hist.total(), 4);
    }

    #[test]
    fn test_bin_distribution_out_of_range_above() {
        let s = subs(1, &[90.0, 100.5]);
        let hist = bin_distribution(1, &s).unwrap();

        assert_eq!(hist.counts, [0, 0, 0, 0, 0, 1]);
        assert_eq!(hist.above_range, 1);
    }

    #[test]
    fn test_bin_distribution_empty_is_absent() {
        assert_eq!(bin_distribution(1, &subs(2, &[70.0])), None);
    }
}
