/// Scores how well a partition of class counts separates the classes.
///
/// `post_split_dists[i][c]` is the weight of class `c` that falls in branch `i`.
pub trait SplitCriterion {
    /// Width of the interval `merit_of_split` can take for `num_classes` classes;
    /// this is the `R` of the Hoeffding bound.
    fn range_of_merit(&self, num_classes: usize) -> f64;

    fn merit_of_split(&self, post_split_dists: &[Vec<f64>]) -> f64;
}

/// Per-class totals across all branches.
pub(crate) fn class_totals(post_split_dists: &[Vec<f64>]) -> Vec<f64> {
    let num_classes = post_split_dists.iter().map(Vec::len).max().unwrap_or(0);
    let mut totals = vec![0.0; num_classes];
    for dist in post_split_dists {
        for (t, w) in totals.iter_mut().zip(dist) {
            *t += *w;
        }
    }
    totals
}
