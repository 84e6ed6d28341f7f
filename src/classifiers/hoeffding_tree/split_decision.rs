use crate::classifiers::attribute_class_observers::AttributeClassObserver;
use crate::classifiers::conditional_tests::AttributeSplitSuggestion;
use crate::classifiers::hoeffding_tree::nodes::LearningNode;
use crate::classifiers::hoeffding_tree::split_criteria::SplitCriterion;
use crate::classifiers::hoeffding_tree::tree_options::TreeContext;
use log::{debug, trace};

/// Hoeffding bound for a merit in `[0, range]` after `n` observations.
pub fn compute_hoeffding_bound(range: f64, success_probability: f64, n: f64) -> f64 {
    ((range * range) * (1.0 / (1.0 - success_probability)).ln() / (2.0 * n)).sqrt()
}

/// Largest score, its index and the runner-up score.
///
/// The runner-up starts at 0, so a lone attribute competes with not splitting.
fn best_two(scores: &[f64]) -> Option<(usize, f64, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut second = 0.0;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some((_, largest)) if score <= largest => {
                if score > second {
                    second = score;
                }
            }
            Some((_, largest)) => {
                if largest > second {
                    second = largest;
                }
                best = Some((i, score));
            }
            None => best = Some((i, score)),
        }
    }
    best.map(|(i, largest)| (i, largest, second))
}

/// Decides whether `leaf` has seen enough evidence to split and, if so, on
/// which attribute.
pub fn attempt_to_split(
    leaf: &LearningNode,
    ctx: &TreeContext<'_>,
) -> Option<AttributeSplitSuggestion> {
    let criterion = &ctx.options.fitness_function;
    let scores: Vec<f64> = ctx
        .attribute_map
        .iter()
        .map(|(i, _)| leaf.candidate(i, ctx).evaluate_fitness(criterion))
        .collect();

    let (winner, largest, second) = best_two(&scores)?;
    let n = leaf.sample_count() as f64;
    let range = criterion.range_of_merit(leaf.num_classes());
    let epsilon = compute_hoeffding_bound(range, leaf.success_probability(), n);

    let beats_bound = largest - second > epsilon;
    let forced = leaf.sample_count() > leaf.max_samples() && largest > 0.0;
    if !(beats_bound || forced) {
        trace!(
            "no split after {} samples: best gain {largest:.6} (attribute {winner}), runner-up {second:.6}, epsilon {epsilon:.6}",
            leaf.sample_count()
        );
        return None;
    }

    let suggestion = leaf.candidate(winner, ctx).split(winner, criterion);
    if suggestion.number_of_splits() == 0 {
        return None;
    }
    debug!(
        "splitting on attribute {winner} into {} branches after {} samples (gap {:.6}, epsilon {epsilon:.6}{})",
        suggestion.number_of_splits(),
        leaf.sample_count(),
        largest - second,
        if forced && !beats_bound { ", forced" } else { "" }
    );
    Some(suggestion)
}
