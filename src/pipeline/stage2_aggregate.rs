use crate::model::metrics::CompetitorMetrics;
use crate::model::probs::ClassProbabilityVector;

/// Cumulative win/place/top-3 view of each distribution, index aligned with
/// the input. Malformed values are carried through, never rejected.
pub fn aggregate(vectors: &[ClassProbabilityVector]) -> Vec<CompetitorMetrics> {
    vectors
        .iter()
        .map(|v| CompetitorMetrics::from_probs(v.clone()))
        .collect()
}

pub fn run_stage2(vectors: &[ClassProbabilityVector]) -> Vec<CompetitorMetrics> {
    let metrics = aggregate(vectors);
    for (idx, m) in metrics.iter().enumerate() {
        tracing::debug!(
            competitor = idx,
            win = m.win_prob,
            place = m.place_prob,
            top3 = m.top3_prob,
            "aggregated"
        );
    }
    metrics
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
