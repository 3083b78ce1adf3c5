use crate::model::metrics::CompetitorMetrics;

pub const MIN_RANK: u8 = 1;
pub const MAX_RANK: u8 = 100;

/// Min-max rescale of a batch of win probabilities onto 1..=100.
///
/// The bounds come from the whole batch, so a single element has no meaning
/// on its own. A flat batch (including a single competitor) maps every entry
/// to 100. Rounding is half to even: 50.5 becomes 50, 51.5 becomes 52.
pub fn scale(win_probs: &[f64]) -> Vec<u8> {
    if win_probs.is_empty() {
        return Vec::new();
    }
    let min_p = win_probs.iter().copied().fold(f64::INFINITY, f64::min);
    let max_p = win_probs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max_p == min_p {
        return vec![MAX_RANK; win_probs.len()];
    }

    let steps = f64::from(MAX_RANK - MIN_RANK);
    let span = max_p - min_p;
    let direct = (span * steps).is_finite();
    win_probs
        .iter()
        .map(|&p| {
            let offset = if direct {
                (p - min_p) * steps / span
            } else {
                // halves keep the range finite for inputs near f64::MAX
                (p / 2.0 - min_p / 2.0) / (max_p / 2.0 - min_p / 2.0) * steps
            };
            to_rank(f64::from(MIN_RANK) + offset)
        })
        .collect()
}

fn to_rank(scaled: f64) -> u8 {
    if scaled.is_nan() {
        return MIN_RANK;
    }
    scaled
        .round_ties_even()
        .clamp(f64::from(MIN_RANK), f64::from(MAX_RANK)) as u8
}

pub fn run_stage3(metrics: &[CompetitorMetrics]) -> Vec<u8> {
    let win_probs = metrics.iter().map(|m| m.win_prob).collect::<Vec<_>>();
    scale(&win_probs)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_scale.rs"]
mod tests;
