use crate::model::assignment::{Assignment, Placement};
use crate::model::labels::LabelSchema;
use crate::model::metrics::CompetitorMetrics;

/// Greedy top-K finishing order.
///
/// Positions are filled one at a time from 1. Each position goes to the
/// remaining competitor with the highest probability for that exact label;
/// the earliest competitor wins ties. A competitor picked for an earlier
/// position leaves the pool even when it would fit a later one better, so the
/// result is not a globally optimal matching.
///
/// NaN never beats a number. If every remaining candidate reads NaN the first
/// of them is taken, keeping the length at `min(k, n)`.
pub fn assign(metrics: &[CompetitorMetrics], k: usize) -> Assignment {
    let n_slots = k.min(metrics.len());
    let mut taken = vec![false; metrics.len()];
    let mut placements = Vec::with_capacity(n_slots);

    for slot in 0..n_slots {
        let Some(position) = position_for_slot(slot) else {
            tracing::warn!("position {} does not fit a class label; stopping", slot);
            break;
        };
        let mut best: Option<(usize, f64)> = None;
        for (idx, m) in metrics.iter().enumerate() {
            if taken[idx] {
                continue;
            }
            let prob = m.class_probs.position(position);
            match best {
                Some((_, best_prob)) if !beats(prob, best_prob) => {}
                _ => best = Some((idx, prob)),
            }
        }
        let Some((competitor, probability)) = best else {
            break;
        };
        taken[competitor] = true;
        placements.push(Placement {
            position,
            competitor,
            probability,
        });
    }

    Assignment::from_placements(placements)
}

fn position_for_slot(slot: usize) -> Option<u32> {
    slot.checked_add(1).and_then(|p| u32::try_from(p).ok())
}

fn beats(prob: f64, best: f64) -> bool {
    prob > best || (best.is_nan() && !prob.is_nan())
}

pub fn run_stage4(metrics: &[CompetitorMetrics], k: usize, schema: &LabelSchema) -> Assignment {
    let modeled = schema.modeled_positions();
    if k.min(metrics.len()) > modeled {
        tracing::warn!(
            "top-k {} exceeds the {} modeled positions; later positions are filled in input order",
            k,
            modeled
        );
    }
    let assignment = assign(metrics, k);
    for p in assignment.placements() {
        tracing::debug!(
            position = p.position,
            competitor = p.competitor,
            probability = p.probability,
            "placed"
        );
    }
    assignment
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_assign.rs"]
mod tests;
