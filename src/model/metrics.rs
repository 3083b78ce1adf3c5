use crate::model::probs::ClassProbabilityVector;

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorMetrics {
    pub class_probs: ClassProbabilityVector,
    pub win_prob: f64,
    pub place_prob: f64,
    pub top3_prob: f64,
}

impl CompetitorMetrics {
    pub fn from_probs(class_probs: ClassProbabilityVector) -> Self {
        let win_prob = class_probs.position(1);
        let place_prob = win_prob + class_probs.position(2);
        let top3_prob = place_prob + class_probs.position(3);
        Self {
            class_probs,
            win_prob,
            place_prob,
            top3_prob,
        }
    }
}
