use std::collections::BTreeMap;

use crate::model::labels::{ClassLabel, LabelSchema};

/// One competitor's predicted distribution over finishing labels.
///
/// Values are taken as the model produced them: no range check, no
/// requirement that they sum to 1. Lookups are total over any label and read
/// 0.0 for labels the distribution does not carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassProbabilityVector {
    probs: BTreeMap<ClassLabel, f64>,
}

impl ClassProbabilityVector {
    /// Zips raw scores onto the schema. Scores past the end of the schema are
    /// dropped, schema labels past the end of the scores stay absent.
    pub fn from_scores(schema: &LabelSchema, scores: &[f64]) -> Self {
        let probs = schema
            .labels()
            .iter()
            .zip(scores.iter())
            .map(|(label, &p)| (*label, p))
            .collect();
        Self { probs }
    }

    pub fn prob(&self, label: ClassLabel) -> f64 {
        self.probs.get(&label).copied().unwrap_or(0.0)
    }

    pub fn position(&self, pos: u32) -> f64 {
        self.prob(ClassLabel::Position(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassLabel, f64)> + '_ {
        self.probs.iter().map(|(l, p)| (*l, *p))
    }
}

impl FromIterator<(ClassLabel, f64)> for ClassProbabilityVector {
    fn from_iter<I: IntoIterator<Item = (ClassLabel, f64)>>(iter: I) -> Self {
        Self {
            probs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/probs.rs"]
mod tests;
