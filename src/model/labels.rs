use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

pub const DEFAULT_LABELS: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "other"];

const OTHER_TOKEN: &str = "other";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClassLabel {
    Position(u32),
    Other,
}

impl ClassLabel {
    pub fn position(&self) -> Option<u32> {
        match self {
            ClassLabel::Position(n) => Some(*n),
            ClassLabel::Other => None,
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassLabel::Position(n) => write!(f, "{n}"),
            ClassLabel::Other => f.write_str(OTHER_TOKEN),
        }
    }
}

impl Serialize for ClassLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct LabelParseError(pub String);

impl FromStr for ClassLabel {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case(OTHER_TOKEN) {
            return Ok(ClassLabel::Other);
        }
        match token.parse::<u32>() {
            Ok(0) => Err(LabelParseError(
                "position labels start at 1, got 0".to_string(),
            )),
            Ok(n) => Ok(ClassLabel::Position(n)),
            Err(_) => Err(LabelParseError(format!(
                "unknown class label {token:?} (expected a position ordinal or \"other\")"
            ))),
        }
    }
}

/// Ordered label set the model scores are aligned to. Index `i` of a raw
/// score vector belongs to `labels()[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSchema {
    labels: Vec<ClassLabel>,
}

impl LabelSchema {
    pub fn new(labels: Vec<ClassLabel>) -> Result<Self, LabelParseError> {
        if labels.is_empty() {
            return Err(LabelParseError("label schema is empty".to_string()));
        }
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(LabelParseError(format!(
                    "duplicate class label {label} in schema"
                )));
            }
        }
        Ok(Self { labels })
    }

    pub fn parse_list(list: &str) -> Result<Self, LabelParseError> {
        if list.trim().is_empty() {
            return Err(LabelParseError("label schema is empty".to_string()));
        }
        let labels = list
            .split(',')
            .enumerate()
            .map(|(i, token)| {
                if token.trim().is_empty() {
                    return Err(LabelParseError(format!(
                        "empty class label at position {}",
                        i + 1
                    )));
                }
                ClassLabel::from_str(token)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(labels)
    }

    pub fn labels(&self) -> &[ClassLabel] {
        &self.labels
    }

    pub fn n_labels(&self) -> usize {
        self.labels.len()
    }

    pub fn modeled_positions(&self) -> usize {
        self.labels
            .iter()
            .filter(|l| l.position().is_some())
            .count()
    }
}

impl Default for LabelSchema {
    fn default() -> Self {
        let labels = DEFAULT_LABELS
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        Self { labels }
    }
}

impl fmt::Display for LabelSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{label}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/labels.rs"]
mod tests;
