use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::assignment::Assignment;
use crate::model::labels::ClassLabel;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct CompetitorRow {
    /// 0-based, same numbering as `Placement::competitor`. Text and TSV output
    /// print `idx + 1`.
    #[serde(rename = "index")]
    pub idx: usize,
    pub win_prob: f64,
    pub place_prob: f64,
    pub top3_prob: f64,
    pub relative_rank: u8,
    pub assigned_position: Option<u32>,
    pub class_probs: BTreeMap<ClassLabel, f64>,
}

#[derive(Debug, Clone)]
pub struct RankingReport {
    pub tool_name: String,
    pub tool_version: String,
    pub source: String,
    pub labels: Vec<ClassLabel>,
    pub top_k: usize,
    pub rows: Vec<CompetitorRow>,
    pub assignment: Assignment,
}

impl RankingReport {
    pub fn n_competitors(&self) -> usize {
        self.rows.len()
    }

    pub fn predicted_slots(&self) -> usize {
        self.top_k.min(self.rows.len())
    }
}

pub fn format_pct(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
