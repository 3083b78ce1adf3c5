use serde::Serialize;

use crate::model::assignment::Placement;
use crate::model::labels::ClassLabel;
use crate::report::{CompetitorRow, RankingReport};

#[derive(Debug, Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    tool: ToolMeta<'a>,
    source: &'a str,
    labels: &'a [ClassLabel],
    top_k: usize,
    n_competitors: usize,
    competitors: &'a [CompetitorRow],
    assignment: &'a [Placement],
}

pub fn render_summary_json(report: &RankingReport) -> serde_json::Result<String> {
    let summary = Summary {
        tool: ToolMeta {
            name: &report.tool_name,
            version: &report.tool_version,
        },
        source: &report.source,
        labels: &report.labels,
        top_k: report.top_k,
        n_competitors: report.n_competitors(),
        competitors: &report.rows,
        assignment: report.assignment.placements(),
    };
    serde_json::to_string_pretty(&summary)
}
