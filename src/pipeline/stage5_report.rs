use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::assignment::Assignment;
use crate::model::labels::LabelSchema;
use crate::model::metrics::CompetitorMetrics;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{CompetitorRow, RankingReport, format_f64_6};

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub source: &'a str,
    pub schema: &'a LabelSchema,
    pub top_k: usize,
    pub metrics: &'a [CompetitorMetrics],
    pub ranks: &'a [u8],
    pub assignment: &'a Assignment,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn build_report(input: &Stage5Input<'_>) -> RankingReport {
    let rows = input
        .metrics
        .iter()
        .zip(input.ranks.iter())
        .enumerate()
        .map(|(idx, (m, &rank))| CompetitorRow {
            idx,
            win_prob: m.win_prob,
            place_prob: m.place_prob,
            top3_prob: m.top3_prob,
            relative_rank: rank,
            assigned_position: input.assignment.position_of(idx),
            class_probs: m.class_probs.iter().collect(),
        })
        .collect();

    RankingReport {
        tool_name: input.tool_name.clone(),
        tool_version: input.tool_version.clone(),
        source: input.source.to_string(),
        labels: input.schema.labels().to_vec(),
        top_k: input.top_k,
        rows,
        assignment: input.assignment.clone(),
    }
}

pub fn write_reports(report: &RankingReport, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_ranking_tsv(report, &out_dir.join("ranking.tsv"))?;

    let json = render_summary_json(report).map_err(std::io::Error::other)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    write_text(&out_dir.join("report.txt"), &render_report_text(report))?;

    tracing::info!("wrote reports to {}", out_dir.display());
    Ok(())
}

fn write_ranking_tsv(report: &RankingReport, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "idx",
        "win_prob",
        "place_prob",
        "top3_prob",
        "relative_rank",
        "assigned_position",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for row in &report.rows {
        let assigned = row
            .assigned_position
            .map(|p| p.to_string())
            .unwrap_or_default();
        let fields = [
            (row.idx + 1).to_string(),
            format_f64_6(row.win_prob),
            format_f64_6(row.place_prob),
            format_f64_6(row.top3_prob),
            row.relative_rank.to_string(),
            assigned,
        ];
        writeln!(w, "{}", fields.join("\t"))?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
