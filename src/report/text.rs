use std::fmt::Write;

use crate::report::{RankingReport, format_pct};

pub fn render_report_text(report: &RankingReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Loaded {} competitors from {}",
        report.n_competitors(),
        report.source
    );
    let _ = writeln!(
        out,
        "{:<4} {:>6} {:>7} {:>7} {:>5}",
        "Idx", "Win%", "Place%", "Top3%", "Rank"
    );
    out.push_str(&"-".repeat(34));
    out.push('\n');
    for row in &report.rows {
        let _ = writeln!(
            out,
            "{:<4} {:>6} {:>7} {:>7} {:>5}",
            row.idx + 1,
            format_pct(row.win_prob),
            format_pct(row.place_prob),
            format_pct(row.top3_prob),
            row.relative_rank
        );
    }

    let _ = writeln!(
        out,
        "\nPredicted top {} finishers:",
        report.predicted_slots()
    );
    for p in report.assignment.placements() {
        let _ = writeln!(
            out,
            "  {} -> Competitor #{} ({})",
            p.position,
            p.competitor + 1,
            format_pct(p.probability)
        );
    }

    out
}
