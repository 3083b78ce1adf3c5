use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::model::labels::ClassLabel;
use crate::model::probs::ClassProbabilityVector;
use crate::pipeline::stage3_scale::scale;
use crate::pipeline::stage4_assign::assign;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("racerank_report_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn sample_report() -> RankingReport {
    let schema = LabelSchema::default();
    let metrics = [
        [(1, 0.6), (2, 0.1)],
        [(1, 0.1), (2, 0.6)],
        [(1, 0.3), (2, 0.3)],
    ]
    .iter()
    .map(|pairs| {
        let v: ClassProbabilityVector = pairs
            .iter()
            .map(|&(pos, p)| (ClassLabel::Position(pos), p))
            .collect();
        CompetitorMetrics::from_probs(v)
    })
    .collect::<Vec<_>>();
    let ranks = scale(&metrics.iter().map(|m| m.win_prob).collect::<Vec<_>>());
    let assignment = assign(&metrics, 2);
    build_report(&Stage5Input {
        source: "predictions.json",
        schema: &schema,
        top_k: 2,
        metrics: &metrics,
        ranks: &ranks,
        assignment: &assignment,
        tool_name: "racerank".to_string(),
        tool_version: "0.0.0".to_string(),
    })
}

#[test]
fn test_build_report_rows() {
    let report = sample_report();
    assert_eq!(report.n_competitors(), 3);
    assert_eq!(report.predicted_slots(), 2);
    assert_eq!(report.rows[0].relative_rank, 100);
    assert_eq!(report.rows[1].relative_rank, 1);
    assert_eq!(report.rows[0].assigned_position, Some(1));
    assert_eq!(report.rows[1].assigned_position, Some(2));
    assert_eq!(report.rows[2].assigned_position, None);
    assert_eq!(report.labels.len(), 8);
}

#[test]
fn test_write_reports_creates_files() {
    let dir = make_temp_dir().join("out");
    let report = sample_report();
    write_reports(&report, &dir).unwrap();

    let tsv = fs::read_to_string(dir.join("ranking.tsv")).unwrap();
    let lines = tsv.lines().collect::<Vec<_>>();
    assert_eq!(
        lines[0],
        "idx\twin_prob\tplace_prob\ttop3_prob\trelative_rank\tassigned_position"
    );
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("1\t0.600000\t0.700000\t0.700000\t100\t1"));
    assert!(lines[3].ends_with("\t"));

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["tool"]["name"], "racerank");
    assert_eq!(summary["n_competitors"], 3);
    assert_eq!(summary["top_k"], 2);
    assert_eq!(summary["labels"][7], "other");
    assert_eq!(summary["assignment"][1]["competitor"], 1);
    assert_eq!(summary["assignment"][1]["position"], 2);
    assert_eq!(summary["competitors"][0]["class_probs"]["1"], 0.6);
    assert_eq!(summary["competitors"][1]["index"], 1);
    assert!(summary["competitors"][1].get("idx").is_none());
    assert_eq!(
        summary["competitors"][1]["index"],
        summary["assignment"][1]["competitor"]
    );

    let text = fs::read_to_string(dir.join("report.txt")).unwrap();
    assert!(text.starts_with("Loaded 3 competitors from predictions.json"));
}
