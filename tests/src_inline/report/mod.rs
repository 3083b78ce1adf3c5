use super::*;
use crate::model::assignment::Placement;
use crate::report::text::render_report_text;

fn report_with(rows: Vec<CompetitorRow>, top_k: usize, placements: Vec<Placement>) -> RankingReport {
    RankingReport {
        tool_name: "racerank".to_string(),
        tool_version: "0.0.0".to_string(),
        source: "request.json".to_string(),
        labels: Vec::new(),
        top_k,
        rows,
        assignment: Assignment::from_placements(placements),
    }
}

fn row(idx: usize, win: f64, place: f64, top3: f64, rank: u8) -> CompetitorRow {
    CompetitorRow {
        idx,
        win_prob: win,
        place_prob: place,
        top3_prob: top3,
        relative_rank: rank,
        assigned_position: None,
        class_probs: BTreeMap::new(),
    }
}

#[test]
fn test_format_pct() {
    assert_eq!(format_pct(0.123), "12.3%");
    assert_eq!(format_pct(1.0), "100.0%");
    assert_eq!(format_pct(0.0), "0.0%");
}

#[test]
fn test_render_text_table() {
    let report = report_with(
        vec![row(0, 0.5, 0.75, 0.875, 100), row(1, 0.125, 0.25, 0.5, 1)],
        7,
        vec![
            Placement {
                position: 1,
                competitor: 0,
                probability: 0.5,
            },
            Placement {
                position: 2,
                competitor: 1,
                probability: 0.125,
            },
        ],
    );
    let text = render_report_text(&report);
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "Loaded 2 competitors from request.json");
    assert_eq!(lines[1], "Idx    Win%  Place%   Top3%  Rank");
    assert_eq!(lines[2], "-".repeat(34));
    assert_eq!(lines[3], "1     50.0%   75.0%   87.5%   100");
    assert_eq!(lines[4], "2     12.5%   25.0%   50.0%     1");
    assert_eq!(lines[5], "");
    assert_eq!(lines[6], "Predicted top 2 finishers:");
    assert_eq!(lines[7], "  1 -> Competitor #1 (50.0%)");
    assert_eq!(lines[8], "  2 -> Competitor #2 (12.5%)");
}

#[test]
fn test_render_text_empty_batch() {
    let text = render_report_text(&report_with(Vec::new(), 7, Vec::new()));
    assert!(text.starts_with("Loaded 0 competitors"));
    assert!(text.contains("Predicted top 0 finishers:"));
}
