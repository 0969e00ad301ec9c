use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::engine::SubjectBreakdown;
use crate::model::{Baseline, BaselineEntry, BenchmarkSet, BreakdownEntry, FinalMatchRecord};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn build_run(breakdown: bool) -> MatchRun {
    let mut baseline = Baseline::default();
    baseline.entries.insert(
        "reasoning".to_string(),
        BaselineEntry {
            baseline_score: 80.0,
            n_records: 3,
        },
    );
    MatchRun {
        benchmark: BenchmarkSet::new(vec![312, 335, 175]).unwrap(),
        benchmark_found: vec![175, 312],
        baseline,
        ranking: vec![
            FinalMatchRecord {
                subject_id: 9,
                final_match_rate: Some(125.0),
                n_dimensions: 1,
            },
            FinalMatchRecord {
                subject_id: 3,
                final_match_rate: Some(75.5),
                n_dimensions: 1,
            },
            FinalMatchRecord {
                subject_id: 4,
                final_match_rate: None,
                n_dimensions: 0,
            },
        ],
        breakdown: breakdown.then(|| SubjectBreakdown {
            subject_id: 9,
            entries: vec![BreakdownEntry {
                tgv: "reasoning".to_string(),
                tgv_match_rate: Some(125.0),
            }],
        }),
    }
}

fn input(run: &MatchRun) -> Stage5Input<'_> {
    Stage5Input {
        run,
        tool_name: "kira-talentmatch".to_string(),
        tool_version: "test".to_string(),
        top_n: 20,
    }
}

#[test]
fn test_summary_counts_and_distribution() {
    let run = build_run(true);
    let input = input(&run);
    let ranked = ranked_rows(&run);
    let summary = build_summary(&input, &ranked);
    assert_eq!(summary.counts.n_subjects, 3);
    assert_eq!(summary.counts.n_ranked, 2);
    assert_eq!(summary.counts.n_undefined, 1);
    assert_eq!(summary.counts.n_dimensions_baselined, 1);
    assert_eq!(summary.distribution.min, Some(75.5));
    assert_eq!(summary.distribution.max, Some(125.0));
    assert_eq!(summary.distribution.histogram.len(), 20);
    assert_eq!(summary.benchmark.requested, vec![175, 312, 335]);
    assert_eq!(summary.top.len(), 3);
    assert_eq!(summary.top[0].n_dimensions, 1);
    assert_eq!(summary.top[2].n_dimensions, 0);
    assert_eq!(summary.breakdown.as_ref().unwrap().employee_id, 9);
}

#[test]
fn test_write_reports_outputs() {
    let dir = make_temp_dir();
    let run = build_run(true);
    write_reports(&input(&run), &dir).unwrap();

    let ranking = std::fs::read_to_string(dir.join("ranking.tsv")).unwrap();
    assert_eq!(
        ranking,
        "rank\temployee_id\tfinal_match_rate\tn_dimensions\n1\t9\t125.000000\t1\n2\t3\t75.500000\t1\n3\t4\tNA\t0\n"
    );
    let baseline = std::fs::read_to_string(dir.join("baseline.tsv")).unwrap();
    assert_eq!(
        baseline,
        "tgv\tbaseline_score\tn_benchmark_records\nreasoning\t80.000000\t3\n"
    );
    assert!(dir.join("breakdown.tsv").exists());
    assert!(dir.join("summary.json").exists());
    let report = std::fs::read_to_string(dir.join("report.txt")).unwrap();
    assert!(report.contains("3. Distribution of Final Match Rate"));
    assert!(report.contains("Employees with undefined match rate: 1"));
}

#[test]
fn test_write_reports_removes_stale_breakdown() {
    let dir = make_temp_dir();
    let with = build_run(true);
    write_reports(&input(&with), &dir).unwrap();
    assert!(dir.join("breakdown.tsv").exists());

    let without = build_run(false);
    write_reports(&input(&without), &dir).unwrap();
    assert!(!dir.join("breakdown.tsv").exists());
    let report = std::fs::read_to_string(dir.join("report.txt")).unwrap();
    assert!(!report.contains("TGV Breakdown"));
}
