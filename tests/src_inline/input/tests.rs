use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::benchmark::parse_benchmark_ids;
use super::scores::load_scores;
use super::weights::load_weights;
use super::{InputError, delimiter_for};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_talentmatch_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_delimiter_from_extension() {
    assert_eq!(delimiter_for(Path::new("scores.csv")), b',');
    assert_eq!(delimiter_for(Path::new("scores.CSV.gz")), b',');
    assert_eq!(delimiter_for(Path::new("scores.tsv")), b'\t');
    assert_eq!(delimiter_for(Path::new("scores.tsv.gz")), b'\t');
}

#[test]
fn test_scores_tsv_header_order_and_extra_columns() {
    let dir = make_temp_dir();
    let path = dir.join("tgv_score.tsv");
    write_file(
        &path,
        "tgv\tnote\tEmployee_ID\tadjusted_score\nreasoning\tx\t312\t80.5\n\nleadership\ty\t175\t60\n",
    );
    let records = load_scores(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].subject_id, 312);
    assert_eq!(records[0].tgv, "reasoning");
    assert_eq!(records[0].adjusted_score, 80.5);
    assert_eq!(records[1].subject_id, 175);
}

#[test]
fn test_scores_csv_gz() {
    let dir = make_temp_dir();
    let path = dir.join("tgv_score.csv.gz");
    write_gz(
        &path,
        "employee_id,tgv,adjusted_score\n1,\"reasoning\",70\n2,reasoning,90\n",
    );
    let records = load_scores(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].adjusted_score, 90.0);
}

#[test]
fn test_scores_csv_quoted_delimiter_in_field() {
    let dir = make_temp_dir();
    let contents = "employee_id,tgv,adjusted_score\n312,\"Strategic, Thinking\",80.5\n175,\"Say \"\"hi\"\"\",60\n";
    let plain = dir.join("scores.csv");
    let gz = dir.join("scores.csv.gz");
    write_file(&plain, contents);
    write_gz(&gz, contents);

    for path in [&plain, &gz] {
        let records = load_scores(path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].subject_id, 312);
        assert_eq!(records[0].tgv, "Strategic, Thinking");
        assert_eq!(records[0].adjusted_score, 80.5);
        assert_eq!(records[1].tgv, "Say \"hi\"");
    }
}

#[test]
fn test_weights_csv_quoted_delimiter_in_field() {
    let dir = make_temp_dir();
    let path = dir.join("weights.csv");
    write_file(&path, "tgv,weight\n\"Strategic, Thinking\",0.25\n");
    let weights = load_weights(&path).unwrap();
    assert_eq!(weights.len(), 1);
    assert_eq!(weights[0].tgv, "Strategic, Thinking");
    assert_eq!(weights[0].weight, 0.25);
}

#[test]
fn test_scores_short_row_names_line() {
    let dir = make_temp_dir();
    let path = dir.join("scores.tsv");
    write_file(
        &path,
        "employee_id\ttgv\tadjusted_score\n1\treasoning\t5\n2\treasoning\n",
    );
    let err = load_scores(&path).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn test_empty_file_is_parse_error() {
    let dir = make_temp_dir();
    let path = dir.join("scores.tsv");
    write_file(&path, "");
    assert!(matches!(load_scores(&path).unwrap_err(), InputError::Parse(_)));
}

#[test]
fn test_scores_null_score_skipped() {
    let dir = make_temp_dir();
    let path = dir.join("scores.tsv");
    write_file(
        &path,
        "employee_id\ttgv\tadjusted_score\n1\treasoning\t\n2\treasoning\tNULL\n3\treasoning\t5\n",
    );
    let records = load_scores(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].subject_id, 3);
}

#[test]
fn test_scores_missing_column_is_parse_error() {
    let dir = make_temp_dir();
    let path = dir.join("scores.tsv");
    write_file(&path, "employee_id\ttgv\n1\treasoning\n");
    let err = load_scores(&path).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
    assert!(err.to_string().contains("adjusted_score"));
}

#[test]
fn test_scores_bad_number_names_line() {
    let dir = make_temp_dir();
    let path = dir.join("scores.tsv");
    write_file(
        &path,
        "employee_id\ttgv\tadjusted_score\n1\treasoning\t5\n2\treasoning\tabc\n",
    );
    let err = load_scores(&path).unwrap_err();
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn test_missing_file_is_missing_input() {
    let dir = make_temp_dir();
    let err = load_scores(&dir.join("nope.tsv")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_weights_duplicate_keeps_first() {
    let dir = make_temp_dir();
    let path = dir.join("weights.tsv");
    write_file(
        &path,
        "tgv\tweight\nreasoning\t0.6\nleadership\t0.4\nreasoning\t0.9\n",
    );
    let weights = load_weights(&path).unwrap();
    assert_eq!(weights.len(), 2);
    assert_eq!(weights[0].tgv, "reasoning");
    assert_eq!(weights[0].weight, 0.6);
}

#[test]
fn test_weights_negative_rejected() {
    let dir = make_temp_dir();
    let path = dir.join("weights.tsv");
    write_file(&path, "tgv\tweight\nreasoning\t-1\n");
    let err = load_weights(&path).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}

#[test]
fn test_benchmark_ids_parsing() {
    let set = parse_benchmark_ids("312, 335,175,312").unwrap();
    assert_eq!(set.to_vec(), vec![175, 312, 335]);

    let set = parse_benchmark_ids("abc, 12, -4, 7.5").unwrap();
    assert_eq!(set.to_vec(), vec![12]);

    assert!(parse_benchmark_ids("").is_none());
    assert!(parse_benchmark_ids(" , ,").is_none());
    assert!(parse_benchmark_ids("x,y").is_none());
}
