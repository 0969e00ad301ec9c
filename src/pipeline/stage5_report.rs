use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::engine::MatchRun;
use crate::report::json::render_summary_json;
use crate::report::text::{ReportContext, render_report_text};
use crate::report::{
    BaselineRow, BenchmarkSummary, BreakdownRow, BreakdownSummary, Counts, RankedRow,
    SummaryData, ToolMeta, distribution, format_f64_6, format_rate,
};

pub const SUMMARY_TOP: usize = 10;

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub run: &'a MatchRun,
    pub tool_name: String,
    pub tool_version: String,
    /// Rows of the ranked list shown in `report.txt`.
    pub top_n: usize,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let ranked = ranked_rows(input.run);

    write_ranking_tsv(&ranked, &out_dir.join("ranking.tsv"))?;
    write_baseline_tsv(input.run, &out_dir.join("baseline.tsv"))?;

    let breakdown_path = out_dir.join("breakdown.tsv");
    match &input.run.breakdown {
        Some(breakdown) => write_breakdown_tsv(&breakdown_summary(breakdown), &breakdown_path)?,
        None => {
            if breakdown_path.exists() {
                fs::remove_file(&breakdown_path)?;
            }
        }
    }

    let summary = build_summary(input, &ranked);
    let json = render_summary_json(&summary).map_err(std::io::Error::other)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let shown = input.top_n.min(ranked.len());
    let report = render_report_text(&ReportContext {
        summary: &summary,
        ranked: &ranked[..shown],
    });
    write_text(&out_dir.join("report.txt"), &report)?;

    tracing::info!(out_dir = %out_dir.display(), rows = ranked.len(), "reports written");
    Ok(())
}

pub fn ranked_rows(run: &MatchRun) -> Vec<RankedRow> {
    run.ranking
        .iter()
        .enumerate()
        .map(|(idx, r)| RankedRow {
            rank: idx + 1,
            employee_id: r.subject_id,
            final_match_rate: r.final_match_rate,
            n_dimensions: r.n_dimensions,
        })
        .collect()
}

pub fn build_summary(input: &Stage5Input<'_>, ranked: &[RankedRow]) -> SummaryData {
    let run = input.run;
    let defined: Vec<f64> = run
        .ranking
        .iter()
        .filter_map(|r| r.final_match_rate)
        .collect();

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        benchmark: BenchmarkSummary {
            requested: run.benchmark.to_vec(),
            found: run.benchmark_found.clone(),
        },
        counts: Counts {
            n_subjects: run.ranking.len(),
            n_ranked: defined.len(),
            n_undefined: run.ranking.len() - defined.len(),
            n_dimensions_baselined: run.baseline.len(),
        },
        distribution: distribution(&defined),
        baseline: run
            .baseline
            .iter()
            .map(|(tgv, entry)| BaselineRow {
                tgv: tgv.to_string(),
                baseline_score: entry.baseline_score,
                n_records: entry.n_records,
            })
            .collect(),
        top: ranked.iter().take(SUMMARY_TOP).cloned().collect(),
        breakdown: run.breakdown.as_ref().map(breakdown_summary),
    }
}

fn breakdown_summary(breakdown: &crate::engine::SubjectBreakdown) -> BreakdownSummary {
    BreakdownSummary {
        employee_id: breakdown.subject_id,
        entries: breakdown
            .entries
            .iter()
            .map(|e| BreakdownRow {
                tgv: e.tgv.clone(),
                tgv_match_rate: e.tgv_match_rate,
            })
            .collect(),
    }
}

fn write_ranking_tsv(ranked: &[RankedRow], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "rank\temployee_id\tfinal_match_rate\tn_dimensions")?;
    for row in ranked {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            row.rank,
            row.employee_id,
            format_rate(row.final_match_rate, 6),
            row.n_dimensions
        )?;
    }
    w.flush()
}

fn write_baseline_tsv(run: &MatchRun, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "tgv\tbaseline_score\tn_benchmark_records")?;
    for (tgv, entry) in run.baseline.iter() {
        writeln!(
            w,
            "{}\t{}\t{}",
            tgv,
            format_f64_6(entry.baseline_score),
            entry.n_records
        )?;
    }
    w.flush()
}

fn write_breakdown_tsv(breakdown: &BreakdownSummary, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "# employee_id={}", breakdown.employee_id)?;
    writeln!(w, "tgv\ttgv_match_rate")?;
    for entry in &breakdown.entries {
        writeln!(w, "{}\t{}", entry.tgv, format_rate(entry.tgv_match_rate, 2))?;
    }
    w.flush()
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
