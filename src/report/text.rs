use crate::model::SubjectId;
use crate::report::{BreakdownSummary, HistogramBin, RankedRow, SummaryData, format_rate};

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub summary: &'a SummaryData,
    pub ranked: &'a [RankedRow],
}

pub fn render_report_text(ctx: &ReportContext<'_>) -> String {
    let summary = ctx.summary;
    let mut out = String::new();

    out.push_str("AI Talent Match Report\n");
    out.push_str("======================\n\n");

    out.push_str("1. Benchmark\n");
    out.push_str(&format!(
        "Requested employee IDs: {}\n",
        join_ids(&summary.benchmark.requested)
    ));
    out.push_str(&format!(
        "Found in score table: {}\n",
        if summary.benchmark.found.is_empty() {
            "none".to_string()
        } else {
            join_ids(&summary.benchmark.found)
        }
    ));
    out.push_str(&format!(
        "Baselined TGVs: {}\n\n",
        summary.counts.n_dimensions_baselined
    ));

    if summary.counts.n_subjects == 0 {
        out.push_str("No results found. Please check your input IDs.\n");
        return out;
    }

    out.push_str("2. Ranked Talent List\n");
    out.push_str(&format!(
        "{:>6}  {:>12}  {:>16}  {:>6}\n",
        "rank", "employee_id", "final_match_rate", "tgvs"
    ));
    for row in ctx.ranked {
        out.push_str(&format!(
            "{:>6}  {:>12}  {:>16}  {:>6}\n",
            row.rank,
            row.employee_id,
            format_rate(row.final_match_rate, 2),
            row.n_dimensions
        ));
    }
    if ctx.ranked.len() < summary.counts.n_subjects {
        out.push_str(&format!(
            "(showing {} of {} employees)\n",
            ctx.ranked.len(),
            summary.counts.n_subjects
        ));
    }
    if summary.counts.n_undefined > 0 {
        out.push_str(&format!(
            "Employees with undefined match rate: {}\n",
            summary.counts.n_undefined
        ));
    }
    out.push('\n');

    out.push_str("3. Distribution of Final Match Rate\n");
    let dist = &summary.distribution;
    out.push_str(&format!(
        "min={} median={} p90={} max={}\n",
        format_rate(dist.min, 2),
        format_rate(dist.median, 2),
        format_rate(dist.p90, 2),
        format_rate(dist.max, 2)
    ));
    out.push_str(&render_histogram(&dist.histogram));
    out.push('\n');

    if let Some(breakdown) = &summary.breakdown {
        out.push_str(&render_breakdown(breakdown));
    }

    out
}

pub fn render_histogram(bins: &[HistogramBin]) -> String {
    if bins.is_empty() {
        return "(no defined match rates)\n".to_string();
    }
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);
    let mut out = String::new();
    for bin in bins {
        out.push_str(&format!(
            "[{:>9.2}, {:>9.2}] {:<width$} {}\n",
            bin.lo,
            bin.hi,
            bar(bin.count as f64, max_count as f64),
            bin.count,
            width = BAR_WIDTH
        ));
    }
    out
}

pub fn render_breakdown(breakdown: &BreakdownSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "4. TGV Breakdown for Employee {}\n",
        breakdown.employee_id
    ));
    if breakdown.entries.is_empty() {
        out.push_str("(no scores recorded for this employee)\n");
        return out;
    }
    let label_width = breakdown
        .entries
        .iter()
        .map(|e| e.tgv.chars().count())
        .max()
        .unwrap_or(0);
    let max_rate = breakdown
        .entries
        .iter()
        .filter_map(|e| e.tgv_match_rate)
        .fold(0.0f64, f64::max);
    for entry in &breakdown.entries {
        let value = entry.tgv_match_rate.unwrap_or(0.0);
        out.push_str(&format!(
            "{:<label_width$} | {:<width$} {}\n",
            entry.tgv,
            bar(value, max_rate),
            format_rate(entry.tgv_match_rate, 2),
            width = BAR_WIDTH
        ));
    }
    out
}

fn bar(value: f64, max: f64) -> String {
    if value <= 0.0 || max <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.clamp(1, BAR_WIDTH))
}

fn join_ids(ids: &[SubjectId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
