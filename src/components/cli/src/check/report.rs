use super::json::JsonReport;
use crate::{CheckOptions, OutputFormat};
use analyze_layout::{LayoutAnalysis, RecordReport, suggested_order};
use diagnostics::{Diagnostics, ErrorDiagnostic, NoteDiagnostic, Severity, WarningDiagnostic};
use itertools::Itertools;
use record_layout::{RecordId, RecordLayout};
use std::{fmt::Display, io};

/// Turns analysis results into diagnostics and the requested stdout output
pub fn emit(
    analysis: &LayoutAnalysis,
    diagnostics: &Diagnostics,
    options: &CheckOptions,
    out: &mut dyn io::Write,
) -> io::Result<()> {
    for skipped in &analysis.skipped {
        diagnostics.push(WarningDiagnostic::plain(skipped));
    }

    for report in &analysis.reports {
        let Some(layout) = analysis.layout_of(report) else {
            continue;
        };

        diagnose(report, diagnostics, options);

        if !report.verdict.is_poor() && !options.print_all {
            continue;
        }

        match options.output {
            OutputFormat::Text => write_text(report, layout, options, out)?,
            OutputFormat::Json => {
                let source_files = diagnostics.source_files();
                let json = JsonReport::new(report, layout, source_files);
                writeln!(out, "{}", serde_json::to_string(&json)?)?;
            }
        }
    }

    Ok(())
}

fn diagnose(report: &RecordReport, diagnostics: &Diagnostics, options: &CheckOptions) {
    let RecordReport {
        record_id,
        origin,
        verdict,
    } = report;
    let origin = *origin;

    if verdict.is_poor() {
        let message = format!("record '{}' does not have good structure", record_id);

        match options.poor_layout_severity {
            Severity::Error => diagnostics.push(ErrorDiagnostic::new(message, origin)),
            Severity::Warning => diagnostics.push(WarningDiagnostic::new(message, origin)),
            Severity::Note => diagnostics.push(NoteDiagnostic::new(message, origin)),
        }

        let mut sizes = format!(
            "optimal size would be {} bytes, reported size is {} bytes aligned to {}, calculated size is {} bytes, achievable size is {} bytes",
            verdict.optimal_size,
            verdict.reported_width,
            verdict.reported_alignment,
            verdict.actual_size,
            verdict.achievable_size,
        );

        if !verdict.wasted_bytes().is_zero() {
            sizes.push_str(&format!(" ({} bytes wasted)", verdict.wasted_bytes()));
        }

        diagnostics.push(NoteDiagnostic::new(sizes, origin));
    }

    let flags = diagnostics.flags();

    if flags.warn_size_mismatch {
        if let Some((calculated, reported)) = verdict.size_mismatch() {
            diagnostics.push(WarningDiagnostic::new(
                format!(
                    "calculated size of record '{}' is {} bytes, but {} bytes were reported",
                    record_id, calculated, reported
                ),
                origin,
            ));
        }
    }

    if flags.warn_alignment_simplification && verdict.uses_first_field_alignment() {
        if let (Some(first), Some(natural)) = (verdict.record_alignment, verdict.natural_alignment)
        {
            diagnostics.push(WarningDiagnostic::new(
                format!(
                    "size of record '{}' was calculated with the alignment of its first field ({}) instead of its largest field alignment ({})",
                    record_id, first, natural
                ),
                origin,
            ));
        }
    }
}

fn write_text(
    report: &RecordReport,
    layout: &RecordLayout,
    options: &CheckOptions,
    out: &mut dyn io::Write,
) -> io::Result<()> {
    if options.print_layout {
        write!(out, "{}", LayoutTable::new(&report.record_id, layout))?;

        if report.verdict.is_poor() {
            writeln!(
                out,
                "Suggested order: {}",
                suggested_order(layout.fields())
                    .into_iter()
                    .map(|field| field.name.as_str())
                    .join(", ")
            )?;
        }
    } else if !report.verdict.is_poor() {
        writeln!(
            out,
            "record '{}' is well ordered ({} bytes)",
            report.record_id, report.verdict.actual_size
        )?;
    }

    Ok(())
}

/// Field table in declaration order
pub struct LayoutTable<'a> {
    record_id: &'a RecordId,
    layout: &'a RecordLayout,
}

impl<'a> LayoutTable<'a> {
    pub fn new(record_id: &'a RecordId, layout: &'a RecordLayout) -> Self {
        Self { record_id, layout }
    }
}

impl Display for LayoutTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name_width = self
            .layout
            .fields()
            .map(|field| field.name.len())
            .max()
            .unwrap_or(0)
            .max("name".len());

        writeln!(f, "Field order for record {}", self.record_id)?;
        writeln!(
            f,
            " {:>5}  {:<name_width$}  {:>5}  {:>5}",
            "index", "name", "width", "align"
        )?;

        for (index, field) in self.layout.iter() {
            writeln!(
                f,
                " {:>5}  {:<name_width$}  {:>5}  {:>5}",
                index.0,
                field.name,
                field.width.bytes(),
                field.alignment.bytes()
            )?;
        }

        Ok(())
    }
}
