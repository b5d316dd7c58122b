use analyze_layout::{RecordReport, suggested_order};
use record_layout::RecordLayout;
use serde::Serialize;
use source_files::SourceFiles;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    record: &'a str,
    well_ordered: bool,
    optimal_size: u64,
    achievable_size: u64,
    actual_size: u64,
    reported_width: u64,
    reported_alignment: u64,
    wasted_bytes: u64,
    file: Option<&'a str>,
    line: u32,
    column: u32,
    fields: Vec<JsonField<'a>>,
    suggested_order: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct JsonField<'a> {
    index: u32,
    name: &'a str,
    width: u64,
    alignment: u64,
}

impl<'a> JsonReport<'a> {
    pub fn new(
        report: &'a RecordReport,
        layout: &'a RecordLayout,
        source_files: &'a SourceFiles,
    ) -> Self {
        let verdict = &report.verdict;
        let origin = report.origin;

        Self {
            record: report.record_id.as_str(),
            well_ordered: verdict.well_ordered,
            optimal_size: verdict.optimal_size.bytes(),
            achievable_size: verdict.achievable_size.bytes(),
            actual_size: verdict.actual_size.bytes(),
            reported_width: verdict.reported_width.bytes(),
            reported_alignment: verdict.reported_alignment.bytes(),
            wasted_bytes: verdict.wasted_bytes().bytes(),
            file: (!origin.is_internal()).then(|| source_files.get(origin.key).filename()),
            line: origin.location.line,
            column: origin.location.column,
            fields: layout
                .iter()
                .map(|(index, field)| JsonField {
                    index: index.0,
                    name: &field.name,
                    width: field.width.bytes(),
                    alignment: field.alignment.bytes(),
                })
                .collect(),
            suggested_order: suggested_order(layout.fields())
                .into_iter()
                .map(|field| field.name.as_str())
                .collect(),
        }
    }
}
