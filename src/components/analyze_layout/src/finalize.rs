use crate::{AnalyzeError, LayoutVerdict, analyze_record};
use record_layout::{FrozenLayoutRegistry, LayoutRegistry, RecordId, RecordLayout};
use source_files::Source;

#[derive(Clone, Debug)]
pub struct RecordReport {
    pub record_id: RecordId,
    pub origin: Source,
    pub verdict: LayoutVerdict,
}

/// Verdicts for every record of a finished traversal
#[derive(Debug)]
pub struct LayoutAnalysis {
    registry: FrozenLayoutRegistry,
    pub reports: Vec<RecordReport>,
    pub skipped: Vec<AnalyzeError>,
}

impl LayoutAnalysis {
    pub fn registry(&self) -> &FrozenLayoutRegistry {
        &self.registry
    }

    pub fn layout_of(&self, report: &RecordReport) -> Option<&RecordLayout> {
        self.registry.get(&report.record_id)
    }

    pub fn poorly_ordered(&self) -> impl Iterator<Item = &RecordReport> {
        self.reports.iter().filter(|report| report.verdict.is_poor())
    }
}

/// Ends accumulation and analyzes every record.
///
/// Records whose size was never reported are skipped rather than guessed.
pub fn finalize_and_analyze(registry: LayoutRegistry) -> LayoutAnalysis {
    let registry = registry.freeze();
    let mut reports = Vec::with_capacity(registry.len());
    let mut skipped = Vec::new();

    for (record_id, layout) in registry.all_records() {
        let Some(meta) = registry.meta(record_id) else {
            tracing::warn!(record = %record_id, "skipping record without size information");
            skipped.push(AnalyzeError::MissingMeta(record_id.clone()));
            continue;
        };

        reports.push(RecordReport {
            record_id: record_id.clone(),
            origin: meta.origin,
            verdict: analyze_record(record_id, layout.fields(), meta),
        });
    }

    tracing::info!(
        analyzed = reports.len(),
        skipped = skipped.len(),
        poorly_ordered = reports.iter().filter(|report| report.verdict.is_poor()).count(),
        "finished layout analysis"
    );

    LayoutAnalysis {
        registry,
        reports,
        skipped,
    }
}

pub fn analyze_by_id(
    registry: &FrozenLayoutRegistry,
    record_id: &RecordId,
) -> Result<LayoutVerdict, AnalyzeError> {
    let layout = registry
        .get(record_id)
        .ok_or_else(|| AnalyzeError::UnknownRecord(record_id.clone()))?;

    let meta = registry
        .meta(record_id)
        .ok_or_else(|| AnalyzeError::MissingMeta(record_id.clone()))?;

    Ok(analyze_record(record_id, layout.fields(), meta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_units::ByteUnits;
    use record_layout::FieldIndex;

    fn bytes(value: u64) -> ByteUnits {
        ByteUnits::of(value)
    }

    fn sample_registry() -> LayoutRegistry {
        let mut registry = LayoutRegistry::new();

        let good = RecordId::from("o2::Good");
        registry.record_meta(good.clone(), bytes(16), bytes(8), Source::internal());
        registry.record_field(good.clone(), FieldIndex(0), "mTime", bytes(8), bytes(8));
        registry.record_field(good.clone(), FieldIndex(1), "mId", bytes(4), bytes(4));

        let bad = RecordId::from("o2::Bad");
        registry.record_meta(bad.clone(), bytes(24), bytes(8), Source::internal());
        registry.record_field(bad.clone(), FieldIndex(0), "mTime", bytes(8), bytes(8));
        registry.record_field(bad.clone(), FieldIndex(1), "mFlag", bytes(1), bytes(1));
        registry.record_field(bad.clone(), FieldIndex(2), "mId", bytes(4), bytes(4));
        registry.record_field(bad.clone(), FieldIndex(3), "mKind", bytes(1), bytes(1));

        registry.record_field("o2::Orphan".into(), FieldIndex(0), "x", bytes(1), bytes(1));

        registry
    }

    #[test]
    fn analyzes_every_record_once() {
        let analysis = finalize_and_analyze(sample_registry());

        let analyzed: Vec<_> = analysis
            .reports
            .iter()
            .map(|report| report.record_id.as_str())
            .collect();
        assert_eq!(analyzed, ["o2::Good", "o2::Bad"]);

        let poor: Vec<_> = analysis
            .poorly_ordered()
            .map(|report| report.record_id.as_str())
            .collect();
        assert_eq!(poor, ["o2::Bad"]);

        assert_eq!(
            analysis.skipped,
            vec![AnalyzeError::MissingMeta("o2::Orphan".into())]
        );
    }

    #[test]
    fn report_links_back_to_layout() {
        let analysis = finalize_and_analyze(sample_registry());
        let bad = analysis.poorly_ordered().next().unwrap();

        assert_eq!(analysis.layout_of(bad).map(RecordLayout::len), Some(4));
        assert_eq!(bad.verdict.wasted_bytes(), bytes(8));
    }

    #[test]
    fn unknown_record_is_not_found() {
        let registry = sample_registry().freeze();

        assert_eq!(
            analyze_by_id(&registry, &"o2::Missing".into()),
            Err(AnalyzeError::UnknownRecord("o2::Missing".into()))
        );
    }
}
