use crate::{
    ordering::is_well_ordered,
    size::{achievable_size, actual_size, natural_alignment, optimal_size},
};
use data_units::ByteUnits;
use record_layout::{FieldInfo, RecordId, RecordMeta};

/// Outcome of analyzing one record
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LayoutVerdict {
    pub well_ordered: bool,
    pub optimal_size: ByteUnits,
    pub achievable_size: ByteUnits,
    pub actual_size: ByteUnits,
    pub reported_width: ByteUnits,
    pub reported_alignment: ByteUnits,

    /// Alignment `actual_size` padded the record to (that of the first field)
    pub record_alignment: Option<ByteUnits>,

    /// Largest field alignment
    pub natural_alignment: Option<ByteUnits>,
}

impl LayoutVerdict {
    pub fn is_poor(&self) -> bool {
        !self.well_ordered
    }

    /// Bytes that reordering would save
    pub fn wasted_bytes(&self) -> ByteUnits {
        self.actual_size.saturating_sub(self.achievable_size)
    }

    /// Calculated and reported size, when they disagree
    pub fn size_mismatch(&self) -> Option<(ByteUnits, ByteUnits)> {
        (self.actual_size != self.reported_width).then_some((self.actual_size, self.reported_width))
    }

    /// Whether `actual_size` was padded to a smaller alignment than the record really has
    pub fn uses_first_field_alignment(&self) -> bool {
        self.record_alignment != self.natural_alignment
    }
}

pub fn analyze_record<'a>(
    record_id: &RecordId,
    fields: impl IntoIterator<Item = &'a FieldInfo>,
    meta: &RecordMeta,
) -> LayoutVerdict {
    let fields = Vec::from_iter(fields);

    let verdict = LayoutVerdict {
        well_ordered: is_well_ordered(fields.iter().copied()),
        optimal_size: optimal_size(fields.iter().copied()),
        achievable_size: achievable_size(fields.iter().copied()),
        actual_size: actual_size(fields.iter().copied()),
        reported_width: meta.whole_width,
        reported_alignment: meta.whole_alignment,
        record_alignment: fields.first().map(|field| field.alignment),
        natural_alignment: natural_alignment(fields.iter().copied()),
    };

    tracing::debug!(
        record = %record_id,
        fields = fields.len(),
        well_ordered = verdict.well_ordered,
        actual = %verdict.actual_size,
        achievable = %verdict.achievable_size,
        "analyzed record"
    );

    verdict
}
