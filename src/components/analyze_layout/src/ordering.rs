use itertools::Itertools;
use record_layout::FieldInfo;
use std::cmp::Reverse;

/// Whether alignments never increase from one field to the next.
///
/// Such an order never needs padding between consecutive fields.
pub fn is_well_ordered<'a>(fields: impl IntoIterator<Item = &'a FieldInfo>) -> bool {
    let mut last_alignment = None;

    for field in fields {
        if last_alignment.is_some_and(|last| field.alignment > last) {
            return false;
        }
        last_alignment = Some(field.alignment);
    }

    true
}

/// Fields sorted by descending alignment, keeping declaration order among equals
pub fn suggested_order<'a>(fields: impl IntoIterator<Item = &'a FieldInfo>) -> Vec<&'a FieldInfo> {
    fields
        .into_iter()
        .sorted_by_key(|field| Reverse(field.alignment))
        .collect()
}
