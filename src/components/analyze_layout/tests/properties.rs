//! Property tests for the layout analyzer
//!
//! Field widths are always a multiple of their alignment, as they are for
//! every complete C/C++ type.

use analyze_layout::{achievable_size, actual_size, is_well_ordered, optimal_size, suggested_order};
use data_units::ByteUnits;
use proptest::prelude::*;
use record_layout::FieldInfo;

fn field() -> impl Strategy<Value = FieldInfo> {
    (0u32..5, 0u64..4, "[a-z]{1,6}").prop_map(|(shift, multiple, name)| {
        let alignment = 1u64 << shift;
        FieldInfo::new(
            name,
            ByteUnits::of(alignment * multiple),
            ByteUnits::of(alignment),
        )
    })
}

fn fields() -> impl Strategy<Value = Vec<FieldInfo>> {
    prop::collection::vec(field(), 0..12)
}

fn sorted(fields: &[FieldInfo]) -> Vec<FieldInfo> {
    suggested_order(fields).into_iter().cloned().collect()
}

proptest! {
    #[test]
    fn descending_alignment_is_well_ordered(fields in fields()) {
        prop_assert!(is_well_ordered(&sorted(&fields)));
    }

    #[test]
    fn an_increasing_pair_is_never_well_ordered(
        mut fields in fields(),
        position in any::<prop::sample::Index>(),
    ) {
        fields.insert(0, FieldInfo::new("small", ByteUnits::of(1), ByteUnits::of(1)));
        fields.insert(1, FieldInfo::new("large", ByteUnits::of(8), ByteUnits::of(8)));

        // Keep the pair adjacent, but move it somewhere in the record
        let at = position.index(fields.len() - 1);
        let pair: Vec<_> = fields.drain(0..2).collect();
        fields.splice(at..at, pair);

        prop_assert!(!is_well_ordered(&fields));
    }

    #[test]
    fn achievable_ignores_declaration_order(
        (original, shuffled) in fields().prop_flat_map(|fields| {
            (Just(fields.clone()), Just(fields).prop_shuffle())
        })
    ) {
        prop_assert_eq!(achievable_size(&original), achievable_size(&shuffled));
        prop_assert_eq!(optimal_size(&original), optimal_size(&shuffled));
    }

    #[test]
    fn sizes_are_ordered_when_first_field_is_most_aligned(mut fields in fields()) {
        let most_aligned = fields
            .iter()
            .enumerate()
            .max_by_key(|(_, field)| field.alignment)
            .map(|(i, _)| i);

        if let Some(most_aligned) = most_aligned {
            fields.swap(0, most_aligned);
        }

        prop_assert!(optimal_size(&fields) <= achievable_size(&fields));
        prop_assert!(achievable_size(&fields) <= actual_size(&fields));
    }

    #[test]
    fn optimal_never_exceeds_achievable(fields in fields()) {
        prop_assert!(optimal_size(&fields) <= achievable_size(&fields));
    }

    #[test]
    fn sorted_fields_need_no_reordering(fields in fields()) {
        let fields = sorted(&fields);
        prop_assert_eq!(actual_size(&fields), achievable_size(&fields));
    }
}
