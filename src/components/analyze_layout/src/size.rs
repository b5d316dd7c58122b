use crate::{ordering::suggested_order, simulate::SimulatedLayout};
use data_units::ByteUnits;
use record_layout::FieldInfo;

/// Sum of all field widths, as if no padding were ever needed
pub fn optimal_size<'a>(fields: impl IntoIterator<Item = &'a FieldInfo>) -> ByteUnits {
    fields.into_iter().map(|field| field.width).sum()
}

/// Size after reordering the fields by descending alignment.
///
/// This does not depend on the order `fields` are given in.
pub fn achievable_size<'a>(fields: impl IntoIterator<Item = &'a FieldInfo>) -> ByteUnits {
    SimulatedLayout::layout(suggested_order(fields))
}

/// Size of the record with its fields in declaration order.
///
/// The record alignment is taken from the first declared field rather than the
/// most aligned one, so this under-reports the tail padding of records whose
/// first field is not the most aligned. See [`natural_alignment`].
pub fn actual_size<'a>(fields: impl IntoIterator<Item = &'a FieldInfo>) -> ByteUnits {
    SimulatedLayout::layout(fields)
}

/// Largest alignment among the fields, which is what a C ABI would align the record to
pub fn natural_alignment<'a>(fields: impl IntoIterator<Item = &'a FieldInfo>) -> Option<ByteUnits> {
    fields.into_iter().map(|field| field.alignment).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, width: u64, alignment: u64) -> FieldInfo {
        FieldInfo::new(name, ByteUnits::of(width), ByteUnits::of(alignment))
    }

    #[test]
    fn double_then_int() {
        let fields = [field("d", 8, 8), field("i", 4, 4)];

        assert_eq!(optimal_size(&fields), ByteUnits::of(12));
        // 12 bytes of fields, tail padded to the double
        assert_eq!(achievable_size(&fields), ByteUnits::of(16));
        assert_eq!(actual_size(&fields), ByteUnits::of(16));
    }

    #[test]
    fn int_then_double() {
        let fields = [field("i", 4, 4), field("d", 8, 8)];

        // 0..4 i, 8..16 d, tail already a multiple of 4
        assert_eq!(actual_size(&fields), ByteUnits::of(16));
        assert_eq!(achievable_size(&fields), ByteUnits::of(16));
        assert_eq!(optimal_size(&fields), ByteUnits::of(12));
    }

    #[test]
    fn reordering_recovers_interior_padding() {
        let fields = [
            field("d", 8, 8),
            field("c0", 1, 1),
            field("i", 4, 4),
            field("c1", 1, 1),
        ];

        // 0..8 d, 8..9 c0, 12..16 i, 16..17 c1, tail to 24
        assert_eq!(actual_size(&fields), ByteUnits::of(24));
        // d, i, c0, c1 = 14, tail to 16
        assert_eq!(achievable_size(&fields), ByteUnits::of(16));
        assert_eq!(optimal_size(&fields), ByteUnits::of(14));
    }

    #[test]
    fn equal_alignment_in_every_order() {
        let fields = [field("a", 4, 4), field("b", 4, 4), field("c", 4, 4)];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

        for order in orders {
            let permuted: Vec<_> = order.iter().map(|&i| &fields[i]).collect();

            assert_eq!(optimal_size(permuted.iter().copied()), ByteUnits::of(12));
            assert_eq!(achievable_size(permuted.iter().copied()), ByteUnits::of(12));
            assert_eq!(actual_size(permuted.iter().copied()), ByteUnits::of(12));
        }
    }

    #[test]
    fn interleaved_small_fields() {
        let fields = [
            field("c0", 1, 1),
            field("d", 8, 8),
            field("c1", 1, 1),
            field("i", 4, 4),
        ];

        // 0..1 c0, 8..16 d, 16..17 c1, 20..24 i
        assert_eq!(actual_size(&fields), ByteUnits::of(24));
        // d, i, c0, c1 = 14, padded to 16
        assert_eq!(achievable_size(&fields), ByteUnits::of(16));
        assert_eq!(optimal_size(&fields), ByteUnits::of(14));
    }

    #[test]
    fn first_field_alignment_can_undercount_tail_padding() {
        let fields = [
            field("i0", 4, 4),
            field("i1", 4, 4),
            field("d", 8, 8),
            field("c", 1, 1),
        ];

        // A real compiler pads this to 24, but the record is aligned to the
        // first field (4) here
        assert_eq!(actual_size(&fields), ByteUnits::of(20));
        assert_eq!(achievable_size(&fields), ByteUnits::of(24));
        assert_eq!(natural_alignment(&fields), Some(ByteUnits::of(8)));
    }

    #[test]
    fn empty_record() {
        let fields: [FieldInfo; 0] = [];

        assert_eq!(optimal_size(&fields), ByteUnits::ZERO);
        assert_eq!(achievable_size(&fields), ByteUnits::ZERO);
        assert_eq!(actual_size(&fields), ByteUnits::ZERO);
        assert_eq!(natural_alignment(&fields), None);
    }
}
