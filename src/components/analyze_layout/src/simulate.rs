use data_units::ByteUnits;
use record_layout::FieldInfo;

/// Replays sequential field placement the way a compiler lays out a record
#[derive(Clone, Debug, Default)]
pub(crate) struct SimulatedLayout {
    offset: ByteUnits,
    record_alignment: Option<ByteUnits>,
}

impl SimulatedLayout {
    pub fn layout<'a>(fields: impl IntoIterator<Item = &'a FieldInfo>) -> ByteUnits {
        let mut simulated = Self::default();

        for field in fields {
            simulated.layout_field(field);
        }

        simulated.finish_layout()
    }

    fn layout_field(&mut self, field: &FieldInfo) {
        // NOTE: The record takes the alignment of whichever field is placed first
        if self.record_alignment.is_none() {
            self.record_alignment = Some(field.alignment);
        }

        let padding = self.offset.padding_to(field.alignment);

        tracing::trace!(
            field = %field.name,
            offset = %self.offset,
            %padding,
            width = %field.width,
            "placing field"
        );

        self.offset += padding + field.width;
    }

    fn finish_layout(self) -> ByteUnits {
        // Tail padding so that consecutive array elements stay aligned
        match self.record_alignment {
            Some(alignment) => self.offset.align_to(alignment),
            None => self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_has_no_size() {
        let fields: [FieldInfo; 0] = [];
        assert_eq!(SimulatedLayout::layout(&fields), ByteUnits::ZERO);
    }

    #[test]
    fn tail_padding_uses_first_field_alignment() {
        let fields = [
            FieldInfo::new("d", ByteUnits::of(8), ByteUnits::of(8)),
            FieldInfo::new("c", ByteUnits::of(1), ByteUnits::of(1)),
        ];

        assert_eq!(SimulatedLayout::layout(&fields), ByteUnits::of(16));
    }
}
