use crate::{FieldIndex, FieldInfo, RecordId, RecordLayout, RecordMeta};
use data_units::ByteUnits;
use indexmap::{IndexMap, map::Entry};
use source_files::Source;

/// Accumulates record layouts while declarations are being visited.
///
/// Every observation is first-write-wins: re-visiting the same declaration is
/// harmless, and conflicting re-observations keep the original data.
/// Call [`LayoutRegistry::freeze`] once traversal is complete.
#[derive(Debug, Default)]
pub struct LayoutRegistry {
    layouts: IndexMap<RecordId, RecordLayout>,
    metas: IndexMap<RecordId, RecordMeta>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_field(
        &mut self,
        record_id: RecordId,
        index: FieldIndex,
        name: impl Into<String>,
        width: ByteUnits,
        alignment: ByteUnits,
    ) {
        let field = FieldInfo::new(name, width, alignment);
        let layout = self.layouts.entry(record_id).or_default();

        if let Some(kept) = layout.get(index) {
            if *kept == field {
                tracing::debug!(%index, field = %kept.name, "ignoring repeated field observation");
            } else {
                tracing::warn!(
                    %index,
                    kept = %kept.name,
                    ignored = %field.name,
                    "conflicting field observation at an already recorded index"
                );
            }
            return;
        }

        layout.insert(index, field);
    }

    pub fn record_meta(
        &mut self,
        record_id: RecordId,
        whole_width: ByteUnits,
        whole_alignment: ByteUnits,
        origin: Source,
    ) {
        match self.metas.entry(record_id) {
            Entry::Vacant(vacant) => {
                vacant.insert(RecordMeta {
                    whole_width,
                    whole_alignment,
                    origin,
                });
            }
            Entry::Occupied(occupied) => {
                let kept = occupied.get();

                if kept.whole_width != whole_width || kept.whole_alignment != whole_alignment {
                    tracing::warn!(
                        record = %occupied.key(),
                        kept_width = %kept.whole_width,
                        ignored_width = %whole_width,
                        "conflicting record size observation"
                    );
                }
            }
        }
    }

    pub fn num_records(&self) -> usize {
        self.layouts.len()
    }

    /// Ends the accumulation phase
    pub fn freeze(self) -> FrozenLayoutRegistry {
        FrozenLayoutRegistry {
            layouts: self.layouts,
            metas: self.metas,
        }
    }
}

/// Read-only view of a finished [`LayoutRegistry`]
#[derive(Debug)]
pub struct FrozenLayoutRegistry {
    layouts: IndexMap<RecordId, RecordLayout>,
    metas: IndexMap<RecordId, RecordMeta>,
}

impl FrozenLayoutRegistry {
    /// Records in the order they were first observed.
    /// Each call starts a fresh pass.
    pub fn all_records(&self) -> impl ExactSizeIterator<Item = (&RecordId, &RecordLayout)> + Clone {
        self.layouts.iter()
    }

    pub fn get(&self, record_id: &RecordId) -> Option<&RecordLayout> {
        self.layouts.get(record_id)
    }

    pub fn meta(&self, record_id: &RecordId) -> Option<&RecordMeta> {
        self.metas.get(record_id)
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
