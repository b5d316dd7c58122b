use crate::{FieldIndex, FieldInfo};
use data_units::ByteUnits;
use derive_more::{Deref, Display, From};
use source_files::Source;
use std::collections::{BTreeMap, btree_map::Entry};

/// Globally unique name of a record, usually its fully-qualified name
#[derive(Clone, Debug, Display, From, Deref, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

/// Fields of one record keyed by declaration index
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RecordLayout {
    fields: BTreeMap<FieldIndex, FieldInfo>,
}

impl RecordLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `field` unless `index` is already taken, returning whether it was inserted
    pub fn insert(&mut self, index: FieldIndex, field: FieldInfo) -> bool {
        match self.fields.entry(index) {
            Entry::Vacant(vacant) => {
                vacant.insert(field);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, index: FieldIndex) -> Option<&FieldInfo> {
        self.fields.get(&index)
    }

    /// Fields in ascending declaration order
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldInfo> + Clone {
        self.fields.values()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (FieldIndex, &FieldInfo)> + Clone {
        self.fields.iter().map(|(index, field)| (*index, field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Whole-record size and alignment as reported by the compiler, plus where it was declared
#[derive(Copy, Clone, Debug)]
pub struct RecordMeta {
    pub whole_width: ByteUnits,
    pub whole_alignment: ByteUnits,
    pub origin: Source,
}
