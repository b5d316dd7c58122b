use data_units::ByteUnits;
use derive_more::{Display, From};

/// Declaration position of a field within its record
#[derive(Copy, Clone, Debug, Display, From, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FieldIndex(pub u32);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldInfo {
    pub name: String,
    pub width: ByteUnits,
    pub alignment: ByteUnits,
}

impl FieldInfo {
    /// Panics if `alignment` is not a non-zero power of two, or if `width` is not
    /// a whole multiple of it. Complete types never violate either, so both can
    /// only come from broken metadata extraction.
    pub fn new(name: impl Into<String>, width: ByteUnits, alignment: ByteUnits) -> Self {
        let name = name.into();

        assert!(
            alignment.is_power_of_2(),
            "field '{}' has invalid alignment {}",
            name,
            alignment
        );

        assert!(
            width.is_aligned_to(alignment),
            "field '{}' has width {} which is not a multiple of its alignment {}",
            name,
            width,
            alignment
        );

        Self {
            name,
            width,
            alignment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_fields_are_allowed() {
        let field = FieldInfo::new("mEmpty", ByteUnits::ZERO, ByteUnits::of(4));
        assert_eq!(field.width, ByteUnits::ZERO);
    }

    #[test]
    #[should_panic(expected = "not a multiple of its alignment")]
    fn width_must_be_a_multiple_of_alignment() {
        FieldInfo::new("x", ByteUnits::of(5), ByteUnits::of(4));
    }
}
