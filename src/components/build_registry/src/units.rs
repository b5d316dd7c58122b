use data_units::{BitUnits, ByteUnits};
use derive_more::IsVariant;

/// Unit that widths and alignments are reported in
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, IsVariant)]
pub enum WidthUnits {
    #[default]
    Bytes,
    // Clang's type info is in bits
    Bits,
}

impl WidthUnits {
    /// `None` when a bit count does not make up whole bytes
    pub fn to_bytes(self, value: u64) -> Option<ByteUnits> {
        match self {
            WidthUnits::Bytes => Some(ByteUnits::of(value)),
            WidthUnits::Bits => ByteUnits::try_from(BitUnits::of(value)).ok(),
        }
    }
}
