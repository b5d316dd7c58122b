#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SourceFileKey(pub(crate) u32);
