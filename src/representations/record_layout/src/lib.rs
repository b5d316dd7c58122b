mod field;
mod record;
mod registry;

pub use field::{FieldIndex, FieldInfo};
pub use record::{RecordId, RecordLayout, RecordMeta};
pub use registry::{FrozenLayoutRegistry, LayoutRegistry};
