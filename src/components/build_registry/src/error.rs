use std::fmt::Display;

#[derive(Debug)]
pub struct IngestError {
    pub kind: IngestErrorKind,
    pub line: usize,
}

#[derive(Debug)]
pub enum IngestErrorKind {
    Io(std::io::Error),
    Json(serde_json::Error),
    FractionalByteWidth { record: String, width: u64 },
    FractionalByteAlignment { record: String, alignment: u64 },
    WidthTooLarge { record: String, width: u64 },
    AlignmentTooLarge { record: String, alignment: u64 },
    ZeroAlignment { record: String },
    AlignmentNotPowerOfTwo { record: String, alignment: u64 },
    WidthNotMultipleOfAlignment {
        record: String,
        field: String,
        width: u64,
        alignment: u64,
    },
}

impl From<std::io::Error> for IngestErrorKind {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for IngestErrorKind {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl IngestErrorKind {
    pub fn at_line(self, line: usize) -> IngestError {
        IngestError { kind: self, line }
    }
}

impl Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl Display for IngestErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestErrorKind::Io(error) => write!(f, "Failed to read layout events: {}", error),
            IngestErrorKind::Json(error) => write!(f, "Malformed layout event: {}", error),
            IngestErrorKind::FractionalByteWidth { record, width } => write!(
                f,
                "Width {} of a member of '{}' is not a whole number of bytes (bit-fields are not supported)",
                width, record
            ),
            IngestErrorKind::FractionalByteAlignment { record, alignment } => write!(
                f,
                "Alignment {} of a member of '{}' is not a whole number of bytes",
                alignment, record
            ),
            IngestErrorKind::WidthTooLarge { record, width } => write!(
                f,
                "Width {} of a member of '{}' exceeds the largest supported size of {} bytes",
                width,
                record,
                u32::MAX
            ),
            IngestErrorKind::AlignmentTooLarge { record, alignment } => write!(
                f,
                "Alignment {} of a member of '{}' exceeds the largest supported size of {} bytes",
                alignment,
                record,
                u32::MAX
            ),
            IngestErrorKind::ZeroAlignment { record } => {
                write!(f, "Member of '{}' has an alignment of zero", record)
            }
            IngestErrorKind::AlignmentNotPowerOfTwo { record, alignment } => write!(
                f,
                "Member of '{}' has alignment {}, which is not a power of two",
                record, alignment
            ),
            IngestErrorKind::WidthNotMultipleOfAlignment {
                record,
                field,
                width,
                alignment,
            } => write!(
                f,
                "Field '{}' of '{}' has width {}, which is not a multiple of its alignment {}",
                field, record, width, alignment
            ),
        }
    }
}

impl std::error::Error for IngestError {}
