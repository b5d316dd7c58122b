use record_layout::RecordId;
use std::fmt::Display;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnalyzeError {
    UnknownRecord(RecordId),
    MissingMeta(RecordId),
}

impl AnalyzeError {
    pub fn record_id(&self) -> &RecordId {
        match self {
            AnalyzeError::UnknownRecord(record_id) | AnalyzeError::MissingMeta(record_id) => {
                record_id
            }
        }
    }
}

impl Display for AnalyzeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzeError::UnknownRecord(record_id) => {
                write!(f, "No layout was recorded for '{}'", record_id)
            }
            AnalyzeError::MissingMeta(record_id) => {
                write!(f, "Size of record '{}' was never reported", record_id)
            }
        }
    }
}

impl std::error::Error for AnalyzeError {}
