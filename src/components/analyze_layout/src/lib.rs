mod error;
mod finalize;
mod ordering;
mod simulate;
mod size;
mod verdict;

pub use error::AnalyzeError;
pub use finalize::{LayoutAnalysis, RecordReport, analyze_by_id, finalize_and_analyze};
pub use ordering::{is_well_ordered, suggested_order};
pub use size::{achievable_size, actual_size, natural_alignment, optimal_size};
pub use verdict::{LayoutVerdict, analyze_record};
