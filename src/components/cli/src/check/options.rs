use build_registry::IngestOptions;
use derive_more::IsVariant;
use diagnostics::{DiagnosticFlags, Severity};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct CheckOptions {
    pub ingest: IngestOptions,
    pub print_layout: bool,
    pub print_all: bool,
    pub output: OutputFormat,
    pub poor_layout_severity: Severity,
    pub diagnostic_flags: DiagnosticFlags,
    pub project_root: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, IsVariant)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            ingest: IngestOptions::default(),
            print_layout: false,
            print_all: false,
            output: OutputFormat::Text,
            poor_layout_severity: Severity::Error,
            diagnostic_flags: DiagnosticFlags::default(),
            project_root: None,
        }
    }
}
