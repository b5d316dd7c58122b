mod error;
mod note;
mod show;
mod warning;

use core::fmt::Debug;
use derive_more::IsVariant;
pub use error::ErrorDiagnostic;
pub use note::NoteDiagnostic;
pub use show::{Show, minimal_filename};
use source_files::SourceFiles;
use std::{
    cell::{Cell, RefCell},
    path::Path,
};
pub use warning::WarningDiagnostic;

pub trait Diagnostic: Show {
    fn severity(&self) -> Severity;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, IsVariant)]
pub enum Severity {
    Note,
    Warning,
    Error,
}

#[derive(Clone, Debug)]
pub struct DiagnosticFlags {
    pub print_without_collecting: bool,
    pub warn_size_mismatch: bool,
    pub warn_alignment_simplification: bool,
}

impl Default for DiagnosticFlags {
    fn default() -> Self {
        Self {
            print_without_collecting: true,
            warn_size_mismatch: false,
            warn_alignment_simplification: false,
        }
    }
}

pub struct Diagnostics<'a> {
    source_files: &'a SourceFiles,
    project_root: Option<&'a Path>,
    diagnostics: RefCell<Vec<Box<dyn Diagnostic>>>,
    num_errors: Cell<usize>,
    flags: DiagnosticFlags,
}

impl<'a> Debug for Diagnostics<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

impl<'a> Diagnostics<'a> {
    pub fn new(source_files: &'a SourceFiles, flags: DiagnosticFlags) -> Self {
        Self {
            source_files,
            project_root: None,
            diagnostics: RefCell::new(Vec::new()),
            num_errors: Cell::new(0),
            flags,
        }
    }

    pub fn with_project_root(mut self, project_root: &'a Path) -> Self {
        self.project_root = Some(project_root);
        self
    }

    pub fn flags(&self) -> &DiagnosticFlags {
        &self.flags
    }

    pub fn source_files(&self) -> &'a SourceFiles {
        self.source_files
    }

    pub fn push(&self, diagnostic: impl Diagnostic + 'static) {
        if diagnostic.severity().is_error() {
            self.num_errors.set(self.num_errors.get() + 1);
        }

        if self.flags.print_without_collecting {
            self.print(&diagnostic);
        } else {
            self.diagnostics.borrow_mut().push(Box::new(diagnostic));
        }
    }

    pub fn num_errors(&self) -> usize {
        self.num_errors.get()
    }

    pub fn has_errors(&self) -> bool {
        self.num_errors() > 0
    }

    /// Renders every collected diagnostic, in the order they were pushed
    pub fn render_all(&self) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .map(|diagnostic| self.render(&**diagnostic))
            .collect()
    }

    pub fn print_all(&self) {
        for message in self.render_all() {
            eprintln!("{message}");
        }
    }

    pub fn print(&self, diagnostic: &dyn Diagnostic) {
        eprintln!("{}", self.render(diagnostic));
    }

    fn render(&self, diagnostic: &dyn Diagnostic) -> String {
        let mut message = String::new();

        diagnostic
            .show(&mut message, self.source_files, self.project_root)
            .expect("show diagnostic message");

        message
    }
}
