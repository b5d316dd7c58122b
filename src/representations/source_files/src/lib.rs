mod file;
mod key;
mod source;

pub use file::SourceFile;
use indexmap::IndexMap;
pub use key::SourceFileKey;
pub use line_column::Location;
pub use source::Source;
use std::path::PathBuf;

/// Interned table of the files that record origins point into
#[derive(Debug)]
pub struct SourceFiles {
    files: IndexMap<PathBuf, SourceFile>,
}

impl SourceFiles {
    pub const INTERNAL_KEY: SourceFileKey = SourceFileKey(0);

    pub fn new() -> Self {
        let mut files = IndexMap::new();

        // Create the <internal> file, used for records without a known origin
        files.insert("<internal>".into(), SourceFile::new("<internal>".into()));

        Self { files }
    }

    pub fn get(&self, key: SourceFileKey) -> &SourceFile {
        &self.files[key.0 as usize]
    }

    /// Returns the key for `filepath`, adding it if not seen before
    pub fn intern(&mut self, filepath: PathBuf) -> SourceFileKey {
        let entry = self.files.entry(filepath);
        let index = entry.index();
        let filepath = entry.key().clone();
        entry.or_insert_with(|| SourceFile::new(filepath));

        SourceFileKey(
            index
                .try_into()
                .expect("more source files than a key can address"),
        )
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable() {
        let mut source_files = SourceFiles::new();
        let a = source_files.intern("a.h".into());
        let b = source_files.intern("b.h".into());

        assert_ne!(a, b);
        assert_eq!(source_files.intern("a.h".into()), a);
        assert_eq!(source_files.get(b).filename(), "b.h");
        assert_eq!(source_files.len(), 3);
    }

    #[test]
    fn internal_file_always_exists() {
        let source_files = SourceFiles::new();
        let internal = Source::internal();

        assert!(internal.is_internal());
        assert_eq!(source_files.get(internal.key).filename(), "<internal>");
    }
}
