use std::fmt::Display;

/// One-based position within a source file
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[test]
fn locations_order_by_line_then_column() {
    assert!(Location::new(1, 9) < Location::new(2, 1));
    assert!(Location::new(3, 2) < Location::new(3, 5));
    assert_eq!(Location::default().to_string(), "1:1");
}
