use serde::Deserialize;

/// One observation made by whatever walks the declarations
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LayoutEvent {
    Field {
        record: String,
        index: u32,
        name: String,
        width: u64,
        alignment: u64,
    },
    Record {
        record: String,
        width: u64,
        alignment: u64,
        file: Option<String>,
        #[serde(default = "first")]
        line: u32,
        #[serde(default = "first")]
        column: u32,
    },
}

impl LayoutEvent {
    pub fn record(&self) -> &str {
        match self {
            LayoutEvent::Field { record, .. } | LayoutEvent::Record { record, .. } => record,
        }
    }

    /// Parses one line of an event stream, `None` for blank lines and comments
    pub fn parse_line(line: &str) -> Option<serde_json::Result<Self>> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        Some(serde_json::from_str(line))
    }
}

fn first() -> u32 {
    1
}
