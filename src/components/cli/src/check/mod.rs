mod invoke;
mod json;
mod options;
mod parse;
mod report;

pub use invoke::run_check;
pub use options::{CheckOptions, OutputFormat};

#[derive(Clone, Debug)]
pub struct CheckCommand {
    pub filename: String,
    pub options: CheckOptions,
}
