use super::{CheckCommand, options::CheckOptions};
use crate::OutputFormat;
use build_registry::{ScopeFilter, WidthUnits};
use diagnostics::Severity;
use std::path::PathBuf;

impl CheckCommand {
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ()> {
        let mut filename = None;
        let mut options = CheckOptions::default();

        while let Some(option) = args.next() {
            match option.as_str() {
                "--scope" => {
                    let Some(prefix) = args.next() else {
                        eprintln!("error: Expected namespace prefix after '--scope'");
                        return Err(());
                    };

                    options.ingest.scope.add_prefix(prefix);
                }
                "--o2" => {
                    for prefix in ScopeFilter::alice_o2().prefixes() {
                        options.ingest.scope.add_prefix(prefix.as_str());
                    }
                }
                "--bits" => options.ingest.units = WidthUnits::Bits,
                "--bytes" => options.ingest.units = WidthUnits::Bytes,
                "--print-layout" => options.print_layout = true,
                "--all" => options.print_all = true,
                "--json" => options.output = OutputFormat::Json,
                "--warn" => options.poor_layout_severity = Severity::Warning,
                "--warn-size-mismatch" => options.diagnostic_flags.warn_size_mismatch = true,
                "--warn-alignment" => {
                    options.diagnostic_flags.warn_alignment_simplification = true
                }
                "--project-root" => {
                    let Some(project_root) = args.next() else {
                        eprintln!("error: Expected directory after '--project-root'");
                        return Err(());
                    };

                    options.project_root = Some(PathBuf::from(project_root));
                }
                _ if option.starts_with("--") => {
                    eprintln!("error: Unknown option '{}'", option);
                    return Err(());
                }
                _ => {
                    if filename.replace(option).is_some() {
                        eprintln!("error: Multiple input files specified");
                        return Err(());
                    }
                }
            }
        }

        let Some(filename) = filename else {
            eprintln!("error: No layout event file specified");
            return Err(());
        };

        Ok(Self { filename, options })
    }
}
