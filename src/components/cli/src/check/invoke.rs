use super::{CheckCommand, report};
use crate::{CheckOptions, Invoke};
use analyze_layout::finalize_and_analyze;
use build_registry::ingest;
use diagnostics::{Diagnostics, ErrorDiagnostic, Show};
use record_layout::LayoutRegistry;
use source_files::SourceFiles;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

impl Invoke for CheckCommand {
    fn invoke(self) -> Result<(), ()> {
        let CheckCommand { filename, options } = self;
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let clean = if filename == "-" {
            run_check(io::stdin().lock(), &options, &mut out)?
        } else {
            let file = File::open(&filename).map_err(|error| {
                eprintln!("error: Failed to open '{}': {}", filename, error);
            })?;

            run_check(BufReader::new(file), &options, &mut out)?
        };

        clean.then_some(()).ok_or(())
    }
}

/// Ingests, analyzes, and reports one event stream.
///
/// Returns whether no error diagnostics were produced.
pub fn run_check(
    reader: impl BufRead,
    options: &CheckOptions,
    out: &mut dyn io::Write,
) -> Result<bool, ()> {
    let mut source_files = SourceFiles::new();
    let mut registry = LayoutRegistry::new();

    if let Err(error) = ingest(reader, &options.ingest, &mut registry, &mut source_files) {
        ErrorDiagnostic::plain(error).eprintln(&source_files, None);
        return Err(());
    }

    tracing::debug!(records = registry.num_records(), "ingested layout events");
    let analysis = finalize_and_analyze(registry);

    let mut diagnostics = Diagnostics::new(&source_files, options.diagnostic_flags.clone());
    if let Some(project_root) = &options.project_root {
        diagnostics = diagnostics.with_project_root(project_root);
    }

    report::emit(&analysis, &diagnostics, options, out).map_err(|error| {
        eprintln!("error: Failed to write report: {}", error);
    })?;

    diagnostics.print_all();
    Ok(!diagnostics.has_errors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputFormat;
    use diagnostics::DiagnosticFlags;
    use indoc::indoc;

    const EVENTS: &str = indoc! {r#"
        {"event":"record","record":"AliceO2::A","width":128,"alignment":64,"file":"test1.cpp","line":4,"column":3}
        {"event":"field","record":"AliceO2::A","index":0,"name":"mGood","width":64,"alignment":64}
        {"event":"field","record":"AliceO2::A","index":1,"name":"fBad","width":64,"alignment":64}
        {"event":"record","record":"AliceO2::C","width":128,"alignment":64,"file":"header.h","line":9,"column":1}
        {"event":"field","record":"AliceO2::C","index":0,"name":"mFlag","width":8,"alignment":8}
        {"event":"field","record":"AliceO2::C","index":1,"name":"mValue","width":64,"alignment":64}
        {"event":"field","record":"std::pair","index":0,"name":"first","width":8,"alignment":8}
        {"event":"field","record":"std::pair","index":1,"name":"second","width":64,"alignment":64}
    "#};

    fn options() -> CheckOptions {
        let mut options = CheckCommand::parse(["--o2", "--bits", "-"].into_iter().map(String::from))
            .unwrap()
            .options;

        options.diagnostic_flags = DiagnosticFlags {
            print_without_collecting: false,
            ..Default::default()
        };
        options
    }

    #[test]
    fn poorly_ordered_record_fails_the_check() {
        let mut out = Vec::new();
        let clean = run_check(EVENTS.as_bytes(), &options(), &mut out).unwrap();

        assert!(!clean);
    }

    #[test]
    fn warnings_do_not_fail_the_check() {
        let mut options = options();
        options.poor_layout_severity = diagnostics::Severity::Warning;

        let clean = run_check(EVENTS.as_bytes(), &options, &mut io::sink()).unwrap();
        assert!(clean);
    }

    #[test]
    fn json_reports() {
        let mut options = options();
        options.output = OutputFormat::Json;
        options.print_all = true;

        let mut out = Vec::new();
        run_check(EVENTS.as_bytes(), &options, &mut out).unwrap();

        let reports: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        // std::pair is out of scope
        assert_eq!(reports.len(), 2);

        assert_eq!(reports[0]["record"], "AliceO2::A");
        assert_eq!(reports[0]["well_ordered"], true);
        assert_eq!(reports[0]["file"], "test1.cpp");

        let c = &reports[1];
        assert_eq!(c["record"], "AliceO2::C");
        assert_eq!(c["well_ordered"], false);
        assert_eq!(c["optimal_size"], 9);
        assert_eq!(c["actual_size"], 16);
        assert_eq!(c["achievable_size"], 16);
        assert_eq!(c["reported_width"], 16);
        assert_eq!(c["line"], 9);
        assert_eq!(c["fields"][1]["name"], "mValue");
        assert_eq!(c["suggested_order"], serde_json::json!(["mValue", "mFlag"]));
    }

    #[test]
    fn malformed_input_is_an_error() {
        let input = r#"{"event":"field","record":"o2::A"}"#;
        assert!(run_check(input.as_bytes(), &options(), &mut io::sink()).is_err());
    }

    #[test]
    fn oversized_width_is_an_error() {
        let input = indoc! {r#"
            {"event":"record","record":"o2::Huge","width":16,"alignment":8}
            {"event":"field","record":"o2::Huge","index":0,"name":"a","width":18446744073709551615,"alignment":1}
            {"event":"field","record":"o2::Huge","index":1,"name":"b","width":8,"alignment":8}
        "#};

        let options = CheckOptions::default();
        assert!(run_check(input.as_bytes(), &options, &mut io::sink()).is_err());
    }
}
