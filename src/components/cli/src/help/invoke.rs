use super::HelpCommand;
use crate::Invoke;
use indoc::indoc;

impl Invoke for HelpCommand {
    fn invoke(self) -> Result<(), ()> {
        println!(
            "{}",
            indoc! {"
                usage: layoutcheck [check] [OPTIONS] FILENAME

                Reads layout events (one JSON object per line, '-' for stdin) and reports
                records whose fields are not ordered from largest to smallest alignment.

                options:
                  --scope PREFIX         Only check records whose name starts with PREFIX (repeatable)
                  --o2                   Only check records in the AliceO2:: and o2:: namespaces
                  --bits                 Widths and alignments are given in bits
                  --bytes                Widths and alignments are given in bytes (default)
                  --print-layout         Print the field table of every reported record
                  --all                  Also report records that are well ordered
                  --json                 Print one JSON report per record instead of tables
                  --warn                 Report poorly ordered records as warnings
                  --warn-size-mismatch   Warn when the calculated size differs from the reported one
                  --warn-alignment       Warn when a record is not aligned to its first field
                  --project-root DIR     Show filenames relative to DIR
            "}
        );
        Err(())
    }
}
