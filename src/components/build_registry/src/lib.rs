mod error;
mod event;
mod scope;
mod units;

use data_units::ByteUnits;
pub use error::{IngestError, IngestErrorKind};
pub use event::LayoutEvent;
use record_layout::{FieldIndex, LayoutRegistry, RecordId};
pub use scope::ScopeFilter;
use source_files::{Location, Source, SourceFiles};
use std::io::BufRead;
pub use units::WidthUnits;

/// Largest width or alignment accepted from an event stream
const MAX_BYTES: ByteUnits = ByteUnits::of(u32::MAX as u64);

#[derive(Clone, Debug, Default)]
pub struct IngestOptions {
    pub scope: ScopeFilter,
    pub units: WidthUnits,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct IngestStats {
    pub field_events: usize,
    pub record_events: usize,
    pub out_of_scope: usize,
}

/// Feeds an event stream into `registry`, one JSON object per line
pub fn ingest(
    reader: impl BufRead,
    options: &IngestOptions,
    registry: &mut LayoutRegistry,
    source_files: &mut SourceFiles,
) -> Result<IngestStats, IngestError> {
    let mut stats = IngestStats::default();

    for (i, line) in reader.lines().enumerate() {
        let line_number = i + 1;
        let line = line.map_err(|error| IngestErrorKind::from(error).at_line(line_number))?;

        let Some(event) = LayoutEvent::parse_line(&line) else {
            continue;
        };

        let event = event.map_err(|error| IngestErrorKind::from(error).at_line(line_number))?;

        if !options.scope.admits(event.record()) {
            stats.out_of_scope += 1;
            continue;
        }

        apply(event, options.units, registry, source_files, &mut stats)
            .map_err(|kind| kind.at_line(line_number))?;
    }

    tracing::info!(
        fields = stats.field_events,
        records = stats.record_events,
        out_of_scope = stats.out_of_scope,
        "ingested layout events"
    );

    Ok(stats)
}

fn apply(
    event: LayoutEvent,
    units: WidthUnits,
    registry: &mut LayoutRegistry,
    source_files: &mut SourceFiles,
    stats: &mut IngestStats,
) -> Result<(), IngestErrorKind> {
    match event {
        LayoutEvent::Field {
            record,
            index,
            name,
            width,
            alignment,
        } => {
            let width = to_bytes(units, width, &record)?;
            let alignment = to_alignment(units, alignment, &record)?;

            if !width.is_aligned_to(alignment) {
                return Err(IngestErrorKind::WidthNotMultipleOfAlignment {
                    record,
                    field: name,
                    width: width.bytes(),
                    alignment: alignment.bytes(),
                });
            }

            registry.record_field(RecordId::new(record), FieldIndex(index), name, width, alignment);
            stats.field_events += 1;
        }
        LayoutEvent::Record {
            record,
            width,
            alignment,
            file,
            line,
            column,
        } => {
            let width = to_bytes(units, width, &record)?;
            let alignment = to_alignment(units, alignment, &record)?;

            let origin = match file {
                Some(file) => {
                    let key = source_files.intern(file.into());
                    Source::new(key, Location::new(line, column))
                }
                None => Source::internal(),
            };

            registry.record_meta(RecordId::new(record), width, alignment, origin);
            stats.record_events += 1;
        }
    }

    Ok(())
}

fn to_bytes(units: WidthUnits, value: u64, record: &str) -> Result<ByteUnits, IngestErrorKind> {
    let width = units
        .to_bytes(value)
        .ok_or_else(|| IngestErrorKind::FractionalByteWidth {
            record: record.into(),
            width: value,
        })?;

    if width > MAX_BYTES {
        return Err(IngestErrorKind::WidthTooLarge {
            record: record.into(),
            width: width.bytes(),
        });
    }

    Ok(width)
}

fn to_alignment(units: WidthUnits, value: u64, record: &str) -> Result<ByteUnits, IngestErrorKind> {
    if value == 0 {
        return Err(IngestErrorKind::ZeroAlignment {
            record: record.into(),
        });
    }

    let alignment = units
        .to_bytes(value)
        .ok_or_else(|| IngestErrorKind::FractionalByteAlignment {
            record: record.into(),
            alignment: value,
        })?;

    if alignment > MAX_BYTES {
        return Err(IngestErrorKind::AlignmentTooLarge {
            record: record.into(),
            alignment: alignment.bytes(),
        });
    }

    if !alignment.is_power_of_2() {
        return Err(IngestErrorKind::AlignmentNotPowerOfTwo {
            record: record.into(),
            alignment: alignment.bytes(),
        });
    }

    Ok(alignment)
}
