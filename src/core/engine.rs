use crate::adapters::csv_io::{CsvFileSource, CsvRecordSink};
use crate::config::toml_config::ConverterSettings;
use crate::core::transformer::ContactTransformer;
use crate::domain::model::{IdCounter, RowOutcome, SkipReason, SourceRecord};
use crate::domain::ports::{RecordSink, RowSource};
use crate::utils::error::{ConvertError, Result};
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::validate_distinct_paths;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub rows_read: u64,
    pub converted: u64,
    pub skipped_missing_name: u64,
    pub skipped_no_fax: u64,
}

impl ConversionSummary {
    pub fn skipped(&self) -> u64 {
        self.skipped_missing_name + self.skipped_no_fax
    }
}

pub struct ConversionEngine {
    transformer: ContactTransformer,
    monitor_enabled: bool,
}

impl ConversionEngine {
    pub fn new(transformer: ContactTransformer) -> Self {
        Self::new_with_monitoring(transformer, false)
    }

    pub fn new_with_monitoring(transformer: ContactTransformer, monitor_enabled: bool) -> Self {
        Self {
            transformer,
            monitor_enabled,
        }
    }

    pub fn run<S: RowSource, K: RecordSink>(
        &self,
        source: &S,
        sink: &mut K,
    ) -> Result<ConversionSummary> {
        self.process(source.rows()?, sink)
    }

    /// Streams `rows` through the transformer into `sink`, one row at a time.
    ///
    /// The first read or write error aborts the run.
    pub fn process<I, K>(&self, rows: I, sink: &mut K) -> Result<ConversionSummary>
    where
        I: Iterator<Item = Result<SourceRecord>>,
        K: RecordSink,
    {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        monitor.log_stats("Start");

        let mut ids = IdCounter::new();
        let mut summary = ConversionSummary::default();

        for (index, row) in rows.enumerate() {
            let row = row?;
            summary.rows_read += 1;

            match self.transformer.transform(&row, &mut ids) {
                RowOutcome::Emitted(record) => {
                    tracing::trace!(row = index + 1, id = record.id, "Converted contact");
                    sink.write_record(&record)?;
                }
                RowOutcome::Skipped(reason) => {
                    tracing::debug!(row = index + 1, %reason, "Skipping contact");
                    match reason {
                        SkipReason::MissingName => summary.skipped_missing_name += 1,
                        SkipReason::NoFaxNumber => summary.skipped_no_fax += 1,
                    }
                }
            }
        }

        sink.finish()?;
        summary.converted = ids.emitted();

        monitor.log_stats("Write");
        monitor.log_final_stats();

        tracing::info!(
            rows_read = summary.rows_read,
            converted = summary.converted,
            skipped_missing_name = summary.skipped_missing_name,
            skipped_no_fax = summary.skipped_no_fax,
            "Conversion finished"
        );

        Ok(summary)
    }
}

/// Converts the contact export at `input` into a fax-only list at `output`.
///
/// A missing input, invalid settings or an output that resolves to the
/// input file are all reported before the output file is created.
pub fn convert_file(
    input: &Path,
    output: &Path,
    settings: &ConverterSettings,
) -> Result<ConversionSummary> {
    convert_file_with_monitoring(input, output, settings, false)
}

pub fn convert_file_with_monitoring(
    input: &Path,
    output: &Path,
    settings: &ConverterSettings,
    monitor_enabled: bool,
) -> Result<ConversionSummary> {
    if !input.is_file() {
        return Err(ConvertError::InputNotFound {
            path: input.display().to_string(),
        });
    }

    validate_distinct_paths("output", input, output)?;

    let engine = ConversionEngine::new_with_monitoring(
        ContactTransformer::from_settings(settings)?,
        monitor_enabled,
    );

    let source = CsvFileSource::new(input);
    tracing::info!("📁 Reading contacts from: {}", source.path().display());
    let rows = source.rows()?;
    let mut sink = CsvRecordSink::create(output, settings.output.line_ending)?;
    engine.process(rows, &mut sink)
}
