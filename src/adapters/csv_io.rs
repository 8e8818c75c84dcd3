use crate::config::toml_config::LineEnding;
use crate::domain::model::{OutputRecord, SourceRecord, OUTPUT_HEADERS};
use crate::domain::ports::{RecordSink, RowSource};
use crate::utils::error::{ConvertError, Result};
use csv::{QuoteStyle, ReaderBuilder, StringRecordsIntoIter, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

/// Lazily yields rows keyed by header name.
///
/// Cells beyond the header row are ignored; missing trailing cells simply
/// leave their columns absent.
pub struct CsvRows<R: Read> {
    headers: Vec<String>,
    records: StringRecordsIntoIter<R>,
}

impl<R: Read> CsvRows<R> {
    pub fn new(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        Ok(Self {
            headers,
            records: reader.into_records(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for CsvRows<R> {
    type Item = Result<SourceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        Some(Ok(self
            .headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value))
            .collect()))
    }
}

/// Contact export on disk; every pass reopens the file.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for CsvFileSource {
    type Rows = CsvRows<File>;

    fn rows(&self) -> Result<Self::Rows> {
        CsvRows::new(reader_builder().from_path(&self.path)?)
    }
}

/// Contact export held in memory.
#[derive(Debug, Clone)]
pub struct CsvBufferSource {
    data: Vec<u8>,
}

impl CsvBufferSource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }
}

impl RowSource for CsvBufferSource {
    type Rows = CsvRows<Cursor<Vec<u8>>>;

    fn rows(&self) -> Result<Self::Rows> {
        CsvRows::new(reader_builder().from_reader(Cursor::new(self.data.clone())))
    }
}

/// Fully quoted output in the fax tool's import layout.
///
/// The header row is written on creation, so an empty run still yields a
/// valid file.
pub struct CsvRecordSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvRecordSink<File> {
    pub fn create<P: AsRef<Path>>(path: P, line_ending: LineEnding) -> Result<Self> {
        Self::from_writer(File::create(path)?, line_ending)
    }
}

impl<W: Write> CsvRecordSink<W> {
    pub fn from_writer(inner: W, line_ending: LineEnding) -> Result<Self> {
        let terminator = match line_ending {
            LineEnding::Crlf => Terminator::CRLF,
            LineEnding::Lf => Terminator::Any(b'\n'),
        };

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .terminator(terminator)
            .from_writer(inner);
        writer.write_record(OUTPUT_HEADERS)?;

        Ok(Self { writer })
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ConvertError::IoError(e.into_error()))
    }
}

impl<W: Write> RecordSink for CsvRecordSink<W> {
    fn write_record(&mut self, record: &OutputRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
