use crate::domain::model::{OutputRecord, PhoneKind, SourceRecord};
use crate::utils::error::Result;

/// Decides whether a phone label denotes a fax line.
pub trait PhoneClassifier: Send + Sync {
    fn classify_label(&self, label: &str) -> PhoneKind;
}

/// A finite, restartable sequence of source rows.
pub trait RowSource {
    type Rows: Iterator<Item = Result<SourceRecord>>;

    /// Starts a fresh pass from the first data row.
    fn rows(&self) -> Result<Self::Rows>;
}

pub trait RecordSink {
    fn write_record(&mut self, record: &OutputRecord) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}
