pub mod assemble;
pub mod engine;
pub mod normalize;
pub mod phone;
pub mod transformer;

pub use crate::domain::model::{OutputRecord, RowOutcome, SourceRecord};
pub use crate::domain::ports::{PhoneClassifier, RecordSink, RowSource};
pub use crate::utils::error::Result;
