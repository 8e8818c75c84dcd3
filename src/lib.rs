pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::csv_io::{CsvBufferSource, CsvFileSource, CsvRecordSink};
pub use crate::config::toml_config::ConverterSettings;
pub use crate::core::engine::{convert_file, ConversionEngine, ConversionSummary};
pub use crate::core::transformer::ContactTransformer;
pub use crate::utils::error::{ConvertError, Result};
