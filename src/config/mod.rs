pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::config::toml_config::ConverterSettings;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
    use clap::Parser;
    use std::path::Path;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "fax-contacts")]
    #[command(about = "Convert a contact export CSV into a fax-only broadcast list")]
    pub struct CliConfig {
        /// Contact export to read
        #[arg(short, long, default_value = "sample.csv")]
        pub input: String,

        /// Fax broadcast CSV to write
        #[arg(short, long, default_value = "converted_contacts_fax_only.csv")]
        pub output: String,

        /// Optional TOML settings file (column names, phone slots, fax label policy)
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log CPU and memory usage")]
        pub monitor: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,
    }

    impl CliConfig {
        /// Settings from `--config`, or the defaults when none is given.
        pub fn load_settings(&self) -> Result<ConverterSettings> {
            let settings = match &self.config {
                Some(path) => ConverterSettings::from_file(path)?,
                None => ConverterSettings::default(),
            };
            settings.validate()?;
            Ok(settings)
        }
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn output_path(&self) -> &str {
            &self.output
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input", &self.input)?;
            validate_path("output", &self.output)?;

            validate_distinct_paths("output", Path::new(&self.input), Path::new(&self.output))
        }
    }

}
