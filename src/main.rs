use clap::Parser;
use fax_contacts::core::engine::convert_file_with_monitoring;
use fax_contacts::domain::ports::ConfigProvider;
use fax_contacts::utils::{logger, validation::Validate};
use fax_contacts::{CliConfig, ConvertError};
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting fax-contacts");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };
    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let input = Path::new(config.input_path());
    let output = Path::new(config.output_path());

    match convert_file_with_monitoring(input, output, &settings, config.monitor) {
        Ok(summary) => {
            tracing::info!("✅ Conversion completed successfully!");
            println!(
                "Fax-only conversion complete! {} contacts with fax numbers converted.",
                summary.converted
            );
            println!("Output saved to: {}", output.display());
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &ConvertError) -> ! {
    tracing::error!("❌ Conversion failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(1);
}
