use clap::Parser;
use examples_md::core::ConfigProvider;
use examples_md::utils::{logger, validation::Validate};
use examples_md::{CliConfig, ListingEngine, ListingPipeline, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::debug!("Starting examples-md");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config_path = cli.config.clone();
    let result = match config_path {
        Some(path) => match TomlConfig::load(&path).and_then(|c| {
            c.validate()?;
            Ok(c)
        }) {
            Ok(config) => {
                config.log_summary();
                let monitor = cli.monitor || config.monitoring_enabled();
                run_listing(config, monitor).await
            }
            Err(e) => Err(e),
        },
        None => match cli.validate() {
            Ok(()) => {
                let monitor = cli.monitor;
                run_listing(cli, monitor).await
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(destination) => {
            tracing::info!("✅ Listing written to: {}", destination);
        }
        Err(e) => {
            tracing::error!("❌ Listing failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 配置錯誤與執行錯誤使用不同退出碼
            let exit_code = if e.is_config_error() { 2 } else { 1 };
            std::process::exit(exit_code);
        }
    }
}

async fn run_listing<C: ConfigProvider>(config: C, monitor: bool) -> examples_md::Result<String> {
    let storage = LocalStorage::new(".".to_string());
    let pipeline = ListingPipeline::new(storage, config);
    let engine = ListingEngine::new_with_monitoring(pipeline, monitor);
    engine.run().await
}
