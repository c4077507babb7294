use anyhow::Context;
use clap::Parser;
use euphrosyne::core::ConfigProvider;
use euphrosyne::domain::model::ObjectGroup;
use euphrosyne::utils::{logger, validation::Validate};
use euphrosyne::{CliConfig, ErosClient, ImportEngine, LabError, TomlConfig};

async fn import<C: ConfigProvider>(config: &C, c2rmf_id: &str) -> euphrosyne::Result<ObjectGroup> {
    let client = ErosClient::new(config)?;
    let engine = ImportEngine::new(client);
    engine.run(c2rmf_id).await
}

fn fail(e: &LabError) -> ! {
    tracing::error!("❌ Object group import failed: {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 有 --config 時以 TOML 檔為準
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(e.exit_code());
            }
        },
        None => None,
    };

    let (verbose, json_logs) = match &file_config {
        Some(config) => (cli.verbose || config.verbose(), cli.json_logs || config.json_logs()),
        None => (cli.verbose, cli.json_logs),
    };
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting euphrosyne-import");

    let validated = match &file_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validated {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let result = match &file_config {
        Some(config) => import(config, &cli.c2rmf_id).await,
        None => import(&cli, &cli.c2rmf_id).await,
    };

    match result {
        Ok(object_group) => {
            let output = serde_json::to_string_pretty(&object_group)
                .context("failed to serialize imported object group")?;
            println!("{}", output);
            tracing::info!("✅ Object group import completed successfully!");
            Ok(())
        }
        Err(e) => fail(&e),
    }
}
