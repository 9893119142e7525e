use anyhow::Context;
use clap::Parser;
use exchange_skill::config::cli::read_event;
use exchange_skill::utils::error::ErrorSeverity;
use exchange_skill::utils::{logger, validation::Validate};
use exchange_skill::{
    CliConfig, ConfigProvider, HttpRateFetcher, SkillDispatcher, SkillError, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting exchange-skill CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let file_config = match &config.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file {}", path))?,
        ),
        None => None,
    };

    let provider: &dyn ConfigProvider = match &file_config {
        Some(toml) => toml,
        None => &config,
    };

    // 驗證配置
    let validation = match &file_config {
        Some(toml) => toml.validate(),
        None => config.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let event = read_event(&config.event)
        .await
        .with_context(|| format!("failed to read request envelope from {}", config.event))?;

    let fetcher = HttpRateFetcher::from_config(provider)?;
    let dispatcher = SkillDispatcher::new(fetcher)
        .with_application_id(provider.application_id().map(str::to_string));

    match dispatcher.handle_json(event).await {
        Ok(response) => {
            tracing::info!("✅ Request handled");
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Err(e) => {
            report_failure(&e);

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 4,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn report_failure(e: &SkillError) {
    tracing::error!(
        "❌ Invocation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
}
