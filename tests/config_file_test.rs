use anyhow::Result;
use exchange_skill::utils::validation::Validate;
use exchange_skill::{ConfigProvider, HttpRateFetcher, SkillDispatcher, SkillError, TomlConfig};
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// 從 TOML 檔案設定 endpoint 與 application id，並跑完整流程
#[tokio::test]
async fn test_toml_config_drives_dispatcher() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/latest").query_param("base", "TRY");
        then.status(200)
            .json_body(json!({ "rates": { "EUR": 0.2, "USD": 0.25 } }));
    });

    let config_content = format!(
        r#"
[rates]
endpoint = "{}"
timeout_seconds = 2

[skill]
application_id = "amzn1.ask.skill.exchange-calculator"
require_application_id = true
"#,
        server.url("/latest?base=TRY")
    );
    let config_path = temp_dir.path().join("skill.toml");
    tokio::fs::write(&config_path, config_content).await?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let fetcher = HttpRateFetcher::from_config(&config)?;
    assert_eq!(fetcher.endpoint(), server.url("/latest?base=TRY"));
    let dispatcher = SkillDispatcher::new(fetcher)
        .with_application_id(config.application_id().map(str::to_string));

    let event = json!({
        "session": {
            "new": true,
            "sessionId": "amzn1.echo-api.session.cfg",
            "application": { "applicationId": "amzn1.ask.skill.exchange-calculator" }
        },
        "request": {
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.cfg",
            "intent": {
                "name": "calculateExchange",
                "slots": {
                    "Amount": { "name": "Amount", "value": "20" },
                    "Currency": { "name": "Currency", "value": "euros" }
                }
            }
        }
    });

    let envelope = dispatcher.handle_json(event).await?.expect("response payload");
    api_mock.assert();
    assert_eq!(
        envelope.response.output_speech.text.as_deref(),
        Some("You asked 20 euros. It equals to 100 Turkish Liras.")
    );

    Ok(())
}

#[tokio::test]
async fn test_foreign_application_is_rejected() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[skill]
application_id = "amzn1.ask.skill.exchange-calculator"
"#,
    )?;
    let dispatcher = SkillDispatcher::new(HttpRateFetcher::from_config(&config)?)
        .with_application_id(config.application_id().map(str::to_string));

    let event = json!({
        "session": {
            "new": true,
            "sessionId": "amzn1.echo-api.session.other",
            "application": { "applicationId": "amzn1.ask.skill.someone-else" }
        },
        "request": { "type": "LaunchRequest", "requestId": "amzn1.echo-api.request.other" }
    });

    let err = dispatcher.handle_json(event).await.unwrap_err();
    assert!(matches!(err, SkillError::InvalidApplicationId { .. }));

    Ok(())
}

#[test]
fn test_bundled_skill_toml_is_valid() -> Result<()> {
    let path = format!("{}/skill.toml", env!("CARGO_MANIFEST_DIR"));
    let config = TomlConfig::from_file(path)?;
    config.validate()?;
    assert!(config.application_id().is_none());
    Ok(())
}
