#[cfg(feature = "lambda")]
use exchange_skill::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use exchange_skill::{
    ConfigProvider, HttpRateFetcher, LambdaConfig, ResponseEnvelope, SkillDispatcher,
};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(
    dispatcher: &SkillDispatcher<HttpRateFetcher>,
    event: LambdaEvent<serde_json::Value>,
) -> Result<Option<ResponseEnvelope>, Error> {
    let (envelope, context) = event.into_parts();
    tracing::info!(aws_request_id = %context.request_id, "Skill invocation received");

    // SessionEndedRequest 回傳 null
    let response = dispatcher.handle_json(envelope).await.map_err(|e| {
        tracing::error!(
            category = ?e.category(),
            "Invocation failed: {}",
            e.user_friendly_message()
        );
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    // 跨呼叫共用同一個 HTTP client
    let fetcher = HttpRateFetcher::from_config(&config)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let dispatcher = SkillDispatcher::new(fetcher)
        .with_application_id(config.application_id().map(str::to_string));
    let dispatcher = &dispatcher;

    run(service_fn(move |event: LambdaEvent<serde_json::Value>| async move {
        function_handler(dispatcher, event).await
    }))
    .await
}
