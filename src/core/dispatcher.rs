use crate::core::{intents, response};
use crate::domain::model::{
    RequestEnvelope, ResponseEnvelope, Session, SessionAttributes, SkillRequest,
};
use crate::domain::ports::RateSource;
use crate::utils::error::{Result, SkillError};

/// Routes one inbound envelope to its handler. Holds no per-invocation state.
pub struct SkillDispatcher<R: RateSource> {
    rates: R,
    application_id: Option<String>,
}

impl<R: RateSource> SkillDispatcher<R> {
    pub fn new(rates: R) -> Self {
        Self {
            rates,
            application_id: None,
        }
    }

    /// Reject envelopes addressed to any other skill.
    pub fn with_application_id(mut self, application_id: Option<String>) -> Self {
        self.application_id = application_id;
        self
    }

    pub async fn handle_json(&self, event: serde_json::Value) -> Result<Option<ResponseEnvelope>> {
        let request_type = event
            .pointer("/request/type")
            .and_then(|t| t.as_str())
            .unwrap_or("missing")
            .to_string();

        let envelope: RequestEnvelope = serde_json::from_value(event)?;
        if matches!(envelope.request, SkillRequest::Unsupported) {
            return Err(SkillError::UnsupportedRequest { request_type });
        }
        self.handle(envelope).await
    }

    /// `Ok(None)` means the invocation succeeded without a response payload.
    pub async fn handle(&self, envelope: RequestEnvelope) -> Result<Option<ResponseEnvelope>> {
        let session = &envelope.session;
        tracing::info!(
            application_id = %session.application.application_id,
            "Handling {}",
            envelope.request.type_name()
        );

        self.verify_application(session)?;

        if session.new {
            on_session_started(&envelope.request, session);
        }

        match &envelope.request {
            SkillRequest::LaunchRequest { request_id, .. } => {
                tracing::info!(
                    request_id = %request_id,
                    session_id = %session.session_id,
                    "onLaunch"
                );
                Ok(Some(response::build_response(
                    SessionAttributes::new(),
                    response::welcome_response(),
                )))
            }
            SkillRequest::IntentRequest {
                request_id, intent, ..
            } => {
                tracing::info!(
                    request_id = %request_id,
                    session_id = %session.session_id,
                    intent = %intent.name,
                    "onIntent"
                );
                let speechlet = intents::handle_intent(intent, &self.rates).await?;
                Ok(Some(response::build_response(
                    SessionAttributes::new(),
                    speechlet,
                )))
            }
            SkillRequest::SessionEndedRequest {
                request_id, reason, ..
            } => {
                tracing::info!(
                    request_id = %request_id,
                    session_id = %session.session_id,
                    reason = reason.as_deref().unwrap_or("unknown"),
                    "onSessionEnded"
                );
                Ok(None)
            }
            SkillRequest::Unsupported => Err(SkillError::UnsupportedRequest {
                request_type: "unknown".to_string(),
            }),
        }
    }

    fn verify_application(&self, session: &Session) -> Result<()> {
        match &self.application_id {
            Some(expected) if *expected != session.application.application_id => {
                tracing::warn!(
                    "Rejecting request for application {}",
                    session.application.application_id
                );
                Err(SkillError::InvalidApplicationId {
                    application_id: session.application.application_id.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

fn on_session_started(request: &SkillRequest, session: &Session) {
    tracing::info!(
        request_id = request.request_id().unwrap_or("-"),
        session_id = %session.session_id,
        "onSessionStarted"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RateSnapshot;
    use async_trait::async_trait;
    use serde_json::json;

    struct FixedRates;

    #[async_trait]
    impl RateSource for FixedRates {
        async fn fetch_rates(&self) -> Result<RateSnapshot> {
            RateSnapshot::new(3.5, 4.1)
        }
    }

    struct BrokenRates;

    #[async_trait]
    impl RateSource for BrokenRates {
        async fn fetch_rates(&self) -> Result<RateSnapshot> {
            Err(SkillError::RateStatusError { status: 502 })
        }
    }

    fn envelope(request: serde_json::Value) -> serde_json::Value {
        json!({
            "version": "1.0",
            "session": {
                "new": true,
                "sessionId": "amzn1.echo-api.session.test",
                "application": { "applicationId": "amzn1.ask.skill.exchange" },
                "attributes": {}
            },
            "request": request
        })
    }

    #[tokio::test]
    async fn test_launch_returns_welcome() {
        let dispatcher = SkillDispatcher::new(FixedRates);
        let event = envelope(json!({ "type": "LaunchRequest", "requestId": "req-1" }));

        let envelope = dispatcher.handle_json(event).await.unwrap().unwrap();

        assert_eq!(envelope.version, "1.0");
        assert_eq!(envelope.response, response::welcome_response());
        assert!(envelope.session_attributes.is_empty());
    }

    #[tokio::test]
    async fn test_intent_is_wrapped() {
        let dispatcher = SkillDispatcher::new(FixedRates);
        let event = envelope(json!({
            "type": "IntentRequest",
            "requestId": "req-2",
            "intent": {
                "name": "calculateExchange",
                "slots": {
                    "Amount": { "name": "Amount", "value": "1000" },
                    "Currency": { "name": "Currency", "value": "dollars" }
                }
            }
        }));

        let envelope = dispatcher.handle_json(event).await.unwrap().unwrap();

        assert_eq!(
            envelope.response.output_speech.text.as_deref(),
            Some("You asked 1000 dollars. It equals to 286 Turkish Liras.")
        );
    }

    #[tokio::test]
    async fn test_oversized_amount_fails_invocation() {
        let dispatcher = SkillDispatcher::new(FixedRates);
        let event = envelope(json!({
            "type": "IntentRequest",
            "requestId": "req-8",
            "intent": {
                "name": "calculateExchange",
                "slots": {
                    "Amount": { "name": "Amount", "value": "1e30" },
                    "Currency": { "name": "Currency", "value": "dollars" }
                }
            }
        }));

        let err = dispatcher.handle_json(event).await.unwrap_err();
        assert!(matches!(err, SkillError::InvalidAmount { .. }));
    }

    #[tokio::test]
    async fn test_timestamp_shape_does_not_matter() {
        let dispatcher = SkillDispatcher::new(FixedRates);

        for timestamp in [
            json!(1511514761000u64),
            json!("2017-11-24T09:12:41"),
            json!("2017-11-24T09:12:41Z"),
        ] {
            let launch = envelope(json!({
                "type": "LaunchRequest",
                "requestId": "req-9",
                "timestamp": timestamp
            }));
            assert!(dispatcher.handle_json(launch).await.unwrap().is_some());

            let intent = envelope(json!({
                "type": "IntentRequest",
                "requestId": "req-10",
                "timestamp": timestamp,
                "intent": { "name": "AMAZON.StopIntent" }
            }));
            assert!(dispatcher.handle_json(intent).await.unwrap().is_some());

            let ended = envelope(json!({
                "type": "SessionEndedRequest",
                "requestId": "req-11",
                "timestamp": timestamp
            }));
            assert!(dispatcher.handle_json(ended).await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn test_session_ended_has_no_payload() {
        let dispatcher = SkillDispatcher::new(FixedRates);
        let event = envelope(json!({
            "type": "SessionEndedRequest",
            "requestId": "req-3",
            "reason": "USER_INITIATED"
        }));

        assert!(dispatcher.handle_json(event).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unsupported_request_type_fails() {
        let dispatcher = SkillDispatcher::new(FixedRates);
        let event = envelope(json!({ "type": "CanFulfillIntentRequest", "requestId": "req-4" }));

        let err = dispatcher.handle_json(event).await.unwrap_err();
        assert!(matches!(
            err,
            SkillError::UnsupportedRequest { request_type } if request_type == "CanFulfillIntentRequest"
        ));
    }

    #[tokio::test]
    async fn test_rate_failure_fails_invocation() {
        let dispatcher = SkillDispatcher::new(BrokenRates);
        let event = envelope(json!({
            "type": "IntentRequest",
            "requestId": "req-5",
            "intent": {
                "name": "calculateExchange",
                "slots": {
                    "Amount": { "name": "Amount", "value": "5" },
                    "Currency": { "name": "Currency", "value": "euros" }
                }
            }
        }));

        let err = dispatcher.handle_json(event).await.unwrap_err();
        assert!(matches!(err, SkillError::RateStatusError { status: 502 }));
    }

    #[tokio::test]
    async fn test_application_id_is_enforced() {
        let dispatcher = SkillDispatcher::new(FixedRates)
            .with_application_id(Some("amzn1.ask.skill.other".to_string()));
        let event = envelope(json!({ "type": "LaunchRequest", "requestId": "req-6" }));

        let err = dispatcher.handle_json(event).await.unwrap_err();
        assert!(matches!(err, SkillError::InvalidApplicationId { .. }));

        let dispatcher = SkillDispatcher::new(FixedRates)
            .with_application_id(Some("amzn1.ask.skill.exchange".to_string()));
        let event = envelope(json!({ "type": "LaunchRequest", "requestId": "req-7" }));
        assert!(dispatcher.handle_json(event).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_malformed_envelope_is_serialization_error() {
        let dispatcher = SkillDispatcher::new(FixedRates);
        let err = dispatcher
            .handle_json(json!({ "request": { "type": "LaunchRequest" } }))
            .await
            .unwrap_err();
        assert!(matches!(err, SkillError::SerializationError(_)));
    }
}
