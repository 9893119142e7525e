//! Builders for the speechlet responses the skill sends back.

use crate::domain::model::{
    Card, OutputSpeech, Reprompt, ResponseEnvelope, SessionAttributes, SpeechletResponse,
};

pub const RESPONSE_VERSION: &str = "1.0";

const CARD_PREFIX: &str = "SessionSpeechlet";

const WELCOME_TITLE: &str = "Welcome";
const WELCOME_SPEECH: &str = "Welcome to the Alexa Exchange Calculator. ";
const WELCOME_REPROMPT: &str =
    "Please tell me the currency which will be exchanged like, exchange 1000 dollars.";

const SESSION_END_TITLE: &str = "Session Ended";
const SESSION_END_SPEECH: &str = "Thank you for using exchange calculator. Have a nice day!";

const CLARIFICATION_SPEECH: &str =
    "I'm not sure which currency you want to exchange. Please try again.";
const CLARIFICATION_REPROMPT: &str = "I'm not sure which currency you want to exchange. \
     Please tell me the currency which will be exchanged like, exchange 1000 dollars.";

const EXCHANGE_REPROMPT: &str = "You can ask me another currency exchange if you want.";

fn plain_text(text: Option<&str>) -> OutputSpeech {
    OutputSpeech {
        speech_type: "PlainText".to_string(),
        text: text.map(str::to_string),
    }
}

pub fn build_speechlet_response(
    title: &str,
    output: &str,
    reprompt_text: Option<&str>,
    should_end_session: bool,
) -> SpeechletResponse {
    SpeechletResponse {
        output_speech: plain_text(Some(output)),
        card: Card {
            card_type: "Simple".to_string(),
            title: format!("{} - {}", CARD_PREFIX, title),
            content: format!("{} - {}", CARD_PREFIX, output),
        },
        reprompt: Reprompt {
            output_speech: plain_text(reprompt_text),
        },
        should_end_session,
    }
}

pub fn build_response(
    session_attributes: SessionAttributes,
    speechlet: SpeechletResponse,
) -> ResponseEnvelope {
    ResponseEnvelope {
        version: RESPONSE_VERSION.to_string(),
        session_attributes,
        response: speechlet,
    }
}

pub fn welcome_response() -> SpeechletResponse {
    build_speechlet_response(WELCOME_TITLE, WELCOME_SPEECH, Some(WELCOME_REPROMPT), false)
}

pub fn session_end_response() -> SpeechletResponse {
    build_speechlet_response(SESSION_END_TITLE, SESSION_END_SPEECH, None, true)
}

pub fn clarification_response(title: &str) -> SpeechletResponse {
    build_speechlet_response(
        title,
        CLARIFICATION_SPEECH,
        Some(CLARIFICATION_REPROMPT),
        false,
    )
}

/// `amount` and `currency` are echoed as the user said them, minus
/// surrounding whitespace.
pub fn exchange_response(
    title: &str,
    amount: &str,
    currency: &str,
    liras: i64,
) -> SpeechletResponse {
    let output = format!(
        "You asked {} {}. It equals to {} Turkish Liras.",
        amount.trim(),
        currency.trim(),
        liras
    );
    build_speechlet_response(title, &output, Some(EXCHANGE_REPROMPT), false)
}
