//! ProTalk-backed `TextProvider` implementation.
//!
//! The bot exposes an `ask` endpoint; we send it a message instructing
//! it to run its `get_text_from_url` function against the gauge page
//! and it answers with the page's rendered text in the `done` field.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{TextProvider, TransportError};

/// Default ProTalk API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.pro-talk.ru/api/v1.0";

/// Default chat identifier for this monitor's conversation.
pub const DEFAULT_CHAT_ID: &str = "shebsh_monitor_001";

/// Gauge page the bot is asked to read.
pub const DEFAULT_TARGET_URL: &str =
    "https://allrivers.info/gauge/shebsh-grigoryevskaya/waterlevel";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    bot_id: i64,
    chat_id: &'a str,
    message: String,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    done: String,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ProTalkConfig {
    pub api_url: String,
    pub bot_id: i64,
    pub bot_token: String,
    pub chat_id: String,
    /// The webpage whose rendered text the bot should return.
    pub target_url: String,
}

impl ProTalkConfig {
    /// Read the bot credentials from the environment.
    ///
    /// `PROTALK_BOT_ID` and `PROTALK_BOT_TOKEN` are required;
    /// `PROTALK_API_URL`, `PROTALK_CHAT_ID` and `TARGET_URL` fall back
    /// to the Shebsh gauge defaults.
    pub fn from_env() -> Result<Self, TransportError> {
        let bot_id = std::env::var("PROTALK_BOT_ID")
            .map_err(|_| TransportError::Other("PROTALK_BOT_ID is not set".into()))?
            .parse::<i64>()
            .map_err(|e| TransportError::Other(format!("PROTALK_BOT_ID is not numeric: {e}")))?;
        let bot_token = std::env::var("PROTALK_BOT_TOKEN")
            .map_err(|_| TransportError::Other("PROTALK_BOT_TOKEN is not set".into()))?;

        Ok(Self {
            api_url: std::env::var("PROTALK_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            bot_id,
            bot_token,
            chat_id: std::env::var("PROTALK_CHAT_ID")
                .unwrap_or_else(|_| DEFAULT_CHAT_ID.to_string()),
            target_url: std::env::var("TARGET_URL")
                .unwrap_or_else(|_| DEFAULT_TARGET_URL.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// ProTalkProvider
// ---------------------------------------------------------------------------

pub struct ProTalkProvider {
    client: reqwest::Client,
    config: ProTalkConfig,
}

impl ProTalkProvider {
    pub fn new(config: ProTalkConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// The instruction forcing the bot to scrape the target page with
    /// its `get_text_from_url` function and echo the text back.
    fn scrape_message(&self) -> String {
        format!(
            "Используй функцию №18 'get_text_from_url', чтобы получить весь \
             текстовый контент со страницы {}. Верни полученный текст.",
            self.config.target_url
        )
    }
}

#[async_trait]
impl TextProvider for ProTalkProvider {
    async fn fetch_raw_text(&self) -> Result<String, TransportError> {
        let url = format!("{}/ask/{}", self.config.api_url, self.config.bot_token);
        let payload = AskRequest {
            bot_id: self.config.bot_id,
            chat_id: &self.config.chat_id,
            message: self.scrape_message(),
        };

        debug!(target_url = %self.config.target_url, "asking bot for page text");
        let response = self.client.post(&url).json(&payload).send().await?;

        match response.status().as_u16() {
            401 => return Err(TransportError::Unauthorized),
            400 => return Err(TransportError::BadRequest),
            status if !(200..300).contains(&status) => {
                return Err(TransportError::Api {
                    status,
                    message: response.text().await.unwrap_or_default(),
                });
            }
            _ => {}
        }

        let body: AskResponse = response
            .json()
            .await
            .map_err(|e| TransportError::Other(format!("unexpected response shape: {e}")))?;

        Ok(body.done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_payload_has_expected_shape() {
        let req = AskRequest {
            bot_id: 18,
            chat_id: "shebsh_monitor_001",
            message: "scrape please".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["bot_id"], 18);
        assert_eq!(value["chat_id"], "shebsh_monitor_001");
        assert_eq!(value["message"], "scrape please");
    }

    #[test]
    fn ask_response_unwraps_done_field() {
        let body: AskResponse =
            serde_json::from_str(r#"{ "done": "Уровень воды: 87 см" }"#).unwrap();
        assert_eq!(body.done, "Уровень воды: 87 см");
    }

    #[test]
    fn scrape_message_names_the_target_page() {
        let provider = ProTalkProvider::new(ProTalkConfig {
            api_url: DEFAULT_API_URL.into(),
            bot_id: 1,
            bot_token: "token".into(),
            chat_id: DEFAULT_CHAT_ID.into(),
            target_url: "https://example.com/gauge".into(),
        });
        assert!(provider.scrape_message().contains("https://example.com/gauge"));
        assert!(provider.scrape_message().contains("get_text_from_url"));
    }
}
