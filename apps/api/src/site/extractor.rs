//! Extractor: turns free-form practice text into a `SiteRecord` with one model call.
//!
//! The reply is parsed exactly as returned. Nothing is stripped, repaired or retried.
//! A reply that is not JSON at all surfaces with its raw text for diagnosis; JSON of
//! the wrong shape is a record error, like a record missing its required fields.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{ChatMessage, CompletionModel, LlmError};
use crate::site::prompts::EXTRACTION_SYSTEM;
use crate::site::record::{RecordError, SiteRecord};

/// Sampling temperature for extraction. Zero keeps replies as repeatable as the model allows.
pub const EXTRACTION_TEMPERATURE: f32 = 0.0;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("language model call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("model reply is not valid JSON: {source}")]
    InvalidJson {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Record(#[from] RecordError),
}

#[derive(Clone)]
pub struct SiteExtractor {
    model: Arc<dyn CompletionModel>,
}

impl SiteExtractor {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    pub async fn extract(&self, prompt: &str) -> Result<SiteRecord, ExtractError> {
        let messages = build_messages(prompt);
        let reply = self
            .model
            .complete(&messages, EXTRACTION_TEMPERATURE)
            .await?;

        let record = parse_reply(reply)?;
        info!(
            "Extracted site record: niche={:?}, faqs={}, page_links={}",
            record.website_niche,
            record.faqs.len(),
            record.page_links.len()
        );
        Ok(record)
    }
}

fn build_messages(prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(format!("{EXTRACTION_SYSTEM}\n\n{JSON_ONLY_INSTRUCTION}")),
        ChatMessage::user(prompt),
    ]
}

fn parse_reply(reply: String) -> Result<SiteRecord, ExtractError> {
    let value = match serde_json::from_str::<Value>(&reply) {
        Ok(value) => value,
        Err(source) => {
            warn!("Model reply is not JSON: {source}");
            return Err(ExtractError::InvalidJson { raw: reply, source });
        }
    };

    SiteRecord::from_value(value).map_err(|e| {
        warn!("Model reply is JSON but not a site record: {e}");
        ExtractError::Record(e)
    })
}
