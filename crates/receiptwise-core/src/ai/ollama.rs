//! Ollama advisor backend
//!
//! HTTP client for the Ollama API. Prompts embed the receipt collection as
//! JSON and instruct the model to answer from that data only.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Receipt;

use super::{Advisor, FinancialTip};

/// Ollama-backed advisor
pub struct OllamaAdvisor {
    http_client: Client,
    base_url: String,
    model: String,
}

impl Clone for OllamaAdvisor {
    fn clone(&self) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
        }
    }
}

impl OllamaAdvisor {
    /// Create a new Ollama advisor
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Create a new instance with a different model
    pub fn with_model(&self, model: &str) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
            model: model.to_string(),
        }
    }

    /// Create from environment variables (`OLLAMA_HOST`, `OLLAMA_MODEL`)
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("OLLAMA_HOST").ok()?;
        let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string());
        Some(Self::new(&host, &model))
    }

    async fn generate(&self, prompt: String, json_output: bool) -> Result<String> {
        let request = OllamaRequest {
            model: self.model.clone(),
            prompt,
            stream: false,
            format: json_output.then_some("json"),
        };

        let response = self
            .http_client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Http(response.error_for_status().unwrap_err()));
        }

        let ollama_response: OllamaResponse = response.json().await?;
        debug!("Ollama response: {}", ollama_response.response);
        Ok(ollama_response.response)
    }
}

/// Request to Ollama API
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
}

/// Response from Ollama API
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}

/// Expected shape of the tips completion
#[derive(Debug, Deserialize)]
struct TipsPayload {
    recommendations: Vec<FinancialTip>,
}

/// Strip a Markdown code fence if the model wrapped its JSON in one
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
    else {
        return trimmed;
    };
    inner.trim_end_matches("```").trim()
}

fn parse_tips(raw: &str) -> Result<Vec<FinancialTip>> {
    let cleaned = strip_code_fence(raw);

    if let Ok(payload) = serde_json::from_str::<TipsPayload>(cleaned) {
        return Ok(payload.recommendations);
    }
    // Some models return the bare array.
    if let Ok(tips) = serde_json::from_str::<Vec<FinancialTip>>(cleaned) {
        return Ok(tips);
    }

    Err(Error::Advisor(format!(
        "could not parse tips from model output: {}",
        raw.chars().take(200).collect::<String>()
    )))
}

#[async_trait]
impl Advisor for OllamaAdvisor {
    async fn query(
        &self,
        question: &str,
        receipts: &[Receipt],
        today: NaiveDate,
    ) -> Result<String> {
        let data = serde_json::to_string(receipts)?;
        let prompt = format!(
            "You are a helpful AI assistant for a receipt management app.\n\
             Answer the user's question based only on the receipt data below.\n\
             Be concise and friendly. If the data is insufficient, say so.\n\
             Do not make up information.\n\
             Today's date is {}.\n\n\
             User Question: {}\n\n\
             Receipt Data:\n{}\n",
            today.format("%Y-%m-%d"),
            question,
            data
        );

        self.generate(prompt, false).await
    }

    async fn tips(&self, receipts: &[Receipt]) -> Result<Vec<FinancialTip>> {
        let data = serde_json::to_string(receipts)?;
        let prompt = format!(
            "You are a helpful personal finance assistant. Analyze the receipt \
             data below and generate 2-3 concise, actionable financial tips.\n\
             Cover these areas where relevant: cheaper alternatives for \
             brand-name items, reorder suggestions for regularly bought items, \
             and a general savings tip based on the spending categories.\n\n\
             Respond with JSON of the form:\n\
             {{\"recommendations\": [{{\"type\": \"alternative|reorder|savings_tip\", \
             \"title\": \"...\", \"description\": \"...\"}}]}}\n\n\
             Receipt Data:\n{}\n",
            data
        );

        let raw = self.generate(prompt, true).await?;
        parse_tips(&raw)
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.http_client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::TipKind;

    #[test]
    fn test_parse_tips_object_form() {
        let raw = r#"{"recommendations": [{"type": "savings_tip", "title": "Cook at home", "description": "Dining is high."}]}"#;
        let tips = parse_tips(raw).unwrap();
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].kind, TipKind::SavingsTip);
    }

    #[test]
    fn test_parse_tips_bare_array_and_fence() {
        let raw = "```json\n[{\"type\": \"reorder\", \"title\": \"Milk\", \"description\": \"Weekly buy.\"}]\n```";
        let tips = parse_tips(raw).unwrap();
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].kind, TipKind::Reorder);
    }

    #[test]
    fn test_parse_tips_garbage_errors() {
        assert!(parse_tips("the model rambled instead").is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let advisor = OllamaAdvisor::new("http://localhost:11434/", "llama3.2");
        assert_eq!(advisor.base_url, "http://localhost:11434");
    }
}
