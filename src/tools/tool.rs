//! Tool trait, host registration capability, and the response envelope.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::arguments::ToolArguments;
use super::types::ToolParameters;

/// Uniform response shape every tool returns to the host, success or
/// failure. Failures are carried as an `error` field in the text plus an
/// `advice` string; no error ever crosses the tool boundary as a panic or
/// a propagated `Err`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolEnvelope {
    pub content: Vec<ToolContent>,
}

/// One content block inside a [`ToolEnvelope`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
}

impl ToolEnvelope {
    /// A single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent {
                kind: "text".to_string(),
                text: text.into(),
                advice: None,
            }],
        }
    }

    /// Serialize a payload as compact JSON text.
    pub fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(text) => Self::text(text),
            Err(err) => Self::error(err.to_string(), "Bridge response could not be serialized"),
        }
    }

    /// Serialize a payload as pretty-printed JSON text.
    pub fn json_pretty<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self::text(text),
            Err(err) => Self::error(err.to_string(), "Bridge response could not be serialized"),
        }
    }

    /// A failure: `{"error": message}` text plus a human-actionable advisory.
    pub fn error(message: impl Into<String>, advice: impl Into<String>) -> Self {
        let body = serde_json::json!({ "error": message.into() });
        Self {
            content: vec![ToolContent {
                kind: "text".to_string(),
                text: body.to_string(),
                advice: Some(advice.into()),
            }],
        }
    }

    /// The first text block, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|block| block.text.as_str())
    }

    /// The first advisory, if any.
    pub fn first_advice(&self) -> Option<&str> {
        self.content
            .first()
            .and_then(|block| block.advice.as_deref())
    }
}

/// A callable tool exposed to the host runtime.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name the host invokes it by.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's parameters.
    fn parameters(&self) -> &ToolParameters;

    /// Execute with raw arguments. Infallible from the host's perspective:
    /// transport failures are folded into the envelope.
    async fn execute(&self, args: ToolArguments) -> ToolEnvelope;
}

/// The one capability this crate needs from a host runtime: register a
/// named tool with a schema and an async handler. Hosts with wider plugin
/// APIs adapt down to this.
pub trait ToolHost {
    fn register_tool(&mut self, tool: Arc<dyn Tool>);
}
