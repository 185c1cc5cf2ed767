//! HTTP client for the arm bridge server.
//!
//! The bridge is an external process that owns the CAN transport, motion
//! planning, and safety enforcement. This module only translates typed
//! operations into single JSON request/response cycles against it — no
//! retries, no queueing, no client-side deadline.

pub mod types;

pub use types::{
    ArmStatus, ConnectRequest, MotionMode, MoveRequest, OperationResult, StopAction, StopRequest,
};

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClawArmError, Result};

/// Bridge address used when none is configured.
pub const DEFAULT_BRIDGE_URL: &str = "http://localhost:8420";
/// Robot type used when none is configured or supplied.
pub const DEFAULT_ROBOT: &str = "nero";
/// CAN channel used when none is supplied.
pub const DEFAULT_CHANNEL: &str = "can0";
/// CAN interface driver used when none is supplied.
pub const DEFAULT_INTERFACE: &str = "socketcan";

/// Client for the bridge's fixed JSON-over-HTTP protocol.
///
/// Holds no per-call state beyond the immutable base URL, so a single
/// instance is shared across all tools for the process lifetime. Concurrent
/// calls race to the bridge independently; ordering of their effects on the
/// physical arm is the bridge's concern.
pub struct BridgeClient {
    client: reqwest::Client,
    base_url: String,
}

impl BridgeClient {
    /// Create a client for the given base address. Trailing slashes are
    /// stripped here so path concatenation never produces a double slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The normalized base address requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Connect to an arm. `None` arguments take the protocol defaults
    /// (`nero`, `can0`, `socketcan`).
    pub async fn connect(
        &self,
        robot: Option<&str>,
        channel: Option<&str>,
        interface: Option<&str>,
    ) -> Result<OperationResult> {
        let body = ConnectRequest {
            robot: robot.unwrap_or(DEFAULT_ROBOT).to_string(),
            channel: channel.unwrap_or(DEFAULT_CHANNEL).to_string(),
            interface: interface.unwrap_or(DEFAULT_INTERFACE).to_string(),
        };
        self.send(Method::POST, "/connect", Some(serde_json::to_value(&body)?))
            .await
    }

    pub async fn disconnect(&self) -> Result<OperationResult> {
        self.send(Method::POST, "/disconnect", None).await
    }

    /// Fetch a fresh arm-state snapshot. Never cached.
    pub async fn status(&self) -> Result<ArmStatus> {
        self.send(Method::GET, "/status", None).await
    }

    /// Command a motion. Named `send_move` because `move` is reserved.
    pub async fn send_move(&self, request: &MoveRequest) -> Result<OperationResult> {
        self.send(Method::POST, "/move", Some(serde_json::to_value(request)?))
            .await
    }

    pub async fn enable(&self) -> Result<OperationResult> {
        self.send(Method::POST, "/enable", None).await
    }

    pub async fn disable(&self) -> Result<OperationResult> {
        self.send(Method::POST, "/disable", None).await
    }

    pub async fn stop(&self, action: StopAction) -> Result<OperationResult> {
        let body = StopRequest { action };
        self.send(Method::POST, "/stop", Some(serde_json::to_value(body)?))
            .await
    }

    /// One request/response cycle: concatenate base + path, attach a JSON
    /// body when present, classify non-2xx responses, decode 2xx bodies
    /// into the declared type.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, path, "bridge request");

        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(failure_from_body(&method, path, status.as_u16(), &text));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|source| ClawArmError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Classify a non-2xx response. The bridge reports failures as
/// `{"detail": string}`; anything else (HTML error pages, plain text) falls
/// back to the raw body. Details from the safety layer are prefixed with
/// "Safety", which is the bridge's only rejection marker.
fn failure_from_body(method: &Method, path: &str, status: u16, body: &str) -> ClawArmError {
    let detail = extract_detail(body);
    if detail.contains("Safety") {
        ClawArmError::SafetyRejected {
            method: method.to_string(),
            path: path.to_string(),
            status,
            detail,
        }
    } else {
        ClawArmError::Bridge {
            method: method.to_string(),
            path: path.to_string(),
            status,
            detail,
        }
    }
}

fn extract_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}
