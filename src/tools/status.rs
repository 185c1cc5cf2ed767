//! `arm_status` — snapshot of the connected arm's state.

use std::sync::Arc;

use async_trait::async_trait;

use crate::bridge::BridgeClient;

use super::arguments::ToolArguments;
use super::tool::{Tool, ToolEnvelope};
use super::types::ToolParameters;

const STATUS_ADVICE: &str = "Check that the bridge server is running";

pub struct ArmStatusTool {
    client: Arc<BridgeClient>,
    parameters: ToolParameters,
}

impl ArmStatusTool {
    pub fn new(client: Arc<BridgeClient>) -> Self {
        Self {
            client,
            parameters: ToolParameters::empty(),
        }
    }
}

#[async_trait]
impl Tool for ArmStatusTool {
    fn name(&self) -> &str {
        "arm_status"
    }

    fn description(&self) -> &str {
        "Get the current status of the connected robotic arm: joint angles (radians), \
         flange pose (meters/radians), motion status (0=idle), and connection state."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    // Always a fresh round trip; status is never cached or interpolated.
    async fn execute(&self, _args: ToolArguments) -> ToolEnvelope {
        match self.client.status().await {
            Ok(status) => ToolEnvelope::json_pretty(&status),
            Err(err) => ToolEnvelope::error(err.to_string(), STATUS_ADVICE),
        }
    }
}
