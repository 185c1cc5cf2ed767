//! `arm_stop` — halt the arm, gracefully or immediately.

use std::sync::Arc;

use async_trait::async_trait;

use crate::bridge::{BridgeClient, StopAction};

use super::arguments::ToolArguments;
use super::tool::{Tool, ToolEnvelope};
use super::types::ToolParameters;

// Software failure of the stop path must fail open to a documented manual
// fallback, never be retried silently.
const STOP_ADVICE: &str =
    "If the emergency stop failed, use the physical E-stop button immediately";
const ACTION_ADVICE: &str = "Use action 'disable' or 'emergency_stop'";

pub struct ArmStopTool {
    client: Arc<BridgeClient>,
    parameters: ToolParameters,
}

impl ArmStopTool {
    pub fn new(client: Arc<BridgeClient>) -> Self {
        let parameters = ToolParameters::object()
            .string_enum_with_default(
                "action",
                "disable = graceful stop, emergency_stop = immediate halt",
                &["disable", "emergency_stop"],
                "disable",
            )
            .build();
        Self { client, parameters }
    }
}

#[async_trait]
impl Tool for ArmStopTool {
    fn name(&self) -> &str {
        "arm_stop"
    }

    fn description(&self) -> &str {
        "Stop the robotic arm. Use action='disable' for graceful stop, \
         or action='emergency_stop' for immediate halt (requires reset to resume). \
         Always prefer the physical E-stop button when available."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(&self, args: ToolArguments) -> ToolEnvelope {
        let action = match args.get_str_opt("action") {
            None | Some("") | Some("disable") => StopAction::Disable,
            Some("emergency_stop") => StopAction::EmergencyStop,
            Some(other) => {
                return ToolEnvelope::error(
                    format!("Invalid argument: unknown stop action '{other}'"),
                    ACTION_ADVICE,
                );
            }
        };

        match self.client.stop(action).await {
            Ok(result) => ToolEnvelope::json(&result),
            Err(err) => ToolEnvelope::error(err.to_string(), STOP_ADVICE),
        }
    }
}
