//! `arm_connect` — establish a bridge connection to a robotic arm.

use std::sync::Arc;

use async_trait::async_trait;

use crate::bridge::{BridgeClient, DEFAULT_CHANNEL, DEFAULT_ROBOT};

use super::arguments::ToolArguments;
use super::tool::{Tool, ToolEnvelope};
use super::types::ToolParameters;

/// Robot types the bridge knows how to drive.
pub const ROBOT_TYPES: &[&str] = &["nero", "piper", "piper_h", "piper_l", "piper_x"];

const CONNECT_ADVICE: &str =
    "Check that the bridge server is running (clawarm-bridge) and the CAN interface is activated";

pub struct ArmConnectTool {
    client: Arc<BridgeClient>,
    default_robot: String,
    parameters: ToolParameters,
}

impl ArmConnectTool {
    /// `default_robot` comes from plugin configuration; an empty value
    /// falls back to the protocol default.
    pub fn new(client: Arc<BridgeClient>, default_robot: impl Into<String>) -> Self {
        let mut default_robot = default_robot.into();
        if default_robot.is_empty() {
            default_robot = DEFAULT_ROBOT.to_string();
        }
        let parameters = ToolParameters::object()
            .string_enum_with_default("robot", "Robot type to connect to", ROBOT_TYPES, &default_robot)
            .string_with_default("channel", "CAN interface name", DEFAULT_CHANNEL)
            .build();
        Self {
            client,
            default_robot,
            parameters,
        }
    }
}

#[async_trait]
impl Tool for ArmConnectTool {
    fn name(&self) -> &str {
        "arm_connect"
    }

    fn description(&self) -> &str {
        "Connect to a robotic arm (NERO 7-DOF or Piper 6-DOF) via the arm bridge. \
         The arm will be enabled and ready for motion commands after connection."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(&self, args: ToolArguments) -> ToolEnvelope {
        let robot = args
            .get_str_opt("robot")
            .filter(|robot| !robot.is_empty())
            .unwrap_or(&self.default_robot);
        let channel = args
            .get_str_opt("channel")
            .filter(|channel| !channel.is_empty())
            .unwrap_or(DEFAULT_CHANNEL);

        match self.client.connect(Some(robot), Some(channel), None).await {
            Ok(result) => ToolEnvelope::json(&result),
            Err(err) => ToolEnvelope::error(err.to_string(), CONNECT_ADVICE),
        }
    }
}
