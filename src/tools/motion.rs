//! `arm_move` — command arm motion through the bridge.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::bridge::{BridgeClient, MotionMode, MoveRequest};

use super::arguments::ToolArguments;
use super::tool::{Tool, ToolEnvelope};
use super::types::ToolParameters;

const SAFETY_ADVICE: &str = "The motion was rejected by the safety layer. Adjust target values.";
const CONNECTIVITY_ADVICE: &str = "Check bridge server and arm connection";
const ARGUMENT_ADVICE: &str =
    "Provide mode and a numeric target array matching the selected motion mode";

/// Incoming tool-call parameters. Optional fields stay unset unless the
/// caller supplied them; this adapter never invents geometry.
#[derive(Debug, Deserialize)]
struct MoveParams {
    mode: MotionMode,
    target: Vec<f64>,
    #[serde(default)]
    mid_point: Option<Vec<f64>>,
    #[serde(default)]
    end_point: Option<Vec<f64>>,
    #[serde(default)]
    speed_percent: Option<u8>,
    #[serde(default)]
    wait: Option<bool>,
    #[serde(default)]
    timeout: Option<f64>,
}

pub struct ArmMoveTool {
    client: Arc<BridgeClient>,
    parameters: ToolParameters,
}

impl ArmMoveTool {
    pub fn new(client: Arc<BridgeClient>) -> Self {
        let parameters = ToolParameters::object()
            .string_enum(
                "mode",
                "Motion mode: J=joint smooth, JS=joint fast (caution), \
                 P=point-to-point cartesian, L=linear cartesian, C=circular arc",
                &["J", "JS", "P", "L", "C"],
                true,
            )
            .number_array(
                "target",
                "For J/JS: joint angles [j1..jN] in radians. \
                 For P/L: [x,y,z,roll,pitch,yaw] in meters/radians. \
                 For C: start pose [x,y,z,r,p,y].",
                true,
            )
            .number_array("mid_point", "Mid-point pose for arc motion (mode=C only)", false)
            .number_array("end_point", "End-point pose for arc motion (mode=C only)", false)
            .integer_bounded(
                "speed_percent",
                "Speed override (1-100%). Safety layer may cap this.",
                1,
                100,
            )
            .boolean_with_default("wait", "Wait for motion to complete (default true)", true)
            .number("timeout", "Seconds to wait for motion completion", false)
            .build();
        Self { client, parameters }
    }
}

#[async_trait]
impl Tool for ArmMoveTool {
    fn name(&self) -> &str {
        "arm_move"
    }

    fn description(&self) -> &str {
        "Move the robotic arm. Supports joint-space (J/JS), point-to-point (P), \
         linear (L), and arc (C) motion modes. Joint values are in radians, \
         Cartesian positions in meters, orientations in radians. \
         NERO has 7 joints, Piper has 6."
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(&self, args: ToolArguments) -> ToolEnvelope {
        let params: MoveParams = match args.deserialize() {
            Ok(params) => params,
            Err(err) => return ToolEnvelope::error(err.to_string(), ARGUMENT_ADVICE),
        };

        let request = MoveRequest {
            mode: params.mode,
            target: params.target,
            mid_point: params.mid_point,
            end_point: params.end_point,
            speed_percent: params.speed_percent,
            wait: Some(params.wait.unwrap_or(true)),
            timeout: params.timeout,
        };

        // A 2xx result with ok:false (bridge-side rejection) is payload,
        // not a transport failure; it is returned verbatim.
        match self.client.send_move(&request).await {
            Ok(result) => ToolEnvelope::json(&result),
            Err(err) => {
                let advice = if err.is_safety_rejection() {
                    SAFETY_ADVICE
                } else {
                    CONNECTIVITY_ADVICE
                };
                ToolEnvelope::error(err.to_string(), advice)
            }
        }
    }
}
