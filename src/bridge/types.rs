//! Wire types for the bridge protocol.

use serde::{Deserialize, Serialize};

/// Generic success/failure envelope returned by mutating bridge operations.
///
/// `ok: false` with a 2xx status is an application-level rejection (for
/// example the safety layer capping or refusing a motion), not a transport
/// failure; callers must inspect it themselves.
///
/// Decoding is strict: a body with fields outside this shape is a decode
/// error, not a silently trimmed payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationResult {
    pub ok: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Snapshot of arm state. Every field except the connection flags is
/// nullable so a disconnected arm reports "unknown" rather than zeros.
/// Strictly decoded, like [`OperationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArmStatus {
    pub connected: bool,
    pub enabled: bool,
    pub robot_type: Option<String>,
    pub dof: Option<u32>,
    pub joint_angles: Option<Vec<f64>>,
    pub flange_pose: Option<Vec<f64>>,
    pub motion_status: Option<i32>,
}

/// Motion mode, serialized as the bare letter codes the bridge expects.
///
/// J/JS interpret `target` as joint angles in radians (length = robot DOF);
/// P/L as a 6-tuple Cartesian pose `[x, y, z, roll, pitch, yaw]`; C as the
/// arc start pose, paired with `mid_point`/`end_point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionMode {
    /// Joint-space, smooth profile.
    J,
    /// Joint-space, fast profile.
    JS,
    /// Point-to-point Cartesian.
    P,
    /// Linear Cartesian.
    L,
    /// Circular arc.
    C,
}

/// Body of `POST /move`. Optional fields are omitted from the wire when
/// unset so the bridge applies its own defaults instead of ours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub mode: MotionMode,
    pub target: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid_point: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_point: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_percent: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,
}

/// Stop behavior. `disable` is recoverable; `emergency_stop` halts
/// immediately and requires an external reset before further motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopAction {
    #[default]
    Disable,
    EmergencyStop,
}

/// Body of `POST /connect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub robot: String,
    pub channel: String,
    pub interface: String,
}

/// Body of `POST /stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRequest {
    pub action: StopAction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn motion_mode_serializes_as_bare_letters() {
        assert_eq!(serde_json::to_value(MotionMode::J).unwrap(), json!("J"));
        assert_eq!(serde_json::to_value(MotionMode::JS).unwrap(), json!("JS"));
        assert_eq!(serde_json::from_value::<MotionMode>(json!("C")).unwrap(), MotionMode::C);
    }

    #[test]
    fn stop_action_serializes_snake_case() {
        assert_eq!(serde_json::to_value(StopAction::Disable).unwrap(), json!("disable"));
        assert_eq!(
            serde_json::to_value(StopAction::EmergencyStop).unwrap(),
            json!("emergency_stop")
        );
        assert_eq!(StopAction::default(), StopAction::Disable);
    }

    #[test]
    fn move_request_omits_unset_fields() {
        let request = MoveRequest {
            mode: MotionMode::L,
            target: vec![0.3, 0.0, 0.2, 0.0, 1.57, 0.0],
            mid_point: None,
            end_point: None,
            speed_percent: None,
            wait: Some(true),
            timeout: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("mid_point"));
        assert!(!obj.contains_key("speed_percent"));
        assert!(!obj.contains_key("timeout"));
        assert_eq!(value["wait"], json!(true));
    }

    #[test]
    fn operation_result_rejects_unknown_fields() {
        let err = serde_json::from_value::<OperationResult>(json!({
            "ok": true,
            "message": "Connected to nero",
            "firmware": "1.2.0",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("firmware"));
    }

    #[test]
    fn operation_result_tolerates_missing_data() {
        let result: OperationResult =
            serde_json::from_value(json!({"ok": true, "message": "Connected to nero"})).unwrap();
        assert!(result.ok);
        assert_eq!(result.data, None);
    }

    #[test]
    fn arm_status_roundtrips_nullable_fields() {
        let status: ArmStatus = serde_json::from_value(json!({
            "connected": false,
            "enabled": false,
            "robot_type": null,
            "dof": null,
            "joint_angles": null,
            "flange_pose": null,
            "motion_status": null,
        }))
        .unwrap();
        assert!(!status.connected);
        assert_eq!(status.dof, None);
    }
}
