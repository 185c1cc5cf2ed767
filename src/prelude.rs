//! Convenience re-exports for common use.

pub use crate::bridge::{
    ArmStatus, BridgeClient, MotionMode, MoveRequest, OperationResult, StopAction,
};
pub use crate::config::PluginConfig;
pub use crate::error::{ClawArmError, Result};
pub use crate::plugin::{arm_tools, register_arm_tools};
pub use crate::tools::{Tool, ToolArguments, ToolEnvelope, ToolHost, ToolParameters};
