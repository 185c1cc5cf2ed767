//! Tool system: the four arm tools plus the trait and schema machinery
//! they are built on.

pub mod arguments;
pub mod connect;
pub mod motion;
pub mod status;
pub mod stop;
pub mod tool;
pub mod types;
pub mod validation;

pub use arguments::ToolArguments;
pub use connect::{ArmConnectTool, ROBOT_TYPES};
pub use motion::ArmMoveTool;
pub use status::ArmStatusTool;
pub use stop::ArmStopTool;
pub use tool::{Tool, ToolContent, ToolEnvelope, ToolHost};
pub use types::ToolParameters;
pub use validation::validate_arguments;
