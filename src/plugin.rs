//! Registration composer: wires one [`BridgeClient`] to the four arm tools
//! and registers them with a host runtime.

use std::sync::Arc;

use tracing::info;

use crate::bridge::BridgeClient;
use crate::config::PluginConfig;
use crate::tools::{ArmConnectTool, ArmMoveTool, ArmStatusTool, ArmStopTool, Tool, ToolHost};

/// Build the four arm tools over a single shared client.
pub fn arm_tools(config: &PluginConfig) -> Vec<Arc<dyn Tool>> {
    let client = Arc::new(BridgeClient::new(&config.bridge_url));
    vec![
        Arc::new(ArmConnectTool::new(client.clone(), &config.default_robot)),
        Arc::new(ArmStatusTool::new(client.clone())),
        Arc::new(ArmMoveTool::new(client.clone())),
        Arc::new(ArmStopTool::new(client)),
    ]
}

/// Register all arm tools with a host.
pub fn register_arm_tools(host: &mut dyn ToolHost, config: &PluginConfig) {
    for tool in arm_tools(config) {
        info!(tool = tool.name(), bridge = %config.bridge_url, "registering arm tool");
        host.register_tool(tool);
    }
}
