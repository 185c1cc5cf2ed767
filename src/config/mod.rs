//! Plugin configuration (explicit value > env > built-in default).

use crate::bridge::{DEFAULT_BRIDGE_URL, DEFAULT_ROBOT};

/// Env var naming the bridge base address.
pub const ENV_BRIDGE_URL: &str = "CLAWARM_BRIDGE_URL";
/// Env var naming the robot used when a tool call omits one.
pub const ENV_DEFAULT_ROBOT: &str = "CLAWARM_DEFAULT_ROBOT";

/// Configuration read once at composition time, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    /// Bridge base address.
    pub bridge_url: String,
    /// Robot type used when a tool call omits one.
    pub default_robot: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            bridge_url: DEFAULT_BRIDGE_URL.to_string(),
            default_robot: DEFAULT_ROBOT.to_string(),
        }
    }
}

impl PluginConfig {
    pub fn new(bridge_url: impl Into<String>, default_robot: impl Into<String>) -> Self {
        Self {
            bridge_url: bridge_url.into(),
            default_robot: default_robot.into(),
        }
    }

    /// Load from the environment (honoring a `.env` file), falling back to
    /// the built-in defaults. Empty values are treated as unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            bridge_url: env_or(ENV_BRIDGE_URL, DEFAULT_BRIDGE_URL),
            default_robot: env_or(ENV_DEFAULT_ROBOT, DEFAULT_ROBOT),
        }
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
