//! Configuration resolution tests.

use pretty_assertions::assert_eq;

use clawarm::config::{PluginConfig, ENV_BRIDGE_URL, ENV_DEFAULT_ROBOT};

// Env mutation and reads live in one test body so parallel test threads
// never observe each other's values.
#[test]
fn from_env_layers_over_builtin_defaults() {
    std::env::set_var(ENV_BRIDGE_URL, "http://bridge.local:8420/");
    std::env::set_var(ENV_DEFAULT_ROBOT, "piper_l");

    let config = PluginConfig::from_env();
    assert_eq!(config.bridge_url, "http://bridge.local:8420/");
    assert_eq!(config.default_robot, "piper_l");

    // Empty values are treated as unset.
    std::env::set_var(ENV_BRIDGE_URL, "");
    std::env::set_var(ENV_DEFAULT_ROBOT, "  ");

    let config = PluginConfig::from_env();
    assert_eq!(config.bridge_url, "http://localhost:8420");
    assert_eq!(config.default_robot, "nero");

    std::env::remove_var(ENV_BRIDGE_URL);
    std::env::remove_var(ENV_DEFAULT_ROBOT);

    let config = PluginConfig::from_env();
    assert_eq!(config, PluginConfig::default());
}

#[test]
fn explicit_construction_wins_over_everything() {
    let config = PluginConfig::new("http://10.0.0.5:8420", "piper");
    assert_eq!(config.bridge_url, "http://10.0.0.5:8420");
    assert_eq!(config.default_robot, "piper");
}
