//! clawarm — robotic-arm control tools for agent runtimes.
//!
//! Exposes arm control (connect, status, move, stop) as callable tools by
//! translating each invocation into a JSON-over-HTTP call against an
//! external bridge server that drives the hardware over CAN. This crate is
//! purely the command/response translation layer: no motion planning, no
//! kinematic validation, no retries, no safety enforcement — safety
//! rejections from the bridge are reported, not decided, here.
//!
//! # Quick Start
//!
//! ```no_run
//! use clawarm::prelude::*;
//!
//! # async fn example(host: &mut dyn ToolHost) {
//! let config = PluginConfig::from_env();
//! register_arm_tools(host, &config);
//! # }
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod plugin;
pub mod prelude;
pub mod tools;
