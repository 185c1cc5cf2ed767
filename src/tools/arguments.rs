//! Typed access to raw tool-call arguments.

use serde::de::DeserializeOwned;

use crate::error::{ClawArmError, Result};

/// The JSON argument object a host passes to a tool invocation.
///
/// Hosts validate against the declared schema before calling, but that
/// validation is not guaranteed to be enforced, so accessors here never
/// panic on missing or mistyped fields.
#[derive(Debug, Clone)]
pub struct ToolArguments(serde_json::Value);

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Arguments for a tool that takes none.
    pub fn empty() -> Self {
        Self(serde_json::json!({}))
    }

    /// The raw argument value.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Optional string field; absent, null, or non-string yields `None`.
    pub fn get_str_opt(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.as_str())
    }

    /// Deserialize the whole argument object into a typed struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.0.clone())
            .map_err(|err| ClawArmError::InvalidArgument(err.to_string()))
    }
}

impl Default for ToolArguments {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_str_opt_reads_present_fields() {
        let args = ToolArguments::new(serde_json::json!({"robot": "piper"}));
        assert_eq!(args.get_str_opt("robot"), Some("piper"));
        assert_eq!(args.get_str_opt("channel"), None);
    }

    #[test]
    fn mistyped_fields_read_as_absent() {
        let args = ToolArguments::new(serde_json::json!({"robot": 7}));
        assert_eq!(args.get_str_opt("robot"), None);
    }

    #[test]
    fn deserialize_into_typed_params() {
        #[derive(Debug, serde::Deserialize)]
        struct Params {
            action: Option<String>,
        }

        let args = ToolArguments::new(serde_json::json!({"action": "emergency_stop"}));
        let params: Params = args.deserialize().unwrap();
        assert_eq!(params.action.as_deref(), Some("emergency_stop"));

        let err = ToolArguments::new(serde_json::json!({"action": 3}))
            .deserialize::<Params>()
            .unwrap_err();
        assert!(matches!(err, ClawArmError::InvalidArgument(_)));
    }
}
