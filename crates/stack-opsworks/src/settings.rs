//! [`StackSettings`] backed by the OpsWorks `DescribeStacks` and
//! `UpdateStack` operations.

use std::sync::OnceLock;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_opsworks::Client;
use aws_sdk_opsworks::error::DisplayErrorContext;
use serde_json::{Map, Value};
use stack_core::StackSettings;
use tokio::runtime::Runtime;

use crate::config::OpsWorksConfig;
use crate::{Error, Result};

/// OpsWorks stack settings reached through the AWS SDK.
///
/// The SDK is async; calls are driven to completion on a private
/// current-thread runtime. The client is built on first use, so constructing
/// this type never reads AWS configuration or credentials.
pub struct OpsWorksSettings {
    config: OpsWorksConfig,
    runtime: Runtime,
    client: OnceLock<Client>,
}

impl OpsWorksSettings {
    /// # Errors
    ///
    /// Fails if the region is malformed or the runtime cannot start.
    pub fn new(config: OpsWorksConfig) -> Result<Self> {
        config.validate()?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|source| Error::Runtime { source })?;

        Ok(Self {
            config,
            runtime,
            client: OnceLock::new(),
        })
    }

    pub fn config(&self) -> &OpsWorksConfig {
        &self.config
    }

    /// Whether the SDK client has been built yet.
    #[cfg(test)]
    fn is_connected(&self) -> bool {
        self.client.get().is_some()
    }

    fn client(&self) -> &Client {
        self.client.get_or_init(|| {
            tracing::debug!(
                region = %self.config.region,
                profile = ?self.config.profile,
                "loading AWS configuration"
            );
            let mut loader = aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(self.config.region.clone()));
            if let Some(profile) = &self.config.profile {
                loader = loader.profile_name(profile);
            }
            let sdk_config = self.runtime.block_on(loader.load());
            Client::new(&sdk_config)
        })
    }
}

impl StackSettings for OpsWorksSettings {
    fn get_custom_json(&self, stack_id: &str) -> stack_core::Result<Value> {
        let client = self.client();
        tracing::debug!(stack_id, "DescribeStacks");

        let output = self
            .runtime
            .block_on(client.describe_stacks().stack_ids(stack_id).send())
            .map_err(|e| {
                stack_core::Error::remote("get", stack_id, DisplayErrorContext(e).to_string())
            })?;

        let stack = output
            .stacks()
            .first()
            .ok_or_else(|| stack_core::Error::remote("get", stack_id, "stack not found"))?;

        decode_custom_json(stack_id, stack.custom_json())
    }

    fn set_custom_json(&self, stack_id: &str, custom_json: &str) -> stack_core::Result<()> {
        let client = self.client();
        tracing::debug!(stack_id, bytes = custom_json.len(), "UpdateStack");

        self.runtime
            .block_on(
                client
                    .update_stack()
                    .stack_id(stack_id)
                    .custom_json(custom_json)
                    .send(),
            )
            .map_err(|e| {
                stack_core::Error::remote("set", stack_id, DisplayErrorContext(e).to_string())
            })?;

        Ok(())
    }
}

/// Decode the `CustomJson` attribute of a stack.
///
/// A stack that never had custom JSON reports none; that reads as `{}`.
pub fn decode_custom_json(stack_id: &str, raw: Option<&str>) -> stack_core::Result<Value> {
    match raw {
        None => Ok(Value::Object(Map::new())),
        Some(raw) if raw.trim().is_empty() => Ok(Value::Object(Map::new())),
        Some(raw) => serde_json::from_str(raw).map_err(|e| {
            stack_core::Error::remote(
                "get",
                stack_id,
                format!("stack custom JSON is not valid JSON: {}", e),
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_absent_is_empty_object() {
        assert_eq!(decode_custom_json("s", None).unwrap(), json!({}));
        assert_eq!(decode_custom_json("s", Some("  ")).unwrap(), json!({}));
    }

    #[test]
    fn test_decode_object() {
        let value = decode_custom_json("s", Some("{\n  \"foo\": 1\n}")).unwrap();
        assert_eq!(value, json!({"foo": 1}));
    }

    #[test]
    fn test_decode_invalid_is_remote_error() {
        let err = decode_custom_json("abc-123", Some("{nope")).unwrap_err();
        assert!(matches!(
            err,
            stack_core::Error::Remote { operation: "get", ref stack_id, .. } if stack_id == "abc-123"
        ));
    }

    #[test]
    fn test_new_does_not_build_client() {
        let settings = OpsWorksSettings::new(OpsWorksConfig::default()).unwrap();
        assert!(!settings.is_connected());
        assert_eq!(settings.config().region, "us-east-1");
    }

    #[test]
    fn test_new_rejects_bad_region() {
        let config = OpsWorksConfig {
            region: "us east 1".into(),
            profile: None,
        };
        assert!(matches!(
            OpsWorksSettings::new(config),
            Err(Error::InvalidRegion { .. })
        ));
    }
}
