//! Connection settings for the OpsWorks backend

use crate::{Error, Result};

/// Region used when none is configured
pub const DEFAULT_REGION: &str = "us-east-1";

/// Where and as whom to reach OpsWorks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpsWorksConfig {
    /// AWS region of the OpsWorks endpoint
    pub region: String,
    /// Named profile from the shared AWS config files
    pub profile: Option<String>,
}

impl Default for OpsWorksConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            profile: None,
        }
    }
}

impl OpsWorksConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Region names are lowercase ASCII letters, digits and dashes.
    pub fn validate(&self) -> Result<()> {
        let valid = !self.region.is_empty()
            && self
                .region
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if valid {
            Ok(())
        } else {
            Err(Error::InvalidRegion {
                region: self.region.clone(),
            })
        }
    }
}
