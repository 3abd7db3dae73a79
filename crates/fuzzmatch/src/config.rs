//! Processor configuration
//!
//! Property values keyed by their display names, as the host stores them.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::properties::{self, PropertyDescriptor, DEFAULT_MATCH_TYPE, DEFAULT_THRESHOLD};

/// Configured property values for one processor instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    #[serde(rename = "Match Type", alias = "match_type", default = "default_match_type")]
    pub match_type: String,

    #[serde(rename = "Match Threshold", alias = "match_threshold", default = "default_threshold")]
    pub match_threshold: String,

    #[serde(rename = "Match Against", alias = "match_against", default)]
    pub match_against: Option<String>,

    #[serde(rename = "Match Input", alias = "match_input", default)]
    pub match_input: Option<String>,
}

fn default_match_type() -> String {
    DEFAULT_MATCH_TYPE.to_string()
}

fn default_threshold() -> String {
    DEFAULT_THRESHOLD.to_string()
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            match_type: default_match_type(),
            match_threshold: default_threshold(),
            match_against: None,
            match_input: None,
        }
    }
}

impl ProcessorConfig {
    /// Config with default match type and threshold
    pub fn new(match_input: impl Into<String>, match_against: impl Into<String>) -> Self {
        Self {
            match_input: Some(match_input.into()),
            match_against: Some(match_against.into()),
            ..Default::default()
        }
    }

    pub fn with_match_type(mut self, match_type: impl Into<String>) -> Self {
        self.match_type = match_type.into();
        self
    }

    pub fn with_threshold(mut self, threshold: impl Into<String>) -> Self {
        self.match_threshold = threshold.into();
        self
    }

    /// Parse from a JSON property map and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configured value for a property
    pub fn value(&self, descriptor: &PropertyDescriptor) -> Option<&str> {
        match descriptor.name {
            n if n == properties::MATCH_TYPE.name => Some(self.match_type.as_str()),
            n if n == properties::MATCH_THRESHOLD.name => Some(self.match_threshold.as_str()),
            n if n == properties::MATCH_AGAINST.name => self.match_against.as_deref(),
            n if n == properties::MATCH_INPUT.name => self.match_input.as_deref(),
            _ => None,
        }
    }

    /// Validate every property's literal value
    pub fn validate(&self) -> Result<()> {
        properties::ALL
            .iter()
            .try_for_each(|descriptor| descriptor.validate(self.value(descriptor)))
    }
}
