//! Record abstraction
//!
//! The processor only needs attribute access; content is carried through
//! untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A record flowing through the host with string attributes.
pub trait Record {
    /// Stable identifier used in logs
    fn id(&self) -> &str;

    /// Attribute value, if set
    fn attribute(&self, key: &str) -> Option<&str>;

    /// Set or replace an attribute
    fn put_attribute(&mut self, key: &str, value: String);
}

/// In-memory record: attributes plus opaque content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRecord {
    pub id: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub content: Vec<u8>,
}

impl FlowRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.content = content.into();
        self
    }
}

impl Record for FlowRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    fn put_attribute(&mut self, key: &str, value: String) {
        self.attributes.insert(key.to_string(), value);
    }
}
