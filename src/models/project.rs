//! Project record
//!
//! The upstream project schema is undocumented, so a project is kept
//! as its identifier plus the untouched payload.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// An opaque project record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    /// Identifier the project was fetched with
    pub guid: String,
    pub raw: Value,
}

impl Project {
    /// Wrap one element of the API `data` array
    pub fn from_json(guid: impl Into<String>, value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::malformed("project record is not a JSON object"));
        }
        Ok(Self {
            guid: guid.into(),
            raw: value.clone(),
        })
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.guid)
    }
}
