use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, VizError};

/// A node as returned by the graph store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceNode {
    /// Store reference of the form `<kind>/<id>`
    pub reference: String,
    /// Labels in the order the store reported them
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl SourceNode {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            labels: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// The first label, used as the visualization group
    pub fn primary_label(&self) -> Result<&str> {
        self.labels
            .first()
            .map(String::as_str)
            .ok_or_else(|| VizError::MissingLabel {
                reference: self.reference.clone(),
            })
    }

    /// The id segment of the reference (`node/42` -> `42`)
    pub fn reference_id(&self) -> Result<&str> {
        let mut parts = self.reference.split('/');
        parts.next();
        match parts.next() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(VizError::MalformedReference(self.reference.clone())),
        }
    }
}

/// A relationship as returned by the graph store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRelationship {
    #[serde(rename = "type")]
    pub rel_type: String,
}

impl SourceRelationship {
    pub fn new(rel_type: impl Into<String>) -> Self {
        Self {
            rel_type: rel_type.into(),
        }
    }
}

/// One `(n, r, m)` row of the draw query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub source: SourceNode,
    #[serde(default)]
    pub relationship: Option<SourceRelationship>,
    #[serde(default)]
    pub target: Option<SourceNode>,
}

impl ResultRow {
    /// A row for a node without an outgoing relationship
    pub fn lone(source: SourceNode) -> Self {
        Self {
            source,
            relationship: None,
            target: None,
        }
    }

    pub fn linked(source: SourceNode, relationship: SourceRelationship, target: SourceNode) -> Self {
        Self {
            source,
            relationship: Some(relationship),
            target: Some(target),
        }
    }
}
