use async_trait::async_trait;
use neo4rs::{ConfigBuilder, Graph, Node, Relation, Row, query};
use std::collections::BTreeMap;
use tracing::debug;

use super::model::{ResultRow, SourceNode, SourceRelationship};
use super::source::GraphSource;
use crate::config::Neo4jConfig;
use crate::error::{Result, VizError};

/// Neo4j client serving draw queries
pub struct Neo4jClient {
    graph: Graph,
}

impl Neo4jClient {
    /// Create a new Neo4j client
    pub async fn new(config: &Neo4jConfig) -> Result<Self> {
        let mut builder = ConfigBuilder::default()
            .uri(config.uri.as_str())
            .user(config.user.as_str())
            .password(config.password.as_str());
        if let Some(database) = &config.database {
            builder = builder.db(database.as_str());
        }
        let neo4j_config = builder
            .build()
            .map_err(|e| VizError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo4j_config)
            .await
            .map_err(|e| VizError::Connection(format!("{e}. Is Neo4j running at {}?", config.uri)))?;

        Ok(Self { graph })
    }
}

#[async_trait]
impl GraphSource for Neo4jClient {
    async fn fetch_rows(&self, cypher: &str) -> Result<Vec<ResultRow>> {
        debug!(cypher, "executing draw query");

        let mut result = self
            .graph
            .execute(query(cypher))
            .await
            .map_err(|e| VizError::Query(e.to_string()))?;

        let mut rows = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| VizError::Query(e.to_string()))?
        {
            rows.push(convert_row(&row)?);
        }

        Ok(rows)
    }
}

/// Convert an `(n, r, m)` row into typed records
fn convert_row(row: &Row) -> Result<ResultRow> {
    let source: Node = row
        .get("n")
        .map_err(|e| VizError::MalformedRow(format!("column n: {e}")))?;
    let relationship: Option<Relation> = row
        .get("r")
        .map_err(|e| VizError::MalformedRow(format!("column r: {e}")))?;
    let target: Option<Node> = row
        .get("m")
        .map_err(|e| VizError::MalformedRow(format!("column m: {e}")))?;

    Ok(ResultRow {
        source: convert_node(&source),
        relationship: relationship.map(|r| SourceRelationship::new(r.typ())),
        target: target.as_ref().map(convert_node),
    })
}

fn convert_node(node: &Node) -> SourceNode {
    let properties: BTreeMap<String, serde_json::Value> = node
        .keys()
        .into_iter()
        .map(|key| {
            let value = node
                .get::<serde_json::Value>(key)
                .unwrap_or(serde_json::Value::Null);
            (key.to_string(), value)
        })
        .collect();

    SourceNode {
        reference: node_reference(node.id()),
        labels: node.labels().into_iter().map(str::to_string).collect(),
        properties,
    }
}

/// Reference string for a Neo4j internal node id
fn node_reference(id: i64) -> String {
    format!("node/{id}")
}
