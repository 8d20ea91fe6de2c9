use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::error::{Result, VizError};
use crate::graph::model::{ResultRow, SourceNode};
use crate::style::{CROSS_LAYER_EDGE, SAME_LAYER_EDGE};

/// Property shown as the node caption
const LABEL_PROPERTY: &str = "name";

/// A vis.js node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisNode {
    pub id: String,
    pub label: String,
    pub group: String,
    /// Hover text: the node's properties
    pub title: String,
}

impl VisNode {
    pub fn from_source(node: &SourceNode) -> Result<Self> {
        let group = node.primary_label()?.to_string();
        let id = node.reference_id()?.to_string();
        let label = match node.properties.get(LABEL_PROPERTY) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        Ok(Self {
            id,
            label,
            group,
            title: format_title(&node.properties),
        })
    }

    /// Text before the first space of the group (`Model Element` -> `Model`)
    pub fn layer(&self) -> &str {
        self.group.split(' ').next().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFont {
    pub color: String,
}

/// A vis.js edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisEdge {
    pub from: String,
    pub to: String,
    pub label: String,
    pub physics: bool,
    pub color: String,
    pub font: EdgeFont,
}

/// Nodes and edges ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisGraph {
    pub nodes: Vec<VisNode>,
    pub edges: Vec<VisEdge>,
}

/// Whether an edge stays within one layer.
///
/// `Element -> Connection` counts as the same layer.
pub fn same_layer(source_layer: &str, target_layer: &str) -> bool {
    source_layer == target_layer || (source_layer == "Element" && target_layer == "Connection")
}

/// Scan result rows into deduplicated nodes and per-relationship edges.
///
/// With `relax_cross_layer` set, edges between layers are excluded from the
/// physics simulation.
pub fn shape_rows(rows: &[ResultRow], relax_cross_layer: bool) -> Result<VisGraph> {
    let mut graph = VisGraph::default();
    let mut seen: HashSet<VisNode> = HashSet::new();

    let mut push_node = |graph: &mut VisGraph, node: &VisNode| {
        if seen.insert(node.clone()) {
            graph.nodes.push(node.clone());
        }
    };

    for row in rows {
        let source = VisNode::from_source(&row.source)?;
        push_node(&mut graph, &source);

        let Some(relationship) = &row.relationship else {
            continue;
        };
        let target_node = row.target.as_ref().ok_or_else(|| {
            VizError::MalformedRow(format!(
                "relationship {} from {} has no target node",
                relationship.rel_type, row.source.reference
            ))
        })?;

        let target = VisNode::from_source(target_node)?;
        push_node(&mut graph, &target);

        let (color, physics) = if same_layer(source.layer(), target.layer()) {
            (SAME_LAYER_EDGE, true)
        } else {
            (CROSS_LAYER_EDGE, !relax_cross_layer)
        };

        graph.edges.push(VisEdge {
            from: source.id,
            to: target.id,
            label: relationship.rel_type.clone(),
            physics,
            color: color.to_string(),
            font: EdgeFont {
                color: color.to_string(),
            },
        });
    }

    Ok(graph)
}

/// Render properties as `{'key': value, ...}` with string values quoted
fn format_title(properties: &BTreeMap<String, serde_json::Value>) -> String {
    let entries: Vec<String> = properties
        .iter()
        .map(|(key, value)| format!("{}: {}", quote(key), format_value(value)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => quote(s),
        other => other.to_string(),
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::SourceRelationship;

    fn node(id: u32, label: &str, name: &str) -> SourceNode {
        SourceNode::new(format!("node/{id}"))
            .with_label(label)
            .with_property("name", name)
    }

    fn link(source: SourceNode, target: SourceNode) -> ResultRow {
        ResultRow::linked(source, SourceRelationship::new("HAS"), target)
    }

    #[test]
    fn test_rows_without_relationships_yield_no_edges() {
        let rows = vec![
            ResultRow::lone(node(1, "Element", "a")),
            ResultRow::lone(node(2, "Element", "b")),
            ResultRow::lone(node(1, "Element", "a")),
        ];
        let graph = shape_rows(&rows, false).unwrap();
        assert!(graph.edges.is_empty());
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].id, "1");
        assert_eq!(graph.nodes[1].id, "2");
    }

    #[test]
    fn test_dedup_is_by_full_record() {
        // Same id, different properties: two distinct records
        let rows = vec![
            ResultRow::lone(node(1, "Element", "a")),
            ResultRow::lone(node(1, "Element", "renamed")),
        ];
        let graph = shape_rows(&rows, false).unwrap();
        assert_eq!(graph.nodes.len(), 2);
    }

    #[test]
    fn test_target_already_seen_is_not_duplicated() {
        let a = node(1, "Model Element", "a");
        let b = node(2, "Model Element", "b");
        let rows = vec![
            link(a.clone(), b.clone()),
            ResultRow::lone(b.clone()),
            link(b.clone(), a.clone()),
        ];
        let graph = shape_rows(&rows, false).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 2);
    }

    #[test]
    fn test_edges_are_not_deduplicated() {
        let a = node(1, "Model Element", "a");
        let b = node(2, "Model Element", "b");
        let rows = vec![link(a.clone(), b.clone()), link(a, b)];
        let graph = shape_rows(&rows, false).unwrap();
        assert_eq!(graph.edges.len(), 2);
    }

    #[test]
    fn test_same_layer_by_first_word() {
        let rows = vec![link(
            node(1, "Model Element", "a"),
            node(2, "Model Connection", "b"),
        )];
        let edge = &shape_rows(&rows, true).unwrap().edges[0];
        assert_eq!(edge.color, "#333333");
        assert_eq!(edge.font.color, "#333333");
        assert!(edge.physics);
    }

    #[test]
    fn test_element_to_connection_is_same_layer() {
        let rows = vec![link(node(1, "Element", "a"), node(2, "Connection", "b"))];
        let edge = &shape_rows(&rows, true).unwrap().edges[0];
        assert_eq!(edge.color, SAME_LAYER_EDGE);
        assert!(edge.physics);
    }

    #[test]
    fn test_connection_to_element_is_cross_layer() {
        let rows = vec![link(node(1, "Connection", "a"), node(2, "Element", "b"))];
        let edge = &shape_rows(&rows, false).unwrap().edges[0];
        assert_eq!(edge.color, CROSS_LAYER_EDGE);
        assert!(edge.physics);
    }

    #[test]
    fn test_cross_layer_relaxed() {
        let rows = vec![link(
            node(1, "Instance Element", "a"),
            node(2, "Model Connection", "b"),
        )];
        let relaxed = &shape_rows(&rows, true).unwrap().edges[0];
        assert_eq!(relaxed.color, "#dddddd");
        assert!(!relaxed.physics);

        let strict = &shape_rows(&rows, false).unwrap().edges[0];
        assert_eq!(strict.color, "#dddddd");
        assert!(strict.physics);
    }

    #[test]
    fn test_one_linked_row() {
        let rows = vec![link(
            node(1, "Metamodel Element", "X"),
            node(2, "Metamodel Connection", "Y"),
        )];
        let graph = shape_rows(&rows, false).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        let edge = &graph.edges[0];
        assert_eq!(edge.from, "1");
        assert_eq!(edge.to, "2");
        assert_eq!(edge.label, "HAS");
        assert_eq!(edge.color, "#333333");
        assert!(edge.physics);
    }

    #[test]
    fn test_node_record_fields() {
        let source = SourceNode::new("node/9")
            .with_label("Model Element")
            .with_label("Element")
            .with_property("name", "Pump")
            .with_property("rating", 3);
        let vis = VisNode::from_source(&source).unwrap();
        assert_eq!(vis.id, "9");
        assert_eq!(vis.label, "Pump");
        assert_eq!(vis.group, "Model Element");
        assert_eq!(vis.title, "{'name': 'Pump', 'rating': 3}");
        assert_eq!(vis.layer(), "Model");
    }

    #[test]
    fn test_missing_name_gives_empty_label() {
        let source = SourceNode::new("node/3").with_label("Element");
        let vis = VisNode::from_source(&source).unwrap();
        assert_eq!(vis.label, "");
        assert_eq!(vis.title, "{}");
        assert_eq!(vis.layer(), "Element");
    }

    #[test]
    fn test_title_escapes_quotes() {
        let source = SourceNode::new("node/3")
            .with_label("Element")
            .with_property("name", "O'Brien");
        let vis = VisNode::from_source(&source).unwrap();
        assert_eq!(vis.title, r"{'name': 'O\'Brien'}");
    }

    #[test]
    fn test_unlabelled_node_fails() {
        let rows = vec![ResultRow::lone(SourceNode::new("node/1"))];
        let err = shape_rows(&rows, false).unwrap_err();
        assert!(matches!(err, VizError::MissingLabel { reference } if reference == "node/1"));
    }

    #[test]
    fn test_relationship_without_target_fails() {
        let rows = vec![ResultRow {
            source: node(1, "Element", "a"),
            relationship: Some(SourceRelationship::new("HAS")),
            target: None,
        }];
        assert!(matches!(
            shape_rows(&rows, false),
            Err(VizError::MalformedRow(_))
        ));
    }

    #[test]
    fn test_edge_serializes_with_vis_keys() {
        let rows = vec![link(node(1, "Element", "a"), node(2, "Connection", "b"))];
        let graph = shape_rows(&rows, false).unwrap();
        let value = serde_json::to_value(&graph.edges[0]).unwrap();
        assert_eq!(value["from"], "1");
        assert_eq!(value["to"], "2");
        assert_eq!(value["font"]["color"], "#333333");
        assert_eq!(value["physics"], true);
    }
}
