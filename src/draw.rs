use tracing::{info, warn};

use crate::config::OutputConfig;
use crate::error::Result;
use crate::graph::source::GraphSource;
use crate::query::draw_query;
use crate::render::{Figure, write_figure};
use crate::shape::{VisGraph, shape_rows};

/// Options for [`draw`]
#[derive(Debug, Clone)]
pub struct DrawOptions {
    /// Only draw nodes carrying at least one of these labels
    pub labels: Vec<String>,
    /// Run the force-directed layout in the browser
    pub physics: bool,
    /// Exclude cross-layer edges from the layout
    pub relax_cross_layer: bool,
    pub limit: Option<usize>,
    pub output: OutputConfig,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            physics: true,
            relax_cross_layer: false,
            limit: None,
            output: OutputConfig::default(),
        }
    }
}

/// Query `source`, shape the rows and write them as a figure
pub async fn draw(source: &dyn GraphSource, options: &DrawOptions) -> Result<Figure> {
    let graph = fetch_graph(source, options).await?;
    write_figure(&graph, options.physics, &options.output)
}

/// Query `source` and shape the rows without writing anything
pub async fn fetch_graph(source: &dyn GraphSource, options: &DrawOptions) -> Result<VisGraph> {
    let cypher = draw_query(&options.labels, options.limit);
    let rows = source.fetch_rows(&cypher).await?;
    if rows.is_empty() {
        warn!("draw query returned no rows");
    }

    let graph = shape_rows(&rows, options.relax_cross_layer)?;
    info!(
        rows = rows.len(),
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "shaped query result"
    );

    Ok(graph)
}
