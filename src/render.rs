use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::shape::VisGraph;
use crate::style::LAYER_GROUPS;

const FILE_PREFIX: &str = "graph-";
const FILE_EXTENSION: &str = "html";

/// A written figure, embeddable as an `<iframe>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    pub id: Uuid,
    pub path: PathBuf,
    pub width: String,
    pub height: u32,
}

impl Figure {
    /// Markup for embedding the figure in a notebook or page
    pub fn iframe(&self) -> String {
        format!(
            r#"<iframe src="{}" width="{}" height="{}" frameborder="0"></iframe>"#,
            escape_attr(&self.path.to_string_lossy()),
            escape_attr(&self.width),
            self.height
        )
    }

    /// Delete the figure's file
    pub fn remove(self) -> Result<()> {
        fs::remove_file(&self.path)?;
        Ok(())
    }
}

/// File name for a figure id
pub fn figure_file_name(id: &Uuid) -> String {
    format!("{FILE_PREFIX}{id}.{FILE_EXTENSION}")
}

/// Write `graph` as a standalone HTML page under `output.dir`.
///
/// Every call creates a new file named after a fresh UUID; the directory is
/// created when missing.
pub fn write_figure(graph: &VisGraph, physics: bool, output: &OutputConfig) -> Result<Figure> {
    let id = Uuid::new_v4();
    let html = render_html(&id, graph, physics, &output.assets)?;

    fs::create_dir_all(&output.dir)?;
    let path = output.dir.join(figure_file_name(&id));
    fs::write(&path, html)?;

    info!(
        path = %path.display(),
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "wrote figure"
    );

    Ok(Figure {
        id,
        path,
        width: output.width.clone(),
        height: output.height,
    })
}

/// Remove every figure file in `dir`, returning how many were deleted
pub fn clean_figures(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if is_figure_file(&path) {
            debug!(path = %path.display(), "removing figure");
            fs::remove_file(&path)?;
            removed += 1;
        }
    }

    Ok(removed)
}

fn is_figure_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.strip_prefix(FILE_PREFIX)
        .and_then(|rest| rest.strip_suffix(&format!(".{FILE_EXTENSION}")))
        .is_some_and(|id| Uuid::parse_str(id).is_ok())
}

/// Build the HTML document for a figure
pub fn render_html(id: &Uuid, graph: &VisGraph, physics: bool, assets: &str) -> Result<String> {
    let assets = escape_attr(assets);

    let html = format!(
        r#"<html>
<head>
  <meta charset="utf-8">
  <script type="text/javascript" src="{assets}/vis.js"></script>
  <link href="{assets}/vis.css" rel="stylesheet" type="text/css">
</head>
<body>

<div id="{id}"></div>

<script type="text/javascript">
  var nodes = {nodes};
  var groups = {groups};
  var edges = {edges};
  var physics = {physics};

  var container = document.getElementById("{id}");

  var data = {{
    nodes: nodes,
    edges: edges
  }};

  var options = {{
    nodes: {{
      shape: 'dot',
      size: 25,
      font: {{
        size: 14
      }}
    }},
    groups: groups,
    edges: {{
      font: {{
        size: 14,
        align: 'middle'
      }},
      arrows: {{
        to: {{enabled: true, scaleFactor: 2}}
      }},
      smooth: {{enabled: false}}
    }},
    physics: {{
      enabled: physics
    }}
  }};

  var network = new vis.Network(container, data, options);
</script>
</body>
</html>
"#,
        nodes = script_json(&graph.nodes)?,
        groups = script_json(&LAYER_GROUPS)?,
        edges = script_json(&graph.edges)?,
        physics = script_json(&physics)?,
    );

    Ok(html)
}

/// JSON safe to inline in a `<script>` element
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
