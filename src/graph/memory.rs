use async_trait::async_trait;
use std::path::Path;
use std::sync::Mutex;

use super::model::ResultRow;
use super::source::GraphSource;
use crate::error::Result;

/// A fixed set of rows served for any query.
///
/// Used to render previously exported results without a database and as a
/// test double. Every query it receives is recorded.
#[derive(Debug, Default)]
pub struct MemorySource {
    rows: Vec<ResultRow>,
    queries: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self {
            rows,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Load rows from a JSON array of result rows
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let rows: Vec<ResultRow> = serde_json::from_str(&content)?;
        Ok(Self::new(rows))
    }

    /// Queries received so far, in order
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GraphSource for MemorySource {
    async fn fetch_rows(&self, cypher: &str) -> Result<Vec<ResultRow>> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(cypher.to_string());
        }
        Ok(self.rows.clone())
    }
}
