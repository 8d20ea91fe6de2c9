use async_trait::async_trait;

use super::model::ResultRow;
use crate::error::Result;

/// Anything that can run a Cypher string returning `(n, r, m)` rows
#[async_trait]
pub trait GraphSource: Send + Sync {
    async fn fetch_rows(&self, cypher: &str) -> Result<Vec<ResultRow>>;
}
