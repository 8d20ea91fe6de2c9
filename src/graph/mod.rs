pub mod memory;
pub mod model;
pub mod neo4j;
pub mod source;

pub use memory::MemorySource;
pub use model::{ResultRow, SourceNode, SourceRelationship};
pub use neo4j::Neo4jClient;
pub use source::GraphSource;
