//! Cypher for the draw query.
//!
//! The query matches every node (or every node carrying one of the requested
//! labels), optionally follows one outgoing relationship, and returns
//! `n, r, m` rows.

/// Build the draw query for an optional label filter and row limit.
///
/// A limit of zero means no limit.
pub fn draw_query(labels: &[String], limit: Option<usize>) -> String {
    let mut cypher = String::from("MATCH (n)\n");

    if !labels.is_empty() {
        let predicates: Vec<String> = labels
            .iter()
            .map(|label| format!("n:{}", quote_label(label)))
            .collect();
        cypher.push_str(&format!("WHERE {}\n", predicates.join(" OR ")));
    }

    cypher.push_str("OPTIONAL MATCH (n)-[r]->(m)\n");
    cypher.push_str("RETURN n, r, m");

    if let Some(limit) = limit.filter(|&l| l > 0) {
        cypher.push_str(&format!("\nLIMIT {limit}"));
    }

    cypher
}

/// Backtick-quote a label, doubling embedded backticks
fn quote_label(label: &str) -> String {
    format!("`{}`", label.replace('`', "``"))
}
