use console::style;

use cypherviz::query::draw_query;

pub fn run(labels: &[String], limit: Option<usize>) {
    println!("{}", style("// cypher").dim());
    println!("{}", draw_query(labels, limit));
}
