//! Edge-list file parsing for the `bandmat` binary.
//!
//! The format is line-oriented and tolerant of whitespace or commas as
//! separators:
//!
//! ```text
//! nodes: A B C D
//! A B 1
//! B, C, 1
//! C D 1
//! # comments and blank lines are skipped
//! ```
//!
//! The optional `nodes:` line declares the ordered node list; edges whose
//! endpoints are not declared extend the node set in first-seen order.
//! Weights stay raw text here; the engine parses them during ingestion so a
//! malformed weight is reported against its edge.

use bandmat_store::EdgeInput;

/// Parsed contents of an edge-list file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeListFile {
    /// Node labels declared by the `nodes:` line, in order.
    pub labels: Vec<String>,
    /// Edge records in file order.
    pub edges: Vec<EdgeInput>,
}

/// Splits a record line into fields on whitespace and/or commas.
fn fields(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parses edge-list text into labels and edge records.
///
/// Returns a usage-level message naming the offending line on malformed
/// input; weight values are not validated here.
pub fn parse_edge_list(text: &str) -> Result<EdgeListFile, String> {
    let mut parsed = EdgeListFile::default();

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("nodes:") {
            if !parsed.labels.is_empty() {
                return Err(format!(
                    "line {}: duplicate 'nodes:' declaration",
                    line_no + 1
                ));
            }
            parsed.labels = fields(rest).iter().map(|s| s.to_string()).collect();
            continue;
        }

        match fields(line).as_slice() {
            [from, to, weight] => {
                parsed.edges.push(EdgeInput::new(*from, *to, *weight));
            }
            other => {
                return Err(format!(
                    "line {}: expected 'from to weight', found {} field(s)",
                    line_no + 1,
                    other.len()
                ));
            }
        }
    }

    Ok(parsed)
}
