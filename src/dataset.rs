//! Edge list loading
//!
//! One record per line: two integer vertex identifiers separated by a tab or
//! other whitespace. Blank lines and lines starting with `#` are ignored.

use crate::error::PredictionResult;
use linkpred_algorithms::{EdgeList, GraphError, VertexId};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Read an edge list file into canonical (sorted, deduplicated) form
pub fn load_edge_list(path: impl AsRef<Path>) -> PredictionResult<EdgeList> {
    let path = path.as_ref();
    info!("Loading dataset from: {:?}", path);

    let file = File::open(path)?;
    let edges = parse_edge_list(BufReader::new(file))?;

    info!("Loaded {} edge records", edges.len());
    Ok(edges)
}

/// Parse edge records from any buffered reader
pub fn parse_edge_list<R: BufRead>(reader: R) -> PredictionResult<EdgeList> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            skipped += 1;
            continue;
        }
        records.push(parse_record(trimmed, line_no + 1)?);
    }

    debug!("Skipped {} comment or blank lines", skipped);
    Ok(EdgeList::from_records(records)?)
}

fn parse_record(line: &str, line_no: usize) -> Result<(VertexId, VertexId), GraphError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [source, target] = fields.as_slice() else {
        return Err(GraphError::MalformedDataset(format!(
            "line {}: expected 2 columns, found {}",
            line_no,
            fields.len()
        )));
    };

    let parse = |token: &str| {
        token.parse::<VertexId>().map_err(|_| {
            GraphError::MalformedDataset(format!(
                "line {}: '{}' is not a vertex identifier",
                line_no, token
            ))
        })
    };
    let (u, v) = (parse(*source)?, parse(*target)?);

    if u == v {
        return Err(GraphError::MalformedDataset(format!(
            "line {}: self-loop on vertex {}",
            line_no, u
        )));
    }
    Ok((u, v))
}
