use collabpath_core::{QueryOutcome, QueryResult};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::script::Query;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: Query,
    pub result: QueryOutcome,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub artists_explored: usize,
}

pub fn create_json_output(query: &Query, result: &QueryResult) -> JsonOutput {
    JsonOutput {
        query: query.clone(),
        result: result.outcome.clone(),
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            artists_explored: result.artists_visited,
        },
    }
}

/// Writes `json_output` as a single line.
pub fn write_json_output<W: Write>(out: &mut W, json_output: &JsonOutput) -> io::Result<()> {
    serde_json::to_writer(&mut *out, json_output)?;
    writeln!(out)
}
