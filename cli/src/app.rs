use collabpath_core::{CollabGraph, CollabSearch, QueryResult, load_graph, write_outcome};
use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::Path,
    time::Instant,
};
use tracing::{debug, warn};

use crate::colors::ColorScheme;
use crate::display::{
    display_dataset_info, display_query_info, display_query_statistics, display_unrecognized,
};
use crate::json_output::{create_json_output, write_json_output};
use crate::script::{Command, Query, QueryKind, ScriptParser};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub format: OutputFormat,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub queries: usize,
    pub paths_found: usize,
    pub artists_visited: usize,
    pub search_duration: f64,
}

impl RunSummary {
    fn record(&mut self, result: &QueryResult) {
        self.queries += 1;
        if result.outcome.is_found() {
            self.paths_found += 1;
        }
        self.artists_visited += result.artists_visited;
        self.search_duration += result.search_duration;
    }
}

pub struct CollabPathApp {
    search: CollabSearch,
    options: RunOptions,
    colors: ColorScheme,
}

impl CollabPathApp {
    pub fn new(graph: CollabGraph, options: RunOptions, colors: ColorScheme) -> Self {
        Self {
            search: CollabSearch::new(graph),
            options,
            colors,
        }
    }

    pub fn load(dataset_path: &Path, options: RunOptions, colors: ColorScheme) -> Result<Self, Box<dyn Error>> {
        let load_timer = Instant::now();
        let graph = load_graph(dataset_path)
            .map_err(|e| format!("could not load dataset {}: {}", dataset_path.display(), e))?;

        if options.verbose {
            display_dataset_info(&graph, load_timer.elapsed().as_secs_f64(), &colors);
        }

        Ok(Self::new(graph, options, colors))
    }

    pub fn graph(&self) -> &CollabGraph {
        self.search.graph()
    }

    pub fn run_query(&mut self, query: &Query) -> QueryResult {
        match query.kind {
            QueryKind::Bfs => self.search.bfs(&query.from, &query.to),
            QueryKind::Dfs => self.search.dfs(&query.from, &query.to),
            QueryKind::Not => self.search.exclusion(&query.from, &query.to, &query.excluded),
        }
    }

    /// Runs every command read from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<RunSummary> {
        let mut parser = ScriptParser::new();
        let mut summary = RunSummary::default();

        // Decoded leniently, like the dataset, so a name resolves the same way in both.
        for line in input.split(b'\n') {
            let line = line?;
            let Some(command) = parser.feed(&String::from_utf8_lossy(&line)) else {
                continue;
            };

            match command {
                Command::Quit => {
                    debug!("quit command received");
                    return Ok(summary);
                }
                Command::Unrecognized(line) => self.write_unrecognized(&line, out)?,
                Command::Query(query) => {
                    if self.options.verbose {
                        display_query_info(&query, &self.colors);
                    }

                    let result = self.run_query(&query);
                    summary.record(&result);
                    self.write_result(&query, &result, out)?;

                    if self.options.verbose {
                        display_query_statistics(&result, &self.colors);
                    }
                }
            }
        }

        if parser.has_pending_query() {
            warn!("input ended in the middle of a query; it was not run");
        }
        Ok(summary)
    }

    fn write_result<W: Write>(&self, query: &Query, result: &QueryResult, out: &mut W) -> io::Result<()> {
        match self.options.format {
            OutputFormat::Text => write_outcome(out, &result.outcome),
            OutputFormat::Json => write_json_output(out, &create_json_output(query, result)),
        }
    }

    fn write_unrecognized<W: Write>(&self, line: &str, out: &mut W) -> io::Result<()> {
        match self.options.format {
            OutputFormat::Text => writeln!(out, "{} is not a command. Please try again.", line),
            OutputFormat::Json => {
                display_unrecognized(line, &self.colors);
                Ok(())
            }
        }
    }
}
