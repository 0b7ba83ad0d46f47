use serde::{Deserialize, Serialize};
use std::fmt;

const QUIT: &str = "quit";
const EXCLUSIONS_END: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Bfs,
    Dfs,
    Not,
}

impl QueryKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "bfs" => Some(QueryKind::Bfs),
            "dfs" => Some(QueryKind::Dfs),
            "not" => Some(QueryKind::Not),
            _ => None,
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            QueryKind::Bfs => "bfs",
            QueryKind::Dfs => "dfs",
            QueryKind::Not => "not",
        };
        f.write_str(keyword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub kind: QueryKind,
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Query(Query),
    Quit,
    Unrecognized(String),
}

#[derive(Debug, Default)]
enum ParserState {
    #[default]
    Idle,
    AwaitingFrom(QueryKind),
    AwaitingTo {
        kind: QueryKind,
        from: String,
    },
    CollectingExclusions {
        from: String,
        to: String,
        excluded: Vec<String>,
    },
}

/// Turns script lines into commands.
///
/// `bfs`/`dfs` take two lines (from, to); `not` takes two lines and then
/// excluded artists until a `*` line. `quit` ends the script wherever it appears.
#[derive(Debug, Default)]
pub struct ScriptParser {
    state: ParserState,
}

impl ScriptParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line; returns a command once one is complete.
    pub fn feed(&mut self, line: &str) -> Option<Command> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line == QUIT {
            return Some(Command::Quit);
        }

        match std::mem::take(&mut self.state) {
            ParserState::Idle => match QueryKind::from_keyword(line) {
                Some(kind) => {
                    self.state = ParserState::AwaitingFrom(kind);
                    None
                }
                None => Some(Command::Unrecognized(line.to_string())),
            },
            ParserState::AwaitingFrom(kind) => {
                self.state = ParserState::AwaitingTo {
                    kind,
                    from: line.to_string(),
                };
                None
            }
            // A `*` destination also closes the exclusion list, leaving it empty.
            ParserState::AwaitingTo { kind, from } if line == EXCLUSIONS_END => {
                Some(Command::Query(Query {
                    kind,
                    from,
                    to: line.to_string(),
                    excluded: Vec::new(),
                }))
            }
            ParserState::AwaitingTo {
                kind: QueryKind::Not,
                from,
            } => {
                self.state = ParserState::CollectingExclusions {
                    from,
                    to: line.to_string(),
                    excluded: Vec::new(),
                };
                None
            }
            ParserState::AwaitingTo { kind, from } => Some(Command::Query(Query {
                kind,
                from,
                to: line.to_string(),
                excluded: Vec::new(),
            })),
            ParserState::CollectingExclusions { from, to, excluded } if line == EXCLUSIONS_END => {
                Some(Command::Query(Query {
                    kind: QueryKind::Not,
                    from,
                    to,
                    excluded,
                }))
            }
            ParserState::CollectingExclusions {
                from,
                to,
                mut excluded,
            } => {
                excluded.push(line.to_string());
                self.state = ParserState::CollectingExclusions { from, to, excluded };
                None
            }
        }
    }

    /// True while a query has been started but not completed.
    pub fn has_pending_query(&self) -> bool {
        !matches!(self.state, ParserState::Idle)
    }
}

/// Parses a whole script, stopping at `quit`.
pub fn parse_script<I, S>(lines: I) -> Vec<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = ScriptParser::new();
    let mut commands = Vec::new();

    for line in lines {
        match parser.feed(line.as_ref()) {
            Some(Command::Quit) => {
                commands.push(Command::Quit);
                break;
            }
            Some(command) => commands.push(command),
            None => {}
        }
    }

    commands
}
