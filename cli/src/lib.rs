pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod script;

// Re-export commonly used items
pub use app::{CollabPathApp, OutputFormat, RunOptions, RunSummary};
pub use args::Args;
pub use display::format_number;
pub use script::{Command, Query, QueryKind, ScriptParser, parse_script};
