use collabpath::colors::ColorScheme;
use collabpath::{CollabPathApp, OutputFormat, RunOptions};
use collabpath_core::{Artist, build_graph};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn chain_app(format: OutputFormat) -> CollabPathApp {
    let artists = vec![
        Artist::with_songs("A", ["S1"]),
        Artist::with_songs("B", ["S1", "S2"]),
        Artist::with_songs("C", ["S2"]),
    ];
    let options = RunOptions {
        format,
        verbose: false,
    };
    CollabPathApp::new(build_graph(&artists).unwrap(), options, ColorScheme::new(false))
}

fn run_script(app: &mut CollabPathApp, script: &str) -> String {
    let mut output = Vec::new();
    app.run(Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_bfs_chain_scenario() {
    let mut app = chain_app(OutputFormat::Text);

    assert_eq!(
        run_script(&mut app, "bfs\nA\nC\n"),
        "\"A\" collaborated with \"B\" in \"S1\".\n\
         \"B\" collaborated with \"C\" in \"S2\".\n\
         ***\n"
    );
}

#[test]
fn test_missing_artist_scenario() {
    let mut app = chain_app(OutputFormat::Text);

    assert_eq!(
        run_script(&mut app, "bfs\nA\nZ\n"),
        "\"Z\" was not found in the dataset :(\n"
    );
}

#[test]
fn test_exclusion_scenario() {
    let mut app = chain_app(OutputFormat::Text);

    assert_eq!(
        run_script(&mut app, "not\nA\nC\nB\n*\n"),
        "A path does not exist between \"A\" and \"C\".\n***\n"
    );
}

#[test]
fn test_unrecognized_then_query() {
    let mut app = chain_app(OutputFormat::Text);

    assert_eq!(
        run_script(&mut app, "hello\ndfs\nC\nB\n"),
        "hello is not a command. Please try again.\n\
         \"C\" collaborated with \"B\" in \"S2\".\n\
         ***\n"
    );
}

#[test]
fn test_quit_stops_processing() {
    let mut app = chain_app(OutputFormat::Text);
    let mut output = Vec::new();

    let summary = app
        .run(Cursor::new("bfs\nA\nB\nquit\nbfs\nA\nC\n"), &mut output)
        .unwrap();

    assert_eq!(summary.queries, 1);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "\"A\" collaborated with \"B\" in \"S1\".\n***\n"
    );
}

#[test]
fn test_unfinished_query_is_dropped() {
    let mut app = chain_app(OutputFormat::Text);
    let mut output = Vec::new();

    let summary = app.run(Cursor::new("not\nA\nC\nB\n"), &mut output).unwrap();

    assert_eq!(summary.queries, 0);
    assert!(output.is_empty());
}

#[test]
fn test_summary_counts() {
    let mut app = chain_app(OutputFormat::Text);
    let mut output = Vec::new();

    let summary = app
        .run(Cursor::new("bfs\nA\nC\nnot\nA\nC\nB\n*\nbfs\nA\nQ\n"), &mut output)
        .unwrap();

    assert_eq!(summary.queries, 3);
    assert_eq!(summary.paths_found, 1);
}

#[test]
fn test_json_format_emits_one_line_per_query() {
    let mut app = chain_app(OutputFormat::Json);
    let output = run_script(&mut app, "bfs\nA\nC\nnot\nA\nC\nB\n*\n");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["query"]["kind"], "bfs");
    assert_eq!(first["result"]["status"], "found");
    assert_eq!(first["result"]["steps"][1]["song"], "S2");

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["query"]["excluded"][0], "B");
    assert_eq!(second["result"]["status"], "no_path");
}

#[test]
fn test_load_from_dataset_file() {
    let mut dataset = NamedTempFile::new().unwrap();
    write!(dataset, "A\nS1\n*\nB\nS1\nS2\n*\nC\nS2\n*\n").unwrap();
    dataset.flush().unwrap();

    let mut app = CollabPathApp::load(dataset.path(), RunOptions::default(), ColorScheme::new(false)).unwrap();

    assert_eq!(app.graph().len(), 3);
    assert!(run_script(&mut app, "bfs\nC\nA\n").ends_with("***\n"));
}

#[test]
fn test_latin1_names_match_between_dataset_and_script() {
    let mut dataset = NamedTempFile::new().unwrap();
    dataset.write_all(b"Beyonc\xe9\nS1\n*\nJay\nS1\n*\n").unwrap();
    dataset.flush().unwrap();

    let mut app = CollabPathApp::load(dataset.path(), RunOptions::default(), ColorScheme::new(false)).unwrap();
    let mut output = Vec::new();
    let summary = app
        .run(Cursor::new(&b"bfs\nJay\nBeyonc\xe9\nbfs\nBeyonc\xe9\nJay\n"[..]), &mut output)
        .unwrap();

    assert_eq!(summary.queries, 2);
    assert_eq!(summary.paths_found, 2);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "\"Jay\" collaborated with \"Beyonc\u{FFFD}\" in \"S1\".\n***\n\
         \"Beyonc\u{FFFD}\" collaborated with \"Jay\" in \"S1\".\n***\n"
    );
}

#[test]
fn test_load_missing_dataset_fails() {
    let directory = tempfile::tempdir().unwrap();
    let result = CollabPathApp::load(
        &directory.path().join("nope.txt"),
        RunOptions::default(),
        ColorScheme::new(false),
    );

    assert!(result.is_err());
}
