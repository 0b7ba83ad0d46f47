use super::{chain_search, route, square_search};
use collabpath_core::{Artist, CollabGraph, CollabSearch, QueryOutcome};

#[test]
fn test_dfs_follows_neighbor_order() {
    let mut search = square_search();
    let result = search.dfs("A", "D");

    match result.outcome {
        QueryOutcome::Found { steps } => {
            let songs: Vec<&str> = steps.iter().map(|step| step.song.as_str()).collect();
            assert_eq!(songs, vec!["s1", "s2", "s3"]);
        }
        other => panic!("Expected Found, got {other:?}"),
    }
}

#[test]
fn test_dfs_chain() {
    let mut search = chain_search();
    let result = search.dfs("C", "A");

    assert_eq!(
        route(&result.outcome),
        Some(vec!["C".to_string(), "B".to_string(), "A".to_string()])
    );
}

#[test]
fn test_dfs_no_path_and_unknown() {
    let mut search = square_search();

    assert_eq!(
        search.dfs("E", "A").outcome,
        QueryOutcome::NoPath {
            from: "E".to_string(),
            to: "A".to_string()
        }
    );
    assert_eq!(
        search.dfs("A", "Nobody").outcome,
        QueryOutcome::NotFound {
            missing: vec!["Nobody".to_string()]
        }
    );
}

#[test]
fn test_dfs_same_artist() {
    let mut search = chain_search();
    assert_eq!(search.dfs("A", "A").outcome, QueryOutcome::Found { steps: vec![] });
}

#[test]
fn test_dfs_long_chain_does_not_recurse() {
    let length = 100_000;
    let mut graph = CollabGraph::with_capacity(length);
    for i in 0..length {
        graph.insert_vertex(&Artist::new(format!("artist-{i}"))).unwrap();
    }
    for i in 1..length {
        graph
            .insert_edge(&format!("artist-{}", i - 1), &format!("artist-{i}"), &format!("song-{i}"))
            .unwrap();
    }

    let mut search = CollabSearch::new(graph);
    let result = search.dfs("artist-0", &format!("artist-{}", length - 1));

    match result.outcome {
        QueryOutcome::Found { steps } => assert_eq!(steps.len(), length - 1),
        other => panic!("Expected Found, got {other:?}"),
    }
    assert_eq!(result.artists_visited, length);
}
