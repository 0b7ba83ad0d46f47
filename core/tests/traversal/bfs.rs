use super::{chain_search, render, route, square_search};
use collabpath_core::{PathStep, QueryOutcome};

#[test]
fn test_bfs_chain_renders_both_collaborations() {
    let mut search = chain_search();
    let result = search.bfs("A", "C");

    assert_eq!(
        render(&result.outcome),
        "\"A\" collaborated with \"B\" in \"S1\".\n\
         \"B\" collaborated with \"C\" in \"S2\".\n\
         ***\n"
    );
    assert_eq!(result.artists_visited, 3);
}

#[test]
fn test_bfs_unknown_destination() {
    let mut search = chain_search();
    let result = search.bfs("A", "Z");

    assert_eq!(
        result.outcome,
        QueryOutcome::NotFound {
            missing: vec!["Z".to_string()]
        }
    );
    assert_eq!(render(&result.outcome), "\"Z\" was not found in the dataset :(\n");
}

#[test]
fn test_bfs_reports_both_unknown_endpoints() {
    let mut search = chain_search();
    let result = search.bfs("Y", "Z");

    assert_eq!(
        result.outcome,
        QueryOutcome::NotFound {
            missing: vec!["Y".to_string(), "Z".to_string()]
        }
    );
}

#[test]
fn test_bfs_finds_shortest_path() {
    let mut search = square_search();
    let result = search.bfs("A", "D");

    assert_eq!(
        result.outcome,
        QueryOutcome::Found {
            steps: vec![PathStep {
                from: "A".to_string(),
                to: "D".to_string(),
                song: "s4".to_string(),
            }]
        }
    );
}

#[test]
fn test_bfs_unreachable_artist() {
    let mut search = square_search();
    let result = search.bfs("A", "E");

    assert_eq!(
        result.outcome,
        QueryOutcome::NoPath {
            from: "A".to_string(),
            to: "E".to_string()
        }
    );
    assert_eq!(result.artists_visited, 4);
    assert_eq!(
        render(&result.outcome),
        "A path does not exist between \"A\" and \"E\".\n***\n"
    );
}

#[test]
fn test_bfs_same_artist_is_empty_path() {
    let mut search = chain_search();
    let result = search.bfs("B", "B");

    assert_eq!(result.outcome, QueryOutcome::Found { steps: vec![] });
    assert_eq!(render(&result.outcome), "***\n");
}

#[test]
fn test_bfs_after_dfs_uses_fresh_metadata() {
    let mut search = square_search();

    let dfs_result = search.dfs("A", "D");
    assert_eq!(route(&dfs_result.outcome).map(|r| r.len()), Some(4));

    let bfs_result = search.bfs("A", "D");
    assert_eq!(
        route(&bfs_result.outcome),
        Some(vec!["A".to_string(), "D".to_string()])
    );
}

#[test]
fn test_bfs_never_longer_than_dfs() {
    let mut search = square_search();
    let names = ["A", "B", "C", "D", "E"];

    for from in names {
        for to in names {
            let bfs_route = route(&search.bfs(from, to).outcome);
            let dfs_route = route(&search.dfs(from, to).outcome);

            assert_eq!(bfs_route.is_some(), dfs_route.is_some(), "{from} -> {to}");
            if let (Some(bfs_route), Some(dfs_route)) = (bfs_route, dfs_route) {
                assert!(bfs_route.len() <= dfs_route.len(), "{from} -> {to}");
            }
        }
    }
}
