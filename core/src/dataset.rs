use crate::artist::Artist;
use crate::error::{DatasetError, GraphError};
use crate::graph::CollabGraph;
use memmap2::Mmap;
use rustc_hash::FxHashMap;
use std::{fs::File, path::Path};
use tracing::{info, warn};

const RECORD_TERMINATOR: &str = "*";

type SongIndex<'a> = FxHashMap<&'a str, Vec<usize>>;

pub fn open_memory_mapped_file(file_path: &Path) -> Result<Option<Mmap>, std::io::Error> {
    let file = File::open(file_path)?;
    if file.metadata()?.len() == 0 {
        return Ok(None);
    }
    unsafe { Mmap::map(&file) }.map(Some)
}

/// Reads artist records from a dataset file.
pub fn load_artists(dataset_path: &Path) -> Result<Vec<Artist>, DatasetError> {
    let artists = match open_memory_mapped_file(dataset_path)? {
        Some(data) => parse_artists(&String::from_utf8_lossy(&data)),
        None => Vec::new(),
    };
    Ok(artists)
}

/// Parses records of the form: artist name line, song lines, then a `*` line.
///
/// A trailing record without its `*` is still kept.
pub fn parse_artists(text: &str) -> Vec<Artist> {
    let mut artists = Vec::new();
    let mut current: Option<Artist> = None;

    for (line_number, line) in text.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line == RECORD_TERMINATOR {
            match current.take() {
                Some(artist) => artists.push(artist),
                None => warn!(line = line_number + 1, "skipping record with no artist name"),
            }
            continue;
        }

        match current.as_mut() {
            Some(artist) => artist.add_song(line),
            None => current = Some(Artist::new(line)),
        }
    }

    artists.extend(current);
    artists
}

/// Inserts every artist as a vertex, then one edge per collaborating pair.
///
/// Pairs are considered in dataset order and the edge label is the first
/// shared song in the earlier artist's list, so neighbor lists come out in
/// dataset order too.
pub fn build_graph(artists: &[Artist]) -> Result<CollabGraph, GraphError> {
    let mut graph = CollabGraph::with_capacity(artists.len());

    for artist in artists {
        graph.insert_vertex(artist)?;
    }
    insert_collaborations(&mut graph, artists)?;

    info!(
        artists = graph.len(),
        collaborations = graph.edge_count(),
        "built collaboration graph"
    );
    Ok(graph)
}

pub fn load_graph(dataset_path: &Path) -> Result<CollabGraph, DatasetError> {
    let artists = load_artists(dataset_path)?;
    Ok(build_graph(&artists)?)
}

fn insert_collaborations(graph: &mut CollabGraph, artists: &[Artist]) -> Result<(), GraphError> {
    let song_index = index_songs(artists);

    for (position, artist) in artists.iter().enumerate() {
        for partner in later_collaborators(position, artist, &song_index) {
            let other = &artists[partner];
            if other == artist {
                continue;
            }
            if let Some(song) = artist.collaboration_with(other) {
                graph.insert_edge(artist.name(), other.name(), song)?;
            }
        }
    }

    Ok(())
}

fn index_songs(artists: &[Artist]) -> SongIndex<'_> {
    let mut song_index: SongIndex = FxHashMap::default();

    for (position, artist) in artists.iter().enumerate() {
        for song in artist.songs().iter().filter(|song| !song.is_empty()) {
            let performers = song_index.entry(song.as_str()).or_default();
            if performers.last() != Some(&position) {
                performers.push(position);
            }
        }
    }

    song_index
}

fn later_collaborators(position: usize, artist: &Artist, song_index: &SongIndex) -> Vec<usize> {
    let mut partners: Vec<usize> = artist
        .songs()
        .iter()
        .filter_map(|song| song_index.get(song.as_str()))
        .flatten()
        .copied()
        .filter(|&partner| partner > position)
        .collect();

    partners.sort_unstable();
    partners.dedup();
    partners
}
