use crate::artist::Artist;
use crate::error::GraphError;
use rustc_hash::FxHashMap;
use std::io::{self, Write};

/// Stable handle of a vertex in the graph's arena.
pub type VertexId = usize;

#[derive(Debug, Clone)]
struct Edge {
    neighbor: VertexId,
    song: String,
}

#[derive(Debug, Clone)]
struct Vertex {
    artist: Artist,
    neighbors: Vec<Edge>,
    // neighbor handle -> position in `neighbors`
    neighbor_positions: FxHashMap<VertexId, usize>,
    visited: bool,
    predecessor: Option<VertexId>,
}

impl Vertex {
    fn new(artist: Artist) -> Self {
        Self {
            artist,
            neighbors: Vec::new(),
            neighbor_positions: FxHashMap::default(),
            visited: false,
            predecessor: None,
        }
    }

    fn push_edge(&mut self, neighbor: VertexId, song: &str) {
        self.neighbor_positions.insert(neighbor, self.neighbors.len());
        self.neighbors.push(Edge {
            neighbor,
            song: song.to_string(),
        });
    }
}

/// Undirected collaboration graph: artists are vertices, shared songs are edges.
///
/// Vertices live in an arena and are addressed by name through an index.
/// Each vertex also carries traversal metadata (a visited flag and a
/// predecessor handle) which every traversal must reset with
/// [`CollabGraph::clear_metadata`] before use.
#[derive(Debug, Default)]
pub struct CollabGraph {
    vertices: Vec<Vertex>,
    index: FxHashMap<String, VertexId>,
    edge_count: usize,
}

impl CollabGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            index: FxHashMap::with_capacity_and_hasher(vertex_count, Default::default()),
            edge_count: 0,
        }
    }

    /// Adds `artist` as a vertex. Inserting a name that is already present is a no-op.
    pub fn insert_vertex(&mut self, artist: &Artist) -> Result<(), GraphError> {
        if artist.name().is_empty() {
            return Err(GraphError::InvalidArtist);
        }

        if !self.index.contains_key(artist.name()) {
            let id = self.vertices.len();
            self.index.insert(artist.name().to_string(), id);
            self.vertices.push(Vertex::new(artist.clone()));
        }

        Ok(())
    }

    /// Connects two existing vertices with `song`.
    ///
    /// The first label inserted between a pair wins; later insertions are ignored.
    pub fn insert_edge(&mut self, a1: &str, a2: &str, song: &str) -> Result<(), GraphError> {
        let first = self.require(a1)?;
        let second = self.require(a2)?;

        if song.is_empty() {
            return Err(GraphError::InvalidEdgeLabel);
        }
        if first == second {
            return Err(GraphError::SelfLoop(a1.to_string()));
        }
        if self.edge_label(first, second).is_some() {
            return Ok(());
        }

        self.vertices[first].push_edge(second, song);
        self.vertices[second].push_edge(first, song);
        self.edge_count += 1;
        Ok(())
    }

    pub fn mark_vertex(&mut self, artist: &str) -> Result<(), GraphError> {
        let id = self.require(artist)?;
        self.mark(id);
        Ok(())
    }

    pub fn unmark_vertex(&mut self, artist: &str) -> Result<(), GraphError> {
        let id = self.require(artist)?;
        self.vertices[id].visited = false;
        Ok(())
    }

    /// Records `from` as the vertex `to` was reached from, unless `to` already has one.
    pub fn set_predecessor(&mut self, to: &str, from: &str) -> Result<(), GraphError> {
        let to_id = self.require(to)?;
        let from_id = self.require(from)?;
        self.set_predecessor_at(to_id, from_id);
        Ok(())
    }

    pub fn clear_metadata(&mut self) {
        for vertex in &mut self.vertices {
            vertex.visited = false;
            vertex.predecessor = None;
        }
    }

    pub fn is_vertex(&self, artist: &str) -> bool {
        self.index.contains_key(artist)
    }

    pub fn is_marked(&self, artist: &str) -> Result<bool, GraphError> {
        let id = self.require(artist)?;
        Ok(self.is_marked_at(id))
    }

    pub fn get_predecessor(&self, artist: &str) -> Result<Option<&Artist>, GraphError> {
        let id = self.require(artist)?;
        Ok(self.vertices[id]
            .predecessor
            .map(|prev| &self.vertices[prev].artist))
    }

    /// Label of the edge between `a1` and `a2`, or `None` if they are not connected.
    pub fn get_edge(&self, a1: &str, a2: &str) -> Result<Option<&str>, GraphError> {
        let first = self.require(a1)?;
        let second = self.require(a2)?;
        Ok(self.edge_label(first, second))
    }

    /// Neighbors of `artist` in edge insertion order.
    pub fn get_vertex_neighbors(&self, artist: &str) -> Result<Vec<&Artist>, GraphError> {
        let id = self.require(artist)?;
        Ok(self
            .neighbor_ids(id)
            .map(|neighbor| &self.vertices[neighbor].artist)
            .collect())
    }

    /// Walks predecessor links back from `dest` and returns the path source-first.
    ///
    /// `Some(vec![])` when `source == dest`; `None` when the walk runs out of
    /// predecessors before reaching `source`.
    pub fn report_path(&self, source: &str, dest: &str) -> Result<Option<Vec<&Artist>>, GraphError> {
        let source_id = self.require(source)?;
        let dest_id = self.require(dest)?;

        Ok(self.path_ids(source_id, dest_id).map(|ids| {
            ids.into_iter()
                .map(|id| &self.vertices[id].artist)
                .collect()
        }))
    }

    /// Writes every stored neighbor entry, so each edge shows up from both sides.
    pub fn print_graph<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for vertex in &self.vertices {
            for edge in &vertex.neighbors {
                writeln!(
                    out,
                    r#""{}" collaborated with "{}" in "{}"."#,
                    vertex.artist.name(),
                    self.vertices[edge.neighbor].artist.name(),
                    edge.song
                )?;
            }
            writeln!(out, "***")?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Artists in vertex insertion order.
    pub fn artists(&self) -> impl Iterator<Item = &Artist> {
        self.vertices.iter().map(|vertex| &vertex.artist)
    }

    pub fn marked_count(&self) -> usize {
        self.vertices.iter().filter(|vertex| vertex.visited).count()
    }

    pub(crate) fn vertex_id(&self, artist: &str) -> Option<VertexId> {
        self.index.get(artist).copied()
    }

    pub(crate) fn artist_at(&self, id: VertexId) -> &Artist {
        &self.vertices[id].artist
    }

    pub(crate) fn neighbor_ids(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices[id].neighbors.iter().map(|edge| edge.neighbor)
    }

    pub(crate) fn neighbor_at(&self, id: VertexId, position: usize) -> Option<VertexId> {
        self.vertices[id].neighbors.get(position).map(|edge| edge.neighbor)
    }

    pub(crate) fn mark(&mut self, id: VertexId) {
        self.vertices[id].visited = true;
    }

    pub(crate) fn is_marked_at(&self, id: VertexId) -> bool {
        self.vertices[id].visited
    }

    pub(crate) fn set_predecessor_at(&mut self, to: VertexId, from: VertexId) {
        let vertex = &mut self.vertices[to];
        if vertex.predecessor.is_none() {
            vertex.predecessor = Some(from);
        }
    }

    pub(crate) fn edge_label(&self, a: VertexId, b: VertexId) -> Option<&str> {
        let vertex = &self.vertices[a];
        vertex
            .neighbor_positions
            .get(&b)
            .map(|&position| vertex.neighbors[position].song.as_str())
    }

    pub(crate) fn path_ids(&self, source: VertexId, dest: VertexId) -> Option<Vec<VertexId>> {
        if source == dest {
            return Some(Vec::new());
        }

        let mut path = vec![dest];
        let mut current = dest;

        // a well-formed chain never has more links than there are vertices
        for _ in 0..self.vertices.len() {
            let previous = self.vertices[current].predecessor?;
            path.push(previous);
            if previous == source {
                path.reverse();
                return Some(path);
            }
            current = previous;
        }

        None
    }

    fn require(&self, artist: &str) -> Result<VertexId, GraphError> {
        self.vertex_id(artist)
            .ok_or_else(|| GraphError::UnknownVertex(artist.to_string()))
    }
}

impl Clone for CollabGraph {
    /// Copies the structure only; traversal metadata starts fresh on the copy.
    fn clone(&self) -> Self {
        let mut copy = Self {
            vertices: self.vertices.clone(),
            index: self.index.clone(),
            edge_count: self.edge_count,
        };
        copy.clear_metadata();
        copy
    }
}
