use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, Result};

/// A directed arc between two vertex indices.
///
/// The graph stores every edge twice: once as inserted, once as its
/// [`reversed`](Edge::reversed) twin in the target's adjacency list.
pub trait Edge: Clone + fmt::Debug {
    fn from(&self) -> usize;
    fn to(&self) -> usize;
    /// Same edge with endpoints swapped. Any weight is preserved.
    fn reversed(&self) -> Self;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnweightedEdge {
    pub from: usize,
    pub to: usize,
}

impl UnweightedEdge {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl Edge for UnweightedEdge {
    fn from(&self) -> usize {
        self.from
    }

    fn to(&self) -> usize {
        self.to
    }

    fn reversed(&self) -> Self {
        Self { from: self.to, to: self.from }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

impl Edge for WeightedEdge {
    fn from(&self) -> usize {
        self.from
    }

    fn to(&self) -> usize {
        self.to
    }

    fn reversed(&self) -> Self {
        Self { from: self.to, to: self.from, weight: self.weight }
    }
}

/// Sum of the weights along a path.
pub fn total_weight(path: &[WeightedEdge]) -> f64 {
    path.iter().map(|e| e.weight).sum()
}

/// Serialized form of a graph: a vertex list plus edges by index.
///
/// `weight` is ignored when loading into an unweighted graph and required
/// when loading into a weighted one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeList<V> {
    pub vertices: Vec<V>,
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub from: usize,
    pub to: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// In-memory graph: vertices addressed by insertion index, with one
/// adjacency list per vertex.
///
/// Edges are stored in both directions, so `edges_for_index(u)` holds every
/// edge touching `u` with `u` as its `from` end. Vertices and edges are
/// append-only.
#[derive(Debug, Clone)]
pub struct Graph<V, E = UnweightedEdge> {
    vertices: Vec<V>,
    edges: Vec<Vec<E>>,
}

pub type UnweightedGraph<V> = Graph<V, UnweightedEdge>;
pub type WeightedGraph<V> = Graph<V, WeightedEdge>;

impl<V, E: Edge> Graph<V, E> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::with_capacity(vertex_count),
        }
    }

    /// Seed the graph with vertices and no edges.
    pub fn with_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let vertices: Vec<V> = vertices.into_iter().collect();
        let edges = vertices.iter().map(|_| Vec::new()).collect();
        Self { vertices, edges }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored directed arcs (twice the undirected edge count).
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum()
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Append a vertex and return its index. Equal values are not merged.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        self.vertices.push(vertex);
        self.edges.push(Vec::new());
        self.vertices.len() - 1
    }

    /// Insert `edge` into its source list and its reversal into the target list.
    ///
    /// Both endpoints are checked before anything is written, so a failed
    /// insert leaves the graph untouched.
    pub fn add_edge(&mut self, edge: E) -> Result<()> {
        self.check_index(edge.from())?;
        self.check_index(edge.to())?;
        self.edges[edge.to()].push(edge.reversed());
        self.edges[edge.from()].push(edge);
        Ok(())
    }

    /// Bulk insert. Stops at the first invalid edge; earlier edges stay.
    pub fn load_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
    {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    pub fn vertex_at(&self, index: usize) -> Result<&V> {
        self.vertices.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            vertex_count: self.vertices.len(),
        })
    }

    /// Neighbor values in adjacency insertion order.
    pub fn neighbors_for_index(&self, index: usize) -> Result<Vec<&V>> {
        Ok(self
            .edges_for_index(index)?
            .iter()
            .map(|e| &self.vertices[e.to()])
            .collect())
    }

    pub fn edges_for_index(&self, index: usize) -> Result<&[E]> {
        self.edges
            .get(index)
            .map(|v| v.as_slice())
            .ok_or(GraphError::IndexOutOfRange {
                index,
                vertex_count: self.vertices.len(),
            })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                vertex_count: self.vertices.len(),
            })
        }
    }
}

impl<V: PartialEq, E: Edge> Graph<V, E> {
    /// Index of the first vertex equal to `vertex`.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    pub fn neighbors_for_vertex(&self, vertex: &V) -> Option<Vec<&V>> {
        let index = self.index_of(vertex)?;
        self.neighbors_for_index(index).ok()
    }

    pub fn edges_for_vertex(&self, vertex: &V) -> Option<&[E]> {
        let index = self.index_of(vertex)?;
        self.edges_for_index(index).ok()
    }
}

impl<V: PartialEq + fmt::Debug> Graph<V, UnweightedEdge> {
    pub fn add_edge_by_indices(&mut self, from: usize, to: usize) -> Result<()> {
        self.add_edge(UnweightedEdge::new(from, to))
    }

    /// Connect two vertices by value.
    ///
    /// Returns `false` without touching the graph if either value is absent.
    pub fn add_edge_by_vertices(&mut self, from: &V, to: &V) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(u), Some(v)) => self.add_edge(UnweightedEdge::new(u, v)).is_ok(),
            _ => {
                debug!(?from, ?to, "edge skipped: endpoint not in graph");
                false
            }
        }
    }

    /// Build from a serialized edge list. Weights are ignored.
    pub fn from_edge_list(list: EdgeList<V>) -> Result<Self> {
        let mut graph = Self::with_vertices(list.vertices);
        graph.load_edges(list.edges.iter().map(|e| UnweightedEdge::new(e.from, e.to)))?;
        Ok(graph)
    }
}

impl<V: PartialEq + fmt::Debug> Graph<V, WeightedEdge> {
    pub fn add_edge_by_indices(&mut self, from: usize, to: usize, weight: f64) -> Result<()> {
        self.add_edge(WeightedEdge::new(from, to, weight))
    }

    /// Weighted counterpart of [`Graph::add_edge_by_vertices`] on unweighted graphs.
    pub fn add_edge_by_vertices(&mut self, from: &V, to: &V, weight: f64) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(u), Some(v)) => self.add_edge(WeightedEdge::new(u, v, weight)).is_ok(),
            _ => {
                debug!(?from, ?to, weight, "edge skipped: endpoint not in graph");
                false
            }
        }
    }

    pub fn neighbors_for_index_with_weights(&self, index: usize) -> Result<Vec<(&V, f64)>> {
        Ok(self
            .edges_for_index(index)?
            .iter()
            .map(|e| (&self.vertices[e.to], e.weight))
            .collect())
    }

    /// Build from a serialized edge list. Every entry must carry a weight.
    pub fn from_edge_list(list: EdgeList<V>) -> Result<Self> {
        let mut graph = Self::with_vertices(list.vertices);
        for entry in &list.edges {
            let weight = entry.weight.ok_or(GraphError::MissingWeight {
                from: entry.from,
                to: entry.to,
            })?;
            graph.add_edge(WeightedEdge::new(entry.from, entry.to, weight))?;
        }
        Ok(graph)
    }
}

impl<V, E: Edge> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Display, E: Edge> fmt::Display for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.vertices.iter().zip(&self.edges) {
            write!(f, "{} -> [", vertex)?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.vertices[edge.to()])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
