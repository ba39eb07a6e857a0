//! classics-graph: generic index-addressed graph with breadth-first search.
//!
//! Vertices are plain values addressed by insertion index. Edges are stored
//! in both endpoints' adjacency lists, so the graph reads as undirected while
//! every stored edge keeps a direction. Searches record one predecessor edge
//! per vertex and rebuild paths from that map on demand.

pub mod cities;
mod error;
mod graph;
mod traversal;

pub use error::{GraphError, Result};
pub use graph::{
    total_weight, Edge, EdgeEntry, EdgeList, Graph, UnweightedEdge, UnweightedGraph, WeightedEdge,
    WeightedGraph,
};
pub use traversal::{
    bfs, bfs_neighborhood, bfs_search, degree_centrality, path_to_vertices, reconstruct_path,
    shortest_path, DegreeResult, NeighborResult, PredecessorMap, Search, TraversalResult,
};
