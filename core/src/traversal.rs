use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph};

/// Vertex index → edge that first reached it.
pub type PredecessorMap<E> = HashMap<usize, E>;

/// Final state of a breadth-first search.
#[derive(Debug, Clone)]
pub struct Search<E> {
    pub source: usize,
    /// Index of the first dequeued vertex that satisfied the goal.
    pub goal: Option<usize>,
    pub predecessors: PredecessorMap<E>,
    pub nodes_visited: usize,
}

impl<E: Edge> Search<E> {
    pub fn found(&self) -> bool {
        self.goal.is_some()
    }

    /// Edges from source to goal, or `None` if the goal was never reached.
    pub fn path(&self) -> Result<Option<Vec<E>>> {
        self.goal
            .map(|goal| reconstruct_path(self.source, goal, &self.predecessors))
            .transpose()
    }

    /// Edges from source to any vertex discovered during the search.
    pub fn path_to(&self, target: usize) -> Result<Vec<E>> {
        reconstruct_path(self.source, target, &self.predecessors)
    }
}

/// A vertex found during a depth-limited neighborhood traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborResult {
    pub index: usize,
    pub distance: u32,
}

/// Result of a neighborhood traversal.
#[derive(Debug)]
pub struct TraversalResult<E> {
    pub source: usize,
    /// Discovered vertices in BFS order, excluding the source.
    pub neighbors: Vec<NeighborResult>,
    pub predecessors: PredecessorMap<E>,
    pub nodes_visited: usize,
}

impl<E: Edge> TraversalResult<E> {
    /// One shortest path from the source to a discovered vertex.
    pub fn path_to(&self, target: usize) -> Result<Vec<E>> {
        reconstruct_path(self.source, target, &self.predecessors)
    }
}

/// Degree information for a single vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeResult {
    pub index: usize,
    pub degree: usize,
}

/// Breadth-first search from `source` until a vertex satisfies `goal_test`.
///
/// The goal is tested when a vertex is dequeued, so the source itself can
/// satisfy it. Neighbors are expanded in adjacency insertion order, which
/// makes tie-breaking between equally short paths deterministic.
pub fn bfs_search<V, E, F>(
    graph: &Graph<V, E>,
    source: usize,
    mut goal_test: F,
) -> Result<Search<E>>
where
    E: Edge,
    F: FnMut(&V) -> bool,
{
    breadth_first(graph, source, |_, vertex| goal_test(vertex))
}

/// Shortest path (fewest edges) from `source` to the first vertex satisfying
/// `goal_test`. `Ok(None)` means no reachable vertex matched.
pub fn bfs<V, E, F>(graph: &Graph<V, E>, source: usize, goal_test: F) -> Result<Option<Vec<E>>>
where
    E: Edge,
    F: FnMut(&V) -> bool,
{
    bfs_search(graph, source, goal_test)?.path()
}

/// Shortest path between two vertices looked up by value.
///
/// Each value resolves to its first index; the search stops at that exact
/// index even if later duplicates of `to` are closer.
pub fn shortest_path<V, E>(graph: &Graph<V, E>, from: &V, to: &V) -> Result<Option<Vec<E>>>
where
    V: PartialEq + std::fmt::Debug,
    E: Edge,
{
    let source = graph
        .index_of(from)
        .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", from)))?;
    let target = graph
        .index_of(to)
        .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", to)))?;

    breadth_first(graph, source, |index, _| index == target)?.path()
}

fn breadth_first<V, E, F>(graph: &Graph<V, E>, source: usize, mut is_goal: F) -> Result<Search<E>>
where
    E: Edge,
    F: FnMut(usize, &V) -> bool,
{
    graph.vertex_at(source)?;

    let mut frontier: VecDeque<usize> = VecDeque::from([source]);
    let mut visited: HashSet<usize> = HashSet::from([source]);
    let mut predecessors: PredecessorMap<E> = HashMap::new();

    while let Some(current) = frontier.pop_front() {
        trace!(vertex = current, queued = frontier.len(), "bfs dequeue");

        if is_goal(current, graph.vertex_at(current)?) {
            debug!(source, goal = current, visited = visited.len(), "bfs reached goal");
            return Ok(Search {
                source,
                goal: Some(current),
                predecessors,
                nodes_visited: visited.len(),
            });
        }

        for edge in graph.edges_for_index(current)? {
            if visited.insert(edge.to()) {
                frontier.push_back(edge.to());
                predecessors.insert(edge.to(), edge.clone());
            }
        }
    }

    debug!(source, visited = visited.len(), "bfs exhausted frontier without reaching goal");
    Ok(Search {
        source,
        goal: None,
        predecessors,
        nodes_visited: visited.len(),
    })
}

/// Walk predecessor edges back from `target` to `source` and return the
/// edges in source-to-target order.
///
/// `target == source` yields an empty path. A target with no predecessor
/// (including any target of an empty map) is [`GraphError::Unreachable`];
/// a chain that dead-ends or loops before reaching `source` is
/// [`GraphError::BrokenPredecessorChain`].
pub fn reconstruct_path<E: Edge>(
    source: usize,
    target: usize,
    predecessors: &PredecessorMap<E>,
) -> Result<Vec<E>> {
    if target == source {
        return Ok(Vec::new());
    }

    let mut edge = predecessors
        .get(&target)
        .ok_or(GraphError::Unreachable { start: source, target })?;
    let mut path = vec![edge.clone()];

    while edge.from() != source {
        // Each map entry can appear at most once on a real path
        if path.len() > predecessors.len() {
            return Err(GraphError::BrokenPredecessorChain { start: source, at: edge.from() });
        }
        edge = predecessors
            .get(&edge.from())
            .ok_or(GraphError::BrokenPredecessorChain { start: source, at: edge.from() })?;
        path.push(edge.clone());
    }

    path.reverse();
    Ok(path)
}

/// Render a path as the walk of vertex values it visits, source first.
pub fn path_to_vertices<'a, V, E: Edge>(
    graph: &'a Graph<V, E>,
    source: usize,
    path: &[E],
) -> Result<Vec<&'a V>> {
    let mut walk = Vec::with_capacity(path.len() + 1);
    walk.push(graph.vertex_at(source)?);
    for edge in path {
        walk.push(graph.vertex_at(edge.to())?);
    }
    Ok(walk)
}

/// BFS neighborhood: every vertex reachable from `source` within
/// `max_depth` hops, each at its minimum distance.
///
/// Stores one predecessor edge per vertex instead of cloning paths, so
/// paths are rebuilt on demand via [`TraversalResult::path_to`].
pub fn bfs_neighborhood<V, E: Edge>(
    graph: &Graph<V, E>,
    source: usize,
    max_depth: u32,
) -> Result<TraversalResult<E>> {
    graph.vertex_at(source)?;

    let mut distances: HashMap<usize, u32> = HashMap::from([(source, 0)]);
    let mut predecessors: PredecessorMap<E> = HashMap::new();
    let mut neighbors = Vec::new();
    let mut queue: VecDeque<(usize, u32)> = VecDeque::from([(source, 0)]);

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for edge in graph.edges_for_index(current)? {
            let target = edge.to();
            if !distances.contains_key(&target) {
                distances.insert(target, depth + 1);
                predecessors.insert(target, edge.clone());
                neighbors.push(NeighborResult { index: target, distance: depth + 1 });
                queue.push_back((target, depth + 1));
            }
        }
    }

    Ok(TraversalResult {
        source,
        neighbors,
        predecessors,
        nodes_visited: distances.len(),
    })
}

/// Vertices ranked by degree (stored adjacency entries).
///
/// If `top_n` is 0, returns all vertices. Ties are broken by index (ascending).
pub fn degree_centrality<V, E: Edge>(graph: &Graph<V, E>, top_n: usize) -> Vec<DegreeResult> {
    let mut results: Vec<DegreeResult> = (0..graph.vertex_count())
        .map(|index| DegreeResult {
            index,
            degree: graph.edges_for_index(index).map_or(0, |e| e.len()),
        })
        .collect();

    results.sort_by(|a, b| b.degree.cmp(&a.degree).then(a.index.cmp(&b.index)));

    if top_n > 0 && top_n < results.len() {
        results.truncate(top_n);
    }

    results
}
