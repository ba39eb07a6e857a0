use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use classics_graph::{
    bfs_neighborhood, bfs_search, cities, path_to_vertices, EdgeList, Graph, UnweightedEdge,
    UnweightedGraph,
};
use serde::Serialize;
use tracing::info;

/// Outcome of a route search. `hops` is `None` when no route exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOutput {
    pub from: String,
    pub to: String,
    pub hops: Option<usize>,
    pub path: Vec<String>,
    pub nodes_visited: usize,
}

/// One line of the neighborhood table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborhoodRow {
    pub distance: u32,
    pub vertex: String,
    pub via: Vec<String>,
}

/// Parse a JSON edge list with string vertices.
pub fn parse_graph<R: Read>(reader: R) -> Result<Graph<String>> {
    let list: EdgeList<String> =
        serde_json::from_reader(reader).context("invalid graph document")?;
    Ok(UnweightedGraph::<String>::from_edge_list(list)?)
}

/// Load a graph file, or the built-in city network when no file is given.
pub fn load_graph(path: Option<&Path>) -> Result<Graph<String>> {
    let Some(path) = path else {
        return Ok(cities::us_cities());
    };
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let graph = parse_graph(BufReader::new(file))
        .with_context(|| format!("cannot load graph from {}", path.display()))?;
    info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

fn resolve(graph: &Graph<String>, name: &str) -> Result<usize> {
    graph
        .index_of(&name.to_string())
        .with_context(|| format!("'{}' is not a vertex of this graph", name))
}

fn walk(graph: &Graph<String>, source: usize, path: &[UnweightedEdge]) -> Result<Vec<String>> {
    Ok(path_to_vertices(graph, source, path)?.into_iter().cloned().collect())
}

pub fn find_route(graph: &Graph<String>, from: &str, to: &str) -> Result<RouteOutput> {
    let source = resolve(graph, from)?;
    resolve(graph, to)?;

    let search = bfs_search(graph, source, |v| v == to)?;
    let path = search.path()?;
    info!(
        from,
        to,
        found = path.is_some(),
        visited = search.nodes_visited,
        "route search finished"
    );

    Ok(RouteOutput {
        from: from.to_string(),
        to: to.to_string(),
        hops: path.as_ref().map(|p| p.len()),
        path: match &path {
            Some(edges) => walk(graph, source, edges)?,
            None => Vec::new(),
        },
        nodes_visited: search.nodes_visited,
    })
}

pub fn render_route(route: &RouteOutput, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(route)?);
    }
    let mut out = String::new();
    match route.hops {
        Some(hops) => {
            writeln!(out, "{}", route.path.join(" -> "))?;
            writeln!(out, "{} hops, {} vertices visited", hops, route.nodes_visited)?;
        }
        None => writeln!(out, "No route from {} to {}", route.from, route.to)?,
    }
    Ok(out)
}

pub fn run_route(from: &str, to: &str, graph_file: Option<&Path>, json: bool) -> Result<()> {
    let graph = load_graph(graph_file)?;
    let route = find_route(&graph, from, to)?;
    println!("{}", render_route(&route, json)?.trim_end());
    Ok(())
}

/// Every vertex within `depth` hops of `from`, in BFS discovery order.
pub fn neighborhood(
    graph: &Graph<String>,
    from: &str,
    depth: u32,
) -> Result<Vec<NeighborhoodRow>> {
    let source = resolve(graph, from)?;
    let result = bfs_neighborhood(graph, source, depth)?;

    let mut rows = Vec::with_capacity(result.neighbors.len());
    for neighbor in &result.neighbors {
        let path = result.path_to(neighbor.index)?;
        rows.push(NeighborhoodRow {
            distance: neighbor.distance,
            vertex: graph.vertex_at(neighbor.index)?.clone(),
            via: walk(graph, source, &path)?,
        });
    }
    Ok(rows)
}

pub fn render_neighborhood(rows: &[NeighborhoodRow], from: &str, depth: u32) -> String {
    let mut out = format!("{:>8}  {:<16}  via\n", "distance", "vertex");
    out.push_str(&format!("{:->8}  {:-<16}  {:-<3}\n", "", "", ""));
    for row in rows {
        out.push_str(&format!(
            "{:>8}  {:<16}  {}\n",
            row.distance,
            row.vertex,
            row.via.join(" -> ")
        ));
    }
    out.push('\n');
    out.push_str(&format!("{} vertices within {} hops of {}\n", rows.len(), depth, from));
    out
}

pub fn run_neighborhood(from: &str, depth: u32, graph_file: Option<&Path>) -> Result<()> {
    let graph = load_graph(graph_file)?;
    let rows = neighborhood(&graph, from, depth)?;
    print!("{}", render_neighborhood(&rows, from, depth));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(walk: &[&str]) -> Vec<String> {
        walk.iter().map(|s| s.to_string()).collect()
    }

    fn row(distance: u32, vertex: &str, via: &[&str]) -> NeighborhoodRow {
        NeighborhoodRow { distance, vertex: vertex.to_string(), via: names(via) }
    }

    #[test]
    fn test_load_builtin_cities() {
        let g = load_graph(None).unwrap();
        assert_eq!(g.vertex_count(), 15);
    }

    #[test]
    fn test_parse_graph() {
        let json = r#"{"vertices": ["a", "b", "c"],
            "edges": [{"from": 0, "to": 1}, {"from": 1, "to": 2}]}"#;
        let g = parse_graph(json.as_bytes()).unwrap();
        assert_eq!(g.neighbors_for_index(1).unwrap(), vec!["a", "c"]);
    }

    #[test]
    fn test_parse_graph_bad_index() {
        let json = r#"{"vertices": ["a"], "edges": [{"from": 0, "to": 4}]}"#;
        let err = parse_graph(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{}", err);
    }

    #[test]
    fn test_parse_graph_malformed() {
        assert!(parse_graph("{\"vertices\": 3}".as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_graph(Some(Path::new("/nonexistent/graph.json"))).unwrap_err();
        assert!(err.to_string().contains("cannot open"));
    }

    #[test]
    fn test_route_unknown_city() {
        assert!(run_route("Boston", "Atlantis", None, false).is_err());
    }

    #[test]
    fn test_route_boston_to_miami() {
        let g = cities::us_cities();
        let route = find_route(&g, "Boston", "Miami").unwrap();
        assert_eq!(route.hops, Some(3));
        assert_eq!(route.path, names(&["Boston", "Detroit", "Washington", "Miami"]));
        assert!(route.nodes_visited >= 4);

        let text = render_route(&route, false).unwrap();
        assert!(text.starts_with("Boston -> Detroit -> Washington -> Miami\n"), "{}", text);
        assert!(text.contains("3 hops"));
    }

    #[test]
    fn test_route_json_shape() {
        let g = cities::us_cities();
        let route = find_route(&g, "Boston", "Miami").unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&render_route(&route, true).unwrap()).unwrap();
        assert_eq!(value["from"], "Boston");
        assert_eq!(value["to"], "Miami");
        assert_eq!(value["hops"], 3);
        assert_eq!(
            value["path"],
            serde_json::json!(["Boston", "Detroit", "Washington", "Miami"])
        );
        assert_eq!(value["nodes_visited"], route.nodes_visited);
    }

    #[test]
    fn test_route_to_self() {
        let g = cities::us_cities();
        let route = find_route(&g, "Boston", "Boston").unwrap();
        assert_eq!(route.hops, Some(0));
        assert_eq!(route.path, names(&["Boston"]));
    }

    #[test]
    fn test_route_unreachable() {
        let json = r#"{"vertices": ["a", "b", "c"], "edges": [{"from": 0, "to": 1}]}"#;
        let g = parse_graph(json.as_bytes()).unwrap();
        let route = find_route(&g, "a", "c").unwrap();
        assert_eq!(route.hops, None);
        assert!(route.path.is_empty());
        assert_eq!(route.nodes_visited, 2);

        assert_eq!(render_route(&route, false).unwrap(), "No route from a to c\n");
        let value: serde_json::Value =
            serde_json::from_str(&render_route(&route, true).unwrap()).unwrap();
        assert!(value["hops"].is_null());
        assert_eq!(value["path"], serde_json::json!([]));
    }

    #[test]
    fn test_neighborhood_boston_depth_two() {
        let g = cities::us_cities();
        let rows = neighborhood(&g, "Boston", 2).unwrap();
        assert_eq!(
            rows,
            vec![
                row(1, "Detroit", &["Boston", "Detroit"]),
                row(1, "New York", &["Boston", "New York"]),
                row(2, "Chicago", &["Boston", "Detroit", "Chicago"]),
                row(2, "Washington", &["Boston", "Detroit", "Washington"]),
                row(2, "Philadelphia", &["Boston", "New York", "Philadelphia"]),
            ]
        );

        let table = render_neighborhood(&rows, "Boston", 2);
        assert!(table.contains("       2  Washington        Boston -> Detroit -> Washington\n"));
        assert!(table.ends_with("5 vertices within 2 hops of Boston\n"));
    }

    #[test]
    fn test_neighborhood_depth_zero() {
        let g = cities::us_cities();
        assert!(neighborhood(&g, "Boston", 0).unwrap().is_empty());
        assert!(neighborhood(&g, "Atlantis", 1).is_err());
    }
}
