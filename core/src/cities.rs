//! Fifteen-city US route network used by demos and tests.

use crate::graph::Graph;

pub const CITIES: [&str; 15] = [
    "Seattle",
    "San Francisco",
    "Los Angeles",
    "Riverside",
    "Phoenix",
    "Chicago",
    "Boston",
    "New York",
    "Atlanta",
    "Miami",
    "Dallas",
    "Houston",
    "Detroit",
    "Philadelphia",
    "Washington",
];

/// Undirected routes, in insertion order. Order matters: BFS breaks ties by it.
pub const ROUTES: [(&str, &str); 26] = [
    ("Seattle", "Chicago"),
    ("Seattle", "San Francisco"),
    ("San Francisco", "Riverside"),
    ("San Francisco", "Los Angeles"),
    ("Los Angeles", "Riverside"),
    ("Los Angeles", "Phoenix"),
    ("Riverside", "Phoenix"),
    ("Riverside", "Chicago"),
    ("Phoenix", "Dallas"),
    ("Phoenix", "Houston"),
    ("Dallas", "Chicago"),
    ("Dallas", "Atlanta"),
    ("Dallas", "Houston"),
    ("Houston", "Atlanta"),
    ("Houston", "Miami"),
    ("Atlanta", "Chicago"),
    ("Atlanta", "Washington"),
    ("Atlanta", "Miami"),
    ("Miami", "Washington"),
    ("Chicago", "Detroit"),
    ("Detroit", "Boston"),
    ("Detroit", "Washington"),
    ("Detroit", "New York"),
    ("Boston", "New York"),
    ("New York", "Philadelphia"),
    ("Philadelphia", "Washington"),
];

pub fn us_cities() -> Graph<String> {
    let mut graph: Graph<String> = Graph::with_vertices(CITIES.iter().map(|c| c.to_string()));
    for (from, to) in ROUTES {
        let added = graph.add_edge_by_vertices(&from.to_string(), &to.to_string());
        debug_assert!(added, "route {} -> {} names an unknown city", from, to);
    }
    graph
}
