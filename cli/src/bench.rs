use std::time::Instant;

use anyhow::Result;
use clap::ValueEnum;
use classics_graph::{bfs_neighborhood, bfs_search, Graph};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Generator {
    /// Fractal branching tree (deep paths)
    Lsystem,
    /// Ring lattice plus random shortcuts
    Smallworld,
    /// Uniform random edges
    Random,
    /// Every generator in turn
    All,
}

type GeneratorFn = fn(u64) -> classics_graph::Result<Graph<u64>>;

impl Generator {
    fn selected(self) -> Vec<(&'static str, GeneratorFn)> {
        match self {
            Generator::Lsystem => vec![("L-system tree", gen_lsystem as GeneratorFn)],
            Generator::Smallworld => {
                vec![("Small-world (Watts-Strogatz)", gen_small_world as GeneratorFn)]
            }
            Generator::Random => vec![("Erdos-Renyi random", gen_random as GeneratorFn)],
            Generator::All => vec![
                ("L-system tree", gen_lsystem as GeneratorFn),
                ("Small-world (Watts-Strogatz)", gen_small_world),
                ("Erdos-Renyi random", gen_random),
            ],
        }
    }
}

pub fn run(generator: Generator, node_count: u64) -> Result<()> {
    println!("classics bench");
    println!("==============");
    println!();

    for (name, build) in generator.selected() {
        run_benchmark(name, build, node_count)?;
    }
    Ok(())
}

fn run_benchmark(name: &str, build: GeneratorFn, node_count: u64) -> Result<()> {
    println!("--- {} ---", name);

    let t = Instant::now();
    let graph = build(node_count)?;
    let gen_time = t.elapsed();
    info!(generator = name, vertices = graph.vertex_count(), "graph generated");
    println!(
        "Generated in {:.2}s: {} vertices, {} stored edges",
        gen_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
    );

    println!();
    println!("{:>8} {:>12} {:>12} {:>10}", "depth", "found", "visited", "time");
    println!("{:->8} {:->12} {:->12} {:->10}", "", "", "", "");

    for depth in [1, 2, 3, 5, 10, 20, 50] {
        let t = Instant::now();
        let result = bfs_neighborhood(&graph, 0, depth)?;
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>12} {:>8.1}ms",
            depth,
            result.neighbors.len(),
            result.nodes_visited,
            elapsed.as_secs_f64() * 1000.0
        );
        if result.nodes_visited >= graph.vertex_count() {
            println!("{:>8} (entire graph reached)", "");
            break;
        }
    }

    // Vertex labels equal their indices, so the last label is the far end
    let far = graph.vertex_count() as u64 - 1;
    println!();
    let t = Instant::now();
    let search = bfs_search(&graph, 0, |&v| v == far)?;
    let elapsed = t.elapsed();
    match search.path()? {
        Some(path) => println!(
            "BFS 0 -> {}: {} hops, {} visited in {:.1}ms",
            far,
            path.len(),
            search.nodes_visited,
            elapsed.as_secs_f64() * 1000.0
        ),
        None => println!(
            "BFS 0 -> {}: no path ({:.1}ms)",
            far,
            elapsed.as_secs_f64() * 1000.0
        ),
    }
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators: O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }

    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Graph with vertices labelled `0..node_count`.
fn numbered(node_count: u64) -> Graph<u64> {
    let mut graph: Graph<u64> = Graph::with_capacity(node_count as usize);
    for label in 0..node_count {
        graph.add_vertex(label);
    }
    graph
}

/// Each vertex spawns three children, level by level.
fn gen_lsystem(node_count: u64) -> classics_graph::Result<Graph<u64>> {
    let mut graph = numbered(node_count);
    let branching = 3u64;

    let mut next_id = 1u64;
    let mut frontier = vec![0u64];
    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                graph.add_edge_by_indices(parent as usize, next_id as usize)?;
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }

    Ok(graph)
}

/// Ring lattice with `k` forward neighbors, each edge rewired with probability `p`.
fn gen_small_world(node_count: u64) -> classics_graph::Result<Graph<u64>> {
    let k = 5u64;
    let p = 0.05f64;
    let mut graph = numbered(node_count);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k.min(node_count.saturating_sub(1)) {
            let mut target = (i + j) % node_count;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                if rewired != i {
                    target = rewired;
                }
            }
            graph.add_edge_by_indices(i as usize, target as usize)?;
        }
    }

    Ok(graph)
}

/// About five random edges per vertex, no self-loops.
fn gen_random(node_count: u64) -> classics_graph::Result<Graph<u64>> {
    let mut graph = numbered(node_count);
    let mut rng = FastRng::new(54321);

    for _ in 0..node_count * 5 {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            graph.add_edge_by_indices(from as usize, to as usize)?;
        }
    }

    Ok(graph)
}
