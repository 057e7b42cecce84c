use route_atlas_core::{hop_distances, load_graph_with_stats, EdgeRecord, NodeRecord, RouteAnalyzer};
use std::time::Instant;

/// Parsed record batches, as the loader receives them.
struct Batch {
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(500_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: route-atlas-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  lsystem     Fractal branching tree (deep paths)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense cliques connected by a thin bridge");
        println!();
        println!("Default node_count: 500000");
        return;
    }

    if node_count < 32 {
        eprintln!("node_count must be at least 32");
        return;
    }

    println!("route-atlas-bench");
    println!("=================");
    println!();

    let generators: Vec<(&str, fn(u64) -> Batch)> = match mode {
        "lsystem" => vec![("L-system tree", gen_lsystem)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        "all" => vec![
            ("L-system tree", gen_lsystem as fn(u64) -> Batch),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (clique-bridge-clique)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> Batch, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let batch = generator(node_count);
    let gen_time = t.elapsed();

    let last = batch.nodes.last().map(|n| n.id.clone()).unwrap_or_default();
    let record_count = batch.nodes.len();

    let t = Instant::now();
    let (graph, registry, stats) = load_graph_with_stats(batch.nodes, batch.edges);
    let load_time = t.elapsed();
    println!(
        "Generated {} records in {:.2}s, loaded in {:.2}s: {} nodes, {} edges ({} dropped), ~{:.0}MB",
        record_count,
        gen_time.as_secs_f64(),
        load_time.as_secs_f64(),
        stats.nodes,
        stats.edges,
        stats.dropped_edges,
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let t = Instant::now();
    let distances = hop_distances(&graph, "c_0");
    let elapsed = t.elapsed();
    let eccentricity = distances.values().copied().max().unwrap_or(0);
    println!(
        "BFS from c_0: {} reachable, eccentricity {} in {:.1}ms",
        distances.len(),
        eccentricity,
        elapsed.as_secs_f64() * 1000.0
    );

    // Shortest path: first node to last node
    let t = Instant::now();
    let path = graph.shortest_path("c_0", last.as_str());
    let search_time = t.elapsed();

    if path.is_empty() {
        println!(
            "Shortest path c_0 → {}: no path ({:.1}ms)",
            last,
            search_time.as_secs_f64() * 1000.0
        );
        println!();
        return;
    }

    let analyzer = RouteAnalyzer::new(&registry);
    let t = Instant::now();
    let total = analyzer.total_cost(&path);
    let breakdown = analyzer.cost_by_category(&path);
    let highest = analyzer.highest_cost_category(&breakdown).unwrap_or("-");
    let analysis_time = t.elapsed();

    println!(
        "Shortest path c_0 → {}: {} hops in {:.1}ms",
        last,
        path.len() - 1,
        search_time.as_secs_f64() * 1000.0
    );
    println!(
        "Cost analysis: total {}, highest {} over {} categories in {:.3}ms",
        total,
        highest,
        breakdown.len(),
        analysis_time.as_secs_f64() * 1000.0
    );
    println!();
}

// ---------------------------------------------------------------------------
// Generators: O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
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

const CATEGORIES: [&str; 6] = [
    "North America",
    "South America",
    "Europe",
    "Africa",
    "Asia",
    "Australia",
];

fn id(i: u64) -> String {
    format!("c_{}", i)
}

fn node(i: u64, rng: &mut FastRng) -> NodeRecord {
    NodeRecord {
        id: id(i),
        category: CATEGORIES[rng.next(CATEGORIES.len() as u64) as usize].to_string(),
        cost: 1 + rng.next(9),
    }
}

/// Single-edge adjacency record.
fn edge(from: u64, to: u64) -> EdgeRecord {
    EdgeRecord {
        from: id(from),
        to: vec![id(to)],
    }
}

/// L-system fractal tree: deep branching with self-similar structure.
///
/// Each node spawns 3 children. Produces deep paths (log depth) with
/// exponential width. Edges point root-to-leaf only.
fn gen_lsystem(node_count: u64) -> Batch {
    let mut rng = FastRng::new(42);
    let nodes: Vec<NodeRecord> = (0..node_count).map(|i| node(i, &mut rng)).collect();

    let branching = 3u64;
    let edges = (1..node_count)
        .map(|child| edge((child - 1) / branching, child))
        .collect();

    Batch { nodes, edges }
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each node lists its K nearest successors on the ring, each rewired to a
/// random target with probability p. High clustering, short paths.
fn gen_small_world(node_count: u64) -> Batch {
    let k = 10u64;
    let p = 0.05f64;
    let mut rng = FastRng::new(67890);
    let nodes: Vec<NodeRecord> = (0..node_count).map(|i| node(i, &mut rng)).collect();

    let mut edges = Vec::with_capacity(node_count as usize);
    for i in 0..node_count {
        let to = (1..=k)
            .map(|j| {
                let neighbor = (i + j) % node_count;
                if rng.next_f64() < p {
                    let rewired = rng.next(node_count);
                    if rewired != i {
                        return id(rewired);
                    }
                }
                id(neighbor)
            })
            .collect();
        edges.push(EdgeRecord { from: id(i), to });
    }

    Batch { nodes, edges }
}

/// Erdos-Renyi: uniform random directed edges, ~10 per node on average.
///
/// One in a hundred edges names a node past the end, exercising the
/// loader's drop-unknown policy.
fn gen_random(node_count: u64) -> Batch {
    let target_edges = node_count * 10;
    let mut rng = FastRng::new(54321);
    let nodes: Vec<NodeRecord> = (0..node_count).map(|i| node(i, &mut rng)).collect();

    let mut edges = Vec::with_capacity(target_edges as usize);
    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = if rng.next(100) == 0 {
            node_count + rng.next(node_count)
        } else {
            rng.next(node_count)
        };
        if from != to {
            edges.push(edge(from, to));
        }
    }

    Batch { nodes, edges }
}

/// Barbell: two dense cliques connected by a single thin bridge.
///
/// Worst case for "find path through bottleneck". Clique nodes get ~20
/// random in-clique edges; a chain of 10 bridge nodes links A to B.
fn gen_barbell(node_count: u64) -> Batch {
    let bridge_len = 10u64;
    let clique_size = (node_count - bridge_len) / 2;
    let mut rng = FastRng::new(99999);
    let total = clique_size * 2 + bridge_len;
    let nodes: Vec<NodeRecord> = (0..total).map(|i| node(i, &mut rng)).collect();

    let mut edges = Vec::with_capacity((clique_size * 40 + bridge_len) as usize);

    // Clique A: 0..clique_size
    for i in 0..clique_size {
        for _ in 0..20u64.min(clique_size - 1) {
            let target = rng.next(clique_size);
            if target != i {
                edges.push(edge(i, target));
            }
        }
    }

    // Bridge: chain from last node of A through to first node of B
    let bridge_start = clique_size;
    let b_start = bridge_start + bridge_len;
    for i in bridge_start - 1..b_start {
        edges.push(edge(i, i + 1));
    }

    // Clique B: after the bridge
    for i in 0..clique_size {
        for _ in 0..20u64.min(clique_size - 1) {
            let target = rng.next(clique_size);
            if target != i {
                edges.push(edge(b_start + i, b_start + target));
            }
        }
    }

    Batch { nodes, edges }
}
