use std::time::{Duration, Instant};

use spt_engine::graph::generators::{chain_with_shortcuts, random_dag, random_digraph};
use spt_engine::graph::{Graph, WeightedDigraph};
use spt_engine::{AcyclicPaths, BellmanFord, Dijkstra, ShortestPathTree};

// Function to benchmark a solver constructor on a graph
fn benchmark_solver<T, F>(name: &str, graph: &WeightedDigraph<f64>, solve: F) -> Duration
where
    T: ShortestPathTree<f64>,
    F: Fn(&WeightedDigraph<f64>) -> spt_engine::Result<T>,
{
    let start = Instant::now();
    let result = solve(graph);
    let duration = start.elapsed();

    match result {
        Ok(tree) => println!("  - {:<14} reached {} vertices in {:?}", name, tree.reachable(), duration),
        Err(err) => println!("  - {:<14} failed after {:?}: {}", name, duration, err),
    }

    duration
}

fn main() -> spt_engine::Result<()> {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Bellman-Ford vs Acyclic");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating graphs with {} vertices...", size);
        let digraph = random_digraph(size, size * edge_factor, 1.0..100.0, Some(size as u64))?;
        let dag = random_dag(size, size * edge_factor, -50.0..100.0, Some(size as u64))?;
        let chain = chain_with_shortcuts(size, edge_factor, -10.0..100.0, Some(size as u64))?;
        println!(
            "Digraph has {} edges, DAG has {} edges, chain has {} edges",
            digraph.edge_count(),
            dag.edge_count(),
            chain.edge_count()
        );

        println!("Nonnegative digraph:");
        let dijkstra_time = benchmark_solver("Dijkstra", &digraph, |g| Dijkstra::new(g, 0));
        let bellman_ford_time = benchmark_solver("Bellman-Ford", &digraph, |g| BellmanFord::new(g, 0));

        println!("DAG with negative weights:");
        let acyclic_time = benchmark_solver("Acyclic", &dag, |g| AcyclicPaths::shortest(g, 0));
        let dag_bellman_ford_time = benchmark_solver("Bellman-Ford", &dag, |g| BellmanFord::new(g, 0));

        // Every vertex is reachable here, so the solvers touch the whole graph
        println!("Chain with shortcuts:");
        benchmark_solver("Acyclic", &chain, |g| AcyclicPaths::shortest(g, 0));
        benchmark_solver("Bellman-Ford", &chain, |g| BellmanFord::new(g, 0));

        results.push((size, dijkstra_time, bellman_ford_time, acyclic_time, dag_bellman_ford_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<13} | {:<13} | {:<13} | {:<13}",
        "Vertices", "Dijkstra (ms)", "BF (ms)", "Acyclic (ms)", "BF DAG (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, dijkstra, bellman_ford, acyclic, dag_bellman_ford) in &results {
        println!(
            "{:<10} | {:<13.2} | {:<13.2} | {:<13.2} | {:<13.2}",
            size,
            dijkstra.as_secs_f64() * 1000.0,
            bellman_ford.as_secs_f64() * 1000.0,
            acyclic.as_secs_f64() * 1000.0,
            dag_bellman_ford.as_secs_f64() * 1000.0
        );
    }

    Ok(())
}
