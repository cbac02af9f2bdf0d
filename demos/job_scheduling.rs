use colored::*;
use spt_engine::graph::WeightedDigraph;
use spt_engine::{AcyclicPaths, ShortestPathTree};

/// Job duration followed by the jobs that may only start once it has finished
const JOBS: &str = "\
41.0 1 7 9
51.0 2
50.0
36.0
38.0
45.0
21.0 3 8
32.0 3 8
32.0 2
29.0 4 6";

/// Parses one job line into its duration and successor jobs
fn parse_job(line: &str) -> Result<(f64, Vec<usize>), String> {
    let mut fields = line.split_whitespace();
    let duration = fields
        .next()
        .ok_or("empty job")?
        .parse::<f64>()
        .map_err(|e| format!("invalid duration format: {}", e))?;
    if duration <= 0.0 {
        return Err(format!("duration must be positive: {}", duration));
    }
    let successors = fields
        .map(|j| j.parse::<usize>().map_err(|e| format!("invalid job index format: {}", e)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((duration, successors))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "Critical path method".green().bold());

    let jobs = JOBS.lines().map(parse_job).collect::<Result<Vec<_>, _>>()?;
    let n = jobs.len();

    // Vertices 0..n start each job, n..2n finish it, then the global source and sink
    let source = 2 * n;
    let sink = source + 1;
    let mut graph = WeightedDigraph::new(2 * n + 2);
    for (job, (duration, successors)) in jobs.iter().enumerate() {
        graph.add_edge(job, n + job, *duration)?;
        graph.add_edge(source, job, 0.0)?;
        graph.add_edge(n + job, sink, 0.0)?;
        for &next in successors {
            graph.add_edge(n + job, next, 0.0)?;
        }
    }

    // Each job starts at the length of the longest path reaching it
    let lp = AcyclicPaths::longest(&graph, source)?;

    println!("{:>5} {:>10} {:>10}", "job", "duration", "start");
    for (job, (duration, _)) in jobs.iter().enumerate() {
        println!("{:>5} {:>10.1} {:>10.1}", job, duration, lp.dist_to(job)?);
    }

    let critical: Vec<String> = lp
        .path_to(sink)?
        .iter()
        .filter(|e| e.from < n && e.to == e.from + n)
        .map(|e| e.from.to_string())
        .collect();
    println!(
        "\nProject finish time: {}",
        format!("{:.1}", lp.dist_to(sink)?).yellow().bold()
    );
    println!("Critical path: {}", critical.join(" -> "));

    Ok(())
}
