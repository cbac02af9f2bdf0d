use colored::*;
use spt_engine::graph::{path_weight, WeightedDigraph};
use spt_engine::BellmanFord;

/// One row per currency: how many units of every other currency one unit buys
const RATES: &str = "\
USD 1      0.741  0.657  1.061  1.005
EUR 1.349  1      0.888  1.433  1.366
GBP 1.521  1.126  1      1.614  1.538
CHF 0.942  0.698  0.619  1      0.953
CAD 0.995  0.732  0.650  1.049  1";

fn parse_rates(table: &str) -> Result<(Vec<String>, Vec<Vec<f64>>), String> {
    let mut currencies = Vec::new();
    let mut rows = Vec::new();

    for line in table.lines() {
        let mut fields = line.split_whitespace();
        let name = fields.next().ok_or("empty currency rates")?;
        if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Err(format!("invalid currency: {}", name));
        }
        let rates = fields
            .map(|r| r.parse::<f64>().map_err(|e| format!("invalid rate {:?}: {}", r, e)))
            .collect::<Result<Vec<_>, _>>()?;
        if rates.is_empty() {
            return Err(format!("no rates for {}", name));
        }
        currencies.push(name.to_string());
        rows.push(rates);
    }

    Ok((currencies, rows))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "Currency arbitrage via negative cycles".green().bold());

    let (currencies, rows) = parse_rates(RATES)?;

    // Multiplying rates along a path is adding their negated logarithms, so a
    // round trip that gains money is a negative cycle.
    let mut graph = WeightedDigraph::new(currencies.len());
    for (from, rates) in rows.iter().enumerate() {
        for (to, rate) in rates.iter().enumerate() {
            graph.add_edge(from, to, -rate.ln())?;
        }
    }
    println!(
        "Exchange table: {} currencies, {} conversions",
        currencies.len(),
        graph.edges().len()
    );

    let spt = BellmanFord::new(&graph, 0)?;
    if !spt.has_negative_cycle() {
        println!("{}", "No arbitrage opportunity".yellow());
        return Ok(());
    }

    let cycle = spt.negative_cycle();
    println!(
        "Found a cycle of {} trades after {} relaxations (gain factor {:.8})\n",
        cycle.len(),
        spt.relaxations(),
        (-path_weight(cycle)).exp()
    );

    let mut stake = 1000.0;
    for edge in cycle {
        print!("{:>12.5} {} ", stake, currencies[edge.from].cyan());
        stake *= (-edge.weight).exp();
        println!("= {:>12.5} {}", stake, currencies[edge.to].cyan());
    }

    Ok(())
}
