use crate::algorithm::cycle::find_cycle;
use crate::graph::{format_path, Edge, Graph, Weight};
use crate::{Error, Result};

/// Computes a topological order of a DAG: for every edge `v->w`, `v` comes before `w`.
///
/// Fails with [`Error::NotAcyclic`] (carrying the offending cycle) if the digraph has a
/// directed cycle; no order is guessed in that case.
pub fn topological_order<W, G>(graph: &G) -> Result<Vec<usize>>
where
    W: Weight,
    G: Graph<W>,
{
    if let Some(cycle) = find_cycle(graph) {
        return Err(Error::NotAcyclic(format_path(&cycle)));
    }
    Ok(reverse_postorder(graph))
}

/// Reverse postorder of a DFS that starts from each unmarked vertex in increasing order.
/// Only meaningful as a topological order when the digraph is acyclic.
pub fn reverse_postorder<W, G>(graph: &G) -> Vec<usize>
where
    W: Weight,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    let mut marked = vec![false; n];
    let mut postorder = Vec::with_capacity(n);
    let mut stack: Vec<(usize, Box<dyn Iterator<Item = &Edge<W>> + '_>)> = Vec::new();

    for root in 0..n {
        if marked[root] {
            continue;
        }
        marked[root] = true;
        stack.push((root, graph.edges_from(root)));

        while let Some((vertex, edges)) = stack.last_mut() {
            match edges.next() {
                Some(edge) if !marked[edge.to] => {
                    marked[edge.to] = true;
                    stack.push((edge.to, graph.edges_from(edge.to)));
                }
                Some(_) => {}
                None => {
                    postorder.push(*vertex);
                    stack.pop();
                }
            }
        }
    }

    postorder.reverse();
    postorder
}
