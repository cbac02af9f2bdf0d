use libc::c_int;

use crate::algorithm::{PathMode, ShortestPathTree};
use crate::graph::WeightedDigraph;
use crate::{AcyclicPaths, BellmanFord, Dijkstra};

#[repr(C)]
pub struct FfiDigraph {
    graph: WeightedDigraph<f64>,
}

#[no_mangle]
pub extern "C" fn spt_digraph_new(vertices: usize) -> *mut FfiDigraph {
    Box::into_raw(Box::new(FfiDigraph {
        graph: WeightedDigraph::new(vertices),
    }))
}

/// Returns 0 on success, -1 for a null graph or an out-of-range vertex.
#[no_mangle]
pub extern "C" fn spt_digraph_add_edge(g: *mut FfiDigraph, from: usize, to: usize, weight: f64) -> c_int {
    if g.is_null() {
        return -1;
    }
    match unsafe { &mut *g }.graph.add_edge(from, to, weight) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn spt_digraph_free(g: *mut FfiDigraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// Shortest-path tree handed across the C boundary.
/// Unreached vertices keep the infinite sentinel and have parent `usize::MAX`.
#[repr(C)]
pub struct FfiResult {
    distances: *mut f64,
    parents: *mut usize,
    len: usize,
    has_negative_cycle: c_int,
}

#[no_mangle]
pub extern "C" fn spt_result_free(res: *mut FfiResult) {
    if !res.is_null() {
        unsafe {
            if !(*res).distances.is_null() {
                drop(Vec::from_raw_parts((*res).distances, (*res).len, (*res).len));
            }
            if !(*res).parents.is_null() {
                drop(Vec::from_raw_parts((*res).parents, (*res).len, (*res).len));
            }
            drop(Box::from_raw(res));
        }
    }
}

fn export<T: ShortestPathTree<f64>>(tree: &T, has_negative_cycle: bool) -> *mut FfiResult {
    let mut distances = tree.distances().to_vec().into_boxed_slice();
    let mut parents: Box<[usize]> = tree
        .edges_to()
        .iter()
        .map(|e| e.map_or(usize::MAX, |e| e.from))
        .collect();
    let len = distances.len();
    let distances_ptr = distances.as_mut_ptr();
    let parents_ptr = parents.as_mut_ptr();
    std::mem::forget(distances);
    std::mem::forget(parents);
    Box::into_raw(Box::new(FfiResult {
        distances: distances_ptr,
        parents: parents_ptr,
        len,
        has_negative_cycle: c_int::from(has_negative_cycle),
    }))
}

/// Runs Dijkstra from `source`; returns null for a null graph or invalid source.
/// Weights must be nonnegative.
#[no_mangle]
pub extern "C" fn spt_dijkstra(g: *const FfiDigraph, source: usize) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    match Dijkstra::new(unsafe { &(*g).graph }, source) {
        Ok(tree) => export(&tree, false),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Runs Bellman-Ford from `source`; returns null for a null graph or invalid source.
#[no_mangle]
pub extern "C" fn spt_bellman_ford(g: *const FfiDigraph, source: usize) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    match BellmanFord::new(unsafe { &(*g).graph }, source) {
        Ok(tree) => export(&tree, tree.has_negative_cycle()),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Shortest (`longest == 0`) or longest paths in a DAG; returns null when the graph
/// has a cycle. Unreached vertices get `-inf` in longest mode.
#[no_mangle]
pub extern "C" fn spt_acyclic(g: *const FfiDigraph, source: usize, longest: c_int) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let mode = if longest != 0 { PathMode::Longest } else { PathMode::Shortest };
    match AcyclicPaths::new(unsafe { &(*g).graph }, source, mode) {
        Ok(tree) => export(&tree, false),
        Err(_) => std::ptr::null_mut(),
    }
}
