use std::cmp::Reverse;

use indexmap::IndexSet;
use priority_queue::PriorityQueue;

use crate::graph::GraphView;

/** removes vertices one by one, always picking a vertex of minimum degree among
the remaining ones (ties: first vertex in the graph order).
Returns the removed vertices with their degree at removal time.
*/
fn peel<G:GraphView>(graph:&G) -> Vec<(G::Vertex, usize)> {
    let vertices:IndexSet<G::Vertex> = graph.vertices().into_iter().collect();
    // priority: (current degree, position), smallest first
    let mut remaining:PriorityQueue<usize, Reverse<(usize, usize)>> = PriorityQueue::with_capacity(vertices.len());
    for (i,v) in vertices.iter().enumerate() {
        remaining.push(i, Reverse((graph.degree(v), i)));
    }
    let mut res = Vec::with_capacity(vertices.len());
    while let Some((i, Reverse((degree, _)))) = remaining.pop() {
        let v = &vertices[i];
        // the remaining neighbors lose one edge
        for u in graph.neighbors(v) {
            if let Some(j) = vertices.get_index_of(&u) {
                remaining.change_priority_by(&j, |Reverse((d, _))| { *d = d.saturating_sub(1); });
            }
        }
        res.push((v.clone(), degree));
    }
    res
}

/** computes a degeneracy ordering of the graph: each vertex has at most d neighbors
placed after it, d being the degeneracy of the graph.
The degree of a vertex is recomputed on the shrinking set of remaining vertices at each step.
*/
pub fn degeneracy_ordering<G:GraphView>(graph:&G) -> Vec<G::Vertex> {
    peel(graph).into_iter().map(|(v,_)| v).collect()
}

/** degeneracy of the graph (largest minimum degree of a subgraph). 0 for an empty graph. */
pub fn degeneracy<G:GraphView>(graph:&G) -> usize {
    peel(graph).into_iter().map(|(_,d)| d).max().unwrap_or(0)
}
