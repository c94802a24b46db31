use crate::graph::{GraphView, neighbors_within};
use crate::sets::union;

/** selects the pivot among P ∪ X: the vertex with the largest degree in the whole graph.
Ties are broken by the first vertex met, scanning P then the vertices of X not in P.
Returns None if both sets are empty.
*/
pub fn select_pivot<G:GraphView>(graph:&G, candidates:&[G::Vertex], excluded:&[G::Vertex]) -> Option<G::Vertex> {
    let mut best:Option<(G::Vertex, usize)> = None;
    for u in union(candidates, excluded) {
        let degree = graph.degree(&u);
        if best.as_ref().map_or(true, |(_, d)| degree > *d) {
            best = Some((u, degree));
        }
    }
    best.map(|(u, _)| u)
}

/** pivot environment: neighbors of the pivot that are still candidates (P's order).
The search only branches on P minus this set.
*/
pub fn pivot_environment<G:GraphView>(graph:&G, candidates:&[G::Vertex], excluded:&[G::Vertex]) -> Vec<G::Vertex> {
    match select_pivot(graph, candidates, excluded) {
        None => Vec::new(),
        Some(pivot) => neighbors_within(graph, &pivot, candidates)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_graphs::labelled;

    fn names(l:&[&str]) -> Vec<String> { l.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn test_highest_degree_wins() {
        // b has degree 3, a and c degree 2
        let g = labelled(&["a","b","c","d"], &[("a","b"),("b","c"),("a","c"),("b","d")]);
        assert_eq!(select_pivot(&g, &names(&["a","c"]), &names(&["b"])), Some("b".to_string()));
        assert_eq!(pivot_environment(&g, &names(&["a","c","d"]), &names(&["b"])), names(&["a","c","d"]));
    }

    #[test]
    fn test_ties_go_to_first_vertex() {
        let g = labelled(&["a","b","c"], &[("a","b"),("b","c"),("a","c")]);
        assert_eq!(select_pivot(&g, &names(&["c","a"]), &names(&["b"])), Some("c".to_string()));
        assert_eq!(select_pivot(&g, &[], &names(&["b","a"])), Some("b".to_string()));
    }

    #[test]
    fn test_isolated_vertices() {
        let g = labelled(&["a","b"], &[]);
        assert_eq!(select_pivot(&g, &names(&["b","a"]), &[]), Some("b".to_string()));
        assert!(pivot_environment(&g, &names(&["b","a"]), &[]).is_empty());
    }

    #[test]
    fn test_empty_pool() {
        let g = labelled(&["a"], &[]);
        assert_eq!(select_pivot(&g, &[], &[]), None);
        assert!(pivot_environment(&g, &[], &[]).is_empty());
    }
}
