// Bron, C.; Kerbosch, J. (1973). "Algorithm 457: finding all cliques of an undirected graph". Communications of the ACM. 16 (9): 575–577. doi:10.1145/362342.362367.
// Tomita, E.; Tanaka, A.; Takahashi, H. (2006). "The worst-case time complexity for generating all maximal cliques and computational experiments". Theoretical Computer Science. 363 (1): 28–42.
// Eppstein, D.; Löffler, M.; Strash, D. (2010). "Listing all maximal cliques in sparse graphs in near-optimal time". ISAAC 2010.

use std::cmp::max;
use std::fmt;

use foldhash::HashSet;
use indexmap::IndexSet;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::ConfigError;
use crate::graph::{Clique, GraphView, neighbors_within};
use crate::output::{OutputSink, format_cliques, format_vertices};
use crate::sets::{difference, intersection};
use crate::search::degeneracy::degeneracy_ordering;
use crate::search::maximum::maximum_cliques;
use crate::search::pivot::pivot_environment;


/** counters collected during a search */
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// number of recursive calls
    pub calls: usize,
    /// branches cut because an excluded vertex sees every candidate
    pub pruned: usize,
    /// maximal cliques recorded
    pub maximal: usize,
    /// deepest recursion level reached
    pub max_depth: usize,
}

impl SearchStats {
    /// adds the counters of another (independent) search
    pub fn merge(&mut self, other:&SearchStats) {
        self.calls += other.calls;
        self.pruned += other.pruned;
        self.maximal += other.maximal;
        self.max_depth = max(self.max_depth, other.max_depth);
    }
}


/** checks that a graph view describes a simple undirected graph:
no vertex listed twice, no self-loop, symmetric adjacency. O(n²) adjacency queries.
*/
pub fn validate_graph<G:GraphView>(graph:&G) -> Result<(), ConfigError> {
    let vertices = graph.vertices();
    let mut seen:HashSet<&G::Vertex> = HashSet::default();
    for v in &vertices {
        if !seen.insert(v) {
            return Err(ConfigError::DuplicateVertex(v.to_string()));
        }
    }
    for (i,u) in vertices.iter().enumerate() {
        if graph.are_adjacent(u, u) {
            return Err(ConfigError::SelfLoop(u.to_string()));
        }
        for v in &vertices[i+1..] {
            let uv = graph.are_adjacent(u, v);
            if uv != graph.are_adjacent(v, u) {
                let (a,b) = if uv { (u,v) } else { (v,u) };
                return Err(ConfigError::AsymmetricAdjacency { u: a.to_string(), v: b.to_string() });
            }
        }
    }
    Ok(())
}


/** one depth-first exploration over a read-only graph.
Owns the cliques found in its subtree. Trace lines are emitted only if a sink is given.
*/
struct Explorer<'g, 's, G:GraphView> {
    graph: &'g G,
    use_pivot: bool,
    sink: Option<&'s mut dyn OutputSink<G::Vertex>>,
    cliques: Vec<Clique<G::Vertex>>,
    stats: SearchStats,
}

impl<'g, 's, G:GraphView> Explorer<'g, 's, G> {

    fn new(graph:&'g G, use_pivot:bool, sink:Option<&'s mut dyn OutputSink<G::Vertex>>) -> Self {
        Self { graph, use_pivot, sink, cliques: Vec::new(), stats: SearchStats::default() }
    }

    /// emits a step indented by the recursion depth (the line is only built if needed)
    fn trace<F:FnOnce() -> String>(&mut self, depth:usize, step:F) {
        if let Some(sink) = self.sink.as_mut() {
            let line = format!("{}{}", "\t".repeat(depth), step());
            sink.emit(&line);
        }
    }

    /// true if some excluded vertex is adjacent to every candidate
    fn is_dead_end(&self, candidates:&[G::Vertex], excluded:&[G::Vertex]) -> bool {
        excluded.iter().any(|f| candidates.iter().all(|p| self.graph.are_adjacent(f, p)))
    }

    fn record(&mut self, clique:&[G::Vertex], depth:usize) {
        self.stats.maximal += 1;
        self.trace(depth, || format!("Maximal clique found: {}", format_vertices(clique.iter())));
        self.cliques.push(clique.iter().cloned().collect());
    }

    /** explores the frame (R, P, X).
    R is shared along the recursion (push before a branch, pop after it), P and X are owned by the frame.
    */
    fn search(
        &mut self,
        clique:&mut Vec<G::Vertex>,
        mut candidates:Vec<G::Vertex>,
        mut excluded:Vec<G::Vertex>,
        depth:usize,
    ) {
        self.stats.calls += 1;
        self.stats.max_depth = max(self.stats.max_depth, depth);
        self.trace(depth, || format!(
            "R: {}\tP: {}\tX: {}",
            format_vertices(clique.iter()),
            format_vertices(candidates.iter()),
            format_vertices(excluded.iter())
        ));
        if self.is_dead_end(&candidates, &excluded) {
            self.stats.pruned += 1;
            self.trace(depth, || format!("End of branch: {}", format_vertices(clique.iter())));
            return;
        }
        if candidates.is_empty() && excluded.is_empty() {
            if !clique.is_empty() {
                self.record(clique, depth);
            }
            return;
        }
        // frozen list of branches, P and X below are the live sets of this frame
        let branches = if self.use_pivot {
            let environment = pivot_environment(self.graph, &candidates, &excluded);
            difference(&candidates, &environment)
        } else {
            candidates.clone()
        };
        for v in branches {
            clique.push(v.clone());
            candidates.retain(|c| c != &v);
            let new_candidates = neighbors_within(self.graph, &v, &candidates);
            let new_excluded = neighbors_within(self.graph, &v, &excluded);
            if new_candidates.is_empty() && new_excluded.is_empty() {
                self.record(clique, depth);
            } else {
                self.search(clique, new_candidates, new_excluded, depth+1);
            }
            excluded.push(v);
            clique.pop();
        }
    }

    /// search started from (∅, V, ∅)
    fn plain_pass(&mut self) {
        let mut clique = Vec::new();
        let candidates = self.graph.vertices();
        self.search(&mut clique, candidates, Vec::new(), 0);
    }

    /// outer loop over a degeneracy ordering, inner calls use the regular search
    fn degeneracy_pass(&mut self) {
        let ordering = degeneracy_ordering(self.graph);
        self.trace(0, || format!("Computed degeneracy ordering: {}", format_vertices(ordering.iter())));
        let mut candidates = self.graph.vertices();
        let mut excluded = Vec::new();
        for v in ordering {
            let neighbours = neighbors_within(self.graph, &v, &candidates);
            let mut clique = vec![v.clone()];
            let new_candidates = intersection(&candidates, &neighbours);
            let new_excluded = neighbors_within(self.graph, &v, &excluded);
            self.search(&mut clique, new_candidates, new_excluded, 1);
            candidates.retain(|c| c != &v);
            excluded.push(v);
        }
    }
}


/** Bron-Kerbosch search engine.

Enumerates every maximal clique of the graph, then keeps the maximum ones.
 - use_degeneracy: the outermost level iterates over a degeneracy ordering
 - use_pivot: every level only branches on the candidates not adjacent to a pivot

The four configurations find the same set of cliques, only the traversal differs.
Results are readable after `run` (empty before).
*/
pub struct BronKerbosch<'a, G:GraphView, S:OutputSink<G::Vertex>> {
    graph: &'a G,
    use_degeneracy: bool,
    use_pivot: bool,
    sink: &'a mut S,
    maximal: Vec<Clique<G::Vertex>>,
    maximum: Vec<Clique<G::Vertex>>,
    stats: SearchStats,
}

impl<'a, G:GraphView, S:OutputSink<G::Vertex>> fmt::Debug for BronKerbosch<'a, G, S> {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BronKerbosch")
            .field("use_degeneracy", &self.use_degeneracy)
            .field("use_pivot", &self.use_pivot)
            .field("nb_maximal", &self.maximal.len())
            .field("nb_maximum", &self.maximum.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a, G:GraphView, S:OutputSink<G::Vertex>> BronKerbosch<'a, G, S> {

    /** creates the engine. Fails if the graph is not simple and undirected. */
    pub fn new(graph:&'a G, use_degeneracy:bool, use_pivot:bool, sink:&'a mut S) -> Result<Self, ConfigError> {
        validate_graph(graph)?;
        Ok(Self {
            graph,
            use_degeneracy,
            use_pivot,
            sink,
            maximal: Vec::new(),
            maximum: Vec::new(),
            stats: SearchStats::default(),
        })
    }

    /** enumerates the maximal cliques, extracts the maximum ones and reports both to the sink */
    pub fn run(&mut self) {
        self.emit_header();
        let (cliques, stats) = {
            let sink:&mut dyn OutputSink<G::Vertex> = &mut *self.sink;
            let mut explorer = Explorer::new(self.graph, self.use_pivot, Some(sink));
            if self.use_degeneracy {
                explorer.degeneracy_pass();
            } else {
                explorer.plain_pass();
            }
            (explorer.cliques, explorer.stats)
        };
        self.store(cliques, stats);
    }

    /// maximal cliques found by the last run
    pub fn maximal_cliques(&self) -> &[Clique<G::Vertex>] { &self.maximal }

    /// maximum cliques found by the last run
    pub fn maximum_cliques(&self) -> &[Clique<G::Vertex>] { &self.maximum }

    /// statistics of the last run
    pub fn stats(&self) -> &SearchStats { &self.stats }

    fn emit_header(&mut self) {
        self.sink.emit("Bron-Kerbosch algorithm");
        self.sink.emit(&format!("Utilize degeneracy ordering: {}", self.use_degeneracy));
        self.sink.emit(&format!("Utilize pivot environment: {}", self.use_pivot));
    }

    fn store(&mut self, cliques:Vec<Clique<G::Vertex>>, stats:SearchStats) {
        self.maximum = maximum_cliques(&cliques);
        self.maximal = cliques;
        self.stats = stats;
        self.sink.set_maximal_cliques(&self.maximal);
        self.sink.set_maximum_cliques(&self.maximum);
        self.sink.emit(&format!("Maximal cliques: {}", format_cliques(&self.maximal)));
        self.sink.emit(&format!("Maximum cliques: {}", format_cliques(&self.maximum)));
    }
}

impl<'a, G, S> BronKerbosch<'a, G, S>
where G:GraphView+Sync, G::Vertex:Send+Sync, S:OutputSink<G::Vertex> {

    /** same results as `run`, the outermost loop being split over the rayon thread pool.

    The outer vertices (degeneracy ordering if enabled, graph order otherwise) are
    independent units: unit i starts from R = {v_i}, P = later neighbors of v_i,
    X = earlier neighbors of v_i. Steps of the units are not traced. Cliques are
    concatenated in the order of the outer vertices, so the output is deterministic.
    */
    pub fn run_parallel(&mut self) {
        self.emit_header();
        let ordering = if self.use_degeneracy {
            let ordering = degeneracy_ordering(self.graph);
            self.sink.emit(&format!("Computed degeneracy ordering: {}", format_vertices(ordering.iter())));
            ordering
        } else {
            self.graph.vertices()
        };
        let position:IndexSet<G::Vertex> = ordering.iter().cloned().collect();
        let graph = self.graph;
        let use_pivot = self.use_pivot;
        let units:Vec<(Vec<Clique<G::Vertex>>, SearchStats)> = (0..ordering.len()).into_par_iter().map(|i| {
            let v = &ordering[i];
            let mut candidates = Vec::new();
            let mut excluded = Vec::new();
            for u in graph.neighbors(v) {
                match position.get_index_of(&u) {
                    Some(j) if j > i => candidates.push(u),
                    Some(j) if j < i => excluded.push(u),
                    _ => {}
                }
            }
            let mut explorer = Explorer::new(graph, use_pivot, None);
            let mut clique = vec![v.clone()];
            explorer.search(&mut clique, candidates, excluded, 1);
            (explorer.cliques, explorer.stats)
        }).collect();
        let mut cliques = Vec::new();
        let mut stats = SearchStats::default();
        for (unit_cliques, unit_stats) in units {
            cliques.extend(unit_cliques);
            stats.merge(&unit_stats);
        }
        self.store(cliques, stats);
    }
}
