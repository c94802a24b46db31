use std::fmt;
use std::hash::Hash;

use bit_set::BitSet;
use indexmap::IndexSet;

use crate::error::ConfigError;

/** Vertex Id (dense index of a vertex inside a [`Graph`]) */
pub type VertexId = usize;

/** anything usable as a vertex: comparable, hashable and printable in traces */
pub trait Vertex: Clone + Eq + Hash + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Display> Vertex for T {}

/** a clique, stored as a set that remembers the order vertices were added in.
Two cliques are equal if they contain the same vertices.
*/
pub type Clique<V> = IndexSet<V>;

/** read-only view of a simple undirected graph, as consumed by the clique search */
pub trait GraphView {
    /// vertex type
    type Vertex: Vertex;

    /// every vertex of the graph, in a stable order
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// true iff u and v share an edge
    fn are_adjacent(&self, u:&Self::Vertex, v:&Self::Vertex) -> bool;

    /// number of neighbors of u in the whole graph
    fn degree(&self, u:&Self::Vertex) -> usize;

    /// vertices adjacent to u
    fn neighbors(&self, u:&Self::Vertex) -> Vec<Self::Vertex> {
        self.vertices().into_iter().filter(|v| v != u && self.are_adjacent(u, v)).collect()
    }

    /// number of vertices
    fn nb_vertices(&self) -> usize { self.vertices().len() }
}

/** returns the vertices of `candidates` adjacent to `v` (keeps the order of `candidates`) */
pub fn neighbors_within<G:GraphView>(graph:&G, v:&G::Vertex, candidates:&[G::Vertex]) -> Vec<G::Vertex> {
    candidates.iter().filter(|c| graph.are_adjacent(v, c)).cloned().collect()
}

/** models a simple undirected graph over labelled vertices. */
#[derive(Debug, Clone)]
pub struct Graph<V:Vertex> {
    /// vertex labels, labels[i] is the label of vertex i
    labels: IndexSet<V>,
    /// nb edges
    m: usize,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
}

impl<V:Vertex> Default for Graph<V> {
    fn default() -> Self { Self::new() }
}

impl<V:Vertex> GraphView for Graph<V> {
    type Vertex = V;

    fn vertices(&self) -> Vec<V> { self.labels.iter().cloned().collect() }

    fn are_adjacent(&self, u:&V, v:&V) -> bool {
        match (self.id(u), self.id(v)) {
            (Some(a), Some(b)) => self.are_adjacent_ids(a, b),
            _ => false
        }
    }

    fn degree(&self, u:&V) -> usize {
        self.id(u).map_or(0, |a| self.adj_list[a].len())
    }

    fn neighbors(&self, u:&V) -> Vec<V> {
        match self.id(u) {
            None => Vec::new(),
            Some(a) => self.adj_list[a].iter().map(|b| self.labels[*b].clone()).collect()
        }
    }

    fn nb_vertices(&self) -> usize { self.labels.len() }
}

impl<V:Vertex> Graph<V> {

    /** empty graph */
    pub fn new() -> Self {
        Self { labels: IndexSet::new(), m: 0, adj_list: Vec::new(), adj_matrix: None }
    }

    /** builds a graph from a vertex list and an edge list. Edge endpoints must be declared. */
    pub fn from_edges<I, E>(vertices:I, edges:E) -> Result<Self, ConfigError>
    where I: IntoIterator<Item=V>, E: IntoIterator<Item=(V,V)> {
        let mut res = Self::new();
        for v in vertices { res.add_vertex(v); }
        for (u,v) in edges {
            let a = res.id(&u).ok_or_else(|| ConfigError::UnknownVertex(u.to_string()))?;
            let b = res.id(&v).ok_or_else(|| ConfigError::UnknownVertex(v.to_string()))?;
            res.add_edge(a, b)?;
        }
        res.populate_adj_matrix();
        Ok(res)
    }

    /// returns the number of edges in the graph
    pub fn nb_edges(&self) -> usize { self.m }

    /// id of a vertex label (if it exists)
    pub fn id(&self, v:&V) -> Option<VertexId> { self.labels.get_index_of(v) }

    /// label of vertex i
    pub fn label(&self, i:VertexId) -> Option<&V> { self.labels.get_index(i) }

    /// list of vertices adjacent to vertex i
    pub fn adj(&self, i:VertexId) -> &[VertexId] { &self.adj_list[i] }

    /// adds a vertex (if not already present) and returns its id
    pub fn add_vertex(&mut self, v:V) -> VertexId {
        let (id, inserted) = self.labels.insert_full(v);
        if inserted {
            self.adj_list.push(Vec::new());
            if let Some(matrix) = &mut self.adj_matrix {
                matrix.push(BitSet::default());
            }
        }
        id
    }

    /** adds the undirected edge {a,b}. Returns false if the edge already existed. */
    pub fn add_edge(&mut self, a:VertexId, b:VertexId) -> Result<bool, ConfigError> {
        if a == b {
            return Err(ConfigError::SelfLoop(self.labels[a].to_string()));
        }
        if self.are_adjacent_ids(a, b) {
            return Ok(false);
        }
        self.adj_list[a].push(b);
        self.adj_list[b].push(a);
        if let Some(matrix) = &mut self.adj_matrix {
            matrix[a].insert(b);
            matrix[b].insert(a);
        }
        self.m += 1;
        Ok(true)
    }

    /// if called, populate the adj_matrix
    pub fn populate_adj_matrix(&mut self) {
        let mut res = vec![BitSet::default(); self.labels.len()];
        for (a,resa) in res.iter_mut().enumerate() {
            for b in &self.adj_list[a] {
                resa.insert(*b);
            }
        }
        self.adj_matrix = Some(res);
    }

    /** returns if a and b are adjacent
    if the adjacency matrix is defined: O(1)
    otherwise: O(Δ(G))
    */
    pub fn are_adjacent_ids(&self, a:VertexId, b:VertexId) -> bool {
        match &self.adj_matrix {
            None => { self.adj_list[a].iter().any(|c| &b==c) },
            Some(matrix) => { matrix[a].contains(b) }
        }
    }

    /// builds the edge list
    pub fn edges(&self) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in self.adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /// print statistics of the graph
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.adj_list.iter().map(|l| l.len()).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            println!("\t{} \t min degree", min);
            println!("\t{} \t max degree", max);
        }
        if self.adj_matrix.is_some() {
            println!("\tadj matrix computed");
        }
    }
}
