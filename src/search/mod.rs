//! Clique search: Bron-Kerbosch enumeration of the maximal cliques and its helpers.

/// Bron-Kerbosch search engine (plain, pivot and degeneracy variants)
pub mod bron_kerbosch;

/// pivot vertex selection
pub mod pivot;

/// degeneracy ordering of a graph
pub mod degeneracy;

/// keeps the largest cliques of a collection
pub mod maximum;
