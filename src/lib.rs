//! Maximal and maximum clique enumeration with the Bron-Kerbosch algorithm

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// graph capability trait, vertices, cliques and the adjacency-list graph
pub mod graph;

/// order-preserving set operations over vertex lists
pub mod sets;

/// read graph definition files
pub mod loader;

/// error types
pub mod error;

/// trace and result sinks
pub mod output;

/// helper and utility methods for executables
pub mod util;

/// clique search (Bron-Kerbosch, pivot, degeneracy ordering)
pub mod search;
