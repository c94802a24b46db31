//! Set operations over vertex lists.
//!
//! The search keeps its candidate and excluded sets as plain vectors, so that
//! iteration order (and therefore the trace) is reproducible. These helpers
//! never modify their inputs: each one allocates a fresh vector.

use std::hash::Hash;

use foldhash::HashSet;

/** elements of a, then elements of b not already seen. No duplicates. */
pub fn union<V:Clone+Eq+Hash>(a:&[V], b:&[V]) -> Vec<V> {
    let mut seen:HashSet<&V> = HashSet::default();
    let mut res = Vec::with_capacity(a.len() + b.len());
    for e in a.iter().chain(b.iter()) {
        if seen.insert(e) {
            res.push(e.clone());
        }
    }
    res
}

/** elements of a that are also in b (a's order) */
pub fn intersection<V:Clone+Eq+Hash>(a:&[V], b:&[V]) -> Vec<V> {
    let in_b:HashSet<&V> = b.iter().collect();
    a.iter().filter(|e| in_b.contains(e)).cloned().collect()
}

/** elements of a that are not in b (a's order) */
pub fn difference<V:Clone+Eq+Hash>(a:&[V], b:&[V]) -> Vec<V> {
    let in_b:HashSet<&V> = b.iter().collect();
    a.iter().filter(|e| !in_b.contains(e)).cloned().collect()
}
