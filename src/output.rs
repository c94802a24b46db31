use std::fmt::Display;

use crate::graph::Clique;

/** receives the algorithm steps during the search, and the cliques found afterwards.
The search only needs these calls to succeed; it never reads the sink back.
*/
pub trait OutputSink<V> {
    /// one step of the algorithm, as a human-readable line
    fn emit(&mut self, step:&str);

    /// stores the maximal cliques found
    fn set_maximal_cliques(&mut self, cliques:&[Clique<V>]);

    /// stores the maximum cliques found
    fn set_maximum_cliques(&mut self, cliques:&[Clique<V>]);

    /// maximal cliques stored so far
    fn maximal_cliques(&self) -> &[Clique<V>];

    /// maximum cliques stored so far
    fn maximum_cliques(&self) -> &[Clique<V>];
}

/// "[a, b, c]"
pub fn format_vertices<'a, V:Display+'a, I:IntoIterator<Item=&'a V>>(vertices:I) -> String {
    let names:Vec<String> = vertices.into_iter().map(|v| v.to_string()).collect();
    format!("[{}]", names.join(", "))
}

/// "[[a, b], [c]]"
pub fn format_cliques<V:Display>(cliques:&[Clique<V>]) -> String {
    let names:Vec<String> = cliques.iter().map(|c| format_vertices(c.iter())).collect();
    format!("[{}]", names.join(", "))
}

/** prints the steps on the standard output (if verbose) and keeps the results in memory */
#[derive(Debug, Clone)]
pub struct StandardOutput<V> {
    verbose: bool,
    maximal: Vec<Clique<V>>,
    maximum: Vec<Clique<V>>,
}

impl<V> StandardOutput<V> {
    /// if verbose is false, steps are discarded
    pub fn new(verbose:bool) -> Self {
        Self { verbose, maximal: Vec::new(), maximum: Vec::new() }
    }
}

impl<V:Clone> OutputSink<V> for StandardOutput<V> {
    fn emit(&mut self, step:&str) {
        if self.verbose { println!("{}", step); }
    }

    fn set_maximal_cliques(&mut self, cliques:&[Clique<V>]) { self.maximal = cliques.to_vec(); }

    fn set_maximum_cliques(&mut self, cliques:&[Clique<V>]) { self.maximum = cliques.to_vec(); }

    fn maximal_cliques(&self) -> &[Clique<V>] { &self.maximal }

    fn maximum_cliques(&self) -> &[Clique<V>] { &self.maximum }
}

/** records every step (useful to inspect a trace from code) */
#[derive(Debug, Clone)]
pub struct MemoryOutput<V> {
    steps: Vec<String>,
    maximal: Vec<Clique<V>>,
    maximum: Vec<Clique<V>>,
}

impl<V> Default for MemoryOutput<V> {
    fn default() -> Self {
        Self { steps: Vec::new(), maximal: Vec::new(), maximum: Vec::new() }
    }
}

impl<V> MemoryOutput<V> {
    /// empty recorder
    pub fn new() -> Self { Self::default() }

    /// steps emitted so far
    pub fn steps(&self) -> &[String] { &self.steps }
}

impl<V:Clone> OutputSink<V> for MemoryOutput<V> {
    fn emit(&mut self, step:&str) { self.steps.push(step.to_string()); }

    fn set_maximal_cliques(&mut self, cliques:&[Clique<V>]) { self.maximal = cliques.to_vec(); }

    fn set_maximum_cliques(&mut self, cliques:&[Clique<V>]) { self.maximum = cliques.to_vec(); }

    fn maximal_cliques(&self) -> &[Clique<V>] { &self.maximal }

    fn maximum_cliques(&self) -> &[Clique<V>] { &self.maximum }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let c1:Clique<&str> = vec!["a","b"].into_iter().collect();
        let c2:Clique<&str> = vec!["c"].into_iter().collect();
        assert_eq!(format_vertices(c1.iter()), "[a, b]");
        assert_eq!(format_vertices(Vec::<&str>::new().iter()), "[]");
        assert_eq!(format_cliques(&[c1, c2]), "[[a, b], [c]]");
    }

    #[test]
    fn test_memory_output_stores_results() {
        let mut out:MemoryOutput<u32> = MemoryOutput::new();
        out.emit("first");
        out.emit("second");
        let c:Clique<u32> = vec![1,2].into_iter().collect();
        out.set_maximal_cliques(&[c.clone()]);
        assert_eq!(out.steps(), &["first".to_string(), "second".to_string()]);
        assert_eq!(out.maximal_cliques(), &[c]);
        assert!(out.maximum_cliques().is_empty());
    }
}
