use crate::graph::Clique;

/** returns every clique of maximum size.
Empty input gives an empty output.
*/
pub fn maximum_cliques<V:Clone>(maximal:&[Clique<V>]) -> Vec<Clique<V>> {
    let maximum = maximal.iter().map(|c| c.len()).max().unwrap_or(0);
    maximal.iter().filter(|c| c.len() == maximum).cloned().collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn clique(vertices:&[u32]) -> Clique<u32> { vertices.iter().copied().collect() }

    #[test]
    fn test_keeps_every_largest() {
        let maximal = vec![clique(&[1,2]), clique(&[2,3,4]), clique(&[5]), clique(&[4,5,6])];
        assert_eq!(maximum_cliques(&maximal), vec![clique(&[2,3,4]), clique(&[4,5,6])]);
    }

    #[test]
    fn test_empty() {
        assert!(maximum_cliques::<u32>(&[]).is_empty());
    }
}
