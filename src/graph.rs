use std::collections::{BTreeMap, BTreeSet};

/// Undirected, unweighted graph over ordered node identifiers
///
/// Adjacency is symmetric: `add_edge(u, v)` records `v` as a neighbour of `u`
/// and `u` as a neighbour of `v`. Nodes only exist through edges, so a node
/// with no edges is never present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N: Ord + Clone> {
    edges: BTreeMap<N, BTreeSet<N>>,
}

impl<N: Ord + Clone> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Ord + Clone> Graph<N> {
    pub fn new() -> Self {
        Graph {
            edges: BTreeMap::new(),
        }
    }

    /// Insert an undirected edge. Repeated insertion is a no-op.
    pub fn add_edge(&mut self, u: N, v: N) {
        self.edges.entry(u.clone()).or_default().insert(v.clone());
        self.edges.entry(v).or_default().insert(u);
    }

    pub fn contains(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    /// Neighbours of `node` in ascending order (empty if absent)
    pub fn neighbors(&self, node: &N) -> impl Iterator<Item = &N> + '_ {
        self.edges.get(node).into_iter().flat_map(|set| set.iter())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.edges.keys()
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of undirected edges (a self-loop counts once)
    pub fn edge_count(&self) -> usize {
        let mut loops = 0;
        let mut ends = 0;
        for (node, neighbors) in &self.edges {
            ends += neighbors.len();
            if neighbors.contains(node) {
                loops += 1;
            }
        }
        (ends - loops) / 2 + loops
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Shortest path from `source` to `target` as the list of traversed edges
    ///
    /// Returns an empty list when `source == target`, when either node is
    /// absent, or when `target` is unreachable.
    pub fn shortest_path(&self, source: &N, target: &N) -> Vec<(N, N)> {
        if source == target || !self.contains(source) || !self.contains(target) {
            return Vec::new();
        }

        let (_, prev) = self.dijkstra(source);

        // The source never gets a predecessor, so the walk stops there
        let mut path = Vec::new();
        let mut v = target;
        while let Some(u) = prev.get(v) {
            path.push((u.clone(), v.clone()));
            v = u;
        }

        path.reverse();
        path
    }

    /// Hop distance from `source` to every node reachable from it
    pub fn distances(&self, source: &N) -> BTreeMap<N, usize> {
        if !self.contains(source) {
            return BTreeMap::new();
        }
        self.dijkstra(source).0
    }

    /// Dijkstra with unit weights and linear-scan minimum selection
    ///
    /// Among nodes at equal distance the smallest identifier is settled
    /// first. A predecessor is only replaced on strict improvement, so the
    /// first minimal route found is the one kept.
    fn dijkstra(&self, source: &N) -> (BTreeMap<N, usize>, BTreeMap<N, N>) {
        let mut unvisited: BTreeSet<&N> = self.edges.keys().collect();
        let mut dist: BTreeMap<N, usize> = BTreeMap::new();
        let mut prev: BTreeMap<N, N> = BTreeMap::new();

        dist.insert(source.clone(), 0);

        loop {
            // Nodes missing from `dist` are still at infinity and never win
            let next = unvisited
                .iter()
                .copied()
                .filter_map(|node| dist.get(node).map(|&d| (d, node)))
                .min();

            let Some((d, u)) = next else {
                break;
            };
            unvisited.remove(u);

            for v in self.neighbors(u) {
                let alt = d + 1;
                let improves = match dist.get(v) {
                    Some(&known) => alt < known,
                    None => true,
                };
                if improves {
                    dist.insert(v.clone(), alt);
                    prev.insert(v.clone(), u.clone());
                }
            }
        }

        (dist, prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //  A--B--C--D
    //  |     |  |    I--J
    //  E--F--G--H
    fn letters() -> Graph<&'static str> {
        let mut graph = Graph::new();
        graph.add_edge("A", "B");
        graph.add_edge("A", "E");
        graph.add_edge("B", "C");
        graph.add_edge("C", "D");
        graph.add_edge("C", "G");
        graph.add_edge("D", "H");
        graph.add_edge("E", "F");
        graph.add_edge("F", "G");
        graph.add_edge("G", "H");
        graph.add_edge("I", "J");
        graph
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = Graph::new();
        graph.add_edge("foobar", "foo");
        graph.add_edge("foobar", "bar");

        let foobar: Vec<_> = graph.neighbors(&"foobar").copied().collect();
        assert_eq!(foobar, vec!["bar", "foo"]);
        assert!(graph.neighbors(&"foo").any(|n| *n == "foobar"));
        assert!(graph.neighbors(&"bar").any(|n| *n == "foobar"));
    }

    #[test]
    fn test_add_edge_is_idempotent() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_edge_count_with_self_loop() {
        let mut graph = Graph::new();
        graph.add_edge(1, 1);
        graph.add_edge(1, 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_no_path_to_self() {
        assert!(letters().shortest_path(&"A", &"A").is_empty());
    }

    #[test]
    fn test_no_path_between_components() {
        assert!(letters().shortest_path(&"H", &"I").is_empty());
    }

    #[test]
    fn test_no_path_to_absent_node() {
        let graph = letters();
        assert!(graph.shortest_path(&"A", &"Z").is_empty());
        assert!(graph.shortest_path(&"Z", &"A").is_empty());
    }

    #[test]
    fn test_single_edge_path() {
        assert_eq!(letters().shortest_path(&"I", &"J"), vec![("I", "J")]);
        assert_eq!(letters().shortest_path(&"A", &"E"), vec![("A", "E")]);
    }

    #[test]
    fn test_paths_with_ties() {
        let graph = letters();
        assert_eq!(graph.shortest_path(&"A", &"C"), vec![("A", "B"), ("B", "C")]);
        assert_eq!(graph.shortest_path(&"B", &"E"), vec![("B", "A"), ("A", "E")]);
        assert_eq!(graph.shortest_path(&"B", &"G"), vec![("B", "C"), ("C", "G")]);
        assert_eq!(
            graph.shortest_path(&"B", &"H"),
            vec![("B", "C"), ("C", "D"), ("D", "H")]
        );
        assert_eq!(
            graph.shortest_path(&"C", &"E"),
            vec![("C", "B"), ("B", "A"), ("A", "E")]
        );
    }

    #[test]
    fn test_distances() {
        let dist = letters().distances(&"A");
        assert_eq!(dist.get("A"), Some(&0));
        assert_eq!(dist.get("C"), Some(&2));
        assert_eq!(dist.get("H"), Some(&4));
        assert_eq!(dist.get("I"), None);
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u32> = Graph::new();
        assert!(graph.is_empty());
        assert!(graph.shortest_path(&0, &1).is_empty());
        assert!(graph.distances(&0).is_empty());
    }
}
