use rand::{Rng, seq::SliceRandom};

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Regions of one tiling level and the walls they share.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyGraph {
    nodes: usize,
    edges: Vec<(usize, usize)>,
}

impl AdjacencyGraph {
    pub fn new(nodes: usize, edges: Vec<(usize, usize)>) -> Self {
        debug_assert!(edges.iter().all(|&(a, b)| a < nodes && b < nodes && a != b));
        AdjacencyGraph { nodes, edges }
    }

    pub fn nodes(&self) -> usize {
        self.nodes
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn is_connected(&self) -> bool {
        if self.nodes == 0 {
            return true;
        }
        let mut uf = UnionFind::new(self.nodes);
        let merged = self.edges.iter().filter(|&&(a, b)| uf.unite(a, b)).count();
        merged == self.nodes - 1
    }

    /// A single cycle through every node.
    pub fn is_ring(&self) -> bool {
        let mut degree = vec![0usize; self.nodes];
        for &(a, b) in &self.edges {
            degree[a] += 1;
            degree[b] += 1;
        }
        self.nodes >= 3
            && self.edges.len() == self.nodes
            && degree.iter().all(|&d| d == 2)
            && self.is_connected()
    }
}

/// Picks a uniformly shuffled spanning tree (randomized Kruskal).
///
/// Returns the indices of the accepted edges, in ascending order. The graph
/// must be connected.
pub fn random_spanning_tree<R: Rng + ?Sized>(graph: &AdjacencyGraph, rng: &mut R) -> Vec<usize> {
    debug_assert!(graph.is_connected(), "tiling graph must be connected");
    let target = graph.nodes().saturating_sub(1);

    let mut order: Vec<usize> = (0..graph.edges().len()).collect();
    order.shuffle(rng);

    let mut uf = UnionFind::new(graph.nodes());
    let mut accepted = Vec::with_capacity(target);
    for index in order {
        if accepted.len() == target {
            break;
        }
        let (a, b) = graph.edges()[index];
        if uf.unite(a, b) {
            accepted.push(index);
        }
    }
    accepted.sort_unstable();
    accepted
}

/// The ring case of [`random_spanning_tree`]: every edge but one, chosen uniformly.
pub fn break_ring<R: Rng + ?Sized>(graph: &AdjacencyGraph, rng: &mut R) -> Vec<usize> {
    debug_assert!(graph.is_ring(), "ring selection needs a cycle graph");
    let closed = rng.random_range(0..graph.edges().len());
    (0..graph.edges().len()).filter(|&i| i != closed).collect()
}
