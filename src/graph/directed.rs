use crate::graph::traits::{Vertex, Weight};
use indexmap::{IndexMap, IndexSet};
use rand::Rng;

/// A directed graph implementation using adjacency maps
///
/// Vertices and edges are kept in insertion order, so iteration over the graph is
/// deterministic for a given construction sequence. Inserting an edge that already
/// exists keeps the smaller of the two weights.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Every vertex of the graph: sources of edges, targets of edges and isolated vertices
    vertices: IndexSet<V>,

    /// Outgoing edges for each vertex: vertex_id -> {target_vertex: weight}
    outgoing_edges: IndexMap<V, IndexMap<V, W>>,
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> DirectedGraph<V, W>
where
    V: Vertex,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: IndexSet::new(),
            outgoing_edges: IndexMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: IndexSet::with_capacity(vertices),
            outgoing_edges: IndexMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Adds a vertex without edges. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.vertices.contains(&vertex) {
            return false;
        }
        self.outgoing_edges.entry(vertex.clone()).or_default();
        self.vertices.insert(vertex)
    }

    /// Adds a directed edge, collapsing parallel edges to the minimum weight.
    ///
    /// Returns true if the stored weight for `(from, to)` changed.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        if !self.vertices.contains(&from) {
            self.vertices.insert(from.clone());
        }
        if !self.vertices.contains(&to) {
            self.vertices.insert(to.clone());
        }

        let targets = self.outgoing_edges.entry(from).or_default();
        match targets.get_mut(&to) {
            Some(existing) if *existing <= weight => false,
            Some(existing) => {
                *existing = weight;
                true
            }
            None => {
                targets.insert(to, weight);
                true
            }
        }
    }

    /// Returns the number of vertices, counting vertices that only appear as edge targets
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of (collapsed) edges
    pub fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|targets| targets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the vertex exists in the graph
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Position of a vertex in insertion order
    pub fn vertex_index(&self, vertex: &V) -> Option<usize> {
        self.vertices.get_index_of(vertex)
    }

    /// Iterates over all vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Returns an iterator over the outgoing edges from a vertex
    pub fn outgoing_edges<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, W)> + 'a {
        self.outgoing_edges
            .get(vertex)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(to, weight)| (to, *weight)))
    }

    pub fn out_degree(&self, vertex: &V) -> usize {
        self.outgoing_edges.get(vertex).map_or(0, |targets| targets.len())
    }

    /// Iterates over every edge as `(from, to, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, W)> + '_ {
        self.outgoing_edges
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |(to, weight)| (from, to, *weight)))
    }

    /// Returns true if there's an edge between the two vertices
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing_edges.get(from).and_then(|targets| targets.get(to)).copied()
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.edges().all(|(_, _, weight)| weight >= W::zero())
    }

    /// Builds the subgraph induced by the vertices for which `keep` returns true.
    ///
    /// Kept vertices stay in the subgraph even if none of their edges survive.
    pub fn induced_subgraph<F>(&self, keep: F) -> Self
    where
        F: Fn(&V) -> bool,
    {
        let mut subgraph = DirectedGraph::new();
        for vertex in self.vertices.iter().filter(|v| keep(*v)) {
            subgraph.add_vertex(vertex.clone());
        }

        for (from, targets) in &self.outgoing_edges {
            if !subgraph.has_vertex(from) {
                continue;
            }
            for (to, weight) in targets {
                if subgraph.has_vertex(to) {
                    subgraph.add_edge(from.clone(), to.clone(), *weight);
                }
            }
        }

        subgraph
    }

    /// Samples `size` distinct vertices uniformly without replacement and returns the
    /// subgraph they induce. Sizes above the vertex count are clamped.
    pub fn sample_induced<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Self {
        let n = self.vertex_count();
        let size = size.min(n);

        let mut keep = vec![false; n];
        for index in rand::seq::index::sample(rng, n, size) {
            keep[index] = true;
        }

        self.induced_subgraph(|vertex| {
            self.vertex_index(vertex).map_or(false, |index| keep[index])
        })
    }
}
