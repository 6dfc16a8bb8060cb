use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

/// Who bet against whom. After every betting round each pair of still-active
/// seats receives an edge in both directions, weighted by the round's
/// current bet (k seats -> k*(k-1) directed edges). Purely observational:
/// nodes and edges are never removed, the graph only grows for the lifetime
/// of a game, and nothing here feeds back into play.
#[derive(Debug, Default)]
pub struct InteractionGraph {
    graph: DiGraph<String, u32>,
    nodes: HashMap<String, NodeIndex>,
}

impl InteractionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(&ix) = self.nodes.get(name) {
            return ix;
        }
        let ix = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), ix);
        ix
    }

    /// Record one pairwise interaction, symmetric: an edge in each direction.
    pub fn record(&mut self, a: &str, b: &str, chips: u32) {
        let (na, nb) = (self.node(a), self.node(b));
        self.graph.add_edge(na, nb, chips);
        self.graph.add_edge(nb, na, chips);
    }

    /// Record a finished betting round: every unordered pair among `names`
    /// interacted at the round's current bet. O(k^2) per round.
    pub fn record_round(&mut self, names: &[&str], current_bet: u32) {
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                self.record(names[i], names[j], current_bet);
            }
        }
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Player names in first-seen order.
    pub fn players(&self) -> Vec<String> {
        self.graph.node_weights().cloned().collect()
    }

    /// Outgoing interactions of one player as (other, chips) pairs, oldest
    /// first. Petgraph iterates edges newest-first, so the order is flipped.
    pub fn interactions_of(&self, name: &str) -> Vec<(String, u32)> {
        let Some(&ix) = self.nodes.get(name) else {
            return Vec::new();
        };
        let mut edges: Vec<(String, u32)> = self
            .graph
            .edges_directed(ix, Direction::Outgoing)
            .map(|e| (self.graph[e.target()].clone(), *e.weight()))
            .collect();
        edges.reverse();
        edges
    }
}
