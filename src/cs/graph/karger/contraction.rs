use bitvec::prelude::*;
use log::trace;
use rand::Rng;

use super::multigraph::Graph;

/// What a single contraction step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `source` was folded into `target`; `self_loops` edges between the two
    /// groups disappeared.
    Merged {
        source: usize,
        target: usize,
        self_loops: usize,
    },
    /// `source` was drawn with no incident edges left. Its group is
    /// disconnected from every other active group, which ends the trial
    /// with a cut of 0.
    Isolated { source: usize },
    /// Nothing left to contract.
    Finished,
}

/// How a trial ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Contracted down to the two listed active vertices.
    Survivors(usize, usize),
    /// Stopped early on a zero-degree group.
    Isolated(usize),
}

/// Result of one randomized contraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractionOutcome {
    pub cut: usize,
    pub termination: Termination,
}

/// One randomized contraction trial over a working copy of a graph.
///
/// The graph is taken by value and consumed by [`Contraction::run`], so a
/// working copy can never be contracted twice.
#[derive(Debug)]
pub struct Contraction {
    graph: Graph,
    absorbed: BitVec,
    remaining: usize,
    isolated: Option<usize>,
}

impl Contraction {
    pub fn new(graph: Graph) -> Self {
        let n = graph.n;
        Self {
            graph,
            absorbed: bitvec![0; n],
            remaining: n,
            isolated: None,
        }
    }

    /// Number of vertex groups still active.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Current state of the working graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Whether `vertex` still heads an active group.
    pub fn is_active(&self, vertex: usize) -> bool {
        !self.absorbed[vertex]
    }

    pub fn is_finished(&self) -> bool {
        self.remaining <= 2 || self.isolated.is_some()
    }

    /// Contracts one randomly chosen edge.
    ///
    /// The source vertex is drawn uniformly among active vertices by
    /// rejection sampling; the edge is drawn uniformly among the source's
    /// incident edges, and the source is folded into the far endpoint.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Step {
        if self.is_finished() {
            return Step::Finished;
        }

        // At least three active vertices exist, so this terminates.
        let source = loop {
            let candidate = rng.gen_range(0..self.graph.n);
            if !self.absorbed[candidate] {
                break candidate;
            }
        };

        if self.graph.degree[source] == 0 {
            trace!("vertex {} is isolated with {} groups left", source, self.remaining);
            self.isolated = Some(source);
            return Step::Isolated { source };
        }

        self.absorbed.set(source, true);
        let edge = rng.gen_range(0..self.graph.degree[source]);
        let target = self.graph.adjacency[source][edge];
        let self_loops = self.merge(source, target);
        self.remaining -= 1;

        trace!(
            "contracted {} into {} ({} self-loops removed, {} groups left)",
            source,
            target,
            self_loops,
            self.remaining
        );
        Step::Merged {
            source,
            target,
            self_loops,
        }
    }

    /// Folds `source` into `target` and drops the resulting self-loops.
    /// Returns the number of edges removed.
    fn merge(&mut self, source: usize, target: usize) -> usize {
        let graph = &mut self.graph;

        // Only neighbors of `source` can hold its id.
        let mut touched = graph.adjacency[source].clone();
        touched.sort_unstable();
        touched.dedup();
        for vertex in touched {
            for neighbor in graph.adjacency[vertex].iter_mut() {
                if *neighbor == source {
                    *neighbor = target;
                }
            }
        }

        let moved = std::mem::take(&mut graph.adjacency[source]);
        graph.adjacency[target].extend(moved);
        graph.degree[target] += graph.degree[source];
        graph.degree[source] = 0;

        let list = &mut graph.adjacency[target];
        let before = list.len();
        list.retain(|&v| v != target && v != source);
        let removed = before - list.len();
        graph.degree[target] -= removed;

        // Each removed edge was listed once from each side.
        let self_loops = removed / 2;
        graph.m -= self_loops;
        self_loops
    }

    /// Runs steps until two groups remain and reports the cut between them.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> ContractionOutcome {
        while self.step(rng) != Step::Finished {}
        self.outcome()
    }

    fn outcome(&self) -> ContractionOutcome {
        if let Some(vertex) = self.isolated {
            return ContractionOutcome {
                cut: 0,
                termination: Termination::Isolated(vertex),
            };
        }

        let mut survivors = self.absorbed.iter_zeros();
        let (first, second) = match (survivors.next(), survivors.next()) {
            (Some(a), Some(b)) => (a, b),
            // Fewer than two vertices: there is no cut to speak of.
            (Some(a), None) => (a, a),
            _ => {
                return ContractionOutcome {
                    cut: 0,
                    termination: Termination::Survivors(0, 0),
                }
            }
        };
        debug_assert_eq!(
            self.graph.degree[first], self.graph.degree[second],
            "surviving groups disagree on the cut"
        );
        ContractionOutcome {
            cut: self.graph.degree[first],
            termination: Termination::Survivors(first, second),
        }
    }
}

/// Contracts `graph` down to two vertex groups and returns the cut value.
///
/// `graph` must be a disposable working copy; it is consumed.
pub fn contract<R: Rng + ?Sized>(graph: Graph, rng: &mut R) -> usize {
    Contraction::new(graph).run(rng).cut
}
