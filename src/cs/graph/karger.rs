//! Karger's randomized contraction algorithm for the global minimum cut.
//!
//! A single trial repeatedly picks a random edge and contracts it until
//! only two vertex groups remain; the edges between those groups form a cut.
//! A trial finds a minimum cut with probability at least `1 / C(n, 2)`, so
//! many independent trials are run and the smallest cut is kept.
//!
//! - [`Graph`]: multigraph stored as per-vertex neighbor lists.
//! - [`Contraction`]: one destructive trial over a working copy.
//! - [`compute_approx_min_cut`] and friends: repeat trials and keep the minimum.
//!
//! # Examples
//!
//! ```rust
//! use karger_mincut::graph::karger::{compute_approx_min_cut, Graph};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let square = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! assert_eq!(compute_approx_min_cut(&square, 100, &mut rng).unwrap(), 2);
//! ```

pub mod contraction;
pub mod input;
pub mod multigraph;
pub mod trials;


pub use contraction::{contract, Contraction, ContractionOutcome, Step, Termination};
pub use input::{parse_adjacency_list, parse_adjacency_reader, read_graph_from_file};
pub use multigraph::Graph;
pub use trials::{
    compute_approx_min_cut, compute_approx_min_cut_parallel, estimate_min_cut, run_trial,
    KargerConfig, MinCutEstimate, TrialBudget,
};

use crate::cs::error::Result;

/// Implements Karger's randomized min cut algorithm.
///
/// # Arguments
/// - `num_vertices`: Number of vertices in the graph.
/// - `edges`: Slice of edges as (u, v) pairs (0-indexed). The graph is undirected.
/// - `trials`: Number of independent trials to run (the more, the higher the chance to find the minimum cut).
///
/// # Returns
/// The estimated minimum cut value.
pub fn karger_min_cut(num_vertices: usize, edges: &[(usize, usize)], trials: usize) -> Result<usize> {
    let graph = Graph::from_edges(num_vertices, edges)?;
    let mut rng = rand::thread_rng();
    compute_approx_min_cut(&graph, trials, &mut rng)
}
