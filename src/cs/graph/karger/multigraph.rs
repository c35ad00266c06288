use std::collections::HashMap;

use crate::cs::error::{Error, Result};

/// An undirected multigraph stored as an arena of neighbor sequences.
///
/// Vertex ids are the indices `0..n` and never change. Each edge `{u, v}`
/// appears once in `adjacency[u]` and once in `adjacency[v]`, so parallel
/// edges show up as repeated ids. `degree[v]` always equals
/// `adjacency[v].len()`.
///
/// The graph built from input is only read; contraction works on a copy
/// obtained through [`Graph::try_clone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub(super) n: usize,
    pub(super) m: usize,
    pub(super) adjacency: Vec<Vec<usize>>,
    pub(super) degree: Vec<usize>,
}

impl Graph {
    /// Builds a graph from already-parsed tables.
    ///
    /// # Arguments
    /// - `n`: Number of vertices.
    /// - `m`: Number of undirected edges.
    /// - `adjacency`: For each vertex, its neighbor ids (0-indexed, duplicates allowed).
    /// - `degree`: For each vertex, its number of incident edges.
    ///
    /// # Errors
    /// Fails on the first structural inconsistency: wrong table sizes, an
    /// out-of-range or self-referencing neighbor, a degree that disagrees
    /// with its list, an edge not listed on both endpoints, or an `m` that
    /// breaks the handshake invariant.
    pub fn new(
        n: usize,
        m: usize,
        adjacency: Vec<Vec<usize>>,
        degree: Vec<usize>,
    ) -> Result<Self> {
        if adjacency.len() != n || degree.len() != n {
            return Err(Error::ShapeMismatch {
                expected: n,
                adjacency: adjacency.len(),
                degree: degree.len(),
            });
        }

        // +1 for each (u, v) with u < v, -1 for each (v, u); balanced iff symmetric.
        let mut balance: HashMap<(usize, usize), i64> = HashMap::new();
        for (vertex, neighbors) in adjacency.iter().enumerate() {
            if degree[vertex] != neighbors.len() {
                return Err(Error::DegreeMismatch {
                    vertex,
                    declared: degree[vertex],
                    actual: neighbors.len(),
                });
            }
            for &neighbor in neighbors {
                if neighbor >= n {
                    return Err(Error::VertexOutOfRange {
                        vertex,
                        neighbor,
                        n,
                    });
                }
                if neighbor == vertex {
                    return Err(Error::SelfLoop(vertex));
                }
                let (key, delta) = if vertex < neighbor {
                    ((vertex, neighbor), 1)
                } else {
                    ((neighbor, vertex), -1)
                };
                *balance.entry(key).or_insert(0) += delta;
            }
        }
        if let Some((&(u, v), _)) = balance.iter().find(|&(_, &count)| count != 0) {
            return Err(Error::AsymmetricEdge(u, v));
        }

        let degree_sum: usize = degree.iter().sum();
        if degree_sum != 2 * m {
            return Err(Error::EdgeCountMismatch {
                declared: m,
                degree_sum,
            });
        }

        Ok(Self {
            n,
            m,
            adjacency,
            degree,
        })
    }

    /// Builds a graph from an undirected edge list (0-indexed pairs).
    ///
    /// Repeated pairs become parallel edges.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut adjacency = vec![Vec::new(); n];
        for &(u, v) in edges {
            for (vertex, neighbor) in [(u, v), (v, u)] {
                let list = adjacency.get_mut(vertex).ok_or(Error::VertexOutOfRange {
                    vertex: neighbor,
                    neighbor: vertex,
                    n,
                })?;
                list.push(neighbor);
            }
        }
        let degree = adjacency.iter().map(Vec::len).collect();
        Self::new(n, edges.len(), adjacency, degree)
    }

    /// Returns an independent copy of the graph.
    ///
    /// Every neighbor sequence is copied element by element, so mutating the
    /// copy is never visible in `self`. Allocation failure is reported
    /// instead of aborting.
    pub fn try_clone(&self) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(self.n)?;
        for neighbors in &self.adjacency {
            let mut copy = Vec::new();
            copy.try_reserve_exact(neighbors.len())?;
            copy.extend_from_slice(neighbors);
            adjacency.push(copy);
        }

        let mut degree = Vec::new();
        degree.try_reserve_exact(self.n)?;
        degree.extend_from_slice(&self.degree);

        Ok(Self {
            n: self.n,
            m: self.m,
            adjacency,
            degree,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of edges, excluding any removed by contraction.
    pub fn edge_count(&self) -> usize {
        self.m
    }

    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    pub fn degree(&self, vertex: usize) -> usize {
        self.degree[vertex]
    }

    pub fn degrees(&self) -> &[usize] {
        &self.degree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap()
    }

    #[test]
    fn test_from_edges_builds_symmetric_lists() {
        let g = square();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.neighbors(0), &[1, 3]);
        assert_eq!(g.neighbors(2), &[1, 3]);
        assert_eq!(g.degrees(), &[2, 2, 2, 2]);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let g = Graph::from_edges(2, &[(0, 1), (1, 0), (0, 1)]).unwrap();
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors(0), &[1, 1, 1]);
        assert_eq!(g.degree(1), 3);
    }

    #[test]
    fn test_new_rejects_out_of_range_neighbor() {
        let err = Graph::new(2, 1, vec![vec![1], vec![2]], vec![1, 1]).unwrap_err();
        assert!(matches!(
            err,
            Error::VertexOutOfRange {
                vertex: 1,
                neighbor: 2,
                n: 2
            }
        ));
    }

    #[test]
    fn test_from_edges_rejects_out_of_range_endpoint() {
        let err = Graph::from_edges(3, &[(0, 1), (1, 5)]).unwrap_err();
        assert!(matches!(err, Error::VertexOutOfRange { .. }));
    }

    #[test]
    fn test_new_rejects_shape_mismatch() {
        let err = Graph::new(3, 0, vec![vec![], vec![]], vec![0, 0, 0]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { expected: 3, .. }));
    }

    #[test]
    fn test_new_rejects_self_loop() {
        let err = Graph::new(2, 1, vec![vec![0], vec![]], vec![1, 0]).unwrap_err();
        assert!(matches!(err, Error::SelfLoop(0)));
    }

    #[test]
    fn test_new_rejects_degree_mismatch() {
        let err = Graph::new(2, 1, vec![vec![1], vec![0]], vec![2, 1]).unwrap_err();
        assert!(matches!(
            err,
            Error::DegreeMismatch {
                vertex: 0,
                declared: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_new_rejects_asymmetric_edge() {
        let err = Graph::new(3, 1, vec![vec![1, 2], vec![0], vec![]], vec![2, 1, 0]).unwrap_err();
        assert!(matches!(err, Error::AsymmetricEdge(0, 2)));
    }

    #[test]
    fn test_new_rejects_wrong_edge_count() {
        let err = Graph::new(2, 2, vec![vec![1], vec![0]], vec![1, 1]).unwrap_err();
        assert!(matches!(
            err,
            Error::EdgeCountMismatch {
                declared: 2,
                degree_sum: 2
            }
        ));
    }

    #[test]
    fn test_try_clone_is_equal_and_independent() {
        let original = square();
        let mut copy = original.try_clone().unwrap();
        assert_eq!(copy, original);

        copy.adjacency[0].clear();
        copy.adjacency[1][0] = 3;
        copy.degree[0] = 0;
        copy.m = 1;

        assert_eq!(original.neighbors(0), &[1, 3]);
        assert_eq!(original.neighbors(1), &[0, 2]);
        assert_eq!(original.degree(0), 2);
        assert_eq!(original.edge_count(), 4);
        assert_ne!(copy, original);
    }
}
