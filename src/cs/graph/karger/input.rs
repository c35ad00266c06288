//! Reader for the plain-text adjacency-list format.
//!
//! ```text
//! 4
//! 1 2 4
//! 2 1 3
//! 3 2 4
//! 4 3 1
//! ```
//!
//! The first line holds the vertex count. Every other line starts with a
//! 1-based vertex id followed by the ids of its neighbors. Blank lines are
//! ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bitvec::prelude::*;
use log::debug;

use super::multigraph::Graph;
use crate::cs::error::{Error, Result};

fn parse_id(token: &str, n: usize, line: usize) -> Result<usize> {
    let id: usize = token
        .parse()
        .map_err(|_| Error::parse(line, format!("invalid vertex id {:?}", token)))?;
    if id == 0 || id > n {
        return Err(Error::parse(
            line,
            format!("vertex id {} out of range 1..={}", id, n),
        ));
    }
    Ok(id - 1)
}

/// Parses an adjacency list from any buffered reader.
pub fn parse_adjacency_reader<R: BufRead>(reader: R) -> Result<Graph> {
    let mut n: Option<usize> = None;
    let mut adjacency: Vec<Vec<usize>> = Vec::new();
    let mut listed = BitVec::<usize, Lsb0>::new();
    let mut vertex_lines = 0;
    let mut last_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };
        last_line = number;

        let Some(count) = n else {
            let count: usize = first
                .parse()
                .map_err(|_| Error::parse(number, format!("invalid vertex count {:?}", first)))?;
            if tokens.next().is_some() {
                return Err(Error::parse(number, "unexpected data after vertex count"));
            }
            n = Some(count);
            adjacency = vec![Vec::new(); count];
            listed = bitvec![0; count];
            continue;
        };

        let vertex = parse_id(first, count, number)?;
        if listed[vertex] {
            return Err(Error::parse(
                number,
                format!("vertex {} listed more than once", vertex + 1),
            ));
        }
        listed.set(vertex, true);
        for token in tokens {
            let neighbor = parse_id(token, count, number)?;
            adjacency[vertex].push(neighbor);
        }
        vertex_lines += 1;
    }

    let n = n.ok_or_else(|| Error::parse(1, "missing vertex count"))?;
    if vertex_lines != n {
        return Err(Error::parse(
            last_line,
            format!("declared {} vertices but found {} vertex lines", n, vertex_lines),
        ));
    }

    let degree: Vec<usize> = adjacency.iter().map(Vec::len).collect();
    let m = degree.iter().sum::<usize>() / 2;
    debug!("parsed graph with {} vertices and {} edges", n, m);
    Graph::new(n, m, adjacency, degree)
}

/// Parses an adjacency list held in memory.
pub fn parse_adjacency_list(text: &str) -> Result<Graph> {
    parse_adjacency_reader(text.as_bytes())
}

/// Reads an adjacency-list file from disk.
pub fn read_graph_from_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let file = File::open(path.as_ref())?;
    parse_adjacency_reader(BufReader::new(file))
}
