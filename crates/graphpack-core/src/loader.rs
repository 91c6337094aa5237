//! Text edge-list parsing.
//!
//! The input is a sequence of whitespace-separated unsigned integers read
//! three at a time as `from to weight`. Line breaks carry no meaning beyond
//! separating tokens; they are only tracked for diagnostics. There is no
//! header and no end marker.

use std::io::Read;

use tracing::debug;

use crate::adjacency::AdjacencyGraph;
use crate::edge::{Triple, Weight};
use crate::error::{LoadError, Result};

/// Parse an edge list into triples.
///
/// Fails on the first malformed token, out-of-range weight or trailing
/// partial triple.
pub fn parse_edge_list(input: &str) -> Result<Vec<Triple>> {
    let mut triples = Vec::new();
    let mut fields = [0u32; 3];
    let mut filled = 0;
    let mut start_line = 0;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        for (column, token) in line.split_whitespace().enumerate() {
            let value: u32 = token.parse().map_err(|_| LoadError::InvalidToken {
                line: line_no,
                index: column + 1,
                token: token.to_string(),
            })?;
            if filled == 0 {
                start_line = line_no;
            }
            fields[filled] = value;
            filled += 1;

            if filled == 3 {
                let weight = Weight::try_from(fields[2]).map_err(|_| {
                    LoadError::WeightOutOfRange {
                        line: line_no,
                        weight: fields[2],
                    }
                })?;
                triples.push(Triple::new(fields[0], fields[1], weight));
                filled = 0;
            }
        }
    }

    if filled != 0 {
        return Err(LoadError::IncompleteTriple {
            line: start_line,
            found: filled,
        });
    }

    Ok(triples)
}

/// Parse an edge list and build its symmetric adjacency structure.
pub fn load_graph(input: &str) -> Result<AdjacencyGraph> {
    let triples = parse_edge_list(input)?;
    let row_count = triples.len();
    let graph = AdjacencyGraph::from_triples(triples);
    debug!(
        rows = row_count,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        entries = graph.adjacency_entries(),
        "loaded edge list"
    );
    Ok(graph)
}

/// Read a whole edge list from `reader` and build its adjacency structure.
pub fn read_graph<R: Read>(reader: &mut R) -> Result<AdjacencyGraph> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_graph(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_and_space_separated_rows() {
        let triples = parse_edge_list("1\t2\t10\n2 3 20\n  1   3 5  \n").unwrap();
        assert_eq!(
            triples,
            vec![
                Triple::new(1, 2, 10),
                Triple::new(2, 3, 20),
                Triple::new(1, 3, 5),
            ]
        );
    }

    #[test]
    fn triples_may_span_lines() {
        let triples = parse_edge_list("1 2\n10 4\n5 6").unwrap();
        assert_eq!(triples, vec![Triple::new(1, 2, 10), Triple::new(4, 5, 6)]);
    }

    #[test]
    fn empty_input_is_an_empty_graph() {
        assert!(parse_edge_list("").unwrap().is_empty());
        assert!(load_graph("\n \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn non_numeric_token_aborts_load() {
        let err = parse_edge_list("1 2 3\n4 x 6\n7 8 9\n").unwrap_err();
        match err {
            LoadError::InvalidToken { line, index, token } => {
                assert_eq!(line, 2);
                assert_eq!(index, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_number_is_invalid() {
        let err = parse_edge_list("1 -2 3").unwrap_err();
        assert!(matches!(err, LoadError::InvalidToken { index: 2, .. }));
    }

    #[test]
    fn vertex_overflow_is_invalid() {
        let err = parse_edge_list("4294967296 1 1").unwrap_err();
        assert!(matches!(err, LoadError::InvalidToken { line: 1, index: 1, .. }));
        assert!(parse_edge_list("4294967295 1 1").is_ok());
    }

    #[test]
    fn weight_above_255_rejected() {
        let err = parse_edge_list("1 2 255\n1 3 256\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::WeightOutOfRange {
                line: 2,
                weight: 256
            }
        ));
    }

    #[test]
    fn trailing_partial_triple_rejected() {
        let err = parse_edge_list("1 2 3\n4 5\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::IncompleteTriple { line: 2, found: 2 }
        ));
    }

    #[test]
    fn load_builds_symmetric_graph() {
        let graph = load_graph("1 2 10\n2 3 20\n1 3 5\n").unwrap();
        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.degree(2), 2);
        assert_eq!(graph.degree(3), 2);
    }

    #[test]
    fn read_graph_from_reader() {
        let mut input = "5 5 9\n".as_bytes();
        let graph = read_graph(&mut input).unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.degree(5), 1);
    }

    #[test]
    fn read_graph_rejects_invalid_utf8() {
        let mut input: &[u8] = &[0xff, 0xfe, b' ', b'1'];
        let err = read_graph(&mut input).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
