//! # EdgeList
//!
//! The EdgeList-Format consists of a header line `n m`, followed by exactly `m` lines `u v`,
//! each representing the undirected edge `{u, v}` with 0-based node ids.
//! Blank lines and lines starting with the comment identifier (`#` by default) may appear
//! anywhere and are skipped.
//!
//! The graph must be simple: an edge line with an out-of-range id, a self-loop or a repeated
//! edge fails the whole read, as do a header with more edges than `n` nodes admit, missing edge
//! lines and any content after the last edge.

use std::{
    fs::File,
    io::{BufRead, Lines},
    path::Path,
};

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphEdgeEditing> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = ContentLines {
            lines: reader.lines(),
            comment_identifier: &self.comment_identifier,
        };

        let header = lines
            .next_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let (n, m) = parse_header(&header)?;

        let mut graph = G::try_new(n).map_err(|_| {
            io_error!(
                ErrorKind::OutOfMemory,
                format!("Not enough memory for {n} nodes")
            )
        })?;
        for i in 0..m {
            let line = lines.next_line()?.ok_or_else(|| {
                io_error!(
                    ErrorKind::InvalidData,
                    format!("Header declares {m} edges, but only {i} were found")
                )
            })?;

            let mut parts = line.split_whitespace();
            let u: Node = parse_next_value!(parts, "Source node");
            let v: Node = parse_next_value!(parts, "Target node");
            raise_error_unless!(
                parts.next().is_none(),
                ErrorKind::InvalidData,
                format!("Trailing tokens in edge line {line:?}")
            );

            if let Some(rejection) = graph.check_edge(u, v) {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Edge ({u},{v}) rejected: {rejection}")
                ));
            }
            graph.add_edge(u, v);
        }

        raise_error_unless!(
            lines.next_line()?.is_none(),
            ErrorKind::InvalidData,
            format!("Unexpected content after the last of {m} edges")
        );

        Ok(graph)
    }
}

/// Parses and validates the header line `n m`
fn parse_header(line: &str) -> Result<(NumNodes, NumEdges)> {
    let mut parts = line.split_whitespace();
    let n: NumNodes = parse_next_value!(parts, "Number of nodes");
    let m: NumEdges = parse_next_value!(parts, "Number of edges");

    raise_error_unless!(
        parts.next().is_none(),
        ErrorKind::InvalidData,
        format!("Trailing tokens in header {line:?}")
    );
    raise_error_unless!(
        m <= max_undirected_edges(n),
        ErrorKind::InvalidData,
        format!(
            "Header declares {m} edges, but {n} nodes admit at most {}",
            max_undirected_edges(n)
        )
    );

    Ok((n, m))
}

/// Iterates over the lines that are neither blank nor comments
struct ContentLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<R: BufRead> ContentLines<'_, R> {
    /// Returns the next content line if it exists or propagates an error
    fn next_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line))
                    if line.trim().is_empty() || line.starts_with(self.comment_identifier) =>
                {
                    continue;
                }
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphEdgeEditing,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

#[cfg(test)]
mod test {
    use std::io::{Cursor, Write};

    use rstest::rstest;

    use super::*;

    fn read(input: &str) -> Result<AdjArrayUndir> {
        AdjArrayUndir::try_read_edge_list(Cursor::new(input))
    }

    #[test]
    fn comments_and_blank_lines() {
        let graph = read("# a triangle\n\n3 3\n0 1\n   \n# middle\n1 2\r\n2 0\n\n").unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(
            graph.ordered_edges(true),
            vec![Edge(0, 1), Edge(0, 2), Edge(1, 2)]
        );
    }

    #[test]
    fn edgeless() {
        let graph = read("4 0\n").unwrap();
        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 0);

        assert_eq!(read("0 0").unwrap().number_of_nodes(), 0);
    }

    #[test]
    fn custom_comment_identifier() {
        let graph: AdjArrayUndir = EdgeListReader::new()
            .comment_identifier("c")
            .try_read_graph(Cursor::new("c comment\n2 1\n0 1\n"))
            .unwrap();
        assert!(graph.has_edge(1, 0));
    }

    #[rstest]
    #[case("", ErrorKind::NotFound)]
    #[case("# only a comment\n", ErrorKind::NotFound)]
    #[case("3\n", ErrorKind::InvalidData)]
    #[case("3 x\n", ErrorKind::InvalidData)]
    #[case("3 1 7\n0 1\n", ErrorKind::InvalidData)]
    #[case("3 4\n0 1\n1 2\n2 0\n0 1\n", ErrorKind::InvalidData)]
    #[case("0 1\n", ErrorKind::InvalidData)]
    #[case("3 2\n0 1\n", ErrorKind::InvalidData)]
    #[case("3 1\n0\n", ErrorKind::InvalidData)]
    #[case("3 1\n0 -1\n", ErrorKind::InvalidData)]
    #[case("3 1\n0 1 2\n", ErrorKind::InvalidData)]
    #[case("3 1\n0 3\n", ErrorKind::InvalidData)]
    #[case("3 1\n1 1\n", ErrorKind::InvalidData)]
    #[case("3 2\n0 1\n1 0\n", ErrorKind::InvalidData)]
    #[case("3 1\n0 1\n1 2\n", ErrorKind::InvalidData)]
    #[case("4000000000 0\n", ErrorKind::OutOfMemory)]
    fn malformed(#[case] input: &str, #[case] kind: ErrorKind) {
        assert_eq!(read(input).unwrap_err().kind(), kind);
    }

    #[test]
    fn rejection_reason_is_reported() {
        let err = read("3 2\n0 1\n1 0\n").unwrap_err();
        assert!(err.to_string().contains("duplicate edge"));

        let err = read("3 1\n2 2\n").unwrap_err();
        assert!(err.to_string().contains("self-loop"));
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "5 4\n0 1\n1 2\n2 3\n3 4").unwrap();
        file.flush().unwrap();

        let graph = AdjArrayUndir::try_read_edge_list_file(file.path()).unwrap();
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.degree_of(4), 1);

        let missing = file.path().with_extension("missing");
        assert_eq!(
            AdjArrayUndir::try_read_edge_list_file(missing)
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound
        );
    }
}
