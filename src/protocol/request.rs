use smallvec::SmallVec;

use super::*;

/// Where the graph of a request comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphSource {
    /// `RAND <n> <m> <seed>`: a uniformly random simple graph
    Random {
        n: NumNodes,
        m: NumEdges,
        seed: u64,
    },
    /// `FILE`: the graph follows inline as header, edge lines and a closing `END`
    Inline,
}

/// The first line of a request.
///
/// The algorithm name is kept verbatim; it is only resolved after the graph has been read so
/// that graph errors take precedence over an unknown name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine<'a> {
    pub algorithm: &'a str,
    pub source: GraphSource,
}

type Tokens<'a> = SmallVec<[&'a str; 6]>;

impl<'a> RequestLine<'a> {
    /// Parses `ALG <NAME> RAND <n> <m> <seed>`, `ALG <NAME> FILE`, or the Euler-only shorthand
    /// `EULER RAND <n> <m> <seed>` / `EULER FILE`.
    pub fn parse(line: &'a str) -> Result<Self, ProtocolError> {
        let tokens: Tokens = line.split_whitespace().collect();

        let (algorithm, mode) = match tokens.as_slice() {
            ["ALG", algorithm, rest @ ..] if !rest.is_empty() => (*algorithm, rest),
            ["EULER", rest @ ..] if !rest.is_empty() => (Algorithm::Euler.name(), rest),
            _ => return Err(ProtocolError::BadRequest),
        };

        let source = match mode {
            ["RAND", params @ ..] => {
                let [n, m, seed] = params else {
                    return Err(ProtocolError::RandUsage);
                };
                GraphSource::Random {
                    n: n.parse().map_err(|_| ProtocolError::BadRandParameters)?,
                    m: m.parse().map_err(|_| ProtocolError::BadRandParameters)?,
                    seed: seed.parse().map_err(|_| ProtocolError::BadRandParameters)?,
                }
            }
            ["FILE", ..] => GraphSource::Inline,
            _ => return Err(ProtocolError::UnknownInputMode),
        };

        Ok(Self { algorithm, source })
    }
}

/// Reads one newline-terminated line, strips the line terminator (including a trailing `\r`)
/// and decodes it lossily. Returns `None` if the stream ends before a newline.
pub fn read_line<R: BufRead>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut buffer = Vec::new();
    reader.read_until(b'\n', &mut buffer)?;
    if buffer.pop() != Some(b'\n') {
        return Ok(None);
    }
    if buffer.last() == Some(&b'\r') {
        buffer.pop();
    }

    Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
}

/// Parses a line consisting of exactly two whitespace separated values.
fn parse_pair<A: FromStr, B: FromStr>(line: &str) -> Option<(A, B)> {
    let tokens: Tokens = line.split_whitespace().collect();
    let [a, b] = tokens.as_slice() else {
        return None;
    };
    Some((a.parse().ok()?, b.parse().ok()?))
}

/// Reads the inline graph of a `FILE` request: a line `n m`, exactly `m` edge lines `u v` and a
/// closing line `END`. The first violation aborts the read.
pub fn read_inline_graph<G, R>(reader: &mut R) -> Result<G, ProtocolError>
where
    G: GraphEdgeEditing,
    R: BufRead,
{
    let header = read_line(reader)?.ok_or(ProtocolError::MissingHeader)?;
    let (n, m): (NumNodes, NumEdges) = parse_pair(&header).ok_or(ProtocolError::BadHeader)?;
    if m > max_undirected_edges(n) {
        return Err(GeneratorError::TOO_MANY_EDGES.into());
    }

    let mut graph = G::try_new(n).map_err(GeneratorError::from)?;
    for _ in 0..m {
        let line = read_line(reader)?.ok_or(ProtocolError::MissingEdges)?;
        let (u, v): (Node, Node) = parse_pair(&line).ok_or(ProtocolError::BadEdge)?;
        if let Some(rejection) = graph.check_edge(u, v) {
            return Err(ProtocolError::InvalidEdge(rejection));
        }
        graph.add_edge(u, v);
    }

    match read_line(reader)? {
        Some(line) if line == "END" => Ok(graph),
        _ => Err(ProtocolError::ExpectedEnd),
    }
}
