/*!
# Request/Response Protocol

A client sends one request and receives one response. All lines are newline-terminated; a
trailing `\r` is ignored.

```text
Request:  ALG <NAME> RAND <n> <m> <seed>
      or: ALG <NAME> FILE
          <n> <m>
          <u1> <v1>
          ...
          <um> <vm>
          END
Response: <OK ... or ERR <reason>>
          END
```

`<NAME>` is one of the names of [`Algorithm`]. `EULER RAND <n> <m> <seed>` and `EULER FILE` are
accepted as shorthand for the corresponding `ALG EULER` requests.

The request is processed in three steps, and the first failing step determines the response:
1. parse the request line ([`RequestLine::parse`]),
2. build the graph, randomly or from the inline edge list ([`read_inline_graph`]),
3. resolve the algorithm name and run the algorithm.

[`handle_exchange`] runs one exchange over any reader/writer pair, which keeps the protocol
independent of the transport.
*/

mod request;
mod response;

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{algo::*, gens::*, prelude::*};

pub use request::*;
pub use response::*;

/// Everything that turns a request into an `ERR` response.
///
/// The `Display` output of each variant is the reason sent to the client after `ERR `.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("bad request")]
    BadRequest,
    #[error("unknown input mode")]
    UnknownInputMode,
    #[error("RAND usage")]
    RandUsage,
    #[error("bad RAND parameters")]
    BadRandParameters,
    #[error("missing n m")]
    MissingHeader,
    #[error("bad n m")]
    BadHeader,
    #[error("missing edges")]
    MissingEdges,
    #[error("bad edge")]
    BadEdge,
    /// The cause is kept for diagnostics; the client only sees a generic reason
    #[error("invalid/duplicate edge")]
    InvalidEdge(EdgeRejection),
    #[error("expected END")]
    ExpectedEnd,
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
    /// The transport failed; no response can be delivered
    #[error("connection failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the graph of the request and runs the requested algorithm on it.
fn respond<R: BufRead>(request: &RequestLine<'_>, reader: &mut R) -> Result<String, ProtocolError> {
    let graph: AdjArrayUndir = match request.source {
        GraphSource::Random { n, m, seed } => AdjArrayUndir::random_simple(n, m, seed)?,
        GraphSource::Inline => read_inline_graph(reader)?,
    };

    debug!(
        n = graph.number_of_nodes(),
        m = graph.number_of_edges(),
        "graph built"
    );

    let algorithm: Algorithm = request.algorithm.parse()?;
    Ok(algorithm.run(&graph)?)
}

/// Serves a single request read from `reader` and writes the framed response to `writer`.
///
/// Returns `Ok(false)` if the stream ended before a complete request line arrived, in which
/// case nothing is written.
///
/// # Errors
/// Only transport failures are returned as errors; every protocol or algorithm failure is
/// reported to the client as an `ERR` response.
pub fn handle_exchange<R, W>(reader: &mut R, writer: &mut W) -> std::io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    let Some(line) = read_line(reader)? else {
        debug!("stream closed before a request arrived");
        return Ok(false);
    };

    let result = RequestLine::parse(&line).and_then(|request| {
        debug!(algorithm = request.algorithm, source = ?request.source, "request parsed");
        respond(&request, reader)
    });

    match &result {
        Err(ProtocolError::Io(_)) => {}
        Ok(payload) => info!(
            status = payload.lines().next().unwrap_or_default(),
            "request served"
        ),
        Err(err) => info!(reason = %err, detail = ?err, "request rejected"),
    }

    match result {
        Err(ProtocolError::Io(err)) => Err(err),
        result => {
            write_response(writer, &result)?;
            Ok(true)
        }
    }
}
