/*!
# Algorithm Registry

[`Algorithm`] is the closed set of algorithms that can be requested by name. Each variant knows its
wire name and how to render its result as response payload lines; the framing (`END` line, `ERR`
prefix) is left to the caller.
*/

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use super::*;

/// The algorithm ran to completion but the requested structure does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    /// Carries the reason reported by [`EulerCircuit::euler_feasibility`]
    #[error("{0}")]
    NoEulerCircuit(&'static str),
    #[error("No Hamiltonian cycle")]
    NoHamiltonianCycle,
}

/// Raised when looking up a name that no [`Algorithm`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown algorithm")]
pub struct UnknownAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Euler,
    Mst,
    Scc,
    MaxFlow,
    Hamilton,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Euler,
        Algorithm::Mst,
        Algorithm::Scc,
        Algorithm::MaxFlow,
        Algorithm::Hamilton,
    ];

    /// Returns the name under which the algorithm is requested
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Euler => "EULER",
            Algorithm::Mst => "MST",
            Algorithm::Scc => "SCC",
            Algorithm::MaxFlow => "MAXFLOW",
            Algorithm::Hamilton => "HAMILTON",
        }
    }

    /// Runs the algorithm on `graph` and returns the payload lines of a successful response
    /// (starting with `OK`, without trailing newline).
    pub fn run<G>(&self, graph: &G) -> Result<String, AlgorithmError>
    where
        G: AdjacencyList + AdjacencyTest + NeighborsSlice + GraphEdgeOrder,
    {
        match self {
            Algorithm::Euler => run_euler(graph),
            Algorithm::Mst => Ok(format!("OK MST_WEIGHT {}", graph.mst_weight())),
            Algorithm::Scc => Ok(run_scc(graph)),
            Algorithm::MaxFlow => {
                let flow = if graph.number_of_nodes() < 2 {
                    0
                } else {
                    graph.max_flow(0, graph.number_of_nodes() - 1)
                };
                Ok(format!("OK MAXFLOW {flow}"))
            }
            Algorithm::Hamilton => graph
                .hamiltonian_cycle()
                .map(|cycle| format!("OK HAMILTON {}", cycle.iter().join(" ")))
                .ok_or(AlgorithmError::NoHamiltonianCycle),
        }
    }
}

fn run_euler<G>(graph: &G) -> Result<String, AlgorithmError>
where
    G: AdjacencyList + GraphEdgeOrder,
{
    let feasibility = graph.euler_feasibility();
    if !feasibility.ok {
        return Err(AlgorithmError::NoEulerCircuit(feasibility.reason));
    }

    let circuit = graph.find_circuit();
    if circuit.is_empty() {
        return Ok(String::from("OK CIRCUIT 0"));
    }

    Ok(format!(
        "OK CIRCUIT {}\n{}",
        circuit.len() - 1,
        circuit.iter().join(" ")
    ))
}

fn run_scc<G>(graph: &G) -> String
where
    G: AdjacencyList + NeighborsSlice,
{
    let mut payload = String::from("OK SCC");
    for component in graph.strongly_connected_components() {
        payload.push('\n');
        payload.push_str(&component.iter().join(" "));
    }
    payload
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Names are matched exactly, i.e. case-sensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or(UnknownAlgorithm)
    }
}
