use std::{
    io::{BufRead, BufReader, Write},
    net::{SocketAddr, TcpStream},
    thread,
};

use eulergraphs::{
    gens::*,
    prelude::*,
    server::{Server, ServerConfig},
};

/// Starts a server on an ephemeral port that serves `connections` clients and then stops.
fn spawn_server(connections: usize) -> (SocketAddr, thread::JoinHandle<()>) {
    let server = Server::bind(&ServerConfig::new(0).host("127.0.0.1")).unwrap();
    let addr = server.local_addr().unwrap();
    let handle = thread::spawn(move || server.serve_connections(connections));
    (addr, handle)
}

/// Sends `request` and collects the response lines up to and including `END`.
fn request(addr: SocketAddr, request: &str) -> Vec<String> {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.write_all(request.as_bytes()).unwrap();
    stream.flush().unwrap();

    let mut lines = Vec::new();
    for line in BufReader::new(stream).lines() {
        let line = line.unwrap();
        let done = line == "END";
        lines.push(line);
        if done {
            break;
        }
    }
    lines
}

#[test]
fn random_euler_request_over_tcp() {
    let seed = (0..)
        .find(|&seed| {
            AdjArrayUndir::random_simple(4, 4, seed)
                .unwrap()
                .all_even_degrees()
        })
        .unwrap();

    let (addr, handle) = spawn_server(1);
    let response = request(addr, &format!("ALG EULER RAND 4 4 {seed}\n"));
    handle.join().unwrap();

    assert_eq!(response.len(), 3, "{response:?}");
    assert_eq!(response[0], "OK CIRCUIT 4");
    assert_eq!(response[2], "END");

    let circuit: Vec<Node> = response[1]
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    assert_eq!(circuit.len(), 5);
    assert_eq!(circuit.first(), circuit.last());

    let graph = AdjArrayUndir::random_simple(4, 4, seed).unwrap();
    let mut walked: Vec<Edge> = circuit
        .windows(2)
        .map(|w| Edge(w[0], w[1]).normalized())
        .collect();
    walked.sort_unstable();
    assert_eq!(walked, graph.ordered_edges(true));
}

#[test]
fn clients_are_served_one_after_another() {
    let (addr, handle) = spawn_server(3);

    assert_eq!(
        request(addr, "ALG DIJKSTRA RAND 4 2 1\n"),
        vec!["ERR unknown algorithm", "END"]
    );
    assert_eq!(
        request(addr, "ALG MAXFLOW FILE\n4 4\n0 1\n1 3\n0 2\n2 3\nEND\n"),
        vec!["OK MAXFLOW 2", "END"]
    );
    assert_eq!(
        request(addr, "EULER FILE\n3 2\n0 1\n1 2\nEND\n"),
        vec!["ERR not all degrees even", "END"]
    );

    handle.join().unwrap();
}
