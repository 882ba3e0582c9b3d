/*!
# Strongly Connected Components (Kosaraju)

Every undirected edge is read as two opposite arcs, so the components coincide with the
connected components; the algorithm nonetheless follows the classic two-pass scheme:

1. A depth-first search over all nodes (in ascending order of roots) records finishing times.
2. A second search on the transposed graph, started at unvisited nodes in reverse finishing
   order, discovers one component per root.

Both passes simulate recursion with an explicit call stack, so deep graphs cannot overflow
the native stack. Nodes within a component are reported in discovery order.
*/

use super::*;

#[derive(Debug, Clone, Copy)]
struct StackFrame {
    node: Node,
    cursor: usize,
}

/// Runs a depth-first search from `root`, skipping nodes already marked in `visited`.
/// Newly discovered nodes are appended to `preorder`, finished nodes to `postorder`.
fn depth_first<'a, F>(
    root: Node,
    neighbors: F,
    visited: &mut [bool],
    preorder: &mut Vec<Node>,
    postorder: &mut Vec<Node>,
) where
    F: Fn(Node) -> &'a [Node],
{
    if visited[root as usize] {
        return;
    }

    visited[root as usize] = true;
    preorder.push(root);
    let mut call_stack = vec![StackFrame {
        node: root,
        cursor: 0,
    }];

    'recurse: while let Some(frame) = call_stack.last_mut() {
        let nbs = neighbors(frame.node);
        while frame.cursor < nbs.len() {
            let v = nbs[frame.cursor];
            frame.cursor += 1;

            if !visited[v as usize] {
                visited[v as usize] = true;
                preorder.push(v);
                call_stack.push(StackFrame { node: v, cursor: 0 });
                continue 'recurse;
            }
        }

        postorder.push(frame.node);
        call_stack.pop();
    }
}

pub trait StronglyConnected: AdjacencyList + NeighborsSlice + Sized {
    /// Returns the strongly connected components, ordered by the second Kosaraju pass.
    /// Every node appears in exactly one component; isolated nodes form singletons.
    fn strongly_connected_components(&self) -> Vec<Vec<Node>> {
        let n = self.len();

        let mut visited = vec![false; n];
        let mut finished = Vec::with_capacity(n);
        let mut discovered = Vec::with_capacity(n);
        for u in self.vertices() {
            depth_first(
                u,
                |x| self.as_neighbors_slice(x),
                &mut visited,
                &mut discovered,
                &mut finished,
            );
        }

        let mut transposed: Vec<Vec<Node>> = vec![Vec::new(); n];
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                transposed[v as usize].push(u);
            }
        }

        visited.fill(false);
        let mut components = Vec::new();
        let mut scratch = Vec::new();
        for &u in finished.iter().rev() {
            if visited[u as usize] {
                continue;
            }

            let mut component = Vec::new();
            depth_first(
                u,
                |x| transposed[x as usize].as_slice(),
                &mut visited,
                &mut component,
                &mut scratch,
            );
            scratch.clear();
            components.push(component);
        }

        components
    }
}

impl<G: AdjacencyList + NeighborsSlice + Sized> StronglyConnected for G {}
