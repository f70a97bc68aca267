//! Shortest-path tests driving decrease-key through index-addressed updates
//!
//! Dijkstra's algorithm needs to lower the tentative distance of a vertex that
//! is already queued. With this heap that is done by scanning for the entry
//! (`iter`/`at`) and replacing it in place with `set`, which is what these
//! tests exercise on both hand-built and random graphs.

use proptest::prelude::*;
use rust_index_heap::Heap;

type Graph = Vec<Vec<(usize, u64)>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    vertex: usize,
    dist: u64,
}

/// Dijkstra with one queue entry per vertex, lowered via `set`
fn dijkstra(graph: &Graph, source: usize) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.len()];
    let mut done = vec![false; graph.len()];
    let mut queue = Heap::new(|a: &Entry, b: &Entry| a.dist < b.dist);

    dist[source] = Some(0);
    queue.push(Entry {
        vertex: source,
        dist: 0,
    });

    while let Ok(Entry { vertex, dist: d }) = queue.pop() {
        done[vertex] = true;
        for &(next, weight) in &graph[vertex] {
            if done[next] {
                continue;
            }
            let candidate = d + weight;
            match dist[next] {
                None => {
                    dist[next] = Some(candidate);
                    queue.push(Entry {
                        vertex: next,
                        dist: candidate,
                    });
                }
                Some(current) if candidate < current => {
                    dist[next] = Some(candidate);
                    let index = queue
                        .iter()
                        .position(|e| e.vertex == next)
                        .expect("queued vertex must be in the heap");
                    let old = queue
                        .set(
                            index,
                            Entry {
                                vertex: next,
                                dist: candidate,
                            },
                        )
                        .unwrap();
                    assert_eq!(old.dist, current);
                }
                Some(_) => {}
            }
        }
    }

    dist
}

/// Same algorithm, but the distance is lowered through `at_mut` + `fix`
fn dijkstra_with_fix(graph: &Graph, source: usize) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.len()];
    let mut queue = Heap::with_capacity(graph.len(), |a: &Entry, b: &Entry| a.dist < b.dist);

    dist[source] = Some(0);
    queue.push(Entry {
        vertex: source,
        dist: 0,
    });

    while let Ok(Entry { vertex, dist: d }) = queue.pop() {
        for &(next, weight) in &graph[vertex] {
            let candidate = d + weight;
            match dist[next] {
                None => {
                    dist[next] = Some(candidate);
                    queue.push(Entry {
                        vertex: next,
                        dist: candidate,
                    });
                }
                Some(current) if candidate < current => {
                    dist[next] = Some(candidate);
                    if let Some(index) = (0..queue.len()).find(|&i| queue[i].vertex == next) {
                        queue.at_mut(index).unwrap().dist = candidate;
                        queue.fix(index).unwrap();
                    }
                }
                Some(_) => {}
            }
        }
    }

    dist
}

/// Reference distances by Bellman-Ford relaxation
fn bellman_ford(graph: &Graph, source: usize) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.len()];
    dist[source] = Some(0);
    for _ in 0..graph.len() {
        let mut changed = false;
        for (u, edges) in graph.iter().enumerate() {
            let Some(du) = dist[u] else { continue };
            for &(v, w) in edges {
                if dist[v].map_or(true, |dv| du + w < dv) {
                    dist[v] = Some(du + w);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

fn graph_from_edges(n: usize, edges: &[(usize, usize, u64)]) -> Graph {
    let mut graph = vec![Vec::new(); n];
    for &(u, v, w) in edges {
        graph[u].push((v, w));
    }
    graph
}

// ============================================================================
// Hand-built graphs
// ============================================================================

#[test]
fn test_single_vertex() {
    let graph = graph_from_edges(1, &[]);
    assert_eq!(dijkstra(&graph, 0), vec![Some(0)]);
}

#[test]
fn test_unreachable_vertex() {
    let graph = graph_from_edges(3, &[(0, 1, 4)]);
    assert_eq!(dijkstra(&graph, 0), vec![Some(0), Some(4), None]);
}

#[test]
fn test_requires_decrease_key() {
    // 0 -> 3 directly costs 100; the detour through 1 and 2 costs 3
    let graph = graph_from_edges(
        4,
        &[(0, 3, 100), (0, 1, 1), (1, 2, 1), (2, 3, 1), (0, 2, 50)],
    );
    let expected = vec![Some(0), Some(1), Some(2), Some(3)];
    assert_eq!(dijkstra(&graph, 0), expected);
    assert_eq!(dijkstra_with_fix(&graph, 0), expected);
}

#[test]
fn test_cycle() {
    let graph = graph_from_edges(3, &[(0, 1, 2), (1, 2, 2), (2, 0, 2), (0, 2, 5)]);
    assert_eq!(dijkstra(&graph, 0), vec![Some(0), Some(2), Some(4)]);
    assert_eq!(dijkstra(&graph, 1), vec![Some(4), Some(0), Some(2)]);
}

#[test]
fn test_zero_weight_edges() {
    let graph = graph_from_edges(4, &[(0, 1, 0), (1, 2, 0), (2, 3, 0), (0, 3, 1)]);
    assert_eq!(dijkstra(&graph, 0), vec![Some(0); 4]);
}

// ============================================================================
// Random graphs
// ============================================================================

fn graph_strategy() -> impl Strategy<Value = Graph> {
    (2usize..30).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0u64..50), 0..(n * 4))
            .prop_map(move |edges| graph_from_edges(n, &edges))
    })
}

proptest! {
    #[test]
    fn test_dijkstra_matches_bellman_ford(graph in graph_strategy()) {
        let expected = bellman_ford(&graph, 0);
        prop_assert_eq!(dijkstra(&graph, 0), expected.clone());
        prop_assert_eq!(dijkstra_with_fix(&graph, 0), expected);
    }
}
