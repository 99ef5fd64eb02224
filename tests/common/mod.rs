//! テスト用のランダムなグラフの生成
#![allow(dead_code)]

use std::collections::HashSet;

use mstcompare::{Edge, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 重みが1以上100以下の, `n`頂点の連結なグラフを作る.
/// まずランダムな全域木を作り, 辺の密度が`density`になるまで重複しない辺を加える.
pub fn connected_graph(n: usize, density: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = vec![];
    let mut added = HashSet::new();

    let mut connected = vec![0];
    let mut unconnected = (1..n).collect::<Vec<_>>();
    while !unconnected.is_empty() {
        let from = connected[rng.random_range(0..connected.len())];
        let to = unconnected.swap_remove(rng.random_range(0..unconnected.len()));
        edges.push(Edge::new(from, to, rng.random_range(1..=100)));
        added.insert((from.min(to), from.max(to)));
        connected.push(to);
    }

    let max = n * n.saturating_sub(1) / 2;
    let target = ((max as f64 * density) as usize).max(n.saturating_sub(1));
    while edges.len() < target.min(max) {
        let from = rng.random_range(0..n);
        let to = rng.random_range(0..n);
        if from != to && added.insert((from.min(to), from.max(to))) {
            edges.push(Edge::new(from, to, rng.random_range(1..=100)));
        }
    }

    Graph::new(1, (0..n).map(|i| format!("V{i}")), edges)
}

/// `connected_graph`で作った2つのグラフを繋がないまま並べる.
pub fn two_components(n: usize, m: usize, density: f64, seed: u64) -> Graph {
    let a = connected_graph(n, density, seed);
    let b = connected_graph(m, density, seed + 1);
    let edges = a
        .edges()
        .iter()
        .copied()
        .chain(b.edges().iter().map(|e| Edge::new(e.from + n, e.to + n, e.weight)))
        .collect();
    Graph::new(2, (0..n + m).map(|i| format!("V{i}")), edges)
}
