use std::time::Instant;

use super::graph::Graph;
use super::result::MstResult;
use super::unionfind::DisjointSet;

/// Kruskal法で最小全域木を構築する. 連結でないグラフが与えられた場合は最小全域森 (連結成分数を変えないまま辺のコストの和を最小化したもの) を構築する.
///
/// 辺は重みで安定ソートするので, 重みが等しい辺は入力で先に現れたものが優先される.
///
/// # Time complexity
///
/// - *O*(*E* log *E*)
#[must_use]
pub fn kruskal(graph: &Graph) -> MstResult {
    let timer = Instant::now();
    let n = graph.vertex_count();
    let mut sorted = graph.edges().to_vec();
    sorted.sort_by_key(|e| e.weight);
    let mut ops = sort_credit(sorted.len());

    let mut uf = DisjointSet::new(n);
    ops += n as u64;

    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_cost = 0;
    for edge in sorted {
        ops += 1;
        if n > 0 && edges.len() == n - 1 {
            break;
        }
        let a = uf.find(edge.from);
        let b = uf.find(edge.to);
        ops += 2;
        if a != b {
            edges.push(edge);
            total_cost += edge.weight;
            uf.union(a, b);
            ops += 3;
        }
    }

    log::trace!(
        "kruskal: graph {} -> {} edges, cost {}, {} components, {} ops",
        graph.id(),
        edges.len(),
        total_cost,
        uf.count(),
        ops
    );
    MstResult::new(edges, total_cost, ops, timer.elapsed())
}

/// ソートにかかる手間の見積もり *m* ln *m*
fn sort_credit(m: usize) -> u64 {
    if m < 2 {
        0
    } else {
        let m = m as f64;
        (m * m.ln()) as u64
    }
}
