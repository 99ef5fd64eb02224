use std::time::Instant;

use super::frontier::PriorityFrontier;
use super::graph::{Edge, Graph, Weight};
use super::result::MstResult;

/// Prim法の途中状態 (1回の呼び出しの中だけで使う)
struct Grower {
    adj: Box<[Vec<Edge>]>,
    visited: Box<[bool]>,
    visited_count: usize,
    frontier: PriorityFrontier,
    edges: Vec<Edge>,
    total_cost: Weight,
    ops: u64,
}

impl Grower {
    fn new(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        Self {
            adj: graph.adjacency(),
            visited: vec![false; n].into_boxed_slice(),
            visited_count: 0,
            frontier: PriorityFrontier::new(),
            edges: Vec::with_capacity(n.saturating_sub(1)),
            total_cost: 0,
            ops: 0,
        }
    }

    /// `start`から候補が尽きるか全頂点を訪問するまで木を伸ばす.
    fn grow(&mut self, start: usize) {
        debug_assert!(!self.visited[start]);
        self.visited[start] = true;
        self.visited_count += 1;
        self.ops += 1;
        self.frontier.extend(self.adj[start].iter().copied());
        self.ops += self.adj[start].len() as u64;

        while self.visited_count < self.visited.len() {
            let Some(edge) = self.frontier.pop() else {
                break;
            };
            self.ops += 1;
            let next = match (self.visited[edge.from], self.visited[edge.to]) {
                (true, false) => edge.to,
                (false, true) => edge.from,
                _ => continue,
            };
            self.visited[next] = true;
            self.visited_count += 1;
            self.edges.push(edge);
            self.total_cost += edge.weight;
            self.ops += 3;

            for &e in &self.adj[next] {
                self.ops += 1;
                if !self.visited[e.to] {
                    self.frontier.push(e);
                    self.ops += 1;
                }
            }
        }
    }

    fn finish(self, timer: Instant) -> MstResult {
        MstResult::new(self.edges, self.total_cost, self.ops, timer.elapsed())
    }
}

/// Prim法で最小全域森を構築する.
///
/// 頂点列の先頭の頂点から木を伸ばし, 候補の辺が尽きても未訪問の頂点が残っていれば, 頂点列で最初の未訪問の頂点から次の木を伸ばす.
/// よって連結でないグラフでは各連結成分の最小全域木を合わせたものになり, コストはKruskal法と一致する.
///
/// 候補の辺は取り出すまで捨てず, 取り出した時に両端が訪問済み (または両端が未訪問) なら読み捨てる.
/// 重みが等しい候補は先に候補に入ったものを選ぶ.
///
/// # Time complexity
///
/// - *O*(*V* + *E* log *E*)
#[must_use]
pub fn prim(graph: &Graph) -> MstResult {
    let timer = Instant::now();
    let n = graph.vertex_count();
    if n == 0 {
        return MstResult::new(vec![], 0, 0, timer.elapsed());
    }
    let mut grower = Grower::new(graph);
    let mut trees = 0;
    for v in 0..n {
        if grower.visited_count == n {
            break;
        }
        if !grower.visited[v] {
            grower.grow(v);
            trees += 1;
        }
    }
    log::trace!(
        "prim: graph {} -> {} edges, cost {}, {} trees, {} ops",
        graph.id(),
        grower.edges.len(),
        grower.total_cost,
        trees,
        grower.ops
    );
    grower.finish(timer)
}

/// Prim法で`start`を含む連結成分の最小全域木を構築する.
///
/// 候補の辺が尽きた時点で終了するので, 連結でないグラフでは辺の数が *V*-1 より少なくなる.
///
/// # Constraints
///
/// - `start < graph.vertex_count()`
///
/// # Time complexity
///
/// - *O*(*V* + *E* log *E*)
#[must_use]
pub fn prim_tree(graph: &Graph, start: usize) -> MstResult {
    let timer = Instant::now();
    let mut grower = Grower::new(graph);
    grower.grow(start);
    grower.finish(timer)
}
