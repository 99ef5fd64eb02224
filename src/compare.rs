//! 同じグラフに対するPrim法とKruskal法の結果の突き合わせ

use super::graph::{Edge, Graph};
use super::kruskal::kruskal;
use super::prim::prim;
use super::result::MstResult;
use super::unionfind::DisjointSet;

/// 1つのグラフについて両方のアルゴリズムを走らせた結果
#[derive(Clone, Debug)]
pub struct Comparison {
    pub graph_id: i64,
    pub vertex_count: usize,
    pub edge_count: usize,
    /// 百分率
    pub density: f64,
    pub prim: MstResult,
    pub kruskal: MstResult,
}

impl Comparison {
    /// `graph`に対してPrim法とKruskal法を順に実行する.
    /// 両者のコストが一致しなければエラーログを出す (結果はそのまま返す).
    #[must_use]
    pub fn run(graph: &Graph) -> Self {
        let prim = prim(graph);
        let kruskal = kruskal(graph);
        let comparison = Self {
            graph_id: graph.id(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            density: graph.density(),
            prim,
            kruskal,
        };
        if !comparison.costs_agree() {
            log::error!(
                "graph {}: cost mismatch, prim {} vs kruskal {}",
                comparison.graph_id,
                comparison.prim.total_cost(),
                comparison.kruskal.total_cost()
            );
        }
        comparison
    }

    #[must_use]
    pub fn costs_agree(&self) -> bool {
        self.prim.total_cost() == self.kruskal.total_cost()
    }

    /// Prim / Kruskal の実行時間比. Kruskal側が0なら0.
    #[must_use]
    pub fn time_ratio(&self) -> f64 {
        ratio(self.prim.elapsed_ms(), self.kruskal.elapsed_ms())
    }

    /// Prim / Kruskal の操作回数比. Kruskal側が0なら0.
    #[must_use]
    pub fn operation_ratio(&self) -> f64 {
        ratio(
            self.prim.operation_count() as f64,
            self.kruskal.operation_count() as f64,
        )
    }
}

pub(crate) fn ratio(a: f64, b: f64) -> f64 {
    if b > 0.0 {
        a / b
    } else {
        0.0
    }
}

/// 辺集合が閉路を含まないかどうか調べる.
///
/// # Constraints
///
/// - 全ての辺について `from < n` かつ `to < n`
///
/// # Time complexity
///
/// - *O*(*E* α(*n*))
#[must_use]
pub fn is_acyclic(edges: &[Edge], n: usize) -> bool {
    let mut uf = DisjointSet::new(n);
    edges.iter().all(|e| {
        if uf.same(e.from, e.to) {
            false
        } else {
            uf.union(e.from, e.to);
            true
        }
    })
}

/// 辺集合が`n`頂点全てを1つに繋いでいるかどうか調べる.
/// 頂点数が1以下なら常に真.
#[must_use]
pub fn spans(edges: &[Edge], n: usize) -> bool {
    let mut uf = DisjointSet::new(n);
    for e in edges {
        uf.union(e.from, e.to);
    }
    uf.count() <= 1
}

/// グラフの連結成分数を返す.
#[must_use]
pub fn component_count(graph: &Graph) -> usize {
    let mut uf = DisjointSet::new(graph.vertex_count());
    for e in graph.edges() {
        uf.union(e.from, e.to);
    }
    uf.count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(names: &[&str], edges: &[(&str, &str, i64)]) -> Graph {
        Graph::from_names(
            1,
            names.iter().map(|s| s.to_string()),
            edges.iter().copied(),
        )
        .unwrap()
    }

    #[test]
    fn disconnected() {
        let g = graph(
            &["A", "B", "C", "D", "E", "F"],
            &[("A", "B", 1), ("B", "C", 2), ("D", "E", 3), ("E", "F", 4)],
        );
        assert_eq!(component_count(&g), 2);
        let c = Comparison::run(&g);
        assert!(c.costs_agree());
        for r in [&c.prim, &c.kruskal] {
            assert_eq!(r.total_cost(), 10);
            assert_eq!(r.edges().len(), 4);
            assert!(r.edges().len() < g.vertex_count() - 1);
            assert!(is_acyclic(r.edges(), 6));
            assert!(!spans(r.edges(), 6));
        }
    }

    #[test]
    fn cycle() {
        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("D", "A", 1)],
        );
        let c = Comparison::run(&g);
        for r in [&c.prim, &c.kruskal] {
            assert_eq!(r.total_cost(), 3);
            assert_eq!(r.edges().len(), 3);
            assert!(is_acyclic(r.edges(), 4));
            assert!(spans(r.edges(), 4));
        }
    }

    #[test]
    fn acyclic() {
        let tri = [Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(2, 0, 1)];
        assert!(is_acyclic(&tri[..2], 3));
        assert!(!is_acyclic(&tri, 3));
        assert!(!is_acyclic(&[Edge::new(1, 1, 0)], 2));
    }

    #[test]
    fn ratios() {
        assert_eq!(ratio(3.0, 0.0), 0.0);
        assert_eq!(ratio(3.0, 2.0), 1.5);
    }
}
