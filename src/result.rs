use std::time::Duration;

use super::graph::{Edge, Weight};

/// 最小全域木 (森) を求めた結果
///
/// PrimとKruskalで共通の形をしており, 比較の為に操作回数と実行時間も持つ.
#[derive(Clone, Debug)]
pub struct MstResult {
    edges: Vec<Edge>,
    total_cost: Weight,
    operation_count: u64,
    elapsed: Duration,
}

impl MstResult {
    #[must_use]
    pub fn new(
        edges: Vec<Edge>,
        total_cost: Weight,
        operation_count: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            edges,
            total_cost,
            operation_count,
            elapsed,
        }
    }

    /// 選ばれた辺を選ばれた順に返す.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn total_cost(&self) -> Weight {
        self.total_cost
    }

    /// 比較用の大まかな操作回数. 値そのものに意味は無く, 同じ入力に対しては常に同じ値になる.
    #[must_use]
    pub fn operation_count(&self) -> u64 {
        self.operation_count
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// 実行時間をミリ秒で返す.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}
