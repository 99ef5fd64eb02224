use std::collections::BinaryHeap;

use super::graph::Edge;

/// BinaryHeapに辺と挿入順をセットで入れるための型
///
/// 重みが小さいほど, 重みが等しければ先に入れたものほど優先される.
#[derive(Clone, Copy)]
struct FrontierItem(Edge, u64);
impl PartialEq for FrontierItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}
impl PartialOrd for FrontierItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Eq for FrontierItem {}
impl Ord for FrontierItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.0.weight, other.1).cmp(&(self.0.weight, self.1))
    }
}

/// Prim法で使う, 候補の辺を重みの小さい順に取り出す優先度付きキュー
///
/// 取り出した時点で既に両端が訪問済みになっている古い辺も残り続ける (取り出した側で捨てる).
/// 重みが等しい辺は挿入した順に取り出される.
#[derive(Clone, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<FrontierItem>,
    seq: u64,
}

impl PriorityFrontier {
    /// 新しい空の `PriorityFrontier` を作成する.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 辺を追加する.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn push(&mut self, edge: Edge) {
        self.heap.push(FrontierItem(edge, self.seq));
        self.seq += 1;
    }

    /// 最も重みの小さい辺を削除し, その辺を返す.
    /// 空の場合は `None` を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn pop(&mut self) -> Option<Edge> {
        self.heap.pop().map(|FrontierItem(edge, _)| edge)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Extend<Edge> for PriorityFrontier {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        for edge in iter {
            self.push(edge);
        }
    }
}
