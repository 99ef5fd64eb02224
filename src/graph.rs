use indexmap::IndexSet;

use crate::error::{Error, Result};

/// 辺の重みの型
pub type Weight = i64;

/// 重み付きの無向辺. 頂点はグラフの頂点列における添字で表す.
///
/// `(from, to, w)` と `(to, from, w)` は同じ辺を表す.
/// 整列や優先度の比較には重みだけを使い, 重みが等しい辺同士は元の順序を保つ.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}

impl Edge {
    #[must_use]
    pub const fn new(from: usize, to: usize, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// 向きを逆にした辺を返す.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    /// 自己ループかどうか
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

/// 頂点の名前と辺の列からなる不変の無向グラフ
///
/// 全ての辺の端点は頂点列に含まれている必要がある.
/// 連結である必要はない.
#[derive(Clone, Debug)]
pub struct Graph {
    id: i64,
    vertices: IndexSet<String>,
    edges: Box<[Edge]>,
}

impl Graph {
    /// 頂点名の列と添字で表した辺の列からグラフを作る.
    ///
    /// # Constraints
    ///
    /// - 頂点名は相異なる
    /// - 全ての辺について `from < vertices.len()` かつ `to < vertices.len()`
    #[must_use]
    pub fn new(id: i64, vertices: impl IntoIterator<Item = String>, edges: Vec<Edge>) -> Self {
        let vertices = vertices.into_iter().collect::<IndexSet<_>>();
        debug_assert!(edges
            .iter()
            .all(|e| e.from < vertices.len() && e.to < vertices.len()));
        Self {
            id,
            vertices,
            edges: edges.into_boxed_slice(),
        }
    }

    /// 名前で表した辺の列からグラフを作る.
    /// 頂点名の重複, 宣言されていない頂点への参照, 負の重みはエラーになる.
    ///
    /// # Time complexity
    ///
    /// - *O*(*V* + *E*)
    pub fn from_names<S: AsRef<str>>(
        id: i64,
        names: impl IntoIterator<Item = String>,
        edges: impl IntoIterator<Item = (S, S, Weight)>,
    ) -> Result<Self> {
        let mut vertices = IndexSet::new();
        for name in names {
            let (_, inserted) = vertices.insert_full(name.clone());
            if !inserted {
                return Err(Error::DuplicateVertex {
                    graph: id,
                    vertex: name,
                });
            }
        }
        let lookup = |name: &str| {
            vertices
                .get_index_of(name)
                .ok_or_else(|| Error::UnknownVertex {
                    graph: id,
                    vertex: name.to_owned(),
                })
        };
        let edges = edges
            .into_iter()
            .map(|(from, to, weight)| {
                let (from, to) = (from.as_ref(), to.as_ref());
                if weight < 0 {
                    return Err(Error::NegativeWeight {
                        graph: id,
                        from: from.to_owned(),
                        to: to.to_owned(),
                        weight,
                    });
                }
                Ok(Edge::new(lookup(from)?, lookup(to)?, weight))
            })
            .collect::<Result<Box<[_]>>>()?;
        Ok(Self {
            id,
            vertices,
            edges,
        })
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 頂点`v`の名前を返す.
    ///
    /// # Constraints
    ///
    /// - `v < self.vertex_count()`
    #[must_use]
    pub fn name(&self, v: usize) -> &str {
        &self.vertices[v]
    }

    /// 頂点名の列を宣言順に返す.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.vertices.iter().map(String::as_str)
    }

    /// 名前が`name`の頂点の添字を返す.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.vertices.get_index_of(name)
    }

    /// 単純グラフとして張れる辺の最大数 *V*(*V*-1)/2 を返す.
    #[must_use]
    pub fn max_edge_count(&self) -> usize {
        let n = self.vertex_count();
        n * n.saturating_sub(1) / 2
    }

    /// 辺の密度を百分率で返す. 頂点が2つ未満なら0.
    #[must_use]
    pub fn density(&self) -> f64 {
        match self.max_edge_count() {
            0 => 0.0,
            max => self.edge_count() as f64 * 100.0 / max as f64,
        }
    }

    /// 隣接リスト表現を作る.
    ///
    /// 各頂点`v`のリストには`v`に接続する全ての辺が入り, どの辺も`from == v`となる向きに揃えられている.
    /// 自己ループは両方向の2本として入る.
    ///
    /// # Time complexity
    ///
    /// - *O*(*V* + *E*)
    #[must_use]
    pub fn adjacency(&self) -> Box<[Vec<Edge>]> {
        let mut adj = (0..self.vertex_count())
            .map(|_| vec![])
            .collect::<Box<[_]>>();
        for &edge in self.edges.iter() {
            adj[edge.from].push(edge);
            adj[edge.to].push(edge.reversed());
        }
        adj
    }
}
