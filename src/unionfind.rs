/// 素集合データ構造 (経路圧縮とランクによる併合を行う)
///
/// 幾つかのグループのマージとグループの所属判定を高速に行える.
#[derive(Clone)]
pub struct DisjointSet {
    parent: Box<[usize]>,
    rank: Box<[u32]>,
    count: usize,
}

impl DisjointSet {
    /// `n`個の要素があり, それぞれ別のグループに属しているDisjointSetを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n].into_boxed_slice(),
            count: n,
        }
    }

    /// 要素の総数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// 要素が1つも無いかどうか調べる.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 要素の連結成分数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// 代表`a`の木のランクを返す.
    #[must_use]
    pub fn rank(&self, a: usize) -> u32 {
        debug_assert!(a < self.len());
        self.rank[a]
    }

    /// 要素`a`が属するグループと要素`b`が属するグループを1つのグループにマージし, 新しいグループの代表を返す.
    /// 最初から同じグループに属していた場合は, 何もせずにそのグループの代表を返す.
    ///
    /// ランクの低い方の代表を高い方の代表の下に付ける.
    /// ランクが等しければ`b`の代表を`a`の代表の下に付け, `a`の代表のランクを1増やす.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        debug_assert!(a < self.len());
        debug_assert!(b < self.len());
        let a = self.find(a);
        let b = self.find(b);
        if a == b {
            return a;
        }
        self.count -= 1;
        let (root, child) = match self.rank[a].cmp(&self.rank[b]) {
            std::cmp::Ordering::Less => (b, a),
            std::cmp::Ordering::Greater => (a, b),
            std::cmp::Ordering::Equal => {
                self.rank[a] += 1;
                (a, b)
            }
        };
        self.parent[child] = root;
        root
    }

    /// 要素`a`が属するグループの代表を返す.
    /// 辿った経路上の要素は全て代表を直接指すように付け替える.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    #[must_use]
    pub fn find(&mut self, mut a: usize) -> usize {
        debug_assert!(a < self.len());
        let mut b = a;
        while self.parent[b] != b {
            b = self.parent[b];
        }
        while a != b {
            let tmp = self.parent[a];
            self.parent[a] = b;
            a = tmp;
        }
        a
    }

    /// 要素`a`が属するグループの代表を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log(*n*))
    #[must_use]
    pub fn find_imu(&self, mut a: usize) -> usize {
        debug_assert!(a < self.len());
        while self.parent[a] != a {
            a = self.parent[a];
        }
        a
    }

    /// 要素`a`, `b`が同じグループに属するか判定する.
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    pub fn same(&mut self, a: usize, b: usize) -> bool {
        debug_assert!(a < self.len());
        debug_assert!(b < self.len());
        self.find(a) == self.find(b)
    }
}

impl std::fmt::Debug for DisjointSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        struct VecSet(Vec<usize>);
        impl std::fmt::Debug for VecSet {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_set().entries(&self.0).finish()
            }
        }

        let mut q = (0..self.len()).map(|_| vec![]).collect::<Vec<_>>();
        for i in 0..self.len() {
            q[self.find_imu(i)].push(i);
        }
        f.debug_set()
            .entries(q.into_iter().filter(|v| !v.is_empty()).map(VecSet))
            .finish()
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_by_rank() {
        let mut ds = DisjointSet::new(5);
        assert_eq!(ds.union(0, 1), 0);
        assert_eq!(ds.rank(0), 1);
        // ランクの低い2は0の下に付く
        assert_eq!(ds.union(2, 1), 0);
        assert_eq!(ds.rank(0), 1);
        assert_eq!(ds.union(3, 4), 3);
        assert_eq!(ds.union(4, 2), 3);
        assert_eq!(ds.rank(3), 2);
        assert_eq!(ds.count(), 1);
        assert_eq!(ds.union(0, 4), 3);
        assert_eq!(ds.count(), 1);
    }

    #[test]
    fn path_compression() {
        let mut ds = DisjointSet::new(4);
        ds.union(0, 1);
        ds.union(2, 3);
        ds.union(0, 2);
        assert_eq!(ds.find_imu(3), 0);
        assert_eq!(ds.find(3), 0);
        assert_eq!(ds.parent[3], 0);
        assert!(ds.same(1, 3));
    }

    #[test]
    fn debug() {
        let mut ds = DisjointSet::new(4);
        ds.union(0, 2);
        assert_eq!(format!("{ds:?}"), "{{0, 2}, {1}, {3}}");
    }
}
