//! Prim法とKruskal法による最小全域木 (森) の構築と, 両者の性能比較

pub mod compare;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod input;
pub mod kruskal;
pub mod options;
pub mod prim;
pub mod report;
pub mod result;
pub mod runner;
pub mod unionfind;

pub use compare::Comparison;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Weight};
pub use kruskal::kruskal;
pub use prim::{prim, prim_tree};
pub use result::MstResult;
