//! 入出力とグラフの検証で発生するエラー
use std::path::PathBuf;

use thiserror::Error;

use crate::graph::Weight;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("graph {graph}: vertex {vertex:?} is declared more than once")]
    DuplicateVertex { graph: i64, vertex: String },
    #[error("graph {graph}: edge refers to undeclared vertex {vertex:?}")]
    UnknownVertex { graph: i64, vertex: String },
    #[error("graph {graph}: edge {from:?}-{to:?} has negative weight {weight}")]
    NegativeWeight {
        graph: i64,
        from: String,
        to: String,
        weight: Weight,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
