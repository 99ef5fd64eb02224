//! 入力JSONの読み込み
//!
//! ```json
//! { "graphs": [ { "id": 1, "nodes": ["A", "B"], "edges": [ { "from": "A", "to": "B", "weight": 4 } ] } ] }
//! ```
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Graph, Weight};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputData {
    pub graphs: Vec<GraphInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphInput {
    pub id: i64,
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeInput {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl GraphInput {
    /// 頂点名の重複, 宣言されていない頂点, 負の重みを検査してグラフに変換する.
    pub fn into_graph(self) -> Result<Graph> {
        Graph::from_names(
            self.id,
            self.nodes,
            self.edges.into_iter().map(|e| (e.from, e.to, e.weight)),
        )
    }
}

impl InputData {
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn into_graphs(self) -> Result<Vec<Graph>> {
        self.graphs.into_iter().map(GraphInput::into_graph).collect()
    }
}

pub fn read_input<P: AsRef<Path>>(path: P) -> Result<InputData> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Json {
        path: path.to_owned(),
        source,
    })
}

/// ファイルを読み込み, 検査済みのグラフの列を返す.
pub fn load_graphs<P: AsRef<Path>>(path: P) -> Result<Vec<Graph>> {
    let graphs = read_input(&path)?.into_graphs()?;
    log::debug!(
        "loaded {} graphs from {:?}",
        graphs.len(),
        path.as_ref()
    );
    Ok(graphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "graphs": [
            { "id": 1, "nodes": ["A", "B", "C"],
              "edges": [ { "from": "A", "to": "B", "weight": 4 },
                         { "from": "B", "to": "C", "weight": 1 } ] },
            { "id": 2, "nodes": ["X"] }
        ]
    }"#;

    #[test]
    fn parse() {
        let graphs = InputData::from_json_str(SAMPLE)
            .unwrap()
            .into_graphs()
            .unwrap();
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].id(), 1);
        assert_eq!(graphs[0].vertex_count(), 3);
        assert_eq!(graphs[0].edge_count(), 2);
        assert_eq!(graphs[0].edges()[1].weight, 1);
        assert_eq!(graphs[1].edge_count(), 0);
    }

    #[test]
    fn unknown_vertex() {
        let data = InputData::from_json_str(
            r#"{ "graphs": [ { "id": 7, "nodes": ["A"], "edges": [ { "from": "A", "to": "B", "weight": 1 } ] } ] }"#,
        )
        .unwrap();
        assert!(matches!(
            data.into_graphs(),
            Err(Error::UnknownVertex { graph: 7, .. })
        ));
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("mstcompare-no-such-input.json");
        assert!(matches!(load_graphs(&path), Err(Error::Io { .. })));
    }

    #[test]
    fn malformed() {
        let path = std::env::temp_dir().join(format!(
            "mstcompare-malformed-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ \"graphs\": [").unwrap();
        let result = load_graphs(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::Json { .. })));
    }
}
