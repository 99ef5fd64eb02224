//! 比較結果の出力 (結果JSON, 性能比較CSV, コンソール向けの集計表)
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::compare::{ratio, Comparison};
use crate::error::{Error, Result};
use crate::graph::{Graph, Weight};
use crate::result::MstResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputData {
    pub results: Vec<GraphResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphResult {
    pub graph_id: i64,
    pub input_stats: InputStats,
    pub prim: MstOutput,
    pub kruskal: MstOutput,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InputStats {
    pub vertices: usize,
    pub edges: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MstOutput {
    pub mst_edges: Vec<EdgeOutput>,
    pub total_cost: Weight,
    pub operations_count: u64,
    pub execution_time_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeOutput {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl MstOutput {
    /// 頂点の添字を`graph`の頂点名に戻して出力用の形にする.
    #[must_use]
    pub fn new(graph: &Graph, result: &MstResult) -> Self {
        Self {
            mst_edges: result
                .edges()
                .iter()
                .map(|e| EdgeOutput {
                    from: graph.name(e.from).to_owned(),
                    to: graph.name(e.to).to_owned(),
                    weight: e.weight,
                })
                .collect(),
            total_cost: result.total_cost(),
            operations_count: result.operation_count(),
            execution_time_ms: result.elapsed_ms(),
        }
    }
}

impl GraphResult {
    #[must_use]
    pub fn new(graph: &Graph, comparison: &Comparison) -> Self {
        Self {
            graph_id: comparison.graph_id,
            input_stats: InputStats {
                vertices: comparison.vertex_count,
                edges: comparison.edge_count,
            },
            prim: MstOutput::new(graph, &comparison.prim),
            kruskal: MstOutput::new(graph, &comparison.kruskal),
        }
    }
}

pub fn write_output<P: AsRef<Path>>(path: P, output: &OutputData) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_owned(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut writer, output).map_err(|source| Error::Json {
        path: path.to_owned(),
        source,
    })?;
    writeln!(writer).map_err(io_err)?;
    writer.flush().map_err(io_err)
}

/// 性能比較表の1行
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceRecord {
    pub dataset: String,
    pub graph_id: i64,
    pub vertices: usize,
    pub edges: usize,
    pub density: f64,
    pub prim_cost: Weight,
    pub kruskal_cost: Weight,
    pub prim_time_ms: f64,
    pub kruskal_time_ms: f64,
    pub prim_operations: u64,
    pub kruskal_operations: u64,
}

impl PerformanceRecord {
    #[must_use]
    pub fn new(dataset: &str, comparison: &Comparison) -> Self {
        Self {
            dataset: dataset.to_owned(),
            graph_id: comparison.graph_id,
            vertices: comparison.vertex_count,
            edges: comparison.edge_count,
            density: comparison.density,
            prim_cost: comparison.prim.total_cost(),
            kruskal_cost: comparison.kruskal.total_cost(),
            prim_time_ms: comparison.prim.elapsed_ms(),
            kruskal_time_ms: comparison.kruskal.elapsed_ms(),
            prim_operations: comparison.prim.operation_count(),
            kruskal_operations: comparison.kruskal.operation_count(),
        }
    }

    #[must_use]
    pub fn time_ratio(&self) -> f64 {
        ratio(self.prim_time_ms, self.kruskal_time_ms)
    }

    #[must_use]
    pub fn operation_ratio(&self) -> f64 {
        ratio(self.prim_operations as f64, self.kruskal_operations as f64)
    }
}

pub const CSV_HEADER: &str = "Dataset,GraphID,Vertices,Edges,Density,Prim_Cost,Kruskal_Cost,Prim_Time_ms,Kruskal_Time_ms,Prim_Operations,Kruskal_Operations,Time_Ratio,Operations_Ratio";

/// 性能比較表をCSVとして書き出す.
pub fn write_csv<W: Write>(mut w: W, records: &[PerformanceRecord]) -> std::io::Result<()> {
    writeln!(w, "{CSV_HEADER}")?;
    for r in records {
        writeln!(
            w,
            "{},{},{},{},{:.1},{},{},{:.3},{:.3},{},{},{:.3},{:.3}",
            r.dataset,
            r.graph_id,
            r.vertices,
            r.edges,
            r.density,
            r.prim_cost,
            r.kruskal_cost,
            r.prim_time_ms,
            r.kruskal_time_ms,
            r.prim_operations,
            r.kruskal_operations,
            r.time_ratio(),
            r.operation_ratio()
        )?;
    }
    w.flush()
}

pub fn write_csv_file<P: AsRef<Path>>(path: P, records: &[PerformanceRecord]) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| Error::Io {
        path: path.to_owned(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    write_csv(BufWriter::new(file), records).map_err(io_err)
}

fn mean(it: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = it.len();
    if n == 0 {
        0.0
    } else {
        it.sum::<f64>() / n as f64
    }
}

/// データセットごとの表と平均, 全体の平均と比を書き出す.
pub fn write_summary<W: Write>(mut w: W, records: &[PerformanceRecord]) -> std::io::Result<()> {
    let rule = "=".repeat(100);
    writeln!(w, "\n{rule}")?;
    writeln!(w, "DETAILED PERFORMANCE SUMMARY BY GRAPH SIZE")?;
    writeln!(w, "{rule}")?;

    let mut by_dataset = IndexMap::<&str, Vec<&PerformanceRecord>>::new();
    for r in records {
        by_dataset.entry(r.dataset.as_str()).or_default().push(r);
    }

    for (dataset, rs) in &by_dataset {
        writeln!(w, "\n{} ({} graphs):", dataset.to_uppercase(), rs.len())?;
        writeln!(
            w,
            "GraphID | Vertices | Density% | Prim Time | Kruskal Time | Time Ratio | Prim Ops | Kruskal Ops"
        )?;
        writeln!(
            w,
            "--------|----------|----------|-----------|--------------|------------|----------|------------"
        )?;
        for r in rs {
            writeln!(
                w,
                "{:7} | {:8} | {:8.1} | {:9.3} | {:12.3} | {:10.3} | {:8} | {:10}",
                r.graph_id,
                r.vertices,
                r.density,
                r.prim_time_ms,
                r.kruskal_time_ms,
                r.time_ratio(),
                r.prim_operations,
                r.kruskal_operations
            )?;
        }
        let prim_time = mean(rs.iter().map(|r| r.prim_time_ms));
        let kruskal_time = mean(rs.iter().map(|r| r.kruskal_time_ms));
        writeln!(
            w,
            "AVERAGE | {:8.0} | {:8.1} | {:9.3} | {:12.3} | {:10.3} | {:8.0} | {:10.0}",
            mean(rs.iter().map(|r| r.vertices as f64)),
            mean(rs.iter().map(|r| r.density)),
            prim_time,
            kruskal_time,
            ratio(prim_time, kruskal_time),
            mean(rs.iter().map(|r| r.prim_operations as f64)),
            mean(rs.iter().map(|r| r.kruskal_operations as f64))
        )?;
    }

    writeln!(w, "\n{rule}")?;
    writeln!(w, "OVERALL ALGORITHM COMPARISON")?;
    writeln!(w, "{rule}")?;
    let prim_time = mean(records.iter().map(|r| r.prim_time_ms));
    let kruskal_time = mean(records.iter().map(|r| r.kruskal_time_ms));
    let prim_ops = mean(records.iter().map(|r| r.prim_operations as f64));
    let kruskal_ops = mean(records.iter().map(|r| r.kruskal_operations as f64));
    writeln!(
        w,
        "Prim's Algorithm:     Avg Time = {prim_time:.3} ms, Avg Operations = {prim_ops:.0}"
    )?;
    writeln!(
        w,
        "Kruskal's Algorithm:  Avg Time = {kruskal_time:.3} ms, Avg Operations = {kruskal_ops:.0}"
    )?;
    writeln!(
        w,
        "Performance Ratio:    Time = {:.3} (Prim/Kruskal), Operations = {:.3} (Prim/Kruskal)",
        ratio(prim_time, kruskal_time),
        ratio(prim_ops, kruskal_ops)
    )?;
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(dataset: &str, graph_id: i64, prim_ops: u64, kruskal_ops: u64) -> PerformanceRecord {
        PerformanceRecord {
            dataset: dataset.to_owned(),
            graph_id,
            vertices: 4,
            edges: 5,
            density: 83.333,
            prim_cost: 6,
            kruskal_cost: 6,
            prim_time_ms: 0.5,
            kruskal_time_ms: 0.25,
            prim_operations: prim_ops,
            kruskal_operations: kruskal_ops,
        }
    }

    #[test]
    fn csv() {
        let mut out = vec![];
        write_csv(&mut out, &[record("small_graphs", 3, 30, 0)]).unwrap();
        let out = String::from_utf8(out).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("small_graphs,3,4,5,83.3,6,6,0.500,0.250,30,0,2.000,0.000")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn summary() {
        let mut out = vec![];
        write_summary(
            &mut out,
            &[
                record("medium", 1, 40, 20),
                record("small", 2, 10, 10),
                record("medium", 3, 20, 20),
            ],
        )
        .unwrap();
        let out = String::from_utf8(out).unwrap();
        let medium = out.find("MEDIUM (2 graphs):").unwrap();
        let small = out.find("SMALL (1 graphs):").unwrap();
        assert!(medium < small);
        assert!(out.contains("Avg Operations = 23"));
        assert!(out.contains("Time = 2.000 (Prim/Kruskal), Operations = 1.400 (Prim/Kruskal)"));
    }

    #[test]
    fn output_json() {
        let g = Graph::from_names(
            9,
            ["A", "B"].map(String::from),
            [("B", "A", 3)],
        )
        .unwrap();
        let c = Comparison::run(&g);
        let json = serde_json::to_value(OutputData {
            results: vec![GraphResult::new(&g, &c)],
        })
        .unwrap();
        let result = &json["results"][0];
        assert_eq!(result["graph_id"], 9);
        assert_eq!(result["input_stats"]["vertices"], 2);
        assert_eq!(result["kruskal"]["mst_edges"][0]["from"], "B");
        assert_eq!(result["prim"]["mst_edges"][0]["from"], "A");
        assert_eq!(result["prim"]["total_cost"], 3);
        assert!(result["prim"]["execution_time_ms"].as_f64().unwrap() >= 0.0);
    }
}
