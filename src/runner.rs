//! 入力ファイルを順に処理し, 結果とレポートを書き出す
use std::fs;
use std::path::Path;

use anyhow::Context;
use rayon::prelude::*;

use crate::compare::Comparison;
use crate::graph::Graph;
use crate::input::load_graphs;
use crate::options::Options;
use crate::report::{self, GraphResult, OutputData, PerformanceRecord};

/// データセット名 (入力ファイル名から拡張子を除いたもの)
#[must_use]
pub fn dataset_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_comparison(c: &Comparison) {
    println!("\n--- Graph {} ---", c.graph_id);
    println!(
        "Vertices: {}, Edges: {} (Density: {:.1}%)",
        c.vertex_count, c.edge_count, c.density
    );
    println!(
        "Prim:    cost={:<6} time={:<8.3}ms ops={:<8}",
        c.prim.total_cost(),
        c.prim.elapsed_ms(),
        c.prim.operation_count()
    );
    println!(
        "Kruskal: cost={:<6} time={:<8.3}ms ops={:<8}",
        c.kruskal.total_cost(),
        c.kruskal.elapsed_ms(),
        c.kruskal.operation_count()
    );
    if c.costs_agree() {
        println!("Algorithms agree on MST cost");
    } else {
        println!(
            "COST MISMATCH! Prim: {}, Kruskal: {}",
            c.prim.total_cost(),
            c.kruskal.total_cost()
        );
    }
    println!("Time Ratio (Prim/Kruskal): {:.3}", c.time_ratio());
}

/// 全てのグラフについて両アルゴリズムを実行する. 結果の順序は入力の順序と同じ.
#[must_use]
pub fn compare_all(graphs: &[Graph], parallel: bool) -> Vec<Comparison> {
    if parallel {
        graphs.par_iter().map(Comparison::run).collect()
    } else {
        graphs.iter().map(Comparison::run).collect()
    }
}

/// 1つの入力ファイルを処理し, `<出力先>/<データセット名>_output.json`を書き出して性能比較表の行を返す.
pub fn process_file(path: &Path, options: &Options) -> anyhow::Result<Vec<PerformanceRecord>> {
    let dataset = dataset_label(path);
    let graphs = load_graphs(path)?;
    log::info!("{dataset}: loaded {} graphs", graphs.len());
    if !options.quiet {
        let rule = "=".repeat(80);
        println!("\n{rule}\nProcessing: {}\n{rule}", path.display());
        println!("Loaded {} graphs", graphs.len());
    }

    let comparisons = compare_all(&graphs, options.parallel);
    if !options.quiet {
        comparisons.iter().for_each(print_comparison);
    }

    let results = graphs
        .iter()
        .zip(&comparisons)
        .map(|(g, c)| GraphResult::new(g, c))
        .collect();
    fs::create_dir_all(&options.output_dir)
        .with_context(|| format!("Failed to create {:?}", options.output_dir))?;
    let output = options.output_dir.join(format!("{dataset}_output.json"));
    report::write_output(&output, &OutputData { results })?;
    log::info!("{dataset}: results written to {}", output.display());
    if !options.quiet {
        println!("Results written to: {}", output.display());
    }

    Ok(comparisons
        .iter()
        .map(|c| PerformanceRecord::new(&dataset, c))
        .collect())
}

/// 全ての入力ファイルを処理し, 性能比較CSVと集計表を出力する.
/// 読み込めなかった入力ファイルは飛ばす.
pub fn run(options: &Options) -> anyhow::Result<Vec<PerformanceRecord>> {
    let mut records = vec![];
    for input in &options.inputs {
        match process_file(input, options) {
            Ok(rs) => records.extend(rs),
            Err(e) => log::warn!("Skipping {}: {e:#}", input.display()),
        }
    }

    fs::create_dir_all(&options.output_dir)
        .with_context(|| format!("Failed to create {:?}", options.output_dir))?;
    let report_path = options.report_path();
    report::write_csv_file(&report_path, &records)
        .context("Failed to write the performance report")?;
    log::info!(
        "performance report ({} rows) saved to {}",
        records.len(),
        report_path.display()
    );

    if !options.quiet {
        println!(
            "\nPerformance report saved to: {}",
            report_path.display()
        );
        report::write_summary(std::io::stdout().lock(), &records)?;
    }
    Ok(records)
}
