//! コマンドライン引数の解析
//! `mst-compare [INPUT]... -o <DIR> -r <FILE> [--parallel] [--quiet]`

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// 入力ファイルが指定されなかった場合に読むデータセット
pub const DEFAULT_INPUTS: [&str; 5] = [
    "input/ass_3_input.json",
    "input/small_graphs.json",
    "input/medium_graphs.json",
    "input/large_graphs.json",
    "input/extra_large_graphs.json",
];

fn make_options_parser() -> Command {
    Command::new("mst-compare")
        .no_binary_name(true)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare Prim's and Kruskal's minimum spanning tree algorithms")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Input JSON files")
                .num_args(0..)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .help("Directory where result documents and the report are written")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("output"),
        )
        .arg(
            Arg::new("report")
                .short('r')
                .long("report")
                .value_name("FILE")
                .help("File name of the CSV performance report inside the output directory")
                .default_value("performance_comparison.csv"),
        )
        .arg(
            Arg::new("parallel")
                .short('p')
                .long("parallel")
                .help("Solve the graphs of one file on the rayon thread pool")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not print per-graph results")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub report: String,
    pub parallel: bool,
    pub quiet: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            inputs: DEFAULT_INPUTS.iter().map(PathBuf::from).collect(),
            output_dir: PathBuf::from("output"),
            report: "performance_comparison.csv".to_owned(),
            parallel: false,
            quiet: false,
        }
    }
}

impl Options {
    pub fn parse_from_str(s: &str) -> anyhow::Result<Self> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> anyhow::Result<Self> {
        let matches = make_options_parser().try_get_matches_from(flags.iter())?;
        let inputs = match matches.get_many::<PathBuf>("input") {
            Some(paths) => paths.cloned().collect(),
            None => Options::default().inputs,
        };
        let output_dir = matches
            .get_one::<PathBuf>("output-dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from("output"));
        let report = matches
            .get_one::<String>("report")
            .cloned()
            .unwrap_or_else(|| "performance_comparison.csv".to_owned());
        Ok(Options {
            inputs,
            output_dir,
            report,
            parallel: matches.get_flag("parallel"),
            quiet: matches.get_flag("quiet"),
        })
    }

    /// CSVレポートの出力先
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report)
    }
}
