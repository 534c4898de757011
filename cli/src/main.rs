//! Linkpred CLI — top-k link prediction over an edge list file

use anyhow::Context;
use clap::Parser;
use comfy_table::{ContentArrangement, Table};
use linkpred::algo::{DegeneratePolicy, Metric, Representation};
use linkpred::{predict_from_file, PredictionConfig, PredictionReport};
use std::path::PathBuf;
use std::time::Instant;
use tracing::Level;

#[derive(Parser)]
#[command(name = "linkpred", version, about = "Graph top-k link prediction")]
struct Cli {
    /// Path of the edge list text file
    #[arg(short = 'd', long = "dataset")]
    dataset: PathBuf,

    /// Graph representation: AM (adjacency matrix), AL (adjacency list) or CSR
    #[arg(short = 'r', long = "representation")]
    representation: Option<String>,

    /// Similarity metric: neighbors, jaccard or adamic-adar
    #[arg(short = 'm', long = "metric")]
    metric: Option<String>,

    /// Number of top-ranked pairs
    #[arg(short = 'k', long = "top-k")]
    k: Option<usize>,

    /// Worker threads (default: all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Fail on Adamic/Adar common neighbours of degree <= 1 instead of skipping them
    #[arg(long)]
    strict_degenerate: bool,

    /// Add the reverse of every edge record before building the graph
    #[arg(long)]
    symmetrize: bool,

    /// YAML configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table")]
    format: OutputFormat,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() {
    let started = Instant::now();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli, started) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, started: Instant) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;
    let report = predict_from_file(&cli.dataset, &config, started)
        .with_context(|| format!("prediction over {:?} failed", cli.dataset))?;

    match cli.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Csv => print_csv(&report),
        OutputFormat::Table => print_table(&report),
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<PredictionConfig> {
    let mut config = match &cli.config {
        Some(path) => PredictionConfig::from_yaml_file(path)
            .with_context(|| format!("cannot load configuration {:?}", path))?,
        None => PredictionConfig::default(),
    };

    if let Some(r) = &cli.representation {
        config.representation = r.parse::<Representation>()?;
    }
    if let Some(m) = &cli.metric {
        config.metric = m.parse::<Metric>()?;
    }
    if let Some(k) = cli.k {
        config.k = k;
    }
    if cli.threads.is_some() {
        config.threads = cli.threads;
    }
    if cli.strict_degenerate {
        config.degenerate = DegeneratePolicy::Fail;
    }
    if cli.symmetrize {
        config.symmetrize = true;
    }

    config.validate()?;
    Ok(config)
}

fn print_table(report: &PredictionReport) {
    let config = &report.config;
    println!(
        "Representation={}, Metric={}, k={}\n",
        config.representation, config.metric, config.k
    );
    println!(
        "Graph: {} vertices, {} edges ({} candidate pairs scored)",
        report.graph.vertices, report.graph.edges, report.stats.candidates
    );
    println!("Top-k Results:");

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Score", "Edge"]);
    for (rank, slot) in report.ranking.slots().enumerate() {
        match slot {
            Some(entry) => table.add_row(vec![
                (rank + 1).to_string(),
                format_score(config.metric, entry.score),
                entry.pair.to_string(),
            ]),
            None => table.add_row(vec![(rank + 1).to_string(), "-".to_string(), "-".to_string()]),
        };
    }
    println!("{}", table);

    println!(
        "\nFinished in {:.3} seconds.",
        report.elapsed.as_secs_f64()
    );
}

fn print_csv(report: &PredictionReport) {
    println!("rank,score,source,target");
    for (rank, slot) in report.ranking.slots().enumerate() {
        match slot {
            Some(entry) => println!(
                "{},{},{},{}",
                rank + 1,
                entry.score,
                entry.pair.low,
                entry.pair.high
            ),
            None => println!("{},,,", rank + 1),
        }
    }
}

fn format_score(metric: Metric, score: f64) -> String {
    match metric {
        Metric::CommonNeighbors => format!("{}", score as u64),
        _ => format!("{:.6}", score),
    }
}
