pub mod args;
pub mod chart;

use anyhow::{Context, Result};
use pctrip_core::{assess, Evaluation, Graph, GraphDescription};
use pctrip_ga::{Evolution, RunResult};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use tracing::info;

pub use args::Cli;

const DEFAULT_GRAPH: &str = include_str!("../../../data/exercise1.json");

/// A finished run plus the breakdown of its best route.
pub struct Outcome {
    pub graph: Graph,
    pub result: RunResult,
    pub best: Option<Evaluation>,
}

pub fn load_graph(cli: &Cli) -> Result<Graph> {
    let desc = match &cli.graph {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open graph {}", path.display()))?;
            GraphDescription::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse graph {}", path.display()))?
        }
        None => {
            GraphDescription::from_json_str(DEFAULT_GRAPH).context("bundled graph is malformed")?
        }
    };
    Ok(Graph::from_description(&desc)?)
}

pub fn run(cli: &Cli) -> Result<Outcome> {
    let graph = load_graph(cli)?;
    let config = cli.ga_config()?;
    info!(cities = graph.num_cities(), base = graph.name(graph.base()), "graph loaded");

    let result = Evolution::new(&graph, config)
        .context("invalid run configuration")?
        .run();

    if let Some(path) = &cli.stats_out {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &result.logbook)
            .with_context(|| format!("failed to write statistics to {}", path.display()))?;
        info!(path = %path.display(), "statistics written");
    }

    if !cli.no_chart {
        chart::plot_evolution(&result.logbook, &cli.chart)
            .with_context(|| format!("failed to render {}", cli.chart.display()))?;
        info!(path = %cli.chart.display(), "chart written");
    }

    let best = result.best().map(|ind| assess(&graph, &ind.route));
    Ok(Outcome {
        graph,
        result,
        best,
    })
}
