use clap::Parser;
use pctrip_cli::{run, Cli};
use pctrip_ga::{GaConfig, Strategy};
use serde_json::{json, Value};
use std::fs;

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("run.json");
    fs::write(&config_path, r#"{ "generations": 3, "seed": 11, "population_size": 30 }"#).unwrap();

    let cli = Cli::try_parse_from([
        "pctrip",
        "--config",
        config_path.to_str().unwrap(),
        "--seed",
        "12",
        "--strategy",
        "connected",
    ])
    .unwrap();
    let config = cli.ga_config().unwrap();

    assert_eq!(
        config,
        GaConfig {
            generations: 3,
            seed: 12,
            population_size: 30,
            strategy: Strategy::Connected,
            ..GaConfig::default()
        }
    );
}

#[test]
fn runs_on_a_graph_file_and_writes_statistics() {
    let dir = tempfile::tempdir().unwrap();
    let graph_path = dir.path().join("graph.json");
    let stats_path = dir.path().join("stats.json");
    fs::write(
        &graph_path,
        json!({
            "cities": [
                { "name": "Base", "reward": 0, "base": true },
                { "name": "A", "reward": 5, "base": false },
                { "name": "B", "reward": 5, "base": false },
                { "name": "C", "reward": 5, "base": false }
            ],
            "connections": [
                { "from": "Base", "to": "A", "cost": 1 },
                { "from": "Base", "to": "B", "cost": 1 },
                { "from": "Base", "to": "C", "cost": 1 },
                { "from": "A", "to": "B", "cost": 1 },
                { "from": "A", "to": "C", "cost": 1 },
                { "from": "B", "to": "C", "cost": 1 }
            ]
        })
        .to_string(),
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "pctrip",
        "--graph",
        graph_path.to_str().unwrap(),
        "--trip-length",
        "5",
        "--population",
        "60",
        "--generations",
        "30",
        "--stats-out",
        stats_path.to_str().unwrap(),
        "--no-chart",
    ])
    .unwrap();
    let outcome = run(&cli).unwrap();

    let best = outcome.best.unwrap();
    assert!(best.feasible);
    assert_eq!(best.fitness, 11.0);

    let stats: Value = serde_json::from_str(&fs::read_to_string(&stats_path).unwrap()).unwrap();
    let records = stats.as_array().unwrap();
    assert_eq!(records.len(), 31);
    assert_eq!(records[30]["gen"], 30);
}

#[test]
fn uses_bundled_graph_by_default() {
    let cli = Cli::try_parse_from([
        "pctrip",
        "--generations",
        "2",
        "--population",
        "50",
        "--no-chart",
    ])
    .unwrap();
    let outcome = run(&cli).unwrap();
    assert_eq!(outcome.graph.num_cities(), 9);
    assert_eq!(outcome.graph.name(outcome.graph.base()), "Madrid");
    assert_eq!(outcome.result.logbook.len(), 3);
}

#[test]
fn reports_missing_base() {
    let dir = tempfile::tempdir().unwrap();
    let graph_path = dir.path().join("graph.json");
    fs::write(&graph_path, r#"{ "cities": [ { "name": "A", "reward": 1 } ] }"#).unwrap();

    let graph_arg = graph_path.to_str().unwrap();
    let cli = Cli::try_parse_from(["pctrip", "--graph", graph_arg, "--no-chart"]).unwrap();
    let err = run(&cli).err().unwrap();
    assert!(err.to_string().contains("base"), "{err:#}");
}

#[test]
fn rejects_trip_longer_than_uniform_sample() {
    let cli = Cli::try_parse_from(["pctrip", "--trip-length", "20", "--no-chart"]).unwrap();
    let err = run(&cli).err().unwrap();
    assert!(format!("{err:#}").contains("distinct cities"), "{err:#}");
}

#[test]
fn chart_failure_names_the_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let chart_path = dir.path().join("missing").join("evolution.png");
    let chart_arg = chart_path.to_str().unwrap();

    let cli = Cli::try_parse_from([
        "pctrip",
        "--generations",
        "1",
        "--population",
        "20",
        "--chart",
        chart_arg,
    ])
    .unwrap();
    let err = run(&cli).err().unwrap();
    let message = format!("{err:#}");
    assert!(message.starts_with("failed to render"), "{message}");
    assert!(message.contains(chart_arg), "{message}");
    assert!(!chart_path.exists());
}
