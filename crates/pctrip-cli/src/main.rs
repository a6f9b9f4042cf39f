use anyhow::Result;
use clap::Parser;
use pctrip_cli::{run, Cli};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let outcome = run(&cli)?;

    if !cli.quiet {
        print!("{}", outcome.result.logbook);
    }

    match (outcome.result.best(), outcome.best) {
        (Some(best), Some(eval)) => {
            println!("Best solution: {:?}", best.route);
            println!("Route: {}", outcome.graph.route_names(&best.route).join(" -> "));
            println!("Best solution fitness: {}", eval.fitness);
            println!(
                "Reward {} | cost {} | {}",
                eval.reward,
                eval.cost,
                if eval.feasible {
                    "feasible".to_string()
                } else {
                    format!("infeasible (penalty {})", eval.penalty)
                }
            );
        }
        _ => println!("No individual was evaluated"),
    }

    Ok(())
}
