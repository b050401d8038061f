use clap::Parser;
use randgraph::cli::Cli;
use randgraph::generate::{GraphSpec, generate};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let spec = GraphSpec {
        node_count: cli.node_count,
        edges_per_node: cli.edges_per_node,
    };

    let graph = generate(&spec, &mut rand::rng())?;
    println!("{}", graph.to_text());

    anyhow::Ok(())
}
