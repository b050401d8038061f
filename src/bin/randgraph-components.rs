use randgraph::components::{format_components, strongly_connected_components};
use randgraph::parse::parse;
use std::io::Read;
use std::process;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let graph = parse(&input)?;
    let components = strongly_connected_components(&graph);
    println!("{}", format_components(&components));

    anyhow::Ok(())
}
