use clap::Parser;

/// Emit a random graph as a parenthesized text listing.
#[derive(Parser)]
#[command(name = "randgraph", version)]
pub struct Cli {
    /// Number of nodes in the graph
    pub node_count: u32,

    /// Random neighbors sampled for every node
    pub edges_per_node: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positional_arguments() {
        let cli = Cli::try_parse_from(["randgraph", "100", "3"]).unwrap();

        assert_eq!(100, cli.node_count);
        assert_eq!(3, cli.edges_per_node);
    }

    #[test]
    fn test_missing_argument_is_rejected() {
        assert!(Cli::try_parse_from(["randgraph", "100"]).is_err());
    }

    #[test]
    fn test_non_integer_argument_is_rejected() {
        assert!(Cli::try_parse_from(["randgraph", "100", "many"]).is_err());
    }

    #[test]
    fn test_negative_argument_is_rejected() {
        assert!(Cli::try_parse_from(["randgraph", "-5", "3"]).is_err());
    }
}
