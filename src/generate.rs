use crate::graph::{Graph, NodeId, NodeLine};
use rand::Rng;
use thiserror::Error;

pub struct GraphSpec {
    pub node_count: u32,
    pub edges_per_node: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error(
        "cannot pick {edges_per_node} neighbor(s) per node in a {node_count}-node graph: \
         no candidate other than the node itself exists"
    )]
    DegenerateInput {
        node_count: u32,
        edges_per_node: u32,
    },
}

pub fn generate<R: Rng>(spec: &GraphSpec, rng: &mut R) -> Result<Graph, GenerateError> {
    // With fewer than two nodes every candidate is a self-loop and the
    // rejection loop below would never terminate.
    if spec.node_count <= 1 && spec.edges_per_node >= 1 {
        return Err(GenerateError::DegenerateInput {
            node_count: spec.node_count,
            edges_per_node: spec.edges_per_node,
        });
    }

    let mut lines = Vec::with_capacity(spec.node_count as usize);
    for index in 0..spec.node_count {
        lines.push(sample_line(index, spec, rng));
    }

    Ok(Graph::new(spec.node_count, lines))
}

fn sample_line<R: Rng>(index: NodeId, spec: &GraphSpec, rng: &mut R) -> NodeLine {
    let mut neighbors = Vec::with_capacity(spec.edges_per_node as usize);
    while neighbors.len() < spec.edges_per_node as usize {
        let candidate = rng.random_range(0..spec.node_count);
        if candidate != index {
            neighbors.push(candidate);
        }
    }

    NodeLine { index, neighbors }
}
