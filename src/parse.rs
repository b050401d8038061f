use crate::graph::{Graph, NodeId, NodeLine};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("expected {expected}, found '{found}'")]
    Unexpected {
        expected: &'static str,
        found: String,
    },
    #[error("node id {id} out of range for a {node_count}-node graph")]
    NodeOutOfRange { id: NodeId, node_count: u32 },
}

/// Reads a graph back from the parenthesized text listing the generator
/// emits: `(`, the node count, one `(i n1 ... nk)` line per node, `)`.
/// The first integer of each line names the source node, so lines may
/// appear in any order.
pub fn parse(input: &str) -> Result<Graph, ParseError> {
    let mut parser = Parser::new(input);

    parser.expect("(")?;
    let node_count = parser.integer()?;
    let mut lines = Vec::with_capacity(node_count as usize);
    for _ in 0..node_count {
        lines.push(parser.node_line(node_count)?);
    }
    parser.expect(")")?;

    Ok(Graph::new(node_count, lines))
}

struct Parser {
    tokens: Vec<String>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        let spaced = input.replace('(', " ( ").replace(')', " ) ");
        Self {
            tokens: spaced.split_whitespace().map(str::to_string).collect(),
            pos: 0,
        }
    }

    fn next(&mut self) -> Result<String, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(ParseError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn expect(&mut self, expected: &'static str) -> Result<(), ParseError> {
        let token = self.next()?;
        if token == expected {
            Ok(())
        } else {
            Err(ParseError::Unexpected {
                expected,
                found: token,
            })
        }
    }

    fn integer(&mut self) -> Result<u32, ParseError> {
        let token = self.next()?;
        token.parse().map_err(|_| ParseError::Unexpected {
            expected: "an integer",
            found: token,
        })
    }

    fn node_id(&mut self, node_count: u32) -> Result<NodeId, ParseError> {
        let id = self.integer()?;
        if id >= node_count {
            return Err(ParseError::NodeOutOfRange { id, node_count });
        }
        Ok(id)
    }

    fn node_line(&mut self, node_count: u32) -> Result<NodeLine, ParseError> {
        self.expect("(")?;
        let index = self.node_id(node_count)?;
        let mut neighbors = Vec::new();
        while self.peek() != Some(")") {
            neighbors.push(self.node_id(node_count)?);
        }
        self.expect(")")?;

        Ok(NodeLine { index, neighbors })
    }
}
