pub type NodeId = u32;

#[derive(Debug)]
pub struct NodeLine {
    pub index: NodeId,
    pub neighbors: Vec<NodeId>,
}

impl NodeLine {
    fn to_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.neighbors.len() + 1);
        parts.push(self.index.to_string());
        for neighbor in &self.neighbors {
            parts.push(neighbor.to_string());
        }
        format!("({})", parts.join(" "))
    }
}

#[derive(Debug)]
pub struct Graph {
    node_count: u32,
    lines: Vec<NodeLine>,
}

impl Graph {
    pub fn new(node_count: u32, lines: Vec<NodeLine>) -> Self {
        Self { node_count, lines }
    }

    pub fn node_count(&self) -> u32 {
        self.node_count
    }

    pub fn lines(&self) -> &[NodeLine] {
        &self.lines
    }

    pub fn to_text(&self) -> String {
        let mut out = Vec::with_capacity(self.lines.len() + 3);
        out.push("(".to_string());
        out.push(self.node_count.to_string());
        for line in &self.lines {
            out.push(line.to_text());
        }
        out.push(")".to_string());
        out.join("\n")
    }
}
