use crate::graph::{Graph, NodeId};

const UNVISITED: u32 = u32::MAX;

struct Tarjan {
    outgoing: Vec<Vec<NodeId>>,
    index: Vec<u32>,
    link: Vec<u32>,
    on_stack: Vec<bool>,
    stack: Vec<NodeId>,
    next_index: u32,
    components: Vec<Vec<NodeId>>,
}

impl Tarjan {
    fn new(graph: &Graph) -> Self {
        let node_count = graph.node_count() as usize;
        let mut outgoing = vec![Vec::new(); node_count];
        for line in graph.lines() {
            outgoing[line.index as usize].extend_from_slice(&line.neighbors);
        }
        Self {
            outgoing,
            index: vec![UNVISITED; node_count],
            link: vec![0; node_count],
            on_stack: vec![false; node_count],
            stack: Vec::new(),
            next_index: 0,
            components: Vec::new(),
        }
    }

    fn visit(&mut self, u: NodeId) {
        self.index[u as usize] = self.next_index;
        self.link[u as usize] = self.next_index;
        self.next_index += 1;
        self.stack.push(u);
        self.on_stack[u as usize] = true;

        for i in 0..self.outgoing[u as usize].len() {
            let v = self.outgoing[u as usize][i];
            if self.index[v as usize] == UNVISITED {
                self.visit(v);
                self.link[u as usize] = self.link[u as usize].min(self.link[v as usize]);
            } else if self.on_stack[v as usize] {
                // v is still on the stack, so it belongs to the current component
                self.link[u as usize] = self.link[u as usize].min(self.index[v as usize]);
            }
        }

        if self.link[u as usize] == self.index[u as usize] {
            let mut component = Vec::new();
            loop {
                let v = self.stack.pop().unwrap();
                self.on_stack[v as usize] = false;
                component.push(v);
                if v == u {
                    break;
                }
            }
            self.components.push(component);
        }
    }
}

pub fn strongly_connected_components(graph: &Graph) -> Vec<Vec<NodeId>> {
    let mut tarjan = Tarjan::new(graph);
    for u in 0..graph.node_count() {
        if tarjan.index[u as usize] == UNVISITED {
            tarjan.visit(u);
        }
    }

    let mut components = tarjan.components;
    for component in &mut components {
        component.sort_unstable();
    }
    components.sort();
    components
}

pub fn format_components(components: &[Vec<NodeId>]) -> String {
    let rendered = components
        .iter()
        .map(|component| {
            let nodes = component
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{nodes}}}")
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("Components: {{ {rendered} }}")
}
